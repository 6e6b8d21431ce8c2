//! 哈希计数模式

use indexmap::IndexMap;
use std::collections::{HashMap, HashSet};

/// 字符出现频率统计
pub fn char_frequency(input: &str) -> HashMap<char, usize> {
    let mut counts = HashMap::new();
    for ch in input.chars() {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

/// 无序数组中找出和为目标的两个下标
///
/// 哈希表记录已见值，单趟 O(n)。
pub fn two_sum(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    let mut seen: HashMap<i64, usize> = HashMap::new();
    for (i, &value) in nums.iter().enumerate() {
        if let Some(&j) = seen.get(&(target - value)) {
            return Some((j, i));
        }
        seen.insert(value, i);
    }
    None
}

/// 按变位词分组
///
/// 以排序后的字符序列作为分组键；用 `IndexMap` 保证分组
/// 顺序跟随首次出现顺序，结果确定。
pub fn group_anagrams(words: &[&str]) -> Vec<Vec<String>> {
    let mut groups: IndexMap<String, Vec<String>> = IndexMap::new();
    for word in words {
        let mut key: Vec<char> = word.chars().collect();
        key.sort_unstable();
        groups
            .entry(key.into_iter().collect())
            .or_default()
            .push((*word).to_string());
    }
    groups.into_values().collect()
}

/// 两字符串是否互为变位词
pub fn is_anagram(a: &str, b: &str) -> bool {
    char_frequency(a) == char_frequency(b)
}

/// 首个只出现一次的字符的下标（按字符计）
pub fn first_unique_char(input: &str) -> Option<usize> {
    let counts = char_frequency(input);
    input
        .chars()
        .position(|ch| counts.get(&ch).copied() == Some(1))
}

/// 是否存在重复元素
pub fn contains_duplicate(nums: &[i64]) -> bool {
    let mut seen = HashSet::new();
    nums.iter().any(|value| !seen.insert(value))
}

/// 两数组的交集，去重并升序输出
pub fn intersection(a: &[i64], b: &[i64]) -> Vec<i64> {
    let set_a: HashSet<i64> = a.iter().copied().collect();
    let set_b: HashSet<i64> = b.iter().copied().collect();
    let mut out: Vec<i64> = set_a.intersection(&set_b).copied().collect();
    out.sort_unstable();
    out
}

/// 和为 k 的连续子数组个数
///
/// 前缀和计数：`sum[i..j] == k` 等价于存在前缀和 `sum - k`。
pub fn subarray_sum_count(nums: &[i64], k: i64) -> usize {
    let mut prefix_counts: HashMap<i64, usize> = HashMap::new();
    prefix_counts.insert(0, 1);

    let mut sum = 0;
    let mut total = 0;
    for &value in nums {
        sum += value;
        total += prefix_counts.get(&(sum - k)).copied().unwrap_or(0);
        *prefix_counts.entry(sum).or_insert(0) += 1;
    }
    total
}

/// 出现频率最高的 k 个元素，频率降序、同频率按值升序
pub fn top_k_frequent(nums: &[i64], k: usize) -> Vec<i64> {
    let mut counts: HashMap<i64, usize> = HashMap::new();
    for &value in nums {
        *counts.entry(value).or_insert(0) += 1;
    }

    let mut entries: Vec<(i64, usize)> = counts.into_iter().collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    entries.into_iter().take(k).map(|(value, _)| value).collect()
}
