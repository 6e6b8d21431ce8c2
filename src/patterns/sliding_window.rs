//! 滑动窗口模式

use std::collections::{HashMap, VecDeque};

/// 固定长度为 k 的连续子数组的最大和
///
/// 窗口滑动时增量更新，k 为 0 或超过长度时返回 None。
pub fn max_sum_subarray(nums: &[i64], k: usize) -> Option<i64> {
    if k == 0 || k > nums.len() {
        return None;
    }
    let mut sum: i64 = nums[..k].iter().sum();
    let mut best = sum;
    for i in k..nums.len() {
        sum += nums[i] - nums[i - k];
        best = best.max(sum);
    }
    Some(best)
}

/// 和不小于 target 的最短连续子数组长度，不存在返回 0
///
/// 面向正数数组的可变窗口。
pub fn min_subarray_len(nums: &[i64], target: i64) -> usize {
    let mut best = usize::MAX;
    let mut sum = 0;
    let mut left = 0;

    for right in 0..nums.len() {
        sum += nums[right];
        while sum >= target {
            best = best.min(right - left + 1);
            sum -= nums[left];
            left += 1;
        }
    }

    if best == usize::MAX {
        0
    } else {
        best
    }
}

/// 无重复字符的最长子串长度
pub fn longest_unique_substring(input: &str) -> usize {
    let chars: Vec<char> = input.chars().collect();
    let mut last_seen: HashMap<char, usize> = HashMap::new();
    let mut best = 0;
    let mut left = 0;

    for (right, &ch) in chars.iter().enumerate() {
        if let Some(&seen) = last_seen.get(&ch) {
            if seen >= left {
                left = seen + 1;
            }
        }
        last_seen.insert(ch, right);
        best = best.max(right - left + 1);
    }
    best
}

/// 至多包含 k 种不同字符的最长子串长度
pub fn longest_k_distinct_substring(input: &str, k: usize) -> usize {
    if k == 0 {
        return 0;
    }
    let chars: Vec<char> = input.chars().collect();
    let mut counts: HashMap<char, usize> = HashMap::new();
    let mut best = 0;
    let mut left = 0;

    for (right, &ch) in chars.iter().enumerate() {
        *counts.entry(ch).or_insert(0) += 1;
        while counts.len() > k {
            let leftmost = chars[left];
            if let Some(count) = counts.get_mut(&leftmost) {
                *count -= 1;
                if *count == 0 {
                    counts.remove(&leftmost);
                }
            }
            left += 1;
        }
        best = best.max(right - left + 1);
    }
    best
}

/// 每个长度为 k 的窗口内的最大值
///
/// 单调递减双端队列存下标，队首始终是窗口最大值。
pub fn max_sliding_window(nums: &[i64], k: usize) -> Vec<i64> {
    if k == 0 || k > nums.len() {
        return Vec::new();
    }
    let mut deque: VecDeque<usize> = VecDeque::new();
    let mut out = Vec::with_capacity(nums.len() - k + 1);

    for (i, &value) in nums.iter().enumerate() {
        // 移出滑出窗口的下标
        if let Some(&front) = deque.front() {
            if front + k <= i {
                deque.pop_front();
            }
        }
        // 保持队列递减
        while let Some(&back) = deque.back() {
            if nums[back] >= value {
                break;
            }
            deque.pop_back();
        }
        deque.push_back(i);

        if i + 1 >= k {
            if let Some(&front) = deque.front() {
                out.push(nums[front]);
            }
        }
    }
    out
}

/// 模式串所有变位词在文本中的起始下标（按字符计）
pub fn find_anagrams(text: &str, pattern: &str) -> Vec<usize> {
    let text: Vec<char> = text.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    if pattern.is_empty() || pattern.len() > text.len() {
        return Vec::new();
    }

    let mut need: HashMap<char, i64> = HashMap::new();
    for &ch in &pattern {
        *need.entry(ch).or_insert(0) += 1;
    }

    let mut window: HashMap<char, i64> = HashMap::new();
    let mut out = Vec::new();

    for (i, &ch) in text.iter().enumerate() {
        *window.entry(ch).or_insert(0) += 1;
        if i >= pattern.len() {
            let leftmost = text[i - pattern.len()];
            if let Some(count) = window.get_mut(&leftmost) {
                *count -= 1;
                if *count == 0 {
                    window.remove(&leftmost);
                }
            }
        }
        if i + 1 >= pattern.len() && window == need {
            out.push(i + 1 - pattern.len());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_sum_subarray() {
        assert_eq!(max_sum_subarray(&[2, 1, 5, 1, 3, 2], 3), Some(9));
        assert_eq!(max_sum_subarray(&[-1, -2, -3], 2), Some(-3));
        assert_eq!(max_sum_subarray(&[1, 2], 3), None);
        assert_eq!(max_sum_subarray(&[1, 2], 0), None);
    }

    #[test]
    fn test_min_subarray_len() {
        assert_eq!(min_subarray_len(&[2, 3, 1, 2, 4, 3], 7), 2);
        assert_eq!(min_subarray_len(&[1, 4, 4], 4), 1);
        assert_eq!(min_subarray_len(&[1, 1, 1], 100), 0);
    }

    #[test]
    fn test_longest_unique_substring() {
        assert_eq!(longest_unique_substring("abcabcbb"), 3);
        assert_eq!(longest_unique_substring("bbbbb"), 1);
        assert_eq!(longest_unique_substring("pwwkew"), 3);
        assert_eq!(longest_unique_substring(""), 0);
    }

    #[test]
    fn test_longest_k_distinct() {
        assert_eq!(longest_k_distinct_substring("eceba", 2), 3);
        assert_eq!(longest_k_distinct_substring("aa", 1), 2);
        assert_eq!(longest_k_distinct_substring("abc", 0), 0);
        assert_eq!(longest_k_distinct_substring("abc", 5), 3);
    }

    #[test]
    fn test_max_sliding_window() {
        assert_eq!(
            max_sliding_window(&[1, 3, -1, -3, 5, 3, 6, 7], 3),
            vec![3, 3, 5, 5, 6, 7]
        );
        assert_eq!(max_sliding_window(&[1], 1), vec![1]);
        assert!(max_sliding_window(&[1, 2], 0).is_empty());
    }

    #[test]
    fn test_find_anagrams() {
        assert_eq!(find_anagrams("cbaebabacd", "abc"), vec![0, 6]);
        assert_eq!(find_anagrams("abab", "ab"), vec![0, 1, 2]);
        assert!(find_anagrams("short", "toolong").is_empty());
    }
}
