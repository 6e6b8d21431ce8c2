//! 经典排序算法
//!
//! 教学实现；生产代码应使用标准库的 `sort` / `sort_unstable`。
//! 测试中用随机数据与标准库排序交叉验证。

use std::collections::HashMap;
use std::hash::Hash;

/// 冒泡排序 - O(n²)，一轮无交换时提前结束
pub fn bubble_sort<T: Ord>(items: &mut [T]) {
    let len = items.len();
    for pass in 0..len {
        let mut swapped = false;
        for i in 1..len - pass {
            if items[i - 1] > items[i] {
                items.swap(i - 1, i);
                swapped = true;
            }
        }
        if !swapped {
            break;
        }
    }
}

/// 选择排序 - O(n²)
pub fn selection_sort<T: Ord>(items: &mut [T]) {
    for i in 0..items.len() {
        let mut min = i;
        for j in i + 1..items.len() {
            if items[j] < items[min] {
                min = j;
            }
        }
        if min != i {
            items.swap(i, min);
        }
    }
}

/// 插入排序 - O(n²)，近乎有序的输入接近 O(n)
pub fn insertion_sort<T: Ord>(items: &mut [T]) {
    for i in 1..items.len() {
        let mut j = i;
        while j > 0 && items[j - 1] > items[j] {
            items.swap(j - 1, j);
            j -= 1;
        }
    }
}

/// 归并排序 - O(n log n)，稳定，额外 O(n) 空间
pub fn merge_sort<T: Ord + Clone>(items: &[T]) -> Vec<T> {
    if items.len() <= 1 {
        return items.to_vec();
    }
    let mid = items.len() / 2;
    let left = merge_sort(&items[..mid]);
    let right = merge_sort(&items[mid..]);
    merge(left, right)
}

fn merge<T: Ord>(left: Vec<T>, right: Vec<T>) -> Vec<T> {
    let mut out = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();

    loop {
        match (left.peek(), right.peek()) {
            (Some(l), Some(r)) => {
                // <= 保证稳定性
                if l <= r {
                    out.extend(left.next());
                } else {
                    out.extend(right.next());
                }
            }
            (Some(_), None) => out.extend(left.next()),
            (None, Some(_)) => out.extend(right.next()),
            (None, None) => break,
        }
    }
    out
}

/// 快速排序 - 平均 O(n log n)，原地，Lomuto 分区取末元素为基准
pub fn quick_sort<T: Ord>(items: &mut [T]) {
    if items.len() <= 1 {
        return;
    }
    let pivot = partition(items);
    let (left, right) = items.split_at_mut(pivot);
    quick_sort(left);
    quick_sort(&mut right[1..]);
}

fn partition<T: Ord>(items: &mut [T]) -> usize {
    let pivot = items.len() - 1;
    let mut store = 0;
    for i in 0..pivot {
        if items[i] <= items[pivot] {
            items.swap(i, store);
            store += 1;
        }
    }
    items.swap(store, pivot);
    store
}

/// 切片是否非降序
pub fn is_sorted<T: Ord>(items: &[T]) -> bool {
    items.windows(2).all(|pair| pair[0] <= pair[1])
}

/// 按出现频率降序排序，同频率按值升序
pub fn sort_by_frequency<T: Ord + Hash + Clone>(items: &[T]) -> Vec<T> {
    let mut counts: HashMap<&T, usize> = HashMap::new();
    for item in items {
        *counts.entry(item).or_insert(0) += 1;
    }

    let mut out = items.to_vec();
    out.sort_by(|a, b| {
        let freq_a = counts.get(a).copied().unwrap_or(0);
        let freq_b = counts.get(b).copied().unwrap_or(0);
        freq_b.cmp(&freq_a).then_with(|| a.cmp(b))
    });
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    fn random_data(len: usize) -> Vec<i64> {
        let mut rng = rand::thread_rng();
        (0..len).map(|_| rng.gen_range(-1000..1000)).collect()
    }

    #[test]
    fn test_bubble_sort() {
        let mut data = vec![5, 2, 9, 1, 5, 6];
        bubble_sort(&mut data);
        assert_eq!(data, vec![1, 2, 5, 5, 6, 9]);
    }

    #[test]
    fn test_selection_sort() {
        let mut data = vec![64, 25, 12, 22, 11];
        selection_sort(&mut data);
        assert_eq!(data, vec![11, 12, 22, 25, 64]);
    }

    #[test]
    fn test_insertion_sort() {
        let mut data = vec![3, -1, 0, 3, 2];
        insertion_sort(&mut data);
        assert_eq!(data, vec![-1, 0, 2, 3, 3]);
    }

    #[test]
    fn test_merge_sort() {
        let data = vec![38, 27, 43, 3, 9, 82, 10];
        assert_eq!(merge_sort(&data), vec![3, 9, 10, 27, 38, 43, 82]);
    }

    #[test]
    fn test_quick_sort() {
        let mut data = vec![10, 7, 8, 9, 1, 5];
        quick_sort(&mut data);
        assert_eq!(data, vec![1, 5, 7, 8, 9, 10]);
    }

    #[test]
    fn test_edge_cases() {
        let mut empty: Vec<i32> = vec![];
        quick_sort(&mut empty);
        bubble_sort(&mut empty);
        assert!(empty.is_empty());
        assert!(merge_sort(&empty).is_empty());

        let mut single = vec![42];
        insertion_sort(&mut single);
        assert_eq!(single, vec![42]);
    }

    #[test]
    fn test_against_std_sort() {
        // 随机数据与标准库排序交叉验证
        for _ in 0..10 {
            let data = random_data(200);

            let mut expected = data.clone();
            expected.sort();

            let mut a = data.clone();
            bubble_sort(&mut a);
            assert_eq!(a, expected);

            let mut b = data.clone();
            selection_sort(&mut b);
            assert_eq!(b, expected);

            let mut c = data.clone();
            insertion_sort(&mut c);
            assert_eq!(c, expected);

            let mut d = data.clone();
            quick_sort(&mut d);
            assert_eq!(d, expected);

            assert_eq!(merge_sort(&data), expected);
        }
    }

    #[test]
    fn test_is_sorted() {
        assert!(is_sorted(&[1, 2, 2, 3]));
        assert!(is_sorted::<i32>(&[]));
        assert!(!is_sorted(&[2, 1]));
    }

    #[test]
    fn test_sort_by_frequency() {
        let data = vec![4, 6, 2, 2, 6, 4, 4, 4];
        // 4 出现 4 次，2 和 6 各 2 次，同频率按值升序
        assert_eq!(sort_by_frequency(&data), vec![4, 4, 4, 4, 2, 2, 6, 6]);
    }
}
