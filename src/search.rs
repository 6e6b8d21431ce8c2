//! 二分搜索及其变体
//!
//! 统一使用 `[low, high)` 半开区间，循环不变式简单且不会溢出到 -1。

use std::cmp::Ordering;

/// 有序切片中查找目标，返回任意一个匹配位置
pub fn binary_search<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    let mut low = 0;
    let mut high = items.len();

    while low < high {
        let mid = low + (high - low) / 2;
        match items[mid].cmp(target) {
            Ordering::Equal => return Some(mid),
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    None
}

/// 首个匹配位置（最左）
pub fn first_occurrence<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    let mut low = 0;
    let mut high = items.len();
    let mut found = None;

    while low < high {
        let mid = low + (high - low) / 2;
        match items[mid].cmp(target) {
            Ordering::Equal => {
                found = Some(mid);
                high = mid;
            }
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    found
}

/// 末个匹配位置（最右）
pub fn last_occurrence<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    let mut low = 0;
    let mut high = items.len();
    let mut found = None;

    while low < high {
        let mid = low + (high - low) / 2;
        match items[mid].cmp(target) {
            Ordering::Equal => {
                found = Some(mid);
                low = mid + 1;
            }
            Ordering::Less => low = mid + 1,
            Ordering::Greater => high = mid,
        }
    }
    found
}

/// 目标在有序切片中的出现次数
pub fn count_occurrences<T: Ord>(items: &[T], target: &T) -> usize {
    match (first_occurrence(items, target), last_occurrence(items, target)) {
        (Some(first), Some(last)) => last - first + 1,
        _ => 0,
    }
}

/// 旋转有序数组（无重复元素）中查找目标
///
/// 每次二分必有一侧仍然有序，据此裁剪区间。
pub fn search_rotated<T: Ord>(items: &[T], target: &T) -> Option<usize> {
    let mut low = 0;
    let mut high = items.len();

    while low < high {
        let mid = low + (high - low) / 2;
        if items[mid] == *target {
            return Some(mid);
        }

        if items[low] <= items[mid] {
            // 左半有序
            if items[low] <= *target && *target < items[mid] {
                high = mid;
            } else {
                low = mid + 1;
            }
        } else {
            // 右半有序
            if items[mid] < *target && *target <= items[high - 1] {
                low = mid + 1;
            } else {
                high = mid;
            }
        }
    }
    None
}

/// 旋转有序数组（无重复元素）中的最小值下标
pub fn find_min_rotated<T: Ord>(items: &[T]) -> Option<usize> {
    if items.is_empty() {
        return None;
    }
    let mut low = 0;
    let mut high = items.len() - 1;

    while low < high {
        let mid = low + (high - low) / 2;
        if items[mid] > items[high] {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    Some(low)
}

/// 任意一个峰值元素的下标（峰值严格大于相邻元素）
///
/// 沿上坡方向二分，必能停在某个峰上。
pub fn find_peak<T: Ord>(items: &[T]) -> Option<usize> {
    if items.is_empty() {
        return None;
    }
    let mut low = 0;
    let mut high = items.len() - 1;

    while low < high {
        let mid = low + (high - low) / 2;
        if items[mid] < items[mid + 1] {
            low = mid + 1;
        } else {
            high = mid;
        }
    }
    Some(low)
}
