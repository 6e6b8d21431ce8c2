//! 双指针模式

/// 升序数组中找出和为目标的两个下标
pub fn two_sum_sorted(nums: &[i64], target: i64) -> Option<(usize, usize)> {
    if nums.len() < 2 {
        return None;
    }
    let mut left = 0;
    let mut right = nums.len() - 1;

    while left < right {
        let sum = nums[left] + nums[right];
        if sum == target {
            return Some((left, right));
        } else if sum < target {
            left += 1;
        } else {
            right -= 1;
        }
    }
    None
}

/// 是否回文，只看字母和数字，忽略大小写
pub fn is_palindrome(input: &str) -> bool {
    let chars: Vec<char> = input
        .chars()
        .filter(|c| c.is_alphanumeric())
        .flat_map(|c| c.to_lowercase())
        .collect();

    if chars.is_empty() {
        return true;
    }
    let mut left = 0;
    let mut right = chars.len() - 1;
    while left < right {
        if chars[left] != chars[right] {
            return false;
        }
        left += 1;
        right -= 1;
    }
    true
}

/// 盛最多水的容器：两条竖线与 x 轴围出的最大面积
pub fn max_area(heights: &[i64]) -> i64 {
    if heights.len() < 2 {
        return 0;
    }
    let mut left = 0;
    let mut right = heights.len() - 1;
    let mut best = 0;

    while left < right {
        let height = heights[left].min(heights[right]);
        best = best.max(height * (right - left) as i64);
        // 移动较矮一侧才可能变大
        if heights[left] < heights[right] {
            left += 1;
        } else {
            right -= 1;
        }
    }
    best
}

/// 所有和为零的不重复三元组，每个三元组内部升序
pub fn three_sum(nums: &[i64]) -> Vec<[i64; 3]> {
    let mut sorted = nums.to_vec();
    sorted.sort_unstable();

    let mut results = Vec::new();
    for i in 0..sorted.len() {
        if sorted[i] > 0 {
            break;
        }
        if i > 0 && sorted[i] == sorted[i - 1] {
            continue;
        }
        let mut left = i + 1;
        let mut right = sorted.len().saturating_sub(1);

        while left < right {
            let sum = sorted[i] + sorted[left] + sorted[right];
            if sum < 0 {
                left += 1;
            } else if sum > 0 {
                right -= 1;
            } else {
                results.push([sorted[i], sorted[left], sorted[right]]);
                // 跳过重复元素
                while left < right && sorted[left] == sorted[left + 1] {
                    left += 1;
                }
                while left < right && sorted[right] == sorted[right - 1] {
                    right -= 1;
                }
                left += 1;
                right -= 1;
            }
        }
    }
    results
}

/// 原地去除有序切片中的重复元素，返回去重后的长度
pub fn remove_duplicates_sorted<T: PartialEq>(items: &mut Vec<T>) -> usize {
    if items.len() < 2 {
        return items.len();
    }
    let mut write = 1;
    for read in 1..items.len() {
        if items[read] != items[write - 1] {
            items.swap(read, write);
            write += 1;
        }
    }
    items.truncate(write);
    write
}

/// 把所有 0 移到末尾，其余元素保持相对顺序
pub fn move_zeroes(nums: &mut [i64]) {
    let mut write = 0;
    for read in 0..nums.len() {
        if nums[read] != 0 {
            nums.swap(read, write);
            write += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_sum_sorted() {
        assert_eq!(two_sum_sorted(&[2, 7, 11, 15], 9), Some((0, 1)));
        assert_eq!(two_sum_sorted(&[1, 3, 5, 8], 13), Some((2, 3)));
        assert_eq!(two_sum_sorted(&[1, 2, 3], 100), None);
        assert_eq!(two_sum_sorted(&[], 0), None);
    }

    #[test]
    fn test_is_palindrome() {
        assert!(is_palindrome("A man, a plan, a canal: Panama"));
        assert!(is_palindrome(""));
        assert!(is_palindrome(".,!"));
        assert!(!is_palindrome("race a car"));
    }

    #[test]
    fn test_max_area() {
        assert_eq!(max_area(&[1, 8, 6, 2, 5, 4, 8, 3, 7]), 49);
        assert_eq!(max_area(&[1, 1]), 1);
        assert_eq!(max_area(&[5]), 0);
    }

    #[test]
    fn test_three_sum() {
        let mut results = three_sum(&[-1, 0, 1, 2, -1, -4]);
        results.sort();
        assert_eq!(results, vec![[-1, -1, 2], [-1, 0, 1]]);

        assert!(three_sum(&[1, 2, 3]).is_empty());
        assert_eq!(three_sum(&[0, 0, 0, 0]), vec![[0, 0, 0]]);
    }

    #[test]
    fn test_remove_duplicates_sorted() {
        let mut data = vec![0, 0, 1, 1, 1, 2, 2, 3, 3, 4];
        assert_eq!(remove_duplicates_sorted(&mut data), 5);
        assert_eq!(data, vec![0, 1, 2, 3, 4]);

        let mut empty: Vec<i32> = vec![];
        assert_eq!(remove_duplicates_sorted(&mut empty), 0);
    }

    #[test]
    fn test_move_zeroes() {
        let mut data = vec![0, 1, 0, 3, 12];
        move_zeroes(&mut data);
        assert_eq!(data, vec![1, 3, 12, 0, 0]);
    }
}
