//! 区间处理模式
//!
//! 区间统一表示为 `(start, end)` 闭区间，端点相接视为重叠。

/// 合并所有重叠区间，结果按起点升序
pub fn merge_intervals(intervals: &[(i64, i64)]) -> Vec<(i64, i64)> {
    if intervals.is_empty() {
        return Vec::new();
    }
    let mut sorted = intervals.to_vec();
    sorted.sort_unstable();

    let mut out: Vec<(i64, i64)> = vec![sorted[0]];
    for &(start, end) in &sorted[1..] {
        match out.last_mut() {
            Some(last) if start <= last.1 => {
                last.1 = last.1.max(end);
            }
            _ => out.push((start, end)),
        }
    }
    out
}

/// 向互不重叠的有序区间集插入新区间并合并
pub fn insert_interval(intervals: &[(i64, i64)], new: (i64, i64)) -> Vec<(i64, i64)> {
    let mut all = intervals.to_vec();
    all.push(new);
    merge_intervals(&all)
}

/// 容纳所有会议所需的最少会议室数量
///
/// 起止时间分别排序后扫描；结束时间等于开始时间时可复用房间。
pub fn min_meeting_rooms(meetings: &[(i64, i64)]) -> usize {
    let mut starts: Vec<i64> = meetings.iter().map(|m| m.0).collect();
    let mut ends: Vec<i64> = meetings.iter().map(|m| m.1).collect();
    starts.sort_unstable();
    ends.sort_unstable();

    let mut rooms = 0;
    let mut best = 0;
    let mut end_idx = 0;

    for &start in &starts {
        while end_idx < ends.len() && ends[end_idx] <= start {
            rooms -= 1;
            end_idx += 1;
        }
        rooms += 1;
        best = best.max(rooms);
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_intervals() {
        assert_eq!(
            merge_intervals(&[(1, 3), (2, 6), (8, 10), (15, 18)]),
            vec![(1, 6), (8, 10), (15, 18)]
        );
        // 端点相接视为重叠
        assert_eq!(merge_intervals(&[(1, 4), (4, 5)]), vec![(1, 5)]);
        assert!(merge_intervals(&[]).is_empty());
    }

    #[test]
    fn test_merge_unsorted_input() {
        assert_eq!(
            merge_intervals(&[(8, 10), (1, 3), (2, 6)]),
            vec![(1, 6), (8, 10)]
        );
    }

    #[test]
    fn test_merge_contained() {
        assert_eq!(merge_intervals(&[(1, 10), (2, 3), (4, 5)]), vec![(1, 10)]);
    }

    #[test]
    fn test_insert_interval() {
        assert_eq!(
            insert_interval(&[(1, 3), (6, 9)], (2, 5)),
            vec![(1, 5), (6, 9)]
        );
        assert_eq!(
            insert_interval(&[(1, 2), (3, 5), (6, 7), (8, 10), (12, 16)], (4, 8)),
            vec![(1, 2), (3, 10), (12, 16)]
        );
        assert_eq!(insert_interval(&[], (5, 7)), vec![(5, 7)]);
    }

    #[test]
    fn test_min_meeting_rooms() {
        assert_eq!(min_meeting_rooms(&[(0, 30), (5, 10), (15, 20)]), 2);
        // 结束即开始可复用房间
        assert_eq!(min_meeting_rooms(&[(7, 10), (2, 7)]), 1);
        assert_eq!(min_meeting_rooms(&[]), 0);
    }
}
