//! 常见算法模式
//!
//! 双指针、滑动窗口、哈希计数、区间处理。
//! 按模式分子模块，不在此处平铺重导出。

pub mod hashing;
pub mod intervals;
pub mod sliding_window;
pub mod two_pointers;
