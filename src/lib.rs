//! AlgoKit - 经典算法与数据结构库
//!
//! 纯内存实现的教学算法库，支持：
//! - 邻接表图与经典图算法（遍历、最短路径、环检测、拓扑排序、MST、二分图判定）
//! - 基础数据结构（链表、最小栈、循环队列、LRU 缓存、二叉搜索树、并查集）
//! - 常见编码模式（双指针、滑动窗口、哈希策略、区间处理）
//! - 排序、二分查找与矩阵运算

pub mod algorithm;
pub mod error;
pub mod graph;
pub mod matrix;
pub mod metrics;
pub mod patterns;
pub mod search;
pub mod sort;
pub mod structures;
pub mod types;

// 重导出常用类型
pub use error::{Error, Result};
pub use graph::{Edge, Graph};
pub use types::{VertexKey, Weight};

/// 库版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
