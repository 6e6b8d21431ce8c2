//! 经典数据结构模块
//!
//! 链表、最小栈、循环队列、LRU 缓存、二叉搜索树和并查集

mod bst;
mod circular_queue;
mod disjoint_set;
mod linked_list;
mod lru_cache;
mod stack;

pub use bst::BinarySearchTree;
pub use circular_queue::CircularQueue;
pub use disjoint_set::DisjointSet;
pub use linked_list::LinkedList;
pub use lru_cache::LruCache;
pub use stack::{daily_temperatures, evaluate_postfix, is_balanced, next_greater_elements, MinStack};
