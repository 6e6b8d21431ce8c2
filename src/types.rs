//! 通用类型定义

use std::fmt;
use std::hash::Hash;

/// 边权重
pub type Weight = f64;

/// 顶点标签约束
///
/// 顶点是不透明的可哈希标识符，除标签本身外不携带负载；
/// 调用方如需关联元数据，应在外部自行维护。
pub trait VertexKey: Eq + Hash + Clone + fmt::Debug {}

impl<T: Eq + Hash + Clone + fmt::Debug> VertexKey for T {}
