//! 边定义
//!
//! 邻接表中的出边记录：目标顶点 + 权重

use crate::types::Weight;
use serde::{Deserialize, Serialize};

/// 一条出边（有向弧）
///
/// 无向图中每条逻辑边会物化为正反两条权重相同的弧，
/// 该对称性由 [`Graph`](crate::graph::Graph) 在每次变更时维护。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge<V> {
    /// 目标顶点
    pub vertex: V,
    /// 边权重
    pub weight: Weight,
}

impl<V> Edge<V> {
    /// 创建新边
    pub fn new(vertex: V, weight: Weight) -> Self {
        Self { vertex, weight }
    }
}
