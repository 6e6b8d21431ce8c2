//! 图数据结构
//!
//! 基于插入有序邻接表的带权标签图（有向 / 无向）

use super::edge::Edge;
use crate::metrics::global_metrics;
use crate::types::{VertexKey, Weight};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::fmt;
use tracing::trace;

/// 每个顶点的出边序列
type EdgeList<V> = SmallVec<[Edge<V>; 4]>;

/// 邻接表图
///
/// 顶点到出边序列的映射。顶点遍历顺序和每个顶点的出边顺序
/// 均为插入顺序，保证 DFS/BFS 等算法输出确定。
///
/// 所有操作均为全函数：对缺失顶点的查询返回空结果，
/// 对缺失顶点的变更是无操作，不会报错。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Graph<V: VertexKey> {
    /// 邻接表
    adjacency: IndexMap<V, EdgeList<V>>,
    /// 是否有向
    directed: bool,
}

impl<V: VertexKey> Graph<V> {
    /// 创建空的有向图
    pub fn directed() -> Self {
        Self {
            adjacency: IndexMap::new(),
            directed: true,
        }
    }

    /// 创建空的无向图
    pub fn undirected() -> Self {
        Self {
            adjacency: IndexMap::new(),
            directed: false,
        }
    }

    /// 是否有向图
    pub fn is_directed(&self) -> bool {
        self.directed
    }

    // ==================== 顶点操作 ====================

    /// 添加顶点（幂等：已存在时无操作）
    pub fn add_vertex(&mut self, vertex: V) {
        if !self.adjacency.contains_key(&vertex) {
            self.adjacency.insert(vertex, SmallVec::new());
            global_metrics().record_vertex_insert();
        }
    }

    /// 删除顶点，并清除其他顶点指向它的所有弧
    ///
    /// 代价与总边数成正比。顶点缺失时无操作。
    /// 幸存顶点保持原有插入顺序。
    pub fn remove_vertex(&mut self, vertex: &V) {
        if self.adjacency.shift_remove(vertex).is_none() {
            return;
        }
        for (_, edges) in self.adjacency.iter_mut() {
            edges.retain(|e| &e.vertex != vertex);
        }
        trace!(vertex = ?vertex, "removed vertex");
        global_metrics().record_vertex_remove();
    }

    /// 顶点是否存在
    pub fn contains_vertex(&self, vertex: &V) -> bool {
        self.adjacency.contains_key(vertex)
    }

    /// 所有顶点标签（插入顺序）
    pub fn vertices(&self) -> impl Iterator<Item = &V> {
        self.adjacency.keys()
    }

    /// 顶点数量
    pub fn vertex_count(&self) -> usize {
        self.adjacency.len()
    }

    // ==================== 边操作 ====================

    /// 添加权重为 1 的边
    pub fn add_edge(&mut self, v1: V, v2: V) {
        self.add_edge_weighted(v1, v2, 1.0);
    }

    /// 添加带权边，端点缺失时隐式创建
    ///
    /// 无向图同时追加反向弧。平行边和自环均被接受，不做去重；
    /// 这是实现定义行为，不是承诺的契约。
    pub fn add_edge_weighted(&mut self, v1: V, v2: V, weight: Weight) {
        self.add_vertex(v1.clone());
        self.add_vertex(v2.clone());

        if let Some(edges) = self.adjacency.get_mut(&v1) {
            edges.push(Edge::new(v2.clone(), weight));
        }
        if !self.directed {
            if let Some(edges) = self.adjacency.get_mut(&v2) {
                edges.push(Edge::new(v1, weight));
            }
        }
        global_metrics().record_edge_insert();
    }

    /// 删除 v1→v2 的所有弧（过滤式，而非首个匹配）
    ///
    /// 无向图同时删除 v2→v1 的所有弧。顶点缺失时静默无操作。
    pub fn remove_edge(&mut self, v1: &V, v2: &V) {
        if let Some(edges) = self.adjacency.get_mut(v1) {
            edges.retain(|e| &e.vertex != v2);
        }
        if !self.directed {
            if let Some(edges) = self.adjacency.get_mut(v2) {
                edges.retain(|e| &e.vertex != v1);
            }
        }
        global_metrics().record_edge_remove();
    }

    /// 是否存在某条 v1→v2 的弧
    pub fn has_edge(&self, v1: &V, v2: &V) -> bool {
        self.neighbors(v1).iter().any(|e| &e.vertex == v2)
    }

    /// 存储的弧数量（无向图中每条逻辑边计两次）
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(|edges| edges.len()).sum()
    }

    // ==================== 邻居查询 ====================

    /// 顶点的出边序列（插入顺序）
    ///
    /// 顶点未知或孤立时返回空切片，不报错。
    pub fn neighbors(&self, vertex: &V) -> &[Edge<V>] {
        self.adjacency
            .get(vertex)
            .map(|edges| edges.as_slice())
            .unwrap_or(&[])
    }

    /// 顶点的出度
    pub fn out_degree(&self, vertex: &V) -> usize {
        self.neighbors(vertex).len()
    }
}

impl<V: VertexKey> fmt::Display for Graph<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (vertex, edges) in &self.adjacency {
            let rendered: Vec<String> = edges
                .iter()
                .map(|e| {
                    if e.weight == 1.0 {
                        format!("{:?}", e.vertex)
                    } else {
                        format!("{:?}({})", e.vertex, e.weight)
                    }
                })
                .collect();
            writeln!(f, "{:?} -> [{}]", vertex, rendered.join(", "))?;
        }
        Ok(())
    }
}
