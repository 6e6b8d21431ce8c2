//! 最小生成树（Kruskal）
//!
//! 每条无向边只收集一次，按权重升序贪心接受连接两个
//! 不同分量的边，用并查集跟踪分量归并。

use crate::graph::Graph;
use crate::metrics::global_metrics;
use crate::structures::DisjointSet;
use crate::types::{VertexKey, Weight};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// 生成树中的一条边
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MstEdge<V> {
    pub from: V,
    pub to: V,
    pub weight: Weight,
}

/// Kruskal 结果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MstResult<V> {
    /// 被接受的边集
    pub edges: Vec<MstEdge<V>>,
    /// 总权重
    pub total_weight: Weight,
    /// 生成森林中的树数量：1 表示输入图连通
    pub components: usize,
}

/// Kruskal 最小生成树
///
/// 要求顶点标签可全序比较（`Ord`）：每条无向边只在
/// `from < to` 的方向上收集一次，这是显式契约而非偶然约束。
/// 面向无向图；接受到 `V-1` 条边后提前结束。
///
/// 非连通图返回生成森林的边集，`components` 字段显式暴露
/// 森林中树的数量，调用方无需自行推断连通性。
pub fn kruskal_mst<V: VertexKey + Ord>(graph: &Graph<V>) -> MstResult<V> {
    let timer = global_metrics().record_run_start();

    // 每条无向边只收集一次
    let mut edges: Vec<MstEdge<V>> = Vec::new();
    for vertex in graph.vertices() {
        for edge in graph.neighbors(vertex) {
            if *vertex < edge.vertex {
                edges.push(MstEdge {
                    from: vertex.clone(),
                    to: edge.vertex.clone(),
                    weight: edge.weight,
                });
            }
        }
    }

    // 稳定排序：同权重边保持收集顺序，结果确定
    edges.sort_by(|a, b| a.weight.total_cmp(&b.weight));

    let mut dsu = DisjointSet::new();
    for vertex in graph.vertices() {
        dsu.make_set(vertex.clone());
    }

    let vertex_count = graph.vertex_count();
    let mut accepted = Vec::new();
    let mut total_weight = 0.0;

    for edge in edges {
        if dsu.union(&edge.from, &edge.to) {
            total_weight += edge.weight;
            accepted.push(edge);
            if vertex_count > 0 && accepted.len() == vertex_count - 1 {
                break;
            }
        }
    }

    let components = vertex_count - accepted.len();
    debug!(
        accepted = accepted.len(),
        total_weight, components, "kruskal completed"
    );
    global_metrics().record_run_complete("kruskal_mst", timer);

    MstResult {
        edges: accepted,
        total_weight,
        components,
    }
}
