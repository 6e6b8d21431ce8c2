//! 单源最短路径（Dijkstra）
//!
//! 假定权重非负，不做校验：负权会静默产生错误结果。
//! 未访问顶点的最小距离选取采用 O(V) 线性扫描，
//! 可观察结果与优先队列实现一致。

use crate::graph::Graph;
use crate::metrics::global_metrics;
use crate::types::{VertexKey, Weight};
use serde::Serialize;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// 单源最短路径结果：距离映射 + 前驱映射
#[derive(Debug, Clone, Serialize)]
pub struct ShortestPaths<V: VertexKey> {
    source: V,
    distances: HashMap<V, Weight>,
    previous: HashMap<V, V>,
}

impl<V: VertexKey> ShortestPaths<V> {
    /// 源顶点
    pub fn source(&self) -> &V {
        &self.source
    }

    /// 到某顶点的最短距离，不可达或未知顶点为正无穷
    pub fn distance(&self, vertex: &V) -> Weight {
        self.distances
            .get(vertex)
            .copied()
            .unwrap_or(f64::INFINITY)
    }

    /// 全部距离映射
    pub fn distances(&self) -> &HashMap<V, Weight> {
        &self.distances
    }

    /// 重构源点到目标的最短路径
    ///
    /// 沿前驱映射从目标回溯到源点后反转；
    /// 目标不可达时返回空序列。
    pub fn path_to(&self, target: &V) -> Vec<V> {
        if !self.distances.contains_key(target) {
            return Vec::new();
        }

        let mut path = Vec::new();
        let mut current = target;
        loop {
            path.push(current.clone());
            match self.previous.get(current) {
                Some(prev) => current = prev,
                None => break,
            }
        }
        path.reverse();

        if path.first() == Some(&self.source) {
            path
        } else {
            Vec::new()
        }
    }
}

/// Dijkstra 单源最短路径
///
/// 反复选取未访问集中暂定距离最小的顶点，松弛其所有出边。
/// 源点不在图中时所有顶点保持不可达。
pub fn dijkstra<V: VertexKey>(graph: &Graph<V>, source: &V) -> ShortestPaths<V> {
    let timer = global_metrics().record_run_start();

    let mut distances: HashMap<V, Weight> = HashMap::new();
    let mut previous: HashMap<V, V> = HashMap::new();
    let mut unvisited: HashSet<V> = HashSet::new();

    for vertex in graph.vertices() {
        let d = if vertex == source { 0.0 } else { f64::INFINITY };
        distances.insert(vertex.clone(), d);
        unvisited.insert(vertex.clone());
    }

    loop {
        // 线性扫描选取距离最小的未访问顶点
        let mut current: Option<V> = None;
        let mut min_distance = f64::INFINITY;
        for vertex in &unvisited {
            let d = distances.get(vertex).copied().unwrap_or(f64::INFINITY);
            if d < min_distance {
                min_distance = d;
                current = Some(vertex.clone());
            }
        }

        // 剩余顶点全部不可达时结束
        let current = match current {
            Some(v) => v,
            None => break,
        };
        unvisited.remove(&current);

        for edge in graph.neighbors(&current) {
            if !unvisited.contains(&edge.vertex) {
                continue;
            }
            let candidate = min_distance + edge.weight;
            let known = distances
                .get(&edge.vertex)
                .copied()
                .unwrap_or(f64::INFINITY);
            if candidate < known {
                distances.insert(edge.vertex.clone(), candidate);
                previous.insert(edge.vertex.clone(), current.clone());
            }
        }
    }

    debug!(
        source = ?source,
        reachable = distances.values().filter(|d| d.is_finite()).count(),
        "dijkstra completed"
    );
    global_metrics().record_run_complete("dijkstra", timer);

    ShortestPaths {
        source: source.clone(),
        distances,
        previous,
    }
}
