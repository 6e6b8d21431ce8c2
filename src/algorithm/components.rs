//! 连通分量与二分图判定

use crate::graph::Graph;
use crate::metrics::global_metrics;
use crate::types::VertexKey;
use std::collections::{HashMap, HashSet};

/// 枚举连通分量
///
/// 反复从未访问顶点发起 DFS，每个可达集合为一个分量；
/// 每个顶点恰好出现一次。
///
/// 仅对无向图正确。有向图上只沿存储方向的弧扩展，
/// 得到的既不是强连通分量也不是完整的弱连通分量，
/// 结果依赖顶点迭代顺序。该函数面向无向图使用。
pub fn connected_components<V: VertexKey>(graph: &Graph<V>) -> Vec<Vec<V>> {
    let timer = global_metrics().record_run_start();

    let mut visited: HashSet<V> = HashSet::new();
    let mut components = Vec::new();

    for start in graph.vertices() {
        if visited.contains(start) {
            continue;
        }

        let mut component = Vec::new();
        let mut stack = vec![start.clone()];
        while let Some(vertex) = stack.pop() {
            if !visited.insert(vertex.clone()) {
                continue;
            }
            component.push(vertex.clone());
            for edge in graph.neighbors(&vertex).iter().rev() {
                if !visited.contains(&edge.vertex) {
                    stack.push(edge.vertex.clone());
                }
            }
        }
        components.push(component);
    }

    global_metrics().record_run_complete("connected_components", timer);
    components
}

/// 二分图判定
///
/// 对每个连通分量独立做交替二着色；
/// 任意一条边两端同色即非二分图。
pub fn is_bipartite<V: VertexKey>(graph: &Graph<V>) -> bool {
    let mut color: HashMap<V, u8> = HashMap::new();

    for start in graph.vertices() {
        if color.contains_key(start) {
            continue;
        }

        color.insert(start.clone(), 0);
        let mut stack = vec![start.clone()];
        while let Some(vertex) = stack.pop() {
            let c = color.get(&vertex).copied().unwrap_or(0);
            for edge in graph.neighbors(&vertex) {
                match color.get(&edge.vertex) {
                    None => {
                        color.insert(edge.vertex.clone(), 1 - c);
                        stack.push(edge.vertex.clone());
                    }
                    Some(&neighbor_color) if neighbor_color == c => return false,
                    Some(_) => {}
                }
            }
        }
    }

    true
}
