//! 拓扑排序
//!
//! DFS 后序：顶点在其全部后代访问完毕后压入输出栈，
//! 最终顺序为压栈顺序的逆序。

use crate::graph::Graph;
use crate::metrics::global_metrics;
use crate::types::VertexKey;
use std::collections::HashSet;

/// DFS 拓扑排序
///
/// 只对 DAG 有意义。不做环预检查：含环图上的输出是
/// 未定义的部分序，调用方如有疑虑应先用
/// [`has_cycle_directed`](super::has_cycle_directed) 判定。
pub fn topological_sort<V: VertexKey>(graph: &Graph<V>) -> Vec<V> {
    let timer = global_metrics().record_run_start();

    let mut visited: HashSet<V> = HashSet::new();
    let mut emitted: HashSet<V> = HashSet::new();
    let mut output: Vec<V> = Vec::new();

    for start in graph.vertices() {
        if visited.contains(start) {
            continue;
        }

        let mut stack = vec![start.clone()];
        while let Some(vertex) = stack.last().cloned() {
            if visited.insert(vertex.clone()) {
                // 首次到达：逆序压入未访问邻居，保持邻接表访问顺序
                for edge in graph.neighbors(&vertex).iter().rev() {
                    if !visited.contains(&edge.vertex) {
                        stack.push(edge.vertex.clone());
                    }
                }
            } else {
                stack.pop();
                if emitted.insert(vertex.clone()) {
                    output.push(vertex);
                }
            }
        }
    }

    output.reverse();
    global_metrics().record_run_complete("topological_sort", timer);
    output
}
