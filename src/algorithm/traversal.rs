//! 图遍历算法
//!
//! 深度优先与广度优先遍历，均为迭代实现以避免深图上的调用栈溢出。
//! 访问顺序与递归版本完全一致：按邻接表顺序访问邻居。

use crate::graph::Graph;
use crate::types::VertexKey;
use std::collections::{HashSet, VecDeque};

/// 深度优先遍历，返回访问顺序
///
/// 显式栈实现的先序遍历。首次到达即标记访问，保证在含环图上终止。
/// 起点不在图中时返回空序列。
pub fn dfs<V: VertexKey>(graph: &Graph<V>, start: &V) -> Vec<V> {
    if !graph.contains_vertex(start) {
        return Vec::new();
    }

    let mut visited: HashSet<V> = HashSet::new();
    let mut order = Vec::new();
    let mut stack = vec![start.clone()];

    while let Some(vertex) = stack.pop() {
        if !visited.insert(vertex.clone()) {
            continue;
        }
        order.push(vertex.clone());

        // 逆序入栈，使邻接表中的首个邻居先被访问
        for edge in graph.neighbors(&vertex).iter().rev() {
            if !visited.contains(&edge.vertex) {
                stack.push(edge.vertex.clone());
            }
        }
    }

    order
}

/// 广度优先遍历，返回访问顺序
///
/// 显式 FIFO 队列逐层扩展。起点不在图中时返回空序列。
pub fn bfs<V: VertexKey>(graph: &Graph<V>, start: &V) -> Vec<V> {
    if !graph.contains_vertex(start) {
        return Vec::new();
    }

    let mut visited: HashSet<V> = HashSet::new();
    let mut order = Vec::new();
    let mut queue = VecDeque::new();

    visited.insert(start.clone());
    queue.push_back(start.clone());

    while let Some(vertex) = queue.pop_front() {
        order.push(vertex.clone());

        for edge in graph.neighbors(&vertex) {
            if visited.insert(edge.vertex.clone()) {
                queue.push_back(edge.vertex.clone());
            }
        }
    }

    order
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 示例图：A-B(4), A-C(2), B-C(1), B-D(5), C-D(8), C-E(10), D-E(2)
    fn example_graph() -> Graph<&'static str> {
        let mut graph = Graph::undirected();
        for v in ["A", "B", "C", "D", "E"] {
            graph.add_vertex(v);
        }
        graph.add_edge_weighted("A", "B", 4.0);
        graph.add_edge_weighted("A", "C", 2.0);
        graph.add_edge_weighted("B", "C", 1.0);
        graph.add_edge_weighted("B", "D", 5.0);
        graph.add_edge_weighted("C", "D", 8.0);
        graph.add_edge_weighted("C", "E", 10.0);
        graph.add_edge_weighted("D", "E", 2.0);
        graph
    }

    #[test]
    fn test_dfs_order() {
        let _ = tracing_subscriber::fmt()
            .with_env_filter("algokit=debug")
            .try_init();

        let graph = example_graph();
        // 递归先序：A -> B -> C -> D -> E
        assert_eq!(dfs(&graph, &"A"), vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_bfs_order() {
        let graph = example_graph();
        assert_eq!(bfs(&graph, &"A"), vec!["A", "B", "C", "D", "E"]);
    }

    #[test]
    fn test_traversal_covers_component_exactly_once() {
        let mut graph = example_graph();
        // 增加一个不连通的分量
        graph.add_edge("X", "Y");

        let dfs_order = dfs(&graph, &"A");
        let bfs_order = bfs(&graph, &"A");
        for order in [&dfs_order, &bfs_order] {
            assert_eq!(order.len(), 5);
            let unique: std::collections::HashSet<_> = order.iter().collect();
            assert_eq!(unique.len(), 5);
            assert!(!order.contains(&"X"));
        }
    }

    #[test]
    fn test_traversal_from_missing_start() {
        let graph = example_graph();
        assert!(dfs(&graph, &"Z").is_empty());
        assert!(bfs(&graph, &"Z").is_empty());
    }

    #[test]
    fn test_traversal_terminates_on_cycles() {
        let mut graph = Graph::directed();
        graph.add_edge("A", "B");
        graph.add_edge("B", "C");
        graph.add_edge("C", "A");

        assert_eq!(dfs(&graph, &"A"), vec!["A", "B", "C"]);
        assert_eq!(bfs(&graph, &"A"), vec!["A", "B", "C"]);
    }

    #[test]
    fn test_dfs_directed_order() {
        let mut graph = Graph::directed();
        graph.add_edge("A", "B");
        graph.add_edge("A", "C");
        graph.add_edge("B", "C");
        graph.add_edge("C", "D");

        assert_eq!(dfs(&graph, &"A"), vec!["A", "B", "C", "D"]);
    }
}
