//! 路径存在性与路径枚举

use crate::graph::Graph;
use crate::types::VertexKey;
use std::collections::HashSet;

/// 两顶点间是否存在路径
pub fn has_path<V: VertexKey>(graph: &Graph<V>, start: &V, end: &V) -> bool {
    let mut visited: HashSet<V> = HashSet::new();
    let mut stack = vec![start.clone()];

    while let Some(vertex) = stack.pop() {
        if &vertex == end {
            return true;
        }
        if !visited.insert(vertex.clone()) {
            continue;
        }
        for edge in graph.neighbors(&vertex) {
            if !visited.contains(&edge.vertex) {
                stack.push(edge.vertex.clone());
            }
        }
    }

    false
}

/// 枚举两顶点间的所有简单路径
///
/// 回溯式 DFS：路径内不重复访问顶点。
/// 路径数量可能随图规模指数增长，调用方自行控制输入规模。
pub fn all_paths<V: VertexKey>(graph: &Graph<V>, start: &V, end: &V) -> Vec<Vec<V>> {
    let mut results = Vec::new();
    if !graph.contains_vertex(start) {
        return results;
    }

    let mut visited: HashSet<V> = HashSet::new();
    let mut path = vec![start.clone()];
    visited.insert(start.clone());
    collect_paths(graph, start, end, &mut visited, &mut path, &mut results);
    results
}

fn collect_paths<V: VertexKey>(
    graph: &Graph<V>,
    current: &V,
    end: &V,
    visited: &mut HashSet<V>,
    path: &mut Vec<V>,
    results: &mut Vec<Vec<V>>,
) {
    if current == end {
        results.push(path.clone());
        return;
    }

    for edge in graph.neighbors(current) {
        if visited.contains(&edge.vertex) {
            continue;
        }
        visited.insert(edge.vertex.clone());
        path.push(edge.vertex.clone());

        collect_paths(graph, &edge.vertex, end, visited, path, results);

        path.pop();
        visited.remove(&edge.vertex);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 1 -> 2 -> 3 -> 4 和 1 -> 5 -> 4 两条通路
    fn diamond_graph() -> Graph<u32> {
        let mut graph = Graph::directed();
        graph.add_edge(1, 2);
        graph.add_edge(2, 3);
        graph.add_edge(3, 4);
        graph.add_edge(1, 5);
        graph.add_edge(5, 4);
        graph
    }

    #[test]
    fn test_has_path() {
        let graph = diamond_graph();
        assert!(has_path(&graph, &1, &4));
        assert!(!has_path(&graph, &4, &1));
        assert!(has_path(&graph, &2, &2));
    }

    #[test]
    fn test_all_paths_enumeration() {
        let graph = diamond_graph();
        let paths = all_paths(&graph, &1, &4);

        assert_eq!(paths.len(), 2);
        assert!(paths.contains(&vec![1, 2, 3, 4]));
        assert!(paths.contains(&vec![1, 5, 4]));
    }

    #[test]
    fn test_all_paths_no_route() {
        let graph = diamond_graph();
        assert!(all_paths(&graph, &4, &1).is_empty());
        assert!(all_paths(&graph, &99, &1).is_empty());
    }

    #[test]
    fn test_all_paths_simple_only() {
        // 含环图：简单路径不重复经过顶点
        let mut graph = Graph::directed();
        graph.add_edge("A", "B");
        graph.add_edge("B", "A");
        graph.add_edge("B", "C");

        let paths = all_paths(&graph, &"A", &"C");
        assert_eq!(paths, vec![vec!["A", "B", "C"]]);
    }
}
