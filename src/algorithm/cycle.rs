//! 环检测
//!
//! 无向图：DFS + 父顶点跟踪，指向已访问非父顶点的回边即为环。
//! 有向图：三色 DFS，回边指向仍在当前 DFS 路径上（灰色）的顶点即为环。
//! 两者均为显式栈的迭代实现。

use crate::graph::Graph;
use crate::types::VertexKey;
use std::collections::{HashMap, HashSet};

/// 无向图是否含环
///
/// 逐连通分量做带父顶点跟踪的 DFS。
/// 同一顶点经由两条不同树路径被到达时同样判定为环。
pub fn has_cycle_undirected<V: VertexKey>(graph: &Graph<V>) -> bool {
    let mut visited: HashSet<V> = HashSet::new();

    for start in graph.vertices() {
        if visited.contains(start) {
            continue;
        }

        let mut stack: Vec<(V, Option<V>)> = vec![(start.clone(), None)];
        while let Some((vertex, parent)) = stack.pop() {
            if !visited.insert(vertex.clone()) {
                // 两条不同树路径到达同一顶点
                return true;
            }
            for edge in graph.neighbors(&vertex) {
                if !visited.contains(&edge.vertex) {
                    stack.push((edge.vertex.clone(), Some(vertex.clone())));
                } else if parent.as_ref() != Some(&edge.vertex) {
                    // 指向已访问非父顶点的回边
                    return true;
                }
            }
        }
    }

    false
}

/// DFS 着色状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Color {
    /// 未访问
    White,
    /// 在当前 DFS 路径上（递归栈中）
    Gray,
    /// 已完全处理
    Black,
}

/// 有向图是否含环
///
/// 灰色顶点集合等价于递归栈：指向灰色顶点的边是回边；
/// 指向黑色顶点的交叉边/前向边不构成环。
pub fn has_cycle_directed<V: VertexKey>(graph: &Graph<V>) -> bool {
    let mut color: HashMap<V, Color> = HashMap::new();

    for start in graph.vertices() {
        if color.get(start).copied().unwrap_or(Color::White) != Color::White {
            continue;
        }

        let mut stack = vec![start.clone()];
        while let Some(vertex) = stack.last().cloned() {
            match color.get(&vertex).copied().unwrap_or(Color::White) {
                Color::White => {
                    color.insert(vertex.clone(), Color::Gray);
                    for edge in graph.neighbors(&vertex) {
                        match color.get(&edge.vertex).copied().unwrap_or(Color::White) {
                            Color::White => stack.push(edge.vertex.clone()),
                            Color::Gray => return true,
                            Color::Black => {}
                        }
                    }
                }
                Color::Gray => {
                    // 子树处理完毕，顶点离开递归栈
                    color.insert(vertex.clone(), Color::Black);
                    stack.pop();
                }
                Color::Black => {
                    stack.pop();
                }
            }
        }
    }

    false
}
