//! 图算法模块
//!
//! 遍历、最短路径、环检测、拓扑排序、连通分量、最小生成树和路径枚举

mod components;
mod cycle;
mod mst;
mod paths;
mod shortest_path;
mod topo_sort;
mod traversal;

pub use components::{connected_components, is_bipartite};
pub use cycle::{has_cycle_directed, has_cycle_undirected};
pub use mst::{kruskal_mst, MstEdge, MstResult};
pub use paths::{all_paths, has_path};
pub use shortest_path::{dijkstra, ShortestPaths};
pub use topo_sort::topological_sort;
pub use traversal::{bfs, dfs};
