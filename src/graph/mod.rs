//! 图核心模块
//!
//! 定义边记录和邻接表图的核心数据结构

mod edge;
#[allow(clippy::module_inception)]
mod graph;

pub use edge::Edge;
pub use graph::Graph;
