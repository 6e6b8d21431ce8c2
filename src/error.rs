//! 错误类型定义
//!
//! 图操作遵循"全函数、不报错"的契约：顶点缺失一律表现为空结果或无操作。
//! 显式错误只保留给矩阵形状校验、有界队列溢出、表达式解析等越界输入。

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("矩阵形状不匹配: 期望 {expected}, 实际 {actual}")]
    ShapeMismatch { expected: String, actual: String },

    #[error("矩阵不是方阵: {rows}x{cols}")]
    NotSquare { rows: usize, cols: usize },

    #[error("队列已满 (容量 {0})")]
    QueueFull(usize),

    #[error("索引越界: 索引 {index}, 长度 {len}")]
    IndexOutOfBounds { index: usize, len: usize },

    #[error("无效的表达式: {0}")]
    InvalidExpression(String),
}
