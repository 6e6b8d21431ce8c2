//! 矩阵运算
//!
//! 矩阵用 `Vec<Vec<_>>` 行主序表示；遍历类操作泛型化，
//! 数值运算固定 `f64`，形状不匹配时报错而不是 panic。

use crate::error::{Error, Result};

/// 矩阵的 (行数, 列数)，空矩阵为 (0, 0)
pub fn dimensions<T>(matrix: &[Vec<T>]) -> (usize, usize) {
    let rows = matrix.len();
    let cols = matrix.first().map_or(0, |row| row.len());
    (rows, cols)
}

/// 转置
pub fn transpose<T: Clone>(matrix: &[Vec<T>]) -> Vec<Vec<T>> {
    let (rows, cols) = dimensions(matrix);
    if rows == 0 || cols == 0 {
        return Vec::new();
    }
    (0..cols)
        .map(|c| (0..rows).map(|r| matrix[r][c].clone()).collect())
        .collect()
}

/// 顺时针旋转 90 度
pub fn rotate90<T: Clone>(matrix: &[Vec<T>]) -> Vec<Vec<T>> {
    let (rows, cols) = dimensions(matrix);
    if rows == 0 || cols == 0 {
        return Vec::new();
    }
    (0..cols)
        .map(|c| (0..rows).rev().map(|r| matrix[r][c].clone()).collect())
        .collect()
}

/// 螺旋序遍历：从左上角开始顺时针向内
pub fn spiral_order<T: Clone>(matrix: &[Vec<T>]) -> Vec<T> {
    let (rows, cols) = dimensions(matrix);
    if rows == 0 || cols == 0 {
        return Vec::new();
    }

    let mut out = Vec::with_capacity(rows * cols);
    let (mut top, mut bottom) = (0usize, rows - 1);
    let (mut left, mut right) = (0usize, cols - 1);

    loop {
        for c in left..=right {
            out.push(matrix[top][c].clone());
        }
        if top == bottom {
            break;
        }
        top += 1;

        for r in top..=bottom {
            out.push(matrix[r][right].clone());
        }
        if left == right {
            break;
        }
        right -= 1;

        for c in (left..=right).rev() {
            out.push(matrix[bottom][c].clone());
        }
        if top == bottom {
            break;
        }
        bottom -= 1;

        for r in (top..=bottom).rev() {
            out.push(matrix[r][left].clone());
        }
        if left == right {
            break;
        }
        left += 1;
    }
    out
}

/// 行列均升序的矩阵中查找目标，返回 (行, 列)
///
/// 从右上角开始阶梯式走位，O(rows + cols)。
pub fn search_sorted<T: PartialOrd>(matrix: &[Vec<T>], target: &T) -> Option<(usize, usize)> {
    let (rows, cols) = dimensions(matrix);
    if rows == 0 || cols == 0 {
        return None;
    }

    let mut r = 0usize;
    let mut c = cols - 1;
    loop {
        let value = &matrix[r][c];
        if *value == *target {
            return Some((r, c));
        }
        if *value > *target {
            if c == 0 {
                return None;
            }
            c -= 1;
        } else {
            r += 1;
            if r == rows {
                return None;
            }
        }
    }
}

fn shape_of(matrix: &[Vec<f64>]) -> String {
    let (rows, cols) = dimensions(matrix);
    format!("{}x{}", rows, cols)
}

/// 矩阵加法，形状不一致时报错
pub fn add(a: &[Vec<f64>], b: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
    if dimensions(a) != dimensions(b) {
        return Err(Error::ShapeMismatch {
            expected: shape_of(a),
            actual: shape_of(b),
        });
    }
    Ok(a.iter()
        .zip(b.iter())
        .map(|(ra, rb)| ra.iter().zip(rb.iter()).map(|(x, y)| x + y).collect())
        .collect())
}

/// 矩阵乘法：a 的列数必须等于 b 的行数
pub fn multiply(a: &[Vec<f64>], b: &[Vec<f64>]) -> Result<Vec<Vec<f64>>> {
    let (a_rows, a_cols) = dimensions(a);
    let (b_rows, b_cols) = dimensions(b);
    if a_cols != b_rows {
        return Err(Error::ShapeMismatch {
            expected: format!("{}x_", a_cols),
            actual: shape_of(b),
        });
    }

    let mut out = vec![vec![0.0; b_cols]; a_rows];
    for r in 0..a_rows {
        for k in 0..a_cols {
            let factor = a[r][k];
            for c in 0..b_cols {
                out[r][c] += factor * b[k][c];
            }
        }
    }
    Ok(out)
}

/// 标量乘法
pub fn scalar_multiply(matrix: &[Vec<f64>], scalar: f64) -> Vec<Vec<f64>> {
    matrix
        .iter()
        .map(|row| row.iter().map(|v| v * scalar).collect())
        .collect()
}

/// 主对角线元素之和，非方阵时报错
pub fn trace(matrix: &[Vec<f64>]) -> Result<f64> {
    let (rows, cols) = dimensions(matrix);
    if rows != cols {
        return Err(Error::NotSquare { rows, cols });
    }
    Ok((0..rows).map(|i| matrix[i][i]).sum())
}

/// 是否对称方阵
pub fn is_symmetric(matrix: &[Vec<f64>]) -> bool {
    let (rows, cols) = dimensions(matrix);
    if rows != cols {
        return false;
    }
    for r in 0..rows {
        for c in (r + 1)..cols {
            if (matrix[r][c] - matrix[c][r]).abs() > f64::EPSILON {
                return false;
            }
        }
    }
    true
}

/// n 阶单位矩阵
pub fn identity(n: usize) -> Vec<Vec<f64>> {
    let mut out = vec![vec![0.0; n]; n];
    for (i, row) in out.iter_mut().enumerate() {
        row[i] = 1.0;
    }
    out
}
