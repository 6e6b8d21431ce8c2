//! 栈结构与栈应用
//!
//! O(1) 取最小值的 MinStack，以及括号匹配、后缀表达式求值、
//! 单调栈等经典栈应用。

use crate::error::{Error, Result};

/// 支持 O(1) 查询最小值的栈
///
/// 影子栈记录各时刻的最小值：压入时若不大于当前最小值则同步压入，
/// 弹出时若等于栈顶最小值则同步弹出。
#[derive(Debug, Clone)]
pub struct MinStack<T: Ord + Clone> {
    stack: Vec<T>,
    mins: Vec<T>,
}

impl<T: Ord + Clone> MinStack<T> {
    pub fn new() -> Self {
        Self {
            stack: Vec::new(),
            mins: Vec::new(),
        }
    }

    pub fn push(&mut self, value: T) {
        if self.mins.last().map_or(true, |min| value <= *min) {
            self.mins.push(value.clone());
        }
        self.stack.push(value);
    }

    pub fn pop(&mut self) -> Option<T> {
        let value = self.stack.pop()?;
        if self.mins.last() == Some(&value) {
            self.mins.pop();
        }
        Some(value)
    }

    pub fn peek(&self) -> Option<&T> {
        self.stack.last()
    }

    /// 当前栈中最小值
    pub fn min(&self) -> Option<&T> {
        self.mins.last()
    }

    pub fn len(&self) -> usize {
        self.stack.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }
}

impl<T: Ord + Clone> Default for MinStack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// 括号是否平衡匹配
///
/// 只检查 `()[]{}` 三种括号，其他字符忽略。
pub fn is_balanced(input: &str) -> bool {
    let mut stack = Vec::new();
    for ch in input.chars() {
        match ch {
            '(' => stack.push(')'),
            '[' => stack.push(']'),
            '{' => stack.push('}'),
            ')' | ']' | '}' => {
                if stack.pop() != Some(ch) {
                    return false;
                }
            }
            _ => {}
        }
    }
    stack.is_empty()
}

/// 后缀表达式求值
///
/// 空白分隔的数字与 `+ - * /` 运算符。
/// 表达式畸形或除零时报错。
pub fn evaluate_postfix(expression: &str) -> Result<f64> {
    let mut stack: Vec<f64> = Vec::new();

    for token in expression.split_whitespace() {
        match token {
            "+" | "-" | "*" | "/" => {
                let right = stack
                    .pop()
                    .ok_or_else(|| Error::InvalidExpression(format!("缺少操作数: {}", token)))?;
                let left = stack
                    .pop()
                    .ok_or_else(|| Error::InvalidExpression(format!("缺少操作数: {}", token)))?;
                let value = match token {
                    "+" => left + right,
                    "-" => left - right,
                    "*" => left * right,
                    _ => {
                        if right == 0.0 {
                            return Err(Error::InvalidExpression("除数为零".to_string()));
                        }
                        left / right
                    }
                };
                stack.push(value);
            }
            number => {
                let value = number.parse::<f64>().map_err(|_| {
                    Error::InvalidExpression(format!("无法识别的符号: {}", number))
                })?;
                stack.push(value);
            }
        }
    }

    if stack.len() == 1 {
        Ok(stack[0])
    } else {
        Err(Error::InvalidExpression(format!(
            "求值结束后栈中剩余 {} 个操作数",
            stack.len()
        )))
    }
}

/// 每个元素右侧第一个更大的元素，不存在时为 -1
///
/// 单调递减栈，整体 O(n)。
pub fn next_greater_elements(nums: &[i64]) -> Vec<i64> {
    let mut result = vec![-1; nums.len()];
    let mut stack: Vec<usize> = Vec::new();

    for (i, &value) in nums.iter().enumerate() {
        while let Some(&top) = stack.last() {
            if nums[top] >= value {
                break;
            }
            result[top] = value;
            stack.pop();
        }
        stack.push(i);
    }

    result
}

/// 每天还要等多少天才会升温，不再升温为 0
pub fn daily_temperatures(temperatures: &[i32]) -> Vec<usize> {
    let mut result = vec![0; temperatures.len()];
    let mut stack: Vec<usize> = Vec::new();

    for (i, &temp) in temperatures.iter().enumerate() {
        while let Some(&top) = stack.last() {
            if temperatures[top] >= temp {
                break;
            }
            result[top] = i - top;
            stack.pop();
        }
        stack.push(i);
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_stack_tracks_minimum() {
        let mut stack = MinStack::new();
        stack.push(5);
        stack.push(3);
        stack.push(7);
        stack.push(3);

        assert_eq!(stack.min(), Some(&3));
        stack.pop();
        assert_eq!(stack.min(), Some(&3));
        stack.pop();
        stack.pop();
        assert_eq!(stack.min(), Some(&5));
        stack.pop();
        assert_eq!(stack.min(), None);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_min_stack_peek() {
        let mut stack = MinStack::new();
        stack.push(2);
        stack.push(1);
        assert_eq!(stack.peek(), Some(&1));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_is_balanced() {
        assert!(is_balanced("(a[b]{c})"));
        assert!(is_balanced(""));
        assert!(!is_balanced("(]"));
        assert!(!is_balanced("(()"));
        assert!(!is_balanced(")("));
    }

    #[test]
    fn test_evaluate_postfix() {
        // (3 + 4) * 2 = 14
        assert!((evaluate_postfix("3 4 + 2 *").unwrap() - 14.0).abs() < 1e-9);
        assert!((evaluate_postfix("10 2 /").unwrap() - 5.0).abs() < 1e-9);
        assert!((evaluate_postfix("5 1 2 + 4 * + 3 -").unwrap() - 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_evaluate_postfix_errors() {
        assert!(evaluate_postfix("3 +").is_err());
        assert!(evaluate_postfix("3 0 /").is_err());
        assert!(evaluate_postfix("3 4").is_err());
        assert!(evaluate_postfix("3 abc +").is_err());
    }

    #[test]
    fn test_next_greater_elements() {
        assert_eq!(next_greater_elements(&[2, 1, 2, 4, 3]), vec![4, 2, 4, -1, -1]);
        assert_eq!(next_greater_elements(&[5, 4, 3]), vec![-1, -1, -1]);
    }

    #[test]
    fn test_daily_temperatures() {
        assert_eq!(
            daily_temperatures(&[73, 74, 75, 71, 69, 72, 76, 73]),
            vec![1, 1, 4, 2, 1, 1, 0, 0]
        );
    }
}
