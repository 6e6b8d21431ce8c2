//! 二叉搜索树

use std::cmp::Ordering;
use std::collections::VecDeque;

struct BstNode<T> {
    value: T,
    left: Option<Box<BstNode<T>>>,
    right: Option<Box<BstNode<T>>>,
}

/// 二叉搜索树
///
/// 左子树严格小于根，重复值插入右子树。不做自平衡，
/// 有序插入时退化为链表。
pub struct BinarySearchTree<T: Ord> {
    root: Option<Box<BstNode<T>>>,
    len: usize,
}

impl<T: Ord> BinarySearchTree<T> {
    pub fn new() -> Self {
        Self { root: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 迭代插入
    pub fn insert(&mut self, value: T) {
        let mut cursor = &mut self.root;
        while let Some(node) = cursor {
            if value < node.value {
                cursor = &mut node.left;
            } else {
                cursor = &mut node.right;
            }
        }
        *cursor = Some(Box::new(BstNode {
            value,
            left: None,
            right: None,
        }));
        self.len += 1;
    }

    pub fn contains(&self, value: &T) -> bool {
        let mut cursor = self.root.as_deref();
        while let Some(node) = cursor {
            match value.cmp(&node.value) {
                Ordering::Less => cursor = node.left.as_deref(),
                Ordering::Greater => cursor = node.right.as_deref(),
                Ordering::Equal => return true,
            }
        }
        false
    }

    /// 最小值（最左节点）
    pub fn min(&self) -> Option<&T> {
        let mut cursor = self.root.as_deref()?;
        while let Some(left) = cursor.left.as_deref() {
            cursor = left;
        }
        Some(&cursor.value)
    }

    /// 最大值（最右节点）
    pub fn max(&self) -> Option<&T> {
        let mut cursor = self.root.as_deref()?;
        while let Some(right) = cursor.right.as_deref() {
            cursor = right;
        }
        Some(&cursor.value)
    }

    /// 删除首个匹配值的节点，返回是否删除
    ///
    /// 双子节点情形用右子树最小值（中序后继）顶替被删节点。
    pub fn remove(&mut self, value: &T) -> bool {
        let mut cursor = &mut self.root;
        loop {
            let ordering = match cursor.as_ref() {
                Some(node) => value.cmp(&node.value),
                None => return false,
            };
            match ordering {
                Ordering::Equal => break,
                Ordering::Less => {
                    if let Some(node) = cursor {
                        cursor = &mut node.left;
                    }
                }
                Ordering::Greater => {
                    if let Some(node) = cursor {
                        cursor = &mut node.right;
                    }
                }
            }
        }

        if let Some(mut node) = cursor.take() {
            *cursor = match (node.left.take(), node.right.take()) {
                (None, None) => None,
                (Some(child), None) | (None, Some(child)) => Some(child),
                (Some(left), Some(right)) => {
                    let (successor, rest) = extract_min(right);
                    node.value = successor;
                    node.left = Some(left);
                    node.right = rest;
                    Some(node)
                }
            };
        }
        self.len -= 1;
        true
    }

    /// 树高：空树为 0，单节点为 1
    pub fn height(&self) -> usize {
        node_height(self.root.as_deref())
    }
}

impl<T: Ord + Clone> BinarySearchTree<T> {
    /// 中序遍历，产出升序序列
    pub fn in_order(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        in_order_visit(self.root.as_deref(), &mut out);
        out
    }

    /// 前序遍历
    pub fn pre_order(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        pre_order_visit(self.root.as_deref(), &mut out);
        out
    }

    /// 后序遍历
    pub fn post_order(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        post_order_visit(self.root.as_deref(), &mut out);
        out
    }

    /// 层序遍历
    pub fn level_order(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        let mut queue: VecDeque<&BstNode<T>> = VecDeque::new();
        if let Some(root) = self.root.as_deref() {
            queue.push_back(root);
        }
        while let Some(node) = queue.pop_front() {
            out.push(node.value.clone());
            if let Some(left) = node.left.as_deref() {
                queue.push_back(left);
            }
            if let Some(right) = node.right.as_deref() {
                queue.push_back(right);
            }
        }
        out
    }
}

impl<T: Ord> Default for BinarySearchTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// 摘出子树最小值节点，返回 (最小值, 摘除后的子树)
fn extract_min<T>(mut node: Box<BstNode<T>>) -> (T, Option<Box<BstNode<T>>>) {
    match node.left.take() {
        None => {
            let BstNode { value, right, .. } = *node;
            (value, right)
        }
        Some(left) => {
            let (min, rest) = extract_min(left);
            node.left = rest;
            (min, Some(node))
        }
    }
}

fn node_height<T>(node: Option<&BstNode<T>>) -> usize {
    match node {
        None => 0,
        Some(node) => {
            1 + node_height(node.left.as_deref()).max(node_height(node.right.as_deref()))
        }
    }
}

fn in_order_visit<T: Clone>(node: Option<&BstNode<T>>, out: &mut Vec<T>) {
    if let Some(node) = node {
        in_order_visit(node.left.as_deref(), out);
        out.push(node.value.clone());
        in_order_visit(node.right.as_deref(), out);
    }
}

fn pre_order_visit<T: Clone>(node: Option<&BstNode<T>>, out: &mut Vec<T>) {
    if let Some(node) = node {
        out.push(node.value.clone());
        pre_order_visit(node.left.as_deref(), out);
        pre_order_visit(node.right.as_deref(), out);
    }
}

fn post_order_visit<T: Clone>(node: Option<&BstNode<T>>, out: &mut Vec<T>) {
    if let Some(node) = node {
        post_order_visit(node.left.as_deref(), out);
        post_order_visit(node.right.as_deref(), out);
        out.push(node.value.clone());
    }
}
