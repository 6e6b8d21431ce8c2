//! 单向链表

use crate::error::{Error, Result};

struct Node<T> {
    value: T,
    next: Option<Box<Node<T>>>,
}

/// 单向链表
///
/// 教学用途的逐节点堆分配实现；生产代码通常直接用 `Vec` 或 `VecDeque`。
pub struct LinkedList<T> {
    head: Option<Box<Node<T>>>,
    len: usize,
}

impl<T> LinkedList<T> {
    /// 创建空链表
    pub fn new() -> Self {
        Self { head: None, len: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// 头部插入 - O(1)
    pub fn push_front(&mut self, value: T) {
        let node = Box::new(Node {
            value,
            next: self.head.take(),
        });
        self.head = Some(node);
        self.len += 1;
    }

    /// 尾部插入 - O(n)
    pub fn push_back(&mut self, value: T) {
        let mut cursor = &mut self.head;
        while let Some(node) = cursor {
            cursor = &mut node.next;
        }
        *cursor = Some(Box::new(Node { value, next: None }));
        self.len += 1;
    }

    /// 在指定索引处插入，索引超出长度时报错
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        if index > self.len {
            return Err(Error::IndexOutOfBounds {
                index,
                len: self.len,
            });
        }

        let mut cursor = &mut self.head;
        for _ in 0..index {
            if let Some(node) = cursor {
                cursor = &mut node.next;
            }
        }
        let node = Box::new(Node {
            value,
            next: cursor.take(),
        });
        *cursor = Some(node);
        self.len += 1;
        Ok(())
    }

    /// 按索引取值
    pub fn get(&self, index: usize) -> Option<&T> {
        let mut cursor = self.head.as_deref();
        for _ in 0..index {
            cursor = cursor?.next.as_deref();
        }
        cursor.map(|node| &node.value)
    }

    /// 删除指定索引处的节点并返回其值
    pub fn remove_at(&mut self, index: usize) -> Option<T> {
        if index >= self.len {
            return None;
        }

        let mut cursor = &mut self.head;
        for _ in 0..index {
            if let Some(node) = cursor {
                cursor = &mut node.next;
            }
        }
        match cursor.take() {
            Some(node) => {
                *cursor = node.next;
                self.len -= 1;
                Some(node.value)
            }
            None => None,
        }
    }

    /// 中间节点（偶数长度取后半个，与快慢指针结果一致）
    pub fn middle(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.get(self.len / 2)
    }

    /// 迭代反转：逐个摘下节点重新接到新头部
    pub fn reverse(&mut self) {
        let mut prev: Option<Box<Node<T>>> = None;
        let mut current = self.head.take();
        while let Some(mut node) = current {
            current = node.next.take();
            node.next = prev;
            prev = Some(node);
        }
        self.head = prev;
    }

    pub fn clear(&mut self) {
        self.head = None;
        self.len = 0;
    }
}

impl<T: PartialEq> LinkedList<T> {
    /// 删除首个匹配值的节点，返回是否删除
    pub fn remove(&mut self, value: &T) -> bool {
        let mut cursor = &mut self.head;
        loop {
            let hit = match cursor.as_ref() {
                Some(node) => node.value == *value,
                None => return false,
            };
            if hit {
                if let Some(node) = cursor.take() {
                    *cursor = node.next;
                }
                self.len -= 1;
                return true;
            }
            if let Some(node) = cursor {
                cursor = &mut node.next;
            }
        }
    }

    /// 首个匹配值的索引
    pub fn position(&self, value: &T) -> Option<usize> {
        let mut cursor = self.head.as_deref();
        let mut index = 0;
        while let Some(node) = cursor {
            if node.value == *value {
                return Some(index);
            }
            cursor = node.next.as_deref();
            index += 1;
        }
        None
    }
}

impl<T: Clone> LinkedList<T> {
    /// 导出为 Vec
    pub fn to_vec(&self) -> Vec<T> {
        let mut out = Vec::with_capacity(self.len);
        let mut cursor = self.head.as_deref();
        while let Some(node) = cursor {
            out.push(node.value.clone());
            cursor = node.next.as_deref();
        }
        out
    }
}

impl<T> Default for LinkedList<T> {
    fn default() -> Self {
        Self::new()
    }
}
