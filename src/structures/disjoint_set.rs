//! 并查集
//!
//! 支持快速"同分量"查询的不相交集合结构，
//! 路径压缩 + 按秩合并。Kruskal 最小生成树以此跟踪分量归并。

use crate::types::VertexKey;
use std::collections::HashMap;

/// 不相交集合（Union-Find）
#[derive(Debug, Clone)]
pub struct DisjointSet<V: VertexKey> {
    parent: HashMap<V, V>,
    rank: HashMap<V, u32>,
}

impl<V: VertexKey> Default for DisjointSet<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V: VertexKey> DisjointSet<V> {
    /// 创建空结构
    pub fn new() -> Self {
        Self {
            parent: HashMap::new(),
            rank: HashMap::new(),
        }
    }

    /// 登记一个单元素集合，已存在时无操作
    pub fn make_set(&mut self, value: V) {
        if !self.parent.contains_key(&value) {
            self.parent.insert(value.clone(), value.clone());
            self.rank.insert(value, 0);
        }
    }

    /// 元素是否已登记
    pub fn contains(&self, value: &V) -> bool {
        self.parent.contains_key(value)
    }

    /// 已登记元素数量
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// 查找元素所属集合的代表，未登记时返回 None
    ///
    /// 迭代两趟实现路径压缩：先找根，再把途经节点直接挂到根上。
    pub fn find(&mut self, value: &V) -> Option<V> {
        if !self.parent.contains_key(value) {
            return None;
        }

        let mut root = value.clone();
        while let Some(parent) = self.parent.get(&root) {
            if *parent == root {
                break;
            }
            root = parent.clone();
        }

        // 路径压缩
        let mut current = value.clone();
        while current != root {
            match self.parent.get(&current).cloned() {
                Some(next) => {
                    self.parent.insert(current, root.clone());
                    current = next;
                }
                None => break,
            }
        }

        Some(root)
    }

    /// 合并两个元素所在的集合
    ///
    /// 返回是否发生了真正的合并；已在同一集合
    /// 或任一元素未登记时返回 false。
    pub fn union(&mut self, a: &V, b: &V) -> bool {
        let root_a = match self.find(a) {
            Some(root) => root,
            None => return false,
        };
        let root_b = match self.find(b) {
            Some(root) => root,
            None => return false,
        };
        if root_a == root_b {
            return false;
        }

        let rank_a = self.rank.get(&root_a).copied().unwrap_or(0);
        let rank_b = self.rank.get(&root_b).copied().unwrap_or(0);

        // 按秩合并：矮树挂到高树下
        if rank_a < rank_b {
            self.parent.insert(root_a, root_b);
        } else if rank_a > rank_b {
            self.parent.insert(root_b, root_a);
        } else {
            self.parent.insert(root_b, root_a.clone());
            self.rank.insert(root_a, rank_a + 1);
        }
        true
    }

    /// 两元素是否属于同一集合
    pub fn connected(&mut self, a: &V, b: &V) -> bool {
        match (self.find(a), self.find(b)) {
            (Some(root_a), Some(root_b)) => root_a == root_b,
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_union_and_find() {
        let mut dsu = DisjointSet::new();
        for v in ["A", "B", "C", "D"] {
            dsu.make_set(v);
        }

        assert!(dsu.union(&"A", &"B"));
        assert!(dsu.union(&"C", &"D"));
        assert!(dsu.connected(&"A", &"B"));
        assert!(!dsu.connected(&"A", &"C"));

        assert!(dsu.union(&"B", &"C"));
        assert!(dsu.connected(&"A", &"D"));
    }

    #[test]
    fn test_union_same_set_is_false() {
        let mut dsu = DisjointSet::new();
        dsu.make_set(1);
        dsu.make_set(2);

        assert!(dsu.union(&1, &2));
        assert!(!dsu.union(&1, &2));
        assert!(!dsu.union(&2, &1));
    }

    #[test]
    fn test_unregistered_element() {
        let mut dsu: DisjointSet<&str> = DisjointSet::new();
        dsu.make_set("A");

        assert_eq!(dsu.find(&"missing"), None);
        assert!(!dsu.union(&"A", &"missing"));
        assert!(!dsu.connected(&"A", &"missing"));
    }

    #[test]
    fn test_make_set_idempotent() {
        let mut dsu = DisjointSet::new();
        dsu.make_set("A");
        dsu.make_set("B");
        dsu.union(&"A", &"B");
        // 重复登记不得拆散已合并的集合
        dsu.make_set("A");
        assert!(dsu.connected(&"A", &"B"));
        assert_eq!(dsu.len(), 2);
    }

    #[test]
    fn test_path_compression_keeps_roots_stable() {
        let mut dsu = DisjointSet::new();
        for v in 0..8 {
            dsu.make_set(v);
        }
        for v in 0..7 {
            dsu.union(&v, &(v + 1));
        }

        let root = dsu.find(&0);
        for v in 1..8 {
            assert_eq!(dsu.find(&v), root);
        }
    }
}
