//! LRU 缓存
//!
//! 基于 `IndexMap` 的插入序实现：序列首部是最久未使用项，
//! 访问即移动到尾部，淘汰时摘除首部。

use indexmap::IndexMap;
use std::hash::Hash;

/// 固定容量的最近最少使用缓存
#[derive(Debug, Clone)]
pub struct LruCache<K: Eq + Hash, V> {
    entries: IndexMap<K, V>,
    capacity: usize,
}

impl<K: Eq + Hash, V> LruCache<K, V> {
    /// 创建指定容量的缓存，容量为 0 时任何写入都会被立即淘汰
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: IndexMap::with_capacity(capacity),
            capacity,
        }
    }

    /// 读取并将该键标记为最近使用
    pub fn get(&mut self, key: &K) -> Option<&V> {
        // 摘下后重新插入，移动到序列尾部
        let (key, value) = self.entries.shift_remove_entry(key)?;
        self.entries.insert(key, value);
        self.entries.last().map(|(_, v)| v)
    }

    /// 写入键值；键已存在时更新并刷新为最近使用，
    /// 容量已满时先淘汰最久未使用项
    pub fn put(&mut self, key: K, value: V) {
        if self.entries.shift_remove(&key).is_none() && self.entries.len() >= self.capacity {
            // 序列首部即最久未使用
            self.entries.shift_remove_index(0);
        }
        if self.capacity > 0 {
            self.entries.insert(key, value);
        }
    }

    /// 只读访问，不改变使用顺序
    pub fn peek(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn contains(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_get_put() {
        let mut cache = LruCache::new(2);
        cache.put("a", 1);
        cache.put("b", 2);

        assert_eq!(cache.get(&"a"), Some(&1));
        assert_eq!(cache.get(&"b"), Some(&2));
        assert_eq!(cache.get(&"c"), None);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_eviction_order() {
        let mut cache = LruCache::new(2);
        cache.put("a", 1);
        cache.put("b", 2);
        // 访问 a，b 成为最久未使用
        cache.get(&"a");
        cache.put("c", 3);

        assert_eq!(cache.get(&"b"), None);
        assert_eq!(cache.get(&"a"), Some(&1));
        assert_eq!(cache.get(&"c"), Some(&3));
    }

    #[test]
    fn test_put_existing_refreshes() {
        let mut cache = LruCache::new(2);
        cache.put("a", 1);
        cache.put("b", 2);
        // 更新 a 也应刷新使用顺序
        cache.put("a", 10);
        cache.put("c", 3);

        assert_eq!(cache.get(&"b"), None);
        assert_eq!(cache.get(&"a"), Some(&10));
    }

    #[test]
    fn test_peek_does_not_refresh() {
        let mut cache = LruCache::new(2);
        cache.put("a", 1);
        cache.put("b", 2);
        assert_eq!(cache.peek(&"a"), Some(&1));
        cache.put("c", 3);

        // peek 不刷新，a 仍是最久未使用
        assert!(!cache.contains(&"a"));
        assert!(cache.contains(&"b"));
    }

    #[test]
    fn test_zero_capacity() {
        let mut cache = LruCache::new(0);
        cache.put("a", 1);
        assert!(cache.is_empty());
        assert_eq!(cache.get(&"a"), None);
    }
}
