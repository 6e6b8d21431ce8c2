//! 固定容量循环队列

use crate::error::{Error, Result};

/// 环形缓冲区实现的固定容量 FIFO 队列
///
/// 满时入队报错而不覆盖旧元素。
#[derive(Debug, Clone)]
pub struct CircularQueue<T> {
    buffer: Vec<Option<T>>,
    head: usize,
    len: usize,
    capacity: usize,
}

impl<T> CircularQueue<T> {
    /// 创建指定容量的队列
    pub fn new(capacity: usize) -> Self {
        let mut buffer = Vec::with_capacity(capacity);
        buffer.resize_with(capacity, || None);
        Self {
            buffer,
            head: 0,
            len: 0,
            capacity,
        }
    }

    /// 入队，满则报错
    pub fn enqueue(&mut self, value: T) -> Result<()> {
        if self.is_full() {
            return Err(Error::QueueFull(self.capacity));
        }
        let tail = (self.head + self.len) % self.capacity;
        self.buffer[tail] = Some(value);
        self.len += 1;
        Ok(())
    }

    /// 出队，空则返回 None
    pub fn dequeue(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        let value = self.buffer[self.head].take();
        self.head = (self.head + 1) % self.capacity;
        self.len -= 1;
        value
    }

    /// 队首元素
    pub fn front(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        self.buffer[self.head].as_ref()
    }

    /// 队尾元素
    pub fn rear(&self) -> Option<&T> {
        if self.is_empty() {
            return None;
        }
        let tail = (self.head + self.len - 1) % self.capacity;
        self.buffer[tail].as_ref()
    }

    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
