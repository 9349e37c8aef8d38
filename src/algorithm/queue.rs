//! 按评分函数排序的最小优先队列
//!
//! 允许同一元素重复入队，不支持降低键值或删除旧条目；
//! 调用方需要自己忽略过期条目。

use priority_queue::PriorityQueue;
use std::cmp::{Ordering, Reverse};
use std::collections::HashMap;

/// 可全序比较的评分，NaN 按 `f64::total_cmp` 排在最后
#[derive(Debug, Clone, Copy)]
struct Score(f64);

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Score {}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

/// 最小优先队列
///
/// 评分在入队时计算一次。评分相同的元素按入队顺序出队。
pub struct ScoredQueue<T, F>
where
    F: Fn(&T) -> f64,
{
    score: F,
    heap: PriorityQueue<u64, Reverse<(Score, u64)>>,
    items: HashMap<u64, T>,
    next_seq: u64,
}

impl<T, F> ScoredQueue<T, F>
where
    F: Fn(&T) -> f64,
{
    /// 以评分函数创建空队列
    pub fn new(score: F) -> Self {
        Self {
            score,
            heap: PriorityQueue::new(),
            items: HashMap::new(),
            next_seq: 0,
        }
    }

    /// 入队，允许重复
    pub fn push(&mut self, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;

        let score = Score((self.score)(&item));
        self.items.insert(seq, item);
        self.heap.push(seq, Reverse((score, seq)));
    }

    /// 取出评分最小的元素
    pub fn pop(&mut self) -> Option<T> {
        let (seq, _) = self.heap.pop()?;
        self.items.remove(&seq)
    }

    /// 查看评分最小的元素
    pub fn peek(&self) -> Option<&T> {
        let (seq, _) = self.heap.peek()?;
        self.items.get(seq)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pops_in_score_order() {
        let mut queue = ScoredQueue::new(|x: &i32| *x as f64);
        for x in [5, 1, 4, 2, 3] {
            queue.push(x);
        }

        let mut out = Vec::new();
        while let Some(x) = queue.pop() {
            out.push(x);
        }
        assert_eq!(out, vec![1, 2, 3, 4, 5]);
        assert!(queue.pop().is_none());
    }

    #[test]
    fn test_duplicates_kept() {
        let mut queue = ScoredQueue::new(|&(_, key): &(&str, f64)| key);
        queue.push(("a", 3.0));
        queue.push(("a", 1.0));
        queue.push(("b", 2.0));

        assert_eq!(queue.len(), 3);
        assert_eq!(queue.peek(), Some(&("a", 1.0)));
        assert_eq!(queue.pop(), Some(("a", 1.0)));
        assert_eq!(queue.pop(), Some(("b", 2.0)));
        assert_eq!(queue.pop(), Some(("a", 3.0)));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_ties_are_fifo() {
        let mut queue = ScoredQueue::new(|_: &char| 0.0);
        for c in ['x', 'y', 'z'] {
            queue.push(c);
        }
        assert_eq!(queue.pop(), Some('x'));
        assert_eq!(queue.pop(), Some('y'));
        assert_eq!(queue.pop(), Some('z'));
    }

    #[test]
    fn test_infinity_sorts_last() {
        let mut queue = ScoredQueue::new(|x: &f64| *x);
        queue.push(f64::INFINITY);
        queue.push(0.0);
        assert_eq!(queue.pop(), Some(0.0));
        assert_eq!(queue.pop(), Some(f64::INFINITY));
    }
}
