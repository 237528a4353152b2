//! Deduplicating FIFO of scheduled removals

use glam::IVec3;
use std::collections::{HashMap, VecDeque};

/// FIFO of pending work keyed by world position
///
/// The position is the identity of an entry; the payload rides along. At
/// most one entry exists per position, and a position becomes free again the
/// moment its entry is dequeued. There is no depth cap.
#[derive(Debug, Clone)]
pub struct PendingQueue<T> {
    /// Arrival order of positions
    order: VecDeque<IVec3>,

    /// Payload for every queued position
    entries: HashMap<IVec3, T>,
}

impl<T> Default for PendingQueue<T> {
    fn default() -> Self {
        PendingQueue {
            order: VecDeque::new(),
            entries: HashMap::new(),
        }
    }
}

impl<T> PendingQueue<T> {
    /// Create an empty queue
    pub fn new() -> Self {
        PendingQueue::default()
    }

    /// Append an entry at the tail
    ///
    /// Returns `false` and leaves the queue unchanged if the position is
    /// already queued.
    pub fn enqueue(&mut self, position: IVec3, payload: T) -> bool {
        if self.entries.contains_key(&position) {
            return false;
        }
        self.entries.insert(position, payload);
        self.order.push_back(position);
        true
    }

    /// Remove up to `n` entries from the head, oldest first
    pub fn dequeue_up_to(&mut self, n: usize) -> Vec<(IVec3, T)> {
        let take = n.min(self.order.len());
        let mut batch = Vec::with_capacity(take);
        for position in self.order.drain(..take) {
            if let Some(payload) = self.entries.remove(&position) {
                batch.push((position, payload));
            }
        }
        batch
    }

    /// Check if a position is queued
    pub fn contains(&self, position: IVec3) -> bool {
        self.entries.contains_key(&position)
    }

    /// Payload queued at a position
    pub fn get(&self, position: IVec3) -> Option<&T> {
        self.entries.get(&position)
    }

    /// Get the number of queued entries
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if nothing is queued
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Queued positions, oldest first
    pub fn positions(&self) -> impl Iterator<Item = IVec3> + '_ {
        self.order.iter().copied()
    }

    /// Drop all queued entries, returning how many there were
    pub fn clear(&mut self) -> usize {
        let dropped = self.order.len();
        self.order.clear();
        self.entries.clear();
        dropped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_enqueue_dedups_by_position() {
        let mut queue = PendingQueue::new();
        let p = IVec3::new(4, 70, -2);
        assert!(queue.enqueue(p, "first"));
        assert!(!queue.enqueue(p, "second"));
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.get(p), Some(&"first"));
    }

    #[test]
    fn test_dedup_holds_for_many_positions() {
        let mut queue = PendingQueue::new();
        for x in -5..5 {
            for y in -5..5 {
                let p = IVec3::new(x, y, x * y);
                let before = queue.len();
                queue.enqueue(p, ());
                queue.enqueue(p, ());
                assert_eq!(queue.len(), before + 1);
            }
        }
    }

    #[test]
    fn test_fifo_order() {
        let mut queue = PendingQueue::new();
        for y in 0..5 {
            queue.enqueue(IVec3::new(0, y, 0), y);
        }
        let batch = queue.dequeue_up_to(3);
        let payloads: Vec<i32> = batch.into_iter().map(|(_, y)| y).collect();
        assert_eq!(payloads, vec![0, 1, 2]);
        assert_eq!(
            queue.positions().collect::<Vec<_>>(),
            vec![IVec3::new(0, 3, 0), IVec3::new(0, 4, 0)]
        );
    }

    #[test]
    fn test_dequeue_more_than_available() {
        let mut queue = PendingQueue::new();
        queue.enqueue(IVec3::X, 'a');
        queue.enqueue(IVec3::Y, 'b');
        assert_eq!(queue.dequeue_up_to(10).len(), 2);
        assert!(queue.is_empty());
        assert!(queue.dequeue_up_to(10).is_empty());
    }

    #[test]
    fn test_position_reusable_after_dequeue() {
        let mut queue = PendingQueue::new();
        assert!(queue.enqueue(IVec3::ZERO, 1));
        queue.dequeue_up_to(1);
        assert!(!queue.contains(IVec3::ZERO));
        assert!(queue.enqueue(IVec3::ZERO, 2));
    }

    #[test]
    fn test_clear() {
        let mut queue = PendingQueue::new();
        queue.enqueue(IVec3::X, ());
        queue.enqueue(IVec3::Z, ());
        assert_eq!(queue.clear(), 2);
        assert!(queue.is_empty());
        assert!(!queue.contains(IVec3::X));
    }
}
