//! Deferred re-highlighting.
//!
//! Blocks whose highlighting may be stale are queued in a [`DirtyQueue`] and
//! re-processed in batches, either when a [`RehighlightTimer`] comes due or
//! synchronously after a bulk edit. A stale highlight for one interval is
//! acceptable; the queue only guarantees that every queued block is visited
//! once per batch.

use std::collections::{HashSet, VecDeque};
use std::hash::Hash;
use std::time::{Duration, Instant};

/// Default interval between two drains.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// Insertion-ordered set of blocks waiting to be re-highlighted.
#[derive(Debug, Clone)]
pub struct DirtyQueue<K> {
    order: VecDeque<K>,
    queued: HashSet<K>,
}

impl<K> Default for DirtyQueue<K> {
    fn default() -> Self {
        Self {
            order: VecDeque::new(),
            queued: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash + Clone> DirtyQueue<K> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues `key` unless it is already queued. Returns whether it was added.
    pub fn mark_dirty(&mut self, key: K) -> bool {
        if !self.queued.insert(key.clone()) {
            return false;
        }
        self.order.push_back(key);
        true
    }

    pub fn contains(&self, key: &K) -> bool {
        self.queued.contains(key)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Drops every queued key without processing it.
    pub fn clear(&mut self) {
        self.order.clear();
        self.queued.clear();
    }

    /// Removes and returns the current batch. Keys marked dirty afterwards go
    /// into the next batch.
    pub fn take_batch(&mut self) -> Vec<K> {
        self.queued.clear();
        self.order.drain(..).collect()
    }

    /// Hands every key of the current batch to `process` and returns how many
    /// there were.
    pub fn drain_with<F>(&mut self, mut process: F) -> usize
    where
        F: FnMut(K),
    {
        let batch = self.take_batch();
        let count = batch.len();
        batch.into_iter().for_each(&mut process);
        count
    }
}

/// Fixed-interval trigger polled from the host's event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RehighlightTimer {
    interval: Duration,
    last: Option<Instant>,
}

impl Default for RehighlightTimer {
    fn default() -> Self {
        Self::new(DEFAULT_INTERVAL)
    }
}

impl RehighlightTimer {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last: None,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns true when a full interval has passed since the last time this
    /// returned true. The first poll is always due.
    pub fn poll(&mut self, now: Instant) -> bool {
        let due = self
            .last
            .is_none_or(|last| now.saturating_duration_since(last) >= self.interval);
        if due {
            self.last = Some(now);
        }
        due
    }

    /// Time left until the next poll is due, for hosts that block on input.
    pub fn remaining(&self, now: Instant) -> Duration {
        match self.last {
            Some(last) => self
                .interval
                .saturating_sub(now.saturating_duration_since(last)),
            None => Duration::ZERO,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn marking_twice_queues_once() {
        let mut queue = DirtyQueue::new();
        assert!(queue.mark_dirty(3));
        assert!(!queue.mark_dirty(3));
        assert!(queue.mark_dirty(1));
        assert_eq!(queue.len(), 2);

        let mut seen = Vec::new();
        assert_eq!(queue.drain_with(|key| seen.push(key)), 2);
        assert_eq!(seen, vec![3, 1]);
        assert!(queue.is_empty());
    }

    #[test]
    fn keys_can_be_requeued_after_a_drain() {
        let mut queue = DirtyQueue::new();
        queue.mark_dirty("a");
        let batch = queue.take_batch();
        assert_eq!(batch, vec!["a"]);
        assert!(!queue.contains(&"a"));
        assert!(queue.mark_dirty("a"));
    }

    #[test]
    fn clear_drops_without_processing() {
        let mut queue = DirtyQueue::new();
        queue.mark_dirty(1);
        queue.mark_dirty(2);
        queue.clear();
        assert_eq!(queue.drain_with(|_| panic!("nothing should be processed")), 0);
    }

    #[test]
    fn timer_fires_once_per_interval() {
        let start = Instant::now();
        let mut timer = RehighlightTimer::new(Duration::from_millis(100));
        assert!(timer.poll(start));
        assert!(!timer.poll(start + Duration::from_millis(50)));
        assert_eq!(
            timer.remaining(start + Duration::from_millis(50)),
            Duration::from_millis(50)
        );
        assert!(timer.poll(start + Duration::from_millis(100)));
        assert!(!timer.poll(start + Duration::from_millis(150)));
    }
}
