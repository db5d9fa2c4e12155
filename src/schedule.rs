//! Scheduling Primitives
//!
//! Explicit queues for work that runs after the current synchronous step.
//!
//! - [`DeferredQueue`]: actions collected during startup and drained once
//!   setup has finished.
//! - [`TimerQueue`]: a virtual clock for delayed follow-ups, used to drive
//!   panel transitions deterministically outside a browser.

use std::collections::VecDeque;
use std::time::Duration;

/// FIFO of actions to run after synchronous initialization completes
#[derive(Debug)]
pub struct DeferredQueue<A> {
    pending: VecDeque<A>,
}

impl<A> Default for DeferredQueue<A> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A> DeferredQueue<A> {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::new(),
        }
    }

    /// Schedule an action. It runs on the next [`drain`](Self::drain).
    pub fn enqueue(&mut self, action: A) {
        self.pending.push_back(action);
    }

    /// Take every pending action in the order it was enqueued.
    pub fn drain(&mut self) -> impl Iterator<Item = A> {
        std::mem::take(&mut self.pending).into_iter()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

#[derive(Debug)]
struct Entry<T> {
    due: Duration,
    seq: u64,
    item: T,
}

/// Virtual-time timer queue
///
/// Items fire in due order; items due at the same instant fire in the order
/// they were scheduled. Nothing is ever cancelled.
#[derive(Debug)]
pub struct TimerQueue<T> {
    now: Duration,
    next_seq: u64,
    entries: Vec<Entry<T>>,
}

impl<T> Default for TimerQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> TimerQueue<T> {
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_seq: 0,
            entries: Vec::new(),
        }
    }

    /// Current virtual time
    pub fn now(&self) -> Duration {
        self.now
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Schedule `item` to fire `delay` after the current virtual time.
    pub fn schedule(&mut self, delay: Duration, item: T) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.entries.push(Entry {
            due: self.now + delay,
            seq,
            item,
        });
    }

    /// Remove the earliest item due at or before `deadline`, moving the
    /// clock to its due time.
    fn pop_due(&mut self, deadline: Duration) -> Option<T> {
        let index = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.due <= deadline)
            .min_by_key(|(_, e)| (e.due, e.seq))
            .map(|(i, _)| i)?;

        let entry = self.entries.swap_remove(index);
        self.now = entry.due;
        Some(entry.item)
    }

    /// Advance the clock by `by`, firing everything that falls due.
    ///
    /// `on_fire` receives the queue so a fired item can schedule follow-ups;
    /// follow-ups that fall inside the window fire in the same call.
    pub fn advance<F>(&mut self, by: Duration, mut on_fire: F)
    where
        F: FnMut(&mut Self, T),
    {
        let deadline = self.now + by;
        while let Some(item) = self.pop_due(deadline) {
            on_fire(self, item);
        }
        self.now = deadline;
    }

    /// Fire everything still pending, however far away.
    pub fn run_until_idle<F>(&mut self, mut on_fire: F)
    where
        F: FnMut(&mut Self, T),
    {
        while let Some(item) = self.pop_due(Duration::MAX) {
            on_fire(self, item);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deferred_queue_fifo() {
        let mut queue = DeferredQueue::new();
        queue.enqueue("first");
        queue.enqueue("second");
        assert_eq!(queue.len(), 2);

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(drained, vec!["first", "second"]);
        assert!(queue.is_empty());
        assert_eq!(queue.drain().count(), 0);
    }

    #[test]
    fn test_timer_queue_fires_in_due_order() {
        let mut timers = TimerQueue::new();
        timers.schedule(Duration::from_millis(300), "hide");
        timers.schedule(Duration::from_millis(10), "reveal");
        timers.schedule(Duration::from_millis(50), "reopen");

        let mut fired = Vec::new();
        timers.advance(Duration::from_millis(60), |_, item| fired.push(item));
        assert_eq!(fired, vec!["reveal", "reopen"]);
        assert_eq!(timers.now(), Duration::from_millis(60));
        assert_eq!(timers.len(), 1);

        timers.advance(Duration::from_millis(240), |_, item| fired.push(item));
        assert_eq!(fired, vec!["reveal", "reopen", "hide"]);
        assert!(timers.is_empty());
    }

    #[test]
    fn test_timer_queue_ties_keep_schedule_order() {
        let mut timers = TimerQueue::new();
        timers.schedule(Duration::from_millis(10), 1);
        timers.schedule(Duration::from_millis(10), 2);
        timers.schedule(Duration::from_millis(10), 3);

        let mut fired = Vec::new();
        timers.run_until_idle(|_, item| fired.push(item));
        assert_eq!(fired, vec![1, 2, 3]);
    }

    #[test]
    fn test_follow_ups_fire_within_window() {
        let mut timers = TimerQueue::new();
        timers.schedule(Duration::from_millis(50), "reopen");

        let mut fired = Vec::new();
        timers.advance(Duration::from_millis(100), |queue, item| {
            fired.push((queue.now().as_millis(), item));
            if item == "reopen" {
                queue.schedule(Duration::from_millis(10), "reveal");
            }
        });
        assert_eq!(fired, vec![(50, "reopen"), (60, "reveal")]);
        assert_eq!(timers.now(), Duration::from_millis(100));
    }
}
