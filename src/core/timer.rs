//! Cancellable scheduled events on a virtual clock.
//!
//! Every component that needs "do X after D" owns a `TimerQueue` of its own
//! event type. The host drives time forward by calling the owner's `tick`,
//! which drains due events one at a time so that handlers can schedule
//! follow-ups that land inside the same tick.
//!
//! ```
//! use std::time::Duration;
//! use photo_pairs::core::TimerQueue;
//!
//! let mut timers = TimerQueue::new();
//! let a = timers.schedule(Duration::from_secs(1), "flag");
//! timers.schedule(Duration::from_secs(2), "clear");
//! assert!(timers.cancel(a));
//!
//! let until = Duration::from_secs(5);
//! assert_eq!(timers.pop_due(until), Some("clear"));
//! assert_eq!(timers.pop_due(until), None);
//! ```

use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::time::Duration;

use rustc_hash::FxHashMap;

/// Handle to a scheduled event, used for cancellation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerHandle(u64);

impl TimerHandle {
    /// Get the raw handle value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for TimerHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Timer({})", self.0)
    }
}

/// Queue of events keyed by deadline on a virtual clock starting at zero.
///
/// Events sharing a deadline fire in the order they were scheduled.
/// Cancelled entries stay in the heap and are skipped lazily.
#[derive(Clone, Debug)]
pub struct TimerQueue<E> {
    now: Duration,
    next_id: u64,
    deadlines: BinaryHeap<Reverse<(Duration, u64)>>,
    pending: FxHashMap<u64, E>,
}

impl<E> Default for TimerQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> TimerQueue<E> {
    /// Create an empty queue with the clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            deadlines: BinaryHeap::new(),
            pending: FxHashMap::default(),
        }
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Schedule `event` to fire `delay` after the current time.
    pub fn schedule(&mut self, delay: Duration, event: E) -> TimerHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.deadlines.push(Reverse((self.now + delay, id)));
        self.pending.insert(id, event);
        TimerHandle(id)
    }

    /// Cancel a pending event.
    ///
    /// Returns false if the event already fired or was cancelled.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        self.pending.remove(&handle.0).is_some()
    }

    /// Cancel every pending event.
    pub fn cancel_all(&mut self) {
        self.pending.clear();
        self.deadlines.clear();
    }

    /// Check whether an event is still waiting to fire.
    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.pending.contains_key(&handle.0)
    }

    /// Number of events still waiting to fire.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    /// Deadline of the earliest pending event.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.deadlines
            .iter()
            .filter(|Reverse((_, id))| self.pending.contains_key(id))
            .map(|Reverse((deadline, _))| *deadline)
            .min()
    }

    /// Remove and return the earliest event due at or before `until`.
    ///
    /// The clock moves to the event's deadline, so anything the caller
    /// schedules in response is relative to the moment the event fired.
    pub fn pop_due(&mut self, until: Duration) -> Option<E> {
        while let Some(&Reverse((deadline, id))) = self.deadlines.peek() {
            if deadline > until {
                return None;
            }
            self.deadlines.pop();
            if let Some(event) = self.pending.remove(&id) {
                self.now = self.now.max(deadline);
                return Some(event);
            }
        }
        None
    }

    /// Move the clock forward without firing anything.
    ///
    /// The clock never moves backwards.
    pub fn advance_to(&mut self, instant: Duration) {
        self.now = self.now.max(instant);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: u64) -> Duration {
        Duration::from_secs(s)
    }

    #[test]
    fn test_fires_in_deadline_order() {
        let mut timers = TimerQueue::new();
        timers.schedule(secs(3), 'c');
        timers.schedule(secs(1), 'a');
        timers.schedule(secs(2), 'b');

        let fired: Vec<_> = std::iter::from_fn(|| timers.pop_due(secs(10))).collect();
        assert_eq!(fired, vec!['a', 'b', 'c']);
        assert_eq!(timers.now(), secs(3));
    }

    #[test]
    fn test_same_deadline_keeps_schedule_order() {
        let mut timers = TimerQueue::new();
        timers.schedule(secs(1), 1);
        timers.schedule(secs(1), 2);
        timers.schedule(secs(1), 3);

        let fired: Vec<_> = std::iter::from_fn(|| timers.pop_due(secs(1))).collect();
        assert_eq!(fired, vec![1, 2, 3]);
    }

    #[test]
    fn test_not_due_yet() {
        let mut timers = TimerQueue::new();
        timers.schedule(secs(5), ());

        assert_eq!(timers.pop_due(secs(4)), None);
        assert_eq!(timers.pending_count(), 1);
        assert_eq!(timers.next_deadline(), Some(secs(5)));
    }

    #[test]
    fn test_cancel() {
        let mut timers = TimerQueue::new();
        let handle = timers.schedule(secs(1), "x");

        assert!(timers.is_pending(handle));
        assert!(timers.cancel(handle));
        assert!(!timers.is_pending(handle));
        assert!(!timers.cancel(handle));

        assert_eq!(timers.pop_due(secs(10)), None);
        assert_eq!(timers.next_deadline(), None);
    }

    #[test]
    fn test_cancel_all() {
        let mut timers = TimerQueue::new();
        timers.schedule(secs(1), 1);
        timers.schedule(secs(2), 2);

        timers.cancel_all();

        assert_eq!(timers.pending_count(), 0);
        assert_eq!(timers.pop_due(secs(10)), None);
    }

    #[test]
    fn test_schedule_relative_to_fired_event() {
        let mut timers = TimerQueue::new();
        timers.schedule(secs(5), "first");
        timers.advance_to(secs(1));

        assert_eq!(timers.pop_due(secs(20)), Some("first"));
        // Clock sits at the fired deadline, not at `until`.
        timers.schedule(secs(5), "second");
        assert_eq!(timers.next_deadline(), Some(secs(10)));
    }

    #[test]
    fn test_clock_never_moves_backwards() {
        let mut timers: TimerQueue<()> = TimerQueue::new();
        timers.advance_to(secs(3));
        timers.advance_to(secs(1));
        assert_eq!(timers.now(), secs(3));
    }

    #[test]
    fn test_handle_display() {
        let mut timers = TimerQueue::new();
        let handle = timers.schedule(secs(1), ());
        assert_eq!(format!("{}", handle), "Timer(0)");
        assert_eq!(handle.raw(), 0);
    }
}
