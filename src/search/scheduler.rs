//! Cancellable one-shot timers.
//!
//! The search controller debounces input through a [`Scheduler`]. Timers are
//! never run as callbacks; the owner polls [`Scheduler::take_expired`] from
//! its event loop and decides what an expired timer means. This keeps the
//! whole search path single-threaded and lets tests drive time by hand with
//! [`VirtualScheduler`].

use std::collections::BTreeMap;
use std::time::{Duration, Instant};

/// Handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

impl TimerId {
    pub fn value(&self) -> u64 {
        self.0
    }
}

/// A source of cancellable one-shot timers.
pub trait Scheduler {
    /// Schedule a timer that expires after `delay`.
    fn schedule(&mut self, delay: Duration) -> TimerId;

    /// Cancel a pending timer. Returns false if it already expired or was
    /// cancelled before.
    fn cancel(&mut self, id: TimerId) -> bool;

    /// Remove and return every timer whose deadline has passed, earliest
    /// deadline first.
    fn take_expired(&mut self) -> Vec<TimerId>;

    /// Time left until the earliest pending deadline, `None` when idle.
    fn time_until_next(&self) -> Option<Duration>;

    /// Number of timers still pending.
    fn pending(&self) -> usize;
}

/// Drain the entries of `timers` whose deadline is at or before `now`.
fn drain_expired<T: Ord + Copy>(timers: &mut BTreeMap<TimerId, T>, now: T) -> Vec<TimerId> {
    let mut expired: Vec<(T, TimerId)> = timers
        .iter()
        .filter(|(_, deadline)| **deadline <= now)
        .map(|(id, deadline)| (*deadline, *id))
        .collect();
    expired.sort();

    for (_, id) in &expired {
        timers.remove(id);
    }
    expired.into_iter().map(|(_, id)| id).collect()
}

/// A scheduler driven by a manually advanced virtual clock.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use apifinder::search::scheduler::{Scheduler, VirtualScheduler};
///
/// let mut scheduler = VirtualScheduler::new();
/// let timer = scheduler.schedule(Duration::from_millis(150));
///
/// scheduler.advance(Duration::from_millis(149));
/// assert!(scheduler.take_expired().is_empty());
///
/// scheduler.advance(Duration::from_millis(1));
/// assert_eq!(scheduler.take_expired(), vec![timer]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct VirtualScheduler {
    now: Duration,
    next_id: u64,
    timers: BTreeMap<TimerId, Duration>,
}

impl VirtualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current virtual time since creation.
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Move the virtual clock forward.
    pub fn advance(&mut self, by: Duration) {
        self.now += by;
    }
}

impl Scheduler for VirtualScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.insert(id, self.now + delay);
        id
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        self.timers.remove(&id).is_some()
    }

    fn take_expired(&mut self) -> Vec<TimerId> {
        drain_expired(&mut self.timers, self.now)
    }

    fn time_until_next(&self) -> Option<Duration> {
        self.timers
            .values()
            .min()
            .map(|deadline| deadline.saturating_sub(self.now))
    }

    fn pending(&self) -> usize {
        self.timers.len()
    }
}

/// A scheduler backed by the monotonic system clock.
#[derive(Debug, Clone, Default)]
pub struct WallClockScheduler {
    next_id: u64,
    timers: BTreeMap<TimerId, Instant>,
}

impl WallClockScheduler {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Scheduler for WallClockScheduler {
    fn schedule(&mut self, delay: Duration) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.insert(id, Instant::now() + delay);
        id
    }

    fn cancel(&mut self, id: TimerId) -> bool {
        self.timers.remove(&id).is_some()
    }

    fn take_expired(&mut self) -> Vec<TimerId> {
        drain_expired(&mut self.timers, Instant::now())
    }

    fn time_until_next(&self) -> Option<Duration> {
        let now = Instant::now();
        self.timers
            .values()
            .min()
            .map(|deadline| deadline.saturating_duration_since(now))
    }

    fn pending(&self) -> usize {
        self.timers.len()
    }
}
