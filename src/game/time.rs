//! Time and scheduling collaborators
//!
//! The skill core asks the host for the current time and to run a buff
//! expiry after a delay. It never drives a loop itself.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::time::{SystemTime, UNIX_EPOCH};

use crate::combat::BuffTimer;

/// Source of the current time in milliseconds
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0)
    }
}

/// Clock advanced by hand; clones share the same time
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<u64>>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self { now: Rc::new(Cell::new(start_ms)) }
    }

    pub fn advance(&self, ms: u64) {
        self.now.set(self.now.get() + ms);
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

/// "Run this after N milliseconds" primitive
///
/// The timer is handed back to [`crate::combat::SkillRuntime::on_timer`]
/// when it fires. Hosts without cancellation may fire stale timers; the
/// runtime ignores them.
pub trait Scheduler {
    fn schedule(&mut self, delay_ms: u64, timer: BuffTimer);
}

/// Scheduler that drops every request; expiry then relies on `tick`
#[derive(Debug, Clone, Copy, Default)]
pub struct NoScheduler;

impl Scheduler for NoScheduler {
    fn schedule(&mut self, _delay_ms: u64, _timer: BuffTimer) {}
}

/// In-memory timer queue polled by the host each frame; clones share the queue
#[derive(Debug, Clone)]
pub struct TimerQueue<C: Clock> {
    clock: C,
    pending: Rc<RefCell<Vec<(u64, BuffTimer)>>>,
}

impl<C: Clock> TimerQueue<C> {
    pub fn new(clock: C) -> Self {
        Self { clock, pending: Rc::new(RefCell::new(Vec::new())) }
    }

    /// Remove and return every timer due at or before `now`, earliest first
    pub fn take_due(&self, now_ms: u64) -> Vec<BuffTimer> {
        let mut pending = self.pending.borrow_mut();
        let mut due: Vec<(u64, BuffTimer)> = Vec::new();
        pending.retain(|entry| {
            if entry.0 <= now_ms {
                due.push(entry.clone());
                false
            } else {
                true
            }
        });
        due.sort_by_key(|(at, _)| *at);
        due.into_iter().map(|(_, timer)| timer).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.borrow().is_empty()
    }
}

impl<C: Clock> Scheduler for TimerQueue<C> {
    fn schedule(&mut self, delay_ms: u64, timer: BuffTimer) {
        let due = self.clock.now_ms() + delay_ms;
        self.pending.borrow_mut().push((due, timer));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn timer(id: &str, expires_at: u64) -> BuffTimer {
        BuffTimer { skill_id: id.to_string(), expires_at }
    }

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::new(100);
        let other = clock.clone();
        clock.advance(50);
        assert_eq!(other.now_ms(), 150);
    }

    #[test]
    fn test_timer_queue_releases_due_timers_in_order() {
        let clock = ManualClock::new(0);
        let mut queue = TimerQueue::new(clock.clone());
        queue.schedule(300, timer("B", 300));
        queue.schedule(100, timer("A", 100));
        queue.schedule(900, timer("C", 900));

        assert!(queue.take_due(50).is_empty());
        let due = queue.take_due(300);
        assert_eq!(due, vec![timer("A", 100), timer("B", 300)]);
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn test_system_clock_is_nonzero() {
        assert!(SystemClock.now_ms() > 0);
    }
}
