#![forbid(unsafe_code)]

//! Timer scheduling and the after-render queue.
//!
//! A [`Scheduler`] holds two kinds of pending work for its host:
//!
//! - **Timers**: tasks due at `now + delay`, ordered by deadline and then by
//!   scheduling order, so two timers with the same deadline fire in the order
//!   they were armed.
//! - **After-render tasks**: tasks to run once the current flush has settled
//!   layout. Scheduling the same task twice in one flush queues it once.
//!
//! # Invariants
//!
//! 1. A cancelled timer is removed from the queue; it can never be popped.
//! 2. `pop_due` never returns a timer whose deadline is past the bound, and
//!    moves the clock to the popped deadline, so work scheduled from inside a
//!    delivered task is measured from the instant the task fired.
//! 3. Handles are never reused: each carries a unique sequence number.
//!
//! [`TimerSlot`] layers "at most one pending timer of this kind" on top:
//! arming a slot always cancels the timer it held.

use std::collections::{BTreeMap, VecDeque};

use web_time::Duration;

use crate::clock::DeterministicClock;

/// Opaque handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimerHandle {
    deadline: Duration,
    seq: u64,
}

impl TimerHandle {
    /// Instant at which the timer is due.
    #[must_use]
    pub const fn deadline(&self) -> Duration {
        self.deadline
    }
}

/// Deterministic timer queue plus after-render queue.
#[derive(Debug)]
pub struct Scheduler<T> {
    clock: DeterministicClock,
    next_seq: u64,
    timers: BTreeMap<TimerHandle, T>,
    render_queue: VecDeque<T>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Scheduler<T> {
    /// Create an empty scheduler with its clock at `0`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            clock: DeterministicClock::new(),
            next_seq: 0,
            timers: BTreeMap::new(),
            render_queue: VecDeque::new(),
        }
    }

    /// Current scheduler time.
    #[must_use]
    pub const fn now(&self) -> Duration {
        self.clock.now()
    }

    /// Schedule `task` to be due after `delay`.
    pub fn later(&mut self, delay: Duration, task: T) -> TimerHandle {
        let handle = TimerHandle {
            deadline: self.clock.now().saturating_add(delay),
            seq: self.next_seq,
        };
        self.next_seq += 1;
        tracing::trace!(
            message = "scheduler.later",
            seq = handle.seq,
            deadline_ms = handle.deadline.as_millis() as u64
        );
        self.timers.insert(handle, task);
        handle
    }

    /// Cancel a pending timer. Returns `true` if it was still pending.
    pub fn cancel(&mut self, handle: TimerHandle) -> bool {
        let removed = self.timers.remove(&handle).is_some();
        if removed {
            tracing::trace!(message = "scheduler.cancel", seq = handle.seq);
        }
        removed
    }

    /// Whether `handle` is still pending.
    #[must_use]
    pub fn is_pending(&self, handle: TimerHandle) -> bool {
        self.timers.contains_key(&handle)
    }

    /// Number of pending timers.
    #[must_use]
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }

    /// Deadline of the earliest pending timer.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.keys().next().map(TimerHandle::deadline)
    }

    /// Pop the earliest timer due at or before `until`.
    ///
    /// The clock moves forward to the popped timer's deadline.
    pub fn pop_due(&mut self, until: Duration) -> Option<(TimerHandle, T)> {
        let handle = *self.timers.keys().next()?;
        if handle.deadline > until {
            return None;
        }
        let task = self.timers.remove(&handle)?;
        self.clock.set(handle.deadline);
        Some((handle, task))
    }

    /// Move the clock forward to `until` without popping anything.
    pub fn advance_to(&mut self, until: Duration) {
        self.clock.set(until);
    }

    /// Queue `task` for the next after-render drain.
    ///
    /// Returns `false` if an equal task is already queued.
    pub fn schedule_after_render(&mut self, task: T) -> bool
    where
        T: PartialEq,
    {
        if self.render_queue.contains(&task) {
            return false;
        }
        self.render_queue.push_back(task);
        true
    }

    /// Pop the next after-render task.
    pub fn pop_render(&mut self) -> Option<T> {
        self.render_queue.pop_front()
    }

    /// Number of queued after-render tasks.
    #[must_use]
    pub fn render_pending(&self) -> usize {
        self.render_queue.len()
    }
}

/// A single-occupancy timer: arming cancels whatever the slot held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimerSlot {
    handle: Option<TimerHandle>,
}

impl TimerSlot {
    /// An empty slot.
    #[must_use]
    pub const fn new() -> Self {
        Self { handle: None }
    }

    /// Cancel the held timer (if any) and schedule a new one.
    pub fn arm<T>(
        &mut self,
        scheduler: &mut Scheduler<T>,
        delay: Duration,
        task: T,
    ) -> TimerHandle {
        self.cancel(scheduler);
        let handle = scheduler.later(delay, task);
        self.handle = Some(handle);
        handle
    }

    /// Cancel the held timer. Returns `true` if one was pending.
    pub fn cancel<T>(&mut self, scheduler: &mut Scheduler<T>) -> bool {
        match self.handle.take() {
            Some(handle) => scheduler.cancel(handle),
            None => false,
        }
    }

    /// Whether the slot holds a timer that has not been settled.
    #[must_use]
    pub const fn is_armed(&self) -> bool {
        self.handle.is_some()
    }

    /// Clear the slot for a timer that just fired.
    ///
    /// Returns `false` (and leaves the slot alone) when `fired` is not the
    /// timer this slot holds, so a stale delivery is ignored.
    pub fn settle(&mut self, fired: TimerHandle) -> bool {
        if self.handle == Some(fired) {
            self.handle = None;
            true
        } else {
            false
        }
    }
}
