// Copyright 2025 the Thumbstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Deterministic manual-clock scheduler.
//!
//! [`ManualScheduler`] implements [`Scheduler`] over an explicit
//! millisecond clock that only moves when told to. It backs the gesture
//! test suites and suits hosts that pump time themselves (game loops,
//! simulations).
//!
//! ## Pumping
//!
//! Fire due timers one at a time so the sequencer can reschedule between
//! expiries, exactly as a real timer queue would interleave:
//!
//! ```rust
//! use thumbstick_gesture::{Scheduler, Timer, manual::ManualScheduler};
//!
//! let mut scheduler = ManualScheduler::new();
//! scheduler.schedule(150, Timer::Hold);
//!
//! assert_eq!(scheduler.fire_next_before(100), None);
//! assert_eq!(scheduler.fire_next_before(200), Some(Timer::Hold));
//! assert_eq!(scheduler.now_ms(), 150);
//! ```

use alloc::vec::Vec;

use crate::scheduler::{Scheduler, Timer};

#[derive(Copy, Clone, Debug)]
struct Entry {
    handle: u64,
    deadline_ms: u64,
    timer: Timer,
}

/// A [`Scheduler`] driven by an explicit clock.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    now_ms: u64,
    next_handle: u64,
    pending: Vec<Entry>,
}

impl ManualScheduler {
    /// Creates a scheduler with the clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current clock value in milliseconds.
    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of callbacks currently pending.
    #[must_use]
    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    /// The earliest pending deadline, if any.
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending.iter().map(|entry| entry.deadline_ms).min()
    }

    /// Fires the earliest pending callback whose deadline is at or before
    /// `limit_ms`, advancing the clock to that deadline.
    ///
    /// Returns `None` (leaving the clock untouched) when nothing is due.
    /// Callers deliver the returned [`Timer`] to the sequencer before
    /// pumping again, so rescheduling between expiries lands at the right
    /// time.
    pub fn fire_next_before(&mut self, limit_ms: u64) -> Option<Timer> {
        let index = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.deadline_ms <= limit_ms)
            .min_by_key(|(_, entry)| (entry.deadline_ms, entry.handle))
            .map(|(index, _)| index)?;
        let entry = self.pending.remove(index);
        self.now_ms = self.now_ms.max(entry.deadline_ms);
        Some(entry.timer)
    }

    /// Moves the clock forward without firing anything.
    ///
    /// A clock that would move backward stays put.
    pub fn advance_to(&mut self, now_ms: u64) {
        self.now_ms = self.now_ms.max(now_ms);
    }
}

impl Scheduler for ManualScheduler {
    type Handle = u64;

    fn schedule(&mut self, delay_ms: u64, timer: Timer) -> Self::Handle {
        let handle = self.next_handle;
        self.next_handle += 1;
        self.pending.push(Entry {
            handle,
            deadline_ms: self.now_ms + delay_ms,
            timer,
        });
        handle
    }

    fn cancel(&mut self, handle: Self::Handle) {
        self.pending.retain(|entry| entry.handle != handle);
    }
}
