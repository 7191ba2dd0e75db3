// Copyright 2025 the Thumbstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The delayed-callback capability the sequencer is built on.

/// Which of the sequencer's two timers a scheduled callback belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Timer {
    /// The repeating hold timer, armed on pointer down and re-armed after
    /// every hold tick.
    Hold,
    /// The active-hold timer, armed on pointer move; on expiry the pointer
    /// counts as held again and hold ticking resumes.
    ActiveHold,
}

/// A host-provided delayed-callback scheduler.
///
/// The sequencer schedules a [`Timer`] to fire after a delay and expects
/// the host to deliver the expiry back through
/// [`HoldSequencer::on_timer`](crate::HoldSequencer::on_timer). Handles
/// identify a specific pending callback so it can be cancelled.
///
/// Cancellation must be idempotent: cancelling a handle whose callback has
/// already fired, or was never scheduled, has no effect. No stronger
/// cancellation token is needed — everything runs on one thread, so there
/// is no concurrent execution to race against.
pub trait Scheduler {
    /// Identifies a pending callback.
    type Handle: core::fmt::Debug;

    /// Arrange for `timer` to be delivered after `delay_ms` milliseconds.
    fn schedule(&mut self, delay_ms: u64, timer: Timer) -> Self::Handle;

    /// Remove a pending callback. No-op if it already fired or was never
    /// scheduled.
    fn cancel(&mut self, handle: Self::Handle);
}
