// Copyright 2025 the Thumbstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The gesture timing state machine.

use core::fmt;

use crate::scheduler::{Scheduler, Timer};

/// Minimum effective timer interval in milliseconds.
///
/// Positive intervals below this clamp up to it; zero is rejected outright
/// with [`IntervalError`].
pub const MIN_INTERVAL_MS: u64 = 10;

/// Error returned when a sequencer is constructed with a zero interval.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IntervalError {
    /// The offending interval, in milliseconds.
    pub millis: u64,
}

impl fmt::Display for IntervalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "invalid timer interval {} ms: interval must be positive",
            self.millis
        )
    }
}

impl core::error::Error for IntervalError {}

/// Kind of a raw pointer event.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PointerKind {
    /// The pointer went down.
    Down,
    /// The pointer moved while down.
    Move,
    /// The pointer was released.
    Up,
    /// Anything else the host wants routed through the fallback handler
    /// (platform cancel events, stray hover events, and so on).
    Cancel,
}

/// A raw pointer event as delivered by the host.
///
/// Coordinates are `f32` at the host boundary; consumers convert to f64
/// kurbo types where precision matters.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct PointerEvent {
    /// Event kind.
    pub kind: PointerKind,
    /// Pointer X coordinate in host-local units.
    pub x: f32,
    /// Pointer Y coordinate in host-local units.
    pub y: f32,
    /// Host timestamp in milliseconds.
    pub timestamp_ms: i64,
}

impl PointerEvent {
    /// A pointer-down event.
    #[must_use]
    pub fn down(x: f32, y: f32, timestamp_ms: i64) -> Self {
        Self {
            kind: PointerKind::Down,
            x,
            y,
            timestamp_ms,
        }
    }

    /// A pointer-move event.
    #[must_use]
    pub fn moved(x: f32, y: f32, timestamp_ms: i64) -> Self {
        Self {
            kind: PointerKind::Move,
            x,
            y,
            timestamp_ms,
        }
    }

    /// A pointer-up event.
    #[must_use]
    pub fn up(x: f32, y: f32, timestamp_ms: i64) -> Self {
        Self {
            kind: PointerKind::Up,
            x,
            y,
            timestamp_ms,
        }
    }

    /// A fallback event.
    #[must_use]
    pub fn cancel(x: f32, y: f32, timestamp_ms: i64) -> Self {
        Self {
            kind: PointerKind::Cancel,
            x,
            y,
            timestamp_ms,
        }
    }
}

/// Receives the discrete callbacks the sequencer derives from raw events.
pub trait GestureListener {
    /// The pointer went down.
    fn on_down(&mut self, event: &PointerEvent);
    /// The pointer moved while down.
    fn on_move(&mut self, event: &PointerEvent);
    /// The pointer was released.
    fn on_up(&mut self, event: &PointerEvent);
    /// A hold tick: the pointer has stayed down (or rested after a drag)
    /// for a full interval.
    fn on_hold(&mut self);
    /// An event outside the down/move/up set. Returns whether it was
    /// consumed.
    fn on_fallback(&mut self, event: &PointerEvent) -> bool {
        let _ = event;
        false
    }
}

/// Converts a raw pointer-event stream into down/move/up/hold callbacks.
///
/// Two independent intervals drive hold detection:
///
/// - the **hold interval** runs while the pointer is pressed and re-arms
///   after every tick, so press-and-hold keeps emitting;
/// - the **active-hold interval** is armed on every move; when it expires
///   without further motion the pointer counts as held again and hold
///   ticking resumes (drag-and-pause).
///
/// Pending timers are always cancelled before a new one is scheduled, so
/// at most one timer of each kind is pending at any time.
#[derive(Debug)]
pub struct HoldSequencer<S: Scheduler> {
    scheduler: S,
    hold_interval_ms: u64,
    active_hold_interval_ms: u64,
    held: bool,
    pending_hold: Option<S::Handle>,
    pending_active: Option<S::Handle>,
}

impl<S: Scheduler> HoldSequencer<S> {
    /// Creates a sequencer with the same interval for hold and active-hold.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError`] if `hold_interval_ms` is zero. Positive
    /// values below [`MIN_INTERVAL_MS`] clamp up to it.
    pub fn new(scheduler: S, hold_interval_ms: u64) -> Result<Self, IntervalError> {
        Self::with_intervals(scheduler, hold_interval_ms, hold_interval_ms)
    }

    /// Creates a sequencer with distinct hold and active-hold intervals.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError`] if either interval is zero.
    pub fn with_intervals(
        scheduler: S,
        hold_interval_ms: u64,
        active_hold_interval_ms: u64,
    ) -> Result<Self, IntervalError> {
        Ok(Self {
            scheduler,
            hold_interval_ms: validate_interval(hold_interval_ms)?,
            active_hold_interval_ms: validate_interval(active_hold_interval_ms)?,
            held: false,
            pending_hold: None,
            pending_active: None,
        })
    }

    /// The effective hold interval in milliseconds.
    #[must_use]
    pub fn hold_interval_ms(&self) -> u64 {
        self.hold_interval_ms
    }

    /// The effective active-hold interval in milliseconds.
    #[must_use]
    pub fn active_hold_interval_ms(&self) -> u64 {
        self.active_hold_interval_ms
    }

    /// Whether the pointer currently counts as held.
    #[must_use]
    pub fn is_held(&self) -> bool {
        self.held
    }

    /// Access to the underlying scheduler (hosts pump fake clocks through
    /// this; see [`crate::manual::ManualScheduler`]).
    pub fn scheduler_mut(&mut self) -> &mut S {
        &mut self.scheduler
    }

    /// Feeds one raw pointer event through the state machine.
    ///
    /// Returns whether the event was consumed. Down/move/up are always
    /// consumed; anything else is offered to the listener's fallback.
    pub fn on_pointer_event(
        &mut self,
        event: &PointerEvent,
        listener: &mut impl GestureListener,
    ) -> bool {
        match event.kind {
            PointerKind::Down => {
                self.cancel_pending();
                self.held = true;
                listener.on_down(event);
                self.arm_hold();
                true
            }
            PointerKind::Move => {
                self.cancel_pending();
                listener.on_move(event);
                self.arm_active_hold();
                true
            }
            PointerKind::Up => {
                self.cancel_pending();
                self.held = false;
                listener.on_up(event);
                true
            }
            PointerKind::Cancel => listener.on_fallback(event),
        }
    }

    /// Delivers a timer expiry scheduled through the [`Scheduler`].
    ///
    /// The pending handle is cancelled, not just forgotten: cancellation
    /// is idempotent, so the normal fired-expiry path is unaffected, and
    /// an expiry delivered early (or twice) by a sloppy host cannot leave
    /// an orphaned entry behind in the scheduler.
    pub fn on_timer(&mut self, timer: Timer, listener: &mut impl GestureListener) {
        match timer {
            Timer::Hold => {
                if let Some(handle) = self.pending_hold.take() {
                    self.scheduler.cancel(handle);
                }
                if self.held {
                    listener.on_hold();
                    self.arm_hold();
                }
            }
            Timer::ActiveHold => {
                if let Some(handle) = self.pending_active.take() {
                    self.scheduler.cancel(handle);
                }
                self.held = true;
                listener.on_hold();
                self.arm_hold();
            }
        }
    }

    fn arm_hold(&mut self) {
        if let Some(handle) = self.pending_hold.take() {
            self.scheduler.cancel(handle);
        }
        self.pending_hold = Some(self.scheduler.schedule(self.hold_interval_ms, Timer::Hold));
    }

    fn arm_active_hold(&mut self) {
        if let Some(handle) = self.pending_active.take() {
            self.scheduler.cancel(handle);
        }
        self.pending_active = Some(
            self.scheduler
                .schedule(self.active_hold_interval_ms, Timer::ActiveHold),
        );
    }

    fn cancel_pending(&mut self) {
        if let Some(handle) = self.pending_hold.take() {
            self.scheduler.cancel(handle);
        }
        if let Some(handle) = self.pending_active.take() {
            self.scheduler.cancel(handle);
        }
    }
}

fn validate_interval(interval_ms: u64) -> Result<u64, IntervalError> {
    if interval_ms == 0 {
        return Err(IntervalError {
            millis: interval_ms,
        });
    }
    Ok(interval_ms.max(MIN_INTERVAL_MS))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::manual::ManualScheduler;
    use alloc::vec::Vec;

    #[derive(Copy, Clone, Debug, PartialEq, Eq)]
    enum Call {
        Down,
        Move,
        Up,
        Hold,
        Fallback,
    }

    #[derive(Default)]
    struct Log {
        calls: Vec<Call>,
        consume_fallback: bool,
    }

    impl GestureListener for Log {
        fn on_down(&mut self, _event: &PointerEvent) {
            self.calls.push(Call::Down);
        }
        fn on_move(&mut self, _event: &PointerEvent) {
            self.calls.push(Call::Move);
        }
        fn on_up(&mut self, _event: &PointerEvent) {
            self.calls.push(Call::Up);
        }
        fn on_hold(&mut self) {
            self.calls.push(Call::Hold);
        }
        fn on_fallback(&mut self, _event: &PointerEvent) -> bool {
            self.calls.push(Call::Fallback);
            self.consume_fallback
        }
    }

    fn sequencer(interval: u64) -> HoldSequencer<ManualScheduler> {
        HoldSequencer::new(ManualScheduler::new(), interval).unwrap()
    }

    #[test]
    fn zero_interval_is_rejected() {
        let err = HoldSequencer::new(ManualScheduler::new(), 0).unwrap_err();
        assert_eq!(err, IntervalError { millis: 0 });
        assert!(HoldSequencer::with_intervals(ManualScheduler::new(), 150, 0).is_err());
    }

    #[test]
    fn tiny_intervals_clamp_to_the_minimum() {
        let sequencer = sequencer(1);
        assert_eq!(sequencer.hold_interval_ms(), MIN_INTERVAL_MS);
        assert_eq!(sequencer.active_hold_interval_ms(), MIN_INTERVAL_MS);
    }

    #[test]
    fn down_emits_and_arms_the_hold_timer() {
        let mut log = Log::default();
        let mut sequencer = sequencer(150);

        assert!(sequencer.on_pointer_event(&PointerEvent::down(5.0, 5.0, 0), &mut log));
        assert!(sequencer.is_held());
        assert_eq!(log.calls, [Call::Down]);
        assert_eq!(sequencer.scheduler_mut().next_deadline(), Some(150));
    }

    #[test]
    fn up_cancels_everything() {
        let mut log = Log::default();
        let mut sequencer = sequencer(150);

        sequencer.on_pointer_event(&PointerEvent::down(5.0, 5.0, 0), &mut log);
        sequencer.on_pointer_event(&PointerEvent::up(5.0, 5.0, 50), &mut log);

        assert!(!sequencer.is_held());
        assert_eq!(sequencer.scheduler_mut().pending_len(), 0);
        assert_eq!(log.calls, [Call::Down, Call::Up]);
    }

    #[test]
    fn repeated_downs_never_stack_timers() {
        let mut log = Log::default();
        let mut sequencer = sequencer(150);

        for t in 0..5 {
            sequencer.on_pointer_event(&PointerEvent::down(5.0, 5.0, t), &mut log);
            assert_eq!(sequencer.scheduler_mut().pending_len(), 1);
        }
    }

    #[test]
    fn hold_does_not_fire_after_release() {
        let mut log = Log::default();
        let mut sequencer = sequencer(150);

        sequencer.on_pointer_event(&PointerEvent::down(5.0, 5.0, 0), &mut log);
        sequencer.on_pointer_event(&PointerEvent::up(5.0, 5.0, 50), &mut log);

        // Even a stray expiry delivered by a sloppy host is ignored while
        // the pointer is not held.
        sequencer.on_timer(Timer::Hold, &mut log);
        assert_eq!(log.calls, [Call::Down, Call::Up]);
        assert_eq!(sequencer.scheduler_mut().pending_len(), 0);
    }

    #[test]
    fn active_hold_expiry_promotes_to_held() {
        let mut log = Log::default();
        let mut sequencer = sequencer(150);

        sequencer.on_pointer_event(&PointerEvent::down(5.0, 5.0, 0), &mut log);
        sequencer.on_pointer_event(&PointerEvent::moved(8.0, 8.0, 100), &mut log);
        assert!(sequencer.is_held());

        sequencer.on_timer(Timer::ActiveHold, &mut log);
        assert!(sequencer.is_held());
        assert_eq!(log.calls, [Call::Down, Call::Move, Call::Hold]);
        // Hold ticking resumed.
        assert_eq!(sequencer.scheduler_mut().pending_len(), 1);
    }

    #[test]
    fn early_delivery_leaves_no_orphaned_timer() {
        let mut log = Log::default();
        let mut sequencer = sequencer(150);

        // Deliver expiries while the scheduler still holds the entries
        // (the host fired them without draining its queue). Each delivery
        // cancels the stale entry before rescheduling, so the one-pending-
        // timer-per-kind invariant survives.
        sequencer.on_pointer_event(&PointerEvent::down(5.0, 5.0, 0), &mut log);
        sequencer.on_timer(Timer::Hold, &mut log);
        assert_eq!(sequencer.scheduler_mut().pending_len(), 1);

        sequencer.on_pointer_event(&PointerEvent::moved(8.0, 8.0, 10), &mut log);
        sequencer.on_timer(Timer::ActiveHold, &mut log);
        assert_eq!(sequencer.scheduler_mut().pending_len(), 1);

        // Release cancels everything; no stray entry can fire later and
        // resurrect the held state.
        sequencer.on_pointer_event(&PointerEvent::up(8.0, 8.0, 20), &mut log);
        assert_eq!(sequencer.scheduler_mut().pending_len(), 0);
        assert_eq!(sequencer.scheduler_mut().fire_next_before(u64::MAX), None);
    }

    #[test]
    fn fallback_routes_unhandled_events() {
        let mut log = Log::default();
        let mut sequencer = sequencer(150);

        assert!(!sequencer.on_pointer_event(&PointerEvent::cancel(0.0, 0.0, 0), &mut log));
        log.consume_fallback = true;
        assert!(sequencer.on_pointer_event(&PointerEvent::cancel(0.0, 0.0, 1), &mut log));
        assert_eq!(log.calls, [Call::Fallback, Call::Fallback]);
    }
}
