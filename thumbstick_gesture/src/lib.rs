// Copyright 2025 the Thumbstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thumbstick Gesture: a timing state machine for single-pointer input.
//!
//! [`HoldSequencer`] converts a raw stream of pointer events into discrete
//! down/move/up/hold callbacks. The interesting part is *hold*: a synthetic
//! repeating event emitted while the pointer stays down (press-and-hold) or
//! rests after a drag (drag-and-pause), driven by two cancellable timers
//! scheduled against an injected [`Scheduler`] capability.
//!
//! ## Design
//!
//! The sequencer owns no threads and spawns nothing. It asks the scheduler
//! to fire a [`Timer`] after a delay; the host delivers the expiry back via
//! [`HoldSequencer::on_timer`]. Cancellation is always performed before
//! scheduling, so at most one timer of each kind is ever pending — hold
//! callbacks cannot pile up when events arrive faster than the interval.
//!
//! Everything runs on the host's event-loop thread; there is no internal
//! locking and no concurrent execution to race against.
//!
//! ## Example
//!
//! ```rust
//! use thumbstick_gesture::{
//!     GestureListener, HoldSequencer, PointerEvent, manual::ManualScheduler,
//! };
//!
//! #[derive(Default)]
//! struct Counter {
//!     holds: u32,
//! }
//!
//! impl GestureListener for Counter {
//!     fn on_down(&mut self, _event: &PointerEvent) {}
//!     fn on_move(&mut self, _event: &PointerEvent) {}
//!     fn on_up(&mut self, _event: &PointerEvent) {}
//!     fn on_hold(&mut self) {
//!         self.holds += 1;
//!     }
//! }
//!
//! let mut listener = Counter::default();
//! let mut sequencer = HoldSequencer::new(ManualScheduler::new(), 150).unwrap();
//!
//! sequencer.on_pointer_event(&PointerEvent::down(10.0, 10.0, 0), &mut listener);
//! while let Some(timer) = sequencer.scheduler_mut().fire_next_before(460) {
//!     sequencer.on_timer(timer, &mut listener);
//! }
//! assert_eq!(listener.holds, 3); // t = 150, 300, 450
//! ```

#![no_std]

extern crate alloc;

pub mod manual;

mod scheduler;
mod sequencer;

pub use scheduler::{Scheduler, Timer};
pub use sequencer::{
    GestureListener, HoldSequencer, IntervalError, MIN_INTERVAL_MS, PointerEvent, PointerKind,
};
