// Copyright 2025 the Thumbstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Thumbstick: an on-screen analog stick.
//!
//! This crate ties the workspace together behind one widget-facing type:
//! [`Stick`] owns a [`Control`] (constrained position and direction
//! classification), a [`Drawer`] pipeline, and a
//! [`HoldSequencer`](thumbstick_gesture::HoldSequencer) (hold gesture
//! timing). A host embeds it by forwarding three things — size changes,
//! pointer events, and timer expiries — and calling [`Stick::draw`] when
//! it wants pixels.
//!
//! Outbound traffic goes through [`MoveListener`]: one callback per hold
//! tick carrying the current [`Direction`], and one with
//! [`Direction::None`] when the pointer is released.
//!
//! ```rust
//! use thumbstick::{Direction, MoveListener, StickBuilder};
//! use thumbstick_gesture::{PointerEvent, manual::ManualScheduler};
//! use thumbstick_surface::trace::TraceSurface;
//!
//! #[derive(Default)]
//! struct Moves(Vec<Direction>);
//!
//! impl MoveListener for Moves {
//!     fn on_move(&mut self, direction: Direction) {
//!         self.0.push(direction);
//!     }
//! }
//!
//! let mut stick = StickBuilder::new()
//!     .hold_interval_ms(150)
//!     .build(ManualScheduler::new())
//!     .unwrap();
//! stick.on_size_changed(200, 200).unwrap();
//!
//! let mut moves = Moves::default();
//! stick.on_pointer_event(&PointerEvent::down(190.0, 100.0, 0), &mut moves);
//! while let Some(timer) = stick.scheduler_mut().fire_next_before(310) {
//!     stick.on_timer(timer, &mut moves);
//! }
//! stick.on_pointer_event(&PointerEvent::up(190.0, 100.0, 320), &mut moves);
//!
//! assert_eq!(moves.0, [Direction::Right, Direction::Right, Direction::None]);
//!
//! let mut surface = TraceSurface::new();
//! stick.draw(&mut surface);
//! assert!(!surface.ops().is_empty());
//! ```

#![no_std]

extern crate alloc;

use alloc::boxed::Box;

use peniko::Color;
use thumbstick_control::Control;
use thumbstick_drawer::Drawer;
use thumbstick_drawer::circle_arc::CircleArcDrawer;
use thumbstick_geometry::{DimensionError, Size};
use thumbstick_gesture::{
    GestureListener, HoldSequencer, IntervalError, PointerEvent, Scheduler, Timer,
};
use thumbstick_surface::Surface;

pub use kurbo::Point;
pub use thumbstick_control::{Direction, DirectionType};

/// Receives the stick's outbound movement callbacks.
pub trait MoveListener {
    /// A movement tick: fired once per hold interval with the current
    /// direction, and once with [`Direction::None`] when the pointer is
    /// released.
    fn on_move(&mut self, direction: Direction);
}

/// Builder-style configuration for a [`Stick`].
///
/// Visual configuration (colors, dead zone) degrades gracefully and never
/// fails; timing configuration is validated when [`StickBuilder::build`]
/// runs.
pub struct StickBuilder {
    primary: Color,
    accent: Color,
    invalid_radius: f64,
    direction_type: DirectionType,
    hold_interval_ms: u64,
    active_hold_interval_ms: Option<u64>,
    drawer: Option<Box<dyn Drawer>>,
}

impl StickBuilder {
    /// Default hold interval in milliseconds.
    pub const DEFAULT_HOLD_INTERVAL_MS: u64 = 150;
    /// Default dead-zone radius.
    pub const DEFAULT_INVALID_RADIUS: f64 = 4.0;

    /// Starts a builder with eight-way classification, the default
    /// intervals, and a knob-plus-arc drawer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            primary: Color::WHITE,
            accent: Color::from_rgba8(0xFF, 0xFF, 0xFF, 0x80),
            invalid_radius: Self::DEFAULT_INVALID_RADIUS,
            direction_type: DirectionType::Eight,
            hold_interval_ms: Self::DEFAULT_HOLD_INTERVAL_MS,
            active_hold_interval_ms: None,
            drawer: None,
        }
    }

    /// Sets the knob color.
    #[must_use]
    pub fn primary_color(mut self, color: Color) -> Self {
        self.primary = color;
        self
    }

    /// Sets the directional accent (arc) color.
    #[must_use]
    pub fn accent_color(mut self, color: Color) -> Self {
        self.accent = color;
        self
    }

    /// Sets the dead-zone radius. Negative values clamp to zero.
    #[must_use]
    pub fn invalid_radius(mut self, radius: f64) -> Self {
        self.invalid_radius = radius;
        self
    }

    /// Switches between four- and eight-way classification.
    #[must_use]
    pub fn direction_type(mut self, direction_type: DirectionType) -> Self {
        self.direction_type = direction_type;
        self
    }

    /// Sets the hold interval in milliseconds.
    #[must_use]
    pub fn hold_interval_ms(mut self, millis: u64) -> Self {
        self.hold_interval_ms = millis;
        self
    }

    /// Sets a distinct active-hold (drag-and-pause) interval. Defaults to
    /// the hold interval.
    #[must_use]
    pub fn active_hold_interval_ms(mut self, millis: u64) -> Self {
        self.active_hold_interval_ms = Some(millis);
        self
    }

    /// Replaces the default knob-plus-arc drawer with a custom pipeline.
    #[must_use]
    pub fn drawer(mut self, drawer: Box<dyn Drawer>) -> Self {
        self.drawer = Some(drawer);
        self
    }

    /// Builds the stick against the host's scheduler.
    ///
    /// # Errors
    ///
    /// Returns [`IntervalError`] if a configured interval is zero.
    pub fn build<S: Scheduler>(self, scheduler: S) -> Result<Stick<S>, IntervalError> {
        let active = self
            .active_hold_interval_ms
            .unwrap_or(self.hold_interval_ms);
        let sequencer = HoldSequencer::with_intervals(scheduler, self.hold_interval_ms, active)?;
        let drawer = self
            .drawer
            .unwrap_or_else(|| Box::new(CircleArcDrawer::new(self.accent, self.primary)));
        Ok(Stick {
            control: Control::new(self.invalid_radius, self.direction_type),
            sequencer,
            drawer,
        })
    }
}

impl Default for StickBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl core::fmt::Debug for StickBuilder {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("StickBuilder")
            .field("primary", &self.primary)
            .field("accent", &self.accent)
            .field("invalid_radius", &self.invalid_radius)
            .field("direction_type", &self.direction_type)
            .field("hold_interval_ms", &self.hold_interval_ms)
            .field("active_hold_interval_ms", &self.active_hold_interval_ms)
            .finish_non_exhaustive()
    }
}

/// The assembled analog stick.
///
/// Hosts forward size changes, pointer events, and timer expiries, then
/// draw. All methods run on the host's event-loop thread; nothing here
/// locks or spawns.
pub struct Stick<S: Scheduler> {
    control: Control,
    sequencer: HoldSequencer<S>,
    drawer: Box<dyn Drawer>,
}

impl<S: Scheduler> Stick<S> {
    /// Adopts a new host extent: the control recenters and re-derives its
    /// outer radius.
    ///
    /// # Errors
    ///
    /// Returns [`DimensionError`] if either dimension is negative; the
    /// previous extent is kept.
    pub fn on_size_changed(&mut self, width: i32, height: i32) -> Result<(), DimensionError> {
        let size = Size::new(width, height)?;
        self.control.on_resize(size);
        Ok(())
    }

    /// Feeds one raw pointer event through the stick.
    ///
    /// Down and move update the control's position; a position the control
    /// rejects (negative coordinates) is swallowed and the prior valid
    /// position kept. Up recenters and emits `on_move(None)`. Hold ticks
    /// arrive later via [`Stick::on_timer`].
    ///
    /// Returns whether the event was consumed.
    pub fn on_pointer_event(
        &mut self,
        event: &PointerEvent,
        listener: &mut impl MoveListener,
    ) -> bool {
        let mut glue = Glue {
            control: &mut self.control,
            listener,
        };
        self.sequencer.on_pointer_event(event, &mut glue)
    }

    /// Delivers a timer expiry from the host's scheduler. Hold ticks emit
    /// `on_move` with the current direction.
    pub fn on_timer(&mut self, timer: Timer, listener: &mut impl MoveListener) {
        let mut glue = Glue {
            control: &mut self.control,
            listener,
        };
        self.sequencer.on_timer(timer, &mut glue);
    }

    /// Renders the current state through the drawer pipeline.
    pub fn draw(&mut self, surface: &mut dyn Surface) {
        self.drawer.draw(surface, &self.control);
    }

    /// Destroys any surface resources the drawer pipeline caches. Call
    /// before discarding the stick or its surface.
    pub fn release(&mut self, surface: &mut dyn Surface) {
        self.drawer.release(surface);
    }

    /// The current direction classification.
    #[must_use]
    pub fn direction(&self) -> Direction {
        self.control.direction()
    }

    /// The current position snapshot.
    #[must_use]
    pub fn position(&self) -> Point {
        self.control.position()
    }

    /// The current center snapshot.
    #[must_use]
    pub fn center(&self) -> Point {
        self.control.center()
    }

    /// Distance from the position to the center.
    #[must_use]
    pub fn distance(&self) -> f64 {
        self.control.distance()
    }

    /// Clockwise screen-space angle from center to position, in radians.
    #[must_use]
    pub fn angle(&self) -> f64 {
        self.control.angle()
    }

    /// Whether the position currently equals the center.
    #[must_use]
    pub fn is_at_center(&self) -> bool {
        self.control.is_at_center()
    }

    /// The underlying control, for configuration.
    pub fn control_mut(&mut self) -> &mut Control {
        &mut self.control
    }

    /// The drawer pipeline, for configuration.
    pub fn drawer_mut(&mut self) -> &mut dyn Drawer {
        &mut *self.drawer
    }

    /// The underlying scheduler (hosts pump fake clocks through this).
    pub fn scheduler_mut(&mut self) -> &mut S {
        self.sequencer.scheduler_mut()
    }
}

impl<S: Scheduler + core::fmt::Debug> core::fmt::Debug for Stick<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Stick")
            .field("control", &self.control)
            .field("sequencer", &self.sequencer)
            .finish_non_exhaustive()
    }
}

/// Adapts gesture callbacks onto the control and the host's move listener.
///
/// Borrows the stick's fields disjointly so the sequencer can drive it
/// while it owns the event.
struct Glue<'a, L: MoveListener> {
    control: &'a mut Control,
    listener: &'a mut L,
}

impl<L: MoveListener> Glue<'_, L> {
    fn track(&mut self, event: &PointerEvent) {
        // A rejected position means "ignore this event": prior valid
        // state is kept and no callback fires.
        let _ = self
            .control
            .set_position(f64::from(event.x), f64::from(event.y));
    }
}

impl<L: MoveListener> GestureListener for Glue<'_, L> {
    fn on_down(&mut self, event: &PointerEvent) {
        self.track(event);
    }

    fn on_move(&mut self, event: &PointerEvent) {
        self.track(event);
    }

    fn on_up(&mut self, _event: &PointerEvent) {
        self.control.to_center();
        self.listener.on_move(Direction::None);
    }

    fn on_hold(&mut self) {
        self.listener.on_move(self.control.direction());
    }
}
