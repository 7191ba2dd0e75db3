// Copyright 2025 the Thumbstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! End-to-end tests for the assembled stick: resize, pointer stream,
//! hold ticks, and drawing, driven by the manual scheduler and the
//! recording surface.

use peniko::Color;
use thumbstick::{Direction, DirectionType, MoveListener, Point, StickBuilder};
use thumbstick_drawer::circle::{CircleDrawer, CircleRadius};
use thumbstick_gesture::PointerEvent;
use thumbstick_gesture::manual::ManualScheduler;
use thumbstick_surface::DrawOp;
use thumbstick_surface::trace::TraceSurface;

#[derive(Default)]
struct Moves(Vec<Direction>);

impl MoveListener for Moves {
    fn on_move(&mut self, direction: Direction) {
        self.0.push(direction);
    }
}

fn stick() -> thumbstick::Stick<ManualScheduler> {
    let mut stick = StickBuilder::new()
        .hold_interval_ms(150)
        .build(ManualScheduler::new())
        .unwrap();
    stick.on_size_changed(200, 200).unwrap();
    stick
}

#[test]
fn zero_hold_interval_fails_at_build() {
    let err = StickBuilder::new()
        .hold_interval_ms(0)
        .build(ManualScheduler::new())
        .unwrap_err();
    assert_eq!(err.millis, 0);
}

#[test]
fn negative_dimensions_are_rejected_and_keep_the_extent() {
    let mut stick = stick();
    assert!(stick.on_size_changed(-1, 100).is_err());
    assert_eq!(stick.center(), Point::new(100.0, 100.0));
}

#[test]
fn press_hold_release_emits_directions_then_none() {
    let mut stick = stick();
    let mut moves = Moves::default();

    assert!(stick.on_pointer_event(&PointerEvent::down(190.0, 100.0, 0), &mut moves));
    assert_eq!(stick.direction(), Direction::Right);

    while let Some(timer) = stick.scheduler_mut().fire_next_before(460) {
        stick.on_timer(timer, &mut moves);
    }
    assert!(stick.on_pointer_event(&PointerEvent::up(190.0, 100.0, 470), &mut moves));

    assert_eq!(
        moves.0,
        [
            Direction::Right,
            Direction::Right,
            Direction::Right,
            Direction::None,
        ]
    );
    assert!(stick.is_at_center());
}

#[test]
fn drag_changes_the_reported_direction() {
    let mut stick = stick();
    let mut moves = Moves::default();

    stick.on_pointer_event(&PointerEvent::down(190.0, 100.0, 0), &mut moves);
    stick.on_pointer_event(&PointerEvent::moved(100.0, 190.0, 50), &mut moves);
    assert_eq!(stick.direction(), Direction::Down);

    // The move rescheduled from the active interval; the next tick
    // reports the new direction.
    while let Some(timer) = stick.scheduler_mut().fire_next_before(210) {
        stick.on_timer(timer, &mut moves);
    }
    assert_eq!(moves.0, [Direction::Down]);
}

#[test]
fn out_of_view_pointer_coordinates_are_swallowed() {
    let mut stick = stick();
    let mut moves = Moves::default();

    stick.on_pointer_event(&PointerEvent::down(150.0, 100.0, 0), &mut moves);
    let before = stick.position();

    // The sequencer still consumes the move; the control keeps its prior
    // valid position.
    assert!(stick.on_pointer_event(&PointerEvent::moved(-5.0, 100.0, 10), &mut moves));
    assert_eq!(stick.position(), before);
}

#[test]
fn positions_clamp_to_the_outer_circle() {
    let mut stick = stick();
    let mut moves = Moves::default();

    stick.on_pointer_event(&PointerEvent::down(400.0, 100.0, 0), &mut moves);
    assert!((stick.distance() - 100.0).abs() < 1e-9);
    assert_eq!(stick.direction(), Direction::Right);
}

#[test]
fn four_way_stick_classifies_diagonals_into_cardinals() {
    let mut stick = StickBuilder::new()
        .direction_type(DirectionType::Four)
        .build(ManualScheduler::new())
        .unwrap();
    stick.on_size_changed(200, 200).unwrap();
    let mut moves = Moves::default();

    stick.on_pointer_event(&PointerEvent::down(160.0, 160.0, 0), &mut moves);
    assert_eq!(stick.direction(), Direction::Down);
}

#[test]
fn default_drawer_draws_knob_and_directional_arc() {
    let mut stick = stick();
    let mut moves = Moves::default();
    let mut surface = TraceSurface::new();

    stick.draw(&mut surface);
    assert_eq!(surface.draw_ops().count(), 1);

    stick.on_pointer_event(&PointerEvent::down(190.0, 100.0, 0), &mut moves);
    surface.clear();
    stick.draw(&mut surface);
    let kinds: Vec<_> = surface.draw_ops().collect();
    assert!(matches!(kinds[0], DrawOp::StrokeArc { .. }));
    assert!(matches!(kinds[1], DrawOp::FillCircle { .. }));
}

#[test]
fn custom_drawer_replaces_the_default() {
    let mut stick = StickBuilder::new()
        .drawer(Box::new(CircleDrawer::new(
            Color::BLACK,
            CircleRadius::Fixed(10.0),
            false,
        )))
        .build(ManualScheduler::new())
        .unwrap();
    stick.on_size_changed(200, 200).unwrap();

    let mut surface = TraceSurface::new();
    stick.draw(&mut surface);
    assert!(matches!(
        surface.draw_ops().next(),
        Some(DrawOp::FillCircle { radius, .. }) if *radius == 10.0
    ));
}

#[test]
fn fallback_events_are_not_consumed() {
    let mut stick = stick();
    let mut moves = Moves::default();
    assert!(!stick.on_pointer_event(&PointerEvent::cancel(0.0, 0.0, 0), &mut moves));
    assert!(moves.0.is_empty());
}
