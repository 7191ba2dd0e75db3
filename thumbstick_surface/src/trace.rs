// Copyright 2025 the Thumbstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Recording reference backend.
//!
//! [`TraceSurface`] implements [`Surface`] by storing every operation and
//! resource event in issue order. It backs the drawer and facade test
//! suites and is usable as a headless backend: replay the trace against a
//! real surface, or assert directly on the recorded operations.

use alloc::vec::Vec;

use crate::{BitmapDesc, BitmapId, DrawOp, StateOp, Surface, SurfaceOp, SurfaceResources};

/// A bitmap lifetime event recorded by [`TraceSurface`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResourceEvent {
    /// A bitmap was created.
    Created(BitmapId),
    /// A live bitmap was destroyed.
    Destroyed(BitmapId),
}

/// An in-memory [`Surface`] that records operations instead of rendering.
#[derive(Debug, Default)]
pub struct TraceSurface {
    next_bitmap: u32,
    live_bitmaps: Vec<BitmapId>,
    ops: Vec<SurfaceOp>,
    resource_events: Vec<ResourceEvent>,
}

impl TraceSurface {
    /// Creates an empty trace surface.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All recorded operations, in issue order.
    #[must_use]
    pub fn ops(&self) -> &[SurfaceOp] {
        &self.ops
    }

    /// Only the recorded draw operations, in issue order.
    pub fn draw_ops(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops.iter().filter_map(|op| match op {
            SurfaceOp::Draw(draw) => Some(draw),
            SurfaceOp::State(_) => None,
        })
    }

    /// All bitmap lifetime events, in issue order.
    #[must_use]
    pub fn resource_events(&self) -> &[ResourceEvent] {
        &self.resource_events
    }

    /// Number of bitmaps created and not yet destroyed.
    #[must_use]
    pub fn live_bitmap_count(&self) -> usize {
        self.live_bitmaps.len()
    }

    /// Returns `true` if the given bitmap is currently live.
    #[must_use]
    pub fn is_live(&self, id: BitmapId) -> bool {
        self.live_bitmaps.contains(&id)
    }

    /// Clears recorded operations and resource events.
    ///
    /// Live bitmaps stay live; only the history is discarded.
    pub fn clear(&mut self) {
        self.ops.clear();
        self.resource_events.clear();
    }
}

impl SurfaceResources for TraceSurface {
    fn create_bitmap(&mut self, desc: BitmapDesc, pixels: &[u8]) -> BitmapId {
        debug_assert_eq!(
            pixels.len(),
            desc.width as usize * desc.height as usize * 4,
            "pixel buffer must match bitmap dimensions"
        );
        let id = BitmapId(self.next_bitmap);
        self.next_bitmap += 1;
        self.live_bitmaps.push(id);
        self.resource_events.push(ResourceEvent::Created(id));
        id
    }

    fn destroy_bitmap(&mut self, id: BitmapId) {
        // Destroying a non-live id is a no-op, per the trait contract.
        if let Some(index) = self.live_bitmaps.iter().position(|&live| live == id) {
            self.live_bitmaps.swap_remove(index);
            self.resource_events.push(ResourceEvent::Destroyed(id));
        }
    }
}

impl Surface for TraceSurface {
    fn state(&mut self, op: StateOp) {
        self.ops.push(SurfaceOp::State(op));
    }

    fn draw(&mut self, op: DrawOp) {
        self.ops.push(SurfaceOp::Draw(op));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SurfaceExt;
    use peniko::Color;

    #[test]
    fn records_ops_in_issue_order() {
        let mut surface = TraceSurface::new();
        surface.set_paint(Color::WHITE);
        surface.fill_circle(1.0, 2.0, 3.0);

        assert_eq!(surface.ops().len(), 2);
        assert!(matches!(surface.ops()[0], SurfaceOp::State(_)));
        assert!(matches!(surface.ops()[1], SurfaceOp::Draw(_)));

        surface.clear();
        assert!(surface.ops().is_empty());
    }

    #[test]
    fn bitmap_ids_are_unique_and_tracked() {
        let mut surface = TraceSurface::new();
        let desc = BitmapDesc {
            width: 2,
            height: 2,
        };
        let a = surface.create_bitmap(desc, &[0; 16]);
        let b = surface.create_bitmap(desc, &[0; 16]);
        assert_ne!(a, b);
        assert_eq!(surface.live_bitmap_count(), 2);

        surface.destroy_bitmap(a);
        assert!(!surface.is_live(a));
        assert!(surface.is_live(b));
        assert_eq!(
            surface.resource_events(),
            &[
                ResourceEvent::Created(a),
                ResourceEvent::Created(b),
                ResourceEvent::Destroyed(a),
            ]
        );
    }

    #[test]
    fn destroying_a_dead_bitmap_is_a_no_op() {
        let mut surface = TraceSurface::new();
        let id = surface.create_bitmap(
            BitmapDesc {
                width: 1,
                height: 1,
            },
            &[0; 4],
        );
        surface.destroy_bitmap(id);
        surface.destroy_bitmap(id);
        assert_eq!(surface.live_bitmap_count(), 0);
        // Only one destroy event is recorded.
        assert_eq!(surface.resource_events().len(), 2);
    }
}
