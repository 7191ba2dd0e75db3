// Copyright 2025 the Thumbstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered drawer composition.

use core::any::Any;
use core::fmt;

use alloc::boxed::Box;

use smallvec::SmallVec;
use thumbstick_control::Control;
use thumbstick_surface::Surface;

use crate::Drawer;

type BeforeEach = Box<dyn FnMut(usize, &mut dyn Drawer)>;

/// Draws an ordered list of child drawers back to front.
///
/// Children are drawn in insertion order, so later children paint over
/// earlier ones. An optional before-each hook runs ahead of every child
/// draw and can reconfigure the child through
/// [`Drawer::as_any_mut`], e.g. to recolor a knob per frame.
#[derive(Default)]
pub struct CompositeDrawer {
    children: SmallVec<[Box<dyn Drawer>; 4]>,
    before_each: Option<BeforeEach>,
}

impl CompositeDrawer {
    /// Creates an empty composite.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a child; it will draw after (on top of) existing children.
    pub fn push(&mut self, child: Box<dyn Drawer>) {
        self.children.push(child);
    }

    /// Number of children.
    #[must_use]
    pub fn len(&self) -> usize {
        self.children.len()
    }

    /// Returns `true` if there are no children.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Mutable access to the child at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut (dyn Drawer + 'static)> {
        self.children.get_mut(index).map(|child| &mut **child)
    }

    /// Installs a hook that runs before each child's draw, receiving the
    /// child's index and the child itself.
    pub fn set_before_each(&mut self, hook: impl FnMut(usize, &mut dyn Drawer) + 'static) {
        self.before_each = Some(Box::new(hook));
    }

    /// Removes the before-each hook.
    pub fn clear_before_each(&mut self) {
        self.before_each = None;
    }
}

impl Drawer for CompositeDrawer {
    fn draw(&mut self, surface: &mut dyn Surface, control: &Control) {
        for (index, child) in self.children.iter_mut().enumerate() {
            if let Some(hook) = &mut self.before_each {
                hook(index, &mut **child);
            }
            child.draw(surface, control);
        }
    }

    fn release(&mut self, surface: &mut dyn Surface) {
        for child in &mut self.children {
            child.release(surface);
        }
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}

impl fmt::Debug for CompositeDrawer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeDrawer")
            .field("children", &self.children.len())
            .field("before_each", &self.before_each.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::{vec, vec::Vec};
    use peniko::Color;
    use thumbstick_control::DirectionType;
    use thumbstick_geometry::Size;
    use thumbstick_surface::trace::TraceSurface;
    use thumbstick_surface::{BitmapDesc, DrawOp};

    use crate::bitmap::BitmapDrawer;
    use crate::circle::{CircleDrawer, CircleRadius};

    fn control() -> Control {
        let mut control = Control::new(0.0, DirectionType::Eight);
        control.on_resize(Size::new(200, 200).unwrap());
        control
    }

    #[test]
    fn children_draw_in_insertion_order() {
        let mut composite = CompositeDrawer::new();
        composite.push(Box::new(CircleDrawer::new(
            Color::WHITE,
            CircleRadius::Ratio(0.8),
            false,
        )));
        composite.push(Box::new(CircleDrawer::new(
            Color::BLACK,
            CircleRadius::Ratio(0.3),
            false,
        )));

        let mut surface = TraceSurface::new();
        composite.draw(&mut surface, &control());

        let radii: Vec<f32> = surface
            .draw_ops()
            .filter_map(|op| match op {
                DrawOp::FillCircle { radius, .. } => Some(*radius),
                _ => None,
            })
            .collect();
        assert_eq!(radii, vec![80.0, 30.0]);
    }

    #[test]
    fn before_each_hook_can_reconfigure_children() {
        let mut composite = CompositeDrawer::new();
        composite.push(Box::new(CircleDrawer::new(
            Color::WHITE,
            CircleRadius::Ratio(0.5),
            false,
        )));
        composite.set_before_each(|_, child| {
            if let Some(circle) = child.as_any_mut().downcast_mut::<CircleDrawer>() {
                circle.set_color(Color::BLACK);
            }
        });

        let mut surface = TraceSurface::new();
        composite.draw(&mut surface, &control());

        let circle = composite
            .get_mut(0)
            .and_then(|child| child.as_any_mut().downcast_mut::<CircleDrawer>())
            .unwrap();
        assert_eq!(circle.color(), Color::BLACK);
    }

    #[test]
    fn get_mut_reaches_a_concrete_child() {
        let mut composite = CompositeDrawer::new();
        composite.push(Box::new(CircleDrawer::new(
            Color::WHITE,
            CircleRadius::Fixed(10.0),
            false,
        )));

        let child = composite.get_mut(0).unwrap();
        let circle = child.as_any_mut().downcast_mut::<CircleDrawer>().unwrap();
        circle.set_color(Color::BLACK);
        assert_eq!(circle.color(), Color::BLACK);

        assert!(composite.get_mut(1).is_none());
    }

    #[test]
    fn release_propagates_to_all_children() {
        let desc = BitmapDesc {
            width: 8,
            height: 8,
        };
        let mut composite = CompositeDrawer::new();
        composite.push(Box::new(BitmapDrawer::new(desc, vec![0; 8 * 8 * 4])));
        composite.push(Box::new(BitmapDrawer::new(desc, vec![0; 8 * 8 * 4])));

        let mut surface = TraceSurface::new();
        composite.draw(&mut surface, &control());
        assert_eq!(surface.live_bitmap_count(), 2);

        composite.release(&mut surface);
        assert_eq!(surface.live_bitmap_count(), 0);
    }
}
