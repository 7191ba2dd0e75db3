// Copyright 2025 the Thumbstick Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-drawer draw-phase tracking.

use thumbstick_control::{Control, Direction, DirectionType};

/// Which optional phases a draw call must run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) struct Phases {
    /// First draw of this drawer's lifetime.
    pub(crate) configure: bool,
    /// Direction or direction type differs from the last draw.
    pub(crate) prepare: bool,
}

/// Tracks one-time configuration and direction invalidation across draws.
///
/// A drawer is *invalid* when the control's `(direction, direction_type)`
/// pair differs from the one recorded at its last draw; it must then
/// re-derive direction-dependent geometry before drawing.
#[derive(Clone, Debug, Default)]
pub(crate) struct DrawCycle {
    configured: bool,
    last: Option<(Direction, DirectionType)>,
}

impl DrawCycle {
    /// Starts a draw call, returning the phases to run and recording the
    /// control's current classification.
    pub(crate) fn begin(&mut self, control: &Control) -> Phases {
        let configure = !self.configured;
        self.configured = true;

        let key = (control.direction(), control.direction_type());
        let prepare = self.last != Some(key);
        self.last = Some(key);

        Phases { configure, prepare }
    }
}
