// Copyright 2026 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// The active tool, supplied by the host UI.
///
/// Only [`DrawMode::Pan`] and [`DrawMode::Move`] drive viewport
/// interactions; the drawing tools pass pointer events through to the
/// host's own handlers untouched.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum DrawMode {
    /// Grab-and-drag panning; with a selection modifier held, lasso select.
    #[default]
    Pan,
    /// Table arrangement: background drags lasso-select, tables themselves
    /// are dragged via their own handlers outside this engine.
    Move,
    /// Eraser tool (pass-through).
    Erase,
    /// Hall boundary drawing (pass-through).
    Boundary,
    /// Door placement (pass-through).
    Door,
    /// Obstacle drawing (pass-through).
    Obstacle,
    /// Aisle drawing (pass-through).
    Aisle,
}

impl DrawMode {
    /// Returns `true` for the drawing tools that bypass the viewport
    /// interaction machine entirely.
    #[must_use]
    pub fn is_drawing_tool(self) -> bool {
        !matches!(self, Self::Pan | Self::Move)
    }
}
