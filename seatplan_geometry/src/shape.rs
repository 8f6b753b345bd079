// Copyright 2026 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect};

/// Identifier for a table within a seating plan.
///
/// This is a small, copyable handle assigned by the host data store. It is
/// stable across renders; the engine never invents or recycles ids.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TableId(pub u64);

/// Footprint of a table on the plan.
///
/// The variants are a closed set: adding a new footprint extends this enum
/// and every `match` over it, so a new shape is a compile-time-checked
/// addition rather than a silently ignored runtime branch.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum TableShape {
    /// Rectangular table described by its full width and height.
    Rect {
        /// Extent along the world X axis.
        width: f64,
        /// Extent along the world Y axis.
        height: f64,
    },
    /// Round table described by its diameter.
    Round {
        /// Full diameter of the footprint.
        diameter: f64,
    },
}

impl TableShape {
    /// Creates a rectangular footprint.
    #[must_use]
    pub const fn rect(width: f64, height: f64) -> Self {
        Self::Rect { width, height }
    }

    /// Creates a round footprint.
    #[must_use]
    pub const fn round(diameter: f64) -> Self {
        Self::Round { diameter }
    }

    /// Returns the axis-aligned bounding box of this footprint around `center`.
    ///
    /// Negative dimensions are treated as zero, so a malformed footprint
    /// degrades to an empty box at its center instead of an inverted rect.
    #[must_use]
    pub fn bounds(&self, center: Point) -> Rect {
        let (half_w, half_h) = match *self {
            Self::Rect { width, height } => (width.max(0.0) / 2.0, height.max(0.0) / 2.0),
            Self::Round { diameter } => {
                let r = diameter.max(0.0) / 2.0;
                (r, r)
            }
        };
        Rect::new(
            center.x - half_w,
            center.y - half_h,
            center.x + half_w,
            center.y + half_h,
        )
    }
}

/// A table placed on the plan: an id plus a footprint at a world-space center.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Table {
    /// Host-assigned identifier, stable across renders.
    pub id: TableId,
    /// Center of the footprint in world coordinates.
    pub center: Point,
    /// The footprint itself.
    pub shape: TableShape,
}

impl Table {
    /// Creates a table from its parts.
    #[must_use]
    pub const fn new(id: TableId, center: Point, shape: TableShape) -> Self {
        Self { id, center, shape }
    }

    /// Returns the axis-aligned bounding box of this table.
    #[must_use]
    pub fn bounds(&self) -> Rect {
        self.shape.bounds(self.center)
    }
}

/// Strict axis-aligned overlap test.
///
/// Two boxes overlap only when they share interior area: boxes that merely
/// touch along an edge or at a corner do **not** count. This keeps hairline
/// contact from registering as a selection.
///
/// Boxes with non-finite bounds never overlap anything.
#[must_use]
pub fn boxes_overlap(a: Rect, b: Rect) -> bool {
    if !a.is_finite() || !b.is_finite() {
        return false;
    }
    !(a.x1 <= b.x0 || a.x0 >= b.x1 || a.y1 <= b.y0 || a.y0 >= b.y1)
}
