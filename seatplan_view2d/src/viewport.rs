// Copyright 2026 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

use crate::fit::{FitPlan, MAX_SCALE};

/// Zoom floor before the first content fit establishes the dynamic one.
const DEFAULT_MIN_SCALE: f64 = 0.3;

/// Zoom-in step applied by wheel ticks and keyboard shortcuts.
const ZOOM_IN_FACTOR: f64 = 1.1;

/// Zoom-out step. Not the exact reciprocal of the in-step; the canvas
/// convention is 1.1 in, 0.9 out.
const ZOOM_OUT_FACTOR: f64 = 0.9;

/// World-to-screen camera over the seating plan.
///
/// `Viewport` tracks a uniform zoom `scale` and a screen-space `offset`
/// applied after scaling: `screen = world * scale + offset`. The zoom range
/// is `[min_scale, max_scale]`, where `min_scale` is a dynamic floor that
/// tracks the most recent fit-to-content scale and `max_scale` is fixed.
///
/// Every committed mutation bumps [`Viewport::revision`], so hosts can
/// redraw exactly when the transform actually changed. The invariant
/// `min_scale <= scale <= max_scale` holds after every mutation.
#[derive(Clone, Debug)]
pub struct Viewport {
    scale: f64,
    offset: Vec2,
    min_scale: f64,
    max_scale: f64,
    revision: u64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// Creates a viewport with identity framing: `scale = 1`, zero offset.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            scale: 1.0,
            offset: Vec2::ZERO,
            min_scale: DEFAULT_MIN_SCALE,
            max_scale: MAX_SCALE,
            revision: 0,
        }
    }

    /// Returns the current uniform zoom factor.
    #[must_use]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Returns the current screen-space translation.
    #[must_use]
    pub fn offset(&self) -> Vec2 {
        self.offset
    }

    /// Returns the dynamic zoom floor (the latest fit scale).
    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.min_scale
    }

    /// Returns the fixed zoom ceiling.
    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.max_scale
    }

    /// Returns the revision counter.
    ///
    /// The counter bumps once per committed `scale`/`offset` mutation and
    /// never for no-ops, so it doubles as a cheap "did the transform
    /// change?" marker for render scheduling.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Converts a screen-space point into world coordinates.
    #[must_use]
    pub fn to_world(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.offset.x) / self.scale,
            (screen.y - self.offset.y) / self.scale,
        )
    }

    /// Converts a world-space point into screen coordinates.
    #[must_use]
    pub fn to_screen(&self, world: Point) -> Point {
        Point::new(
            world.x * self.scale + self.offset.x,
            world.y * self.scale + self.offset.y,
        )
    }

    /// Returns the world-space rectangle currently visible in a view of
    /// size `view`.
    #[must_use]
    pub fn visible_world_rect(&self, view: Size) -> Rect {
        let min = self.to_world(Point::ORIGIN);
        let max = self.to_world(Point::new(view.width, view.height));
        Rect::new(min.x, min.y, max.x, max.y)
    }

    /// Pans the view by a screen-space delta. No scale change.
    pub fn pan(&mut self, delta: Vec2) {
        self.set_offset(self.offset + delta);
    }

    /// Sets the offset to an absolute screen-space value.
    ///
    /// Returns `true` when the offset actually changed. Non-finite values
    /// are rejected as no-ops.
    pub fn set_offset(&mut self, offset: Vec2) -> bool {
        if !offset.is_finite() || offset == self.offset {
            return false;
        }
        self.offset = offset;
        self.revision = self.revision.wrapping_add(1);
        true
    }

    /// Zooms by `factor` around a screen-space anchor point.
    ///
    /// The next scale is `scale * factor` clamped into
    /// `[min_scale, max_scale]`, and the offset is re-solved so the world
    /// point under `anchor` stays visually fixed. Non-positive or
    /// non-finite factors, and zooms already pinned at a limit, are no-ops.
    ///
    /// Returns `true` when the transform changed.
    pub fn zoom_at(&mut self, anchor: Point, factor: f64) -> bool {
        if !factor.is_finite() || factor <= 0.0 {
            return false;
        }
        let next = (self.scale * factor).clamp(self.min_scale, self.max_scale);
        if (next - self.scale).abs() < f64::EPSILON {
            return false;
        }

        let ratio = next / self.scale;
        let anchor = anchor.to_vec2();
        self.scale = next;
        self.offset = anchor - (anchor - self.offset) * ratio;
        self.revision = self.revision.wrapping_add(1);
        true
    }

    /// One zoom step in (factor 1.1) or out (factor 0.9) around `anchor`,
    /// the wheel-tick and keyboard-shortcut zoom.
    pub fn zoom_step(&mut self, anchor: Point, zoom_in: bool) -> bool {
        let factor = if zoom_in {
            ZOOM_IN_FACTOR
        } else {
            ZOOM_OUT_FACTOR
        };
        self.zoom_at(anchor, factor)
    }

    /// Applies an explicit fit command: adopts the plan's `scale`/`offset`
    /// and re-bases the zoom floor on the fit scale.
    ///
    /// For the degenerate fallback plan the floor is only lowered as far as
    /// needed to keep `min_scale <= scale`, never re-based upward.
    pub fn apply_fit(&mut self, plan: &FitPlan) {
        let changed = self.scale != plan.scale || self.offset != plan.offset;
        self.scale = plan.scale;
        self.offset = plan.offset;
        if plan.fallback {
            self.min_scale = self.min_scale.min(self.scale);
        } else {
            self.min_scale = plan.scale;
        }
        if changed {
            self.revision = self.revision.wrapping_add(1);
        }
    }

    /// Passive floor refresh on content change: adopts the plan's fit scale
    /// as the new zoom floor without touching the current `scale`/`offset`.
    ///
    /// The floor is capped at the current scale so the viewport invariant
    /// holds even when content shrank enough to raise the fit scale above
    /// the user's zoom; the next explicit fit restores the exact floor.
    /// Not a transform mutation, so the revision is untouched.
    pub fn refresh_floor(&mut self, plan: &FitPlan) {
        if !plan.fallback {
            self.min_scale = plan.scale.min(self.scale);
        }
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ViewportDebugInfo {
        ViewportDebugInfo {
            scale: self.scale,
            offset: self.offset,
            min_scale: self.min_scale,
            max_scale: self.max_scale,
            revision: self.revision,
        }
    }
}

/// Debug snapshot of a [`Viewport`] state.
#[derive(Copy, Clone, Debug)]
pub struct ViewportDebugInfo {
    /// Current uniform zoom factor.
    pub scale: f64,
    /// Current screen-space translation.
    pub offset: Vec2,
    /// Dynamic zoom floor.
    pub min_scale: f64,
    /// Fixed zoom ceiling.
    pub max_scale: f64,
    /// Committed-mutation counter.
    pub revision: u64,
}

#[cfg(test)]
mod tests {
    use kurbo::{Point, Rect, Size, Vec2};

    use super::*;

    #[test]
    fn world_screen_roundtrip() {
        let mut vp = Viewport::new();
        vp.zoom_at(Point::new(120.0, 90.0), 1.7);
        vp.pan(Vec2::new(35.0, -12.0));

        let world = Point::new(10.0, -5.0);
        let back = vp.to_world(vp.to_screen(world));
        assert!((back.x - world.x).abs() < 1e-9);
        assert!((back.y - world.y).abs() < 1e-9);
    }

    #[test]
    fn zoom_keeps_anchor_fixed() {
        let mut vp = Viewport::new();
        let anchor = Point::new(400.0, 300.0);
        let before = vp.to_world(anchor);

        assert!(vp.zoom_at(anchor, 2.0));
        let after = vp.to_world(anchor);

        assert!((after.x - before.x).abs() < 1e-9);
        assert!((after.y - before.y).abs() < 1e-9);
    }

    #[test]
    fn scale_stays_clamped_across_zoom_sequences() {
        let mut vp = Viewport::new();
        let anchor = Point::new(100.0, 100.0);
        for factor in [3.0, 3.0, 0.001, 10.0, 0.5, 0.5, 0.5, 0.5, 7.0, 0.01] {
            vp.zoom_at(anchor, factor);
            assert!(vp.scale() >= vp.min_scale());
            assert!(vp.scale() <= vp.max_scale());
        }
    }

    #[test]
    fn zoom_rejects_degenerate_factors() {
        let mut vp = Viewport::new();
        let rev = vp.revision();
        assert!(!vp.zoom_at(Point::ORIGIN, 0.0));
        assert!(!vp.zoom_at(Point::ORIGIN, -2.0));
        assert!(!vp.zoom_at(Point::ORIGIN, f64::NAN));
        assert_eq!(vp.revision(), rev);
    }

    #[test]
    fn pinned_zoom_is_a_noop() {
        let mut vp = Viewport::new();
        // Walk up to the ceiling.
        while vp.zoom_at(Point::ORIGIN, 1.5) {}
        assert_eq!(vp.scale(), vp.max_scale());
        let rev = vp.revision();
        assert!(!vp.zoom_at(Point::ORIGIN, 2.0));
        assert_eq!(vp.revision(), rev);
    }

    #[test]
    fn fit_establishes_scale_offset_and_floor() {
        let mut vp = Viewport::new();
        let plan = FitPlan::compute(
            Some(Rect::new(0.0, 0.0, 1800.0, 1200.0)),
            Size::new(800.0, 600.0),
        );
        vp.apply_fit(&plan);

        assert!(vp.scale() > 0.35 && vp.scale() < 0.5);
        assert_eq!(vp.min_scale(), vp.scale());

        // Zooming out from the fit is pinned at the floor.
        assert!(!vp.zoom_at(Point::new(400.0, 300.0), 0.5));
        assert_eq!(vp.scale(), vp.min_scale());
    }

    #[test]
    fn fallback_fit_resets_to_identity() {
        let mut vp = Viewport::new();
        vp.zoom_at(Point::new(10.0, 10.0), 2.0);
        vp.apply_fit(&FitPlan::FALLBACK);
        assert_eq!(vp.scale(), 1.0);
        assert_eq!(vp.offset(), Vec2::ZERO);
        assert!(vp.min_scale() <= vp.scale());
    }

    #[test]
    fn refresh_floor_never_moves_the_camera() {
        let mut vp = Viewport::new();
        vp.apply_fit(&FitPlan::compute(
            Some(Rect::new(0.0, 0.0, 1800.0, 1200.0)),
            Size::new(800.0, 600.0),
        ));
        let scale = vp.scale();
        let offset = vp.offset();
        let rev = vp.revision();

        // Content grew: the floor drops, the camera stays.
        let grown = FitPlan::compute(
            Some(Rect::new(0.0, 0.0, 4000.0, 2600.0)),
            Size::new(800.0, 600.0),
        );
        vp.refresh_floor(&grown);
        assert!(vp.min_scale() < scale);
        assert_eq!(vp.scale(), scale);
        assert_eq!(vp.offset(), offset);
        assert_eq!(vp.revision(), rev);
    }

    #[test]
    fn refresh_floor_caps_at_current_scale() {
        let mut vp = Viewport::new();
        vp.apply_fit(&FitPlan::compute(
            Some(Rect::new(0.0, 0.0, 4000.0, 2600.0)),
            Size::new(800.0, 600.0),
        ));
        let scale = vp.scale();

        // Content shrank to a sliver: the raw fit scale exceeds the current
        // zoom, and the floor is capped so the invariant holds.
        let shrunk = FitPlan::compute(
            Some(Rect::new(0.0, 0.0, 120.0, 90.0)),
            Size::new(800.0, 600.0),
        );
        assert!(shrunk.scale > scale);
        vp.refresh_floor(&shrunk);
        assert_eq!(vp.min_scale(), scale);
        assert_eq!(vp.scale(), scale);
    }

    #[test]
    fn revision_tracks_committed_mutations_only() {
        let mut vp = Viewport::new();
        assert_eq!(vp.revision(), 0);

        vp.pan(Vec2::new(5.0, 5.0));
        assert_eq!(vp.revision(), 1);

        // Zero-delta pan and non-finite offset are no-ops.
        vp.pan(Vec2::ZERO);
        assert!(!vp.set_offset(Vec2::new(f64::NAN, 0.0)));
        assert_eq!(vp.revision(), 1);

        vp.zoom_at(Point::ORIGIN, 1.3);
        assert_eq!(vp.revision(), 2);
    }

    #[test]
    fn zoom_step_uses_canvas_factors() {
        let mut vp = Viewport::new();
        assert!(vp.zoom_step(Point::new(400.0, 300.0), true));
        assert!((vp.scale() - 1.1).abs() < 1e-12);
        assert!(vp.zoom_step(Point::new(400.0, 300.0), false));
        assert!((vp.scale() - 0.99).abs() < 1e-12);
    }

    #[test]
    fn visible_world_rect_matches_corners() {
        let mut vp = Viewport::new();
        vp.apply_fit(&FitPlan::compute(
            Some(Rect::new(0.0, 0.0, 1800.0, 1200.0)),
            Size::new(800.0, 600.0),
        ));
        let view = Size::new(800.0, 600.0);
        let visible = vp.visible_world_rect(view);
        let tl = vp.to_world(Point::ORIGIN);
        let br = vp.to_world(Point::new(view.width, view.height));
        assert_eq!(visible, Rect::new(tl.x, tl.y, br.x, br.y));
        // The fitted hall is fully visible.
        assert!(visible.x0 <= 0.0 && visible.x1 >= 1800.0);
        assert!(visible.y0 <= 0.0 && visible.y1 >= 1200.0);
    }
}
