// Copyright 2026 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatplan Glide: eased recentering of the viewport offset.
//!
//! A [`Glide`] animates the viewport offset from its current value toward a
//! target over a fixed duration, sampled once per animation frame with
//! host-supplied timestamps. The library never reads a clock; hosts pass
//! their frame time in milliseconds. Scale, selection, and draw mode are
//! untouched by a glide; it only produces offsets.
//!
//! A new glide simply replaces the old one; whoever owns the `Option<Glide>`
//! drops the in-flight animation by overwriting or clearing it.
//!
//! ```rust
//! use kurbo::{Point, Size, Vec2};
//! use seatplan_glide::Glide;
//!
//! // Recenter on a table at world (500, 300) with scale 1, starting at t=0.
//! let glide = Glide::recenter(
//!     Vec2::ZERO,
//!     1.0,
//!     Size::new(800.0, 600.0),
//!     Point::new(500.0, 300.0),
//!     0.0,
//! );
//! let end = glide.sample(300.0);
//! assert!(end.finished);
//! assert_eq!(end.offset, Vec2::new(-100.0, 0.0));
//! ```
//!
//! This crate is `no_std`.

#![no_std]

use kurbo::{Point, Size, Vec2};

/// Duration of a glide, in milliseconds.
pub const GLIDE_DURATION_MS: f64 = 300.0;

/// Quadratic ease-in-out over normalized time.
///
/// `t` is clamped into `[0, 1]`; the curve is `2t²` below the midpoint and
/// `1 - (-2t + 2)² / 2` above it.
#[must_use]
pub fn ease_in_out_quad(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        let u = -2.0 * t + 2.0;
        1.0 - u * u / 2.0
    }
}

/// An in-flight offset animation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Glide {
    start: Vec2,
    target: Vec2,
    started_at: f64,
}

impl Glide {
    /// Starts a glide from `start` toward `target` at time `now_ms`.
    #[must_use]
    pub const fn new(start: Vec2, target: Vec2, now_ms: f64) -> Self {
        Self {
            start,
            target,
            started_at: now_ms,
        }
    }

    /// Starts a glide that centers the world point `world` in a view of
    /// size `view` at the given `scale`, leaving the scale itself alone.
    #[must_use]
    pub fn recenter(current_offset: Vec2, scale: f64, view: Size, world: Point, now_ms: f64) -> Self {
        let target = Vec2::new(
            view.width / 2.0 - scale * world.x,
            view.height / 2.0 - scale * world.y,
        );
        Self::new(current_offset, target, now_ms)
    }

    /// Returns the offset the glide is heading toward.
    #[must_use]
    pub fn target(&self) -> Vec2 {
        self.target
    }

    /// Samples the glide at time `now_ms`.
    ///
    /// Progress is clamped, so sampling before the start returns the start
    /// offset and sampling past the duration returns the target with
    /// `finished` set.
    #[must_use]
    pub fn sample(&self, now_ms: f64) -> GlideSample {
        let progress = ((now_ms - self.started_at) / GLIDE_DURATION_MS).clamp(0.0, 1.0);
        let eased = ease_in_out_quad(progress);
        GlideSample {
            offset: self.start + (self.target - self.start) * eased,
            finished: progress >= 1.0,
        }
    }
}

/// One frame's worth of glide output.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct GlideSample {
    /// Offset to commit this frame.
    pub offset: Vec2,
    /// `true` once the target is reached; the owner drops the glide.
    pub finished: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints_and_midpoint() {
        assert_eq!(ease_in_out_quad(0.0), 0.0);
        assert_eq!(ease_in_out_quad(0.5), 0.5);
        assert_eq!(ease_in_out_quad(1.0), 1.0);
        // Out-of-range input clamps.
        assert_eq!(ease_in_out_quad(-3.0), 0.0);
        assert_eq!(ease_in_out_quad(7.0), 1.0);
    }

    #[test]
    fn easing_is_symmetric() {
        for i in 0..=10 {
            let t = f64::from(i) / 10.0;
            let sum = ease_in_out_quad(t) + ease_in_out_quad(1.0 - t);
            assert!((sum - 1.0).abs() < 1e-12);
        }
    }

    #[test]
    fn sample_walks_start_to_target() {
        let glide = Glide::new(Vec2::new(10.0, 20.0), Vec2::new(110.0, 220.0), 1_000.0);

        let s0 = glide.sample(1_000.0);
        assert_eq!(s0.offset, Vec2::new(10.0, 20.0));
        assert!(!s0.finished);

        let mid = glide.sample(1_150.0);
        assert_eq!(mid.offset, Vec2::new(60.0, 120.0));
        assert!(!mid.finished);

        let end = glide.sample(1_300.0);
        assert_eq!(end.offset, Vec2::new(110.0, 220.0));
        assert!(end.finished);

        // Late samples stay pinned at the target.
        assert_eq!(glide.sample(9_999.0).offset, Vec2::new(110.0, 220.0));
    }

    #[test]
    fn early_sample_clamps_to_start() {
        let glide = Glide::new(Vec2::ZERO, Vec2::new(50.0, 0.0), 1_000.0);
        let s = glide.sample(500.0);
        assert_eq!(s.offset, Vec2::ZERO);
        assert!(!s.finished);
    }

    #[test]
    fn recenter_targets_view_center() {
        let glide = Glide::recenter(
            Vec2::new(40.0, 60.0),
            0.4,
            Size::new(800.0, 600.0),
            Point::new(900.0, 600.0),
            0.0,
        );
        assert_eq!(glide.target(), Vec2::new(400.0 - 360.0, 300.0 - 240.0));
    }

    #[test]
    fn progress_is_monotonic() {
        let glide = Glide::new(Vec2::ZERO, Vec2::new(100.0, 0.0), 0.0);
        let mut last = -1.0;
        for ms in (0..=300).step_by(16) {
            let x = glide.sample(f64::from(ms)).offset.x;
            assert!(x >= last);
            last = x;
        }
    }
}
