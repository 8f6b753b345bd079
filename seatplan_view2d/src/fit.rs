// Copyright 2026 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Rect, Size, Vec2};

/// Pixel margin kept around fitted content on every side of the view.
pub const FIT_MARGIN: f64 = 80.0;

/// Lower clamp for the computed fit scale.
pub const MIN_FIT_SCALE: f64 = 0.05;

/// Upper clamp for both the fit scale and interactive zooming.
pub const MAX_SCALE: f64 = 3.0;

/// Floor on the content extent, preventing division blow-up when the scene
/// collapses to a point.
const MIN_CONTENT_EXTENT: f64 = 10.0;

/// A computed `scale`/`offset` pair that frames scene content in a view.
///
/// Produced by [`FitPlan::compute`] and consumed by
/// [`Viewport::apply_fit`](crate::Viewport::apply_fit) (explicit fit
/// command) and [`Viewport::refresh_floor`](crate::Viewport::refresh_floor)
/// (passive content-change recompute).
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct FitPlan {
    /// Uniform zoom that frames the content, clamped into
    /// `[MIN_FIT_SCALE, MAX_SCALE]`.
    pub scale: f64,
    /// Screen-space translation that centers the content in the view.
    pub offset: Vec2,
    /// `true` when this is the degenerate-scene fallback (identity framing).
    ///
    /// The fallback applies `scale = 1`, `offset = (0, 0)` and leaves the
    /// existing zoom floor alone; an empty seating plan is a valid state,
    /// not an error.
    pub fallback: bool,
}

impl FitPlan {
    /// The degenerate-scene policy: identity scale, zero offset.
    pub const FALLBACK: Self = Self {
        scale: 1.0,
        offset: Vec2::ZERO,
        fallback: true,
    };

    /// Plans a fit of `extent` into a view of size `view`.
    ///
    /// The plan keeps [`FIT_MARGIN`] pixels around the content, preserves
    /// aspect ratio (uniform scale), and centers the content. An absent or
    /// non-finite extent, or a view degenerate enough to produce a
    /// non-finite scale, yields [`FitPlan::FALLBACK`].
    #[must_use]
    pub fn compute(extent: Option<Rect>, view: Size) -> Self {
        let Some(ext) = extent else {
            return Self::FALLBACK;
        };
        if !ext.is_finite() {
            return Self::FALLBACK;
        }

        let content_w = ext.width().max(MIN_CONTENT_EXTENT);
        let content_h = ext.height().max(MIN_CONTENT_EXTENT);
        let scale_x = (view.width - FIT_MARGIN) / content_w;
        let scale_y = (view.height - FIT_MARGIN) / content_h;
        let scale = scale_x.min(scale_y).clamp(MIN_FIT_SCALE, MAX_SCALE);
        if !scale.is_finite() {
            return Self::FALLBACK;
        }

        let center = ext.center();
        let offset = Vec2::new(
            view.width / 2.0 - scale * center.x,
            view.height / 2.0 - scale * center.y,
        );
        Self {
            scale,
            offset,
            fallback: false,
        }
    }
}
