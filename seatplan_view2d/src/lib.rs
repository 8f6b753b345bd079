// Copyright 2026 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatplan View 2D: the viewport transform behind the seating-plan canvas.
//!
//! This crate provides a small, headless model of the world-to-screen
//! mapping used by the plan canvas. It focuses on:
//! - Camera state: a uniform `scale` plus a screen-space `offset`, with
//!   `screen = world * scale + offset`.
//! - Coordinate conversion between world and screen (pixel) space.
//! - Anchored zooming: the world point under a chosen screen anchor stays
//!   visually fixed across a zoom.
//! - Fit-to-content planning: a deterministic `scale`/`offset` pair that
//!   frames the scene extent with a fixed pixel margin, and the dynamic
//!   minimum-zoom floor derived from it.
//!
//! It does **not** own any scene data or rendering backend. Callers are
//! expected to:
//! - Compute the scene extent themselves (see `seatplan_geometry`).
//! - Wire pointer/keyboard input into pan/zoom operations at a higher layer
//!   (see `seatplan_interact`).
//! - Re-render from the committed `scale`/`offset`, using [`Viewport::revision`]
//!   as a cheap change marker.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use seatplan_view2d::{FitPlan, Viewport};
//!
//! let mut vp = Viewport::new();
//! let view = Size::new(800.0, 600.0);
//!
//! // Frame an 1800x1200 hall in the view.
//! let plan = FitPlan::compute(Some(Rect::new(0.0, 0.0, 1800.0, 1200.0)), view);
//! vp.apply_fit(&plan);
//! assert!(vp.scale() > 0.35 && vp.scale() < 0.5);
//!
//! // The hall center lands on the view center.
//! let center = vp.to_screen(Point::new(900.0, 600.0));
//! assert!((center.x - 400.0).abs() < 1e-9);
//! assert!((center.y - 300.0).abs() < 1e-9);
//! ```
//!
//! ## Design notes
//!
//! - The camera is axis-aligned with a **uniform** zoom factor; rotation is
//!   intentionally out of scope.
//! - The zoom floor is dynamic: it tracks the most recent fit scale so the
//!   user can never zoom out past "everything visible". Content changes
//!   refresh the floor without touching the current zoom.
//! - Mutations commit synchronously and bump a revision counter; batching
//!   writes per animation frame is the interaction layer's job.
//!
//! This crate is `no_std`.

#![no_std]

mod fit;
mod viewport;

pub use fit::{FIT_MARGIN, FitPlan, MAX_SCALE, MIN_FIT_SCALE};
pub use viewport::{Viewport, ViewportDebugInfo};
