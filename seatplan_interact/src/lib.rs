// Copyright 2026 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatplan Interact: the interaction layer of the seating-plan canvas.
//!
//! This crate turns raw pointer and keyboard input into viewport and
//! selection mutations. It is organized around a few small pieces:
//!
//! - [`DrawMode`]: the host-selected tool that gates what a background
//!   pointer-down does.
//! - [`Modifiers`]: the modifier-key set sampled at event time.
//! - [`pointer_plan`]: an explicit strategy table mapping draw-mode ×
//!   modifiers to an interaction, tested independently of any event
//!   plumbing.
//! - [`PointerSession`]: the ephemeral per-gesture state: a pan session
//!   with per-frame write coalescing, or a lasso session with
//!   click-vs-drag disambiguation.
//! - [`FrameCoalescer`]: a tiny value object holding the pending pan delta,
//!   so "at most one offset write per animation frame" is unit-testable
//!   without simulating real frames.
//! - [`PlanController`]: the facade hosts talk to. It owns the viewport,
//!   the selection, the active session, and the active focus glide; hosts
//!   feed it events, frame ticks, and commands, then re-render from its
//!   committed state.
//!
//! The crate never touches a windowing system. Hosts register their own
//! global listeners, forward events here, and drive [`PlanController::on_frame`]
//! from their animation-frame callback. Exactly one session can be active
//! at a time; a second pointer-down while one is open is ignored.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Size};
//! use seatplan_interact::{Modifiers, PlanController, PointerResponse};
//!
//! let mut ctl = PlanController::new(Size::new(800.0, 600.0));
//!
//! // Background drag in the default pan tool.
//! let r = ctl.pointer_down(Point::new(100.0, 100.0), Modifiers::empty());
//! assert_eq!(r, PointerResponse::Captured);
//! ctl.pointer_move(Point::new(160.0, 130.0));
//! ctl.on_frame(0.0);
//! ctl.pointer_up(Point::new(160.0, 130.0));
//!
//! assert_eq!(ctl.viewport().offset(), kurbo::Vec2::new(60.0, 30.0));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod controller;
mod frame;
mod keys;
mod modes;
mod modifiers;
mod session;
mod strategy;

pub use controller::{PlanController, PointerResponse, PointerUpOutcome};
pub use frame::FrameCoalescer;
pub use keys::{Shortcut, shortcut_for};
pub use modes::DrawMode;
pub use modifiers::Modifiers;
pub use session::{CLICK_DRAG_THRESHOLD, PanSession, PointerSession, RectSelectSession};
pub use strategy::{PointerPlan, pointer_plan};
