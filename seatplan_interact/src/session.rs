// Copyright 2026 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Vec2};

use crate::FrameCoalescer;

/// Screen-space displacement below which a lasso counts as a simple click
/// (and clears the selection) rather than a drag.
pub const CLICK_DRAG_THRESHOLD: f64 = 4.0;

/// The ephemeral state of one pointer-down → pointer-up gesture.
///
/// Exactly one session exists at a time; it is created by the pointer-down
/// transition and discarded at pointer-up (or cancellation), never
/// persisted.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerSession {
    /// Grab-and-drag panning.
    Pan(PanSession),
    /// Lasso rectangle selection.
    RectSelect(RectSelectSession),
}

/// State of a pan gesture: where it started and where the offset was.
///
/// Moves are expressed as total displacement from the start, so a missed
/// intermediate event cannot accumulate drift; the coalescer commits the
/// newest total once per frame.
#[derive(Clone, Debug, PartialEq)]
pub struct PanSession {
    /// Pointer position the current pan base refers to, in screen
    /// coordinates. Initially the pointer-down position; advanced by
    /// [`PanSession::rebase`].
    pub start_screen: Point,
    /// Latest observed pointer position.
    pub last_screen: Point,
    /// Viewport offset the pan base refers to.
    pub start_offset: Vec2,
    /// Pending per-frame offset write.
    pub frame: FrameCoalescer,
}

impl PanSession {
    /// Starts a pan at `start_screen` with the current viewport offset.
    #[must_use]
    pub const fn new(start_screen: Point, start_offset: Vec2) -> Self {
        Self {
            start_screen,
            last_screen: start_screen,
            start_offset,
            frame: FrameCoalescer::new(),
        }
    }

    /// Records a pointer move, scheduling `start_offset + total_delta` for
    /// the next frame. Returns `true` when a frame callback must be
    /// requested.
    pub fn move_to(&mut self, screen: Point) -> bool {
        self.last_screen = screen;
        self.frame.push(screen - self.start_screen)
    }

    /// Re-bases the pan after something else committed an offset write
    /// mid-session (a zoom shortcut, say): subsequent moves displace from
    /// `offset` at the current pointer position instead of reverting it.
    /// Any pending delta against the old base is discarded.
    pub fn rebase(&mut self, offset: Vec2) {
        self.start_screen = self.last_screen;
        self.start_offset = offset;
        self.frame.cancel();
    }
}

/// State of a lasso gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct RectSelectSession {
    /// Pointer position at pointer-down, in screen coordinates.
    pub start_screen: Point,
    /// Latest pointer position, in screen coordinates.
    pub current_screen: Point,
    /// World-space anchor captured at pointer-down, before any pan/zoom a
    /// concurrent shortcut might apply.
    pub start_world: Point,
    /// `true` when Shift was held at pointer-down: resolved ids extend the
    /// selection instead of replacing it.
    pub append: bool,
}

impl RectSelectSession {
    /// Starts a lasso at `start_screen`/`start_world`.
    #[must_use]
    pub const fn new(start_screen: Point, start_world: Point, append: bool) -> Self {
        Self {
            start_screen,
            current_screen: start_screen,
            start_world,
            append,
        }
    }

    /// The live lasso rectangle in screen coordinates, normalized
    /// regardless of drag direction. Hosts draw this as the selection
    /// overlay.
    #[must_use]
    pub fn screen_rect(&self) -> Rect {
        Rect::from_points(self.start_screen, self.current_screen)
    }

    /// Returns `true` when the gesture never left the click threshold on
    /// either axis, so it should clear the selection instead of resolving
    /// an accidental hairline rectangle.
    #[must_use]
    pub fn is_click(&self) -> bool {
        let dx = (self.current_screen.x - self.start_screen.x).abs();
        let dy = (self.current_screen.y - self.start_screen.y).abs();
        dx < CLICK_DRAG_THRESHOLD && dy < CLICK_DRAG_THRESHOLD
    }
}
