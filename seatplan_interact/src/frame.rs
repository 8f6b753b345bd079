// Copyright 2026 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// Per-session coalescing of offset writes onto animation frames.
///
/// Fast pointer movement delivers many move events per frame; committing an
/// offset per event would thrash the renderer. The coalescer keeps only the
/// latest pending delta and hands it out once per frame tick; coalescing,
/// not queueing: earlier deltas in the same frame are discarded.
///
/// The value object carries no callbacks and knows nothing about real
/// frames, so scheduling, cancellation, and idempotent re-requests are all
/// plain unit-testable state.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct FrameCoalescer {
    pending: Option<Vec2>,
}

impl FrameCoalescer {
    /// Creates an idle coalescer.
    #[must_use]
    pub const fn new() -> Self {
        Self { pending: None }
    }

    /// Records `delta` as the value to commit on the next frame,
    /// overwriting any delta already pending.
    ///
    /// Returns `true` when the caller must request a frame callback,
    /// i.e. when no frame was pending yet. Repeated pushes within one
    /// frame return `false`, keeping the host's scheduling idempotent.
    pub fn push(&mut self, delta: Vec2) -> bool {
        let needs_request = self.pending.is_none();
        self.pending = Some(delta);
        needs_request
    }

    /// Takes the pending delta at the frame tick, leaving the coalescer
    /// idle. Returns `None` when nothing was scheduled (spurious tick).
    pub fn take(&mut self) -> Option<Vec2> {
        self.pending.take()
    }

    /// Discards any pending delta without committing it, matching the
    /// cancel-animation-frame path at session end.
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Returns `true` while a delta is waiting for its frame.
    #[must_use]
    pub fn is_scheduled(&self) -> bool {
        self.pending.is_some()
    }
}
