// Copyright 2026 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

bitflags::bitflags! {
    /// Modifier keys sampled from a pointer or keyboard event.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct Modifiers: u8 {
        /// Shift key.
        const SHIFT = 0b0000_0001;
        /// Control key.
        const CTRL  = 0b0000_0010;
        /// Meta / Command key.
        const META  = 0b0000_0100;
        /// Alt / Option key.
        const ALT   = 0b0000_1000;
    }
}

impl Modifiers {
    /// Returns `true` when any selection modifier (Shift, Ctrl, Meta) is
    /// held, overriding pan-mode into lasso selection.
    #[must_use]
    pub fn selection_override(self) -> bool {
        self.intersects(Self::SHIFT | Self::CTRL | Self::META)
    }

    /// Returns `true` when the lasso should extend the selection instead
    /// of replacing it. Shift only; Ctrl/Meta without Shift still replace.
    #[must_use]
    pub fn appends(self) -> bool {
        self.contains(Self::SHIFT)
    }

    /// Returns `true` when the platform command modifier (Ctrl or Cmd,
    /// depending on the host platform) is held.
    #[must_use]
    pub fn command(self) -> bool {
        self.intersects(Self::CTRL | Self::META)
    }
}
