// Copyright 2026 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::Modifiers;

/// Keyboard shortcut recognized by the engine.
///
/// Everything except [`Shortcut::ClearSelection`] is guarded by the
/// platform command modifier (Ctrl or Cmd); Escape works bare. Tool
/// switching and editing shortcuts stay host-owned.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Shortcut {
    /// Ctrl/Cmd `+` (or `=`): one zoom step in at the view center.
    ZoomIn,
    /// Ctrl/Cmd `-`: one zoom step out at the view center.
    ZoomOut,
    /// Ctrl/Cmd `0`: fit all content to the view.
    Fit,
    /// Ctrl/Cmd `a`: select every table.
    SelectAll,
    /// Escape, no modifier: clear the selection.
    ClearSelection,
}

/// Maps a key (DOM-style `key` value) plus modifiers to a shortcut.
#[must_use]
pub fn shortcut_for(key: &str, modifiers: Modifiers) -> Option<Shortcut> {
    if key == "Escape" {
        return modifiers.is_empty().then_some(Shortcut::ClearSelection);
    }
    if !modifiers.command() {
        return None;
    }
    match key {
        "+" | "=" => Some(Shortcut::ZoomIn),
        "-" => Some(Shortcut::ZoomOut),
        "0" => Some(Shortcut::Fit),
        k if k.eq_ignore_ascii_case("a") => Some(Shortcut::SelectAll),
        _ => None,
    }
}
