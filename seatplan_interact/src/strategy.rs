// Copyright 2026 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use crate::{DrawMode, Modifiers};

/// The interaction chosen for a background pointer-down.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointerPlan {
    /// Start a pan session.
    Pan,
    /// Start a lasso session; `append` extends the selection on resolve.
    RectSelect {
        /// `true` when the resolved ids union into the existing selection.
        append: bool,
    },
    /// The engine does nothing; the event belongs to the host's drawing
    /// tools.
    PassThrough,
}

/// Maps draw-mode × modifier-keys to an interaction.
///
/// Priority order, matching the canvas behavior:
/// 1. Pan tool with a selection modifier held lassos, so power users select
///    without switching tools.
/// 2. Pan tool otherwise pans.
/// 3. Move tool lassos on background clicks (dragging a table directly is
///    handled by the table itself, outside this engine).
/// 4. Drawing tools pass through.
#[must_use]
pub fn pointer_plan(mode: DrawMode, modifiers: Modifiers) -> PointerPlan {
    match mode {
        DrawMode::Pan if modifiers.selection_override() => PointerPlan::RectSelect {
            append: modifiers.appends(),
        },
        DrawMode::Pan => PointerPlan::Pan,
        DrawMode::Move => PointerPlan::RectSelect {
            append: modifiers.appends(),
        },
        DrawMode::Erase
        | DrawMode::Boundary
        | DrawMode::Door
        | DrawMode::Obstacle
        | DrawMode::Aisle => PointerPlan::PassThrough,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pan_tool_pans_without_modifiers() {
        assert_eq!(
            pointer_plan(DrawMode::Pan, Modifiers::empty()),
            PointerPlan::Pan
        );
        // Alt is not a selection modifier.
        assert_eq!(
            pointer_plan(DrawMode::Pan, Modifiers::ALT),
            PointerPlan::Pan
        );
    }

    #[test]
    fn selection_modifier_overrides_pan() {
        assert_eq!(
            pointer_plan(DrawMode::Pan, Modifiers::SHIFT),
            PointerPlan::RectSelect { append: true }
        );
        // Ctrl/Meta select, but in replace mode.
        assert_eq!(
            pointer_plan(DrawMode::Pan, Modifiers::CTRL),
            PointerPlan::RectSelect { append: false }
        );
        assert_eq!(
            pointer_plan(DrawMode::Pan, Modifiers::META),
            PointerPlan::RectSelect { append: false }
        );
    }

    #[test]
    fn move_tool_lassos_on_background() {
        assert_eq!(
            pointer_plan(DrawMode::Move, Modifiers::empty()),
            PointerPlan::RectSelect { append: false }
        );
        assert_eq!(
            pointer_plan(DrawMode::Move, Modifiers::SHIFT),
            PointerPlan::RectSelect { append: true }
        );
    }

    #[test]
    fn drawing_tools_pass_through() {
        for mode in [
            DrawMode::Erase,
            DrawMode::Boundary,
            DrawMode::Door,
            DrawMode::Obstacle,
            DrawMode::Aisle,
        ] {
            assert_eq!(
                pointer_plan(mode, Modifiers::empty()),
                PointerPlan::PassThrough
            );
            // Modifiers do not rescue drawing tools into selection.
            assert_eq!(
                pointer_plan(mode, Modifiers::SHIFT),
                PointerPlan::PassThrough
            );
        }
    }
}
