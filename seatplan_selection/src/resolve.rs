// Copyright 2026 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Rectangle-selection resolution: from a world-space lasso to a selection.

use alloc::vec::Vec;

use kurbo::Rect;

use seatplan_geometry::{Table, TableId, boxes_overlap};

use crate::SelectionSet;

/// How resolved ids combine with the existing selection.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum SelectMode {
    /// The matched ids become the whole selection; previously selected but
    /// unmatched tables are deselected.
    #[default]
    Replace,
    /// The matched ids union into the existing selection (Shift-lasso).
    Append,
}

/// Returns the ids of all tables whose bounding box strictly overlaps
/// `rect`.
///
/// Edge-only contact does not match, and tables with non-finite geometry
/// are skipped rather than failing the whole query.
#[must_use]
pub fn hits_in_rect(tables: &[Table], rect: Rect) -> Vec<TableId> {
    tables
        .iter()
        .filter(|t| boxes_overlap(t.bounds(), rect))
        .map(|t| t.id)
        .collect()
}

/// Resolves a lasso rectangle against `tables` and applies the result to
/// `selection` under `mode`.
///
/// Idempotent for both modes: re-running with identical inputs yields the
/// same selection (and, via the revision counter, registers as a no-op).
pub fn apply_rect_select(
    selection: &mut SelectionSet<TableId>,
    tables: &[Table],
    rect: Rect,
    mode: SelectMode,
) {
    let matched = hits_in_rect(tables, rect);
    match mode {
        SelectMode::Replace => selection.replace_with(matched),
        SelectMode::Append => selection.extend_with(matched),
    }
}

/// Selects every table, bypassing geometry. Always replace-mode.
pub fn select_all(selection: &mut SelectionSet<TableId>, tables: &[Table]) {
    selection.replace_with(tables.iter().map(|t| t.id));
}
