// Copyright 2026 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatplan Selection: selection bookkeeping and rectangle resolution.
//!
//! This crate tracks *which tables are selected* and decides *what a lasso
//! rectangle selects*. It has two halves:
//!
//! - [`SelectionSet`], a small membership-only container over arbitrary key
//!   types. Keys live in a `Vec<T>` with uniqueness enforced by equality;
//!   no hashing or ordering constraints are imposed on `T`. A monotonically
//!   increasing revision counter bumps whenever the contents actually
//!   change, giving observers a cheap "did anything change?" marker.
//! - The [`resolve`] module, which maps a world-space rectangle over a
//!   table list to the matched ids (strict bounding-box overlap) and
//!   applies them with replace or append semantics.
//!
//! Clicks on individual tables map onto [`SelectionSet::select_only`] and
//! [`SelectionSet::toggle`]; lasso gestures go through
//! [`resolve::apply_rect_select`]; "select all" and "clear" bypass geometry
//! entirely via [`resolve::select_all`] and [`SelectionSet::clear`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use seatplan_geometry::{Table, TableId, TableShape};
//! use seatplan_selection::{SelectMode, SelectionSet, resolve};
//!
//! let tables = [
//!     Table::new(TableId(1), Point::new(100.0, 100.0), TableShape::rect(80.0, 60.0)),
//!     Table::new(TableId(2), Point::new(400.0, 100.0), TableShape::round(60.0)),
//! ];
//! let mut sel = SelectionSet::new();
//!
//! // Lasso around the first table only.
//! let lasso = Rect::new(40.0, 50.0, 180.0, 160.0);
//! resolve::apply_rect_select(&mut sel, &tables, lasso, SelectMode::Replace);
//! assert!(sel.contains(&TableId(1)));
//! assert!(!sel.contains(&TableId(2)));
//!
//! // Shift-lasso around the second table extends the selection.
//! let lasso = Rect::new(350.0, 50.0, 450.0, 160.0);
//! resolve::apply_rect_select(&mut sel, &tables, lasso, SelectMode::Append);
//! assert_eq!(sel.len(), 2);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod resolve;

pub use resolve::SelectMode;

use alloc::vec::Vec;

/// A membership-only selection container with a change revision.
///
/// The set is mutated by the resolver and by explicit commands; its
/// lifetime is one editing session. Insertion order is preserved for
/// iteration but carries no semantics.
#[derive(Clone, Debug, Default)]
pub struct SelectionSet<T> {
    items: Vec<T>,
    revision: u64,
}

impl<T> SelectionSet<T> {
    /// Creates an empty selection.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            items: Vec::new(),
            revision: 0,
        }
    }

    /// Returns `true` if nothing is selected.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of selected keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns all selected keys as a slice.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the selected keys.
    pub fn iter(&self) -> core::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns the revision counter.
    ///
    /// Bumps once per mutation that changes the contents; no-op calls leave
    /// it unchanged.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Removes all keys.
    pub fn clear(&mut self) {
        if self.items.is_empty() {
            return;
        }
        self.items.clear();
        self.bump();
    }

    fn bump(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}

impl<T> SelectionSet<T>
where
    T: PartialEq,
{
    /// Returns `true` if `key` is currently selected.
    #[must_use]
    pub fn contains(&self, key: &T) -> bool {
        self.items.contains(key)
    }

    /// Replaces the selection with the single `key`, the plain-click
    /// mapping.
    pub fn select_only(&mut self, key: T) {
        if self.items.len() == 1 && self.items.first() == Some(&key) {
            return;
        }
        self.items.clear();
        self.items.push(key);
        self.bump();
    }

    /// Toggles membership of `key`, the modifier-click mapping.
    pub fn toggle(&mut self, key: T) {
        if let Some(idx) = self.items.iter().position(|k| k == &key) {
            self.items.remove(idx);
        } else {
            self.items.push(key);
        }
        self.bump();
    }

    /// Replaces the selection with the provided batch of keys.
    ///
    /// Duplicates in the input are ignored. Replacing the selection with
    /// its current contents is a no-op and leaves the revision unchanged,
    /// which makes repeated identical lassos idempotent.
    pub fn replace_with<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut next: Vec<T> = Vec::new();
        for key in keys {
            if !next.contains(&key) {
                next.push(key);
            }
        }
        if next == self.items {
            return;
        }
        self.items = next;
        self.bump();
    }

    /// Keeps only the keys for which `keep` returns `true`.
    ///
    /// Used when scene content changes: selected tables that were deleted
    /// drop out of the selection. Bumps the revision only when something
    /// was actually removed.
    pub fn retain<F>(&mut self, keep: F)
    where
        F: FnMut(&T) -> bool,
    {
        let before = self.items.len();
        self.items.retain(keep);
        if self.items.len() != before {
            self.bump();
        }
    }

    /// Extends the selection with the provided batch of keys.
    ///
    /// Existing keys stay selected; already-selected keys in the input are
    /// no-ops. The revision bumps only when at least one key was added, so
    /// repeating the same append is idempotent.
    pub fn extend_with<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = T>,
    {
        let mut added = false;
        for key in keys {
            if !self.items.contains(&key) {
                self.items.push(key);
                added = true;
            }
        }
        if added {
            self.bump();
        }
    }
}

#[cfg(feature = "hashbrown")]
impl<T> SelectionSet<T>
where
    T: core::hash::Hash + Eq + Clone,
{
    /// Replaces the selection with a batch of keys, de-duplicating with
    /// hashing.
    ///
    /// A linear-time alternative to [`SelectionSet::replace_with`] for
    /// large batches (select-all over big plans) when `T` supports hashing.
    /// First-occurrence order is preserved.
    pub fn replace_with_hashed<I>(&mut self, keys: I)
    where
        I: IntoIterator<Item = T>,
    {
        let iter = keys.into_iter();
        let (lower, _) = iter.size_hint();
        let mut seen = hashbrown::HashSet::with_capacity(lower);
        let mut next: Vec<T> = Vec::with_capacity(lower);
        for key in iter {
            if seen.insert(key.clone()) {
                next.push(key);
            }
        }
        if next == self.items {
            return;
        }
        self.items = next;
        self.bump();
    }
}
