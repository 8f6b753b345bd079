// Copyright 2026 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Seatplan Geometry: footprints and extents for seating-plan scenes.
//!
//! This crate owns the geometric vocabulary shared by the rest of the
//! Seatplan engine:
//! - [`TableShape`], a tagged union over the supported table footprints
//!   (rectangular and round), with exhaustive-match bounding boxes.
//! - [`Table`], an identified footprint placed at a world-space center.
//! - [`boxes_overlap`], the strict axis-aligned overlap test used by
//!   rectangle selection.
//! - [`Scene`], a read-only snapshot of everything that contributes to the
//!   fit-to-content extent: area polygons, tables, seat points, and the
//!   hall bounds.
//!
//! Everything here is a pure function over immutable data; state lives in
//! the higher-level crates.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::{Point, Rect};
//! use seatplan_geometry::{Table, TableId, TableShape, boxes_overlap};
//!
//! let table = Table::new(TableId(1), Point::new(200.0, 150.0), TableShape::rect(120.0, 80.0));
//! assert_eq!(table.bounds(), Rect::new(140.0, 110.0, 260.0, 190.0));
//!
//! let lasso = Rect::new(100.0, 80.0, 300.0, 250.0);
//! assert!(boxes_overlap(table.bounds(), lasso));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod scene;
mod shape;

pub use scene::{Area, Scene};
pub use shape::{Table, TableId, TableShape, boxes_overlap};
