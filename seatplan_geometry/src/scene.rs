// Copyright 2026 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::{Point, Rect, Size};

use crate::Table;

/// A free-form area polygon (dance floor, stage, obstacle outline).
///
/// The polygon is an ordered point list in world coordinates; only the
/// points matter for extent computation, so the winding is irrelevant here.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Area {
    /// Vertices of the polygon in world coordinates.
    pub points: Vec<Point>,
}

impl Area {
    /// Creates an area from its vertices.
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }
}

/// Read-only snapshot of the scene content that drives fit-to-content.
///
/// Hosts rebuild this (cheaply, by cloning their current lists) whenever
/// content changes; nothing here is persisted or mutated by the engine.
#[derive(Clone, Debug, Default)]
pub struct Scene {
    /// Area polygons.
    pub areas: Vec<Area>,
    /// Tables with their footprints.
    pub tables: Vec<Table>,
    /// Individual seat markers (ceremony rows and the like).
    pub seats: Vec<Point>,
    /// Hall bounds. When present, the corners `(0, 0)` and
    /// `(width, height)` always join the extent, so a freshly created empty
    /// plan still gets a sane fit.
    pub hall: Option<Size>,
}

impl Scene {
    /// Returns `true` when the scene has no content besides the hall bounds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.areas.is_empty() && self.tables.is_empty() && self.seats.is_empty()
    }

    /// Computes the union bounding box of all scene content.
    ///
    /// The union covers every polygon vertex, every table's bounding box,
    /// every seat point, and the hall corners when hall bounds are set.
    /// Entities with non-finite coordinates are skipped individually, so one
    /// malformed table cannot poison the extent for the rest of the scene.
    ///
    /// Returns `None` when nothing contributed a finite point.
    #[must_use]
    pub fn extent(&self) -> Option<Rect> {
        let mut acc = ExtentAccumulator::default();

        for area in &self.areas {
            for p in &area.points {
                acc.add_point(*p);
            }
        }
        for table in &self.tables {
            acc.add_rect(table.bounds());
        }
        for seat in &self.seats {
            acc.add_point(*seat);
        }
        if let Some(hall) = self.hall {
            acc.add_point(Point::ORIGIN);
            acc.add_point(Point::new(hall.width, hall.height));
        }

        acc.finish()
    }
}

/// Running min/max accumulator over world-space points.
#[derive(Debug)]
struct ExtentAccumulator {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
    any: bool,
}

impl Default for ExtentAccumulator {
    fn default() -> Self {
        Self {
            min_x: f64::INFINITY,
            min_y: f64::INFINITY,
            max_x: f64::NEG_INFINITY,
            max_y: f64::NEG_INFINITY,
            any: false,
        }
    }
}

impl ExtentAccumulator {
    fn add_point(&mut self, p: Point) {
        if !p.is_finite() {
            return;
        }
        self.min_x = self.min_x.min(p.x);
        self.min_y = self.min_y.min(p.y);
        self.max_x = self.max_x.max(p.x);
        self.max_y = self.max_y.max(p.y);
        self.any = true;
    }

    fn add_rect(&mut self, r: Rect) {
        if !r.is_finite() {
            return;
        }
        self.add_point(Point::new(r.x0, r.y0));
        self.add_point(Point::new(r.x1, r.y1));
    }

    fn finish(self) -> Option<Rect> {
        self.any
            .then(|| Rect::new(self.min_x, self.min_y, self.max_x, self.max_y))
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::*;
    use crate::{TableId, TableShape};

    #[test]
    fn empty_scene_has_no_extent() {
        assert_eq!(Scene::default().extent(), None);
    }

    #[test]
    fn hall_alone_spans_origin_to_size() {
        let scene = Scene {
            hall: Some(Size::new(1800.0, 1200.0)),
            ..Scene::default()
        };
        assert_eq!(scene.extent(), Some(Rect::new(0.0, 0.0, 1800.0, 1200.0)));
    }

    #[test]
    fn extent_unions_all_content_kinds() {
        let scene = Scene {
            areas: vec![Area::new(vec![
                Point::new(-50.0, 10.0),
                Point::new(20.0, 400.0),
            ])],
            tables: vec![Table::new(
                TableId(1),
                Point::new(500.0, 100.0),
                TableShape::rect(80.0, 60.0),
            )],
            seats: vec![Point::new(10.0, -30.0)],
            hall: None,
        };
        // Table box is [460, 70]..[540, 130].
        assert_eq!(scene.extent(), Some(Rect::new(-50.0, -30.0, 540.0, 400.0)));
    }

    #[test]
    fn malformed_entity_is_skipped_not_fatal() {
        let scene = Scene {
            tables: vec![
                Table::new(
                    TableId(1),
                    Point::new(f64::NAN, 0.0),
                    TableShape::rect(80.0, 60.0),
                ),
                Table::new(TableId(2), Point::new(100.0, 100.0), TableShape::round(60.0)),
            ],
            ..Scene::default()
        };
        assert_eq!(scene.extent(), Some(Rect::new(70.0, 70.0, 130.0, 130.0)));
    }

    #[test]
    fn single_point_content_yields_degenerate_extent() {
        let scene = Scene {
            seats: vec![Point::new(42.0, 42.0)],
            ..Scene::default()
        };
        let ext = scene.extent().unwrap();
        assert_eq!(ext.width(), 0.0);
        assert_eq!(ext.height(), 0.0);
    }
}
