// Copyright 2026 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless walkthrough of the seating-plan engine.
//!
//! Drives a `PlanController` through the gestures a host view would
//! forward: mount-fit, wheel zoom, a pan drag with frame-coalesced writes,
//! a lasso selection, and a focus glide. Frame time is a fake 60 Hz clock;
//! the engine itself never reads one.

use kurbo::{Point, Size};
use seatplan_geometry::{Scene, Table, TableId, TableShape};
use seatplan_interact::{DrawMode, Modifiers, PlanController};

const FRAME_MS: f64 = 1000.0 / 60.0;

fn banquet_hall() -> Scene {
    Scene {
        tables: vec![
            Table::new(TableId(1), Point::new(300.0, 250.0), TableShape::rect(80.0, 60.0)),
            Table::new(TableId(2), Point::new(600.0, 250.0), TableShape::round(60.0)),
            Table::new(TableId(3), Point::new(900.0, 250.0), TableShape::rect(80.0, 60.0)),
            Table::new(TableId(4), Point::new(450.0, 700.0), TableShape::round(60.0)),
            Table::new(TableId(5), Point::new(750.0, 700.0), TableShape::rect(80.0, 60.0)),
        ],
        hall: Some(Size::new(1800.0, 1200.0)),
        ..Scene::default()
    }
}

fn report(label: &str, ctl: &PlanController) {
    let info = ctl.viewport().debug_info();
    let selected: Vec<u64> = ctl.selection().iter().map(|id| id.0).collect();
    println!(
        "{label:<28} scale {:.3}  offset ({:7.1}, {:7.1})  floor {:.3}  selected {selected:?}",
        info.scale, info.offset.x, info.offset.y, info.min_scale,
    );
}

fn tick(clock: &mut f64, ctl: &mut PlanController) {
    *clock += FRAME_MS;
    ctl.on_frame(*clock);
}

fn main() {
    let mut clock = 0.0;

    // Mount with content: the controller fits the hall immediately.
    let mut ctl = PlanController::with_scene(Size::new(800.0, 600.0), banquet_hall());
    report("mounted (fit)", &ctl);

    // Two wheel ticks in over table 2.
    let anchor = ctl.viewport().to_screen(Point::new(600.0, 250.0));
    ctl.zoom_step(anchor, true);
    ctl.zoom_step(anchor, true);
    report("wheel zoom x2", &ctl);

    // Grab the background and drag; moves coalesce onto frame ticks.
    ctl.pointer_down(Point::new(400.0, 300.0), Modifiers::empty());
    for step in 1..=10 {
        ctl.pointer_move(Point::new(400.0 - f64::from(step) * 12.0, 300.0));
        if step % 3 == 0 {
            tick(&mut clock, &mut ctl);
        }
    }
    tick(&mut clock, &mut ctl);
    ctl.pointer_up(Point::new(280.0, 300.0));
    report("panned left", &ctl);

    // Lasso tables 1 and 2 in move mode.
    ctl.set_draw_mode(DrawMode::Move);
    let a = ctl.viewport().to_screen(Point::new(200.0, 150.0));
    let b = ctl.viewport().to_screen(Point::new(700.0, 350.0));
    ctl.pointer_down(a, Modifiers::empty());
    ctl.pointer_move(b);
    ctl.pointer_up(b);
    report("lasso tables 1+2", &ctl);

    // Shift-lasso adds table 3.
    let a = ctl.viewport().to_screen(Point::new(820.0, 150.0));
    let b = ctl.viewport().to_screen(Point::new(980.0, 350.0));
    ctl.pointer_down(a, Modifiers::SHIFT);
    ctl.pointer_move(b);
    ctl.pointer_up(b);
    report("shift-lasso adds 3", &ctl);

    // Glide the camera onto table 4 and run frames to completion.
    ctl.focus_table(TableId(4), clock);
    while ctl.wants_frames() {
        tick(&mut clock, &mut ctl);
    }
    report("focused table 4", &ctl);
    let centered = ctl.viewport().to_screen(Point::new(450.0, 700.0));
    println!(
        "table 4 now renders at ({:.1}, {:.1}) in the 800x600 view",
        centered.x, centered.y
    );

    // Escape clears, Ctrl+0 reframes everything.
    ctl.key_down("Escape", Modifiers::empty());
    ctl.key_down("0", Modifiers::CTRL);
    report("escape + ctrl-0", &ctl);

    ctl.teardown();
}
