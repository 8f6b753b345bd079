// Copyright 2026 the Seatplan Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size};

use seatplan_geometry::{Scene, TableId};
use seatplan_glide::Glide;
use seatplan_selection::{SelectMode, SelectionSet, resolve};
use seatplan_view2d::{FitPlan, Viewport};

use crate::{
    DrawMode, Modifiers, PanSession, PointerPlan, PointerSession, RectSelectSession, Shortcut,
    pointer_plan, shortcut_for,
};

/// What the engine did with a pointer-down.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointerResponse {
    /// A session started; the host should route subsequent move/up events
    /// here until the session ends.
    Captured,
    /// The active drawing tool owns this event; the engine touched nothing.
    PassThrough,
    /// A session was already open (secondary pointer); the event is
    /// dropped and the first session stays authoritative.
    Ignored,
}

/// What a pointer-up resolved to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PointerUpOutcome {
    /// No session was active.
    None,
    /// A pan session ended; any uncommitted frame delta is discarded.
    PanEnded,
    /// The lasso never left the click threshold; the selection was cleared.
    SelectionCleared,
    /// The lasso was resolved against the scene.
    SelectionResolved,
}

/// The facade hosts drive: viewport + selection + interaction in one place.
///
/// The controller owns the single-writer state of the canvas: the
/// [`Viewport`], the [`SelectionSet`], the active [`PointerSession`], and
/// the active focus [`Glide`]. Hosts forward pointer/keyboard events and
/// animation-frame ticks, issue commands (`fit`, `focus_table`, zooming,
/// selection commands), and re-render from the committed state using the
/// viewport and selection revision counters as change markers.
///
/// All event handling is synchronous; the only deferral is the pan
/// coalescer and the glide, both of which commit at most one offset write
/// per [`PlanController::on_frame`] tick.
#[derive(Clone, Debug)]
pub struct PlanController {
    viewport: Viewport,
    selection: SelectionSet<TableId>,
    scene: Scene,
    view: Size,
    draw_mode: DrawMode,
    session: Option<PointerSession>,
    glide: Option<Glide>,
    torn_down: bool,
}

impl PlanController {
    /// Creates a controller for a view of the given pixel size, with an
    /// empty scene and the default pan tool.
    #[must_use]
    pub fn new(view: Size) -> Self {
        Self {
            viewport: Viewport::new(),
            selection: SelectionSet::new(),
            scene: Scene::default(),
            view,
            draw_mode: DrawMode::default(),
            session: None,
            glide: None,
            torn_down: false,
        }
    }

    /// Creates a controller and immediately fits the given scene, the
    /// on-mount behavior when content already exists.
    #[must_use]
    pub fn with_scene(view: Size, scene: Scene) -> Self {
        let mut ctl = Self::new(view);
        ctl.scene = scene;
        if ctl.scene.extent().is_some() {
            ctl.fit();
        }
        ctl
    }

    /// Returns the viewport.
    #[must_use]
    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Returns the selection.
    #[must_use]
    pub fn selection(&self) -> &SelectionSet<TableId> {
        &self.selection
    }

    /// Returns the current scene snapshot.
    #[must_use]
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Returns the active draw mode.
    #[must_use]
    pub fn draw_mode(&self) -> DrawMode {
        self.draw_mode
    }

    /// Returns the view size in pixels.
    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view
    }

    /// Returns `true` while a pan session is active (grabbing cursor).
    #[must_use]
    pub fn is_panning(&self) -> bool {
        matches!(self.session, Some(PointerSession::Pan(_)))
    }

    /// Returns the live lasso rectangle in screen coordinates while a
    /// rect-select session is active, for the host's overlay.
    #[must_use]
    pub fn selection_rect(&self) -> Option<Rect> {
        match &self.session {
            Some(PointerSession::RectSelect(lasso)) => Some(lasso.screen_rect()),
            _ => None,
        }
    }

    /// Replaces the scene snapshot on content change.
    ///
    /// This passively refreshes the zoom floor (without touching the
    /// current camera) and drops deleted tables from the selection. It
    /// never re-frames the view; that is the explicit [`PlanController::fit`]
    /// command.
    pub fn set_scene(&mut self, scene: Scene) {
        self.scene = scene;
        let plan = FitPlan::compute(self.scene.extent(), self.view);
        self.viewport.refresh_floor(&plan);

        let tables = &self.scene.tables;
        self.selection
            .retain(|id| tables.iter().any(|t| t.id == *id));
    }

    /// Updates the view size (host resize). The camera is left alone; the
    /// zoom floor refreshes against the new size.
    pub fn set_view_size(&mut self, view: Size) {
        self.view = view;
        let plan = FitPlan::compute(self.scene.extent(), self.view);
        self.viewport.refresh_floor(&plan);
    }

    /// Switches the active tool. An in-progress session is cancelled: the
    /// gesture's semantics would otherwise change mid-flight.
    pub fn set_draw_mode(&mut self, mode: DrawMode) {
        if self.draw_mode != mode {
            self.draw_mode = mode;
            self.cancel_session();
        }
    }

    /// Handles a background pointer-down.
    ///
    /// Pointer-downs on a table itself are the host's business (click
    /// selection, entity dragging) and must not be forwarded here.
    pub fn pointer_down(&mut self, screen: Point, modifiers: Modifiers) -> PointerResponse {
        if self.session.is_some() {
            return PointerResponse::Ignored;
        }
        match pointer_plan(self.draw_mode, modifiers) {
            PointerPlan::Pan => {
                // Grabbing the canvas supersedes an in-flight focus glide.
                self.glide = None;
                self.session = Some(PointerSession::Pan(PanSession::new(
                    screen,
                    self.viewport.offset(),
                )));
                PointerResponse::Captured
            }
            PointerPlan::RectSelect { append } => {
                self.session = Some(PointerSession::RectSelect(RectSelectSession::new(
                    screen,
                    self.viewport.to_world(screen),
                    append,
                )));
                PointerResponse::Captured
            }
            PointerPlan::PassThrough => PointerResponse::PassThrough,
        }
    }

    /// Handles a pointer move during a session.
    ///
    /// Returns `true` when the host must request an animation-frame
    /// callback (pan writes are frame-coalesced; lasso updates are pure
    /// state and redraw with the next render anyway).
    pub fn pointer_move(&mut self, screen: Point) -> bool {
        match &mut self.session {
            Some(PointerSession::Pan(pan)) => pan.move_to(screen),
            Some(PointerSession::RectSelect(lasso)) => {
                lasso.current_screen = screen;
                false
            }
            None => false,
        }
    }

    /// Ends the active session at `screen`.
    ///
    /// Pan sessions simply stop (pending frame deltas are discarded, no
    /// inertia). Lasso sessions either clear the selection (click) or
    /// resolve the world-space rectangle against the scene.
    pub fn pointer_up(&mut self, screen: Point) -> PointerUpOutcome {
        match self.session.take() {
            None => PointerUpOutcome::None,
            Some(PointerSession::Pan(_)) => PointerUpOutcome::PanEnded,
            Some(PointerSession::RectSelect(mut lasso)) => {
                lasso.current_screen = screen;
                if lasso.is_click() {
                    self.selection.clear();
                    return PointerUpOutcome::SelectionCleared;
                }
                // The end corner converts through the *current* transform:
                // a zoom shortcut mid-drag shifts the world rect with it.
                let end_world = self.viewport.to_world(screen);
                let world_rect = Rect::from_points(lasso.start_world, end_world);
                let mode = if lasso.append {
                    SelectMode::Append
                } else {
                    SelectMode::Replace
                };
                resolve::apply_rect_select(&mut self.selection, &self.scene.tables, world_rect, mode);
                PointerUpOutcome::SelectionResolved
            }
        }
    }

    /// Cancels the active session without resolving anything: the
    /// window-blur / abnormal-termination path. Pending frame deltas die
    /// with the session.
    pub fn cancel_session(&mut self) {
        self.session = None;
    }

    /// One animation-frame tick at `now_ms` (host clock, milliseconds).
    ///
    /// Commits at most one offset write: a coalesced pan delta if one is
    /// pending, else the next glide sample. An active pan session takes
    /// precedence over the glide for the whole session, keeping the offset
    /// single-writer per frame. Returns `true` when the transform changed
    /// and the host should redraw.
    ///
    /// Calling this after [`PlanController::teardown`] is a host contract
    /// violation: fatal in debug builds, silently dropped in release.
    pub fn on_frame(&mut self, now_ms: f64) -> bool {
        debug_assert!(!self.torn_down, "frame tick after teardown");
        if self.torn_down {
            return false;
        }

        if let Some(PointerSession::Pan(pan)) = &mut self.session {
            if let Some(delta) = pan.frame.take() {
                return self.viewport.set_offset(pan.start_offset + delta);
            }
            return false;
        }

        if let Some(glide) = self.glide {
            let sample = glide.sample(now_ms);
            let changed = self.viewport.set_offset(sample.offset);
            if sample.finished {
                self.glide = None;
            }
            return changed;
        }

        false
    }

    /// Returns `true` while a glide (or a pending pan write) still wants
    /// frame ticks.
    #[must_use]
    pub fn wants_frames(&self) -> bool {
        if self.glide.is_some() {
            return true;
        }
        matches!(&self.session, Some(PointerSession::Pan(pan)) if pan.frame.is_scheduled())
    }

    /// Fits all content to the view: the explicit `fit` command.
    ///
    /// Any in-progress session is implicitly cancelled (and its pending
    /// frame discarded), as is an in-flight glide; the fit plan then
    /// re-bases scale, offset, and the zoom floor.
    pub fn fit(&mut self) {
        self.cancel_session();
        self.glide = None;
        let plan = FitPlan::compute(self.scene.extent(), self.view);
        self.viewport.apply_fit(&plan);
    }

    /// Starts a glide that centers the given table, leaving scale,
    /// selection, and draw mode untouched. A glide already in flight is
    /// replaced. Returns `false` for an unknown id.
    pub fn focus_table(&mut self, id: TableId, now_ms: f64) -> bool {
        let Some(table) = self.scene.tables.iter().find(|t| t.id == id) else {
            return false;
        };
        self.glide = Some(Glide::recenter(
            self.viewport.offset(),
            self.viewport.scale(),
            self.view,
            table.center,
            now_ms,
        ));
        true
    }

    /// Zooms by `factor` around a screen anchor. See [`Viewport::zoom_at`].
    ///
    /// A zoom landing mid-pan applies immediately and re-bases the pan, so
    /// the gesture continues from the new offset instead of reverting it
    /// on the next frame.
    pub fn zoom_at(&mut self, anchor: Point, factor: f64) -> bool {
        let changed = self.viewport.zoom_at(anchor, factor);
        if changed {
            self.rebase_pan();
        }
        changed
    }

    /// One wheel-tick zoom step around a screen anchor.
    pub fn zoom_step(&mut self, anchor: Point, zoom_in: bool) -> bool {
        let changed = self.viewport.zoom_step(anchor, zoom_in);
        if changed {
            self.rebase_pan();
        }
        changed
    }

    fn rebase_pan(&mut self) {
        if let Some(PointerSession::Pan(pan)) = &mut self.session {
            pan.rebase(self.viewport.offset());
        }
    }

    /// Selects every table in the scene.
    pub fn select_all(&mut self) {
        resolve::select_all(&mut self.selection, &self.scene.tables);
    }

    /// Clears the selection.
    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Handles a global keydown. Returns `true` when the key mapped to an
    /// engine shortcut and was consumed.
    pub fn key_down(&mut self, key: &str, modifiers: Modifiers) -> bool {
        let Some(shortcut) = shortcut_for(key, modifiers) else {
            return false;
        };
        let center = Point::new(self.view.width / 2.0, self.view.height / 2.0);
        match shortcut {
            Shortcut::ZoomIn => {
                self.zoom_step(center, true);
            }
            Shortcut::ZoomOut => {
                self.zoom_step(center, false);
            }
            Shortcut::Fit => self.fit(),
            Shortcut::SelectAll => self.select_all(),
            Shortcut::ClearSelection => self.clear_selection(),
        }
        true
    }

    /// Tears the controller down when the owning view unmounts: the active
    /// session and glide are dropped so no stale write can reach a
    /// destroyed view.
    pub fn teardown(&mut self) {
        self.session = None;
        self.glide = None;
        self.torn_down = true;
    }
}
