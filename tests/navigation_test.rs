//! Behavioural tests for the slide controller over in-memory surfaces.
//!
//! Covers the arrow visibility rules, delta composition, empty collections,
//! fresh lookups on every render and propagation of surface failures.

use std::cell::Cell;
use slidenav::{
    Display, RenderingSurface, Role, SlideController, SlideError, Stage, StageElement,
    SurfaceError,
};

// ── Helpers ──────────────────────────────────────────────────────────

fn stage(n: usize) -> Stage<usize> {
    let mut stage = Stage::new().with_affordances();
    for i in 0..n {
        stage.push_slide(i);
    }
    stage
}

fn arrows(controller: &SlideController<Stage<usize>>) -> (bool, bool) {
    let surface = controller.surface();
    (surface.is_shown(StageElement::Previous), surface.is_shown(StageElement::Next))
}

/// Wraps a stage, counting lookups and optionally failing from the n-th
/// display change onwards.
struct Flaky {
    inner: Stage<usize>,
    lookups: Cell<usize>,
    writes: usize,
    fail_after: Option<usize>,
}

impl Flaky {
    fn new(inner: Stage<usize>) -> Self {
        Self { inner, lookups: Cell::new(0), writes: 0, fail_after: None }
    }
}

impl RenderingSurface for Flaky {
    type Element = StageElement;

    fn find_all(&self, role: Role) -> Result<Vec<StageElement>, SurfaceError> {
        self.lookups.set(self.lookups.get() + 1);
        self.inner.find_all(role)
    }

    fn set_display(&mut self, element: StageElement, display: Display) -> Result<(), SurfaceError> {
        if self.fail_after.is_some_and(|n| self.writes >= n) {
            return Err(SurfaceError::Unavailable("document detached".into()));
        }
        self.writes += 1;
        self.inner.set_display(element, display)
    }
}

/// A surface whose lookups always fail.
struct Detached;

impl RenderingSurface for Detached {
    type Element = usize;

    fn find_all(&self, role: Role) -> Result<Vec<usize>, SurfaceError> {
        Err(SurfaceError::LookupFailed { role, reason: "no document".into() })
    }

    fn set_display(&mut self, _element: usize, _display: Display) -> Result<(), SurfaceError> {
        Err(SurfaceError::Unavailable("no document".into()))
    }
}

// ── Arrow visibility ─────────────────────────────────────────────────

#[test]
fn arrows_follow_position_among_five_slides() {
    let mut controller = SlideController::new(stage(5));

    controller.render_at(1).unwrap();
    assert_eq!(arrows(&controller), (false, true));

    controller.render_at(5).unwrap();
    assert_eq!(arrows(&controller), (true, false));

    controller.render_at(3).unwrap();
    assert_eq!(arrows(&controller), (true, true));
    assert_eq!(controller.surface().visible_slides(), vec![&2]);
}

#[test]
fn rendering_past_the_end_matches_rendering_the_end() {
    let mut once = SlideController::new(stage(4));
    once.render_at(4).unwrap();

    let mut twice = SlideController::new(stage(4));
    twice.render_at(4).unwrap();
    twice.render_at(104).unwrap();

    assert_eq!(once.surface().visible_slides(), twice.surface().visible_slides());
    assert_eq!(arrows(&once), arrows(&twice));
    assert_eq!(twice.index(), 4);
}

#[test]
fn missing_arrows_are_skipped() {
    let mut bare = Stage::new();
    bare.push_slide('a');
    bare.push_slide('b');
    let mut controller = SlideController::mount(bare).unwrap();
    assert_eq!(controller.advance_by(1).unwrap(), Some(2));
    assert_eq!(controller.surface().visible_slides(), vec![&'b']);
}

// ── Delta composition ────────────────────────────────────────────────

#[test]
fn stepping_forward_stops_at_the_last_slide() {
    let mut controller = SlideController::mount(stage(3)).unwrap();
    controller.advance_by(1).unwrap();
    controller.advance_by(1).unwrap();
    controller.advance_by(1).unwrap();
    assert_eq!(controller.index(), 3);
}

#[test]
fn large_negative_delta_stops_at_the_first_slide() {
    let mut controller = SlideController::mount(stage(3)).unwrap();
    controller.advance_by(-5).unwrap();
    assert_eq!(controller.index(), 1);
    assert_eq!(controller.surface().visible_slides(), vec![&0]);
}

#[test]
fn zero_delta_re_renders_in_place() {
    let mut controller = SlideController::mount(stage(3)).unwrap();
    controller.advance_by(1).unwrap();
    assert_eq!(controller.advance_by(0).unwrap(), Some(2));
}

#[test]
fn controllers_are_independent() {
    let mut left = SlideController::mount(stage(3)).unwrap();
    let right = SlideController::mount(stage(3)).unwrap();
    left.advance_by(2).unwrap();
    assert_eq!(left.index(), 3);
    assert_eq!(right.index(), 1);
}

// ── Empty collection ─────────────────────────────────────────────────

#[test]
fn empty_collection_hides_both_arrows() {
    let mut controller = SlideController::new(stage(0));
    assert_eq!(controller.render_at(1).unwrap(), None);
    assert_eq!(controller.advance_by(-2).unwrap(), None);
    assert_eq!(arrows(&controller), (false, false));
    assert_eq!(controller.index(), 1);
}

// ── Surface interaction ──────────────────────────────────────────────

#[test]
fn every_render_looks_elements_up_again() {
    let mut controller = SlideController::new(Flaky::new(stage(2)));
    controller.render_at(1).unwrap();
    let after_first = controller.surface().lookups.get();
    assert_eq!(after_first, 3);

    controller.render_at(2).unwrap();
    assert_eq!(controller.surface().lookups.get(), 2 * after_first);
}

#[test]
fn slides_added_between_renders_are_picked_up() {
    let mut controller = SlideController::mount(stage(2)).unwrap();
    assert_eq!(controller.render_at(3).unwrap(), Some(2));

    controller.surface_mut().push_slide(2);
    assert_eq!(controller.render_at(3).unwrap(), Some(3));
    assert_eq!(controller.surface().visible_slides(), vec![&2]);
}

#[test]
fn lookup_failure_propagates() {
    let mut controller = SlideController::new(Detached);
    let err = controller.render_at(1).unwrap_err();
    assert!(matches!(err, SlideError::Surface(SurfaceError::LookupFailed { role: Role::Slide, .. })));
}

#[test]
fn failed_render_keeps_previous_index() {
    let mut controller = SlideController::mount(Flaky::new(stage(3))).unwrap();
    controller.advance_by(1).unwrap();
    assert_eq!(controller.index(), 2);

    let writes = controller.surface().writes;
    controller.surface_mut().fail_after = Some(writes + 1);
    assert!(controller.advance_by(1).is_err());
    assert_eq!(controller.index(), 2);
}

#[test]
fn error_messages_name_the_cause() {
    let err = SlideError::from(SurfaceError::Unavailable("document detached".into()));
    assert_eq!(err.to_string(), "rendering surface error: rendering surface is unavailable: document detached");
}
