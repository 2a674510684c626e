// Host-side tests for the positioning coordinator: registration, resolution
// and the positions handed to the decorations each frame.

mod common;

use common::core::constants::{SCENE_SPAN_X, SCENE_SPAN_Y};
use common::core::coordinator::{CoordinatorParams, PositionCoordinator};
use common::core::geometry::{Rect, Viewport};
use common::core::object::{DecorObject, PerObject};
use common::core::placement::{parse_targets, PlacementSpec, SectionTargets};
use common::core::projector::SceneSpan;
use common::core::registry::{RegisterOutcome, RegistryError};
use common::core::sections::{preset_targets, HERO};
use common::{approx, MovableAnchor, DESKTOP};

fn hero_targets() -> SectionTargets {
    PerObject {
        pencil: PlacementSpec::new(0.0, -50.0, 1.0, 3.0),
        eraser: PlacementSpec::hidden(),
        sharpener: PlacementSpec::hidden(),
    }
}

fn full_screen() -> MovableAnchor {
    MovableAnchor::new(Rect::new(0.0, 0.0, 1280.0, 800.0))
}

#[test]
fn hero_scenario_projects_then_hides_after_unregister() {
    let mut c = PositionCoordinator::default();
    c.register(HERO, full_screen(), hero_targets()).unwrap();
    assert!(c.resolve(&DESKTOP));
    assert_eq!(c.active_component(), Some(HERO));

    let positions = c.current_positions(&DESKTOP);
    let pencil = positions.pencil;
    assert!(pencil.visible);
    assert!(approx(pencil.position.x, 0.0));
    // 50 px above center of an 800 px viewport: 0.125 of the vertical span
    assert!(approx(pencil.position.y, 0.125 * SCENE_SPAN_Y));
    assert_eq!(pencil.position.z, 1.0);
    assert_eq!(pencil.scale, 3.0);
    assert!(!positions.eraser.visible);
    assert!(!positions.sharpener.visible);

    assert!(c.unregister(HERO));
    assert_eq!(c.active_component(), None);
    let positions = c.current_positions(&DESKTOP);
    assert!(positions.iter().all(|(_, p)| !p.visible));
}

#[test]
fn nothing_registered_means_all_hidden() {
    let mut c: PositionCoordinator<MovableAnchor> = PositionCoordinator::default();
    assert!(!c.resolve(&DESKTOP));
    assert_eq!(c.active_component(), None);
    let positions = c.current_positions(&DESKTOP);
    for object in DecorObject::ALL {
        assert!(!positions[object].visible);
    }
}

#[test]
fn registration_waits_for_the_next_resolve() {
    let mut c = PositionCoordinator::default();
    let outcome = c.register(HERO, full_screen(), hero_targets()).unwrap();
    assert_eq!(outcome, RegisterOutcome::Inserted);
    assert_eq!(c.active_component(), None);
    assert!(!c.current_positions(&DESKTOP).pencil.visible);

    assert!(c.resolve(&DESKTOP));
    assert!(!c.resolve(&DESKTOP), "unchanged geometry keeps the active section");
}

#[test]
fn unregistering_another_section_keeps_active() {
    let mut c = PositionCoordinator::default();
    c.register(HERO, full_screen(), hero_targets()).unwrap();
    let below = MovableAnchor::new(Rect::new(0.0, 900.0, 1280.0, 800.0));
    c.register("featured-courses", below, hero_targets()).unwrap();
    c.resolve(&DESKTOP);
    assert!(c.unregister("featured-courses"));
    assert!(!c.unregister("featured-courses"));
    assert_eq!(c.active_component(), Some(HERO));
}

#[test]
fn positions_track_live_geometry_between_resolves() {
    let mut c = PositionCoordinator::default();
    let hero = full_screen();
    c.register(HERO, hero.clone(), hero_targets()).unwrap();
    c.resolve(&DESKTOP);
    let before = c.current_positions(&DESKTOP).pencil.position;

    hero.scroll_by(100.0);
    let vp = Viewport::new(1280.0, 800.0, 100.0);
    let after = c.current_positions(&vp).pencil.position;
    assert!(approx(after.y - before.y, 2.0 * 100.0 / 800.0 * SCENE_SPAN_Y));
    assert!(approx(after.x, before.x));
}

#[test]
fn scrolling_hands_over_to_the_next_section() {
    let mut c = PositionCoordinator::default();
    let hero = full_screen();
    let courses = MovableAnchor::new(Rect::new(0.0, 800.0, 1280.0, 800.0));
    c.register(HERO, hero.clone(), hero_targets()).unwrap();
    c.register("featured-courses", courses.clone(), hero_targets()).unwrap();
    c.resolve(&DESKTOP);
    assert_eq!(c.active_component(), Some(HERO));

    let mut handovers = 0;
    for step in 1..=16 {
        hero.scroll_by(50.0);
        courses.scroll_by(50.0);
        if c.resolve(&Viewport::new(1280.0, 800.0, step as f32 * 50.0)) {
            handovers += 1;
        }
    }
    assert_eq!(handovers, 1);
    assert_eq!(c.active_component(), Some("featured-courses"));
}

#[test]
fn detached_active_section_hides_then_returns_when_reattached() {
    let mut c = PositionCoordinator::default();
    let hero = full_screen();
    c.register(HERO, hero.clone(), hero_targets()).unwrap();
    c.resolve(&DESKTOP);

    hero.detach();
    // geometry is gone even before the next pass
    assert!(!c.current_positions(&DESKTOP).pencil.visible);
    assert!(c.resolve(&DESKTOP));
    assert_eq!(c.active_component(), None);
    assert!(c.registry().contains(HERO));

    hero.attach();
    assert!(c.resolve(&DESKTOP));
    assert_eq!(c.active_component(), Some(HERO));
    assert!(c.current_positions(&DESKTOP).pencil.visible);
}

#[test]
fn section_registered_before_insertion_becomes_active_once_attached() {
    let mut c = PositionCoordinator::default();
    let hero = full_screen();
    hero.detach();
    c.register(HERO, hero.clone(), hero_targets()).unwrap();
    assert!(!c.resolve(&DESKTOP));
    assert_eq!(c.active_component(), None);

    hero.attach();
    c.resolve(&DESKTOP);
    assert_eq!(c.active_component(), Some(HERO));
    assert_eq!(c.registry().len(), 1);
    assert!(c.unregister(HERO));
}

#[test]
fn re_registration_applies_new_targets() {
    let mut c = PositionCoordinator::default();
    c.register(HERO, full_screen(), hero_targets()).unwrap();
    c.resolve(&DESKTOP);

    let moved = PerObject::splat(PlacementSpec::new(320.0, 0.0, 0.0, 1.0));
    let outcome = c.register(HERO, full_screen(), moved).unwrap();
    assert_eq!(outcome, RegisterOutcome::Replaced);
    let positions = c.current_positions(&DESKTOP);
    assert!(positions.eraser.visible);
    assert!(approx(positions.eraser.position.x, 0.5 * SCENE_SPAN_X));
}

#[test]
fn invalid_targets_leave_previous_registration_in_place() {
    let mut c = PositionCoordinator::default();
    c.register(HERO, full_screen(), hero_targets()).unwrap();
    let mut bad = hero_targets();
    bad.pencil.scale = -1.0;
    assert!(c.register(HERO, full_screen(), bad).is_err());
    assert_eq!(c.registry().get(HERO).map(|s| s.targets.pencil.scale), Some(3.0));
}

#[test]
fn custom_params_change_band_and_span() {
    let params = CoordinatorParams {
        span: SceneSpan { x: 1.0, y: 1.0 },
        ..CoordinatorParams::default()
    };
    let mut c = PositionCoordinator::new(params);
    c.register(HERO, full_screen(), hero_targets()).unwrap();
    c.resolve(&DESKTOP);
    assert!(approx(c.current_positions(&DESKTOP).pencil.position.y, 0.125));
}

#[test]
fn requests_collapse_into_one_resolution_per_frame() {
    let mut c = PositionCoordinator::default();
    let hero = full_screen();
    c.register(HERO, hero.clone(), hero_targets()).unwrap();

    // nothing requested: a frame does no resolution work
    assert!(!c.resolve_pending(&DESKTOP));
    assert_eq!(c.active_component(), None);

    // a scroll burst before the next frame
    for _ in 0..5 {
        c.request_resolve();
    }
    assert_eq!(c.resolve_requests().coalesced(), 4);
    assert!(c.resolve_pending(&DESKTOP));
    assert_eq!(c.active_component(), Some(HERO));
    assert!(!c.resolve_requests().is_pending());

    // the following frame without new events keeps the previous result
    hero.detach();
    assert!(!c.resolve_pending(&DESKTOP));
    assert_eq!(c.active_component(), Some(HERO));
    c.request_resolve();
    assert!(c.resolve_pending(&DESKTOP));
    assert_eq!(c.active_component(), None);
}

#[test]
fn dispose_is_idempotent_and_rejects_later_registrations() {
    let mut c = PositionCoordinator::default();
    c.register(HERO, full_screen(), preset_targets(HERO).unwrap()).unwrap();
    c.resolve(&DESKTOP);
    c.request_resolve();

    assert!(c.dispose());
    assert!(c.is_disposed());
    assert_eq!(c.active_component(), None);
    assert!(c.registry().is_empty());
    assert!(!c.resolve_requests().is_pending());
    assert!(!c.dispose());

    assert_eq!(
        c.register(HERO, full_screen(), hero_targets()),
        Err(RegistryError::Disposed)
    );
    assert!(!c.unregister(HERO));
    c.request_resolve();
    assert!(!c.resolve_pending(&DESKTOP));
    assert!(c.current_positions(&DESKTOP).iter().all(|(_, p)| !p.visible));
}

#[test]
fn positions_serialize_for_page_scripts() {
    let json = r#"{
        "pencil": { "x": 0, "y": -50, "z": 1, "scale": 3 },
        "eraser": { "visible": false },
        "sharpener": { "offsetX": 320, "rotation": [0, 1, 0] }
    }"#;
    let mut c = PositionCoordinator::default();
    c.register(HERO, full_screen(), parse_targets(json).unwrap()).unwrap();
    c.resolve(&DESKTOP);

    let value = serde_json::to_value(c.current_positions(&DESKTOP)).unwrap();
    assert_eq!(value["pencil"]["visible"], true);
    assert_eq!(value["pencil"]["scale"], 3.0);
    assert_eq!(value["pencil"]["position"].as_array().map(Vec::len), Some(3));
    assert_eq!(value["eraser"]["visible"], false);
    assert!(value["pencil"]["rotation"].is_null());
    assert_eq!(value["sharpener"]["rotation"][1], 1.0);
}
