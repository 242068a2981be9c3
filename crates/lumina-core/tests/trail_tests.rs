// Behavior tests for the gesture trail history and ribbon rendering.

use glam::Vec2;
use lumina_core::events::Gesture;
use lumina_core::frame::{Effect, FrameCx};
use lumina_core::palette::{trail_palette, HandTemperature};
use lumina_core::surface::{DrawList, Prim, Viewport};
use lumina_core::{TrailEffect, TRAIL_MAX_POINTS};

fn make_trail() -> TrailEffect {
    TrailEffect::new(HandTemperature::Cold, 7)
}

fn cx(viewport: Viewport) -> FrameCx<'static> {
    FrameCx {
        frame: 1,
        dt: 1.0 / 60.0,
        now_ms: 0.0,
        viewport,
        pose: None,
    }
}

#[test]
fn history_never_exceeds_bound_and_evicts_oldest() {
    let mut trail = make_trail();
    for i in 0..200 {
        trail.update_target(Vec2::new(i as f32 * 3.0, i as f32 * 2.0));
    }
    assert_eq!(trail.len(), TRAIL_MAX_POINTS);

    let ages: Vec<u32> = trail.samples().map(|s| s.age).collect();
    assert_eq!(ages[0], 0, "newest sample must be age 0");
    assert_eq!(
        *ages.last().unwrap(),
        TRAIL_MAX_POINTS as u32 - 1,
        "the 20 oldest inserts should have been evicted"
    );
    for pair in ages.windows(2) {
        assert_eq!(pair[1], pair[0] + 1, "ages ascend newest to oldest");
    }
}

#[test]
fn ages_increase_by_one_per_update_until_eviction() {
    let mut trail = make_trail();
    for i in 0..10 {
        trail.update_target(Vec2::new(i as f32 * 10.0, 0.0));
    }
    let before: Vec<u32> = trail.samples().map(|s| s.age).collect();
    trail.update_target(Vec2::new(500.0, 0.0));
    let after: Vec<u32> = trail.samples().map(|s| s.age).collect();

    assert_eq!(after[0], 0);
    for (old, new) in before.iter().zip(after.iter().skip(1)) {
        assert_eq!(*new, *old + 1, "each retained sample ages exactly once");
    }
}

#[test]
fn first_sample_has_zero_velocity_and_raw_position() {
    let mut trail = make_trail();
    trail.update_target(Vec2::new(100.0, 200.0));
    let newest = trail.samples().next().unwrap();
    assert_eq!(newest.velocity, 0.0);
    assert_eq!(newest.pos, Vec2::new(100.0, 200.0));
}

#[test]
fn insertion_smooths_toward_raw_target_and_records_velocity() {
    let mut trail = make_trail();
    trail.update_target(Vec2::new(0.0, 0.0));
    trail.update_target(Vec2::new(10.0, 0.0));

    let newest = trail.samples().next().unwrap();
    // one-pole blend at 0.4 from the previous newest sample
    assert!((newest.pos.x - 4.0).abs() < 1e-5);
    assert!((newest.velocity - 10.0).abs() < 1e-5);
}

#[test]
fn gesture_change_recolors_new_samples_only() {
    let mut trail = make_trail();
    trail.update_target(Vec2::new(0.0, 0.0));

    trail.set_gesture(Gesture::Fist);
    trail.update_target(Vec2::new(10.0, 10.0));

    let samples: Vec<_> = trail.samples().collect();
    let fist = trail_palette(HandTemperature::Cold, Gesture::Fist);
    let default = trail_palette(HandTemperature::Cold, Gesture::None);
    assert_eq!(samples[0].palette, fist, "newest sample carries the fist row");
    assert_eq!(
        samples[1].palette, default,
        "history is never retroactively recolored"
    );
}

#[test]
fn drift_is_deterministic_for_identical_input() {
    let mut a = make_trail();
    let mut b = make_trail();
    for i in 0..50 {
        let p = Vec2::new(i as f32 * 7.0, (i as f32 * 0.3).sin() * 40.0 + 100.0);
        a.update_target(p);
        b.update_target(p);
    }
    let pa: Vec<Vec2> = a.samples().map(|s| s.pos).collect();
    let pb: Vec<Vec2> = b.samples().map(|s| s.pos).collect();
    assert_eq!(pa, pb);
}

#[test]
fn render_is_noop_below_four_samples() {
    let mut trail = make_trail();
    let vp = Viewport::new(800.0, 600.0);
    for i in 0..3 {
        trail.update_target(Vec2::new(i as f32 * 20.0, 50.0));
    }
    let mut out = DrawList::new();
    trail.render(&cx(vp), &mut out);
    assert!(out.is_empty());
}

#[test]
fn render_emits_one_strip_per_tier() {
    let mut trail = make_trail();
    let vp = Viewport::new(800.0, 600.0);
    for i in 0..6 {
        trail.update_target(Vec2::new(i as f32 * 50.0, i as f32 * 30.0));
    }
    let mut out = DrawList::new();
    trail.render(&cx(vp), &mut out);

    let strips = out
        .items()
        .iter()
        .filter(|(p, _)| matches!(p, Prim::Strip { .. }))
        .count();
    assert_eq!(strips, 8, "one ribbon strip per gradient tier");
}
