// Behavior tests for the aura, rune and ribbon overlays.

use glam::Vec2;
use lumina_core::frame::{Effect, FrameCx};
use lumina_core::surface::Viewport;
use lumina_core::{AuraEffect, RibbonEffect, RuneEffect};

fn cx() -> FrameCx<'static> {
    FrameCx {
        frame: 1,
        dt: 1.0 / 60.0,
        now_ms: 0.0,
        viewport: Viewport::new(800.0, 600.0),
        pose: None,
    }
}

#[test]
fn rune_scales_in_rotates_and_expires() {
    let mut runes = RuneEffect::new(1);
    runes.spawn(Vec2::new(400.0, 300.0));
    let cx = cx();

    let mut prev_rotation = 0.0;
    let mut prev_scale = 0.0;
    for _ in 0..30 {
        runes.advance(&cx);
        let r = &runes.runes()[0];
        assert!(r.rotation > prev_rotation, "rotation grows monotonically");
        assert!(r.scale >= prev_scale);
        assert!(r.scale <= 1.0, "scale eases toward 1 and caps there");
        prev_rotation = r.rotation;
        prev_scale = r.scale;
    }
    assert!((runes.runes()[0].scale - 1.0).abs() < 1e-5);

    // life 255 at -2 per frame: dead within 128 frames total
    for _ in 0..100 {
        runes.advance(&cx);
    }
    assert!(runes.is_empty());
}

#[test]
fn ribbon_points_are_bounded_fifo() {
    let mut ribbons = RibbonEffect::new(2);
    ribbons.add_ribbon(Vec2::ZERO);
    for i in 0..50 {
        ribbons.update(Vec2::new(i as f32, 0.0));
    }
    assert_eq!(ribbons.len(), 1);
    assert_eq!(ribbons.ribbons()[0].len(), 30, "oldest points drop first");
}

#[test]
fn ribbons_expire_once_life_runs_out() {
    let mut ribbons = RibbonEffect::new(3);
    ribbons.add_ribbon(Vec2::ZERO);
    // life 100 at -0.5 per update
    for i in 0..200 {
        ribbons.update(Vec2::new(i as f32, i as f32));
    }
    assert!(ribbons.is_empty());
}

#[test]
fn update_feeds_every_active_ribbon() {
    let mut ribbons = RibbonEffect::new(4);
    ribbons.add_ribbon(Vec2::ZERO);
    ribbons.add_ribbon(Vec2::new(10.0, 10.0));
    ribbons.update(Vec2::new(5.0, 5.0));
    for r in ribbons.ribbons() {
        assert_eq!(r.len(), 2);
    }
}

#[test]
fn aura_snaps_to_first_target_then_eases() {
    let mut aura = AuraEffect::new(5);
    let cx = cx();

    aura.set_target(Vec2::new(100.0, 100.0));
    assert_eq!(aura.position(), Vec2::new(100.0, 100.0), "first target snaps");

    aura.set_target(Vec2::new(200.0, 100.0));
    aura.advance(&cx);
    let x = aura.position().x;
    assert!((x - 110.0).abs() < 1e-4, "10% of the gap per frame, got {x}");
    assert!(aura.position().y == 100.0);
}

#[test]
fn boost_raises_mote_spawn_rate() {
    let cx = cx();

    let mut calm = AuraEffect::new(6);
    calm.set_target(Vec2::new(400.0, 300.0));
    for _ in 0..10 {
        calm.advance(&cx);
    }

    let mut boosted = AuraEffect::new(6);
    boosted.set_target(Vec2::new(400.0, 300.0));
    boosted.set_boost(true);
    for _ in 0..10 {
        boosted.advance(&cx);
    }

    assert!(boosted.mote_count() > calm.mote_count());
    assert!(boosted.is_boosted());
}

#[test]
fn untracked_aura_spawns_nothing() {
    let mut aura = AuraEffect::new(7);
    let cx = cx();
    for _ in 0..20 {
        aura.advance(&cx);
    }
    assert_eq!(aura.mote_count(), 0);
}
