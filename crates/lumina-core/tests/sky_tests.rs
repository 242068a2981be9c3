// Behavior tests for the background field.

use lumina_core::constants::SKY_STAR_COUNT;
use lumina_core::frame::{Effect, FrameCx};
use lumina_core::surface::{BlendMode, Prim, Viewport};
use lumina_core::NightSky;

fn cx(frame: u64, viewport: Viewport) -> FrameCx<'static> {
    FrameCx {
        frame,
        dt: 1.0 / 60.0,
        now_ms: frame as f64 * 1000.0 / 60.0,
        viewport,
        pose: None,
    }
}

#[test]
fn constellation_construction_is_deterministic_per_seed() {
    let vp = Viewport::new(1280.0, 720.0);
    let a = NightSky::new(9, vp);
    let b = NightSky::new(9, vp);
    assert!(!a.constellation_edges().is_empty());
    assert_eq!(a.constellation_edges(), b.constellation_edges());
}

#[test]
fn constellation_edges_reference_distinct_stars() {
    let sky = NightSky::new(11, Viewport::new(1280.0, 720.0));
    for &(a, b) in sky.constellation_edges() {
        assert_ne!(a, b);
        assert!(a < SKY_STAR_COUNT);
        assert!(b < SKY_STAR_COUNT);
    }
}

#[test]
fn render_starts_with_the_sky_gradient() {
    let vp = Viewport::new(1280.0, 720.0);
    let sky = NightSky::new(3, vp);
    let mut out = lumina_core::DrawList::new();
    sky.render(&cx(1, vp), &mut out);

    assert!(!out.is_empty());
    let (first, blend) = &out.items()[0];
    assert!(matches!(first, Prim::VGradient { .. }));
    assert_eq!(*blend, BlendMode::Alpha);
}

#[test]
fn shooting_star_population_stays_bounded() {
    let vp = Viewport::new(1280.0, 720.0);
    let mut sky = NightSky::new(5, vp);
    for frame in 1..=2000 {
        sky.advance(&cx(frame, vp));
        // at most one spawn per frame against a 50-frame lifetime
        assert!(sky.shooting_star_count() <= 50);
    }
}

#[test]
fn long_advance_keeps_rendering_valid_alpha() {
    let vp = Viewport::new(1280.0, 720.0);
    let mut sky = NightSky::new(8, vp);
    for frame in 1..=600 {
        sky.advance(&cx(frame, vp));
    }
    let mut out = lumina_core::DrawList::new();
    sky.render(&cx(600, vp), &mut out);

    for (prim, _) in out.items() {
        let alpha = match prim {
            Prim::Circle { color, .. }
            | Prim::Ring { color, .. }
            | Prim::Line { color, .. }
            | Prim::Polygon { color, .. } => Some(color.w),
            _ => None,
        };
        if let Some(alpha) = alpha {
            assert!(alpha >= 0.0, "alpha must be clamped non-negative");
        }
    }
}
