//! Deep-space background field: static stars, galaxy band, warp starfield,
//! drifting dust, constellation lines, shooting stars and a horizon
//! silhouette. Runs on the frame counter alone; no input events reach it.

use std::collections::VecDeque;
use std::f32::consts::TAU;

use glam::{Vec2, Vec4};
use rand::prelude::*;

use crate::constants::{
    SKY_CONSTELLATION_RADIUS, SKY_DUST_COUNT, SKY_DUST_TRAIL, SKY_GALAXY_COUNT,
    SKY_SHOOTING_CHANCE, SKY_STAR_COUNT, SKY_WARP_COUNT, SKY_WARP_NEAR, SKY_WARP_SPEED,
};
use crate::frame::{Effect, FrameCx};
use crate::noise::ValueNoise;
use crate::palette::rgba8;
use crate::surface::{BlendMode, DrawList, Viewport};

#[derive(Debug, Clone)]
struct Star {
    pos: Vec2,
    size: f32,
    brightness: f32, // base 0-255
    twinkle_speed: f32,
    twinkle_offset: f32,
}

#[derive(Debug, Clone)]
struct GalaxyPoint {
    base: Vec2,
    size: f32,
    color: Vec4,
    orbit_radius: f32,
    orbit_speed: f32,
    orbit_phase: f32,
}

#[derive(Debug, Clone)]
struct WarpStar {
    /// Normalized offset from screen center, roughly [-0.5, 0.5]².
    offset: Vec2,
    /// Depth toward the near plane; 1.0 is farthest.
    depth: f32,
}

#[derive(Debug, Clone)]
struct DustMote {
    pos: Vec2,
    vel: Vec2,
    /// Recent positions, newest first; cleared on edge wrap so the trail
    /// never spans the screen.
    trail: VecDeque<Vec2>,
}

#[derive(Debug, Clone)]
struct ShootingStar {
    pos: Vec2,
    vel: Vec2,
    life: f32,
}

pub struct NightSky {
    rng: StdRng,
    noise: ValueNoise,
    stars: Vec<Star>,
    galaxy: Vec<GalaxyPoint>,
    warp: Vec<WarpStar>,
    dust: Vec<DustMote>,
    shooting: Vec<ShootingStar>,
    /// Star index pairs, resolved once at init.
    constellations: Vec<(usize, usize)>,
    /// Prebuilt opaque foreground, replayed every frame.
    horizon: DrawList,
}

/// Box-Muller, since the galaxy band spread is Gaussian.
fn gaussian(rng: &mut StdRng, mean: f32, sd: f32) -> f32 {
    let u1 = rng.gen::<f32>().max(f32::MIN_POSITIVE);
    let u2 = rng.gen::<f32>();
    mean + sd * (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}

impl NightSky {
    pub fn new(seed: u64, viewport: Viewport) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let noise = ValueNoise::new(seed);
        let (w, h) = (viewport.width, viewport.height);

        let stars: Vec<Star> = (0..SKY_STAR_COUNT)
            .map(|_| Star {
                pos: Vec2::new(rng.gen::<f32>() * w, rng.gen::<f32>() * h),
                size: rng.gen_range(0.5..3.0),
                brightness: rng.gen_range(100.0..255.0),
                twinkle_speed: rng.gen_range(0.01..0.05),
                twinkle_offset: rng.gen_range(0.0..100.0),
            })
            .collect();

        let galaxy = (0..SKY_GALAXY_COUNT)
            .map(|_| {
                // Diagonal band from bottom-left to top-right.
                let t = rng.gen::<f32>();
                let spread = gaussian(&mut rng, 0.0, 0.12);
                let x = (-0.2 * w) * (1.0 - t) + (1.2 * w) * t + spread * w * 0.5;
                let y = (1.2 * h) * (1.0 - t) + (-0.2 * h) * t + spread * h * 0.5;

                let family = rng.gen::<f32>();
                let color = if family < 0.4 {
                    // deep blue/purple
                    rgba8(
                        rng.gen_range(10..40),
                        rng.gen_range(10..60),
                        rng.gen_range(80..150),
                        rng.gen_range(20..50),
                    )
                } else if family < 0.7 {
                    // pink/magenta highlights
                    rgba8(
                        rng.gen_range(100..180),
                        rng.gen_range(20..60),
                        rng.gen_range(100..180),
                        rng.gen_range(10..30),
                    )
                } else {
                    // bright blue-white dust
                    rgba8(200, 200, 255, rng.gen_range(30..80))
                };

                GalaxyPoint {
                    base: Vec2::new(x, y),
                    size: rng.gen_range(1.0..5.0),
                    color,
                    orbit_radius: rng.gen_range(1.0..4.0),
                    orbit_speed: rng.gen_range(0.002..0.01),
                    orbit_phase: rng.gen_range(0.0..TAU),
                }
            })
            .collect();

        let warp = (0..SKY_WARP_COUNT)
            .map(|_| WarpStar {
                offset: Vec2::new(rng.gen::<f32>() - 0.5, rng.gen::<f32>() - 0.5),
                depth: rng.gen_range(SKY_WARP_NEAR..1.0),
            })
            .collect();

        let dust = (0..SKY_DUST_COUNT)
            .map(|_| {
                let angle = rng.gen::<f32>() * TAU;
                DustMote {
                    pos: Vec2::new(rng.gen::<f32>() * w, rng.gen::<f32>() * h),
                    vel: Vec2::from_angle(angle) * rng.gen_range(0.2..0.6),
                    trail: VecDeque::with_capacity(SKY_DUST_TRAIL),
                }
            })
            .collect();

        let constellations = Self::link_constellations(&stars, &mut rng);
        let horizon = Self::build_horizon(viewport, &noise, &mut rng);

        Self {
            rng,
            noise,
            stars,
            galaxy,
            warp,
            dust,
            shooting: Vec::new(),
            constellations,
            horizon,
        }
    }

    /// Connect each kept bright star to its nearest bright neighbor within a
    /// fixed radius. One O(n²) pass over the bright subset, at init only.
    fn link_constellations(stars: &[Star], rng: &mut StdRng) -> Vec<(usize, usize)> {
        let bright: Vec<usize> = stars
            .iter()
            .enumerate()
            .filter(|(_, s)| s.brightness > 200.0 && s.size > 2.0)
            .map(|(i, _)| i)
            .collect();

        let mut edges = Vec::new();
        for &a in &bright {
            if rng.gen::<f32>() > 0.4 {
                continue;
            }
            let mut nearest = None;
            let mut min_dist = SKY_CONSTELLATION_RADIUS;
            for &b in &bright {
                if a == b {
                    continue;
                }
                let d = stars[a].pos.distance(stars[b].pos);
                if d < min_dist {
                    min_dist = d;
                    nearest = Some(b);
                }
            }
            if let Some(b) = nearest {
                edges.push((a, b));
            }
        }
        edges
    }

    /// Rolling noise hills plus tree silhouettes, drawn once into a fragment.
    fn build_horizon(viewport: Viewport, noise: &ValueNoise, rng: &mut StdRng) -> DrawList {
        let (w, h) = (viewport.width, viewport.height);
        let ground_y = |x: f32| h - 50.0 - noise.sample2(x * 0.005, 0.0) * 100.0;

        let mut fragment = DrawList::new();
        let mut ground = vec![Vec2::new(0.0, h)];
        let mut x = 0.0;
        while x <= w {
            ground.push(Vec2::new(x, ground_y(x)));
            x += 10.0;
        }
        ground.push(Vec2::new(w, h));
        fragment.polygon(ground, rgba8(5, 5, 10, 255), BlendMode::Alpha);

        for _ in 0..40 {
            let x = rng.gen::<f32>() * w;
            let gy = ground_y(x);
            let tree_h = rng.gen_range(50.0..150.0);
            let tree_w = tree_h * 0.4;
            fragment.polygon(
                vec![
                    Vec2::new(x, gy - tree_h),
                    Vec2::new(x - tree_w * 0.5, gy + 10.0),
                    Vec2::new(x + tree_w * 0.5, gy + 10.0),
                ],
                rgba8(2, 2, 5, 255),
                BlendMode::Alpha,
            );
        }
        fragment
    }

    fn spawn_shooting_star(&mut self, viewport: Viewport) {
        let (start_x, start_y) = if self.rng.gen::<f32>() < 0.5 {
            (self.rng.gen::<f32>() * viewport.width, -50.0)
        } else {
            (-50.0, self.rng.gen::<f32>() * viewport.height * 0.5)
        };
        self.shooting.push(ShootingStar {
            pos: Vec2::new(start_x, start_y),
            vel: Vec2::new(self.rng.gen_range(10.0..20.0), self.rng.gen_range(5.0..15.0)),
            life: 1.0,
        });
    }

    /// Constellation edges as star index pairs; fixed after construction.
    pub fn constellation_edges(&self) -> &[(usize, usize)] {
        &self.constellations
    }

    pub fn shooting_star_count(&self) -> usize {
        self.shooting.len()
    }
}

impl Effect for NightSky {
    fn advance(&mut self, cx: &FrameCx) {
        let vp = cx.viewport;

        if self.rng.gen::<f32>() < SKY_SHOOTING_CHANCE {
            self.spawn_shooting_star(vp);
        }
        for s in &mut self.shooting {
            s.pos += s.vel;
            s.life -= 0.02;
        }
        self.shooting
            .retain(|s| s.life > 0.0 && s.pos.x <= vp.width + 200.0 && s.pos.y <= vp.height + 200.0);

        for w in &mut self.warp {
            w.depth -= SKY_WARP_SPEED;
            if w.depth <= SKY_WARP_NEAR {
                w.offset = Vec2::new(self.rng.gen::<f32>() - 0.5, self.rng.gen::<f32>() - 0.5);
                w.depth = 1.0;
            }
        }

        let t = cx.frame as f32 * 0.005;
        for mote in &mut self.dust {
            let steer = (self
                .noise
                .sample3(mote.pos.x * 0.002, mote.pos.y * 0.002, t)
                - 0.5)
                * 0.2;
            mote.vel = Vec2::from_angle(steer).rotate(mote.vel);
            mote.pos += mote.vel;

            let mut wrapped = false;
            if mote.pos.x < 0.0 {
                mote.pos.x += vp.width;
                wrapped = true;
            } else if mote.pos.x > vp.width {
                mote.pos.x -= vp.width;
                wrapped = true;
            }
            if mote.pos.y < 0.0 {
                mote.pos.y += vp.height;
                wrapped = true;
            } else if mote.pos.y > vp.height {
                mote.pos.y -= vp.height;
                wrapped = true;
            }
            if wrapped {
                mote.trail.clear();
            }
            mote.trail.push_front(mote.pos);
            if mote.trail.len() > SKY_DUST_TRAIL {
                mote.trail.pop_back();
            }
        }

        for g in &mut self.galaxy {
            g.orbit_phase += g.orbit_speed;
        }
    }

    fn render(&self, cx: &FrameCx, out: &mut DrawList) {
        let vp = cx.viewport;
        let frame = cx.frame as f32;

        // 1. gradient sky
        out.gradient(vec![
            (0.0, rgba8(5, 11, 20, 255)),
            (0.5, rgba8(15, 27, 51, 255)),
            (1.0, rgba8(0, 0, 0, 255)),
        ]);

        // 2. galaxy band, additive
        for g in &self.galaxy {
            let pos = g.base + Vec2::from_angle(g.orbit_phase) * g.orbit_radius;
            out.circle(pos, g.size * 0.5, g.color, BlendMode::Additive);
        }

        // 3. warp starfield; size and alpha derive from depth, so nearer
        // stars draw brighter without an explicit sort
        let center = vp.center();
        let scale = vp.width.min(vp.height) * 0.5;
        for w in &self.warp {
            let pos = center + w.offset * (scale / w.depth);
            if pos.x < -50.0 || pos.x > vp.width + 50.0 || pos.y < -50.0 || pos.y > vp.height + 50.0
            {
                continue;
            }
            let near = 1.0 - w.depth;
            let alpha = (0.1 + near * 0.8).min(1.0);
            out.circle(
                pos,
                0.5 + near * 2.5,
                Vec4::new(1.0, 1.0, 1.0, alpha),
                BlendMode::Additive,
            );
        }

        // 4. static stars with phase-shifted twinkle
        for s in &self.stars {
            let twinkle = (frame * s.twinkle_speed + s.twinkle_offset).sin();
            let brightness = s.brightness * (0.75 + 0.25 * twinkle);
            out.circle(
                s.pos,
                s.size * 0.5,
                Vec4::new(1.0, 1.0, 1.0, brightness / 255.0),
                BlendMode::Alpha,
            );
        }

        // 5. dust with fading trails
        for mote in &self.dust {
            let n = mote.trail.len().max(1) as f32;
            for (i, pair) in mote.trail.iter().zip(mote.trail.iter().skip(1)).enumerate() {
                let fade = 1.0 - i as f32 / n;
                let color = Vec4::new(
                    180.0 / 255.0,
                    200.0 / 255.0,
                    1.0,
                    50.0 / 255.0 * fade,
                );
                out.line(*pair.0, *pair.1, 1.0, color, BlendMode::Additive);
            }
            out.circle(mote.pos, 1.2, rgba8(200, 215, 255, 90), BlendMode::Additive);
        }

        // 6. constellation lines
        for &(a, b) in &self.constellations {
            out.line(
                self.stars[a].pos,
                self.stars[b].pos,
                1.0,
                rgba8(255, 255, 255, 40),
                BlendMode::Alpha,
            );
        }

        // 7. shooting stars: head glow, bright short tail, faint long tail
        for s in &self.shooting {
            let life = s.life.max(0.0);
            out.circle(
                s.pos,
                2.5,
                Vec4::new(1.0, 1.0, 1.0, life),
                BlendMode::Additive,
            );
            out.line(
                s.pos,
                s.pos - s.vel * 3.0,
                2.0,
                Vec4::new(1.0, 1.0, 1.0, life),
                BlendMode::Alpha,
            );
            out.line(
                s.pos,
                s.pos - s.vel * 10.0,
                1.0,
                Vec4::new(1.0, 1.0, 1.0, life * 100.0 / 255.0),
                BlendMode::Alpha,
            );
        }

        // 8. horizon foreground, the one opaque layer above the gradient
        out.extend_from(&self.horizon);
    }
}
