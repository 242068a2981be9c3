// Shared tuning constants used by the effects and the native driver.

// Frame cadence the driver targets; effects are stepped once per tick.
pub const TARGET_FPS: f32 = 60.0;

// Gesture trails
pub const TRAIL_MAX_POINTS: usize = 180; // ~3 seconds of pose history at 60 Hz
pub const TRAIL_SMOOTHING: f32 = 0.4; // one-pole blend toward the raw target
pub const TRAIL_TIER_WIDTHS: [f32; 8] = [80.0, 60.0, 45.0, 30.0, 20.0, 12.0, 6.0, 2.0];
pub const TRAIL_NOISE_SCALE: f32 = 0.002;
pub const TRAIL_TIME_SCALE: f32 = 0.01;
pub const TRAIL_PHASE_STEP: f32 = 0.005;
pub const TRAIL_VELOCITY_CEIL: f32 = 50.0; // px/update where the ribbon is thinnest

// Background field
pub const SKY_STAR_COUNT: usize = 1000;
pub const SKY_GALAXY_COUNT: usize = 2000;
pub const SKY_WARP_COUNT: usize = 200;
pub const SKY_DUST_COUNT: usize = 60;
pub const SKY_DUST_TRAIL: usize = 12; // trailing points kept per mote
pub const SKY_SHOOTING_CHANCE: f32 = 0.01; // Bernoulli spawn per frame
pub const SKY_CONSTELLATION_RADIUS: f32 = 120.0; // px link radius for bright stars
pub const SKY_WARP_SPEED: f32 = 0.004; // depth units per frame
pub const SKY_WARP_NEAR: f32 = 0.05; // respawn threshold

// Overlay effects
pub const AURA_BASE_SIZE: f32 = 100.0;
pub const AURA_FOLLOW: f32 = 0.1; // exponential approach factor per frame
pub const RIBBON_MAX_POINTS: usize = 30;
pub const RUNE_STROKE: f32 = 2.0;

// Compositor
pub const SPARKLE_INTERVAL_MS: f64 = 100.0; // hand sparkle cadence
pub const SPARKLES_PER_HAND: usize = 3;
pub const SPARKLES_PER_BURST: usize = 10;

// Art layer
pub const ART_FADE_STEP: f32 = 5.0 / 255.0; // crossfade opacity per frame
