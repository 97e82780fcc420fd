//! Splash timing and particle tuning constants.
//!
//! Velocities are expressed in CSS pixels per 60 Hz frame and times in
//! milliseconds, matching the units `SplashEffect::update` integrates in.
// Lifecycle
pub const SPLASH_PHASE_MS: f64 = 600.0; // burst, full opacity
pub const STAIN_PHASE_MS: f64 = 3400.0; // powder sits on the page and fades
pub const SPLASH_LIFETIME_MS: f64 = SPLASH_PHASE_MS + STAIN_PHASE_MS;
pub const FREEZE_AT_MS: f64 = 600.0; // powder "sticks" here

// Fixed simulation step
pub const STEP_MS: f64 = 1000.0 / 60.0;
pub const MAX_STEPS_PER_UPDATE: u32 = 8; // after a stalled tab, drop the backlog

// Stain fade
pub const STAIN_ALPHA: f32 = 0.85; // plateau opacity once the splash settles
pub const STAIN_PLATEAU_FRACTION: f64 = 0.7; // share of the stain phase held at the plateau
pub const ALPHA_EPSILON: f32 = 0.01; // anything at or below is not drawn

// Freeze
pub const FREEZE_HORIZONTAL_DAMP: f32 = 0.2;

// Pool
pub const MAX_SPLASHES: usize = 6;
pub const MAX_SPLASHES_LIMIT: usize = 64; // ceiling for runtime overrides

// Viewport scaling
pub const MOBILE_BREAKPOINT_PX: f32 = 768.0;
pub const MOBILE_COUNT_SCALE: f32 = 0.6;
pub const MOBILE_SPEED_SCALE: f32 = 0.55;
pub const MIN_WIDTH_SCALE: f32 = 0.35; // floor for width/breakpoint on tiny or zero viewports

// Culling
pub const CULL_MARGIN_PX: f32 = 600.0;

// Bloom
pub const BLOOM_MS: f64 = 250.0;
pub const BLOOM_RADIUS: (f32, f32) = (55.0, 95.0);
pub const BLOOM_ALPHA: f32 = 0.6;

// Center cluster
pub const CENTER_COUNT: (usize, usize) = (40, 70);
pub const CENTER_SPREAD: (f32, f32) = (2.0, 22.0); // initial offset radius
pub const CENTER_SPEED: (f32, f32) = (0.2, 1.6);
pub const CENTER_DAMPING: f32 = 0.82;
pub const CENTER_RADIUS: (f32, f32) = (3.0, 9.0);

// Streaks
pub const STREAK_COUNT: (usize, usize) = (8, 14);
pub const STREAK_DOTS: (usize, usize) = (10, 18);
pub const STREAK_REACH: (f32, f32) = (60.0, 170.0);
pub const STREAK_EASE: f32 = 0.14; // per-step share of the remaining extent
pub const STREAK_SAG: (f32, f32) = (0.02, 0.06); // gravity on the streak tip
pub const STREAK_SAG_DRAG: f32 = 0.9;
pub const STREAK_JITTER: f32 = 3.5; // lateral scatter around the streak line
pub const STREAK_DOT_RADIUS: (f32, f32) = (0.8, 3.2);
pub const STREAK_STAGGER_MS: f32 = 90.0; // tip dots appear this much later than root dots

// Grains
pub const GRAIN_COUNT: (usize, usize) = (350, 500);
pub const GRAIN_SPEED: (f32, f32) = (0.5, 14.0);
pub const GRAIN_SPEED_SKEW: i32 = 3;
pub const GRAIN_DRAG: (f32, f32) = (0.86, 0.93);
pub const GRAIN_GRAVITY: (f32, f32) = (0.01, 0.04);
pub const GRAIN_RADIUS: (f32, f32) = (0.6, 2.2);
pub const GRAIN_DELAY_MS: (f32, f32) = (0.0, 80.0);
pub const GRAIN_ALPHA: f32 = 0.9;

// Splatter
pub const SPLATTER_COUNT: (usize, usize) = (80, 140);
pub const SPLATTER_SPEED: (f32, f32) = (4.0, 18.0);
pub const SPLATTER_DRAG: (f32, f32) = (0.88, 0.94);
pub const SPLATTER_GRAVITY: (f32, f32) = (0.04, 0.1);
pub const SPLATTER_RADIUS: (f32, f32) = (1.5, 4.5);
pub const SPLATTER_DELAY_MS: (f32, f32) = (20.0, 140.0);
pub const SPLATTER_ALPHA: f32 = 0.8;

// Fade-in after a particle's activation delay
pub const ACTIVATION_FADE_MS: f32 = 60.0;
