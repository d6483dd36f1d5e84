// Shared visual tuning constants used by the effects and the web frontend.

// Fading (per-frame, all transient entities)
pub const FADE_PER_FRAME: f32 = 0.02; // opacity lost per frame
pub const FADE_FRAMES: u32 = 50; // frame age at which opacity reaches zero

// Ripple burst
pub const RIPPLE_RING_COUNT: usize = 5;
pub const RIPPLE_RING_SPEED_MIN: f32 = 2.0; // px/frame radius growth
pub const RIPPLE_RING_SPEED_MAX: f32 = 4.0;
pub const RIPPLE_RING_MAX_RADIUS_MIN: f32 = 100.0;
pub const RIPPLE_RING_MAX_RADIUS_MAX: f32 = 200.0;
pub const RIPPLE_RING_WIDTH_MIN: f32 = 2.0;
pub const RIPPLE_RING_WIDTH_MAX: f32 = 4.0;
pub const RIPPLE_PARTICLE_COUNT: usize = 20;
pub const RIPPLE_PARTICLE_SPEED_MIN: f32 = 3.0; // px/frame along the spawn angle
pub const RIPPLE_PARTICLE_SPEED_MAX: f32 = 6.0;
pub const RIPPLE_PARTICLE_GROWTH: f32 = 0.5; // px/frame radius growth

// Star trail
pub const STAR_TRAIL_CAPACITY: usize = 50;
pub const STAR_JITTER: f32 = 10.0; // max offset from the pointer on each axis
pub const STAR_SIZE_MIN: f32 = 2.0;
pub const STAR_SIZE_MAX: f32 = 5.0;
pub const STAR_ROTATION_SPEED_MAX: f32 = 0.05; // rad/frame, either direction
pub const STAR_SPIKES: usize = 5;
pub const STAR_INNER_RATIO: f32 = 0.5; // inner radius as a fraction of size
pub const STAR_GLOW_BLUR: f32 = 10.0;

// Ambient web
pub const WEB_PARTICLE_COUNT: usize = 80;
pub const WEB_VELOCITY_MAX: f32 = 0.25; // px/frame per axis
pub const WEB_SIZE_MIN: f32 = 1.0;
pub const WEB_SIZE_MAX: f32 = 3.0;
pub const WEB_CONNECTION_DISTANCE: f32 = 150.0;
pub const WEB_POINTER_DISTANCE: f32 = 200.0;
pub const WEB_ATTRACTION: f32 = 0.02;
pub const WEB_PAIR_OPACITY: f32 = 0.3;
pub const WEB_PAIR_LINE_WIDTH: f32 = 0.5;
pub const WEB_POINTER_OPACITY: f32 = 0.5;
pub const WEB_POINTER_LINE_WIDTH: f32 = 1.0;

// Theme toggle (milliseconds)
pub const THEME_SWAP_DELAY_MS: u64 = 250;
pub const THEME_OVERLAY_HOLD_MS: u64 = 1500;

// Hero typewriter (milliseconds)
pub const TYPEWRITER_START_DELAY_MS: u64 = 500;
pub const TYPEWRITER_CHAR_INTERVAL_MS: u64 = 100;

// Scroll reveal
pub const REVEAL_STAGGER_STEPS: usize = 5;
pub const REVEAL_THRESHOLD: f64 = 0.1;
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -10% 0px"; // bottom 10% of the viewport does not count

// Persisted keys
pub const THEME_KEY: &str = "theme";
pub const VISITED_KEY: &str = "blogVisited";
