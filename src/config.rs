// Fixed tuning constants. Everything the animation needs is known at compile
// time; there is no runtime configuration surface.

use std::time::Duration;

/// Canvas size in pixels. The point sets are generated in this coordinate
/// space, so the window is created at exactly this size.
pub const CANVAS_WIDTH: usize = 640;
pub const CANVAS_HEIGHT: usize = 480;

// Canvas center; every generated coordinate carries this offset baked in.
pub const CANVAS_CENTER_X: f32 = CANVAS_WIDTH as f32 / 2.0;
pub const CANVAS_CENTER_Y: f32 = CANVAS_HEIGHT as f32 / 2.0;

/// Scale factor from the unit heart curve to canvas pixels.
pub const HEART_SCALE: f32 = 11.0;
/// The halo samples a slightly larger outline so the glow sits outside the body.
pub const HALO_SCALE: f32 = 11.6;

/// Brush color for every particle, 0x00RRGGBB (#e77c8e).
pub const HEART_COLOR: u32 = 0x00E7_7C8E;

/// Number of precomputed animation frames; playback wraps modulo this.
pub const FRAME_COUNT: usize = 20;

/// One animation step every 160 ms (the heartbeat cadence).
pub const TICK: Duration = Duration::from_millis(160);

/// Outline samples taken on the exact curve at construction time.
pub const OUTLINE_SAMPLES: usize = 2000;
/// Scattered offsets per outline point (edge diffusion).
pub const EDGE_SCATTER_PER_POINT: usize = 3;
/// Interior scatter samples (center diffusion).
pub const CENTER_SAMPLES: usize = 4000;

/// Seed for the generation RNG.
pub const SEED: u64 = 0xE7_7C_8E;
