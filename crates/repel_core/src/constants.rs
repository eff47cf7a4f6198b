// Simulation units are window pixels and seconds.

/// Window width in pixels
pub const WINDOW_WIDTH: f32 = 800.0;

/// Window height in pixels
pub const WINDOW_HEIGHT: f32 = 600.0;

pub const WINDOW_TITLE: &str = "Particle Repulsion";

/// Smallest particle count selectable in the menu
pub const MIN_PARTICLES: u32 = 100;

/// Largest particle count selectable in the menu
pub const MAX_PARTICLES: u32 = 2500;

/// Menu increment/decrement step
pub const PARTICLE_COUNT_STEP: u32 = 100;

/// Count shown when the menu first opens
pub const DEFAULT_PARTICLE_COUNT: u32 = 500;

/// Particle radius range (inclusive)
pub const MIN_RADIUS: f32 = 3.0;
pub const MAX_RADIUS: f32 = 6.0;

/// Per-channel RGB range for particle colors (inclusive)
pub const MIN_COLOR_CHANNEL: u8 = 100;
pub const MAX_COLOR_CHANNEL: u8 = 255;

/// Background track, relative to the `assets/` directory
pub const MUSIC_ASSET: &str = "song.ogg";
