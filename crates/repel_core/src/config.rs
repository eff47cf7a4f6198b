use crate::constants::{MAX_PARTICLES, MIN_PARTICLES, WINDOW_HEIGHT, WINDOW_WIDTH};

/// Simulation configuration
#[derive(Debug, Clone, PartialEq)]
pub struct SimConfig {
    /// Multiplier applied to frame time before stepping (0.5 = half speed)
    pub slow_motion: f32,
    /// Peak acceleration applied at the cursor position
    pub repulsion: f32,
    /// Fraction of velocity removed per second
    pub drag: f32,
    /// Distance from the cursor within which particles are pushed away
    pub influence_radius: f32,
    /// Simulation width in pixels, equal to the window width
    pub width: f32,
    /// Simulation height in pixels, equal to the window height
    pub height: f32,
    /// Background music volume (1.0 = unchanged)
    pub music_volume: f32,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            slow_motion: 0.5,
            repulsion: 120.0,
            drag: 1.2,
            influence_radius: 75.0,
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
            music_volume: 1.0,
        }
    }
}

impl SimConfig {
    /// Simulation bounds as [width, height]
    pub fn bounds(&self) -> [f32; 2] {
        [self.width, self.height]
    }
}

/// Clamp a requested particle count into the supported range.
/// Takes a signed value so menu arithmetic can go below zero before clamping.
pub fn clamp_particle_count(requested: i64) -> u32 {
    requested.clamp(MIN_PARTICLES as i64, MAX_PARTICLES as i64) as u32
}
