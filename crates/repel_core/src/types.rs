use bytemuck::{Pod, Zeroable};

/// A single circular particle.
/// Plain-old-data so a particle slice can be compared byte for byte.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct Particle {
    /// Center in window coordinates (origin top-left, y down)
    pub position: [f32; 2],
    pub velocity: [f32; 2],
    /// Always > 0
    pub radius: f32,
    /// RGBA, 8 bits per channel
    pub color: [u8; 4],
}

impl Particle {
    /// A particle at rest
    pub fn at_rest(position: [f32; 2], radius: f32, color: [u8; 4]) -> Self {
        Self {
            position,
            velocity: [0.0, 0.0],
            radius,
            color,
        }
    }

    pub fn speed(&self) -> f32 {
        (self.velocity[0] * self.velocity[0] + self.velocity[1] * self.velocity[1]).sqrt()
    }

    /// Color as normalized [r, g, b, a]
    pub fn color_f32(&self) -> [f32; 4] {
        self.color.map(|c| c as f32 / 255.0)
    }
}
