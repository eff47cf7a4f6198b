use bevy::prelude::*;
use repel_core::{Particle, SimConfig, clamp_particle_count};
use repel_physics::particle::generate_seeded;
use repel_physics::{step, thermodynamics};

/// The particle set of the current run, tracked as a Bevy Resource
#[derive(Resource)]
pub struct ParticleField {
    /// Particle data, index order is stable for the whole run
    pub particles: Vec<Particle>,
    /// Simulation config
    pub config: SimConfig,
    /// Seed the current particle set was generated from
    pub seed: u64,
    /// Frames simulated since the run started
    pub frame: u64,
    /// Overlapping pairs resolved in the last frame
    pub last_contacts: usize,
    /// Incremented when the particle set is replaced (render uses this)
    pub generation: u32,
}

impl ParticleField {
    /// Placeholder with no particles (used while the menu is shown)
    pub fn empty(config: SimConfig) -> Self {
        Self {
            particles: Vec::new(),
            config,
            seed: 0,
            frame: 0,
            last_contacts: 0,
            generation: 0,
        }
    }

    /// Throw away the current set and generate a new one.
    /// `count` is clamped into the supported range.
    pub fn reset(&mut self, count: u32, seed: u64) {
        let count = clamp_particle_count(count as i64);
        self.particles = generate_seeded(count, &self.config, seed);
        self.seed = seed;
        self.frame = 0;
        self.last_contacts = 0;
        self.generation = self.generation.wrapping_add(1);
    }

    /// Start a new run from a fresh random seed. Returns the seed.
    pub fn start_run(&mut self, count: u32) -> u64 {
        let seed = rand::random::<u64>();
        self.reset(count, seed);
        info!(
            "Started run: {} particles, seed {}",
            self.particles.len(),
            seed
        );
        seed
    }

    /// Advance by one frame. `frame_dt` is the raw frame time in seconds;
    /// the slow-motion factor is applied here.
    pub fn tick(&mut self, frame_dt: f32, mouse: Option<[f32; 2]>) {
        let dt = frame_dt * self.config.slow_motion;
        self.last_contacts = step(&mut self.particles, dt, mouse, &self.config);
        self.frame += 1;
    }

    pub fn len(&self) -> usize {
        self.particles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    pub fn mean_speed(&self) -> f64 {
        thermodynamics::mean_speed(&self.particles)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reset_replaces_particles() {
        let mut field = ParticleField::empty(SimConfig::default());
        assert!(field.is_empty());

        field.reset(300, 1);
        assert_eq!(field.len(), 300);
        assert_eq!(field.generation, 1);

        field.reset(50, 2);
        assert_eq!(field.len(), 100);
        assert_eq!(field.seed, 2);
        assert_eq!(field.generation, 2);
    }

    #[test]
    fn test_start_run_clamps_count() {
        let mut field = ParticleField::empty(SimConfig::default());
        let seed = field.start_run(3000);
        assert_eq!(field.len(), 2500);
        assert_eq!(field.seed, seed);
    }

    #[test]
    fn test_tick_applies_slow_motion() {
        let config = SimConfig::default();
        let mut field = ParticleField::empty(config.clone());
        let mut p = Particle::at_rest([400.0, 300.0], 3.0, [255; 4]);
        p.velocity = [10.0, 0.0];
        field.particles.push(p);

        field.tick(0.1, None);

        // dt = 0.05 after slow motion: drag then integrate
        let dt = 0.1 * config.slow_motion;
        let v = 10.0 - 10.0 * config.drag * dt;
        assert!((field.particles[0].velocity[0] - v).abs() < 1e-4);
        assert!((field.particles[0].position[0] - (400.0 + v * dt)).abs() < 1e-4);
        assert_eq!(field.frame, 1);
    }
}
