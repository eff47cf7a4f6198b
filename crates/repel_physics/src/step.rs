use repel_core::{Particle, SimConfig};

use super::bounds::{bounce_walls, confine};
use super::collision::resolve_all_collisions;
use super::forces::{apply_drag, apply_repulsion, integrate};

/// Advance a single particle: cursor repulsion, drag, Euler integration, wall bounce
pub fn step_particle(p: &mut Particle, dt: f32, mouse: Option<[f32; 2]>, config: &SimConfig) {
    apply_repulsion(p, mouse, config, dt);
    apply_drag(p, config.drag, dt);
    integrate(p, dt);
    bounce_walls(p, config.bounds());
}

/// Advance the whole set by one frame.
///
/// `dt` is already scaled by the slow-motion factor. `mouse` is the cursor in
/// window coordinates, `None` when it is outside the window. Every particle is
/// moved first, then all pairs are resolved, then centers are confined to the
/// window again. Returns the number of overlapping pairs found this frame.
pub fn step(
    particles: &mut [Particle],
    dt: f32,
    mouse: Option<[f32; 2]>,
    config: &SimConfig,
) -> usize {
    for p in particles.iter_mut() {
        step_particle(p, dt, mouse, config);
    }

    let contacts = resolve_all_collisions(particles);

    let bounds = config.bounds();
    for p in particles.iter_mut() {
        confine(p, bounds);
    }

    contacts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::particle::generate_seeded;

    #[test]
    fn test_wall_bounce_scenario() {
        let config = SimConfig::default();
        let mut p = Particle::at_rest([2.0, 50.0], 3.0, [255; 4]);
        p.velocity = [-5.0, 0.0];

        step_particle(&mut p, 0.1, None, &config);

        assert_eq!(p.position[0], 3.0);
        assert!(p.velocity[0] > 0.0);
        assert_eq!(p.velocity[1], 0.0);
    }

    #[test]
    fn test_wall_containment_after_steps() {
        let config = SimConfig::default();
        let mut particles = generate_seeded(800, &config, 42);
        let eps = 1e-3;

        for frame in 0..120 {
            // Sweep the cursor across the window to stir particles into walls
            let t = frame as f32 / 120.0;
            let mouse = [t * config.width, config.height * 0.5];
            step(&mut particles, 1.0 / 120.0, Some(mouse), &config);

            for p in &particles {
                assert!(p.position[0] >= p.radius - eps);
                assert!(p.position[0] <= config.width - p.radius + eps);
                assert!(p.position[1] >= p.radius - eps);
                assert!(p.position[1] <= config.height - p.radius + eps);
            }
        }
    }

    #[test]
    fn test_step_is_deterministic() {
        let config = SimConfig::default();
        let initial = generate_seeded(300, &config, 3);
        let mouse = Some([400.0, 300.0]);

        let mut first = initial.clone();
        let mut second = initial.clone();
        for _ in 0..10 {
            step(&mut first, 1.0 / 120.0, mouse, &config);
            step(&mut second, 1.0 / 120.0, mouse, &config);
        }

        let a: &[u8] = bytemuck::cast_slice(&first);
        let b: &[u8] = bytemuck::cast_slice(&second);
        assert_eq!(a, b);
        assert_ne!(first, initial);
    }

    #[test]
    fn test_cursor_pushes_nearby_particle_away() {
        let config = SimConfig::default();
        let mut particles = vec![Particle::at_rest([420.0, 300.0], 3.0, [255; 4])];

        step(&mut particles, 1.0 / 60.0, Some([400.0, 300.0]), &config);

        assert!(particles[0].velocity[0] > 0.0);
        assert!(particles[0].position[0] > 420.0);
    }

    #[test]
    fn test_particles_at_rest_stay_at_rest() {
        let config = SimConfig::default();
        let mut particles = vec![
            Particle::at_rest([100.0, 100.0], 3.0, [255; 4]),
            Particle::at_rest([200.0, 200.0], 3.0, [255; 4]),
        ];
        let before = particles.clone();

        let contacts = step(&mut particles, 1.0 / 60.0, None, &config);

        assert_eq!(contacts, 0);
        assert_eq!(particles, before);
    }
}
