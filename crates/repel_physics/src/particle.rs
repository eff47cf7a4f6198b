use repel_core::{
    MAX_COLOR_CHANNEL, MAX_RADIUS, MIN_COLOR_CHANNEL, MIN_RADIUS, Particle, SimConfig,
};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Generate `count` particles at rest, scattered uniformly over the window.
/// `count` is expected to be clamped already.
pub fn generate_particles(count: u32, config: &SimConfig, rng: &mut impl Rng) -> Vec<Particle> {
    let mut particles = Vec::with_capacity(count as usize);

    for _ in 0..count {
        particles.push(random_particle(config, rng));
    }

    particles
}

/// Deterministic variant of [`generate_particles`]: same seed, same particles
pub fn generate_seeded(count: u32, config: &SimConfig, seed: u64) -> Vec<Particle> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    generate_particles(count, config, &mut rng)
}

fn random_particle(config: &SimConfig, rng: &mut impl Rng) -> Particle {
    let position = [
        rng.gen_range(0.0..=config.width),
        rng.gen_range(0.0..=config.height),
    ];
    let radius = rng.gen_range(MIN_RADIUS..=MAX_RADIUS);
    let color = [
        rng.gen_range(MIN_COLOR_CHANNEL..=MAX_COLOR_CHANNEL),
        rng.gen_range(MIN_COLOR_CHANNEL..=MAX_COLOR_CHANNEL),
        rng.gen_range(MIN_COLOR_CHANNEL..=MAX_COLOR_CHANNEL),
        255,
    ];

    Particle::at_rest(position, radius, color)
}
