use repel_core::Particle;

/// Mean particle speed, 0 for an empty set
pub fn mean_speed(particles: &[Particle]) -> f64 {
    if particles.is_empty() {
        return 0.0;
    }

    let total: f64 = particles.iter().map(|p| p.speed() as f64).sum();
    total / particles.len() as f64
}

/// Total kinetic energy with unit mass per particle
pub fn kinetic_energy(particles: &[Particle]) -> f64 {
    particles
        .iter()
        .map(|p| {
            let v2 = p.velocity[0] * p.velocity[0] + p.velocity[1] * p.velocity[1];
            0.5 * v2 as f64
        })
        .sum()
}
