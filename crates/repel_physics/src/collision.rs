use repel_core::Particle;

/// Resolve contact between two particles.
///
/// Overlapping particles are pushed apart by half the overlap each along the
/// contact normal (equal mass). If they are still approaching, the relative
/// velocity along the normal is exchanged. Coincident centers are skipped.
/// Returns true if the pair overlapped.
pub fn resolve_collision(a: &mut Particle, b: &mut Particle) -> bool {
    let dx = b.position[0] - a.position[0];
    let dy = b.position[1] - a.position[1];
    let dist = (dx * dx + dy * dy).sqrt();
    let min_dist = a.radius + b.radius;

    if dist >= min_dist || dist <= 0.0 {
        return false;
    }

    let normal = [dx / dist, dy / dist];

    let overlap = 0.5 * (min_dist - dist);
    a.position[0] -= normal[0] * overlap;
    a.position[1] -= normal[1] * overlap;
    b.position[0] += normal[0] * overlap;
    b.position[1] += normal[1] * overlap;

    let rel_vel = [b.velocity[0] - a.velocity[0], b.velocity[1] - a.velocity[1]];
    let vel_along_normal = rel_vel[0] * normal[0] + rel_vel[1] * normal[1];

    // Already separating
    if vel_along_normal > 0.0 {
        return true;
    }

    let impulse = [normal[0] * vel_along_normal, normal[1] * vel_along_normal];
    a.velocity[0] += impulse[0];
    a.velocity[1] += impulse[1];
    b.velocity[0] -= impulse[0];
    b.velocity[1] -= impulse[1];

    true
}

/// Brute-force pass over every unordered pair (i, j), i < j, in index order.
/// Pairs are resolved sequentially: later pairs see positions corrected by
/// earlier ones. Returns the number of overlapping pairs.
pub fn resolve_all_collisions(particles: &mut [Particle]) -> usize {
    let mut contacts = 0;

    for i in 0..particles.len() {
        let (head, tail) = particles.split_at_mut(i + 1);
        let a = &mut head[i];
        for b in tail.iter_mut() {
            if resolve_collision(a, b) {
                contacts += 1;
            }
        }
    }

    contacts
}
