use repel_core::{Particle, SimConfig};

/// Acceleration pushing a particle at `pos` away from the cursor at `mouse`.
/// Falls off linearly from `config.repulsion` at the cursor to zero at
/// `config.influence_radius`. Returns `None` outside the radius, and when the
/// cursor sits exactly on the particle center (no direction to push along).
pub fn mouse_repulsion(pos: [f32; 2], mouse: [f32; 2], config: &SimConfig) -> Option<[f32; 2]> {
    let dx = pos[0] - mouse[0];
    let dy = pos[1] - mouse[1];
    let dist = (dx * dx + dy * dy).sqrt();

    if dist >= config.influence_radius || dist <= 0.0 {
        return None;
    }

    let strength = (config.influence_radius - dist) / config.influence_radius * config.repulsion;
    Some([dx / dist * strength, dy / dist * strength])
}

/// Add the cursor repulsion to the particle velocity, scaled by `dt`
pub fn apply_repulsion(p: &mut Particle, mouse: Option<[f32; 2]>, config: &SimConfig, dt: f32) {
    let Some(mouse) = mouse else { return };
    if let Some(acc) = mouse_repulsion(p.position, mouse, config) {
        p.velocity[0] += acc[0] * dt;
        p.velocity[1] += acc[1] * dt;
    }
}

/// First-order velocity damping: v -= v * drag * dt
pub fn apply_drag(p: &mut Particle, drag: f32, dt: f32) {
    p.velocity[0] -= p.velocity[0] * drag * dt;
    p.velocity[1] -= p.velocity[1] * drag * dt;
}

/// Explicit Euler position update
pub fn integrate(p: &mut Particle, dt: f32) {
    p.position[0] += p.velocity[0] * dt;
    p.position[1] += p.velocity[1] * dt;
}
