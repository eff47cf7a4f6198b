use repel_core::Particle;

/// Reflect a particle off the window edges.
/// Each axis is handled independently, so a corner hit flips both components.
/// Returns true if any wall was hit.
pub fn bounce_walls(p: &mut Particle, bounds: [f32; 2]) -> bool {
    let mut hit = false;

    for axis in 0..2 {
        if p.position[axis] < p.radius {
            p.position[axis] = p.radius;
            p.velocity[axis] = -p.velocity[axis];
            hit = true;
        }
        if p.position[axis] > bounds[axis] - p.radius {
            p.position[axis] = bounds[axis] - p.radius;
            p.velocity[axis] = -p.velocity[axis];
            hit = true;
        }
    }

    hit
}

/// Clamp a particle center back inside the window without touching its velocity.
/// Runs after collision correction, which can push particles through a wall.
pub fn confine(p: &mut Particle, bounds: [f32; 2]) {
    for axis in 0..2 {
        p.position[axis] = p.position[axis].clamp(p.radius, bounds[axis] - p.radius);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BOUNDS: [f32; 2] = [800.0, 600.0];

    #[test]
    fn test_bounce_left_wall() {
        let mut p = Particle::at_rest([1.0, 50.0], 3.0, [255; 4]);
        p.velocity = [-5.0, 2.0];
        assert!(bounce_walls(&mut p, BOUNDS));
        assert_eq!(p.position, [3.0, 50.0]);
        assert_eq!(p.velocity, [5.0, 2.0]);
    }

    #[test]
    fn test_bounce_far_walls() {
        let mut p = Particle::at_rest([799.0, 300.0], 4.0, [255; 4]);
        p.velocity = [7.0, 0.0];
        bounce_walls(&mut p, BOUNDS);
        assert_eq!(p.position[0], 796.0);
        assert_eq!(p.velocity[0], -7.0);

        let mut p = Particle::at_rest([400.0, 605.0], 4.0, [255; 4]);
        p.velocity = [0.0, 3.0];
        bounce_walls(&mut p, BOUNDS);
        assert_eq!(p.position[1], 596.0);
        assert_eq!(p.velocity[1], -3.0);
    }

    #[test]
    fn test_corner_flips_both_axes() {
        let mut p = Particle::at_rest([-1.0, -2.0], 5.0, [255; 4]);
        p.velocity = [-1.0, -1.0];
        bounce_walls(&mut p, BOUNDS);
        assert_eq!(p.position, [5.0, 5.0]);
        assert_eq!(p.velocity, [1.0, 1.0]);
    }

    #[test]
    fn test_inside_is_untouched() {
        let mut p = Particle::at_rest([400.0, 300.0], 5.0, [255; 4]);
        p.velocity = [-1.0, 1.0];
        assert!(!bounce_walls(&mut p, BOUNDS));
        assert_eq!(p.position, [400.0, 300.0]);
        assert_eq!(p.velocity, [-1.0, 1.0]);
    }

    #[test]
    fn test_confine_keeps_velocity() {
        let mut p = Particle::at_rest([-2.0, 610.0], 3.0, [255; 4]);
        p.velocity = [-4.0, 4.0];
        confine(&mut p, BOUNDS);
        assert_eq!(p.position, [3.0, 597.0]);
        assert_eq!(p.velocity, [-4.0, 4.0]);
    }
}
