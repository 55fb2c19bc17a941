use glam::{Quat, Vec3};
use crate::core::scene::Scene;

/// Advance every orbiting entity by one fixed tick.
///
/// Revolution rotates the entity's position about the world Y axis with a
/// unit quaternion, preserving its distance from the origin across any
/// number of ticks. Spin accumulates on the entity's own Y rotation and
/// leaves position alone, so a body at the origin with zero orbital speed
/// (the sun) never drifts.
pub fn step_orbits(scene: &mut Scene) {
    for entity in scene.iter_mut() {
        if !entity.active {
            continue;
        }
        let Some(orbit) = entity.orbit else { continue };
        if orbit.orbital_speed != 0.0 {
            let step = Quat::from_axis_angle(Vec3::Y, orbit.orbital_speed);
            entity.pos = step * entity.pos;
        }
        entity.rotation.y += orbit.spin_speed;
    }
}
