/// Celestial body data: sizes, distances, and per-tick angular speeds.
///
/// All values are hand-tuned visual constants, not derived from physical
/// law. Radii and distances are exaggerated for readability.

use glam::Vec3;

/// Body index constants.
pub const SUN: usize = 0;
pub const MERCURY: usize = 1;
pub const VENUS: usize = 2;
pub const EARTH: usize = 3;
pub const MARS: usize = 4;
pub const JUPITER: usize = 5;
pub const SATURN: usize = 6;
pub const URANUS: usize = 7;
pub const NEPTUNE: usize = 8;
pub const BODY_COUNT: usize = 9;

// ── Sun ──────────────────────────────────────────────────────────────

/// Warm tint under the sun's emissive texture.
pub const SUN_COLOR: (f32, f32, f32) = (1.0, 0.67, 0.0);
pub const SUN_EMISSIVE: f32 = 1.5;

// ── Bodies ───────────────────────────────────────────────────────────

/// One registry row: everything needed to build a body.
pub struct BodyDescriptor {
    /// Doubles as the scene tag and the manifest texture name.
    pub name: &'static str,
    pub radius: f32,
    pub segments_w: u32,
    pub segments_h: u32,
    /// Manifest texture name; `None` renders the fallback color.
    pub texture: Option<&'static str>,
    /// Initial offset from the sun along +Z.
    pub distance: f32,
    /// Radians per tick of revolution about the world Y axis.
    pub orbital_speed: f32,
    /// Radians per tick of self-rotation.
    pub spin_speed: f32,
    /// Surface color while the texture is missing; tint otherwise.
    pub fallback_color: (f32, f32, f32),
    /// HDR glow multiplier (only the sun glows).
    pub emissive: f32,
}

/// The ordered body registry (indexed by the body constants).
pub fn bodies() -> [BodyDescriptor; BODY_COUNT] {
    [
        BodyDescriptor {
            name: "sun", radius: 6.95, segments_w: 32, segments_h: 32,
            texture: Some("sun"), distance: 0.0,
            orbital_speed: 0.0, spin_speed: 0.004,
            fallback_color: SUN_COLOR, emissive: SUN_EMISSIVE,
        },
        BodyDescriptor {
            name: "mercury", radius: 0.2, segments_w: 32, segments_h: 16,
            texture: Some("mercury"), distance: 13.0,
            orbital_speed: 0.02076, spin_speed: 0.004,
            fallback_color: (0.60, 0.55, 0.50), emissive: 0.0,
        },
        BodyDescriptor {
            name: "venus", radius: 0.6, segments_w: 32, segments_h: 16,
            texture: Some("venus"), distance: 21.8,
            orbital_speed: 0.00813, spin_speed: 0.07,
            fallback_color: (0.90, 0.75, 0.40), emissive: 0.0,
        },
        // Earth deliberately ships without self-rotation.
        BodyDescriptor {
            name: "earth", radius: 0.6, segments_w: 32, segments_h: 32,
            texture: Some("earth"), distance: 29.0,
            orbital_speed: 0.005, spin_speed: 0.0,
            fallback_color: (0.20, 0.40, 0.80), emissive: 0.0,
        },
        BodyDescriptor {
            name: "mars", radius: 0.3, segments_w: 32, segments_h: 32,
            texture: Some("mars"), distance: 46.0,
            orbital_speed: 0.00266, spin_speed: 0.075,
            fallback_color: (0.80, 0.30, 0.15), emissive: 0.0,
        },
        BodyDescriptor {
            name: "jupiter", radius: 3.0, segments_w: 32, segments_h: 32,
            texture: Some("jupiter"), distance: 148.0,
            orbital_speed: 0.00042, spin_speed: 0.075,
            fallback_color: (0.80, 0.70, 0.50), emissive: 0.0,
        },
        BodyDescriptor {
            name: "saturn", radius: 2.0, segments_w: 32, segments_h: 32,
            texture: Some("saturn"), distance: 294.0,
            orbital_speed: 0.00006, spin_speed: 0.075,
            fallback_color: (0.85, 0.75, 0.50), emissive: 0.0,
        },
        BodyDescriptor {
            name: "uranus", radius: 1.5, segments_w: 32, segments_h: 32,
            texture: Some("uranus"), distance: 589.0,
            orbital_speed: 0.00003, spin_speed: 0.075,
            fallback_color: (0.50, 0.75, 0.85), emissive: 0.0,
        },
        BodyDescriptor {
            name: "neptune", radius: 1.3, segments_w: 32, segments_h: 32,
            texture: Some("neptune"), distance: 895.0,
            orbital_speed: 0.005, spin_speed: 0.075,
            fallback_color: (0.25, 0.35, 0.80), emissive: 0.0,
        },
    ]
}

// ── Saturn's ring ────────────────────────────────────────────────────

pub const RING_INNER_RADIUS: f32 = 2.2;
pub const RING_OUTER_RADIUS: f32 = 3.8;
pub const RING_SEGMENTS: u32 = 32;
/// Fixed tilt about X laying the annulus into the orbital plane.
pub const RING_TILT_X: f32 = -std::f32::consts::FRAC_PI_2;
pub const RING_TEXTURE: &str = "saturn-rings";
pub const RING_COLOR: (f32, f32, f32) = (0.80, 0.70, 0.50);

// ── Star field ───────────────────────────────────────────────────────

pub const STAR_COUNT: usize = 400;
/// Half-extent of the cube stars scatter in.
pub const STAR_SPREAD: f32 = 150.0;
pub const STAR_RADIUS: f32 = 0.1;
pub const STAR_SEGMENTS: u32 = 24;

/// Deterministic hash for star placement (no external rand crate).
pub fn star_hash(seed: u32) -> u32 {
    let mut n = seed;
    n = n.wrapping_mul(2654435761);
    n ^= n >> 16;
    n = n.wrapping_mul(2246822519);
    n ^= n >> 13;
    n
}

/// Scatter `STAR_COUNT` positions uniformly in `[-STAR_SPREAD, STAR_SPREAD]^3`.
/// Seeded, so every bootstrap lays out the same sky.
pub fn star_positions() -> Vec<Vec3> {
    let frac = |h: u32| (h as f32) / (u32::MAX as f32);

    let mut positions = Vec::with_capacity(STAR_COUNT);
    for i in 0..STAR_COUNT {
        let x = (frac(star_hash(i as u32 * 7 + 31)) - 0.5) * 2.0 * STAR_SPREAD;
        let y = (frac(star_hash(i as u32 * 13 + 97)) - 0.5) * 2.0 * STAR_SPREAD;
        let z = (frac(star_hash(i as u32 * 19 + 151)) - 0.5) * 2.0 * STAR_SPREAD;
        positions.push(Vec3::new(x, y, z));
    }
    positions
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn body_count_matches() {
        assert_eq!(bodies().len(), BODY_COUNT);
        assert_eq!(bodies()[SUN].name, "sun");
        assert_eq!(bodies()[SATURN].name, "saturn");
        assert_eq!(bodies()[NEPTUNE].name, "neptune");
    }

    #[test]
    fn sun_holds_the_origin() {
        let sun = &bodies()[SUN];
        assert_eq!(sun.distance, 0.0);
        assert_eq!(sun.orbital_speed, 0.0);
        assert!(sun.spin_speed > 0.0);
        assert!(sun.emissive > 0.0);
    }

    #[test]
    fn mercury_is_the_fastest_orbiter() {
        let table = bodies();
        for body in &table {
            assert!(
                body.orbital_speed <= table[MERCURY].orbital_speed,
                "{} orbits faster than Mercury",
                body.name
            );
        }
    }

    #[test]
    fn distances_increase_outward() {
        let table = bodies();
        for pair in table.windows(2) {
            assert!(
                pair[0].distance < pair[1].distance,
                "{} is not inside {}",
                pair[0].name,
                pair[1].name
            );
        }
    }

    #[test]
    fn earth_has_no_spin() {
        // Pins the intentional zero in the table.
        assert_eq!(bodies()[EARTH].spin_speed, 0.0);
    }

    #[test]
    fn star_positions_fill_the_cube() {
        let stars = star_positions();
        assert_eq!(stars.len(), STAR_COUNT);
        for star in &stars {
            assert!(star.x.abs() <= STAR_SPREAD);
            assert!(star.y.abs() <= STAR_SPREAD);
            assert!(star.z.abs() <= STAR_SPREAD);
        }
        // not all collapsed into one octant
        assert!(stars.iter().any(|s| s.x < 0.0));
        assert!(stars.iter().any(|s| s.x > 0.0));
    }

    #[test]
    fn star_hash_deterministic() {
        assert_eq!(star_hash(42), star_hash(42));
        assert_ne!(star_hash(0), star_hash(1));
    }

    #[test]
    fn star_layout_is_reproducible() {
        assert_eq!(star_positions(), star_positions());
    }
}
