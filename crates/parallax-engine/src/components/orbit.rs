/// Component for bodies that revolve and spin at fixed per-tick rates.
///
/// Revolution rotates the entity's position about the world Y axis through
/// the origin, preserving its distance from the origin exactly. Spin
/// accumulates on the entity's own Y rotation and never touches position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OrbitComponent {
    /// Radians per tick of revolution about the world Y axis.
    pub orbital_speed: f32,
    /// Radians per tick of self-rotation about the body's local Y axis.
    pub spin_speed: f32,
}

impl OrbitComponent {
    pub fn new(orbital_speed: f32, spin_speed: f32) -> Self {
        Self {
            orbital_speed,
            spin_speed,
        }
    }

    /// A body that turns in place without revolving (the sun).
    pub fn spin_only(spin_speed: f32) -> Self {
        Self {
            orbital_speed: 0.0,
            spin_speed,
        }
    }
}
