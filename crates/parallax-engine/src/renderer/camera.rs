use bytemuck::{Pod, Zeroable};
use glam::{EulerRot, Mat4, Quat, Vec3};

/// A camera's position and aim, small enough to copy around.
/// Scroll rigs store one as their anchor; controls write one back.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    /// Rotation about the world Y axis, radians.
    pub yaw: f32,
    /// Rotation about the camera-local X axis, radians. Positive looks up.
    pub pitch: f32,
}

/// Perspective camera for 3D rendering.
/// Produces view and projection matrices mapping world space to clip space.
pub struct Camera3D {
    /// Camera position in world space.
    pub position: Vec3,
    /// Rotation about the world Y axis, radians.
    pub yaw: f32,
    /// Rotation about the camera-local X axis, radians. Positive looks up.
    pub pitch: f32,
    /// Vertical field of view in degrees.
    pub fov_y_degrees: f32,
    /// Viewport width over height.
    pub aspect: f32,
    /// Near clip plane distance.
    pub near: f32,
    /// Far clip plane distance.
    pub far: f32,
    /// Viewport size in physical pixels, zero until the first resize.
    pub viewport_width: f32,
    pub viewport_height: f32,
}

/// GPU-side uniform data for the camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    /// World-space eye position, w = 1.
    pub eye: [f32; 4],
}

impl CameraUniform {
    pub const FLOATS: usize = 20;
}

impl Camera3D {
    pub fn new(fov_y_degrees: f32, near: f32, far: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            fov_y_degrees,
            aspect: 16.0 / 9.0,
            near,
            far,
            viewport_width: 0.0,
            viewport_height: 0.0,
        }
    }

    /// Orientation quaternion from yaw and pitch (no roll).
    pub fn orientation(&self) -> Quat {
        Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0)
    }

    /// World-space view direction. Identity pose looks down -Z.
    pub fn forward(&self) -> Vec3 {
        self.orientation() * Vec3::NEG_Z
    }

    /// Build the view matrix (world to camera space).
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.forward(), self.orientation() * Vec3::Y)
    }

    /// Build the perspective projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(
            self.fov_y_degrees.to_radians(),
            self.aspect,
            self.near,
            self.far,
        )
    }

    /// Combined projection * view, the transform shaders consume.
    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            view_proj: self.view_proj().to_cols_array_2d(),
            eye: [self.position.x, self.position.y, self.position.z, 1.0],
        }
    }

    /// Resize the camera viewport (e.g. on window resize).
    pub fn resize(&mut self, viewport_width: f32, viewport_height: f32) {
        self.viewport_width = viewport_width;
        self.viewport_height = viewport_height;
        if viewport_height > 0.0 {
            self.aspect = viewport_width / viewport_height;
        }
    }

    /// Aim the camera at a world-space point, keeping position fixed.
    /// Aiming at the camera's own position leaves the orientation unchanged.
    pub fn look_at(&mut self, target: Vec3) {
        let to_target = target - self.position;
        if to_target.length_squared() < 1e-12 {
            return;
        }
        let dir = to_target.normalize();
        self.pitch = dir.y.clamp(-1.0, 1.0).asin();
        self.yaw = (-dir.x).atan2(-dir.z);
    }

    /// Snapshot of position and aim.
    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.position,
            yaw: self.yaw,
            pitch: self.pitch,
        }
    }

    /// Restore a previously captured pose.
    pub fn set_pose(&mut self, pose: CameraPose) {
        self.position = pose.position;
        self.yaw = pose.yaw;
        self.pitch = pose.pitch;
    }
}

impl Default for Camera3D {
    fn default() -> Self {
        Self::new(60.0, 0.1, 1000.0)
    }
}
