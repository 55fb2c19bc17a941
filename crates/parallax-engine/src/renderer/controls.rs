use glam::{Vec2, Vec3};
use std::f32::consts::FRAC_PI_2;
use crate::input::queue::InputEvent;
use crate::renderer::camera::Camera3D;

/// Pitch limit keeping the orbit off the poles, where the look-at yaw
/// becomes degenerate.
const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.001;

/// Interactive orbit controls: drag revolves the camera around a fixed
/// target, the wheel moves it closer or further. The controls only touch
/// the camera while an event is in hand, so scroll-driven camera motion
/// between interactions stays in effect; each drag starts by reading the
/// camera's current position, wherever the scroll rig left it.
#[derive(Debug, Clone)]
pub struct OrbitControls {
    /// World-space point the camera revolves around.
    pub target: Vec3,
    /// Radians of orbit per pixel of drag.
    pub rotate_speed: f32,
    /// Fractional distance change per wheel notch.
    pub zoom_step: f32,
    /// Closest the camera may dolly to the target.
    pub min_distance: f32,
    /// Furthest the camera may dolly from the target.
    pub max_distance: f32,
    dragging: bool,
    cursor: Vec2,
    yaw: f32,
    pitch: f32,
    distance: f32,
}

impl OrbitControls {
    pub fn new(target: Vec3) -> Self {
        Self {
            target,
            rotate_speed: 0.005,
            zoom_step: 0.05,
            min_distance: 0.1,
            max_distance: f32::INFINITY,
            dragging: false,
            cursor: Vec2::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            distance: 1.0,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Capture the camera's current position as spherical coordinates
    /// around the target.
    fn sync_from(&mut self, camera: &Camera3D) {
        let offset = camera.position - self.target;
        self.distance = offset.length().max(1e-4);
        self.yaw = offset.x.atan2(offset.z);
        self.pitch = (offset.y / self.distance).clamp(-1.0, 1.0).asin();
    }

    /// Place the camera on the orbit sphere and aim it at the target.
    fn apply_to(&self, camera: &mut Camera3D) {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        camera.position = self.target
            + self.distance * Vec3::new(cos_pitch * sin_yaw, sin_pitch, cos_pitch * cos_yaw);
        camera.look_at(self.target);
    }

    /// Feed one input event. Pointer and wheel events steer the camera;
    /// everything else is ignored.
    pub fn handle(&mut self, camera: &mut Camera3D, event: &InputEvent) {
        match *event {
            InputEvent::PointerDown { x, y } => {
                self.dragging = true;
                self.cursor = Vec2::new(x, y);
                self.sync_from(camera);
            }
            InputEvent::PointerMove { x, y } => {
                if !self.dragging {
                    return;
                }
                let delta = Vec2::new(x, y) - self.cursor;
                self.cursor = Vec2::new(x, y);
                self.yaw -= delta.x * self.rotate_speed;
                self.pitch = (self.pitch + delta.y * self.rotate_speed)
                    .clamp(-PITCH_LIMIT, PITCH_LIMIT);
                self.apply_to(camera);
            }
            InputEvent::PointerUp { .. } => {
                self.dragging = false;
            }
            InputEvent::Wheel { delta } => {
                self.sync_from(camera);
                let factor = if delta > 0.0 {
                    1.0 + self.zoom_step
                } else if delta < 0.0 {
                    1.0 / (1.0 + self.zoom_step)
                } else {
                    return;
                };
                self.distance = (self.distance * factor).clamp(self.min_distance, self.max_distance);
                self.apply_to(camera);
            }
            _ => {}
        }
    }
}
