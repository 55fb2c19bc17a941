use crate::renderer::camera::{Camera3D, CameraPose};

/// Scroll-driven camera rig.
///
/// Maps a page scroll offset (CSS pixels) to a camera pose as a pure linear
/// function anchored at a base pose: offset zero reproduces the base exactly,
/// scrolling down pulls the camera along its depth axis and drifts it
/// sideways while yawing. Offsets are not clamped; the page decides how far
/// it scrolls.
#[derive(Debug, Clone, Copy)]
pub struct ScrollRig {
    /// Pose at scroll offset zero.
    pub base: CameraPose,
    /// World units of Z travel per pixel scrolled.
    pub depth_per_px: f32,
    /// World units of X drift per pixel scrolled.
    pub drift_per_px: f32,
    /// Radians of yaw per pixel scrolled.
    pub yaw_per_px: f32,
}

impl ScrollRig {
    /// A rig that holds `base` regardless of offset until factors are set.
    pub fn new(base: CameraPose) -> Self {
        Self {
            base,
            depth_per_px: 0.0,
            drift_per_px: 0.0,
            yaw_per_px: 0.0,
        }
    }

    pub fn with_depth(mut self, per_px: f32) -> Self {
        self.depth_per_px = per_px;
        self
    }

    pub fn with_drift(mut self, per_px: f32) -> Self {
        self.drift_per_px = per_px;
        self
    }

    pub fn with_yaw(mut self, per_px: f32) -> Self {
        self.yaw_per_px = per_px;
        self
    }

    /// Pose for a given scroll offset. Pitch and height ride along from the
    /// base unchanged; only depth, lateral drift, and yaw respond to scroll.
    pub fn pose_at(&self, offset_px: f32) -> CameraPose {
        let mut pose = self.base;
        pose.position.z = self.base.position.z + offset_px * self.depth_per_px;
        pose.position.x = self.base.position.x + offset_px * self.drift_per_px;
        pose.yaw = self.base.yaw + offset_px * self.yaw_per_px;
        pose
    }

    /// Write the pose for `offset_px` onto the camera.
    pub fn apply(&self, camera: &mut Camera3D, offset_px: f32) {
        camera.set_pose(self.pose_at(offset_px));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec3;

    fn base() -> CameraPose {
        CameraPose {
            position: Vec3::new(-1.0, 1.2, 10.0),
            yaw: 0.0,
            pitch: 1.5,
        }
    }

    fn rig() -> ScrollRig {
        ScrollRig::new(base())
            .with_depth(0.01)
            .with_drift(0.0002)
            .with_yaw(0.0002)
    }

    #[test]
    fn zero_offset_is_the_base_pose() {
        assert_eq!(rig().pose_at(0.0), base());
    }

    #[test]
    fn offset_moves_linearly_from_base() {
        let pose = rig().pose_at(500.0);
        assert!((pose.position.z - 15.0).abs() < 1e-5);
        assert!((pose.position.x - -0.9).abs() < 1e-5);
        assert!((pose.yaw - 0.1).abs() < 1e-5);
        // height and pitch ride along untouched
        assert_eq!(pose.position.y, 1.2);
        assert_eq!(pose.pitch, 1.5);
    }

    #[test]
    fn negative_offsets_mirror_positive_ones() {
        let r = rig();
        let dz_up = r.pose_at(100.0).position.z - base().position.z;
        let dz_down = r.pose_at(-100.0).position.z - base().position.z;
        assert!((dz_up + dz_down).abs() < 1e-5);
        assert!(dz_down < 0.0);
    }

    #[test]
    fn displacement_scales_linearly_even_for_huge_offsets() {
        // no clamp: a 120k-pixel page maps like any other
        let r = rig();
        let single = r.pose_at(120_000.0);
        let double = r.pose_at(240_000.0);
        let dz1 = single.position.z - base().position.z;
        let dz2 = double.position.z - base().position.z;
        assert!((dz2 - 2.0 * dz1).abs() < 1e-2);
        let dyaw1 = single.yaw - base().yaw;
        let dyaw2 = double.yaw - base().yaw;
        assert!((dyaw2 - 2.0 * dyaw1).abs() < 1e-3);
    }

    #[test]
    fn apply_writes_the_camera_pose() {
        let mut cam = Camera3D::new(75.0, 0.1, 1000.0);
        let r = rig();
        r.apply(&mut cam, 250.0);
        assert_eq!(cam.pose(), r.pose_at(250.0));
        // scrolling back restores the anchor exactly
        r.apply(&mut cam, 0.0);
        assert_eq!(cam.pose(), base());
    }
}
