pub mod camera;
pub mod controls;
pub mod geometry;
pub mod instance;
pub mod rig;

// Re-export key types for convenient access
pub use camera::{Camera3D, CameraPose, CameraUniform};
pub use controls::OrbitControls;
pub use geometry::{Geometry, MeshEntry, MeshRegistry};
pub use instance::{RenderBuffer, RenderInstance};
pub use rig::ScrollRig;
