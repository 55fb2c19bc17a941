pub mod api;
pub mod core;
pub mod components;
pub mod systems;
pub mod renderer;
pub mod bridge;
pub mod input;
pub mod assets;
pub mod extensions;

// Re-export key types at crate root for convenience
pub use api::app::{App, AppConfig, EngineContext};
pub use api::types::{EntityId, AppEvent};
pub use components::entity::Entity;
pub use components::mesh::{MeshComponent, MeshId, TextureSlot, Color};
pub use components::orbit::OrbitComponent;
pub use core::scene::Scene;
pub use core::time::FixedTimestep;
pub use renderer::camera::{Camera3D, CameraPose, CameraUniform};
pub use renderer::controls::OrbitControls;
pub use renderer::geometry::{Geometry, MeshEntry, MeshRegistry};
pub use renderer::instance::{RenderInstance, RenderBuffer};
pub use renderer::rig::ScrollRig;
pub use input::queue::{InputEvent, InputQueue};
pub use assets::manifest::{TextureManifest, TextureDescriptor};
pub use assets::registry::TextureRegistry;
pub use bridge::protocol::ProtocolLayout;
pub use bridge::protocol::{CAMERA_FLOATS, EVENT_FLOATS, INSTANCE_FLOATS, LIGHT_FLOATS, MESH_FLOATS};
pub use systems::lighting::{PointLight, LightState};
pub use systems::orbit::step_orbits;
pub use systems::render::build_render_buffer;

// Extensions — decoupled optional systems
pub use extensions::{TransformGraph, LocalTransform};
