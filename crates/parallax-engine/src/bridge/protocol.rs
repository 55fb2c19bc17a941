/// SharedArrayBuffer layout.
/// Must stay in sync with TypeScript `protocol.ts`.
///
/// Layout (all values in f32 / 4 bytes):
/// ```text
/// [Header: 16 floats]
/// [Camera: 20 floats]
/// [Meshes: max_meshes × 8 floats]
/// [Instances: max_instances × 16 floats]
/// [Lights: max_lights × 8 floats]
/// [Events: max_events × 4 floats]
/// ```
///
/// Capacities are written once into the header at init.
/// TypeScript reads them from the header to compute offsets dynamically.

use crate::api::app::AppConfig;

/// Number of floats in the header section.
pub const HEADER_FLOATS: usize = 16;

/// Header field indices.
pub const HEADER_LOCK: usize = 0;
pub const HEADER_FRAME_COUNTER: usize = 1;
pub const HEADER_MAX_INSTANCES: usize = 2;
pub const HEADER_INSTANCE_COUNT: usize = 3;
pub const HEADER_MAX_MESHES: usize = 4;
pub const HEADER_MESH_COUNT: usize = 5;
pub const HEADER_MAX_LIGHTS: usize = 6;
pub const HEADER_LIGHT_COUNT: usize = 7;
pub const HEADER_MAX_EVENTS: usize = 8;
pub const HEADER_EVENT_COUNT: usize = 9;
pub const HEADER_BACKGROUND_SLOT: usize = 10;
pub const HEADER_VIEWPORT_WIDTH: usize = 11;
pub const HEADER_VIEWPORT_HEIGHT: usize = 12;
pub const HEADER_PROTOCOL_VERSION: usize = 13;
pub const HEADER_CAMERA_FLOATS: usize = 14;
pub const HEADER_FIXED_DT: usize = 15;

/// Protocol version written into the header.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats in the camera section: view_proj matrix + eye (wire format — never changes).
pub const CAMERA_FLOATS: usize = 20;

/// Floats per mesh table entry: kind, p0, p1, seg_u, seg_v, pad×3 (wire format — never changes).
pub const MESH_FLOATS: usize = 8;

/// Floats per render instance (wire format — never changes).
pub const INSTANCE_FLOATS: usize = 16;

/// Floats per point light: x, y, z, r, g, b, intensity, range (wire format — never changes).
pub const LIGHT_FLOATS: usize = 8;

/// Floats per app event: kind, a, b, c (wire format — never changes).
pub const EVENT_FLOATS: usize = 4;

/// Runtime-computed buffer layout, sized from the app's capacities.
#[derive(Debug, Clone, PartialEq)]
pub struct ProtocolLayout {
    /// Maximum mesh table entries.
    pub max_meshes: usize,
    /// Maximum render instances.
    pub max_instances: usize,
    /// Maximum point lights.
    pub max_lights: usize,
    /// Maximum app events per frame.
    pub max_events: usize,

    /// Size of the camera section in floats.
    pub camera_data_floats: usize,
    /// Size of mesh table section in floats.
    pub mesh_data_floats: usize,
    /// Size of instance data section in floats.
    pub instance_data_floats: usize,
    /// Size of light data section in floats.
    pub light_data_floats: usize,
    /// Size of event data section in floats.
    pub event_data_floats: usize,

    /// Offset (in floats) where camera data begins.
    pub camera_data_offset: usize,
    /// Offset (in floats) where the mesh table begins.
    pub mesh_data_offset: usize,
    /// Offset (in floats) where instance data begins.
    pub instance_data_offset: usize,
    /// Offset (in floats) where light data begins.
    pub light_data_offset: usize,
    /// Offset (in floats) where event data begins.
    pub event_data_offset: usize,

    /// Total buffer size in floats.
    pub buffer_total_floats: usize,
    /// Total buffer size in bytes.
    pub buffer_total_bytes: usize,
}

impl ProtocolLayout {
    /// Compute layout from raw capacity values.
    pub fn new(
        max_meshes: usize,
        max_instances: usize,
        max_lights: usize,
        max_events: usize,
    ) -> Self {
        let camera_data_floats = CAMERA_FLOATS;
        let mesh_data_floats = max_meshes * MESH_FLOATS;
        let instance_data_floats = max_instances * INSTANCE_FLOATS;
        let light_data_floats = max_lights * LIGHT_FLOATS;
        let event_data_floats = max_events * EVENT_FLOATS;

        let camera_data_offset = HEADER_FLOATS;
        let mesh_data_offset = camera_data_offset + camera_data_floats;
        let instance_data_offset = mesh_data_offset + mesh_data_floats;
        let light_data_offset = instance_data_offset + instance_data_floats;
        let event_data_offset = light_data_offset + light_data_floats;

        let buffer_total_floats = event_data_offset + event_data_floats;
        let buffer_total_bytes = buffer_total_floats * 4;

        Self {
            max_meshes,
            max_instances,
            max_lights,
            max_events,
            camera_data_floats,
            mesh_data_floats,
            instance_data_floats,
            light_data_floats,
            event_data_floats,
            camera_data_offset,
            mesh_data_offset,
            instance_data_offset,
            light_data_offset,
            event_data_offset,
            buffer_total_floats,
            buffer_total_bytes,
        }
    }

    /// Compute layout from an AppConfig.
    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.max_meshes,
            config.max_instances,
            config.max_lights,
            config.max_events,
        )
    }
}
