use crate::api::types::{AppEvent, EntityId};
use crate::assets::registry::TextureRegistry;
use crate::components::mesh::TextureSlot;
use crate::core::scene::Scene;
use crate::input::queue::InputQueue;
use crate::renderer::camera::Camera3D;
use crate::renderer::geometry::MeshRegistry;
use crate::systems::lighting::LightState;

/// Configuration for the engine, provided by the app.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Fixed timestep in seconds (default: 1/60).
    pub fixed_dt: f32,
    /// Maximum number of render instances (default: 512).
    pub max_instances: usize,
    /// Maximum number of mesh table entries (default: 16).
    pub max_meshes: usize,
    /// Maximum number of point lights (default: 8).
    pub max_lights: usize,
    /// Maximum number of app events per frame (default: 32).
    pub max_events: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fixed_dt: 1.0 / 60.0,
            max_instances: 512,
            max_meshes: 16,
            max_lights: 8,
            max_events: 32,
        }
    }
}

/// The core contract every app must fulfill.
pub trait App {
    /// Return engine configuration. Called once before init.
    fn config(&self) -> AppConfig {
        AppConfig::default()
    }

    /// Setup initial state: register geometry, spawn entities, frame the camera.
    fn init(&mut self, ctx: &mut EngineContext);

    /// The fixed-step tick. Process input, advance motion, move the camera.
    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue);
}

/// Mutable access to engine state, passed to App::init and App::update.
pub struct EngineContext {
    pub scene: Scene,
    pub meshes: MeshRegistry,
    pub camera: Camera3D,
    pub lights: LightState,
    pub textures: TextureRegistry,
    /// Scene background texture, unset until textures are installed.
    pub background: Option<TextureSlot>,
    pub events: Vec<AppEvent>,
    next_id: u32,
}

impl EngineContext {
    pub fn new() -> Self {
        Self {
            scene: Scene::new(),
            meshes: MeshRegistry::new(),
            camera: Camera3D::default(),
            lights: LightState::new(),
            textures: TextureRegistry::new(),
            background: None,
            events: Vec::new(),
            next_id: 1,
        }
    }

    /// Generate the next unique entity ID.
    pub fn next_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id += 1;
        id
    }

    /// Emit an app event to be forwarded to TypeScript.
    pub fn emit_event(&mut self, event: AppEvent) {
        self.events.push(event);
    }

    /// Install the texture registry and resolve the background by name.
    /// A background name with no matching texture logs a warning and
    /// leaves the background unset; the scene still renders.
    pub fn set_textures(&mut self, registry: TextureRegistry, background: Option<&str>) {
        self.background = match background {
            Some(name) => {
                let slot = registry.slot(name);
                if slot.is_none() {
                    log::warn!("background texture '{}' not in manifest, skipping", name);
                }
                slot
            }
            None => None,
        };
        self.textures = registry;
    }

    /// Clear per-frame transient data (events).
    pub fn clear_frame_data(&mut self) {
        self.events.clear();
    }
}

impl Default for EngineContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::manifest::TextureManifest;

    fn registry() -> TextureRegistry {
        let manifest = TextureManifest::from_json(
            r#"{
                "textures": [
                    { "name": "stars", "path": "textures/stars.jpg" },
                    { "name": "sun", "path": "textures/sun.jpg" }
                ]
            }"#,
        )
        .unwrap();
        TextureRegistry::from_manifest(&manifest)
    }

    #[test]
    fn next_id_is_monotonic() {
        let mut ctx = EngineContext::new();
        let a = ctx.next_id();
        let b = ctx.next_id();
        assert_ne!(a, b);
    }

    #[test]
    fn set_textures_resolves_background() {
        let mut ctx = EngineContext::new();
        ctx.set_textures(registry(), Some("stars"));
        assert_eq!(ctx.background, Some(TextureSlot(0)));
        assert!(ctx.textures.slot("sun").is_some());
    }

    #[test]
    fn missing_background_name_is_not_fatal() {
        let mut ctx = EngineContext::new();
        ctx.set_textures(registry(), Some("nebula"));
        assert_eq!(ctx.background, None);
        assert_eq!(ctx.textures.len(), 2);
    }

    #[test]
    fn clear_frame_data_drops_events() {
        let mut ctx = EngineContext::new();
        ctx.emit_event(AppEvent {
            kind: 1.0,
            a: 2.0,
            b: 3.0,
            c: 4.0,
        });
        assert_eq!(ctx.events.len(), 1);
        ctx.clear_frame_data();
        assert!(ctx.events.is_empty());
    }
}
