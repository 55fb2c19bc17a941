use parallax_engine::{
    App, AppConfig, EngineContext,
    InputEvent, InputQueue, RenderBuffer,
    CameraUniform, FixedTimestep, ProtocolLayout,
    TextureManifest, TextureRegistry,
};
use parallax_engine::systems::render::build_render_buffer;

/// Generic app runner that wires up the engine loop.
///
/// Each concrete app (e.g., `solar-system`) creates a `thread_local!` AppRunner
/// and exports free functions via `#[wasm_bindgen]`, because wasm-bindgen
/// cannot export generic structs directly.
pub struct AppRunner<A: App> {
    app: A,
    ctx: EngineContext,
    input: InputQueue,
    render_buffer: RenderBuffer,
    timestep: FixedTimestep,
    config: AppConfig,
    layout: ProtocolLayout,
    initialized: bool,
    /// One camera uniform on the heap, so its pointer survives moves of the runner.
    camera_buffer: Vec<CameraUniform>,
}

impl<A: App> AppRunner<A> {
    pub fn new(app: A) -> Self {
        let config = app.config();
        let timestep = FixedTimestep::new(config.fixed_dt);
        let layout = ProtocolLayout::from_config(&config);

        let render_buffer = RenderBuffer::with_capacity(config.max_instances);
        let ctx = EngineContext::new();
        let camera_buffer = vec![ctx.camera.uniform()];

        Self {
            app,
            ctx,
            input: InputQueue::new(),
            render_buffer,
            timestep,
            layout,
            config,
            initialized: false,
            camera_buffer,
        }
    }

    /// Initialize the app. Call once after construction.
    pub fn init(&mut self) {
        self.config = self.app.config();
        self.layout = ProtocolLayout::from_config(&self.config);
        self.app.init(&mut self.ctx);
        self.camera_buffer[0] = self.ctx.camera.uniform();
        self.initialized = true;
    }

    /// Install textures from manifest JSON. A malformed manifest logs a
    /// warning and keeps the current registry; the scene renders untextured.
    pub fn load_manifest(&mut self, json: &str) {
        match TextureManifest::from_json(json) {
            Ok(manifest) => {
                let registry = TextureRegistry::from_manifest(&manifest);
                self.ctx.set_textures(registry, manifest.background.as_deref());
            }
            Err(err) => {
                log::warn!("texture manifest parse failed: {}", err);
            }
        }
    }

    /// Push an input event into the queue.
    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame tick: update the app, rebuild render and camera data.
    pub fn tick(&mut self, dt: f32) {
        if !self.initialized {
            return;
        }

        // Clear per-frame transient data
        self.ctx.clear_frame_data();

        // Fixed timestep accumulation
        let steps = self.timestep.accumulate(dt);
        for _ in 0..steps {
            self.app.update(&mut self.ctx, &self.input);
        }

        // Drain input after update
        self.input.drain();

        // Build render buffer from entities
        build_render_buffer(self.ctx.scene.iter(), &mut self.render_buffer);

        // Refresh the camera uniform for this frame
        self.camera_buffer[0] = self.ctx.camera.uniform();
    }

    // ---- Pointer accessors for SharedArrayBuffer reads ----

    pub fn camera_ptr(&self) -> *const f32 {
        self.camera_buffer.as_ptr() as *const f32
    }

    pub fn meshes_ptr(&self) -> *const f32 {
        self.ctx.meshes.entries_ptr()
    }

    pub fn mesh_count(&self) -> u32 {
        self.ctx.meshes.len() as u32
    }

    pub fn instances_ptr(&self) -> *const f32 {
        self.render_buffer.instances_ptr()
    }

    pub fn instance_count(&self) -> u32 {
        self.render_buffer.instance_count()
    }

    pub fn lights_ptr(&self) -> *const f32 {
        self.ctx.lights.buffer_ptr()
    }

    pub fn light_count(&self) -> u32 {
        self.ctx.lights.count() as u32
    }

    pub fn ambient_r(&self) -> f32 {
        self.ctx.lights.ambient()[0]
    }

    pub fn ambient_g(&self) -> f32 {
        self.ctx.lights.ambient()[1]
    }

    pub fn ambient_b(&self) -> f32 {
        self.ctx.lights.ambient()[2]
    }

    pub fn app_events_ptr(&self) -> *const f32 {
        self.ctx.events.as_ptr() as *const f32
    }

    pub fn app_events_len(&self) -> u32 {
        self.ctx.events.len() as u32
    }

    /// Background texture slot for the header, -1.0 when unset.
    pub fn background_slot(&self) -> f32 {
        self.ctx
            .background
            .map(|slot| slot.0 as f32)
            .unwrap_or(-1.0)
    }

    pub fn viewport_width(&self) -> f32 {
        self.ctx.camera.viewport_width
    }

    pub fn viewport_height(&self) -> f32 {
        self.ctx.camera.viewport_height
    }

    pub fn fixed_dt(&self) -> f32 {
        self.config.fixed_dt
    }

    // ---- Capacity accessors (read by TypeScript via wasm_bindgen exports) ----

    pub fn max_meshes(&self) -> u32 {
        self.layout.max_meshes as u32
    }

    pub fn max_instances(&self) -> u32 {
        self.layout.max_instances as u32
    }

    pub fn max_lights(&self) -> u32 {
        self.layout.max_lights as u32
    }

    pub fn max_events(&self) -> u32 {
        self.layout.max_events as u32
    }

    pub fn buffer_total_floats(&self) -> u32 {
        self.layout.buffer_total_floats as u32
    }
}
