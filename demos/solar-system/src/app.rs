/// Solar System: scroll-reactive 3D scene.
///
/// A sun, eight textured planets on quaternion orbits, Saturn's ring riding
/// its parent through the transform graph, and a 400-star backdrop.
/// Page scroll drives the camera through a linear rig; pointer drag and
/// wheel orbit it interactively around the sun.

use parallax_engine::*;
use parallax_engine::api::app::AppConfig;
use parallax_engine::input::queue::{InputEvent, InputQueue};
use glam::Vec3;
use std::f32::consts::FRAC_PI_2;

use crate::bodies;

// ── Camera framing ───────────────────────────────────────────────────

const FOV_Y_DEGREES: f32 = 75.0;
const NEAR: f32 = 0.1;
const FAR: f32 = 1000.0;
/// Initial camera position; scroll offset zero always returns here.
const BASE_POSITION: Vec3 = Vec3::new(-1.0, 1.2, 10.0);
/// The scene's signature framing: camera tilted straight up, so the star
/// field sweeps past while scroll pulls it backwards.
const BASE_PITCH: f32 = FRAC_PI_2;

// ── Scroll mapping (per CSS pixel scrolled) ──────────────────────────

const SCROLL_DEPTH_PER_PX: f32 = 0.01;
const SCROLL_DRIFT_PER_PX: f32 = 0.0002;
const SCROLL_YAW_PER_PX: f32 = 0.0002;

// ── Lighting ─────────────────────────────────────────────────────────

/// White point light at the sun's position, unbounded range.
const SUN_LIGHT_INTENSITY: f32 = 1.0;
/// Uniform fill keeping night sides visible.
const AMBIENT: f32 = 0.65;

// ── App event kinds to the host UI ───────────────────────────────────

const EVENT_CAMERA_INFO: f32 = 1.0;

// ── App struct ───────────────────────────────────────────────────────

pub struct SolarSystem {
    /// Scroll offset → camera pose map.
    rig: ScrollRig,
    /// Drag-to-orbit and wheel zoom, centered on the sun.
    controls: OrbitControls,
    /// Parent/child attachment; carries Saturn's ring.
    graph: TransformGraph,
}

impl SolarSystem {
    pub fn new() -> Self {
        let base = CameraPose {
            position: BASE_POSITION,
            yaw: 0.0,
            pitch: BASE_PITCH,
        };
        Self {
            rig: ScrollRig::new(base)
                .with_depth(SCROLL_DEPTH_PER_PX)
                .with_drift(SCROLL_DRIFT_PER_PX)
                .with_yaw(SCROLL_YAW_PER_PX),
            controls: OrbitControls::new(Vec3::ZERO),
            graph: TransformGraph::new(),
        }
    }

    /// Mesh surface for a body: textured when the manifest resolves the
    /// name, fallback color otherwise. Texture absence degrades the look,
    /// never the build.
    fn surface(
        ctx: &EngineContext,
        mesh: MeshId,
        name: Option<&str>,
        color: (f32, f32, f32),
    ) -> MeshComponent {
        let mut component =
            MeshComponent::new(mesh).with_color(Color::new(color.0, color.1, color.2));
        if let Some(name) = name {
            match ctx.textures.slot(name) {
                Some(slot) => component = component.with_texture(slot),
                None => log::warn!("texture '{}' not in manifest, using fallback color", name),
            }
        }
        component
    }
}

impl App for SolarSystem {
    fn config(&self) -> AppConfig {
        AppConfig {
            max_instances: 512,
            max_meshes: 16,
            ..AppConfig::default()
        }
    }

    fn init(&mut self, ctx: &mut EngineContext) {
        // ── Camera ───────────────────────────────────────────────────
        ctx.camera = Camera3D::new(FOV_Y_DEGREES, NEAR, FAR);
        self.rig.apply(&mut ctx.camera, 0.0);

        // ── Textures ─────────────────────────────────────────────────
        match TextureManifest::from_json(include_str!("../assets/manifest.json")) {
            Ok(manifest) => {
                let registry = TextureRegistry::from_manifest(&manifest);
                ctx.set_textures(registry, manifest.background.as_deref());
            }
            Err(err) => log::warn!("bundled manifest is malformed: {}", err),
        }

        // ── Lighting ─────────────────────────────────────────────────
        ctx.lights.add(PointLight::new(
            Vec3::ZERO,
            [1.0, 1.0, 1.0],
            SUN_LIGHT_INTENSITY,
            0.0,
        ));
        ctx.lights.set_ambient(AMBIENT, AMBIENT, AMBIENT);

        // ── Sun and planets ──────────────────────────────────────────
        let descriptors = bodies::bodies();
        let mut body_ids = [EntityId(0); bodies::BODY_COUNT];
        for (i, desc) in descriptors.iter().enumerate() {
            let mesh = ctx.meshes.register(Geometry::Sphere {
                radius: desc.radius,
                segments_w: desc.segments_w,
                segments_h: desc.segments_h,
            });
            let surface =
                Self::surface(ctx, mesh, desc.texture, desc.fallback_color).with_emissive(desc.emissive);

            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag(desc.name)
                    .with_pos(Vec3::new(0.0, 0.0, desc.distance))
                    .with_mesh(surface)
                    .with_orbit(OrbitComponent::new(desc.orbital_speed, desc.spin_speed)),
            );
            body_ids[i] = id;
        }

        // ── Saturn's ring ────────────────────────────────────────────
        // Rigidly attached: the graph keeps it at Saturn's transform
        // composed with the fixed tilt, wherever the orbit takes Saturn.
        let ring_mesh = ctx.meshes.register(Geometry::Ring {
            inner_radius: bodies::RING_INNER_RADIUS,
            outer_radius: bodies::RING_OUTER_RADIUS,
            segments: bodies::RING_SEGMENTS,
        });
        let ring_surface =
            Self::surface(ctx, ring_mesh, Some(bodies::RING_TEXTURE), bodies::RING_COLOR)
                .with_double_sided();

        let ring_id = ctx.next_id();
        ctx.scene.spawn(
            Entity::new(ring_id)
                .with_tag("saturn-ring")
                .with_mesh(ring_surface),
        );

        let saturn_id = body_ids[bodies::SATURN];
        self.graph.register(saturn_id);
        self.graph.register_with(
            ring_id,
            LocalTransform::new().with_rotation(Vec3::new(bodies::RING_TILT_X, 0.0, 0.0)),
        );
        self.graph.set_parent(ring_id, Some(saturn_id));
        self.graph.propagate(&mut ctx.scene);

        // ── Star field ───────────────────────────────────────────────
        let star_mesh = ctx.meshes.register(Geometry::Sphere {
            radius: bodies::STAR_RADIUS,
            segments_w: bodies::STAR_SEGMENTS,
            segments_h: bodies::STAR_SEGMENTS,
        });
        for pos in bodies::star_positions() {
            let id = ctx.next_id();
            ctx.scene.spawn(
                Entity::new(id)
                    .with_tag("star")
                    .with_pos(pos)
                    .with_mesh(MeshComponent::new(star_mesh)),
            );
        }
    }

    fn update(&mut self, ctx: &mut EngineContext, input: &InputQueue) {
        // ── Camera input (arrival order, last write wins) ────────────
        for event in input.iter() {
            match event {
                InputEvent::Scroll { offset } => self.rig.apply(&mut ctx.camera, *offset),
                InputEvent::Resize { width, height } => ctx.camera.resize(*width, *height),
                other => self.controls.handle(&mut ctx.camera, other),
            }
        }

        // ── Orbits, spin, ring attachment ────────────────────────────
        step_orbits(&mut ctx.scene);
        self.graph.propagate(&mut ctx.scene);

        // ── Camera report for the host UI ────────────────────────────
        ctx.emit_event(AppEvent {
            kind: EVENT_CAMERA_INFO,
            a: ctx.camera.position.z,
            b: ctx.camera.yaw,
            c: ctx.camera.pitch,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{EulerRot, Quat};

    fn booted() -> (SolarSystem, EngineContext) {
        let mut app = SolarSystem::new();
        let mut ctx = EngineContext::new();
        app.init(&mut ctx);
        (app, ctx)
    }

    fn tick(app: &mut SolarSystem, ctx: &mut EngineContext) {
        let input = InputQueue::new();
        app.update(ctx, &input);
    }

    #[test]
    fn bootstrap_spawns_the_whole_scene() {
        let (_, ctx) = booted();
        // sun + 8 planets + ring + star field
        assert_eq!(ctx.scene.len(), bodies::BODY_COUNT + 1 + bodies::STAR_COUNT);
        assert_eq!(ctx.scene.find_all_by_tag("star").len(), bodies::STAR_COUNT);
        // one point light at the sun plus the ambient fill
        assert_eq!(ctx.lights.count(), 1);
        assert_eq!(ctx.lights.ambient(), [AMBIENT, AMBIENT, AMBIENT]);
        assert!(ctx.background.is_some());
        // 9 body spheres + ring + shared star sphere
        assert_eq!(ctx.meshes.len(), 11);
    }

    #[test]
    fn bootstrap_is_reproducible_on_a_fresh_context() {
        let (_, first) = booted();
        let (_, second) = booted();
        assert_eq!(first.scene.len(), second.scene.len());
        assert_eq!(first.meshes.len(), second.meshes.len());
        // the seeded sky comes out identical too
        for (a, b) in first
            .scene
            .find_all_by_tag("star")
            .iter()
            .zip(second.scene.find_all_by_tag("star"))
        {
            assert_eq!(a.pos, b.pos);
        }
    }

    #[test]
    fn camera_boots_at_the_signature_framing() {
        let (_, ctx) = booted();
        assert_eq!(ctx.camera.position, BASE_POSITION);
        assert_eq!(ctx.camera.yaw, 0.0);
        assert_eq!(ctx.camera.pitch, BASE_PITCH);
        assert_eq!(ctx.camera.fov_y_degrees, FOV_Y_DEGREES);
    }

    #[test]
    fn bundled_manifest_covers_every_texture() {
        let (_, ctx) = booted();
        for desc in bodies::bodies().iter() {
            if let Some(name) = desc.texture {
                assert!(ctx.textures.slot(name).is_some(), "missing texture '{}'", name);
            }
        }
        assert!(ctx.textures.slot(bodies::RING_TEXTURE).is_some());
    }

    #[test]
    fn mercury_first_tick_rotates_by_its_orbital_speed() {
        let (mut app, mut ctx) = booted();
        tick(&mut app, &mut ctx);
        let mercury = ctx.scene.find_by_tag("mercury").unwrap();
        assert!((mercury.pos.length() - 13.0).abs() < 1e-4);
        assert!((mercury.pos.x - 13.0 * 0.02076_f32.sin()).abs() < 1e-4);
        assert!((mercury.pos.z - 13.0 * 0.02076_f32.cos()).abs() < 1e-4);
    }

    #[test]
    fn orbit_radii_survive_many_ticks() {
        let (mut app, mut ctx) = booted();
        for _ in 0..600 {
            tick(&mut app, &mut ctx);
        }
        for desc in bodies::bodies().iter() {
            if desc.orbital_speed == 0.0 {
                continue;
            }
            let body = ctx.scene.find_by_tag(desc.name).unwrap();
            let r = body.pos.length();
            assert!(
                (r - desc.distance).abs() / desc.distance < 1e-3,
                "{} drifted from {} to {}",
                desc.name,
                desc.distance,
                r
            );
        }
        assert_eq!(ctx.scene.find_by_tag("sun").unwrap().pos, Vec3::ZERO);
    }

    #[test]
    fn spin_accumulates_linearly() {
        let (mut app, mut ctx) = booted();
        for _ in 0..40 {
            tick(&mut app, &mut ctx);
        }
        let venus = ctx.scene.find_by_tag("venus").unwrap();
        assert!((venus.rotation.y - 40.0 * 0.07).abs() < 1e-4);
        let earth = ctx.scene.find_by_tag("earth").unwrap();
        assert_eq!(earth.rotation.y, 0.0);
    }

    #[test]
    fn ring_rides_saturn_rigidly() {
        let (mut app, mut ctx) = booted();
        for _ in 0..250 {
            tick(&mut app, &mut ctx);
        }
        let saturn = ctx.scene.find_by_tag("saturn").unwrap();
        let ring = ctx.scene.find_by_tag("saturn-ring").unwrap();
        assert!((ring.pos - saturn.pos).length() < 1e-4);

        let saturn_quat = Quat::from_euler(
            EulerRot::XYZ,
            saturn.rotation.x,
            saturn.rotation.y,
            saturn.rotation.z,
        );
        let expected = saturn_quat * Quat::from_rotation_x(bodies::RING_TILT_X);
        let actual = Quat::from_euler(
            EulerRot::XYZ,
            ring.rotation.x,
            ring.rotation.y,
            ring.rotation.z,
        );
        assert!(actual.dot(expected).abs() > 1.0 - 1e-4);
    }

    #[test]
    fn render_pass_publishes_every_body() {
        let (mut app, mut ctx) = booted();
        tick(&mut app, &mut ctx);
        let mut buffer = RenderBuffer::new();
        build_render_buffer(ctx.scene.iter(), &mut buffer);
        assert_eq!(
            buffer.instance_count(),
            (bodies::BODY_COUNT + 1 + bodies::STAR_COUNT) as u32
        );
        // scene order puts the sun first; it glows and carries its texture
        assert_eq!(buffer.instances[0].emissive, bodies::SUN_EMISSIVE);
        assert!(buffer.instances[0].texture_slot >= 0.0);
    }

    #[test]
    fn scroll_back_restores_initial_framing() {
        let (mut app, mut ctx) = booted();
        let initial = ctx.camera.pose();

        let mut input = InputQueue::new();
        input.push(InputEvent::Scroll { offset: 1234.0 });
        app.update(&mut ctx, &input);
        assert!(ctx.camera.pose() != initial);

        let mut input = InputQueue::new();
        input.push(InputEvent::Scroll { offset: 0.0 });
        app.update(&mut ctx, &input);
        assert_eq!(ctx.camera.pose(), initial);
    }

    #[test]
    fn drag_composes_with_scroll() {
        let (mut app, mut ctx) = booted();

        let mut input = InputQueue::new();
        input.push(InputEvent::Scroll { offset: 2000.0 });
        app.update(&mut ctx, &input);
        let scrolled = ctx.camera.position;
        let distance = scrolled.length();

        // a drag picks up from the scrolled pose and orbits the sun
        let mut input = InputQueue::new();
        input.push(InputEvent::PointerDown { x: 0.0, y: 0.0 });
        input.push(InputEvent::PointerMove { x: 40.0, y: 0.0 });
        app.update(&mut ctx, &input);
        assert!((ctx.camera.position.length() - distance).abs() < 1e-3);
        assert!(ctx.camera.position != scrolled);
    }

    #[test]
    fn resize_updates_camera_aspect() {
        let (mut app, mut ctx) = booted();
        let mut input = InputQueue::new();
        input.push(InputEvent::Resize {
            width: 1280.0,
            height: 720.0,
        });
        app.update(&mut ctx, &input);
        assert!((ctx.camera.aspect - 1280.0 / 720.0).abs() < 1e-6);
    }

    #[test]
    fn camera_info_event_emitted_each_tick() {
        let (mut app, mut ctx) = booted();
        tick(&mut app, &mut ctx);
        assert_eq!(ctx.events.len(), 1);
        assert_eq!(ctx.events[0].kind, EVENT_CAMERA_INFO);
        assert_eq!(ctx.events[0].a, ctx.camera.position.z);
    }

    #[test]
    fn missing_texture_degrades_to_fallback_color() {
        let mut ctx = EngineContext::new(); // empty registry
        let mesh = ctx.meshes.register(Geometry::Sphere {
            radius: 1.0,
            segments_w: 8,
            segments_h: 8,
        });
        let surface = SolarSystem::surface(&ctx, mesh, Some("saturn"), (0.85, 0.75, 0.50));
        assert_eq!(surface.texture, None);
        assert_eq!(surface.color, Color::new(0.85, 0.75, 0.50));

        // the degraded body still spawns and renders, slot -1 on the wire
        let id = ctx.next_id();
        ctx.scene.spawn(Entity::new(id).with_tag("lost").with_mesh(surface));
        let mut buffer = RenderBuffer::new();
        build_render_buffer(ctx.scene.iter(), &mut buffer);
        assert_eq!(buffer.instance_count(), 1);
        assert_eq!(buffer.instances[0].texture_slot, -1.0);
        assert_eq!(buffer.instances[0].r, 0.85);
    }
}
