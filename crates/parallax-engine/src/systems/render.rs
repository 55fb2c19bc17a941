use glam::{EulerRot, Quat};
use crate::components::entity::Entity;
use crate::renderer::instance::{RenderBuffer, RenderInstance};

/// Build the render buffer from a set of entities, in scene order.
/// Inactive entities and entities without a mesh component are skipped;
/// everything else lands in the buffer, so a body never silently drops
/// out of the frame.
pub fn build_render_buffer<'a>(entities: impl Iterator<Item = &'a Entity>, buffer: &mut RenderBuffer) {
    buffer.clear();

    for entity in entities {
        if !entity.active {
            continue;
        }

        let mesh = match &entity.mesh {
            Some(m) => m,
            None => continue,
        };

        let q = Quat::from_euler(
            EulerRot::XYZ,
            entity.rotation.x,
            entity.rotation.y,
            entity.rotation.z,
        );

        buffer.push(RenderInstance {
            x: entity.pos.x,
            y: entity.pos.y,
            z: entity.pos.z,
            qx: q.x,
            qy: q.y,
            qz: q.z,
            qw: q.w,
            scale: entity.scale.x,
            mesh_index: mesh.mesh.0 as f32,
            texture_slot: mesh.texture.map(|t| t.0 as f32).unwrap_or(-1.0),
            r: mesh.color.r,
            g: mesh.color.g,
            b: mesh.color.b,
            emissive: mesh.emissive,
            alpha: mesh.alpha,
            double_sided: if mesh.double_sided { 1.0 } else { 0.0 },
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::EntityId;
    use crate::components::mesh::{Color, MeshComponent, MeshId, TextureSlot};
    use glam::Vec3;

    #[test]
    fn build_buffer_keeps_scene_order_and_fields() {
        let entities = vec![
            Entity::new(EntityId(1))
                .with_pos(Vec3::new(0.0, 0.0, 13.0))
                .with_mesh(
                    MeshComponent::new(MeshId(2))
                        .with_texture(TextureSlot(5))
                        .with_color(Color::new(0.9, 0.8, 0.7)),
                ),
            Entity::new(EntityId(2))
                .with_pos(Vec3::new(0.0, 0.0, 21.8))
                .with_mesh(MeshComponent::new(MeshId(0)).with_emissive(1.0)),
        ];

        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);

        assert_eq!(buffer.instance_count(), 2);
        let first = &buffer.instances[0];
        assert_eq!(first.z, 13.0);
        assert_eq!(first.mesh_index, 2.0);
        assert_eq!(first.texture_slot, 5.0);
        assert_eq!((first.r, first.g, first.b), (0.9, 0.8, 0.7));
        let second = &buffer.instances[1];
        assert_eq!(second.emissive, 1.0);
        assert_eq!(second.texture_slot, -1.0);
    }

    #[test]
    fn rotation_travels_as_a_quaternion() {
        let entity = Entity::new(EntityId(1))
            .with_rotation(Vec3::new(0.0, std::f32::consts::FRAC_PI_2, 0.0))
            .with_mesh(MeshComponent::new(MeshId(0)));

        let entities = vec![entity];
        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);

        let inst = &buffer.instances[0];
        let q = Quat::from_xyzw(inst.qx, inst.qy, inst.qz, inst.qw);
        let expected = Quat::from_rotation_y(std::f32::consts::FRAC_PI_2);
        assert!(q.dot(expected).abs() > 1.0 - 1e-5);
    }

    #[test]
    fn inactive_entities_are_skipped() {
        let mut entity = Entity::new(EntityId(1)).with_mesh(MeshComponent::new(MeshId(0)));
        entity.active = false;

        let entities = vec![entity];
        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);
        assert_eq!(buffer.instance_count(), 0);
    }

    #[test]
    fn meshless_entities_are_invisible() {
        let entities = vec![Entity::new(EntityId(1)).with_pos(Vec3::splat(5.0))];
        let mut buffer = RenderBuffer::new();
        build_render_buffer(entities.iter(), &mut buffer);
        assert_eq!(buffer.instance_count(), 0);
    }
}
