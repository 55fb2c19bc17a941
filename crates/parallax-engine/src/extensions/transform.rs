// extensions/transform.rs
//
// Transform hierarchy extension — tracks parent-child relationships by EntityId.
// Completely decoupled from Entity/Scene internals.
//
// A root's world transform is read from its scene entity each propagate, so
// systems that move roots (orbits) stay in charge; the graph only writes the
// descendants. Call propagate after the systems that move roots have run.
//
// Usage:
//   let mut graph = TransformGraph::new();
//   graph.set_parent(child_id, Some(parent_id));
//   graph.propagate(&mut scene);  // Updates descendants' world transforms

use std::collections::HashMap;
use glam::{EulerRot, Quat, Vec3};
use crate::api::types::EntityId;
use crate::core::scene::Scene;

/// Local transform data for entities in a hierarchy.
#[derive(Debug, Clone, Copy)]
pub struct LocalTransform {
    /// Position relative to parent (ignored while the entity is a root).
    pub offset: Vec3,
    /// Rotation relative to parent, XYZ Euler angles in radians.
    pub rotation: Vec3,
    /// Scale multiplier relative to parent.
    pub scale: Vec3,
}

impl Default for LocalTransform {
    fn default() -> Self {
        Self {
            offset: Vec3::ZERO,
            rotation: Vec3::ZERO,
            scale: Vec3::ONE,
        }
    }
}

impl LocalTransform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_offset(mut self, offset: Vec3) -> Self {
        self.offset = offset;
        self
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    pub fn with_scale(mut self, scale: Vec3) -> Self {
        self.scale = scale;
        self
    }
}

/// Node in the transform hierarchy.
#[derive(Debug, Clone)]
struct TransformNode {
    parent: Option<EntityId>,
    children: Vec<EntityId>,
    local: LocalTransform,
}

impl Default for TransformNode {
    fn default() -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            local: LocalTransform::default(),
        }
    }
}

/// Transform hierarchy graph — manages parent-child relationships.
///
/// Exists separately from Scene to maintain clean architecture.
/// Apps that need hierarchy create this alongside their Scene.
#[derive(Debug, Default)]
pub struct TransformGraph {
    nodes: HashMap<EntityId, TransformNode>,
    /// Entities with no parent (top-level).
    roots: Vec<EntityId>,
}

impl TransformGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an entity in the hierarchy with default local transform.
    /// Must be called before setting parent/children.
    pub fn register(&mut self, id: EntityId) {
        self.nodes.entry(id).or_default();
        if !self.roots.contains(&id) {
            self.roots.push(id);
        }
    }

    /// Register an entity with a specific local transform.
    pub fn register_with(&mut self, id: EntityId, local: LocalTransform) {
        let node = self.nodes.entry(id).or_default();
        node.local = local;
        if !self.roots.contains(&id) {
            self.roots.push(id);
        }
    }

    /// Set the parent of an entity. Pass `None` to make it a root.
    pub fn set_parent(&mut self, child: EntityId, parent: Option<EntityId>) {
        // Ensure both exist
        self.nodes.entry(child).or_default();
        if let Some(p) = parent {
            self.nodes.entry(p).or_default();
        }

        // Remove from old parent's children
        if let Some(old_parent) = self.nodes.get(&child).and_then(|n| n.parent) {
            if let Some(old_node) = self.nodes.get_mut(&old_parent) {
                old_node.children.retain(|&c| c != child);
            }
        }

        // Update child's parent
        if let Some(node) = self.nodes.get_mut(&child) {
            node.parent = parent;
        }

        // Add to new parent's children
        if let Some(p) = parent {
            if let Some(parent_node) = self.nodes.get_mut(&p) {
                if !parent_node.children.contains(&child) {
                    parent_node.children.push(child);
                }
            }
            // Remove from roots if it has a parent now
            self.roots.retain(|&r| r != child);
        } else {
            // No parent — add to roots
            if !self.roots.contains(&child) {
                self.roots.push(child);
            }
        }
    }

    /// Set the local transform for an entity.
    pub fn set_local(&mut self, id: EntityId, local: LocalTransform) {
        if let Some(node) = self.nodes.get_mut(&id) {
            node.local = local;
        }
    }

    /// Get the local transform for an entity.
    pub fn get_local(&self, id: EntityId) -> Option<&LocalTransform> {
        self.nodes.get(&id).map(|n| &n.local)
    }

    /// Get the local transform mutably.
    pub fn get_local_mut(&mut self, id: EntityId) -> Option<&mut LocalTransform> {
        self.nodes.get_mut(&id).map(|n| &mut n.local)
    }

    /// Get the parent of an entity.
    pub fn get_parent(&self, id: EntityId) -> Option<EntityId> {
        self.nodes.get(&id).and_then(|n| n.parent)
    }

    /// Get the children of an entity.
    pub fn get_children(&self, id: EntityId) -> Option<&[EntityId]> {
        self.nodes.get(&id).map(|n| n.children.as_slice())
    }

    /// Remove an entity from the hierarchy.
    /// Children become roots (orphaned).
    pub fn remove(&mut self, id: EntityId) {
        if let Some(node) = self.nodes.remove(&id) {
            // Remove from parent's children
            if let Some(parent) = node.parent {
                if let Some(parent_node) = self.nodes.get_mut(&parent) {
                    parent_node.children.retain(|&c| c != id);
                }
            }

            // Orphan children (make them roots)
            for child in node.children {
                if let Some(child_node) = self.nodes.get_mut(&child) {
                    child_node.parent = None;
                }
                if !self.roots.contains(&child) {
                    self.roots.push(child);
                }
            }

            // Remove from roots
            self.roots.retain(|&r| r != id);
        }
    }

    /// Propagate transforms from roots down through the hierarchy.
    /// Reads each root's world transform from its scene entity, then writes
    /// world pos/rotation/scale onto every descendant. Root entities are
    /// never written.
    pub fn propagate(&mut self, scene: &mut Scene) {
        let roots: Vec<EntityId> = self.roots.clone();
        for root in roots {
            let Some((pos, rotation, scale)) =
                scene.get(root).map(|e| (e.pos, e.rotation, e.scale))
            else {
                continue;
            };
            let quat = Quat::from_euler(EulerRot::XYZ, rotation.x, rotation.y, rotation.z);
            let Some(children) = self.nodes.get(&root).map(|n| n.children.clone()) else {
                continue;
            };
            for child in children {
                self.propagate_recursive(child, pos, quat, scale, scene);
            }
        }
    }

    fn propagate_recursive(
        &self,
        id: EntityId,
        parent_pos: Vec3,
        parent_quat: Quat,
        parent_scale: Vec3,
        scene: &mut Scene,
    ) {
        let Some(node) = self.nodes.get(&id) else { return };
        let local = &node.local;

        // Compute world transform: offset rotates with the parent,
        // orientations compose quaternion-first to avoid Euler drift.
        let local_quat = Quat::from_euler(
            EulerRot::XYZ,
            local.rotation.x,
            local.rotation.y,
            local.rotation.z,
        );
        let world_pos = parent_pos + parent_quat * (local.offset * parent_scale);
        let world_quat = parent_quat * local_quat;
        let world_scale = parent_scale * local.scale;

        // Update entity in scene
        if let Some(entity) = scene.get_mut(id) {
            entity.pos = world_pos;
            let (rx, ry, rz) = world_quat.to_euler(EulerRot::XYZ);
            entity.rotation = Vec3::new(rx, ry, rz);
            entity.scale = world_scale;
        }

        // Propagate to children
        let children: Vec<EntityId> = node.children.clone();
        for child in children {
            self.propagate_recursive(child, world_pos, world_quat, world_scale, scene);
        }
    }

    /// Number of entities in the hierarchy.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the hierarchy is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Clear all hierarchy data.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.roots.clear();
    }
}
