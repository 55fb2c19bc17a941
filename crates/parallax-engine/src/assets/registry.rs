use std::collections::HashMap;
use crate::assets::manifest::TextureManifest;
use crate::components::mesh::TextureSlot;

/// Registry of named textures, built from a TextureManifest.
/// Provides name-based slot lookup for app code; the host binds each
/// decoded image to the same slot index.
pub struct TextureRegistry {
    slots: HashMap<String, TextureSlot>,
}

impl TextureRegistry {
    pub fn new() -> Self {
        Self {
            slots: HashMap::new(),
        }
    }

    /// Build a registry from a parsed TextureManifest.
    /// Slot indices follow manifest order.
    pub fn from_manifest(manifest: &TextureManifest) -> Self {
        let mut slots = HashMap::with_capacity(manifest.textures.len());
        for (index, desc) in manifest.textures.iter().enumerate() {
            slots.insert(desc.name.clone(), TextureSlot(index as u32));
        }
        Self { slots }
    }

    /// Look up a texture slot by name. Returns None if not found.
    pub fn slot(&self, name: &str) -> Option<TextureSlot> {
        self.slots.get(name).copied()
    }

    /// Number of registered textures.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }
}

impl Default for TextureRegistry {
    fn default() -> Self {
        Self::new()
    }
}
