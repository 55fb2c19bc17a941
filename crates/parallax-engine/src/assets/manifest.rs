use serde::{Deserialize, Serialize};

/// Asset manifest describing all textures for an app.
/// Loaded from a JSON file at runtime. A texture's position in the list is
/// the slot index the host binds its decoded image to.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureManifest {
    /// Ordered texture list.
    pub textures: Vec<TextureDescriptor>,
    /// Optional scene background texture, referenced by name.
    #[serde(default)]
    pub background: Option<String>,
}

/// Describes a single texture.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextureDescriptor {
    /// Human-readable name (e.g., "earth").
    pub name: String,
    /// Relative path to the image file (e.g., "textures/earth.jpg").
    pub path: String,
}

impl TextureManifest {
    /// Parse a manifest from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
