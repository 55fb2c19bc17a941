/// Handle to a geometry registered in the `MeshRegistry`.
/// The index doubles as the mesh table row the host renderer reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MeshId(pub u32);

/// Handle to a decoded texture on the host side.
/// The index is the texture's position in the manifest order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextureSlot(pub u32);

/// RGB color, linear space. Used as a tint over a texture, or as the
/// whole surface color when no texture is bound.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const WHITE: Color = Color { r: 1.0, g: 1.0, b: 1.0 };

    pub fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// Component for mesh-rendered entities: which geometry to draw and how to
/// surface it. A missing texture is not an error; the entity renders its
/// plain color instead.
#[derive(Debug, Clone, Copy)]
pub struct MeshComponent {
    pub mesh: MeshId,
    /// Host-side texture binding. `None` renders the untextured color.
    pub texture: Option<TextureSlot>,
    pub color: Color,
    /// HDR glow multiplier (default: 0.0, values > 0 push into EDR range).
    pub emissive: f32,
    /// Opacity in [0, 1].
    pub alpha: f32,
    /// Render both faces. Needed for flat geometry viewed from behind,
    /// like a planetary ring seen from below the orbital plane.
    pub double_sided: bool,
}

impl MeshComponent {
    pub fn new(mesh: MeshId) -> Self {
        Self {
            mesh,
            texture: None,
            color: Color::WHITE,
            emissive: 0.0,
            alpha: 1.0,
            double_sided: false,
        }
    }

    pub fn with_texture(mut self, slot: TextureSlot) -> Self {
        self.texture = Some(slot);
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn with_emissive(mut self, emissive: f32) -> Self {
        self.emissive = emissive;
        self
    }

    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_double_sided(mut self) -> Self {
        self.double_sided = true;
        self
    }
}
