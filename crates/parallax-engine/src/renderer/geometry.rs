use bytemuck::{Pod, Zeroable};
use crate::components::mesh::MeshId;

/// Parametric geometry descriptor. The engine never builds vertex data;
/// the TypeScript renderer tessellates each entry on its side of the
/// SharedArrayBuffer from these parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry {
    /// UV sphere. `segments_w` is the slice count around the equator,
    /// `segments_h` the stack count pole to pole.
    Sphere {
        radius: f32,
        segments_w: u32,
        segments_h: u32,
    },
    /// Flat annulus in the local XY plane.
    Ring {
        inner_radius: f32,
        outer_radius: f32,
        segments: u32,
    },
    /// Donut around the local Z axis.
    Torus {
        radius: f32,
        tube_radius: f32,
        radial_segments: u32,
        tubular_segments: u32,
    },
}

/// Wire form of one registered geometry.
/// Must match the TypeScript mesh table: 8 floats = 32 bytes stride.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, Pod, Zeroable)]
pub struct MeshEntry {
    /// Geometry kind tag (see `KIND_*` consts).
    pub kind: f32,
    /// First size parameter: sphere radius, ring inner radius, torus radius.
    pub p0: f32,
    /// Second size parameter: ring outer radius, torus tube radius.
    pub p1: f32,
    /// Primary segment count.
    pub seg_u: f32,
    /// Secondary segment count.
    pub seg_v: f32,
    pub _pad0: f32,
    pub _pad1: f32,
    pub _pad2: f32,
}

impl MeshEntry {
    pub const FLOATS: usize = 8;
    pub const STRIDE_BYTES: usize = Self::FLOATS * 4;

    pub const KIND_SPHERE: f32 = 0.0;
    pub const KIND_RING: f32 = 1.0;
    pub const KIND_TORUS: f32 = 2.0;

    pub fn from_geometry(geometry: &Geometry) -> Self {
        match *geometry {
            Geometry::Sphere {
                radius,
                segments_w,
                segments_h,
            } => Self {
                kind: Self::KIND_SPHERE,
                p0: radius,
                seg_u: segments_w as f32,
                seg_v: segments_h as f32,
                ..Default::default()
            },
            Geometry::Ring {
                inner_radius,
                outer_radius,
                segments,
            } => Self {
                kind: Self::KIND_RING,
                p0: inner_radius,
                p1: outer_radius,
                seg_u: segments as f32,
                ..Default::default()
            },
            Geometry::Torus {
                radius,
                tube_radius,
                radial_segments,
                tubular_segments,
            } => Self {
                kind: Self::KIND_TORUS,
                p0: radius,
                p1: tube_radius,
                seg_u: radial_segments as f32,
                seg_v: tubular_segments as f32,
                ..Default::default()
            },
        }
    }
}

/// Registry of all geometries an app renders. Registration deduplicates,
/// so entities sharing a shape (the 400 identical star spheres) share one
/// mesh table row.
pub struct MeshRegistry {
    geometries: Vec<Geometry>,
    entries: Vec<MeshEntry>,
}

impl MeshRegistry {
    pub fn new() -> Self {
        Self {
            geometries: Vec::with_capacity(16),
            entries: Vec::with_capacity(16),
        }
    }

    /// Register a geometry and return its handle. Registering an identical
    /// geometry twice returns the existing handle.
    pub fn register(&mut self, geometry: Geometry) -> MeshId {
        if let Some(idx) = self.geometries.iter().position(|g| *g == geometry) {
            return MeshId(idx as u32);
        }
        let id = MeshId(self.geometries.len() as u32);
        self.entries.push(MeshEntry::from_geometry(&geometry));
        self.geometries.push(geometry);
        id
    }

    /// Look up a registered geometry.
    pub fn get(&self, id: MeshId) -> Option<&Geometry> {
        self.geometries.get(id.0 as usize)
    }

    /// Number of distinct geometries registered.
    pub fn len(&self) -> usize {
        self.geometries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.geometries.is_empty()
    }

    /// Raw pointer to the wire entries, for the WASM bridge.
    pub fn entries_ptr(&self) -> *const f32 {
        self.entries.as_ptr() as *const f32
    }

    /// The wire entries as a slice (mostly for tests).
    pub fn entries(&self) -> &[MeshEntry] {
        &self.entries
    }
}

impl Default for MeshRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mesh_entry_is_32_bytes() {
        assert_eq!(std::mem::size_of::<MeshEntry>(), MeshEntry::STRIDE_BYTES);
    }

    #[test]
    fn register_returns_sequential_ids() {
        let mut registry = MeshRegistry::new();
        let a = registry.register(Geometry::Sphere {
            radius: 1.0,
            segments_w: 32,
            segments_h: 32,
        });
        let b = registry.register(Geometry::Ring {
            inner_radius: 2.2,
            outer_radius: 3.8,
            segments: 32,
        });
        assert_eq!(a, MeshId(0));
        assert_eq!(b, MeshId(1));
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn register_dedups_identical_geometry() {
        let mut registry = MeshRegistry::new();
        let star = Geometry::Sphere {
            radius: 0.1,
            segments_w: 24,
            segments_h: 24,
        };
        let a = registry.register(star);
        let b = registry.register(star);
        assert_eq!(a, b);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn spheres_with_different_segments_are_distinct() {
        let mut registry = MeshRegistry::new();
        let a = registry.register(Geometry::Sphere {
            radius: 0.6,
            segments_w: 32,
            segments_h: 16,
        });
        let b = registry.register(Geometry::Sphere {
            radius: 0.6,
            segments_w: 32,
            segments_h: 32,
        });
        assert_ne!(a, b);
    }

    #[test]
    fn wire_entry_carries_geometry_params() {
        let mut registry = MeshRegistry::new();
        registry.register(Geometry::Torus {
            radius: 5.0,
            tube_radius: 1.0,
            radial_segments: 16,
            tubular_segments: 100,
        });
        let entry = registry.entries()[0];
        assert_eq!(entry.kind, MeshEntry::KIND_TORUS);
        assert_eq!(entry.p0, 5.0);
        assert_eq!(entry.p1, 1.0);
        assert_eq!(entry.seg_u, 16.0);
        assert_eq!(entry.seg_v, 100.0);
    }
}
