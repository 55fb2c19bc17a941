// extensions/mod.rs
//
// Optional extension modules for ParallaxEngine.
// These are decoupled from core Entity/Scene — apps opt-in by creating these systems.
//
// Clean architecture: core stays simple, complexity is additive.

pub mod transform;

pub use transform::{TransformGraph, LocalTransform};
