//! Read-only scene model: node hierarchy, render surfaces, materials
//!
//! The exporter reads this model and never mutates it. Entities live in
//! slotmap arenas whose keys double as identity handles: two surfaces that
//! share a [`MaterialKey`] share the material, and the key itself supplies
//! the run-local identity integer used by the token fallback.

mod arena;
pub mod description;
mod material;
mod surface;

pub use arena::{MaterialKey, NodeKey, Scene, SceneNode, SurfaceKey};
pub use description::SceneDescription;
pub use material::{Material, PropertyValue};
pub use surface::{RenderSurface, ShadowCastingMode};
