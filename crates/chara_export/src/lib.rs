//! # Chara Export
//!
//! Deterministic snapshot exporter for a character's visual composition.
//!
//! The exporter walks a character's scene hierarchy, collects every render
//! surface below a root node, resolves a stable scope label and a
//! collision-resistant document token for each surface and material,
//! deduplicates shared materials by identity, extracts a fixed vocabulary of
//! shader properties, and assembles everything into a structured text
//! document (a trailing-comma JSON dialect).
//!
//! ## Quick Start
//!
//! ```rust
//! use chara_export::prelude::*;
//!
//! let mut scene = Scene::new();
//! let root = scene.add_node("chara_root", None);
//! let slot = scene.add_node("ca_slot00", Some(root));
//! let body = scene.add_node("body", Some(slot));
//!
//! let skin = scene.add_material(
//!     Material::new("MatSkin", "Shader Forge/main_skin")
//!         .with_color("_Color", [1.0, 0.9, 0.85, 1.0])
//!         .with_float("_rimpower", 0.35),
//! );
//! scene.attach_surface(body, RenderSurface::new("o_body", vec![Some(skin)]));
//!
//! let document = Exporter::new().export(&scene, root, "My Character");
//! assert!(document.contains("\"o_body@ca_slot00\""));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions, clippy::similar_names, clippy::too_many_arguments)]

pub mod config;
pub mod error;
pub mod export;
pub mod scene;

pub use config::{ConfigError, ExportConfig};
pub use error::{ExportError, PropertyTypeMismatch, SceneDescriptionError};
pub use export::Exporter;

/// Common imports for exporter users
pub mod prelude {
    pub use crate::{
        config::ExportConfig,
        error::{ExportError, PropertyTypeMismatch, SceneDescriptionError},
        export::{write_snapshot, Exporter},
        scene::{
            Material, MaterialKey, NodeKey, PropertyValue, RenderSurface, Scene,
            SceneDescription, ShadowCastingMode, SurfaceKey,
        },
    };
}
