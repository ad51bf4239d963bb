//! Declarative scene descriptions
//!
//! The exporter itself reads live arenas; a description is the serialized
//! form the CLI loads (RON) and turns into arenas. Records are
//! topologically ordered: the first node is the root, and every parent or
//! material reference must point at an earlier record, which keeps
//! validation single-pass.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SceneDescriptionError;

use super::{Material, NodeKey, RenderSurface, Scene, ShadowCastingMode};

/// Serialized form of one character's scene
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneDescription {
    /// Node records, parents before children; the first record is the root
    pub nodes: Vec<NodeDescription>,
    /// Material records referenced by surface slots
    #[serde(default)]
    pub materials: Vec<MaterialDescription>,
}

/// One node record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NodeDescription {
    /// Simple node name
    pub name: String,
    /// Index of the parent record; `None` only for the root
    #[serde(default)]
    pub parent: Option<usize>,
    /// Render surface attached to this node, if any
    #[serde(default)]
    pub surface: Option<SurfaceDescription>,
}

/// One render surface record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SurfaceDescription {
    /// Simple surface name
    pub name: String,
    /// Whether the surface is enabled
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Shadow casting behavior
    #[serde(default)]
    pub shadow_casting_mode: ShadowCastingMode,
    /// Whether the surface receives shadows
    #[serde(default = "default_true")]
    pub receive_shadows: bool,
    /// Material slots; `None` models an empty slot
    #[serde(default)]
    pub materials: Vec<Option<usize>>,
}

/// One material record
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialDescription {
    /// Material name as authored
    pub name: String,
    /// Shader name
    pub shader: String,
    /// Main texture offset
    #[serde(default)]
    pub offset: [f32; 2],
    /// Main texture scale
    #[serde(default = "default_scale")]
    pub scale: [f32; 2],
    /// Color-valued property slots
    #[serde(default)]
    pub colors: HashMap<String, [f32; 4]>,
    /// Float-valued property slots
    #[serde(default)]
    pub floats: HashMap<String, f32>,
}

const fn default_true() -> bool {
    true
}

const fn default_scale() -> [f32; 2] {
    [1.0, 1.0]
}

impl SceneDescription {
    /// Load a description from a RON file
    pub fn from_file(path: &Path) -> Result<Self, SceneDescriptionError> {
        let contents = fs::read_to_string(path).map_err(|source| SceneDescriptionError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        ron::from_str(&contents).map_err(|e| SceneDescriptionError::Parse(e.to_string()))
    }

    /// Build arenas from the description
    ///
    /// Returns the scene and the root node key. Fails on an empty node list
    /// or on any parent/material index that breaks the topological-order
    /// contract.
    pub fn build(&self) -> Result<(Scene, NodeKey), SceneDescriptionError> {
        if self.nodes.is_empty() {
            return Err(SceneDescriptionError::Empty);
        }

        let mut scene = Scene::new();

        let material_keys: Vec<_> = self
            .materials
            .iter()
            .map(|record| {
                let mut material = Material::new(record.name.clone(), record.shader.clone())
                    .with_offset(record.offset)
                    .with_scale(record.scale);
                for (key, rgba) in &record.colors {
                    material = material.with_color(key.clone(), *rgba);
                }
                for (key, value) in &record.floats {
                    material = material.with_float(key.clone(), *value);
                }
                scene.add_material(material)
            })
            .collect();

        let mut node_keys: Vec<NodeKey> = Vec::with_capacity(self.nodes.len());
        for (index, record) in self.nodes.iter().enumerate() {
            let parent = match record.parent {
                None if index == 0 => None,
                Some(parent) if parent < index => Some(node_keys[parent]),
                // Roots after the first and forward/self references are
                // both malformed
                None => {
                    return Err(SceneDescriptionError::InvalidParentIndex {
                        node: index,
                        parent: index,
                    })
                }
                Some(parent) => {
                    return Err(SceneDescriptionError::InvalidParentIndex {
                        node: index,
                        parent,
                    })
                }
            };
            let key = scene.add_node(record.name.clone(), parent);
            node_keys.push(key);

            if let Some(surface) = &record.surface {
                let slots = surface
                    .materials
                    .iter()
                    .map(|slot| match slot {
                        None => Ok(None),
                        Some(material) => {
                            material_keys.get(*material).copied().map(Some).ok_or_else(|| {
                                SceneDescriptionError::InvalidMaterialIndex {
                                    surface: surface.name.clone(),
                                    material: *material,
                                }
                            })
                        }
                    })
                    .collect::<Result<Vec<_>, _>>()?;
                scene.attach_surface(
                    key,
                    RenderSurface::new(surface.name.clone(), slots)
                        .with_enabled(surface.enabled)
                        .with_shadow_casting(surface.shadow_casting_mode)
                        .with_receive_shadows(surface.receive_shadows),
                );
            }
        }

        Ok((scene, node_keys[0]))
    }
}
