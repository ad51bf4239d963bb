//! Snapshot export pipeline
//!
//! Orchestrates the whole export: depth-first surface traversal, parent and
//! token resolution, material dedup, property extraction, document assembly,
//! and the final all-or-nothing write. One export call is synchronous,
//! single-threaded, and carries no state into the next call.

mod dedup;
mod document;
mod parent;
mod properties;
mod token;

pub use dedup::MaterialDeduplicator;
pub use document::{DocumentBuilder, WRONG_TYPE_SENTINEL};
pub use parent::ParentResolver;
pub use properties::{Extracted, PropertyExtractor, PropertyKind, TagTables};
pub use token::TokenResolver;

use std::fs;
use std::path::Path;

use crate::error::ExportError;
use crate::scene::{Material, NodeKey, PropertyValue, Scene};

/// Drives one snapshot export over a scene
///
/// Holds only the sorted tag tables; all per-run state (dedup set, document
/// buffers) is created fresh inside [`Exporter::export`].
pub struct Exporter {
    tables: TagTables,
}

impl Exporter {
    /// Create an exporter; the tag tables are sorted once here
    #[must_use]
    pub fn new() -> Self {
        Self {
            tables: TagTables::new(),
        }
    }

    /// Export every render surface under `root` into a snapshot document
    ///
    /// Unreadable surfaces are logged and skipped; the export always
    /// produces a document, possibly with empty `render`/`mats` sections.
    #[must_use]
    pub fn export(&self, scene: &Scene, root: NodeKey, display_name: &str) -> String {
        let mut render = DocumentBuilder::new();
        let mut mats = DocumentBuilder::new();
        let mut dedup = MaterialDeduplicator::new();

        render.open_category("render");
        mats.open_category("mats");

        for (node, surface_key) in scene.surfaces_under(root) {
            let Some(surface) = scene.surface(surface_key) else {
                let owner = scene.node(node).map_or("<node=null>", |n| n.name.as_str());
                log::warn!("skipping unreadable surface on node '{owner}'");
                continue;
            };

            let parent_label = ParentResolver::resolve(scene, node);
            let surface_token = TokenResolver::token(
                &surface.name,
                &parent_label,
                Scene::surface_identity(surface_key),
            );

            render.open_entry(&surface_token);
            render.string_field("enabled", document::format_bool(surface.enabled));
            render.string_field("shadows", surface.shadow_casting_mode);
            render.string_field("receive", document::format_bool(surface.receive_shadows));
            render.string_field("render", &surface.name);
            render.string_field("parent", &parent_label);
            render.open_list("mat");

            // Null slots are skipped outright, never tokenized
            for material_key in surface.materials.iter().copied().flatten() {
                let Some(material) = scene.material(material_key) else {
                    continue;
                };
                // Materials resolve their scope from the owning surface
                let material_token = TokenResolver::token(
                    &material.name,
                    &parent_label,
                    Scene::material_identity(material_key),
                );
                render.list_item(&material_token);

                // First writer wins: a shared material keeps the token and
                // scope of whichever surface reached it first
                if dedup.should_emit(&material_token) {
                    self.emit_material(&mut mats, &material_token, material);
                } else {
                    log::debug!("material '{material_token}' already emitted");
                }
            }

            render.close_list();
            render.close_entry();
        }

        render.close_category();
        mats.close_category();

        assemble(display_name, render, mats)
    }

    /// Emit one full `mats` entry: transform, names, then the color and
    /// float vocabularies in sorted table order
    fn emit_material(&self, mats: &mut DocumentBuilder, token: &str, material: &Material) {
        mats.open_entry(token);
        mats.string_field("offset", document::format_vec2(material.texture_offset));
        mats.string_field("scale", document::format_vec2(material.texture_scale));
        mats.string_field("token", &material.name);
        mats.string_field("shader", &material.shader_name);

        for kind in [PropertyKind::Color, PropertyKind::Float] {
            for (key, result) in PropertyExtractor::extract(material, &self.tables, kind) {
                match result {
                    Ok(PropertyValue::Color(rgba)) => {
                        mats.raw_field(key, document::format_color(rgba));
                    }
                    Ok(PropertyValue::Float(value)) => {
                        mats.raw_field(key, document::format_float(value));
                    }
                    Err(mismatch) => {
                        log::debug!("{mismatch}");
                        mats.raw_field(key, WRONG_TYPE_SENTINEL);
                    }
                }
            }
        }

        mats.close_entry();
    }
}

impl Default for Exporter {
    fn default() -> Self {
        Self::new()
    }
}

/// Concatenate meta, render, and mats sections inside the document envelope
fn assemble(display_name: &str, render: DocumentBuilder, mats: DocumentBuilder) -> String {
    let mut doc = DocumentBuilder::new();
    doc.open_document();
    doc.open_category("meta");
    doc.string_field("name", display_name);
    doc.close_category();
    doc.push_section(render);
    doc.push_section(mats);
    doc.close_document();
    doc.finish()
}

/// Write `document` to `path`, overwriting any existing file
///
/// All-or-nothing: the text lands in a sibling temp file first and is
/// renamed over the target, so a failed write never leaves a partial
/// snapshot behind. Failure is fatal for the export call; no retry.
pub fn write_snapshot(document: &str, path: &Path) -> Result<(), ExportError> {
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, document).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    fs::rename(&tmp, path).map_err(|source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("wrote snapshot to {}", path.display());
    Ok(())
}
