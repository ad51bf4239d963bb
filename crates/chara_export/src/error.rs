//! Error taxonomy for scene loading and snapshot export
//!
//! Three failure classes exist, with different blast radii:
//! - an unreadable surface is logged and skipped (no error type crosses the
//!   API; a partial snapshot is the contract),
//! - a [`PropertyTypeMismatch`] is confined to one property and mapped to a
//!   sentinel at the document boundary,
//! - an [`ExportError::Io`] aborts the whole export call.

use std::path::PathBuf;

use thiserror::Error;

/// Fatal errors for a single export call
#[derive(Error, Debug)]
pub enum ExportError {
    /// The final snapshot write failed; no partial file is left behind
    #[error("failed to write snapshot to {path}: {source}")]
    Io {
        /// Target path of the failed write
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// A property slot exists under the queried name but holds an incompatible
/// value kind
///
/// Recoverable per property: the document layer substitutes the
/// `<<Wrong Type>>` sentinel instead of aborting the surface or the export.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("property '{name}' holds a {found} value, expected {expected}")]
pub struct PropertyTypeMismatch {
    /// Property slot name
    pub name: String,
    /// Kind the extractor asked for
    pub expected: &'static str,
    /// Kind actually stored in the slot
    pub found: &'static str,
}

/// Errors while loading a scene description or building arenas from it
#[derive(Error, Debug)]
pub enum SceneDescriptionError {
    /// A node references a parent record that does not precede it
    #[error("node {node} references invalid parent index {parent}")]
    InvalidParentIndex {
        /// Index of the offending node record
        node: usize,
        /// Parent index it referenced
        parent: usize,
    },

    /// A surface slot references a material record that does not exist
    #[error("surface '{surface}' references missing material index {material}")]
    InvalidMaterialIndex {
        /// Name of the surface holding the bad slot
        surface: String,
        /// Material index it referenced
        material: usize,
    },

    /// The description contains no node records
    #[error("scene description has no nodes")]
    Empty,

    /// Reading the description file failed
    #[error("failed to read scene description {path}: {source}")]
    Io {
        /// Path of the unreadable file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Parsing the description failed
    #[error("failed to parse scene description: {0}")]
    Parse(String),
}
