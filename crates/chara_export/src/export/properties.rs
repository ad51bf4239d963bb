//! Fixed shader property vocabularies and extraction
//!
//! The two vocabularies are an opaque, fixed set of shader parameter names
//! carried over from the character shaders they describe. Extraction is
//! table-driven and per-key fallible: a missing key yields nothing, a key
//! holding the wrong value kind yields a [`PropertyTypeMismatch`] the
//! document layer maps to a sentinel.

use crate::error::PropertyTypeMismatch;
use crate::scene::{Material, PropertyValue};

/// Which value kind a tag table expects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropertyKind {
    /// 4-channel RGBA color
    Color,
    /// Single float
    Float,
}

impl PropertyKind {
    /// Kind name used in mismatch reporting
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Color => "color",
            Self::Float => "float",
        }
    }
}

/// Color-valued slots: texture tints, shadow, specular, and outline colors
const COLOR_TAGS: [&str; 11] = [
    "_Color",
    "_Color2",
    "_Color3",
    "_Color4",
    "_overcolor1",
    "_overcolor2",
    "_overcolor3",
    "_ShadowColor",
    "_SpecularColor",
    "_LineColor",
    "_shadowcolor",
];

/// Float-valued slots: rim lighting, shadow extension, specular shaping,
/// detail-map blends, line controls, highlight and rotation controls
const FLOAT_TAGS: [&str; 21] = [
    "_rimpower",
    "_rimV",
    "_ShadowExtend",
    "_SpecularPower",
    "_DetailNormalMapScale",
    "_linetexon",
    "_tex1mask",
    "_nip",
    "_nipsize",
    "_nip_specular",
    "_notusetexspecular",
    "_DetailBLineG",
    "_DetailRLineR",
    "_ShadowExtendAnother",
    "_SpeclarHeight",
    "_SpecularPowerNail",
    "_exppower",
    "_isHighLight",
    "_rotation",
    "_AnotherRampFull",
    "_LineWidthS",
];

/// The two fixed vocabularies, each sorted once at construction
#[derive(Debug)]
pub struct TagTables {
    colors: Vec<&'static str>,
    floats: Vec<&'static str>,
}

impl TagTables {
    /// Sort both vocabularies; done once per exporter, not per surface
    #[must_use]
    pub fn new() -> Self {
        let mut colors = COLOR_TAGS.to_vec();
        colors.sort_unstable();
        let mut floats = FLOAT_TAGS.to_vec();
        floats.sort_unstable();
        Self { colors, floats }
    }

    /// The sorted table for `kind`
    #[must_use]
    pub fn table(&self, kind: PropertyKind) -> &[&'static str] {
        match kind {
            PropertyKind::Color => &self.colors,
            PropertyKind::Float => &self.floats,
        }
    }
}

impl Default for TagTables {
    fn default() -> Self {
        Self::new()
    }
}

/// One extracted property: the key plus its value or a recoverable mismatch
pub type Extracted = (&'static str, Result<PropertyValue, PropertyTypeMismatch>);

/// Reads known property slots off a material in table order
pub struct PropertyExtractor;

impl PropertyExtractor {
    /// Extract every present key of `kind` from `material`
    ///
    /// Keys the material does not expose produce no entry at all; presence
    /// is data-driven, not fixed-shape.
    #[must_use]
    pub fn extract(material: &Material, tables: &TagTables, kind: PropertyKind) -> Vec<Extracted> {
        tables
            .table(kind)
            .iter()
            .filter_map(|&key| {
                let value = material.property(key)?;
                let result = match (kind, value) {
                    (PropertyKind::Color, PropertyValue::Color(_))
                    | (PropertyKind::Float, PropertyValue::Float(_)) => Ok(*value),
                    _ => Err(PropertyTypeMismatch {
                        name: key.to_string(),
                        expected: kind.name(),
                        found: value.kind(),
                    }),
                };
                Some((key, result))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tables_are_sorted() {
        let tables = TagTables::new();
        for kind in [PropertyKind::Color, PropertyKind::Float] {
            let table = tables.table(kind);
            assert!(table.windows(2).all(|pair| pair[0] < pair[1]));
        }
        assert_eq!(tables.table(PropertyKind::Color).len(), 11);
        assert_eq!(tables.table(PropertyKind::Float).len(), 21);
    }

    #[test]
    fn test_missing_key_produces_no_entry() {
        let tables = TagTables::new();
        let material = Material::new("M", "S").with_float("_rimpower", 0.5);

        let colors = PropertyExtractor::extract(&material, &tables, PropertyKind::Color);
        assert!(colors.is_empty());

        let floats = PropertyExtractor::extract(&material, &tables, PropertyKind::Float);
        assert_eq!(floats.len(), 1);
        assert_eq!(floats[0].0, "_rimpower");
        assert_eq!(floats[0].1, Ok(PropertyValue::Float(0.5)));
    }

    #[test]
    fn test_wrong_kind_produces_mismatch_once() {
        let tables = TagTables::new();
        // `_Color` exists but holds a float: color extraction must report a
        // mismatch, float extraction must not see it at all (unknown key)
        let material = Material::new("M", "S").with_float("_Color", 1.0);

        let colors = PropertyExtractor::extract(&material, &tables, PropertyKind::Color);
        assert_eq!(colors.len(), 1);
        let (key, result) = &colors[0];
        assert_eq!(*key, "_Color");
        let mismatch = result.as_ref().unwrap_err();
        assert_eq!(mismatch.expected, "color");
        assert_eq!(mismatch.found, "float");

        let floats = PropertyExtractor::extract(&material, &tables, PropertyKind::Float);
        assert!(floats.is_empty());
    }

    #[test]
    fn test_extraction_follows_table_order() {
        let tables = TagTables::new();
        let material = Material::new("M", "S")
            .with_color("_overcolor1", [0.0; 4])
            .with_color("_Color", [0.0; 4])
            .with_color("_ShadowColor", [0.0; 4]);

        let keys: Vec<&str> = PropertyExtractor::extract(&material, &tables, PropertyKind::Color)
            .iter()
            .map(|(key, _)| *key)
            .collect();
        assert_eq!(keys, vec!["_Color", "_ShadowColor", "_overcolor1"]);
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let tables = TagTables::new();
        let material = Material::new("M", "S").with_float("_NotInAnyTable", 3.0);

        assert!(PropertyExtractor::extract(&material, &tables, PropertyKind::Float).is_empty());
    }
}
