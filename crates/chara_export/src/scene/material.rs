//! Materials and their sparse property slots

use std::collections::HashMap;

/// Value stored in a material property slot
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PropertyValue {
    /// RGBA color channels
    Color([f32; 4]),
    /// Single float parameter
    Float(f32),
}

impl PropertyValue {
    /// Human-readable kind name, used in type-mismatch reporting
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Color(_) => "color",
            Self::Float(_) => "float",
        }
    }
}

/// A shader configuration object with named property slots
///
/// Property presence is sparse and data-driven: a material exposes only the
/// slots it was built with, and the exporter emits only what is present.
#[derive(Debug, Clone)]
pub struct Material {
    /// Material name as authored
    pub name: String,
    /// Name of the shader this material configures
    pub shader_name: String,
    /// Main texture offset (u, v)
    pub texture_offset: [f32; 2],
    /// Main texture scale (u, v)
    pub texture_scale: [f32; 2],
    properties: HashMap<String, PropertyValue>,
}

impl Material {
    /// Create a material with an identity texture transform and no
    /// property slots
    pub fn new(name: impl Into<String>, shader_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            shader_name: shader_name.into(),
            texture_offset: [0.0, 0.0],
            texture_scale: [1.0, 1.0],
            properties: HashMap::new(),
        }
    }

    /// Set the main texture offset
    #[must_use]
    pub fn with_offset(mut self, offset: [f32; 2]) -> Self {
        self.texture_offset = offset;
        self
    }

    /// Set the main texture scale
    #[must_use]
    pub fn with_scale(mut self, scale: [f32; 2]) -> Self {
        self.texture_scale = scale;
        self
    }

    /// Add a color-valued property slot
    #[must_use]
    pub fn with_color(mut self, key: impl Into<String>, rgba: [f32; 4]) -> Self {
        self.properties.insert(key.into(), PropertyValue::Color(rgba));
        self
    }

    /// Add a float-valued property slot
    #[must_use]
    pub fn with_float(mut self, key: impl Into<String>, value: f32) -> Self {
        self.properties.insert(key.into(), PropertyValue::Float(value));
        self
    }

    /// True when the material exposes a slot named `key`, of any kind
    #[must_use]
    pub fn has_property(&self, key: &str) -> bool {
        self.properties.contains_key(key)
    }

    /// Read a property slot
    #[must_use]
    pub fn property(&self, key: &str) -> Option<&PropertyValue> {
        self.properties.get(key)
    }
}
