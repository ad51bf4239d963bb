//! Render surfaces attached to scene nodes

use std::fmt;

use serde::{Deserialize, Serialize};

use super::MaterialKey;

/// How a surface participates in shadow casting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ShadowCastingMode {
    /// No shadows cast
    Off,
    /// Shadows cast from front faces
    #[default]
    On,
    /// Shadows cast from both faces
    TwoSided,
    /// Invisible surface that still casts shadows
    ShadowsOnly,
}

impl fmt::Display for ShadowCastingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Off => "Off",
            Self::On => "On",
            Self::TwoSided => "TwoSided",
            Self::ShadowsOnly => "ShadowsOnly",
        };
        f.write_str(name)
    }
}

/// A drawable component attached to a scene node
#[derive(Debug, Clone)]
pub struct RenderSurface {
    /// Whether the surface is currently enabled
    pub enabled: bool,
    /// Shadow casting behavior
    pub shadow_casting_mode: ShadowCastingMode,
    /// Whether the surface receives shadows
    pub receive_shadows: bool,
    /// Simple surface name
    pub name: String,
    /// Material slots in draw order; `None` models an empty slot and is
    /// skipped by the exporter, never tokenized
    pub materials: Vec<Option<MaterialKey>>,
}

impl RenderSurface {
    /// Create an enabled surface with default shadow settings
    pub fn new(name: impl Into<String>, materials: Vec<Option<MaterialKey>>) -> Self {
        Self {
            enabled: true,
            shadow_casting_mode: ShadowCastingMode::default(),
            receive_shadows: true,
            name: name.into(),
            materials,
        }
    }

    /// Set the enabled flag
    #[must_use]
    pub fn with_enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Set the shadow casting mode
    #[must_use]
    pub fn with_shadow_casting(mut self, mode: ShadowCastingMode) -> Self {
        self.shadow_casting_mode = mode;
        self
    }

    /// Set the receive-shadows flag
    #[must_use]
    pub fn with_receive_shadows(mut self, receive: bool) -> Self {
        self.receive_shadows = receive;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shadow_mode_display() {
        assert_eq!(ShadowCastingMode::Off.to_string(), "Off");
        assert_eq!(ShadowCastingMode::On.to_string(), "On");
        assert_eq!(ShadowCastingMode::TwoSided.to_string(), "TwoSided");
        assert_eq!(ShadowCastingMode::ShadowsOnly.to_string(), "ShadowsOnly");
    }

    #[test]
    fn test_surface_defaults() {
        let surface = RenderSurface::new("o_body", vec![None]);
        assert!(surface.enabled);
        assert!(surface.receive_shadows);
        assert_eq!(surface.shadow_casting_mode, ShadowCastingMode::On);
        assert_eq!(surface.materials.len(), 1);
    }
}
