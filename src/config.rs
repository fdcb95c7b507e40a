use crate::units::types::{DisplayUnit, QuantityKind};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    // Default-unit hint per kind for unit-less numbers
    #[serde(default)]
    pub defaults: DefaultUnits,

    // Document field name -> quantity kind
    #[serde(default)]
    pub fields: HashMap<String, QuantityKind>,

    // Preferred display per kind
    #[serde(default)]
    pub display: DisplayPreferences,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DefaultUnits {
    pub length: Option<String>,
    pub force: Option<String>,
    pub moment: Option<String>,
    pub force_per_length: Option<String>,
    pub force_per_area: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DisplayPreferences {
    pub length: Option<DisplayUnit>,
    pub force: Option<DisplayUnit>,
    pub moment: Option<DisplayUnit>,
    pub force_per_length: Option<DisplayUnit>,
    pub force_per_area: Option<DisplayUnit>,
}

impl Config {
    pub fn load_from_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn default_unit(&self, kind: QuantityKind) -> Option<&str> {
        let defaults = &self.defaults;
        match kind {
            QuantityKind::Length => defaults.length.as_deref(),
            QuantityKind::Force => defaults.force.as_deref(),
            QuantityKind::Moment => defaults.moment.as_deref(),
            QuantityKind::ForcePerLength => defaults.force_per_length.as_deref(),
            QuantityKind::ForcePerArea => defaults.force_per_area.as_deref(),
        }
    }

    pub fn kind_for_field(&self, field: &str) -> Option<QuantityKind> {
        self.fields.get(field).copied()
    }

    /// Configured display for the kind, or the kind's default display.
    /// A configured display of another kind is ignored.
    pub fn display_for(&self, kind: QuantityKind) -> DisplayUnit {
        let display = &self.display;
        let preferred = match kind {
            QuantityKind::Length => display.length,
            QuantityKind::Force => display.force,
            QuantityKind::Moment => display.moment,
            QuantityKind::ForcePerLength => display.force_per_length,
            QuantityKind::ForcePerArea => display.force_per_area,
        };
        preferred
            .filter(|unit| unit.kind() == kind)
            .unwrap_or_else(|| DisplayUnit::default_for(kind))
    }
}
