//! Named aspect ratio registry
//!
//! The names used across the wallpaper workflow (`vertical`, `framework`,
//! `ultrawide`, `hd`, `square`) are defined in `aspect_ratios.toml` and
//! parsed once at first use.

use std::collections::BTreeMap;

use lazy_static::lazy_static;
use log::warn;

use crate::errors::{WallcropError, WallcropResult};
use crate::geometry::AspectRatio;

lazy_static! {
    static ref RATIO_DEFINITIONS: RatioDefinitions = {
        let content = include_str!("../../aspect_ratios.toml");
        RatioDefinitions::from_str(content).unwrap_or_else(|e| {
            warn!("Failed to parse aspect ratio definitions: {}", e);
            RatioDefinitions::default()
        })
    };
}

/// Named ratios and the default set computed by `generate`
#[derive(Debug, Default)]
pub struct RatioDefinitions {
    /// Maps ratio names to ratios
    pub ratios: BTreeMap<String, AspectRatio>,
    /// Ratio names computed when no explicit list is configured
    pub generate_defaults: Vec<String>,
}

impl RatioDefinitions {
    /// Parse ratio definitions from a TOML string
    pub fn from_str(content: &str) -> WallcropResult<Self> {
        let toml_value: toml::Value = content.parse()?;

        let mut defs = RatioDefinitions::default();

        if let Some(table) = toml_value.get("ratios").and_then(|v| v.as_table()) {
            for (name, pair) in table {
                let ratio = Self::parse_pair(pair)
                    .ok_or_else(|| WallcropError::ConfigError(format!("ratio '{}' must be [width, height]", name)))?;
                defs.ratios.insert(name.clone(), ratio);
            }
        }

        if let Some(names) = toml_value
            .get("defaults")
            .and_then(|v| v.get("generate"))
            .and_then(|v| v.as_array())
        {
            for name in names.iter().filter_map(|v| v.as_str()) {
                if !defs.ratios.contains_key(name) {
                    return Err(WallcropError::ConfigError(format!("default ratio '{}' is not defined", name)));
                }
                defs.generate_defaults.push(name.to_string());
            }
        }

        Ok(defs)
    }

    fn parse_pair(value: &toml::Value) -> Option<AspectRatio> {
        let pair = value.as_array()?;
        if pair.len() != 2 {
            return None;
        }
        let width = u32::try_from(pair[0].as_integer()?).ok()?;
        let height = u32::try_from(pair[1].as_integer()?).ok()?;
        AspectRatio::new(width, height).ok()
    }
}

/// Look up a named ratio (case-insensitive)
pub fn lookup(name: &str) -> Option<AspectRatio> {
    RATIO_DEFINITIONS.ratios.get(&name.to_lowercase()).copied()
}

/// All registered names with their ratios, sorted by name
pub fn all() -> Vec<(String, AspectRatio)> {
    RATIO_DEFINITIONS.ratios.iter().map(|(k, v)| (k.clone(), *v)).collect()
}

/// Ratios computed by `generate` when the settings do not override them
pub fn generate_defaults() -> Vec<AspectRatio> {
    RATIO_DEFINITIONS
        .generate_defaults
        .iter()
        .filter_map(|name| lookup(name))
        .collect()
}
