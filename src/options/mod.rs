//! Centralized camera options with TOML preset support.
//!
//! All tweakable camera settings (orbit projection and limits, framing
//! heuristics, surface camera) are consolidated here. Options serialize
//! to/from TOML so view presets can be stored next to the host application.

mod camera;
mod framing;
mod surface;

use std::path::Path;

pub use camera::CameraOptions;
pub use framing::FramingOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
pub use surface::SurfaceOptions;

use crate::error::OrreryError;

/// Top-level options container. All sub-structs use `#[serde(default)]` so
/// partial TOML files (e.g. only overriding `[surface]`) work correctly.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, Default, JsonSchema,
)]
#[serde(default)]
pub struct Options {
    /// Orbit camera projection, limits and input sensitivity.
    pub camera: CameraOptions,
    /// Selection framing heuristics.
    pub framing: FramingOptions,
    /// First-person surface camera parameters.
    pub surface: SurfaceOptions,
}

impl Options {
    /// Generate JSON Schema describing the UI-exposed options.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Options)
    }

    /// The JSON Schema rendered as a pretty-printed string, ready to hand
    /// to a settings UI.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::OptionsParse`] if the schema cannot be
    /// serialized.
    pub fn json_schema_string() -> Result<String, OrreryError> {
        serde_json::to_string_pretty(&Self::json_schema())
            .map_err(|e| OrreryError::OptionsParse(e.to_string()))
    }

    /// Parse options from TOML text. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::OptionsParse`] on malformed TOML or
    /// mistyped fields.
    pub fn from_toml_str(content: &str) -> Result<Self, OrreryError> {
        toml::from_str(content)
            .map_err(|e| OrreryError::OptionsParse(e.to_string()))
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::Io`] if the file cannot be read, or
    /// [`OrreryError::OptionsParse`] if its contents do not parse.
    pub fn load(path: &Path) -> Result<Self, OrreryError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`OrreryError::OptionsParse`] if serialization fails, or
    /// [`OrreryError::Io`] if the file or its directory cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), OrreryError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| OrreryError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, content)?;
        Ok(())
    }

    /// List available preset names (TOML file stems) in a directory.
    #[must_use]
    pub fn list_presets(dir: &Path) -> Vec<String> {
        let mut names = Vec::new();
        if let Ok(entries) = std::fs::read_dir(dir) {
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().is_some_and(|ext| ext == "toml") {
                    if let Some(stem) =
                        path.file_stem().and_then(|s| s.to_str())
                    {
                        names.push(stem.to_owned());
                    }
                }
            }
        }
        names.sort();
        names
    }
}
