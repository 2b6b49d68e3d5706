//! Loading and saving documents as JSON or YAML.
//!
//! Both formats share the shape of the engine's config object:
//!
//! ```yaml
//! rules:
//!   - [scrollbar-w-none, { scrollbar-width: none }]
//! presets: [presetUno]
//! shortcuts:
//!   - btn: relative font-normal hover:btn-hover
//! ```
//!
//! Every section is optional. Loading goes through the document builder, so
//! duplicate names are rejected here as well.

use std::fs;
use std::path::Path;

use crate::config::UnoConfig;
use crate::error::ConfigError;

/// On-disk representation of a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Picks the format from a file extension (`.json`, `.yaml`, `.yml`).
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "json" => Some(Format::Json),
            "yaml" | "yml" => Some(Format::Yaml),
            _ => None,
        }
    }

    pub fn parse(self, source: &str) -> Result<UnoConfig, ConfigError> {
        match self {
            Format::Json => from_json_str(source),
            Format::Yaml => from_yaml_str(source),
        }
    }

    pub fn render(self, config: &UnoConfig) -> Result<String, ConfigError> {
        match self {
            Format::Json => to_json_string(config),
            Format::Yaml => to_yaml_string(config),
        }
    }
}

pub fn from_json_str(source: &str) -> Result<UnoConfig, ConfigError> {
    Ok(serde_json::from_str(source)?)
}

pub fn from_yaml_str(source: &str) -> Result<UnoConfig, ConfigError> {
    Ok(serde_yaml::from_str(source)?)
}

/// Serializes a document as pretty-printed JSON.
pub fn to_json_string(config: &UnoConfig) -> Result<String, ConfigError> {
    Ok(serde_json::to_string_pretty(config)?)
}

pub fn to_yaml_string(config: &UnoConfig) -> Result<String, ConfigError> {
    Ok(serde_yaml::to_string(config)?)
}

/// Loads a document from a file, choosing the format by extension.
///
/// # Errors
///
/// Returns [`ConfigError::UnsupportedFormat`] for unknown extensions,
/// [`ConfigError::Io`] if the file cannot be read, and a parse or duplicate
/// identifier error if its content is not a valid document.
pub fn load(path: impl AsRef<Path>) -> Result<UnoConfig, ConfigError> {
    let path = path.as_ref();
    let format = Format::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::debug!(path = %path.display(), ?format, "loading uno config");
    format.parse(&source)
}

/// Writes a document to a file, choosing the format by extension.
pub fn save(config: &UnoConfig, path: impl AsRef<Path>) -> Result<(), ConfigError> {
    let path = path.as_ref();
    let format = Format::from_path(path).ok_or_else(|| ConfigError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;
    let content = format.render(config)?;

    tracing::debug!(path = %path.display(), ?format, "saving uno config");
    fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}
