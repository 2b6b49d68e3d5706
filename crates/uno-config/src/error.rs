//! Configuration and shortcut errors.

use std::fmt;
use std::path::PathBuf;

/// The named collection an identifier belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IdentifierKind {
    Rule,
    Shortcut,
}

impl IdentifierKind {
    /// Returns a human-readable name for this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            IdentifierKind::Rule => "rule",
            IdentifierKind::Shortcut => "shortcut",
        }
    }
}

impl fmt::Display for IdentifierKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a configuration document cannot be built, loaded or written.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Two entries of the same collection share a name.
    #[error("duplicate {kind} identifier '{name}'")]
    DuplicateIdentifier { kind: IdentifierKind, name: String },

    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid YAML configuration: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("failed to access '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file extension is none of `.json`, `.yaml` or `.yml`.
    #[error("unsupported configuration format for '{}'", path.display())]
    UnsupportedFormat { path: PathBuf },

    /// A preset identifier cannot be written as a JavaScript call.
    #[error("preset '{0}' is not a valid JavaScript identifier")]
    InvalidPreset(String),

    #[error("failed to render config: {0}")]
    Render(#[from] minijinja::Error),
}

/// Error returned when expanding shortcuts locally.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ShortcutError {
    #[error("shortcut '{name}' is not defined")]
    NotFound { name: String },

    /// A shortcut expands, directly or through others, to itself.
    #[error("cycle detected in shortcuts: {}", path.join(" -> "))]
    CycleDetected { path: Vec<String> },
}
