//! Preset references.

use std::fmt;

use serde::{Deserialize, Serialize};

/// An opaque reference to a bundled rule set provided by the engine.
///
/// A preset carries nothing but its identifier, the name under which the
/// engine exports it (e.g. `presetUno`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Preset(String);

impl Preset {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The default utility preset.
    pub fn uno() -> Self {
        Self::new("presetUno")
    }

    pub fn wind() -> Self {
        Self::new("presetWind")
    }

    pub fn mini() -> Self {
        Self::new("presetMini")
    }

    pub fn attributify() -> Self {
        Self::new("presetAttributify")
    }

    pub fn icons() -> Self {
        Self::new("presetIcons")
    }

    pub fn id(&self) -> &str {
        &self.0
    }

    /// Returns `true` if the identifier can be emitted as a JavaScript call.
    pub fn is_js_identifier(&self) -> bool {
        let mut chars = self.0.chars();
        match chars.next() {
            Some(c) if c.is_ascii_alphabetic() || c == '_' || c == '$' => {}
            _ => return false,
        }
        chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '$')
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Preset {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for Preset {
    fn from(id: String) -> Self {
        Self(id)
    }
}
