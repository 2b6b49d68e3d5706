//! Shortcut class compositions.

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};

use crate::collection::Named;
use crate::error::IdentifierKind;

/// A class name that expands to an ordered sequence of other classes.
///
/// Tokens never contain whitespace: every token given to [`Shortcut::new`]
/// is split on ASCII whitespace and empty tokens are dropped.
///
/// Token order is significant: when two tokens set the same property, the
/// engine lets the later one win.
///
/// # Example
///
/// ```rust
/// use uno_config::Shortcut;
///
/// let card = Shortcut::new("card", ["p-4", "rounded", "hover:shadow"]);
/// assert_eq!(card.expansion(), "p-4 rounded hover:shadow");
///
/// let parsed = Shortcut::parse("card", "p-4   rounded\thover:shadow");
/// assert_eq!(parsed, card);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shortcut {
    name: String,
    tokens: Vec<String>,
}

impl Shortcut {
    pub fn new<I, S>(name: impl Into<String>, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens = tokens
            .into_iter()
            .flat_map(|token| {
                let token: String = token.into();
                token
                    .split_ascii_whitespace()
                    .map(str::to_owned)
                    .collect::<Vec<_>>()
            })
            .collect();
        Self {
            name: name.into(),
            tokens,
        }
    }

    /// Builds a shortcut from a whitespace-separated expansion string.
    pub fn parse(name: impl Into<String>, expansion: &str) -> Self {
        Self::new(name, [expansion])
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the expansion tokens in authoring order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Returns the expansion joined by single spaces, as handed to the engine.
    pub fn expansion(&self) -> String {
        self.tokens.join(" ")
    }
}

impl Named for Shortcut {
    const KIND: IdentifierKind = IdentifierKind::Shortcut;

    fn name(&self) -> &str {
        &self.name
    }
}

/// An expansion as written in a configuration file.
///
/// Files may spell an expansion either as one string or as a token array.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum ExpansionRepr {
    Joined(String),
    Tokens(Vec<String>),
}

/// One shortcut object from a configuration file, entries in file order.
///
/// Repeated keys are kept rather than collapsed, so the document builder
/// reports them as duplicate identifiers.
#[derive(Debug, Clone)]
pub(crate) struct ShortcutObject(pub(crate) Vec<(String, ExpansionRepr)>);

impl<'de> Deserialize<'de> for ShortcutObject {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ObjectVisitor;

        impl<'de> Visitor<'de> for ObjectVisitor {
            type Value = ShortcutObject;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of shortcut names to expansions")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(map.size_hint().unwrap_or(0).min(64));
                while let Some(entry) = map.next_entry::<String, ExpansionRepr>()? {
                    entries.push(entry);
                }
                Ok(ShortcutObject(entries))
            }
        }

        deserializer.deserialize_map(ObjectVisitor)
    }
}

impl ExpansionRepr {
    pub(crate) fn into_shortcut(self, name: String) -> Shortcut {
        match self {
            ExpansionRepr::Joined(s) => Shortcut::parse(name, &s),
            ExpansionRepr::Tokens(tokens) => Shortcut::new(name, tokens),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortcut_expansion_joins_with_single_space() {
        let s = Shortcut::new("btn", ["relative", "font-normal", "hover:btn-hover"]);
        assert_eq!(s.expansion(), "relative font-normal hover:btn-hover");
    }

    #[test]
    fn test_shortcut_parse_collapses_whitespace() {
        let s = Shortcut::parse("btn", "  relative \n font-normal  ");
        assert_eq!(s.tokens(), ["relative", "font-normal"]);
    }

    #[test]
    fn test_shortcut_new_splits_tokens_with_whitespace() {
        let s = Shortcut::new("x", ["a b", "", "c", " \t "]);
        assert_eq!(s.tokens(), ["a", "b", "c"]);
        assert_eq!(s.expansion(), "a b c");
        assert_eq!(s, Shortcut::parse("x", &s.expansion()));
    }

    #[test]
    fn test_shortcut_object_keeps_repeated_keys() {
        let obj: ShortcutObject = serde_json::from_str(r#"{"a": "p-1", "a": "p-2"}"#).unwrap();
        let names: Vec<&str> = obj.0.iter().map(|(name, _)| name.as_str()).collect();
        assert_eq!(names, vec!["a", "a"]);
    }

    #[test]
    fn test_shortcut_empty_expansion() {
        let s = Shortcut::parse("empty", "");
        assert!(s.tokens().is_empty());
        assert_eq!(s.expansion(), "");
    }

    #[test]
    fn test_expansion_repr_accepts_string_and_array() {
        let joined: ExpansionRepr = serde_json::from_str(r#""a b""#).unwrap();
        let tokens: ExpansionRepr = serde_json::from_str(r#"["a", "b"]"#).unwrap();

        assert_eq!(
            joined.into_shortcut("x".into()),
            tokens.into_shortcut("x".into())
        );
    }
}
