//! The configuration document handed to the CSS engine.

use serde::ser::SerializeStruct;
use serde::{Deserialize, Serialize, Serializer};

use crate::collection::NamedList;
use crate::declarations::Declarations;
use crate::error::{ConfigError, ShortcutError};
use crate::preset::Preset;
use crate::rule::Rule;
use crate::shortcut::{Shortcut, ShortcutObject};

/// An immutable UnoCSS configuration document.
///
/// Holds three ordered sections: custom rules, activated presets, and
/// shortcuts. Authoring order is preserved everywhere because it decides
/// precedence in the engine. Rule names and shortcut names are each unique
/// within their section; both are checked when the document is built.
///
/// A document is built once, then only read. It is `Send + Sync`, so
/// concurrent readers can share it behind an `Arc` without locking.
///
/// # Example
///
/// ```rust
/// use uno_config::{Preset, UnoConfig};
///
/// let config = UnoConfig::builder()
///     .rule("scrollbar-w-none", [("scrollbar-width", "none")])
///     .preset(Preset::uno())
///     .shortcut("chip", ["inline-flex", "px-2", "scrollbar-w-none"])
///     .build()
///     .unwrap();
///
/// assert_eq!(config.rules()[0].name(), "scrollbar-w-none");
/// assert_eq!(config.presets(), [Preset::uno()]);
/// assert_eq!(config.shortcut("chip").unwrap().expansion(), "inline-flex px-2 scrollbar-w-none");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "DocumentRepr")]
pub struct UnoConfig {
    rules: NamedList<Rule>,
    presets: Vec<Preset>,
    shortcuts: NamedList<Shortcut>,
}

impl UnoConfig {
    /// Creates an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn builder() -> UnoConfigBuilder {
        UnoConfigBuilder::new()
    }

    /// Returns the custom rules in authoring order.
    pub fn rules(&self) -> &[Rule] {
        self.rules.as_slice()
    }

    /// Returns the activated presets in authoring order.
    pub fn presets(&self) -> &[Preset] {
        &self.presets
    }

    /// Returns the shortcuts in authoring order.
    pub fn shortcuts(&self) -> &[Shortcut] {
        self.shortcuts.as_slice()
    }

    pub fn rule(&self, name: &str) -> Option<&Rule> {
        self.rules.get(name)
    }

    pub fn shortcut(&self, name: &str) -> Option<&Shortcut> {
        self.shortcuts.get(name)
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty() && self.presets.is_empty() && self.shortcuts.is_empty()
    }

    /// Expands a shortcut into its flat token list.
    ///
    /// Tokens naming another shortcut of this document are replaced by that
    /// shortcut's expansion, recursively. Every other token, including
    /// variant-prefixed ones such as `hover:btn-hover`, is left for the
    /// engine and passed through verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`ShortcutError::NotFound`] if `name` is not a shortcut, or
    /// [`ShortcutError::CycleDetected`] if expansion loops back on itself.
    pub fn expand_shortcut(&self, name: &str) -> Result<Vec<String>, ShortcutError> {
        let shortcut = self
            .shortcuts
            .get(name)
            .ok_or_else(|| ShortcutError::NotFound {
                name: name.to_string(),
            })?;

        let mut path = vec![shortcut.name().to_string()];
        let mut tokens = Vec::new();
        self.expand_into(shortcut, &mut path, &mut tokens)?;
        Ok(tokens)
    }

    fn expand_into(
        &self,
        shortcut: &Shortcut,
        path: &mut Vec<String>,
        tokens: &mut Vec<String>,
    ) -> Result<(), ShortcutError> {
        for token in shortcut.tokens() {
            let Some(nested) = self.shortcuts.get(token) else {
                tokens.push(token.clone());
                continue;
            };
            if path.contains(token) {
                let mut cycle = path.clone();
                cycle.push(token.clone());
                return Err(ShortcutError::CycleDetected { path: cycle });
            }
            path.push(token.clone());
            self.expand_into(nested, path, tokens)?;
            path.pop();
        }
        Ok(())
    }

    /// Checks that no shortcut expands into itself.
    ///
    /// The engine reports the same problem when it consumes the document;
    /// this allows catching it before handing the document over.
    pub fn check_shortcuts(&self) -> Result<(), ShortcutError> {
        for name in self.shortcuts.names() {
            self.expand_shortcut(name)?;
        }
        Ok(())
    }

    /// Renders the custom rules as a static stylesheet, one rule per line.
    pub fn rules_css(&self) -> String {
        self.rules()
            .iter()
            .map(Rule::to_css)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Serialize for UnoConfig {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut doc = serializer.serialize_struct("UnoConfig", 3)?;
        doc.serialize_field("rules", &self.rules)?;
        doc.serialize_field("presets", &self.presets)?;
        doc.serialize_field("shortcuts", &ShortcutEntries(self.shortcuts()))?;
        doc.end()
    }
}

/// Shortcuts in the engine's list-of-objects form, one entry per object.
struct ShortcutEntries<'a>(&'a [Shortcut]);

impl Serialize for ShortcutEntries<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(self.0.iter().map(ShortcutEntry))
    }
}

struct ShortcutEntry<'a>(&'a Shortcut);

impl Serialize for ShortcutEntry<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_map(std::iter::once((self.0.name(), self.0.expansion())))
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct DocumentRepr {
    #[serde(default)]
    rules: Vec<Rule>,
    #[serde(default)]
    presets: Vec<Preset>,
    #[serde(default)]
    shortcuts: Vec<ShortcutObject>,
}

impl TryFrom<DocumentRepr> for UnoConfig {
    type Error = ConfigError;

    fn try_from(doc: DocumentRepr) -> Result<Self, Self::Error> {
        let mut builder = UnoConfigBuilder::new().presets(doc.presets);
        for rule in doc.rules {
            builder = builder.push_rule(rule);
        }
        for (name, expansion) in doc.shortcuts.into_iter().flat_map(|obj| obj.0) {
            builder = builder.push_shortcut(expansion.into_shortcut(name));
        }
        builder.build()
    }
}

/// Collects document entries in authoring order.
///
/// Entries are only checked for duplicates by [`build`](Self::build), so a
/// builder chain never fails halfway.
#[derive(Debug, Clone, Default)]
pub struct UnoConfigBuilder {
    rules: Vec<Rule>,
    presets: Vec<Preset>,
    shortcuts: Vec<Shortcut>,
}

impl UnoConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a rule mapping `name` to a declaration set.
    pub fn rule(self, name: impl Into<String>, declarations: impl Into<Declarations>) -> Self {
        self.push_rule(Rule::new(name, declarations))
    }

    pub fn push_rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn preset(mut self, preset: impl Into<Preset>) -> Self {
        self.presets.push(preset.into());
        self
    }

    pub fn presets<I, P>(mut self, presets: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Preset>,
    {
        self.presets.extend(presets.into_iter().map(Into::into));
        self
    }

    /// Adds a shortcut expanding `name` to `tokens`, in order.
    pub fn shortcut<I, S>(self, name: impl Into<String>, tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.push_shortcut(Shortcut::new(name, tokens))
    }

    pub fn push_shortcut(mut self, shortcut: Shortcut) -> Self {
        self.shortcuts.push(shortcut);
        self
    }

    /// Builds the document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateIdentifier`] for the first rule or
    /// shortcut whose name was already used in its section.
    pub fn build(self) -> Result<UnoConfig, ConfigError> {
        let config = UnoConfig {
            rules: NamedList::try_from(self.rules)?,
            presets: self.presets,
            shortcuts: NamedList::try_from(self.shortcuts)?,
        };
        tracing::debug!(
            rules = config.rules.len(),
            presets = config.presets.len(),
            shortcuts = config.shortcuts.len(),
            "built uno config"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IdentifierKind;

    fn sample() -> UnoConfig {
        UnoConfig::builder()
            .rule("white-space-nowrap", [("white-space", "nowrap")])
            .rule("color-default", [("color", "var(--color-fg-default)")])
            .preset(Preset::uno())
            .shortcut("btn-base", ["inline-flex", "white-space-nowrap"])
            .shortcut("btn", ["btn-base", "color-default", "hover:underline"])
            .build()
            .unwrap()
    }

    #[test]
    fn test_empty_builder_builds_empty_document() {
        let config = UnoConfig::builder().build().unwrap();
        assert!(config.is_empty());
        assert!(config.rules().is_empty());
        assert!(config.presets().is_empty());
        assert!(config.shortcuts().is_empty());
        assert_eq!(config, UnoConfig::new());
    }

    #[test]
    fn test_duplicate_rule_fails() {
        let err = UnoConfig::builder()
            .rule("a", [("color", "red")])
            .rule("a", [("color", "blue")])
            .build()
            .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::DuplicateIdentifier { kind: IdentifierKind::Rule, .. }
        ));
        assert!(err.to_string().contains("duplicate rule identifier 'a'"));
    }

    #[test]
    fn test_duplicate_shortcut_fails() {
        let err = UnoConfig::builder()
            .shortcut("btn", ["a"])
            .shortcut("btn", ["b"])
            .build()
            .unwrap_err();

        assert!(matches!(
            err,
            ConfigError::DuplicateIdentifier { kind: IdentifierKind::Shortcut, .. }
        ));
    }

    #[test]
    fn test_rule_and_shortcut_may_share_a_name() {
        let config = UnoConfig::builder()
            .rule("card", [("padding", "1rem")])
            .shortcut("card", ["p-4"])
            .build()
            .unwrap();

        assert!(config.rule("card").is_some());
        assert!(config.shortcut("card").is_some());
    }

    #[test]
    fn test_duplicate_presets_are_kept() {
        let config = UnoConfig::builder()
            .preset(Preset::uno())
            .preset(Preset::uno())
            .build()
            .unwrap();
        assert_eq!(config.presets().len(), 2);
    }

    #[test]
    fn test_accessors_are_stable() {
        let config = sample();
        assert_eq!(config.rules(), config.rules());
        assert_eq!(config.shortcuts(), config.shortcuts());

        let names: Vec<&str> = config.rules().iter().map(Rule::name).collect();
        assert_eq!(names, vec!["white-space-nowrap", "color-default"]);
    }

    #[test]
    fn test_expand_shortcut_flattens_nested() {
        let tokens = sample().expand_shortcut("btn").unwrap();
        assert_eq!(
            tokens,
            vec![
                "inline-flex",
                "white-space-nowrap",
                "color-default",
                "hover:underline"
            ]
        );
    }

    #[test]
    fn test_expand_shortcut_not_found() {
        let err = sample().expand_shortcut("missing").unwrap_err();
        assert_eq!(
            err,
            ShortcutError::NotFound {
                name: "missing".to_string()
            }
        );
    }

    #[test]
    fn test_expand_shortcut_detects_cycle() {
        let config = UnoConfig::builder()
            .shortcut("a", ["p-1", "b"])
            .shortcut("b", ["c"])
            .shortcut("c", ["a"])
            .build()
            .unwrap();

        let err = config.expand_shortcut("a").unwrap_err();
        assert_eq!(
            err,
            ShortcutError::CycleDetected {
                path: vec!["a".into(), "b".into(), "c".into(), "a".into()]
            }
        );
        assert!(config.check_shortcuts().is_err());
    }

    #[test]
    fn test_expand_shortcut_allows_repeated_non_cyclic_reference() {
        let config = UnoConfig::builder()
            .shortcut("pad", ["p-2"])
            .shortcut("box", ["pad", "border", "pad"])
            .build()
            .unwrap();

        assert_eq!(
            config.expand_shortcut("box").unwrap(),
            vec!["p-2", "border", "p-2"]
        );
        assert!(config.check_shortcuts().is_ok());
    }

    #[test]
    fn test_rules_css() {
        assert_eq!(
            sample().rules_css(),
            ".white-space-nowrap{white-space:nowrap;}\n\
             .color-default{color:var(--color-fg-default);}"
        );
    }

    #[test]
    fn test_serialize_shortcuts_as_single_entry_objects() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(
            json["shortcuts"],
            serde_json::json!([
                { "btn-base": "inline-flex white-space-nowrap" },
                { "btn": "btn-base color-default hover:underline" }
            ])
        );
        assert_eq!(json["presets"], serde_json::json!(["presetUno"]));
    }

    #[test]
    fn test_deserialize_multi_entry_shortcut_object() {
        let json = r#"{
            "shortcuts": [
                { "a": "p-1 m-1", "b": ["flex", "gap-2"] },
                { "c": "a b" }
            ]
        }"#;
        let config: UnoConfig = serde_json::from_str(json).unwrap();

        let names: Vec<&str> = config.shortcuts().iter().map(Shortcut::name).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
        assert_eq!(config.shortcut("b").unwrap().expansion(), "flex gap-2");
    }

    #[test]
    fn test_deserialize_duplicate_fails() {
        let json = r#"{ "shortcuts": [{ "a": "p-1" }, { "a": "p-2" }] }"#;
        let err = serde_json::from_str::<UnoConfig>(json).unwrap_err();
        assert!(err.to_string().contains("duplicate shortcut identifier 'a'"));
    }

    #[test]
    fn test_deserialize_duplicate_key_in_one_object_fails() {
        let json = r#"{ "shortcuts": [{ "a": "p-1", "a": "p-2" }] }"#;
        let err = serde_json::from_str::<UnoConfig>(json).unwrap_err();
        assert!(err.to_string().contains("duplicate shortcut identifier 'a'"));
    }

    #[test]
    fn test_builder_shortcut_normalizes_tokens() {
        let config = UnoConfig::builder()
            .shortcut("btn-base", ["p-2"])
            .shortcut("btn", ["btn-base px-2", "", "border"])
            .build()
            .unwrap();

        assert_eq!(config.shortcut("btn").unwrap().expansion(), "btn-base px-2 border");
        assert_eq!(
            config.expand_shortcut("btn").unwrap(),
            vec!["p-2", "px-2", "border"]
        );

        let json = serde_json::to_string(&config).unwrap();
        assert_eq!(serde_json::from_str::<UnoConfig>(&json).unwrap(), config);
    }

    #[test]
    fn test_deserialize_unknown_field_fails() {
        let err = serde_json::from_str::<UnoConfig>(r#"{ "rule": [] }"#).unwrap_err();
        assert!(err.to_string().contains("rule"));
    }

    #[test]
    fn test_config_is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<UnoConfig>();
    }
}
