//! Ordered CSS declaration sets.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// An ordered mapping from CSS property name to value.
///
/// Values are opaque: they are kept verbatim and never checked against CSS
/// grammar. Properties keep the order they were first set in, and setting a
/// property again replaces its value without moving it.
///
/// # Example
///
/// ```rust
/// use uno_config::Declarations;
///
/// let decls = Declarations::new()
///     .set("border-color", "var(--color-Sec3Dark)")
///     .set("color", "white");
///
/// assert_eq!(decls.get("color"), Some("white"));
/// assert_eq!(decls.len(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Declarations(IndexMap<String, String>);

impl Declarations {
    /// Creates an empty declaration set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets a property, returning the updated set for chaining.
    pub fn set(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(property, value);
        self
    }

    /// Sets a property in place.
    pub fn insert(&mut self, property: impl Into<String>, value: impl Into<String>) {
        self.0.insert(property.into(), value.into());
    }

    /// Returns the value of a property.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0.get(property).map(String::as_str)
    }

    /// Iterates `(property, value)` pairs in authoring order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Declarations {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for Declarations {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}
