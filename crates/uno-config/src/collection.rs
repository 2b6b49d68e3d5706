//! Ordered collections with unique entry names.

use std::collections::HashMap;

use serde::{Serialize, Serializer};

use crate::error::{ConfigError, IdentifierKind};

/// An entry that is identified by name within its collection.
pub trait Named {
    /// The collection kind reported in duplicate identifier errors.
    const KIND: IdentifierKind;

    fn name(&self) -> &str;
}

/// An ordered list whose entries have unique names.
///
/// Entries keep their insertion order, which is the precedence order the
/// external engine sees. Inserting a name that is already present is an
/// error rather than a silent overwrite.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NamedList<T> {
    items: Vec<T>,
    index: HashMap<String, usize>,
}

impl<T: Named> NamedList<T> {
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Appends an entry.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::DuplicateIdentifier`] if an entry with the same
    /// name is already present.
    pub fn push(&mut self, item: T) -> Result<(), ConfigError> {
        if self.index.contains_key(item.name()) {
            return Err(ConfigError::DuplicateIdentifier {
                kind: T::KIND,
                name: item.name().to_string(),
            });
        }
        self.index.insert(item.name().to_string(), self.items.len());
        self.items.push(item);
        Ok(())
    }

    /// Looks up an entry by name.
    pub fn get(&self, name: &str) -> Option<&T> {
        self.index.get(name).map(|&i| &self.items[i])
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the entries in insertion order.
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns the entry names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(Named::name)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl<T: Named> Default for NamedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Named> TryFrom<Vec<T>> for NamedList<T> {
    type Error = ConfigError;

    fn try_from(items: Vec<T>) -> Result<Self, Self::Error> {
        let mut list = Self::new();
        for item in items {
            list.push(item)?;
        }
        Ok(list)
    }
}

impl<T: Serialize> Serialize for NamedList<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.items.serialize(serializer)
    }
}
