// SPDX-License-Identifier: MIT OR Apache-2.0

//! Hierarchical configuration namespace.
//!
//! This module provides [`ConfigNode`], a namespace of named decoded values
//! and nested namespaces built recursively from a JSON object. Nodes are
//! built once at load time and read-only afterward.

use crate::domain::decode::decode;
use crate::domain::errors::{ConfigError, Result};
use crate::domain::literal::Literal;
use std::collections::BTreeMap;

/// One entry in a configuration namespace.
///
/// A key maps either to a decoded literal value or to a nested namespace,
/// mirroring the one-level-of-nesting-per-section shape of the file format.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigEntry {
    /// A decoded literal value.
    Value(Literal),
    /// A nested namespace.
    Node(ConfigNode),
}

impl ConfigEntry {
    /// Returns the literal if this entry is a value.
    pub fn as_value(&self) -> Option<&Literal> {
        match self {
            ConfigEntry::Value(value) => Some(value),
            ConfigEntry::Node(_) => None,
        }
    }

    /// Returns the nested node if this entry is a namespace.
    pub fn as_node(&self) -> Option<&ConfigNode> {
        match self {
            ConfigEntry::Node(node) => Some(node),
            ConfigEntry::Value(_) => None,
        }
    }
}

/// A namespace of decoded configuration values and nested namespaces.
///
/// `ConfigNode` is built recursively from a JSON object: object values become
/// nested nodes, string values are decoded as literal expressions. Lookup of
/// an unknown key fails with [`ConfigError::KeyNotFound`]; there is no
/// default-value mechanism.
///
/// # Examples
///
/// ```
/// use litcfg::domain::node::ConfigNode;
///
/// let object = serde_json::json!({"a": "'x'", "b": {"c": "1"}});
/// let node = ConfigNode::from_object(object.as_object().unwrap()).unwrap();
///
/// assert_eq!(node.value("a").unwrap().as_str(), Some("x"));
/// assert_eq!(node.node("b").unwrap().value("c").unwrap().as_i64(), Some(1));
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigNode {
    entries: BTreeMap<String, ConfigEntry>,
}

impl ConfigNode {
    /// Creates an empty namespace.
    pub fn new() -> Self {
        ConfigNode {
            entries: BTreeMap::new(),
        }
    }

    /// Builds a namespace from a JSON object, recursively.
    ///
    /// Object values become nested nodes; string values are decoded through
    /// the literal decoder. Any other JSON value type fails with
    /// [`ConfigError::UnsupportedValue`], since the documented file format
    /// only carries literal strings and section objects.
    pub fn from_object(object: &serde_json::Map<String, serde_json::Value>) -> Result<Self> {
        let mut entries = BTreeMap::new();
        for (key, value) in object {
            let entry = match value {
                serde_json::Value::Object(nested) => {
                    ConfigEntry::Node(ConfigNode::from_object(nested)?)
                }
                serde_json::Value::String(literal) => ConfigEntry::Value(decode(literal)?),
                _ => {
                    return Err(ConfigError::UnsupportedValue { key: key.clone() });
                }
            };
            entries.insert(key.clone(), entry);
        }
        Ok(ConfigNode { entries })
    }

    /// Retrieves the entry for a key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::KeyNotFound`] when the key is absent.
    pub fn entry(&self, key: &str) -> Result<&ConfigEntry> {
        self.entries
            .get(key)
            .ok_or_else(|| ConfigError::KeyNotFound {
                key: key.to_string(),
            })
    }

    /// Retrieves the literal value for a key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::KeyNotFound`] when the key is absent or names a
    /// nested namespace rather than a value.
    pub fn value(&self, key: &str) -> Result<&Literal> {
        self.entry(key)?
            .as_value()
            .ok_or_else(|| ConfigError::KeyNotFound {
                key: key.to_string(),
            })
    }

    /// Retrieves the nested namespace for a key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::KeyNotFound`] when the key is absent or names a
    /// plain value rather than a namespace.
    pub fn node(&self, key: &str) -> Result<&ConfigNode> {
        self.entry(key)?
            .as_node()
            .ok_or_else(|| ConfigError::KeyNotFound {
                key: key.to_string(),
            })
    }

    /// Returns `true` if the namespace contains the key.
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Returns an iterator over the keys of this namespace.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(|k| k.as_str())
    }

    /// Returns an iterator over the key/entry pairs of this namespace.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ConfigEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Returns a one-level snapshot of the namespace.
    pub fn entries(&self) -> &BTreeMap<String, ConfigEntry> {
        &self.entries
    }

    /// Returns the number of entries in this namespace.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the namespace has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
