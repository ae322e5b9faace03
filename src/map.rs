//! Ordered attribute map for entity and segment data.
//!
//! This module provides [`AttrMap`], a wrapper around [`IndexMap`] that maintains
//! insertion order for attribute fields. Entity information and segment
//! qualifiers are loosely-typed key/value bags extracted from markup
//! attributes, and the order they were declared in is part of what a faithful
//! export has to reproduce.
//!
//! ## Why IndexMap?
//!
//! `IndexMap` is used instead of `HashMap` to ensure:
//!
//! - **Deterministic output**: attributes serialize in a consistent order
//! - **Iteration order**: attributes are iterated in insertion order
//! - **Compatibility**: easier testing and debugging with predictable output
//!
//! ## Examples
//!
//! ```rust
//! use ixbrl_context::AttrMap;
//!
//! let mut entity = AttrMap::new();
//! entity.insert("scheme".to_string(), Some("http://www.sec.gov/CIK".to_string()));
//! entity.insert("identifier".to_string(), Some("0000320193".to_string()));
//!
//! assert_eq!(entity.len(), 2);
//! assert_eq!(entity.get_str("identifier"), Some("0000320193"));
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value as JsonValue;
use std::collections::HashMap;

/// An ordered map of string keys to optional string values.
///
/// This is a thin wrapper around [`IndexMap`] that maintains insertion order.
/// It models the untyped attribute bags attached to a context: the entity
/// information (scheme, identifier) and each segment qualifier. A value of
/// `None` records an attribute that was present in the source without any
/// text, which is distinct from the attribute being absent altogether.
///
/// # Examples
///
/// ```rust
/// use ixbrl_context::AttrMap;
///
/// let mut map = AttrMap::new();
/// map.insert("first".to_string(), Some("1".to_string()));
/// map.insert("second".to_string(), None);
///
/// // Iteration maintains insertion order
/// let keys: Vec<_> = map.keys().cloned().collect();
/// assert_eq!(keys, vec!["first", "second"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AttrMap(IndexMap<String, Option<String>>);

impl AttrMap {
    /// Creates an empty `AttrMap`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ixbrl_context::AttrMap;
    ///
    /// let map = AttrMap::new();
    /// assert!(map.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        AttrMap(IndexMap::new())
    }

    /// Creates an empty `AttrMap` with the specified capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        AttrMap(IndexMap::with_capacity(capacity))
    }

    /// Inserts a key-value pair into the map.
    ///
    /// If the map already contained this key, the old value is returned.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ixbrl_context::AttrMap;
    ///
    /// let mut map = AttrMap::new();
    /// assert!(map.insert("key".to_string(), Some("a".to_string())).is_none());
    /// assert!(map.insert("key".to_string(), Some("b".to_string())).is_some());
    /// ```
    pub fn insert(&mut self, key: String, value: Option<String>) -> Option<Option<String>> {
        self.0.insert(key, value)
    }

    /// Returns a reference to the value corresponding to the key.
    ///
    /// The outer `Option` distinguishes "key absent" from the inner
    /// `Option`'s "key present with no value".
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&Option<String>> {
        self.0.get(key)
    }

    /// Returns the string value for a key, flattening absent keys and
    /// valueless attributes to `None`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ixbrl_context::AttrMap;
    ///
    /// let mut map = AttrMap::new();
    /// map.insert("scheme".to_string(), Some("x".to_string()));
    /// map.insert("role".to_string(), None);
    ///
    /// assert_eq!(map.get_str("scheme"), Some("x"));
    /// assert_eq!(map.get_str("role"), None);
    /// assert_eq!(map.get_str("missing"), None);
    /// ```
    #[must_use]
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(|v| v.as_deref())
    }

    /// Returns `true` if the map contains the given key.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Returns the number of entries in the map.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if the map contains no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over the keys of the map, in insertion order.
    pub fn keys(&self) -> indexmap::map::Keys<'_, String, Option<String>> {
        self.0.keys()
    }

    /// Returns an iterator over the values of the map, in insertion order.
    pub fn values(&self) -> indexmap::map::Values<'_, String, Option<String>> {
        self.0.values()
    }

    /// Returns an iterator over the key-value pairs of the map, in insertion order.
    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Option<String>> {
        self.0.iter()
    }

    /// Converts the map into a freshly-allocated JSON object.
    ///
    /// Valueless attributes become JSON `null`. The returned value shares no
    /// storage with the map, so mutating it never affects this map.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use ixbrl_context::AttrMap;
    ///
    /// let mut map = AttrMap::new();
    /// map.insert("dimension".to_string(), Some("Region".to_string()));
    /// map.insert("unit".to_string(), None);
    ///
    /// let json = map.to_json();
    /// assert_eq!(json["dimension"], "Region");
    /// assert!(json["unit"].is_null());
    /// ```
    #[must_use]
    pub fn to_json(&self) -> JsonValue {
        let mut object = serde_json::Map::with_capacity(self.0.len());
        for (key, value) in &self.0 {
            let json = match value {
                Some(text) => JsonValue::String(text.clone()),
                None => JsonValue::Null,
            };
            object.insert(key.clone(), json);
        }
        JsonValue::Object(object)
    }
}

impl Serialize for AttrMap {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for AttrMap {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        IndexMap::deserialize(deserializer).map(AttrMap)
    }
}

impl From<HashMap<String, Option<String>>> for AttrMap {
    fn from(map: HashMap<String, Option<String>>) -> Self {
        AttrMap(map.into_iter().collect())
    }
}

impl From<AttrMap> for HashMap<String, Option<String>> {
    fn from(map: AttrMap) -> Self {
        map.0.into_iter().collect()
    }
}

impl IntoIterator for AttrMap {
    type Item = (String, Option<String>);
    type IntoIter = indexmap::map::IntoIter<String, Option<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a AttrMap {
    type Item = (&'a String, &'a Option<String>);
    type IntoIter = indexmap::map::Iter<'a, String, Option<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl FromIterator<(String, Option<String>)> for AttrMap {
    fn from_iter<T: IntoIterator<Item = (String, Option<String>)>>(iter: T) -> Self {
        AttrMap(IndexMap::from_iter(iter))
    }
}
