//! The hstore value type
//!
//! An `Hstore` maps string keys to optional string values. A `None` value is
//! the SQL NULL of that key and is distinct from a present empty string.
//!
//! `Hstore` is an ordinary owned map: sharing one across threads for mutation
//! needs external synchronization, the same as any `BTreeMap`.

use serde::{Deserialize, Serialize};
use std::collections::btree_map;
use std::collections::{BTreeMap, HashMap};
use std::fmt;

/// The hstore type of Postgres
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Hstore {
    entries: BTreeMap<String, Option<String>>,
}

impl Hstore {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Create a new Hstore where every value is present
    pub fn from_map<K, V, I>(map: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let entries = map
            .into_iter()
            .map(|(k, v)| (k.into(), Some(v.into())))
            .collect();
        Self { entries }
    }

    /// Check if the key exists, whether or not its value is NULL
    pub fn has(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Define a value for the provided key, `None` storing SQL NULL
    pub fn set(&mut self, key: impl Into<String>, value: Option<String>) {
        self.entries.insert(key.into(), value);
    }

    pub fn set_string(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.entries.insert(key.into(), Some(value.into()));
    }

    /// Value of the key. A missing key and a NULL value both read as `None`,
    /// use [`Hstore::entry_of`] to tell them apart.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).and_then(|v| v.as_deref())
    }

    /// `None` when the key is missing, `Some(None)` when its value is NULL
    pub fn entry_of(&self, key: &str) -> Option<Option<&str>> {
        self.entries.get(key).map(|v| v.as_deref())
    }

    /// Value of the key, or an empty string when the key is missing or NULL
    pub fn get_string(&self, key: &str) -> String {
        self.get(key).unwrap_or_default().to_string()
    }

    /// Delete a key=>value pair, returning the old value if the key existed
    pub fn del(&mut self, key: &str) -> Option<Option<String>> {
        self.entries.remove(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter {
            inner: self.entries.iter(),
        }
    }

    /// Copy every pair of `other` into this hstore, overwriting existing keys
    pub fn merge(&mut self, other: Hstore) {
        self.entries.extend(other.entries);
    }
}

/// Borrowing iterator over `(key, value)` pairs
pub struct Iter<'a> {
    inner: btree_map::Iter<'a, String, Option<String>>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, Option<&'a str>);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(k, v)| (k.as_str(), v.as_deref()))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'a> IntoIterator for &'a Hstore {
    type Item = (&'a str, Option<&'a str>);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Hstore {
    type Item = (String, Option<String>);
    type IntoIter = btree_map::IntoIter<String, Option<String>>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, Option<V>)> for Hstore {
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        let mut hstore = Hstore::new();
        hstore.extend(iter);
        hstore
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, Option<V>)> for Hstore {
    fn extend<I: IntoIterator<Item = (K, Option<V>)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.entries.insert(k.into(), v.map(Into::into));
        }
    }
}

impl From<HashMap<String, String>> for Hstore {
    fn from(map: HashMap<String, String>) -> Self {
        Hstore::from_map(map)
    }
}

impl From<BTreeMap<String, Option<String>>> for Hstore {
    fn from(entries: BTreeMap<String, Option<String>>) -> Self {
        Self { entries }
    }
}

impl From<Hstore> for BTreeMap<String, Option<String>> {
    fn from(hstore: Hstore) -> Self {
        hstore.entries
    }
}

/// Writes the hstore text representation, `"k"=>"v","k2"=>NULL`
impl fmt::Display for Hstore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_get_and_del() {
        let mut hs = Hstore::new();
        hs.set_string("a", "b");
        hs.set("c", None);

        assert!(hs.has("a"));
        assert!(hs.has("c"));
        assert!(!hs.has("missing"));
        assert_eq!(hs.get("a"), Some("b"));
        assert_eq!(hs.get("c"), None);
        assert_eq!(hs.get("missing"), None);
        assert_eq!(hs.entry_of("c"), Some(None));
        assert_eq!(hs.entry_of("missing"), None);
        assert_eq!(hs.get_string("a"), "b");
        assert_eq!(hs.get_string("c"), "");
        assert_eq!(hs.get_string("missing"), "");

        assert_eq!(hs.del("a"), Some(Some("b".to_string())));
        assert!(!hs.has("a"));
        assert_eq!(hs.del("a"), None);
        assert_eq!(hs.len(), 1);
    }

    #[test]
    fn test_equality_ignores_insertion_order() {
        let mut h1 = Hstore::new();
        h1.set_string("x", "1");
        h1.set("y", None);

        let mut h2 = Hstore::new();
        h2.set("y", None);
        h2.set_string("x", "1");

        assert_eq!(h1, h2);
    }

    #[test]
    fn test_equality_distinguishes_null_from_empty() {
        let mut null_value = Hstore::new();
        null_value.set("k", None);

        let mut empty_value = Hstore::new();
        empty_value.set_string("k", "");

        assert_ne!(null_value, empty_value);
        assert_ne!(null_value, Hstore::new());
    }

    #[test]
    fn test_from_map_and_iter() {
        let hs = Hstore::from_map([("a", "1"), ("b", "2")]);
        let pairs: Vec<_> = hs.iter().collect();
        assert_eq!(pairs, vec![("a", Some("1")), ("b", Some("2"))]);
        assert_eq!(hs.keys().collect::<Vec<_>>(), vec!["a", "b"]);
    }

    #[test]
    fn test_collect_with_nulls() {
        let hs: Hstore = vec![("a", Some("1")), ("b", None)].into_iter().collect();
        assert_eq!(hs.entry_of("b"), Some(None));
        assert_eq!(hs.get("a"), Some("1"));
    }

    #[test]
    fn test_merge_overwrites() {
        let mut base = Hstore::from_map([("a", "1"), ("b", "2")]);
        let mut other = Hstore::new();
        other.set("b", None);
        other.set_string("c", "3");

        base.merge(other);
        assert_eq!(base.len(), 3);
        assert_eq!(base.entry_of("b"), Some(None));
        assert_eq!(base.get("c"), Some("3"));
    }

    #[test]
    fn test_display_uses_text_format() {
        let mut hs = Hstore::new();
        hs.set_string("key1", "value1");
        hs.set("key2", None);

        assert_eq!(hs.to_string(), r#""key1"=>"value1","key2"=>NULL"#);
    }
}
