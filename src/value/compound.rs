use indexmap::IndexMap;

use crate::error::{Error, Result};
use crate::Tag;

/// An NBT compound: named tags, kept in insertion order, with unique keys.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Compound {
    entries: IndexMap<String, Tag>,
}

impl Compound {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Tag> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut Tag> {
        self.entries.get_mut(key)
    }

    /// Set `key` to `tag`, returning the previous value if there was one. An
    /// overwritten key keeps its original position.
    pub fn set(&mut self, key: impl Into<String>, tag: Tag) -> Option<Tag> {
        self.entries.insert(key.into(), tag)
    }

    /// Insert a key that must not already be present. On a duplicate the
    /// compound is left unchanged.
    pub fn insert_new(&mut self, key: impl Into<String>, tag: Tag) -> Result<()> {
        use indexmap::map::Entry;

        match self.entries.entry(key.into()) {
            Entry::Occupied(e) => Err(Error::duplicate_key(e.key())),
            Entry::Vacant(e) => {
                e.insert(tag);
                Ok(())
            }
        }
    }

    /// Remove `key`, keeping the order of the remaining entries.
    pub fn remove(&mut self, key: &str) -> Option<Tag> {
        self.entries.shift_remove(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Tag)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, Tag)> for Compound {
    /// Later entries overwrite earlier ones with the same key, as with
    /// [`Compound::set`].
    fn from_iter<I: IntoIterator<Item = (K, Tag)>>(iter: I) -> Self {
        let mut c = Compound::new();
        for (k, v) in iter {
            c.set(k, v);
        }
        c
    }
}
