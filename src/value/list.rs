use std::ops::Deref;

use crate::error::{Error, Result};
use crate::{Tag, TagType};

/// An NBT list. Every element has the same type, which is fixed by the first
/// element pushed.
///
/// ```
/// # use dualnbt::{List, Tag, TagType};
/// let mut list = List::new();
/// list.push(Tag::Int(1)).unwrap();
/// list.push(Tag::Int(2)).unwrap();
///
/// assert_eq!(list.element_type(), Some(TagType::Int));
/// assert!(list.push(Tag::String("x".into())).is_err());
/// assert_eq!(list.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct List {
    items: Vec<Tag>,
}

impl List {
    pub fn new() -> Self {
        Self::default()
    }

    /// The type shared by every element, or `None` for an empty list.
    pub fn element_type(&self) -> Option<TagType> {
        self.items.first().map(Tag::tag_type)
    }

    /// Append a tag. Fails if the list already holds elements of a different
    /// type, in which case the list is left unchanged.
    pub fn push(&mut self, tag: Tag) -> Result<()> {
        if let Some(expected) = self.element_type() {
            let found = tag.tag_type();
            if found != expected {
                return Err(Error::type_mismatch(expected, found));
            }
        }
        self.items.push(tag);
        Ok(())
    }

    pub fn into_inner(self) -> Vec<Tag> {
        self.items
    }
}

// Read access goes through the slice: `len`, `get(i)`, `iter` and friends.
impl Deref for List {
    type Target = [Tag];

    fn deref(&self) -> &Self::Target {
        &self.items
    }
}

impl TryFrom<Vec<Tag>> for List {
    type Error = Error;

    fn try_from(items: Vec<Tag>) -> Result<Self> {
        let mut list = List {
            items: Vec::with_capacity(items.len()),
        };
        for tag in items {
            list.push(tag)?;
        }
        Ok(list)
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Tag;
    type IntoIter = std::slice::Iter<'a, Tag>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
