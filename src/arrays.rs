use std::ops::Deref;

use crate::error::{Error, Result};
use crate::{Tag, TagType};

macro_rules! nbt_array {
    ($(#[$doc:meta])* $name:ident, $elem:ty, $variant:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, PartialEq, Default)]
        #[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
        pub struct $name {
            data: Vec<$elem>,
        }

        impl $name {
            pub fn new(data: Vec<$elem>) -> Self {
                Self { data }
            }

            /// Append a tag, which must be a
            #[doc = concat!("`Tag::", stringify!($variant), "`.")]
            pub fn push(&mut self, tag: Tag) -> Result<()> {
                match tag {
                    Tag::$variant(v) => {
                        self.data.push(v);
                        Ok(())
                    }
                    other => Err(Error::type_mismatch(TagType::$variant, other.tag_type())),
                }
            }

            pub fn push_value(&mut self, value: $elem) {
                self.data.push(value);
            }

            pub fn into_inner(self) -> Vec<$elem> {
                self.data
            }
        }

        impl Deref for $name {
            type Target = [$elem];

            fn deref(&self) -> &Self::Target {
                &self.data
            }
        }

        impl From<Vec<$elem>> for $name {
            fn from(data: Vec<$elem>) -> Self {
                Self::new(data)
            }
        }

        impl FromIterator<$elem> for $name {
            fn from_iter<I: IntoIterator<Item = $elem>>(iter: I) -> Self {
                Self::new(iter.into_iter().collect())
            }
        }
    };
}

nbt_array!(
    /// An NBT byte array. Distinct from a [`List`](crate::List) of
    /// `Tag::Byte`, both in SNBT (`[B;1b,2b]`) and in binary.
    ByteArray,
    i8,
    Byte
);

nbt_array!(
    /// An NBT int array, written `[I;1,2,3]` in SNBT.
    IntArray,
    i32,
    Int
);

nbt_array!(
    /// An NBT long array. These exist in the binary format only; printing
    /// one as SNBT fails.
    LongArray,
    i64,
    Long
);
