//! dualnbt reads and writes NBT tag trees in both of their common forms: the
//! compact big-endian binary encoding used by *Minecraft* and its servers, and
//! the human-editable stringified form, SNBT.
//!
//! * For the tree itself see [`Tag`], [`Compound`] and [`List`].
//! * For the binary encoding see [`binary`], or [`from_bytes`] and
//!   [`to_bytes`].
//! * For SNBT see [`snbt`], or [`from_snbt`] and [`to_snbt`].
//! * For gzip, base64 and hex wrappers of the binary form see [`transport`].
//!
//! ```toml
//! [dependencies]
//! dualnbt = "0.1"
//! ```
//!
//! # Quick example
//!
//! Parse some SNBT, change it, and write it back out in both forms.
//!
//! ```
//! use dualnbt::{Root, Tag};
//!
//! # fn main() -> dualnbt::error::Result<()> {
//! let mut tag = dualnbt::from_snbt(r#"{name:"Steve",Health:20.0f,Pos:[1.5d,64.0d,-3.25d]}"#)?;
//!
//! if let Tag::Compound(player) = &mut tag {
//!     player.set("Health", Tag::Float(12.5));
//! }
//!
//! assert_eq!(
//!     dualnbt::to_snbt(&tag)?,
//!     r#"{name:"Steve",Health:12.5f,Pos:[1.5d,64.0d,-3.25d]}"#
//! );
//!
//! let bytes = dualnbt::to_bytes(&Root::new("", tag.clone()))?;
//! assert_eq!(dualnbt::from_bytes(&bytes)?.tag, tag);
//! # Ok(())
//! # }
//! ```
//!
//! # SNBT literal types
//!
//! Numbers in SNBT carry their type in a suffix: `1b` is a `Byte`, `1s` a
//! `Short`, `1` an `Int`, `1l` a `Long`, `1.0f` a `Float` and `1.0d` a
//! `Double`. A number with a decimal point or exponent and no suffix is a
//! `Float`, not a `Double`. Anything that is not a number is an unquoted
//! string.
//!
//! Parsing is strict: lists must be homogeneous, typed arrays (`[B;...]`,
//! `[I;...]`) must only hold their element type, and a compound may not
//! repeat a key. Long arrays have no SNBT form.

pub mod binary;
pub mod error;
pub mod snbt;
#[cfg(feature = "transport")]
pub mod transport;

mod arrays;
mod value;

pub use arrays::*;
pub use value::*;

#[cfg(test)]
mod test;

use error::Result;

/// The type id of an NBT tag. This does not carry the value or the name of
/// the data.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "arbitrary1", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum TagType {
    /// Represents the end of a Compound object.
    End = 0,
    /// Equivalent to i8.
    Byte = 1,
    /// Equivalent to i16.
    Short = 2,
    /// Equivalent to i32.
    Int = 3,
    /// Equivalent to i64
    Long = 4,
    /// Equivalent to f32.
    Float = 5,
    /// Equivalent to f64.
    Double = 6,
    /// Represents as array of Byte (i8).
    ByteArray = 7,
    /// Represents a Unicode string.
    String = 8,
    /// Represents a list of other objects, all of the same type.
    List = 9,
    /// Represents a struct-like structure.
    Compound = 10,
    /// Represents as array of Int (i32).
    IntArray = 11,
    /// Represents as array of Long (i64). Binary only.
    LongArray = 12,
}

// Crates exist to generate this code for us, but would add to our compile
// times, so we instead write it out manually, the tags will very rarely change
// so isn't a massive burden.
impl TryFrom<u8> for TagType {
    type Error = ();

    fn try_from(value: u8) -> std::result::Result<Self, ()> {
        use TagType::*;
        Ok(match value {
            0 => End,
            1 => Byte,
            2 => Short,
            3 => Int,
            4 => Long,
            5 => Float,
            6 => Double,
            7 => ByteArray,
            8 => String,
            9 => List,
            10 => Compound,
            11 => IntArray,
            12 => LongArray,
            13..=u8::MAX => return Err(()),
        })
    }
}

impl From<TagType> for u8 {
    fn from(tag: TagType) -> Self {
        tag as u8
    }
}

/// Decode a binary NBT payload into its root. See [`binary::decode`].
pub fn from_bytes(input: &[u8]) -> Result<Root> {
    binary::decode(input)
}

/// Encode a root into a binary NBT payload. See [`binary::encode`].
pub fn to_bytes(root: &Root) -> Result<Vec<u8>> {
    binary::encode(root)
}

/// Parse SNBT text into a tag. See [`snbt::from_str`].
pub fn from_snbt(input: &str) -> Result<Tag> {
    snbt::from_str(input)
}

/// Print a tag as canonical SNBT. See [`snbt::to_string`].
pub fn to_snbt(tag: &Tag) -> Result<String> {
    snbt::to_string(tag)
}
