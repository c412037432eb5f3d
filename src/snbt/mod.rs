//! Stringified NBT (SNBT), the text form of a tag tree.
//!
//! ```
//! use dualnbt::{snbt, Tag};
//!
//! # fn main() -> dualnbt::error::Result<()> {
//! let tag = snbt::from_str("{foo:1,bar:\"hi\",bytes:[B;1b,2b,3b]}")?;
//! let compound = tag.as_compound().unwrap();
//!
//! assert_eq!(compound.get("foo"), Some(&Tag::Int(1)));
//! assert_eq!(compound.keys().collect::<Vec<_>>(), ["foo", "bar", "bytes"]);
//! assert_eq!(snbt::to_string(&tag)?, "{foo:1,bar:\"hi\",bytes:[B;1b,2b,3b]}");
//! # Ok(())
//! # }
//! ```
//!
//! # Grammar
//!
//! ```text
//! value         := quoted_string | compound | list_or_array | literal
//! compound      := '{' [ entry (',' entry)* ] '}'
//! entry         := key ':' value
//! key           := quoted_string | bare_chars_until(':')
//! list_or_array := '[' ('B;' | 'I;')? [ value (',' value)* ] ']'
//! literal       := chars_until(',', '}', ']')
//! ```
//!
//! Strings may be quoted with `"` or `'`, and use JSON escapes. A literal is
//! only given a type once it is complete: if, with any single letter type
//! suffix removed, it is a number, it becomes that number's tag; otherwise it
//! is an unquoted string. Suffixes are case-insensitive.
//!
//! | literal        | tag              |
//! |----------------|------------------|
//! | `1b`           | `Byte(1)`        |
//! | `1s`           | `Short(1)`       |
//! | `1`            | `Int(1)`         |
//! | `1l`           | `Long(1)`        |
//! | `1.5`, `1.5f`, `1e3` | `Float`    |
//! | `1.5d`, `1d`   | `Double`         |
//! | `hello`, `1.2.3` | `String`       |
//!
//! Lists are homogeneous, so `[1,"x"]` is an error rather than being
//! coerced. Repeated keys in a compound are also an error.

mod de;
mod input;
mod literal;
mod ser;

use std::io::Write;

use log::debug;

use crate::error::{Error, Result};
use crate::Tag;

pub use self::de::Parser;

/// Options for parsing SNBT.
#[derive(Debug, Clone)]
pub struct ParseOpts {
    pub(crate) max_depth: usize,
}

impl ParseOpts {
    /// Default options, with a depth limit of 512.
    pub fn new() -> Self {
        Self { max_depth: 512 }
    }

    /// Maximum nesting of lists, arrays and compounds. Deeper input fails
    /// with
    /// [`ErrorKind::DepthLimitExceeded`](crate::error::ErrorKind::DepthLimitExceeded)
    /// rather than overflowing the stack. Defaults to 512.
    pub fn max_depth(mut self, value: usize) -> Self {
        self.max_depth = value;
        self
    }
}

impl Default for ParseOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse SNBT text into a tag.
pub fn from_str(input: &str) -> Result<Tag> {
    from_str_with_opts(input, ParseOpts::new())
}

/// Parse SNBT text into a tag using the given options.
pub fn from_str_with_opts(input: &str, opts: ParseOpts) -> Result<Tag> {
    Parser::new(input, opts).parse()
}

/// Print a tag as canonical SNBT.
///
/// Fails with [`ErrorKind::UnsupportedTag`](crate::error::ErrorKind::UnsupportedTag)
/// if the tree holds a long array.
pub fn to_string(tag: &Tag) -> Result<String> {
    let mut buf = Vec::new();
    to_writer(&mut buf, tag)?;
    // Everything written came from &str or ASCII.
    String::from_utf8(buf).map_err(Error::encoding)
}

/// Print a tag as canonical SNBT into the given writer.
pub fn to_writer<W: Write>(writer: W, tag: &Tag) -> Result<()> {
    ser::Printer::new(writer).print(tag)?;
    debug!("printed {:?} as snbt", tag.tag_type());
    Ok(())
}
