//! The big-endian binary NBT encoding.
//!
//! Each node is written as a one byte type id, a name (for the root and for
//! children of a compound only), and its payload:
//!
//! * scalars as fixed-width big-endian numbers,
//! * strings as a signed 32-bit byte length (or, with [`LengthPrefix::U16`],
//!   an unsigned 16-bit one) followed by Java modified UTF-8 bytes,
//! * arrays as a signed 32-bit element count followed by the elements,
//! * lists as the element type id, a signed 32-bit count, then unnamed
//!   payloads,
//! * compounds as a run of named children closed by a lone `End` byte.
//!
//! ```
//! use dualnbt::{binary, Compound, Root, Tag};
//!
//! # fn main() -> dualnbt::error::Result<()> {
//! let mut level = Compound::new();
//! level.set("SpawnX", Tag::Int(10));
//!
//! let root = Root::new("", Tag::Compound(level));
//! let bytes = binary::encode(&root)?;
//! assert_eq!(binary::decode(&bytes)?, root);
//! # Ok(())
//! # }
//! ```
//!
//! Decoding is fail-fast. Unknown type ids, truncated input and negative or
//! impossible lengths are all reported as
//! [`ErrorKind::MalformedBinary`](crate::error::ErrorKind::MalformedBinary)
//! along with the offset they were found at.

mod de;
mod input;
mod ser;
mod write_nbt;

use std::io::{Read, Write};

use crate::error::Result;
use crate::Root;

/// How the length of a string is written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LengthPrefix {
    /// Signed 32-bit length, matching the length of arrays and lists. The
    /// default.
    #[default]
    I32,
    /// Unsigned 16-bit length, the layout of Java Edition files and server
    /// software.
    U16,
}

/// Options for decoding binary NBT.
#[derive(Debug, Clone)]
pub struct DeOpts {
    pub(crate) max_depth: usize,
    pub(crate) max_seq_len: usize,
    pub(crate) string_prefix: LengthPrefix,
}

impl DeOpts {
    /// Default options: a depth limit of 512, no sequence length limit and
    /// 32-bit string lengths.
    pub fn new() -> Self {
        Self {
            max_depth: 512,
            max_seq_len: usize::MAX,
            string_prefix: LengthPrefix::I32,
        }
    }

    /// Maximum nesting of lists and compounds. Deeper input fails with
    /// [`ErrorKind::DepthLimitExceeded`](crate::error::ErrorKind::DepthLimitExceeded)
    /// rather than overflowing the stack. Defaults to 512.
    pub fn max_depth(mut self, value: usize) -> Self {
        self.max_depth = value;
        self
    }

    /// Maximum number of elements in any list or array. Defaults to
    /// unlimited, though lengths are always checked against the remaining
    /// input.
    pub fn max_seq_len(mut self, value: usize) -> Self {
        self.max_seq_len = value;
        self
    }

    /// How string lengths are read. Must match how the payload was written.
    pub fn string_prefix(mut self, value: LengthPrefix) -> Self {
        self.string_prefix = value;
        self
    }
}

impl Default for DeOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Options for encoding binary NBT.
#[derive(Debug, Clone, Default)]
pub struct SerOpts {
    pub(crate) string_prefix: LengthPrefix,
}

impl SerOpts {
    /// Default options, writing 32-bit string lengths.
    pub fn new() -> Self {
        Self::default()
    }

    /// How string lengths are written.
    pub fn string_prefix(mut self, value: LengthPrefix) -> Self {
        self.string_prefix = value;
        self
    }
}

/// Encode `root` into a new buffer.
pub fn encode(root: &Root) -> Result<Vec<u8>> {
    encode_with_opts(root, SerOpts::new())
}

/// Encode `root` into a new buffer using the given options.
pub fn encode_with_opts(root: &Root, opts: SerOpts) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    to_writer_with_opts(&mut buf, root, opts)?;
    Ok(buf)
}

/// Encode `root` into the given writer.
pub fn to_writer<W: Write>(writer: W, root: &Root) -> Result<()> {
    to_writer_with_opts(writer, root, SerOpts::new())
}

/// Encode `root` into the given writer using the given options.
pub fn to_writer_with_opts<W: Write>(writer: W, root: &Root, opts: SerOpts) -> Result<()> {
    ser::Encoder::new(writer, opts).encode_root(root)
}

/// Decode a complete payload. The payload must contain exactly one root.
pub fn decode(input: &[u8]) -> Result<Root> {
    decode_with_opts(input, DeOpts::new())
}

/// Decode a complete payload using the given options.
pub fn decode_with_opts(input: &[u8], opts: DeOpts) -> Result<Root> {
    de::Decoder::new(input, opts).decode_root()
}

/// Read the reader to its end and decode what it held.
pub fn from_reader<R: Read>(mut reader: R) -> Result<Root> {
    let mut buf = Vec::new();
    reader.read_to_end(&mut buf)?;
    decode(&buf)
}
