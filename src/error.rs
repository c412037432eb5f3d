//! Contains the Error and Result type shared by the binary codec, the SNBT
//! printer and the SNBT parser.
use std::fmt::Display;

use crate::TagType;

/// An error from building, encoding, decoding, printing or parsing a tag tree.
///
/// Every operation in this crate is fail-fast: the first problem found stops
/// the call and is reported here, together with the byte offset into the
/// input where one applies.
#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    msg: String,
    kind: ErrorKind,
    offset: Option<usize>,
}

/// The category of an [`Error`].
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// Unexpected character in SNBT text. Contains a description of what
    /// was expected instead.
    Syntax { expected: String },

    /// Input ran out while a specific terminator was still expected, such as
    /// the `}` closing a compound.
    UnexpectedEndOfInput { expected: String },

    /// A value position in SNBT held nothing, eg `{a:}` or `[1,]`.
    EmptyValue,

    /// The same key appeared twice at one level of an SNBT compound.
    DuplicateKey(String),

    /// An SNBT list mixed element types.
    HeterogeneousList { expected: TagType, found: TagType },

    /// A typed SNBT array (`[B;...]` or `[I;...]`) held an element of the
    /// wrong type.
    ArrayElementType { expected: TagType, found: TagType },

    /// The printer met a tag that has no SNBT form.
    UnsupportedTag(TagType),

    /// Binary input was truncated, carried an invalid type id, or declared a
    /// negative or impossible length.
    MalformedBinary,

    /// A tag was pushed onto a list or array holding a different type.
    TypeMismatch { expected: TagType, found: TagType },

    /// Input nested deeper than the configured maximum.
    DepthLimitExceeded(usize),

    /// Text transport (base64 or hex) could not be decoded.
    Encoding,

    /// Any error from the underlying reader or writer, including the
    /// compression layer.
    Io,
}

/// Convenience type for Result.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Get the kind of error.
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    /// Byte offset into the input where the error was detected, if the error
    /// came from reading input.
    pub fn offset(&self) -> Option<usize> {
        self.offset
    }

    /// Attach the input offset an error was found at, for errors raised by
    /// the tree API while reading input.
    pub(crate) fn at(mut self, offset: usize) -> Self {
        self.msg = format!("{} at {}", self.msg, offset);
        self.offset = Some(offset);
        self
    }

    fn new(kind: ErrorKind, msg: impl Into<String>, offset: Option<usize>) -> Self {
        Self {
            msg: msg.into(),
            kind,
            offset,
        }
    }

    pub(crate) fn syntax(offset: usize, found: impl Display, expected: impl Into<String>) -> Self {
        let expected = expected.into();
        Self::new(
            ErrorKind::Syntax {
                expected: expected.clone(),
            },
            format!("unexpected {} at {}, expecting {}", found, offset, expected),
            Some(offset),
        )
    }

    pub(crate) fn unexpected_end(offset: usize, expected: impl Into<String>) -> Self {
        let expected = expected.into();
        Self::new(
            ErrorKind::UnexpectedEndOfInput {
                expected: expected.clone(),
            },
            format!("unexpected end of input at {}, expecting {}", offset, expected),
            Some(offset),
        )
    }

    pub(crate) fn empty_value(offset: usize) -> Self {
        Self::new(
            ErrorKind::EmptyValue,
            format!("empty value at {}", offset),
            Some(offset),
        )
    }

    pub(crate) fn duplicate_key(key: &str) -> Self {
        Self::new(
            ErrorKind::DuplicateKey(key.to_owned()),
            format!("duplicate key {:?}", key),
            None,
        )
    }

    pub(crate) fn heterogeneous_list(offset: usize, expected: TagType, found: TagType) -> Self {
        Self::new(
            ErrorKind::HeterogeneousList { expected, found },
            format!(
                "list element at {} is {:?}, but the list holds {:?}",
                offset, found, expected
            ),
            Some(offset),
        )
    }

    pub(crate) fn array_element(offset: usize, expected: TagType, found: TagType) -> Self {
        Self::new(
            ErrorKind::ArrayElementType { expected, found },
            format!(
                "array element at {} is {:?}, expected {:?}",
                offset, found, expected
            ),
            Some(offset),
        )
    }

    pub(crate) fn unsupported_tag(tag: TagType) -> Self {
        Self::new(
            ErrorKind::UnsupportedTag(tag),
            format!("{:?} has no SNBT representation", tag),
            None,
        )
    }

    pub(crate) fn malformed(offset: usize, msg: impl Display) -> Self {
        Self::new(
            ErrorKind::MalformedBinary,
            format!("malformed nbt at {}: {}", offset, msg),
            Some(offset),
        )
    }

    /// Encoding problems are reported without an offset, since they describe
    /// the tree rather than any input.
    pub(crate) fn unencodable(msg: impl Display) -> Self {
        Self::new(
            ErrorKind::MalformedBinary,
            format!("cannot encode nbt: {}", msg),
            None,
        )
    }

    pub(crate) fn type_mismatch(expected: TagType, found: TagType) -> Self {
        Self::new(
            ErrorKind::TypeMismatch { expected, found },
            format!("cannot add {:?} to a collection of {:?}", found, expected),
            None,
        )
    }

    pub(crate) fn depth_limit(offset: usize, max: usize) -> Self {
        Self::new(
            ErrorKind::DepthLimitExceeded(max),
            format!("nesting deeper than {} at {}", max, offset),
            Some(offset),
        )
    }

    pub(crate) fn encoding(msg: impl Display) -> Self {
        Self::new(ErrorKind::Encoding, format!("encoding error: {}", msg), None)
    }
}

impl std::error::Error for Error {}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.msg)
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::new(ErrorKind::Io, format!("io error: {}", e), None)
    }
}
