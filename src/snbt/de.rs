use log::{debug, trace};

use crate::error::{Error, Result};
use crate::{ByteArray, Compound, IntArray, List, Tag, TagType};

use super::input::SliceInput;
use super::literal;
use super::ParseOpts;

/// Recursive descent parser for a single SNBT value.
///
/// A parser is single use: [`Parser::parse`] consumes it. It never backtracks;
/// the only lookahead is the two characters after a `[` that select a typed
/// array.
pub struct Parser<'de> {
    input: SliceInput<'de>,
    opts: ParseOpts,
    depth: usize,
}

impl<'de> Parser<'de> {
    /// Create a parser over `text`. Leading and trailing whitespace is
    /// ignored, but offsets in errors still refer to `text` as given.
    pub fn new(text: &'de str, opts: ParseOpts) -> Self {
        let trimmed = text.trim_start();
        let base = text.len() - trimmed.len();
        Self {
            input: SliceInput::new(trimmed.trim_end(), base),
            opts,
            depth: 0,
        }
    }

    /// Parse the whole input as exactly one value.
    pub fn parse(mut self) -> Result<Tag> {
        let tag = self.parse_value()?;

        self.input.discard_whitespace();
        if let Some(c) = self.input.peek() {
            return Err(Error::syntax(
                self.input.offset(),
                format!("{:?}", c),
                "end of input",
            ));
        }

        debug!(
            "parsed {:?} from {} bytes of snbt",
            tag.tag_type(),
            self.input.offset()
        );
        Ok(tag)
    }

    /// Parse one value, leaving the input just after it.
    fn parse_value(&mut self) -> Result<Tag> {
        self.input.discard_whitespace();

        match self.input.peek() {
            Some(quote @ ('"' | '\'')) => {
                self.input.discard();
                Ok(Tag::String(self.parse_quoted(quote)?))
            }
            Some('{') => Ok(Tag::Compound(self.parse_compound()?)),
            Some('[') => self.parse_list_or_array(),
            _ => self.parse_literal(),
        }
    }

    /// Accumulate everything up to the next terminator and work out what it
    /// is only once it is complete.
    fn parse_literal(&mut self) -> Result<Tag> {
        let start = self.input.offset();
        let raw = self
            .input
            .take_while(|c| !matches!(c, ',' | '}' | ']'))
            .trim_end();
        literal::resolve(raw, start)
    }

    /// Parse the rest of a quoted string, the opening quote having been
    /// consumed. A backslash always takes the next character with it, so
    /// `\"` never closes a string.
    fn parse_quoted(&mut self, quote: char) -> Result<String> {
        let start = self.input.offset();
        let rest = self.input.rest();
        let mut escaped = false;

        loop {
            match self.input.next() {
                None => {
                    return Err(Error::unexpected_end(
                        self.input.offset(),
                        format!("'{}'", quote),
                    ))
                }
                Some('\\') => {
                    escaped = true;
                    if self.input.next().is_none() {
                        return Err(Error::unexpected_end(
                            self.input.offset(),
                            format!("'{}'", quote),
                        ));
                    }
                }
                Some(c) if c == quote => break,
                Some(_) => {}
            }
        }

        let raw = &rest[..self.input.offset() - start - quote.len_utf8()];
        if !escaped {
            return Ok(raw.to_owned());
        }
        unescape(raw, start)
    }

    fn parse_compound(&mut self) -> Result<Compound> {
        self.enter()?;
        self.input.discard(); // {
        let mut compound = Compound::new();

        loop {
            self.input.take_while(|c| c == ',' || c.is_whitespace());

            let key_start = self.input.offset();
            let key = match self.input.peek() {
                None => return Err(Error::unexpected_end(key_start, "'}'")),
                Some('}') => {
                    self.input.discard();
                    self.leave();
                    return Ok(compound);
                }
                Some(quote @ ('"' | '\'')) => {
                    self.input.discard();
                    let key = self.parse_quoted(quote)?;
                    self.input.discard_whitespace();
                    self.expect_colon()?;
                    key
                }
                Some(_) => self.parse_bare_key()?,
            };

            if self.at_end() {
                return Err(Error::unexpected_end(self.input.offset(), "'}'"));
            }

            let value = self.parse_value()?;
            compound
                .insert_new(key, value)
                .map_err(|e| e.at(key_start))?;
        }
    }

    /// A bare key is everything up to the next `:`, which is consumed.
    fn parse_bare_key(&mut self) -> Result<String> {
        let key = self.input.take_while(|c| c != ':');
        if self.input.next().is_none() {
            return Err(Error::unexpected_end(self.input.offset(), "':'"));
        }
        Ok(key.trim().to_owned())
    }

    fn expect_colon(&mut self) -> Result<()> {
        match self.input.peek() {
            Some(':') => {
                self.input.discard();
                Ok(())
            }
            Some(c) => Err(Error::syntax(self.input.offset(), format!("{:?}", c), "':'")),
            None => Err(Error::unexpected_end(self.input.offset(), "':'")),
        }
    }

    fn parse_list_or_array(&mut self) -> Result<Tag> {
        self.enter()?;
        self.input.discard(); // [

        let tag = if self.input.eat_ignore_case("B;") {
            let mut array = ByteArray::default();
            self.parse_elements(|tag, offset| match tag {
                Tag::Byte(b) => {
                    array.push_value(b);
                    Ok(())
                }
                other => Err(Error::array_element(offset, TagType::Byte, other.tag_type())),
            })?;
            Tag::ByteArray(array)
        } else if self.input.eat_ignore_case("I;") {
            let mut array = IntArray::default();
            self.parse_elements(|tag, offset| match tag {
                Tag::Int(i) => {
                    array.push_value(i);
                    Ok(())
                }
                other => Err(Error::array_element(offset, TagType::Int, other.tag_type())),
            })?;
            Tag::IntArray(array)
        } else {
            let mut list = List::new();
            self.parse_elements(|tag, offset| {
                if let Some(expected) = list.element_type() {
                    if tag.tag_type() != expected {
                        return Err(Error::heterogeneous_list(offset, expected, tag.tag_type()));
                    }
                }
                list.push(tag)
            })?;
            Tag::List(list)
        };

        self.leave();
        Ok(tag)
    }

    /// Parse comma separated values up to and including the closing `]`,
    /// handing each to `push` along with the offset it started at.
    fn parse_elements(&mut self, mut push: impl FnMut(Tag, usize) -> Result<()>) -> Result<()> {
        self.input.discard_whitespace();
        if self.input.peek() == Some(']') {
            self.input.discard();
            return Ok(());
        }

        loop {
            self.input.discard_whitespace();
            if self.at_end() {
                return Err(Error::unexpected_end(self.input.offset(), "']'"));
            }

            let offset = self.input.offset();
            let value = self.parse_value()?;
            push(value, offset)?;

            self.input.discard_whitespace();
            let offset = self.input.offset();
            match self.input.next() {
                Some(',') => {}
                Some(']') => return Ok(()),
                Some(c) => return Err(Error::syntax(offset, format!("{:?}", c), "',' or ']'")),
                None => return Err(Error::unexpected_end(offset, "']'")),
            }
        }
    }

    fn at_end(&mut self) -> bool {
        self.input.discard_whitespace();
        self.input.peek().is_none()
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth >= self.opts.max_depth {
            return Err(Error::depth_limit(self.input.offset(), self.opts.max_depth));
        }
        self.depth += 1;
        trace!("entering depth {} at {}", self.depth, self.input.offset());
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }
}

/// Decode the escapes in the body of a quoted string using JSON rules. JSON
/// has no `\'` and no bare `"` inside a string, both of which are fine in
/// SNBT, so those are rewritten first. Raw control characters are kept as
/// they are.
fn unescape(raw: &str, offset: usize) -> Result<String> {
    let mut json = String::with_capacity(raw.len() + 2);
    json.push('"');

    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('\'') => json.push('\''),
                Some(escaped) => {
                    json.push('\\');
                    json.push(escaped);
                }
                // The scanner never ends a string on a lone backslash.
                None => json.push_str("\\\\"),
            },
            '"' => json.push_str("\\\""),
            c if (c as u32) < 0x20 => json.push_str(&format!("\\u{:04x}", c as u32)),
            c => json.push(c),
        }
    }
    json.push('"');

    serde_json::from_str(&json)
        .map_err(|e| Error::syntax(offset, format!("string escape ({})", e), "a JSON escape"))
}
