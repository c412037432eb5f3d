use std::io::Write;

use crate::error::{Error, Result};
use crate::{Tag, TagType};

/// Write `v` as a JSON style double quoted string. Only `"`, `\` and control
/// characters are escaped; everything else, including non-ASCII text and
/// `/`, is written as is.
pub(crate) fn write_escaped_str<W: Write>(mut writer: W, v: &str) -> Result<()> {
    writer.write_all(b"\"")?;
    let bytes = v.as_bytes();
    let mut start = 0;
    for (i, &byte) in bytes.iter().enumerate() {
        let escape: &[u8] = match byte {
            b'"' => b"\\\"",
            b'\\' => b"\\\\",
            b'\n' => b"\\n",
            b'\r' => b"\\r",
            b'\t' => b"\\t",
            0x08 => b"\\b",
            0x0c => b"\\f",
            0x00..=0x1f => b"",
            _ => continue,
        };
        if start < i {
            writer.write_all(v[start..i].as_bytes())?;
        }
        if escape.is_empty() {
            write!(writer, "\\u{:04x}", byte)?;
        } else {
            writer.write_all(escape)?;
        }
        start = i + 1;
    }
    if start != bytes.len() {
        writer.write_all(v[start..].as_bytes())?;
    }
    Ok(writer.write_all(b"\"")?)
}

/// Keys made only of these characters are written without quotes.
fn is_bare_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'+' | b'-'))
}

pub(crate) struct Printer<W> {
    writer: W,
}

impl<W: Write> Printer<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    pub fn print(&mut self, tag: &Tag) -> Result<()> {
        match tag {
            Tag::Byte(v) => self.write_int(*v, "b"),
            Tag::Short(v) => self.write_int(*v, "s"),
            Tag::Int(v) => self.write_int(*v, ""),
            Tag::Long(v) => self.write_int(*v, "l"),
            Tag::Float(v) => self.write_float(*v, "f"),
            Tag::Double(v) => self.write_float(*v, "d"),
            Tag::String(v) => write_escaped_str(&mut self.writer, v),
            Tag::Compound(compound) => {
                self.writer.write_all(b"{")?;
                for (i, (key, value)) in compound.iter().enumerate() {
                    if i != 0 {
                        self.writer.write_all(b",")?;
                    }
                    if is_bare_key(key) {
                        self.writer.write_all(key.as_bytes())?;
                    } else {
                        write_escaped_str(&mut self.writer, key)?;
                    }
                    self.writer.write_all(b":")?;
                    self.print(value)?;
                }
                Ok(self.writer.write_all(b"}")?)
            }
            Tag::List(list) => {
                self.writer.write_all(b"[")?;
                for (i, element) in list.iter().enumerate() {
                    if i != 0 {
                        self.writer.write_all(b",")?;
                    }
                    self.print(element)?;
                }
                Ok(self.writer.write_all(b"]")?)
            }
            Tag::ByteArray(array) => {
                self.writer.write_all(b"[B;")?;
                for (i, v) in array.iter().enumerate() {
                    if i != 0 {
                        self.writer.write_all(b",")?;
                    }
                    self.write_int(*v, "b")?;
                }
                Ok(self.writer.write_all(b"]")?)
            }
            Tag::IntArray(array) => {
                self.writer.write_all(b"[I;")?;
                for (i, v) in array.iter().enumerate() {
                    if i != 0 {
                        self.writer.write_all(b",")?;
                    }
                    self.write_int(*v, "")?;
                }
                Ok(self.writer.write_all(b"]")?)
            }
            Tag::LongArray(_) => Err(Error::unsupported_tag(TagType::LongArray)),
        }
    }

    fn write_int<I: itoa::Integer>(&mut self, v: I, suffix: &str) -> Result<()> {
        let mut buffer = itoa::Buffer::new();
        self.writer.write_all(buffer.format(v).as_bytes())?;
        Ok(self.writer.write_all(suffix.as_bytes())?)
    }

    fn write_float<F: ryu::Float>(&mut self, v: F, suffix: &str) -> Result<()> {
        let mut buffer = ryu::Buffer::new();
        self.writer.write_all(buffer.format(v).as_bytes())?;
        Ok(self.writer.write_all(suffix.as_bytes())?)
    }
}
