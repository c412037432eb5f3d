use std::ops::Range;

use byteorder::{BigEndian, ByteOrder};

use crate::error::{Error, Result};
use crate::TagType;

use super::LengthPrefix;

/// Cursor over a binary payload held wholly in memory. Tracks how far in we
/// are so that errors can report the offset they occurred at.
pub(crate) struct Slice<'de> {
    data: &'de [u8],
    offset: usize,
}

impl<'de> Slice<'de> {
    pub fn new(data: &'de [u8]) -> Self {
        Self { data, offset: 0 }
    }

    pub fn offset(&self) -> usize {
        self.offset
    }

    pub fn remaining(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    fn consume(&mut self, r: Range<usize>) -> Result<&'de [u8]> {
        if r.end <= self.data.len() {
            let ret = &self.data[r.start..r.end];
            self.data = &self.data[r.end..];
            self.offset += r.end;
            Ok(ret)
        } else {
            Err(Error::malformed(
                self.offset,
                format!(
                    "unexpectedly ran out of input, needed {} bytes but {} remain",
                    r.end,
                    self.data.len()
                ),
            ))
        }
    }

    pub fn consume_byte(&mut self) -> Result<u8> {
        Ok(self.consume(0..1)?[0])
    }

    pub fn consume_tag(&mut self) -> Result<TagType> {
        let offset = self.offset;
        let tag = self.consume_byte()?;
        TagType::try_from(tag)
            .map_err(|_| Error::malformed(offset, format!("invalid tag type id {}", tag)))
    }

    pub fn consume_str(&mut self, prefix: LengthPrefix) -> Result<String> {
        let offset = self.offset;
        let len = match prefix {
            LengthPrefix::U16 => self.consume_u16()? as usize,
            LengthPrefix::I32 => self.consume_len(1)?,
        };
        let bytes = self.consume(0..len)?;
        let s = cesu8::from_java_cesu8(bytes).map_err(|_| {
            Error::malformed(
                offset,
                format!("nonunicode string: {}", String::from_utf8_lossy(bytes)),
            )
        })?;
        Ok(s.into_owned())
    }

    /// Consume a signed 32-bit element count, checking that `element_size`
    /// bytes per element could still be present in the input. Doing this
    /// before allocating stops a short payload from claiming a huge array.
    pub fn consume_len(&mut self, element_size: usize) -> Result<usize> {
        let offset = self.offset;
        let size = self.consume_i32()?;
        let len: usize = size
            .try_into()
            .map_err(|_| Error::malformed(offset, format!("negative length {}", size)))?;

        match len.checked_mul(element_size) {
            Some(bytes) if bytes <= self.remaining() => Ok(len),
            _ => Err(Error::malformed(
                offset,
                format!(
                    "length {} exceeds the {} bytes remaining",
                    len,
                    self.remaining()
                ),
            )),
        }
    }

    pub fn consume_i8(&mut self) -> Result<i8> {
        Ok(self.consume_byte()? as i8)
    }

    pub fn consume_u16(&mut self) -> Result<u16> {
        Ok(BigEndian::read_u16(self.consume(0..2)?))
    }

    pub fn consume_i16(&mut self) -> Result<i16> {
        Ok(BigEndian::read_i16(self.consume(0..2)?))
    }

    pub fn consume_i32(&mut self) -> Result<i32> {
        Ok(BigEndian::read_i32(self.consume(0..4)?))
    }

    pub fn consume_i64(&mut self) -> Result<i64> {
        Ok(BigEndian::read_i64(self.consume(0..8)?))
    }

    pub fn consume_f32(&mut self) -> Result<f32> {
        Ok(BigEndian::read_f32(self.consume(0..4)?))
    }

    pub fn consume_f64(&mut self) -> Result<f64> {
        Ok(BigEndian::read_f64(self.consume(0..8)?))
    }

    /// Consume `len` big-endian values of `size` bytes each.
    pub fn consume_array<T>(
        &mut self,
        len: usize,
        size: usize,
        read: impl Fn(&[u8]) -> T,
    ) -> Result<Vec<T>> {
        let bytes = self.consume(0..len * size)?;
        Ok(bytes.chunks_exact(size).map(read).collect())
    }
}
