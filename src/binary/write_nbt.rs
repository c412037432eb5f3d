use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};

use crate::error::{Error, Result};
use crate::TagType;

use super::LengthPrefix;

pub(crate) trait WriteNbt: Write {
    fn write_tag(&mut self, tag: TagType) -> Result<()> {
        self.write_u8(tag.into())?;
        Ok(())
    }

    fn write_size_prefixed_str(&mut self, s: &str, prefix: LengthPrefix) -> Result<()> {
        let s = cesu8::to_java_cesu8(s);
        match prefix {
            LengthPrefix::U16 => {
                let len: u16 = s.len().try_into().map_err(|_| {
                    Error::unencodable(format!(
                        "string of {} bytes is too long for a 16-bit length",
                        s.len()
                    ))
                })?;
                self.write_u16::<BigEndian>(len)?;
            }
            LengthPrefix::I32 => self.write_len(s.len())?,
        }
        self.write_all(&s)?;
        Ok(())
    }

    fn write_len(&mut self, len: usize) -> Result<()> {
        self.write_i32::<BigEndian>(
            len.try_into()
                .map_err(|_| Error::unencodable(format!("len {} too large", len)))?,
        )?;

        Ok(())
    }
}

impl<T> WriteNbt for T where T: Write {}
