use byteorder::{BigEndian, ByteOrder};
use log::{debug, trace};

use crate::error::{Error, Result};
use crate::{ByteArray, Compound, IntArray, List, LongArray, Root, Tag, TagType};

use super::input::Slice;
use super::{DeOpts, LengthPrefix};

pub(crate) struct Decoder<'de> {
    input: Slice<'de>,
    opts: DeOpts,
    depth: usize,
}

impl<'de> Decoder<'de> {
    pub fn new(data: &'de [u8], opts: DeOpts) -> Self {
        Self {
            input: Slice::new(data),
            opts,
            depth: 0,
        }
    }

    pub fn decode_root(mut self) -> Result<Root> {
        let offset = self.input.offset();
        let tag = self.input.consume_tag()?;
        if tag == TagType::End {
            return Err(Error::malformed(offset, "root tag cannot be End"));
        }

        let name = self.input.consume_str(self.opts.string_prefix)?;
        let tag = self.decode_payload(tag)?;

        if !self.input.is_empty() {
            return Err(Error::malformed(
                self.input.offset(),
                format!("{} trailing bytes after root", self.input.remaining()),
            ));
        }

        debug!(
            "decoded {:?} root {:?} from {} bytes",
            tag.tag_type(),
            name,
            self.input.offset()
        );
        Ok(Root { name, tag })
    }

    fn decode_payload(&mut self, tag: TagType) -> Result<Tag> {
        Ok(match tag {
            TagType::Byte => Tag::Byte(self.input.consume_i8()?),
            TagType::Short => Tag::Short(self.input.consume_i16()?),
            TagType::Int => Tag::Int(self.input.consume_i32()?),
            TagType::Long => Tag::Long(self.input.consume_i64()?),
            TagType::Float => Tag::Float(self.input.consume_f32()?),
            TagType::Double => Tag::Double(self.input.consume_f64()?),
            TagType::String => Tag::String(self.input.consume_str(self.opts.string_prefix)?),
            TagType::ByteArray => {
                let len = self.consume_seq_len(1)?;
                let data = self.input.consume_array(len, 1, |b| b[0] as i8)?;
                Tag::ByteArray(ByteArray::new(data))
            }
            TagType::IntArray => {
                let len = self.consume_seq_len(4)?;
                let data = self.input.consume_array(len, 4, BigEndian::read_i32)?;
                Tag::IntArray(IntArray::new(data))
            }
            TagType::LongArray => {
                let len = self.consume_seq_len(8)?;
                let data = self.input.consume_array(len, 8, BigEndian::read_i64)?;
                Tag::LongArray(LongArray::new(data))
            }
            TagType::List => {
                self.enter()?;
                let list = self.decode_list()?;
                self.depth -= 1;
                Tag::List(list)
            }
            TagType::Compound => {
                self.enter()?;
                let compound = self.decode_compound()?;
                self.depth -= 1;
                Tag::Compound(compound)
            }
            // Only reachable as a list element type, which decode_list
            // rejects unless the list is empty.
            TagType::End => {
                return Err(Error::malformed(
                    self.input.offset(),
                    "unexpected end tag, was expecting payload of a value",
                ))
            }
        })
    }

    fn decode_list(&mut self) -> Result<List> {
        let offset = self.input.offset();
        let element = self.input.consume_tag()?;
        let len = self.consume_seq_len(min_payload_size(element, self.opts.string_prefix))?;

        // Some writers store empty lists as a 'list of end'. A non-empty one
        // would be a list of payload-less values, which is never valid.
        if element == TagType::End && len != 0 {
            return Err(Error::malformed(offset, format!("list of {} End tags", len)));
        }

        trace!("list of {} {:?} at {}", len, element, offset);

        let mut items = Vec::with_capacity(len);
        for _ in 0..len {
            items.push(self.decode_payload(element)?);
        }
        // Every element was decoded as `element`, so this cannot fail.
        List::try_from(items).map_err(|e| e.at(offset))
    }

    fn decode_compound(&mut self) -> Result<Compound> {
        let mut compound = Compound::new();
        loop {
            let tag = self.input.consume_tag()?;
            if tag == TagType::End {
                return Ok(compound);
            }

            let offset = self.input.offset();
            let name = self.input.consume_str(self.opts.string_prefix)?;
            let value = self.decode_payload(tag)?;
            compound
                .insert_new(name, value)
                .map_err(|e| Error::malformed(offset, e))?;
        }
    }

    fn consume_seq_len(&mut self, element_size: usize) -> Result<usize> {
        let offset = self.input.offset();
        let len = self.input.consume_len(element_size)?;
        if len > self.opts.max_seq_len {
            return Err(Error::malformed(
                offset,
                format!(
                    "size ({}) greater than max sequence length ({})",
                    len, self.opts.max_seq_len
                ),
            ));
        }
        Ok(len)
    }

    fn enter(&mut self) -> Result<()> {
        if self.depth >= self.opts.max_depth {
            return Err(Error::depth_limit(self.input.offset(), self.opts.max_depth));
        }
        self.depth += 1;
        Ok(())
    }
}

/// The fewest bytes a payload of the given type can occupy.
fn min_payload_size(tag: TagType, prefix: LengthPrefix) -> usize {
    match tag {
        TagType::End => 0,
        TagType::Byte | TagType::Compound => 1,
        TagType::Short => 2,
        TagType::Int | TagType::Float | TagType::ByteArray => 4,
        TagType::IntArray | TagType::LongArray => 4,
        TagType::Long | TagType::Double => 8,
        TagType::List => 5,
        TagType::String => match prefix {
            LengthPrefix::U16 => 2,
            LengthPrefix::I32 => 4,
        },
    }
}
