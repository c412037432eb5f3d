use std::io::Write;

use byteorder::{BigEndian, WriteBytesExt};
use log::debug;

use crate::error::Result;
use crate::{Root, Tag, TagType};

use super::write_nbt::WriteNbt;
use super::SerOpts;

pub(crate) struct Encoder<W: Write> {
    writer: W,
    opts: SerOpts,
}

impl<W: Write> Encoder<W> {
    pub fn new(writer: W, opts: SerOpts) -> Self {
        Self { writer, opts }
    }

    pub fn encode_root(mut self, root: &Root) -> Result<()> {
        self.write_named(&root.name, &root.tag)?;
        self.writer.flush()?;
        debug!("encoded {:?} root {:?}", root.tag.tag_type(), root.name);
        Ok(())
    }

    fn write_named(&mut self, name: &str, tag: &Tag) -> Result<()> {
        self.writer.write_tag(tag.tag_type())?;
        self.writer.write_size_prefixed_str(name, self.opts.string_prefix)?;
        self.write_payload(tag)
    }

    fn write_payload(&mut self, tag: &Tag) -> Result<()> {
        let w = &mut self.writer;
        match tag {
            Tag::Byte(v) => w.write_i8(*v)?,
            Tag::Short(v) => w.write_i16::<BigEndian>(*v)?,
            Tag::Int(v) => w.write_i32::<BigEndian>(*v)?,
            Tag::Long(v) => w.write_i64::<BigEndian>(*v)?,
            Tag::Float(v) => w.write_f32::<BigEndian>(*v)?,
            Tag::Double(v) => w.write_f64::<BigEndian>(*v)?,
            Tag::String(v) => w.write_size_prefixed_str(v, self.opts.string_prefix)?,
            Tag::ByteArray(v) => {
                w.write_len(v.len())?;
                for b in v.iter() {
                    w.write_i8(*b)?;
                }
            }
            Tag::IntArray(v) => {
                w.write_len(v.len())?;
                for i in v.iter() {
                    w.write_i32::<BigEndian>(*i)?;
                }
            }
            Tag::LongArray(v) => {
                w.write_len(v.len())?;
                for l in v.iter() {
                    w.write_i64::<BigEndian>(*l)?;
                }
            }
            Tag::List(list) => {
                // Empty lists have no element type of their own.
                w.write_tag(list.element_type().unwrap_or(TagType::End))?;
                w.write_len(list.len())?;
                for element in list.iter() {
                    self.write_payload(element)?;
                }
            }
            Tag::Compound(compound) => {
                for (name, value) in compound.iter() {
                    self.write_named(name, value)?;
                }
                self.writer.write_tag(TagType::End)?;
            }
        }
        Ok(())
    }
}
