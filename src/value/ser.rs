use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};

use crate::{ByteArray, Compound, IntArray, List, LongArray, Tag};

// Arrays and lists both serialize as sequences; formats like JSON have no
// way to tell them apart.

impl Serialize for Tag {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            Tag::Byte(v) => serializer.serialize_i8(*v),
            Tag::Short(v) => serializer.serialize_i16(*v),
            Tag::Int(v) => serializer.serialize_i32(*v),
            Tag::Long(v) => serializer.serialize_i64(*v),
            Tag::Float(v) => serializer.serialize_f32(*v),
            Tag::Double(v) => serializer.serialize_f64(*v),
            Tag::String(v) => serializer.serialize_str(v),
            Tag::ByteArray(v) => v.serialize(serializer),
            Tag::IntArray(v) => v.serialize(serializer),
            Tag::LongArray(v) => v.serialize(serializer),
            Tag::List(v) => v.serialize(serializer),
            Tag::Compound(v) => v.serialize(serializer),
        }
    }
}

impl Serialize for Compound {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (k, v) in self.iter() {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}

impl Serialize for List {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut seq = serializer.serialize_seq(Some(self.len()))?;
        for v in self.iter() {
            seq.serialize_element(v)?;
        }
        seq.end()
    }
}

macro_rules! array_ser {
    ($($array:ty),*) => {
        $(
            impl Serialize for $array {
                fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
                where
                    S: Serializer,
                {
                    serializer.collect_seq(self.iter())
                }
            }
        )*
    };
}

array_ser!(ByteArray, IntArray, LongArray);
