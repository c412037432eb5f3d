mod compound;
mod list;
#[cfg(feature = "serde")]
mod ser;

use crate::{ByteArray, IntArray, LongArray, TagType};

pub use self::compound::Compound;
pub use self::list::List;

/// Tag is a complete NBT value. It owns its data; compounds and lists own
/// their children exclusively, so a tree can never contain a cycle.
///
/// ```
/// # use dualnbt::{Compound, Tag};
/// let mut c = Compound::new();
/// c.set("DataVersion", Tag::Int(3465));
///
/// match c.get("DataVersion") {
///     Some(Tag::Int(ver)) => println!("Version: {}", ver),
///     _ => {}
/// }
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Tag {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    ByteArray(ByteArray),
    IntArray(IntArray),
    LongArray(LongArray),
    List(List),
    Compound(Compound),
}

/// A named top-level tag. Only the binary encoding carries the name, which
/// is usually the empty string.
#[derive(Debug, Clone, PartialEq)]
pub struct Root {
    pub name: String,
    pub tag: Tag,
}

impl Root {
    pub fn new(name: impl Into<String>, tag: Tag) -> Self {
        Self {
            name: name.into(),
            tag,
        }
    }
}

impl From<Tag> for Root {
    fn from(tag: Tag) -> Self {
        Root::new("", tag)
    }
}

impl Tag {
    /// The type id of this tag.
    pub fn tag_type(&self) -> TagType {
        match self {
            Tag::Byte(_) => TagType::Byte,
            Tag::Short(_) => TagType::Short,
            Tag::Int(_) => TagType::Int,
            Tag::Long(_) => TagType::Long,
            Tag::Float(_) => TagType::Float,
            Tag::Double(_) => TagType::Double,
            Tag::String(_) => TagType::String,
            Tag::ByteArray(_) => TagType::ByteArray,
            Tag::IntArray(_) => TagType::IntArray,
            Tag::LongArray(_) => TagType::LongArray,
            Tag::List(_) => TagType::List,
            Tag::Compound(_) => TagType::Compound,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Tag::Byte(v) => Some(v as i64),
            Tag::Short(v) => Some(v as i64),
            Tag::Int(v) => Some(v as i64),
            Tag::Long(v) => Some(v),
            Tag::Float(v) => Some(v as i64),
            Tag::Double(v) => Some(v as i64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match *self {
            Tag::Byte(v) => Some(v as f64),
            Tag::Short(v) => Some(v as f64),
            Tag::Int(v) => Some(v as f64),
            Tag::Long(v) => Some(v as f64),
            Tag::Float(v) => Some(v as f64),
            Tag::Double(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Tag::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Tag::Compound(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_compound_mut(&mut self) -> Option<&mut Compound> {
        match self {
            Tag::Compound(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&List> {
        match self {
            Tag::List(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Tag::List(v) => Some(v),
            _ => None,
        }
    }
}

// ------------- From<T> impls -------------

macro_rules! from {
    ($type:ty, $variant:ident $(, $($part:tt)+)?) => {
        impl From<$type> for Tag {
            fn from(val: $type) -> Self {
                Self::$variant(val$($($part)+)?)
            }
        }
    };
}
from!(i8, Byte);
from!(i16, Short);
from!(i32, Int);
from!(i64, Long);
from!(f32, Float);
from!(f64, Double);
from!(String, String);
from!(&str, String, .to_owned());
from!(ByteArray, ByteArray);
from!(IntArray, IntArray);
from!(LongArray, LongArray);
from!(List, List);
from!(Compound, Compound);

impl From<bool> for Tag {
    fn from(val: bool) -> Self {
        Self::Byte(i8::from(val))
    }
}

#[cfg(feature = "arbitrary1")]
fn hom_list<'a, T, F>(u: &mut arbitrary::Unstructured<'a>, f: F) -> arbitrary::Result<List>
where
    F: FnMut(T) -> Tag,
    T: arbitrary::Arbitrary<'a>,
{
    let items = u
        .arbitrary_iter::<T>()?
        .collect::<arbitrary::Result<Vec<_>>>()?
        .into_iter()
        .map(f)
        .collect();

    // Every element came from the same constructor.
    List::try_from(items).map_err(|_| arbitrary::Error::IncorrectFormat)
}

#[cfg(feature = "arbitrary1")]
fn arb_list(u: &mut arbitrary::Unstructured) -> arbitrary::Result<List> {
    Ok(match u.arbitrary::<TagType>()? {
        TagType::End => List::new(),
        TagType::Byte => hom_list(u, Tag::Byte)?,
        TagType::Short => hom_list(u, Tag::Short)?,
        TagType::Int => hom_list(u, Tag::Int)?,
        TagType::Long => hom_list(u, Tag::Long)?,
        TagType::Float => hom_list(u, Tag::Float)?,
        TagType::Double => hom_list(u, Tag::Double)?,
        TagType::ByteArray => hom_list(u, Tag::ByteArray)?,
        TagType::String => hom_list(u, Tag::String)?,
        TagType::IntArray => hom_list(u, Tag::IntArray)?,
        TagType::LongArray => hom_list(u, Tag::LongArray)?,
        TagType::Compound => hom_list(u, Tag::Compound)?,
        TagType::List => {
            // make a list of lists
            let len = u.arbitrary_len::<Tag>()?;
            let mut list = List::new();
            for _ in 0..len {
                list.push(Tag::List(arb_list(u)?))
                    .map_err(|_| arbitrary::Error::IncorrectFormat)?;
            }
            list
        }
    })
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for Compound {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        let mut c = Compound::new();
        for entry in u.arbitrary_iter::<(String, Tag)>()? {
            let (k, v) = entry?;
            c.set(k, v);
        }
        Ok(c)
    }
}

#[cfg(feature = "arbitrary1")]
impl<'a> arbitrary::Arbitrary<'a> for Tag {
    fn arbitrary(u: &mut arbitrary::Unstructured<'a>) -> arbitrary::Result<Self> {
        Ok(match u.arbitrary::<TagType>()? {
            TagType::End => return Err(arbitrary::Error::IncorrectFormat),
            TagType::Byte => Tag::Byte(u.arbitrary()?),
            TagType::Short => Tag::Short(u.arbitrary()?),
            TagType::Int => Tag::Int(u.arbitrary()?),
            TagType::Long => Tag::Long(u.arbitrary()?),
            TagType::Float => Tag::Float(u.arbitrary()?),
            TagType::Double => Tag::Double(u.arbitrary()?),
            TagType::ByteArray => Tag::ByteArray(u.arbitrary()?),
            TagType::String => Tag::String(u.arbitrary()?),
            TagType::Compound => Tag::Compound(u.arbitrary()?),
            TagType::IntArray => Tag::IntArray(u.arbitrary()?),
            TagType::LongArray => Tag::LongArray(u.arbitrary()?),

            // Lists need to all be the same type.
            TagType::List => Tag::List(arb_list(u)?),
        })
    }
}
