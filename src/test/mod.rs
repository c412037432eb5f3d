use crate::TagType;

mod fuzz;
#[allow(clippy::float_cmp)]
mod snbt_de;

macro_rules! check_tags {
    {$($tag:ident = $val:literal),* $(,)?} => {
        $(
            assert_eq!(u8::from(TagType::$tag), $val);
            assert_eq!(TagType::try_from($val as u8), Ok(TagType::$tag));
        )*
    };
}

#[test]
fn exhaustive_tag_check() {
    check_tags! {
        End = 0,
        Byte = 1,
        Short = 2,
        Int = 3,
        Long = 4,
        Float = 5,
        Double = 6,
        ByteArray = 7,
        String = 8,
        List = 9,
        Compound = 10,
        IntArray = 11,
        LongArray = 12,
    }

    for value in 13..=u8::MAX {
        assert!(TagType::try_from(value).is_err())
    }
}

#[test]
fn error_impls_sync_send() {
    fn i<T: Clone + Send + Sync + std::error::Error>(_: T) {}
    i(crate::from_snbt("").unwrap_err());
}
