use nom::{
    branch::alt,
    character::complete::{char, digit0, digit1, one_of},
    combinator::{all_consuming, opt, recognize},
    sequence::{pair, tuple},
    IResult,
};

use crate::error::{Error, Result};
use crate::Tag;

// optional sign, digits with an optional fraction or a bare fraction, then an
// optional exponent: 1, -1, 1., 1.5, .5, 1e3, -1.5E-3
fn number(input: &str) -> IResult<&str, &str> {
    recognize(tuple((
        opt(one_of("+-")),
        alt((
            recognize(pair(digit1, opt(pair(char('.'), digit0)))),
            recognize(pair(char('.'), digit1)),
        )),
        opt(tuple((one_of("eE"), opt(one_of("+-")), digit1))),
    )))(input)
}

pub(crate) fn is_numeric(s: &str) -> bool {
    all_consuming(number)(s).is_ok()
}

/// Resolve an unquoted literal to its tag. `raw` has already been trimmed,
/// `offset` is where it started in the input.
pub(crate) fn resolve(raw: &str, offset: usize) -> Result<Tag> {
    let last = match raw.chars().last() {
        Some(c) => c,
        None => return Err(Error::empty_value(offset)),
    };

    let suffix = last.to_ascii_lowercase();
    let (part, suffix) = match suffix {
        'b' | 's' | 'l' | 'f' | 'd' => (&raw[..raw.len() - 1], Some(suffix)),
        _ => (raw, None),
    };

    if !is_numeric(part) {
        // Not a number after all, so the "suffix" was part of the string.
        return Ok(Tag::String(raw.to_owned()));
    }

    let floating = matches!(suffix, Some('f') | Some('d')) || part.contains(['.', 'e', 'E']);

    let out_of_range = |ty: &str| Error::syntax(offset, format!("literal {:?}", raw), ty);

    Ok(if floating {
        // The grammar above only admits text that Rust's float parser
        // accepts, so these cannot fail. Out of range values become inf.
        match suffix {
            Some('d') => Tag::Double(part.parse().map_err(|_| out_of_range("a double"))?),
            _ => Tag::Float(part.parse().map_err(|_| out_of_range("a float"))?),
        }
    } else {
        match suffix {
            Some('b') => Tag::Byte(part.parse().map_err(|_| out_of_range("a byte"))?),
            Some('s') => Tag::Short(part.parse().map_err(|_| out_of_range("a short"))?),
            Some('l') => Tag::Long(part.parse().map_err(|_| out_of_range("a long"))?),
            _ => Tag::Int(part.parse().map_err(|_| out_of_range("an int"))?),
        }
    })
}
