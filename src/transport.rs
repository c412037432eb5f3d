//! Wrappers that move binary NBT through other channels: gzip, as used by
//! most files on disk, and base64 or hex for places that only take text.
//!
//! Each `gzip` flag compresses the binary payload before it is encoded as
//! text, and expects compressed data when decoding.
//!
//! ```
//! use dualnbt::{transport, Root, Tag};
//!
//! # fn main() -> dualnbt::error::Result<()> {
//! let root = Root::new("", Tag::String("hello".into()));
//!
//! let text = transport::to_base64(&root, true)?;
//! assert_eq!(transport::from_base64(&text, true)?, root);
//!
//! assert_eq!(transport::to_hex(&root, false)?, "08000000000000000568656c6c6f");
//! # Ok(())
//! # }
//! ```

use std::io::Read;

use flate2::{read::GzDecoder, write::GzEncoder, Compression};

use crate::error::{Error, Result};
use crate::{binary, Root};

/// Encode `root` and gzip the result.
pub fn to_gzip(root: &Root) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    binary::to_writer(&mut encoder, root)?;
    Ok(encoder.finish()?)
}

/// Gunzip `data` and decode the payload inside.
pub fn from_gzip(data: &[u8]) -> Result<Root> {
    let mut payload = Vec::new();
    GzDecoder::new(data).read_to_end(&mut payload)?;
    binary::decode(&payload)
}

fn to_payload(root: &Root, gzip: bool) -> Result<Vec<u8>> {
    if gzip {
        to_gzip(root)
    } else {
        binary::encode(root)
    }
}

fn from_payload(data: &[u8], gzip: bool) -> Result<Root> {
    if gzip {
        from_gzip(data)
    } else {
        binary::decode(data)
    }
}

/// Encode `root` as standard, padded base64.
pub fn to_base64(root: &Root, gzip: bool) -> Result<String> {
    let payload = to_payload(root, gzip)?;
    Ok(base64::encode(payload))
}

pub fn from_base64(text: &str, gzip: bool) -> Result<Root> {
    let data = base64::decode(text).map_err(Error::encoding)?;
    from_payload(&data, gzip)
}

/// Encode `root` as lowercase hex.
pub fn to_hex(root: &Root, gzip: bool) -> Result<String> {
    let payload = to_payload(root, gzip)?;
    let mut text = String::with_capacity(payload.len() * 2);
    for b in payload {
        text.push_str(&format!("{:02x}", b));
    }
    Ok(text)
}

/// Decode hex of either case.
pub fn from_hex(text: &str, gzip: bool) -> Result<Root> {
    if text.len() % 2 != 0 {
        return Err(Error::encoding(format!("hex string has odd length {}", text.len())));
    }

    let data = text
        .as_bytes()
        .chunks_exact(2)
        .enumerate()
        .map(|(i, pair)| match (hex_digit(pair[0]), hex_digit(pair[1])) {
            (Some(hi), Some(lo)) => Ok(hi << 4 | lo),
            _ => Err(Error::encoding(format!("invalid hex digit at {}", i * 2))),
        })
        .collect::<Result<Vec<u8>>>()?;

    from_payload(&data, gzip)
}

fn hex_digit(c: u8) -> Option<u8> {
    (c as char).to_digit(16).map(|d| d as u8)
}
