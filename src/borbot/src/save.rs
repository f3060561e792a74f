//! Save blob decoding and encoding.
//!
//! A Borbot save is self-describing text:
//!
//! ```text
//! <32-char magic prefix><base64 of compressed JSON record>
//! ```
//!
//! The magic prefix identifies the compression scheme, so the decoder can
//! accept arbitrary pasted text and work out its provenance before any
//! domain logic runs. The scheme set is closed; extending it would break
//! the round-trip guarantee for existing saves.

use base64::prelude::*;
use flate2::read::{DeflateDecoder, ZlibDecoder};
use flate2::write::{DeflateEncoder, ZlibEncoder};
use flate2::Compression;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{Read, Write};
use thiserror::Error;

/// Length of the magic prefix, in characters.
pub const MAGIC_LEN: usize = 32;

// Magic prefixes as shipped by the game client.
const DEFLATE_MAGIC: &str = "7e8bb5a89f2842ac4af01b3b7e228592";
const ZLIB_MAGIC: &str = "7a990d405d2c6fb93aa8fbb0ec1a3b23";

/// Compression scheme of an encoded save.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scheme {
    /// Raw DEFLATE stream, no zlib header or checksum.
    RawDeflate,
    /// zlib-wrapped DEFLATE stream.
    ZlibDeflate,
}

/// Fixed magic-to-scheme table. Each prefix maps to exactly one scheme.
const SCHEMES: [(&str, Scheme); 2] = [
    (DEFLATE_MAGIC, Scheme::RawDeflate),
    (ZLIB_MAGIC, Scheme::ZlibDeflate),
];

impl Scheme {
    /// The magic prefix prepended to saves encoded with this scheme.
    pub fn magic(self) -> &'static str {
        match self {
            Scheme::RawDeflate => DEFLATE_MAGIC,
            Scheme::ZlibDeflate => ZLIB_MAGIC,
        }
    }

    /// Look up the scheme for a magic prefix.
    pub fn from_magic(magic: &str) -> Option<Self> {
        SCHEMES
            .iter()
            .find(|(m, _)| *m == magic)
            .map(|&(_, scheme)| scheme)
    }

    /// Short human-readable name ("deflate" or "zlib").
    pub fn name(self) -> &'static str {
        match self {
            Scheme::RawDeflate => "deflate",
            Scheme::ZlibDeflate => "zlib",
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save data too short: {0} chars, need at least {MAGIC_LEN}")]
    TooShort(usize),

    #[error("unrecognized magic prefix: {0:?}")]
    UnrecognizedPrefix(String),

    #[error("invalid base64 payload: {0}")]
    InvalidFormat(#[from] base64::DecodeError),

    #[error("failed to decompress payload: {0}")]
    Decompress(#[from] std::io::Error),

    #[error("failed to compress record: {0}")]
    Compress(std::io::Error),

    #[error("malformed save record: {0}")]
    MalformedRecord(#[from] serde_json::Error),
}

/// The structured payload of a save.
///
/// All three fields are required on decode; a payload missing any of them
/// (or carrying a wrong type) is rejected rather than defaulted. Extra
/// fields are ignored for forward compatibility. `platform` and
/// `save_origin` are open strings in the record model even though the
/// deployed game only writes "pc" and "mobile".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveRecord {
    pub rubies: u64,
    pub platform: String,
    #[serde(rename = "saveOrigin")]
    pub save_origin: String,
}

impl SaveRecord {
    /// Encode the record under the given scheme.
    ///
    /// Serialize to JSON, compress, base64-encode, prepend the scheme's
    /// magic prefix. Decoders must not depend on JSON field order.
    pub fn encode(&self, scheme: Scheme) -> Result<String, SaveError> {
        let json = serde_json::to_vec(self)?;
        let compressed = compress(scheme, &json)?;
        Ok(format!("{}{}", scheme.magic(), BASE64_STANDARD.encode(compressed)))
    }
}

/// A decoded save: the record plus the scheme it arrived in.
///
/// `Clone` yields a deep, independent copy (records are plain value
/// types), equivalent to decoding the save's own encoding.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Save {
    pub data: SaveRecord,
    pub scheme: Scheme,
}

impl Save {
    /// Decode an encoded save blob.
    ///
    /// Fails on short input, an unknown prefix, malformed base64, a
    /// corrupt compressed stream, or a payload that is not a valid
    /// record. No partial record is ever returned.
    pub fn decode(blob: &str) -> Result<Self, SaveError> {
        let scheme = detect_scheme(blob)?;
        let compressed = BASE64_STANDARD.decode(&blob[MAGIC_LEN..])?;
        let json = decompress(scheme, &compressed)?;
        let data = serde_json::from_slice(&json)?;
        Ok(Save { data, scheme })
    }

    /// Re-encode under the scheme the save was decoded with.
    pub fn encode(&self) -> Result<String, SaveError> {
        self.data.encode(self.scheme)
    }

    /// Re-encode under a different scheme (transcode).
    pub fn encode_as(&self, scheme: Scheme) -> Result<String, SaveError> {
        self.data.encode(scheme)
    }
}

/// Identify the scheme of an encoded save without decoding it.
pub fn detect_scheme(blob: &str) -> Result<Scheme, SaveError> {
    // The prefix length is measured in characters, not bytes.
    let chars = blob.chars().count();
    if chars < MAGIC_LEN {
        return Err(SaveError::TooShort(chars));
    }
    // get() rather than slicing: a multi-byte character straddling the
    // prefix boundary must not panic.
    match blob.get(..MAGIC_LEN) {
        Some(magic) => Scheme::from_magic(magic)
            .ok_or_else(|| SaveError::UnrecognizedPrefix(magic.to_string())),
        None => Err(SaveError::UnrecognizedPrefix(
            blob.chars().take(MAGIC_LEN).collect(),
        )),
    }
}

fn compress(scheme: Scheme, bytes: &[u8]) -> Result<Vec<u8>, SaveError> {
    match scheme {
        Scheme::RawDeflate => {
            let mut encoder = DeflateEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(bytes).map_err(SaveError::Compress)?;
            encoder.finish().map_err(SaveError::Compress)
        }
        Scheme::ZlibDeflate => {
            let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
            encoder.write_all(bytes).map_err(SaveError::Compress)?;
            encoder.finish().map_err(SaveError::Compress)
        }
    }
}

fn decompress(scheme: Scheme, bytes: &[u8]) -> Result<Vec<u8>, SaveError> {
    let mut out = Vec::new();
    match scheme {
        Scheme::RawDeflate => DeflateDecoder::new(bytes).read_to_end(&mut out)?,
        Scheme::ZlibDeflate => ZlibDecoder::new(bytes).read_to_end(&mut out)?,
    };
    Ok(out)
}
