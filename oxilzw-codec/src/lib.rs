//! # OxiLZW Codec: Variable-Width LZW
//!
//! LZW compression and decompression in the form used by image and document
//! containers.
//!
//! ## Features
//!
//! - **Pure Rust**: No C dependencies, 100% safe Rust
//! - **MSB-first** codeword packing, 9-12 bit codes
//! - **CLEAR_TABLE / END_OF_DATA** protocol: the encoder resets its table
//!   once code 4095 is assigned and always ends with END_OF_DATA
//! - **Best-effort decoding**: truncated or damaged streams decode to the
//!   longest recoverable prefix instead of failing
//! - **Call-scoped tables**: nothing is shared between calls, so encoders,
//!   decoders and [`Lzw`] are `Send + Sync`
//!
//! ## Stream Format
//!
//! | Code      | Meaning                                     |
//! |-----------|---------------------------------------------|
//! | 0-255     | Literal byte                                |
//! | 256       | CLEAR_TABLE: both sides reset to literals   |
//! | 257       | END_OF_DATA                                 |
//! | 258-4095  | Dictionary entries, assigned in order       |
//!
//! ## Codeword Width
//!
//! The encoder widens codewords when its next free code reaches 512, 1024
//! and 2048; the decoder when its own reaches 511, 1023 and 2047. The
//! decoder's counter trails the encoder's by one, so the two switch before
//! the same codeword. Setting [`LzwConfig::early_change`] to `false` moves
//! every threshold one code later on both sides.
//!
//! ## Dictionary Keys
//!
//! The encoder keys its dictionary by a 64-bit hash of each sequence
//! ([`oxilzw_core::SymbolHasher`]) and by default trusts hash equality. Two
//! distinct sequences sharing a hash within one table generation would
//! alias; [`HashStrictness::Verified`] compares the stored sequences too and
//! produces identical output whenever no collision occurs.
//!
//! ## Example
//!
//! ```rust
//! use oxilzw_codec::{compress, decompress};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//!
//! let compressed = compress(original).unwrap();
//! let decompressed = decompress(&compressed).unwrap();
//!
//! assert_eq!(decompressed, original);
//! ```
//!
//! Through the codec trait:
//!
//! ```rust
//! use oxilzw_codec::{Codec, Lzw};
//!
//! let codec: Box<dyn Codec> = Box::new(Lzw::default());
//! let packed = codec.encode(b"AAAAAAAA").unwrap();
//! assert_eq!(codec.decode(&packed).unwrap(), b"AAAAAAAA");
//! assert!(codec.encode_opt(None).is_err());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod config;
mod decoder;
mod dictionary;
mod encoder;
#[cfg(feature = "parallel")]
mod parallel;

pub use config::{
    CLEAR_TABLE, END_OF_DATA, FIRST_CODE, HashStrictness, LzwConfig, MAX_BITS, MIN_BITS,
    TABLE_LIMIT,
};
pub use decoder::{DecodeStats, LzwDecoder, StreamEnd, WidthChange};
pub use encoder::LzwEncoder;
pub use oxilzw_core::{Codec, OxiLzwError, Result};
#[cfg(feature = "parallel")]
pub use parallel::{compress_batch, decompress_batch};

/// The LZW algorithm behind the [`Codec`] trait.
#[derive(Debug, Clone, Default)]
pub struct Lzw {
    encoder: LzwEncoder,
    decoder: LzwDecoder,
}

impl Lzw {
    /// Create a codec with the given configuration.
    ///
    /// # Errors
    ///
    /// [`OxiLzwError::InvalidArgument`] if the configuration does not validate.
    pub fn new(config: LzwConfig) -> Result<Self> {
        Ok(Self {
            encoder: LzwEncoder::new(config)?,
            decoder: LzwDecoder::new(config)?,
        })
    }

    /// The configuration shared by both directions.
    pub fn config(&self) -> &LzwConfig {
        self.encoder.config()
    }
}

impl Codec for Lzw {
    fn name(&self) -> &'static str {
        "lzw"
    }

    fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.encoder.encode(input)
    }

    fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.decoder.decode(input)
    }
}

/// Compress data with LZW using the given configuration.
///
/// # Example
///
/// ```rust
/// use oxilzw_codec::{compress_with, decompress_with, LzwConfig};
///
/// let data = b"Hello, World!";
/// let compressed = compress_with(data, LzwConfig::LATE_CHANGE).unwrap();
/// let decompressed = decompress_with(&compressed, LzwConfig::LATE_CHANGE).unwrap();
/// assert_eq!(decompressed, data);
/// ```
pub fn compress_with(data: &[u8], config: LzwConfig) -> Result<Vec<u8>> {
    LzwEncoder::new(config)?.encode(data)
}

/// Decompress LZW data with the given configuration.
pub fn decompress_with(data: &[u8], config: LzwConfig) -> Result<Vec<u8>> {
    LzwDecoder::new(config)?.decode(data)
}

/// Compress data with the default configuration.
///
/// Equivalent to `compress_with(data, LzwConfig::DEFAULT)`.
///
/// # Example
///
/// ```rust
/// use oxilzw_codec::compress;
///
/// // Eight 'A's: codes 65, 258, 259, 258 then END_OF_DATA, all 9 bits.
/// let compressed = compress(b"AAAAAAAA").unwrap();
/// assert_eq!(compressed, vec![0x20, 0xc0, 0xa0, 0x70, 0x28, 0x08]);
/// ```
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    compress_with(data, LzwConfig::DEFAULT)
}

/// Decompress data with the default configuration.
///
/// Equivalent to `decompress_with(data, LzwConfig::DEFAULT)`.
///
/// # Example
///
/// ```rust
/// use oxilzw_codec::{compress, decompress};
///
/// let compressed = compress(b"").unwrap();
/// assert_eq!(decompress(&compressed).unwrap(), b"");
///
/// // A stream cut short decodes what it can.
/// let compressed = compress(b"This is a test of compression! ").unwrap();
/// let partial = decompress(&compressed[..compressed.len() / 2]).unwrap();
/// assert!(b"This is a test of compression! ".starts_with(&partial));
/// ```
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    decompress_with(data, LzwConfig::DEFAULT)
}
