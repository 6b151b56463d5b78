//! # OxiLZW Core
//!
//! Core components shared by the OxiLZW crates:
//!
//! - [`bitstream`]: MSB-first bit packing for variable-width codewords
//! - [`hash`]: 64-bit sequence hash keying the encoder's dictionary
//! - [`traits`]: the [`Codec`] capability implemented by each algorithm
//! - [`error`]: Error types
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────┐
//! │ L3: Front end                                           │
//! │     oxilzw CLI                                          │
//! ├─────────────────────────────────────────────────────────┤
//! │ L2: Codec                                               │
//! │     LZW encoder/decoder, forward/inverse tables         │
//! ├─────────────────────────────────────────────────────────┤
//! │ L1: Primitives (this crate)                             │
//! │     MsbBitWriter/MsbBitSlice, SymbolHasher, Codec       │
//! └─────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use oxilzw_core::bitstream::{MsbBitSlice, MsbBitWriter};
//! use oxilzw_core::hash::SymbolHasher;
//!
//! let mut writer = MsbBitWriter::new();
//! writer.write_bits(257, 9).unwrap();
//! let bytes = writer.into_vec();
//! assert_eq!(bytes, vec![0x80, 0x80]);
//! assert_eq!(MsbBitSlice::new(&bytes).read_at(0, 9).unwrap(), Some(257));
//!
//! let key = SymbolHasher::hash(b"AB");
//! assert_eq!(key, SymbolHasher::hash(b"AB"));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]
#![allow(clippy::module_name_repetitions)]

pub mod bitstream;
pub mod error;
pub mod hash;
pub mod traits;

// Re-exports for convenience
pub use bitstream::{MsbBitSlice, MsbBitWriter};
pub use error::{OxiLzwError, Result};
pub use hash::SymbolHasher;
pub use traits::Codec;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::bitstream::{MsbBitSlice, MsbBitWriter};
    pub use crate::error::{OxiLzwError, Result};
    pub use crate::hash::SymbolHasher;
    pub use crate::traits::Codec;
}
