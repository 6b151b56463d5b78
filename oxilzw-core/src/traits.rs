//! Core codec trait.
//!
//! A [`Codec`] is a whole-buffer, call-scoped transform: every call builds
//! whatever state it needs and drops it on return, so one codec value can be
//! shared freely between threads. Callers that hold a `&dyn Codec` keep
//! working when another algorithm is plugged in.

use crate::error::{OxiLzwError, Result};

/// A one-shot compression algorithm.
pub trait Codec: Send + Sync {
    /// Short identifier of the algorithm (e.g. `"lzw"`).
    fn name(&self) -> &'static str;

    /// Compress `input` into a self-terminating stream.
    fn encode(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Decompress a stream produced by [`Codec::encode`].
    fn decode(&self, input: &[u8]) -> Result<Vec<u8>>;

    /// Compress an input that may be absent.
    ///
    /// # Errors
    ///
    /// [`OxiLzwError::InvalidArgument`] when `input` is `None`.
    fn encode_opt(&self, input: Option<&[u8]>) -> Result<Vec<u8>> {
        self.encode(input.ok_or_else(|| OxiLzwError::absent("input"))?)
    }

    /// Decompress an input that may be absent.
    ///
    /// # Errors
    ///
    /// [`OxiLzwError::InvalidArgument`] when `input` is `None`.
    fn decode_opt(&self, input: Option<&[u8]>) -> Result<Vec<u8>> {
        self.decode(input.ok_or_else(|| OxiLzwError::absent("input"))?)
    }
}
