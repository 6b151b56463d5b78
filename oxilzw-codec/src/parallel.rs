//! Batch compression across independent buffers (requires `parallel` feature).
//!
//! Each buffer is its own LZW stream; no table state crosses buffers, so the
//! batch output is identical to calling [`crate::compress_with`] on each input
//! in turn.

use rayon::prelude::*;
use tracing::debug;

use crate::config::LzwConfig;
use crate::decoder::LzwDecoder;
use crate::encoder::LzwEncoder;
use oxilzw_core::Result;

/// Compress several independent buffers in parallel using rayon.
///
/// Outputs are returned in input order. The first error, in input order,
/// is returned if any buffer fails.
///
/// # Example
///
/// ```rust
/// use oxilzw_codec::{compress_batch, decompress_batch, LzwConfig};
///
/// let inputs: Vec<&[u8]> = vec![&b"alpha alpha"[..], &b""[..], &b"beta beta beta"[..]];
/// let packed = compress_batch(&inputs, LzwConfig::DEFAULT).unwrap();
/// let unpacked = decompress_batch(&packed, LzwConfig::DEFAULT).unwrap();
/// assert_eq!(unpacked[2], b"beta beta beta");
/// ```
pub fn compress_batch<T>(inputs: &[T], config: LzwConfig) -> Result<Vec<Vec<u8>>>
where
    T: AsRef<[u8]> + Sync,
{
    let encoder = LzwEncoder::new(config)?;
    let results: Vec<Result<Vec<u8>>> = inputs
        .par_iter()
        .map(|input| encoder.encode(input.as_ref()))
        .collect();

    debug!(buffers = inputs.len(), "lzw batch encode finished");
    results.into_iter().collect()
}

/// Decompress several independent LZW streams in parallel using rayon.
pub fn decompress_batch<T>(inputs: &[T], config: LzwConfig) -> Result<Vec<Vec<u8>>>
where
    T: AsRef<[u8]> + Sync,
{
    let decoder = LzwDecoder::new(config)?;
    let results: Vec<Result<Vec<u8>>> = inputs
        .par_iter()
        .map(|input| decoder.decode(input.as_ref()))
        .collect();

    debug!(buffers = inputs.len(), "lzw batch decode finished");
    results.into_iter().collect()
}
