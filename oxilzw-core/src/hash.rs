//! 64-bit sequence hash used to key the LZW forward table.
//!
//! This is a variant of the "fast-hash" mixing function. It is not
//! cryptographic and does not try to be: the encoder treats equal hashes as
//! equal sequences, so the exact function is part of the codec's observable
//! behaviour (it decides which sequences alias if two ever collide) and must
//! stay bit-for-bit stable.
//!
//! - Seed: `len * M`, so sequences of different length start apart
//! - Chunks: 8 bytes, folded big-endian; a short tail occupies the low bytes
//! - Combine: `h = (h ^ mix(chunk)) * M`, all arithmetic wrapping
//!
//! # Example
//!
//! ```
//! use oxilzw_core::hash::SymbolHasher;
//!
//! assert_eq!(SymbolHasher::hash(&[]), 0);
//! assert_ne!(SymbolHasher::hash(&[0x00]), SymbolHasher::hash(&[0x00, 0x00]));
//! ```

/// Multiplier applied to the seed and after every chunk.
pub const MULTIPLIER: u64 = 0x880355f21e6d1965;

/// Multiplier inside the per-chunk mix step.
const MIX_MULTIPLIER: u64 = 0x2127599bf4325c37;

/// Bytes folded into one chunk value.
const CHUNK_SIZE: usize = 8;

/// Deterministic 64-bit hash of byte sequences.
#[derive(Debug, Clone, Copy, Default)]
pub struct SymbolHasher;

impl SymbolHasher {
    /// Hash a complete byte sequence.
    #[inline]
    pub fn hash(data: &[u8]) -> u64 {
        let seed = (data.len() as u64).wrapping_mul(MULTIPLIER);
        data.chunks(CHUNK_SIZE)
            .map(fold_chunk)
            .fold(seed, |h, v| (h ^ mix(v)).wrapping_mul(MULTIPLIER))
    }
}

/// Big-endian fold: `[0x01, 0x02]` becomes `0x0102`.
#[inline]
fn fold_chunk(chunk: &[u8]) -> u64 {
    chunk.iter().fold(0u64, |acc, &b| (acc << 8) | b as u64)
}

#[inline]
fn mix(mut v: u64) -> u64 {
    v ^= v >> 23;
    v = v.wrapping_mul(MIX_MULTIPLIER);
    v ^= v >> 47;
    v
}
