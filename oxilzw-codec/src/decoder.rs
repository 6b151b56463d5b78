//! LZW decoder (decompression).
//!
//! Decoding never fails on stream content. A truncated stream, a stream
//! without END_OF_DATA, or a codeword that cannot be resolved all end
//! decoding early with whatever was produced up to that point;
//! [`DecodeStats::end`] records which of these happened.

use oxilzw_core::{MsbBitSlice, Result};
use tracing::{debug, trace};

use crate::config::{CLEAR_TABLE, END_OF_DATA, LzwConfig};
use crate::dictionary::InverseTable;

/// Why decoding stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreamEnd {
    /// An END_OF_DATA codeword was read.
    EndOfData,
    /// Fewer bits remained than the current codeword width.
    Exhausted,
    /// A codeword that the current table cannot resolve.
    UnresolvedCode(u16),
}

/// A codeword width change observed while decoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WidthChange {
    /// Bit offset of the first codeword read at the new width.
    pub bit_offset: usize,
    /// The new width.
    pub bits: u8,
}

/// Statistics gathered by [`LzwDecoder::decode_with_stats`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodeStats {
    /// Codewords read, special codes included.
    pub codewords: usize,
    /// CLEAR_TABLE codewords read.
    pub clears: usize,
    /// Width increases in stream order; resets back to 9 bits are implied
    /// by each CLEAR_TABLE.
    pub width_changes: Vec<WidthChange>,
    /// Bits consumed up to and including the last codeword read.
    pub bits_consumed: usize,
    /// Why decoding stopped.
    pub end: StreamEnd,
}

impl Default for DecodeStats {
    fn default() -> Self {
        Self {
            codewords: 0,
            clears: 0,
            width_changes: Vec::new(),
            bits_consumed: 0,
            end: StreamEnd::Exhausted,
        }
    }
}

/// LZW decoder for decompression.
///
/// Like [`crate::LzwEncoder`], the decoder only holds configuration; the
/// inverse table lives for the duration of one call.
#[derive(Debug, Clone)]
pub struct LzwDecoder {
    config: LzwConfig,
}

impl Default for LzwDecoder {
    fn default() -> Self {
        Self {
            config: LzwConfig::DEFAULT,
        }
    }
}

impl LzwDecoder {
    /// Create a new LZW decoder with the given configuration.
    ///
    /// # Errors
    ///
    /// [`oxilzw_core::OxiLzwError::InvalidArgument`] if the configuration
    /// does not validate.
    pub fn new(config: LzwConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this decoder was built with.
    pub fn config(&self) -> &LzwConfig {
        &self.config
    }

    /// Decode LZW-compressed data.
    pub fn decode(&self, input: &[u8]) -> Result<Vec<u8>> {
        self.decode_with_stats(input).map(|(output, _)| output)
    }

    /// Decode LZW-compressed data and report how the stream was laid out.
    ///
    /// # Algorithm
    ///
    /// The first codeword of the stream, and the first after each
    /// CLEAR_TABLE, is a literal and defines nothing. Every later codeword
    /// defines one entry: the previous codeword's value plus the first byte
    /// of this codeword's value. When the codeword is the very entry being
    /// defined, that first byte is the previous value's own first byte.
    ///
    /// The decoder widens codewords when its next free code reaches 511,
    /// 1023 or 2047, one below the encoder's thresholds. It defines each
    /// entry one codeword after the encoder did, so both sides switch width
    /// before the same codeword.
    pub fn decode_with_stats(&self, input: &[u8]) -> Result<(Vec<u8>, DecodeStats)> {
        let bits = MsbBitSlice::new(input);
        let mut table = InverseTable::new(self.config);
        let mut output = Vec::with_capacity(input.len().saturating_mul(2));
        let mut stats = DecodeStats::default();
        let mut offset = 0usize;
        let mut prior: Option<u16> = None;

        stats.end = loop {
            let Some(code) = bits.read_at(offset, table.code_len())? else {
                break StreamEnd::Exhausted;
            };
            offset += table.code_len() as usize;
            stats.codewords += 1;

            match code {
                END_OF_DATA => break StreamEnd::EndOfData,
                CLEAR_TABLE => {
                    table.reset();
                    prior = None;
                    stats.clears += 1;
                    trace!(bit_offset = offset, "table reset");
                    continue;
                }
                _ => {}
            }

            let Some(prev) = prior else {
                // First codeword of a table generation.
                match table.get(code) {
                    Some(value) => output.extend_from_slice(value),
                    None => break StreamEnd::UnresolvedCode(code),
                }
                prior = Some(code);
                continue;
            };

            if !table.define_next(prev, code) {
                break StreamEnd::UnresolvedCode(code);
            }
            match table.get(code) {
                Some(value) => output.extend_from_slice(value),
                None => break StreamEnd::UnresolvedCode(code),
            }
            prior = Some(code);

            if table.grow_width() {
                stats.width_changes.push(WidthChange {
                    bit_offset: offset,
                    bits: table.code_len(),
                });
                trace!(
                    next_code = table.next_code(),
                    bits = table.code_len(),
                    "codeword width increased"
                );
            }
        };
        stats.bits_consumed = offset;

        if stats.end != StreamEnd::EndOfData {
            debug!(
                end = ?stats.end,
                bit_offset = offset,
                output_len = output.len(),
                "lzw stream ended without END_OF_DATA"
            );
        }
        debug!(
            input_len = input.len(),
            output_len = output.len(),
            clears = stats.clears,
            "lzw decode finished"
        );

        Ok((output, stats))
    }
}
