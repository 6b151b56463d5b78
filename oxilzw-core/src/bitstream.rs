//! MSB-first bit buffer operations for LZW codewords.
//!
//! Codewords are packed from the most significant bit of each byte down,
//! without any alignment between codewords. Only the end of the stream is
//! byte-aligned: the final byte is zero-padded on its low bits.
//!
//! # Example
//!
//! ```
//! use oxilzw_core::bitstream::{MsbBitSlice, MsbBitWriter};
//!
//! let mut writer = MsbBitWriter::new();
//! writer.write_bits(0b101, 3).unwrap();
//! writer.write_bits(0x1FF, 9).unwrap();
//! let bytes = writer.into_vec();
//! assert_eq!(bytes, vec![0b1011_1111, 0b1111_0000]);
//!
//! let bits = MsbBitSlice::new(&bytes);
//! assert_eq!(bits.read_at(0, 3).unwrap(), Some(0b101));
//! assert_eq!(bits.read_at(3, 9).unwrap(), Some(0x1FF));
//! assert_eq!(bits.read_at(12, 9).unwrap(), None);
//! ```

use crate::error::{OxiLzwError, Result};

/// Widest value accepted by a single read or write.
pub const MAX_BITS: u8 = 16;

fn check_width(count: u8) -> Result<()> {
    if count == 0 || count > MAX_BITS {
        return Err(OxiLzwError::InvalidBitWidth(count));
    }
    Ok(())
}

/// Random-access MSB-first view over a packed byte sequence.
///
/// Unlike a streaming reader this keeps no cursor: the caller owns the bit
/// offset, which lets the LZW decoder treat "the offset ran past the end"
/// as an ordinary stopping condition.
#[derive(Debug, Clone, Copy)]
pub struct MsbBitSlice<'a> {
    data: &'a [u8],
}

impl<'a> MsbBitSlice<'a> {
    /// Wrap a byte sequence.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// Total number of bits, including any trailing padding.
    pub fn bit_len(&self) -> usize {
        self.data.len() * 8
    }

    /// Read `count` bits starting at bit `offset`.
    ///
    /// Returns `Ok(None)` when fewer than `count` bits remain.
    pub fn read_at(&self, offset: usize, count: u8) -> Result<Option<u16>> {
        check_width(count)?;

        let end = match offset.checked_add(count as usize) {
            Some(end) if end <= self.bit_len() => end,
            _ => return Ok(None),
        };

        let first = offset / 8;
        let last = (end - 1) / 8;
        let mut acc = 0u32;
        for &byte in &self.data[first..=last] {
            acc = (acc << 8) | byte as u32;
        }

        // Bits of `acc` that lie past `end` within the last byte.
        let trailing = (last + 1) * 8 - end;
        let mask = (1u32 << count) - 1;
        Ok(Some(((acc >> trailing) & mask) as u16))
    }
}

/// MSB-first bit writer for LZW compression.
#[derive(Debug, Default)]
pub struct MsbBitWriter {
    /// Output buffer.
    output: Vec<u8>,
    /// Bit buffer (MSB-first).
    buffer: u32,
    /// Number of bits in buffer.
    bits_in_buffer: u8,
}

impl MsbBitWriter {
    /// Create a new MSB bit writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a writer whose output buffer can hold `bytes` without growing.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            output: Vec::with_capacity(bytes),
            ..Self::default()
        }
    }

    /// Append the low `count` bits of `value` (MSB-first).
    pub fn write_bits(&mut self, value: u16, count: u8) -> Result<()> {
        check_width(count)?;

        self.buffer = (self.buffer << count) | (value as u32 & ((1u32 << count) - 1));
        self.bits_in_buffer += count;

        // Flush complete bytes (from MSB side)
        while self.bits_in_buffer >= 8 {
            let byte = (self.buffer >> (self.bits_in_buffer - 8)) as u8;
            self.output.push(byte);
            self.bits_in_buffer -= 8;
        }

        Ok(())
    }

    /// Number of bits written so far.
    pub fn bit_len(&self) -> usize {
        self.output.len() * 8 + self.bits_in_buffer as usize
    }

    /// Finish the stream, zero-padding the final byte.
    pub fn into_vec(mut self) -> Vec<u8> {
        if self.bits_in_buffer > 0 {
            let pad = 8 - self.bits_in_buffer;
            self.output.push((self.buffer << pad) as u8);
        }
        self.output
    }
}
