//! LZW encoder (compression).

use oxilzw_core::{MsbBitWriter, OxiLzwError, Result};
use tracing::{debug, trace};

use crate::config::{CLEAR_TABLE, END_OF_DATA, LzwConfig};
use crate::dictionary::ForwardTable;

/// LZW encoder for compression.
///
/// The encoder holds configuration only. Every call to
/// [`LzwEncoder::encode`] builds a fresh forward table and drops it on
/// return, so one encoder can serve concurrent calls.
#[derive(Debug, Clone)]
pub struct LzwEncoder {
    config: LzwConfig,
}

impl Default for LzwEncoder {
    fn default() -> Self {
        Self {
            config: LzwConfig::DEFAULT,
        }
    }
}

impl LzwEncoder {
    /// Create a new LZW encoder with the given configuration.
    ///
    /// # Errors
    ///
    /// [`OxiLzwError::InvalidArgument`] if the configuration does not validate.
    pub fn new(config: LzwConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The configuration this encoder was built with.
    pub fn config(&self) -> &LzwConfig {
        &self.config
    }

    /// Encode data with LZW compression.
    ///
    /// # Algorithm
    ///
    /// 1. Start from the literal alphabet, 9-bit codewords, next code 258
    /// 2. Extend the current match while `match + byte` is in the table
    /// 3. Otherwise emit the match, assign `match + byte` the next code and
    ///    restart the match at `byte`
    /// 4. Widen codewords when the next code reaches 512, 1024 or 2048
    /// 5. Once code 4095 is assigned, emit CLEAR_TABLE and start over
    /// 6. Emit the final match and END_OF_DATA
    ///
    /// Empty input produces END_OF_DATA alone.
    pub fn encode(&self, input: &[u8]) -> Result<Vec<u8>> {
        let mut session = EncodeSession::new(self.config, input.len());
        for &byte in input {
            session.push(byte)?;
        }

        let clears = session.clears;
        let output = session.finish()?;
        debug!(
            input_len = input.len(),
            output_len = output.len(),
            clears,
            "lzw encode finished"
        );
        Ok(output)
    }
}

/// State of one encode call.
#[derive(Debug)]
pub(crate) struct EncodeSession {
    pub(crate) table: ForwardTable,
    writer: MsbBitWriter,
    /// Longest sequence seen so far that has a code.
    buffer: Vec<u8>,
    pub(crate) clears: usize,
}

impl EncodeSession {
    pub(crate) fn new(config: LzwConfig, input_len: usize) -> Self {
        Self {
            table: ForwardTable::new(config),
            writer: MsbBitWriter::with_capacity(input_len / 2 + 4),
            buffer: Vec::new(),
            clears: 0,
        }
    }

    pub(crate) fn push(&mut self, byte: u8) -> Result<()> {
        self.buffer.push(byte);
        if self.table.find(&self.buffer).is_some() {
            return Ok(());
        }

        let candidate = std::mem::replace(&mut self.buffer, vec![byte]);
        let matched = &candidate[..candidate.len() - 1];
        self.emit_match(matched)?;
        self.table.add(&candidate);

        if self.table.is_exhausted() {
            self.writer.write_bits(CLEAR_TABLE, self.table.code_len())?;
            self.table.reset();
            self.clears += 1;
            trace!(bit_offset = self.writer.bit_len(), "table reset");
        } else if self.table.grow_width() {
            trace!(
                next_code = self.table.next_code(),
                bits = self.table.code_len(),
                "codeword width increased"
            );
        }

        Ok(())
    }

    pub(crate) fn finish(mut self) -> Result<Vec<u8>> {
        if !self.buffer.is_empty() {
            let matched = std::mem::take(&mut self.buffer);
            self.emit_match(&matched)?;
        }
        self.writer.write_bits(END_OF_DATA, self.table.code_len())?;
        Ok(self.writer.into_vec())
    }

    fn emit_match(&mut self, matched: &[u8]) -> Result<()> {
        let code = self
            .table
            .find(matched)
            .ok_or_else(|| OxiLzwError::missing_codeword(matched.len()))?;
        self.writer.write_bits(code, self.table.code_len())
    }
}
