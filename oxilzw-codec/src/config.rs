//! LZW configuration and wire-format constants.

use oxilzw_core::{OxiLzwError, Result};

/// Literal codes occupy `0..LITERAL_COUNT`.
pub const LITERAL_COUNT: u16 = 256;

/// Resets both dictionaries to the literal alphabet.
pub const CLEAR_TABLE: u16 = 256;

/// Terminates the stream.
pub const END_OF_DATA: u16 = 257;

/// First dynamically assigned code of every table generation.
pub const FIRST_CODE: u16 = 258;

/// One past the largest code; reaching it forces a table reset.
pub const TABLE_LIMIT: u16 = 4096;

/// Codeword width at the start of every table generation.
pub const MIN_BITS: u8 = 9;

/// Widest codeword.
pub const MAX_BITS: u8 = 12;

/// How the encoder's forward table treats hash equality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashStrictness {
    /// A matching 64-bit hash is taken as a matching sequence.
    ///
    /// Two distinct sequences with the same hash in one table generation
    /// alias each other; nothing detects it.
    #[default]
    Trusting,
    /// Sequences are stored next to their hash and compared on every hit.
    ///
    /// Output is identical to [`HashStrictness::Trusting`] unless a
    /// collision occurs, at a memory cost of one copy per entry.
    Verified,
}

/// LZW configuration parameters.
///
/// `predictor`, `colors`, `bits_per_component` and `columns` describe the
/// container's pixel layout. They are validated and carried with the
/// configuration but do not change what the codec produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LzwConfig {
    /// Predictor id (1 = none, 2 = TIFF, 10-15 = PNG family).
    pub predictor: u8,
    /// Interleaved colour components per sample.
    pub colors: u32,
    /// Bits per colour component.
    pub bits_per_component: u8,
    /// Samples per row.
    pub columns: u32,
    /// Grow the codeword width one code early.
    ///
    /// With early change the encoder widens when its next free code reaches
    /// 512/1024/2048 and the decoder when its own reaches 511/1023/2047.
    /// Without it each threshold is one code later.
    pub early_change: bool,
    /// Forward table hash handling.
    pub strictness: HashStrictness,
}

impl LzwConfig {
    /// Default configuration: early change, trusting hash table, no predictor.
    pub const DEFAULT: Self = Self {
        predictor: 1,
        colors: 1,
        bits_per_component: 8,
        columns: 1,
        early_change: true,
        strictness: HashStrictness::Trusting,
    };

    /// Same as [`LzwConfig::DEFAULT`] with early change disabled.
    pub const LATE_CHANGE: Self = Self {
        early_change: false,
        ..Self::DEFAULT
    };

    /// Set the early change flag.
    pub const fn with_early_change(mut self, early_change: bool) -> Self {
        self.early_change = early_change;
        self
    }

    /// Set the forward table strictness.
    pub const fn with_strictness(mut self, strictness: HashStrictness) -> Self {
        self.strictness = strictness;
        self
    }

    /// Set the predictor layout parameters.
    pub const fn with_layout(
        mut self,
        predictor: u8,
        colors: u32,
        bits_per_component: u8,
        columns: u32,
    ) -> Self {
        self.predictor = predictor;
        self.colors = colors;
        self.bits_per_component = bits_per_component;
        self.columns = columns;
        self
    }

    /// Check every field against its accepted range.
    ///
    /// # Errors
    ///
    /// [`OxiLzwError::InvalidArgument`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if !matches!(self.predictor, 1 | 2 | 10..=15) {
            return Err(OxiLzwError::invalid_argument(
                "predictor",
                format!("must be 1, 2, or 10-15, got {}", self.predictor),
            ));
        }
        if self.colors < 1 {
            return Err(OxiLzwError::invalid_argument(
                "colors",
                "must be at least 1, got 0",
            ));
        }
        if !matches!(self.bits_per_component, 1 | 2 | 4 | 8 | 16) {
            return Err(OxiLzwError::invalid_argument(
                "bits_per_component",
                format!("must be 1, 2, 4, 8, or 16, got {}", self.bits_per_component),
            ));
        }
        if self.columns < 1 {
            return Err(OxiLzwError::invalid_argument(
                "columns",
                "must be at least 1, got 0",
            ));
        }
        Ok(())
    }

    /// Next-free-code value at which the encoder leaves `bits`.
    pub(crate) fn encoder_threshold(&self, bits: u8) -> u16 {
        (1u16 << bits) + u16::from(!self.early_change)
    }

    /// Next-free-code value at which the decoder leaves `bits`.
    ///
    /// One below the encoder's: the decoder defines each entry one codeword
    /// after the encoder did, so its counter trails by one.
    pub(crate) fn decoder_threshold(&self, bits: u8) -> u16 {
        self.encoder_threshold(bits) - 1
    }
}

impl Default for LzwConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
