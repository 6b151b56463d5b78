//! LZW dictionaries (code tables).
//!
//! The encoder and decoder use different tables: the encoder needs to find
//! the code of a byte sequence, the decoder the byte sequence of a code.
//! Each table also tracks the next free code and the current codeword width,
//! since both move in lockstep with insertions.

use std::collections::HashMap;

use oxilzw_core::SymbolHasher;

use crate::config::{
    FIRST_CODE, HashStrictness, LITERAL_COUNT, LzwConfig, MAX_BITS, MIN_BITS, TABLE_LIMIT,
};

/// Hash-keyed storage behind [`ForwardTable`].
#[derive(Debug)]
enum Slots {
    /// Hash -> code; a later insert with the same hash overwrites.
    Trusting(HashMap<u64, u16>),
    /// Hash -> every (sequence, code) pair sharing that hash.
    Verified(HashMap<u64, Vec<(Box<[u8]>, u16)>>),
}

impl Slots {
    fn new(strictness: HashStrictness) -> Self {
        let capacity = TABLE_LIMIT as usize;
        match strictness {
            HashStrictness::Trusting => Self::Trusting(HashMap::with_capacity(capacity)),
            HashStrictness::Verified => Self::Verified(HashMap::with_capacity(capacity)),
        }
    }

    fn clear(&mut self) {
        match self {
            Self::Trusting(map) => map.clear(),
            Self::Verified(map) => map.clear(),
        }
    }

    fn get(&self, sequence: &[u8]) -> Option<u16> {
        let key = SymbolHasher::hash(sequence);
        match self {
            Self::Trusting(map) => map.get(&key).copied(),
            Self::Verified(map) => map
                .get(&key)?
                .iter()
                .find(|(stored, _)| &stored[..] == sequence)
                .map(|&(_, code)| code),
        }
    }

    fn insert(&mut self, sequence: &[u8], code: u16) {
        let key = SymbolHasher::hash(sequence);
        match self {
            Self::Trusting(map) => {
                map.insert(key, code);
            }
            Self::Verified(map) => map.entry(key).or_default().push((sequence.into(), code)),
        }
    }
}

/// Encoder-side table: byte sequence -> code.
#[derive(Debug)]
pub struct ForwardTable {
    slots: Slots,
    config: LzwConfig,
    next_code: u16,
    code_len: u8,
}

impl ForwardTable {
    /// Create a table holding the literal alphabet.
    pub fn new(config: LzwConfig) -> Self {
        let mut table = Self {
            slots: Slots::new(config.strictness),
            config,
            next_code: FIRST_CODE,
            code_len: MIN_BITS,
        };
        table.reset();
        table
    }

    /// Drop every dynamic entry and return to the literal alphabet.
    pub fn reset(&mut self) {
        self.slots.clear();
        for code in 0..LITERAL_COUNT {
            self.slots.insert(&[code as u8], code);
        }
        self.next_code = FIRST_CODE;
        self.code_len = MIN_BITS;
    }

    /// Look up the code of a sequence.
    pub fn find(&self, sequence: &[u8]) -> Option<u16> {
        self.slots.get(sequence)
    }

    /// Assign the next free code to `sequence` and return it.
    ///
    /// The caller resets the table once [`ForwardTable::is_exhausted`]
    /// reports true, so codes never run past 4095.
    pub fn add(&mut self, sequence: &[u8]) -> u16 {
        let code = self.next_code;
        self.slots.insert(sequence, code);
        self.next_code += 1;
        code
    }

    /// Whether every code of this generation has been assigned.
    pub fn is_exhausted(&self) -> bool {
        self.next_code >= TABLE_LIMIT
    }

    /// Widen codewords if the next free code just hit a threshold.
    ///
    /// Returns whether the width changed.
    pub fn grow_width(&mut self) -> bool {
        if self.code_len < MAX_BITS && self.next_code == self.config.encoder_threshold(self.code_len)
        {
            self.code_len += 1;
            return true;
        }
        false
    }

    /// Current codeword width.
    pub fn code_len(&self) -> u8 {
        self.code_len
    }

    /// Code the next insertion will receive.
    pub fn next_code(&self) -> u16 {
        self.next_code
    }
}

/// Decoder-side table: code -> byte sequence.
#[derive(Debug)]
pub struct InverseTable {
    /// Indexed by code; slots 256 and 257 are empty placeholders.
    entries: Vec<Vec<u8>>,
    config: LzwConfig,
    code_len: u8,
}

impl InverseTable {
    /// Create a table holding the literal alphabet.
    pub fn new(config: LzwConfig) -> Self {
        let mut table = Self {
            entries: Vec::with_capacity(TABLE_LIMIT as usize),
            config,
            code_len: MIN_BITS,
        };
        table.reset();
        table
    }

    /// Drop every dynamic entry and return to the literal alphabet.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.entries.extend((0..LITERAL_COUNT).map(|code| vec![code as u8]));
        // CLEAR_TABLE and END_OF_DATA
        self.entries.push(Vec::new());
        self.entries.push(Vec::new());
        self.code_len = MIN_BITS;
    }

    /// Byte sequence of `code`, if it is a literal or an assigned entry.
    pub fn get(&self, code: u16) -> Option<&[u8]> {
        if (LITERAL_COUNT..FIRST_CODE).contains(&code) {
            return None;
        }
        self.entries.get(code as usize).map(Vec::as_slice)
    }

    /// Define the entry that follows `prior` given the codeword `code`.
    ///
    /// The new entry is `value(prior)` plus the first byte of `value(code)`.
    /// When `code` is the entry being defined right now, its first byte is
    /// the first byte of `value(prior)`.
    ///
    /// Returns false when `code` cannot be resolved. A full table resolves
    /// codes without inserting.
    pub fn define_next(&mut self, prior: u16, code: u16) -> bool {
        let Some(prefix) = self.get(prior) else {
            return false;
        };

        let first = if code == self.next_code() {
            prefix.first()
        } else {
            self.get(code).and_then(|value| value.first())
        };
        let Some(&first) = first else {
            return false;
        };

        if self.next_code() >= TABLE_LIMIT {
            return true;
        }

        let mut entry = Vec::with_capacity(prefix.len() + 1);
        entry.extend_from_slice(prefix);
        entry.push(first);
        self.entries.push(entry);
        true
    }

    /// Widen codewords if the next free code just hit a threshold.
    ///
    /// Returns whether the width changed.
    pub fn grow_width(&mut self) -> bool {
        let next_code = self.next_code();
        if next_code < TABLE_LIMIT
            && self.code_len < MAX_BITS
            && next_code == self.config.decoder_threshold(self.code_len)
        {
            self.code_len += 1;
            return true;
        }
        false
    }

    /// Current codeword width.
    pub fn code_len(&self) -> u8 {
        self.code_len
    }

    /// Code the next definition will receive.
    pub fn next_code(&self) -> u16 {
        self.entries.len() as u16
    }
}
