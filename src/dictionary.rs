//! LZW dictionary (code table) management.
//!
//! Encoder and decoder each keep their own realization of the same
//! logical table: the encoder needs (prefix, byte) -> code lookup, the
//! decoder needs code -> (prefix, byte) by direct index. Both append
//! entries in the identical order, so the tables stay in lockstep.

use crate::{ALPHABET_SIZE, MAX_TABLE_SIZE};
use std::collections::HashMap;

/// Prefix of a dictionary entry.
///
/// The 256 fixed single-byte entries have no prefix; every derived entry
/// extends a previously assigned code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Prefix {
    /// One of the fixed single-byte entries (codes 0..=255).
    Root,
    /// Extends the sequence of a previously assigned code.
    Code(u16),
}

/// Encode-side dictionary: (prefix, byte) -> code.
///
/// Only derived entries (codes 256..) are stored; the fixed root entries
/// are implicit since code `i` encodes byte `i`, and a looked-up prefix
/// is always itself a code, so no lookup ever targets a root pair.
#[derive(Debug)]
pub struct EncodeDictionary {
    /// Derived entries keyed by (prefix code, extension byte).
    codes: HashMap<(u16, u8), u16>,
    /// Next code to assign.
    next_code: u16,
}

impl EncodeDictionary {
    /// Create a dictionary holding the 256 fixed single-byte entries.
    pub fn new() -> Self {
        Self {
            codes: HashMap::new(),
            next_code: ALPHABET_SIZE,
        }
    }

    /// Find the code for the sequence `prefix` extended by `byte`.
    ///
    /// Exact-match only; equivalent to scanning the table for the pair.
    pub fn lookup(&self, prefix: u16, byte: u8) -> Option<u16> {
        self.codes.get(&(prefix, byte)).copied()
    }

    /// Append a new entry at the next free code.
    ///
    /// Silent no-op once the table holds 4096 entries; coding continues
    /// with the existing table.
    pub fn add(&mut self, prefix: u16, byte: u8) {
        if self.next_code < MAX_TABLE_SIZE {
            self.codes.insert((prefix, byte), self.next_code);
            self.next_code += 1;
        }
    }

    /// Next code that would be assigned (== current table size).
    pub fn next_code(&self) -> u16 {
        self.next_code
    }
}

impl Default for EncodeDictionary {
    fn default() -> Self {
        Self::new()
    }
}

/// Decode-side table: code -> (prefix, byte), directly indexed.
///
/// Stores only derived entries; `entry` resolves codes 0..=255 to
/// `(Prefix::Root, code)` without storage.
#[derive(Debug)]
pub struct DecodeTable {
    /// Derived entries; index `i` holds the entry for code `256 + i`.
    entries: Vec<(u16, u8)>,
}

impl DecodeTable {
    /// Create a table holding the 256 fixed single-byte entries.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Next code that would be assigned (== current table size).
    pub fn next_code(&self) -> u16 {
        ALPHABET_SIZE + self.entries.len() as u16
    }

    /// Store a new entry at the next free code.
    ///
    /// Silent no-op once the table holds 4096 entries, mirroring
    /// [`EncodeDictionary::add`].
    pub fn add(&mut self, prefix: u16, byte: u8) {
        if self.next_code() < MAX_TABLE_SIZE {
            self.entries.push((prefix, byte));
        }
    }

    /// Resolve a code to its (prefix, byte) pair.
    ///
    /// `code` must be below [`next_code`](Self::next_code).
    pub fn entry(&self, code: u16) -> (Prefix, u8) {
        if code < ALPHABET_SIZE {
            (Prefix::Root, code as u8)
        } else {
            let (prefix, byte) = self.entries[(code - ALPHABET_SIZE) as usize];
            (Prefix::Code(prefix), byte)
        }
    }

    /// Expand a code to its full byte sequence, appended to `out`
    /// prefix-first. Returns the first byte of the sequence.
    ///
    /// Prefix chains can approach the table size (~3840 links for long
    /// single-byte runs), so this walks the chain with a scratch region
    /// of `out` instead of call recursion: bytes are collected
    /// last-to-first and reversed in place.
    ///
    /// `code` must be below [`next_code`](Self::next_code).
    pub fn expand(&self, code: u16, out: &mut Vec<u8>) -> u8 {
        debug_assert!(code < self.next_code(), "unresolved code {code}");

        let start = out.len();
        let mut current = code;
        loop {
            match self.entry(current) {
                (Prefix::Root, byte) => {
                    out.push(byte);
                    break;
                }
                (Prefix::Code(prefix), byte) => {
                    out.push(byte);
                    current = prefix;
                }
            }
        }
        out[start..].reverse();
        out[start]
    }
}

impl Default for DecodeTable {
    fn default() -> Self {
        Self::new()
    }
}
