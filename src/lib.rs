//! # lzw12: Pure Rust fixed-width 12-bit LZW codec
//!
//! This crate provides LZW (Lempel-Ziv-Welch) compression and decompression
//! over byte buffers, with fixed-width 12-bit codes.
//!
//! ## Features
//!
//! - **Pure Rust**: No C dependencies, 100% safe Rust
//! - **Fixed 12-bit codes**: No variable-width growth, no clear codes
//! - **Dense packing**: Two codes per three bytes, MSB-first, with a
//!   zero-padded final nibble when the code count is odd
//!
//! ## Wire format
//!
//! The compressed stream is a bare sequence of 12-bit codes. For
//! consecutive codes `A` then `B` the packer emits:
//!
//! ```text
//! byte0 = A >> 4
//! byte1 = (A & 0xF) << 4 | B >> 8
//! byte2 = B & 0xFF
//! ```
//!
//! There is no header, length prefix, or terminator; the stream ends when
//! the input bytes are exhausted. Codes 0..=255 stand for their byte
//! value, codes 256..=4095 are dictionary entries both sides build in
//! lockstep.
//!
//! ## Example
//!
//! ```rust
//! use lzw12::{compress, decompress};
//!
//! let original = b"TOBEORNOTTOBEORTOBEORNOT";
//!
//! let compressed = compress(original);
//! let decompressed = decompress(&compressed).unwrap();
//!
//! assert_eq!(decompressed, original);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod codestream;
mod decoder;
mod dictionary;
mod encoder;
mod error;

pub use codestream::{CodeReader, CodeWriter};
pub use error::{LzwError, Result};

/// Width of every code on the wire, in bits.
pub const CODE_BITS: u32 = 12;

/// Number of fixed single-byte dictionary entries (codes 0..=255).
pub const ALPHABET_SIZE: u16 = 256;

/// Maximum number of dictionary entries; codes are always below this.
pub const MAX_TABLE_SIZE: u16 = 4096;

/// Compress a byte buffer with fixed-width 12-bit LZW.
///
/// Empty input compresses to an empty buffer.
///
/// # Example
///
/// ```rust
/// use lzw12::compress;
///
/// let compressed = compress(b"ABABABABABABABABAB");
/// assert!(compressed.len() < 18);
/// ```
pub fn compress(input: &[u8]) -> Vec<u8> {
    encoder::encode(input)
}

/// Decompress a buffer produced by [`compress`] (or any conformant
/// producer of the packed 12-bit code stream).
///
/// Empty input decompresses to an empty buffer. Trailing bits short of a
/// full 12-bit code are treated as end of stream, not an error.
///
/// # Errors
///
/// Returns [`LzwError::InvalidCode`] if the stream references a code the
/// dictionary cannot have at that point (corrupt or non-LZW input).
///
/// # Example
///
/// ```rust
/// use lzw12::{compress, decompress};
///
/// let original = b"Hello, World!";
/// let compressed = compress(original);
/// let decompressed = decompress(&compressed).unwrap();
/// assert_eq!(decompressed, original);
/// ```
pub fn decompress(input: &[u8]) -> Result<Vec<u8>> {
    decoder::decode(input)
}
