//! LZW decoder (decompression).

use crate::ALPHABET_SIZE;
use crate::codestream::CodeReader;
use crate::dictionary::DecodeTable;
use crate::error::{LzwError, Result};

/// Decode a packed 12-bit code stream back into the original bytes.
///
/// The stream ends when fewer than 12 bits remain, so a code value of 0
/// is ordinary data (byte 0x00), never an end marker.
///
/// # Errors
///
/// [`LzwError::InvalidCode`] if the first code is not a single-byte code,
/// or a later code lies beyond the next entry the table could assign.
/// Either means the input is corrupt or not an LZW stream.
pub fn decode(input: &[u8]) -> Result<Vec<u8>> {
    let mut reader = CodeReader::new(input);

    // Empty stream: empty output.
    let Some(first) = reader.read() else {
        return Ok(Vec::new());
    };

    // The first code is always a literal: the encoder's first emission is
    // a prefix that started as a single input byte.
    if first >= ALPHABET_SIZE {
        return Err(LzwError::InvalidCode(first));
    }

    let mut table = DecodeTable::new();
    let mut output = Vec::with_capacity(input.len() * 2);
    output.push(first as u8);
    let mut previous = first;

    while let Some(code) = reader.read() {
        let next_code = table.next_code();

        let first_char = if code < next_code {
            table.expand(code, &mut output)
        } else if code == next_code {
            // The encoder created this entry for the very sequence being
            // transmitted, so the decoder has not stored it yet. Its
            // sequence is previous + firstChar(previous).
            let first_char = table.expand(previous, &mut output);
            output.push(first_char);
            first_char
        } else {
            return Err(LzwError::InvalidCode(code));
        };

        table.add(previous, first_char);
        previous = code;
    }

    Ok(output)
}
