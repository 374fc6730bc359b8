//! LZW encoder (compression).

use crate::codestream::CodeWriter;
use crate::dictionary::EncodeDictionary;

/// Encode a byte buffer into the packed 12-bit code stream.
///
/// # Algorithm
///
/// Classic LZW:
/// 1. Start with the 256 single-byte dictionary entries
/// 2. Greedily extend the current prefix while (prefix, byte) is known
/// 3. On a miss, emit the prefix's code, add (prefix, byte) as a new
///    entry, and restart the match from the missed byte
/// 4. After the input, emit the final prefix and flush the carry nibble
///
/// Dictionary state, the current prefix, and the packer carry all live
/// on this call's stack; nothing persists across calls.
pub fn encode(input: &[u8]) -> Vec<u8> {
    // Empty input has no initial prefix to encode: empty output.
    let Some((&first, rest)) = input.split_first() else {
        return Vec::new();
    };

    let mut dict = EncodeDictionary::new();
    let mut writer = CodeWriter::new();

    // The first byte's code is the byte itself.
    let mut prefix = u16::from(first);

    for &byte in rest {
        match dict.lookup(prefix, byte) {
            Some(code) => prefix = code,
            None => {
                writer.write(prefix);
                dict.add(prefix, byte);
                prefix = u16::from(byte);
            }
        }
    }

    writer.write(prefix);
    writer.into_vec()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codestream::CodeReader;

    fn codes_of(packed: &[u8]) -> Vec<u16> {
        let mut reader = CodeReader::new(packed);
        let mut codes = Vec::new();
        while let Some(code) = reader.read() {
            codes.push(code);
        }
        codes
    }

    #[test]
    fn test_encode_empty() {
        assert!(encode(b"").is_empty());
    }

    #[test]
    fn test_encode_single_byte_is_its_own_code() {
        assert_eq!(codes_of(&encode(b"A")), vec![0x41]);
    }

    #[test]
    fn test_encode_abab_reuses_new_entry() {
        // "ABABAB": after emitting A and B, entry 256 = "AB" covers the
        // rest in two uses.
        let packed = encode(&[0x41, 0x42, 0x41, 0x42, 0x41, 0x42]);
        assert_eq!(codes_of(&packed), vec![0x41, 0x42, 256, 256]);
    }

    #[test]
    fn test_encode_abab_exact_wire_bytes() {
        let packed = encode(&[0x41, 0x42, 0x41, 0x42, 0x41, 0x42]);
        // Codes 0x041 0x042 0x100 0x100 packed MSB-first.
        assert_eq!(packed, [0x04, 0x10, 0x42, 0x10, 0x01, 0x00]);
    }

    #[test]
    fn test_encode_run_grows_by_doubling() {
        // "XXXX" covers as X + XX (entry 256) + X, the run-doubling shape
        // that drives the decoder's not-yet-known-code rule.
        let packed = encode(&[b'X'; 4]);
        assert_eq!(codes_of(&packed), vec![u16::from(b'X'), 256, u16::from(b'X')]);
    }

    #[test]
    fn test_encode_codes_stay_below_table_cap() {
        // Pseudo-random data saturates the dictionary well before the end.
        let mut seed = 0x1234_5678_9ABC_DEF0u64;
        let original: Vec<u8> = (0..65_536)
            .map(|_| {
                seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
                (seed >> 32) as u8
            })
            .collect();

        for code in codes_of(&encode(&original)) {
            assert!(code < crate::MAX_TABLE_SIZE);
        }
    }
}
