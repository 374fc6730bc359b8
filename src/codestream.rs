//! Packed 12-bit code stream I/O.
//!
//! Codes are packed two-per-three-bytes, MSB-first. Between two
//! half-aligned codes the writer (reader) holds the leftover 4 bits as a
//! carry nibble. An odd code count ends with one extra byte whose high
//! nibble is the carry and whose low nibble is zero padding.

/// Writer packing 12-bit codes into a byte stream.
#[derive(Debug, Default)]
pub struct CodeWriter {
    /// Output buffer.
    output: Vec<u8>,
    /// Low nibble of the previous code, awaiting the next code's high bits.
    carry: Option<u8>,
}

impl CodeWriter {
    /// Create a new code writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one 12-bit code.
    ///
    /// `code` must be below 4096; higher bits are never produced by the
    /// encoder and would not survive the packing.
    pub fn write(&mut self, code: u16) {
        debug_assert!(code < 1 << 12, "code {code} exceeds 12 bits");

        match self.carry.take() {
            None => {
                // Odd call: emit the high byte, hold the low nibble.
                self.output.push((code >> 4) as u8);
                self.carry = Some((code & 0xF) as u8);
            }
            Some(nibble) => {
                // Even call: pair the held nibble with this code's high
                // 4 bits, then emit the low byte.
                self.output.push((nibble << 4) | (code >> 8) as u8);
                self.output.push((code & 0xFF) as u8);
            }
        }
    }

    /// Flush any pending carry nibble and return the packed bytes.
    pub fn into_vec(mut self) -> Vec<u8> {
        if let Some(nibble) = self.carry.take() {
            self.output.push(nibble << 4);
        }
        self.output
    }
}

/// Reader unpacking 12-bit codes from a byte stream.
#[derive(Debug)]
pub struct CodeReader<'a> {
    /// Input data.
    input: &'a [u8],
    /// Current byte position.
    pos: usize,
    /// Low nibble left over from the previously consumed byte pair.
    carry: Option<u8>,
}

impl<'a> CodeReader<'a> {
    /// Create a new code reader over packed input.
    pub fn new(input: &'a [u8]) -> Self {
        Self {
            input,
            pos: 0,
            carry: None,
        }
    }

    /// Read the next 12-bit code.
    ///
    /// Returns `None` once fewer than 12 bits remain: a zero-padding
    /// nibble or a truncated trailing code ends the stream without
    /// yielding a partial code.
    pub fn read(&mut self) -> Option<u16> {
        match self.carry.take() {
            Some(nibble) => {
                // The held nibble is the code's high 4 bits; one more
                // byte completes it.
                let byte = *self.input.get(self.pos)?;
                self.pos += 1;
                Some((u16::from(nibble) << 8) | u16::from(byte))
            }
            None => {
                // A fresh code spans two bytes; the second byte's low
                // nibble is held for the next code.
                if self.pos + 2 > self.input.len() {
                    return None;
                }
                let hi = self.input[self.pos];
                let mid = self.input[self.pos + 1];
                self.pos += 2;
                self.carry = Some(mid & 0xF);
                Some((u16::from(hi) << 4) | u16::from(mid >> 4))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pack(codes: &[u16]) -> Vec<u8> {
        let mut writer = CodeWriter::new();
        for &code in codes {
            writer.write(code);
        }
        writer.into_vec()
    }

    fn unpack(data: &[u8]) -> Vec<u16> {
        let mut reader = CodeReader::new(data);
        let mut codes = Vec::new();
        while let Some(code) = reader.read() {
            codes.push(code);
        }
        codes
    }

    #[test]
    fn test_pair_layout() {
        // Canonical layout: A=0x123, B=0x456 -> 12 34 56
        assert_eq!(pack(&[0x123, 0x456]), vec![0x12, 0x34, 0x56]);
    }

    #[test]
    fn test_odd_count_padding() {
        // A single code ends with a zero-padded nibble.
        assert_eq!(pack(&[0x123]), vec![0x12, 0x30]);
        assert_eq!(pack(&[0x123, 0x456, 0x789]), vec![0x12, 0x34, 0x56, 0x78, 0x90]);
    }

    #[test]
    fn test_empty() {
        assert!(pack(&[]).is_empty());
        assert!(unpack(&[]).is_empty());
    }

    #[test]
    fn test_roundtrip_even_and_odd() {
        let even = [0x000, 0xFFF, 0x041, 0x100];
        assert_eq!(unpack(&pack(&even)), even);

        let odd = [0xABC, 0x000, 0x7F7];
        assert_eq!(unpack(&pack(&odd)), odd);
    }

    #[test]
    fn test_truncated_stream_yields_no_partial_code() {
        // One lone byte carries only 8 bits: no code.
        assert!(unpack(&[0x12]).is_empty());

        // A full pair followed by one byte: two codes, then the third
        // is cut short.
        let mut data = pack(&[0x111, 0x222, 0x333]);
        data.pop();
        assert_eq!(unpack(&data), vec![0x111, 0x222]);
    }

    #[test]
    fn test_code_zero_is_data() {
        let codes = [0x000, 0x000, 0x000];
        assert_eq!(unpack(&pack(&codes)), codes);
    }
}
