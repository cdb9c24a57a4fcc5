use alloc::vec::Vec;

use crate::error::DecompressionError;

type Result<T> = core::result::Result<T, DecompressionError>;

/// Accumulates individual bits into packed bytes.
///
/// Bits are packed most-significant-bit first: the first bit written lands
/// in bit 7 of byte 0. The backing buffer is always zero-filled past the
/// logical end, so the final partial byte is already padded with `0` bits.
#[derive(Debug, Clone, Default)]
pub struct BitWriter {
    bytes: Vec<u8>,
    bit_len: usize,
}

impl BitWriter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bytes: Vec::new(),
            bit_len: 0,
        }
    }

    /// Appends a single bit.
    pub fn push_bit(&mut self, bit: bool) {
        if self.bit_len % 8 == 0 {
            self.bytes.push(0);
        }
        if bit {
            let last = self.bytes.len() - 1;
            self.bytes[last] |= 1 << (7 - self.bit_len % 8);
        }
        self.bit_len += 1;
    }

    /// Appends a run of bits in order.
    pub fn push_bits(&mut self, bits: &[bool]) {
        for &bit in bits {
            self.push_bit(bit);
        }
    }

    /// Appends all 8 bits of a byte, most significant first.
    pub fn push_byte(&mut self, byte: u8) {
        for shift in (0..8).rev() {
            self.push_bit((byte >> shift) & 1 != 0);
        }
    }

    /// Number of bits written so far.
    #[must_use]
    pub const fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Number of filler bits (0-7) needed to reach the next byte boundary.
    #[must_use]
    pub const fn padding_to_byte(&self) -> usize {
        (8 - self.bit_len % 8) % 8
    }

    /// Returns the packed bytes. The final byte, if partial, carries zero
    /// filler bits after the last written bit.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}

/// Sequential bit access over a packed byte slice.
///
/// Mirrors [`BitWriter`]: bits are consumed most-significant-bit first.
/// The readable range is bounded, so filler bits in the final byte can be
/// excluded via [`BitReader::strip_trailing`] and any read past the bound
/// reports [`DecompressionError::UnexpectedEof`] instead of inventing data.
#[derive(Debug, Clone)]
pub struct BitReader<'a> {
    bytes: &'a [u8],
    pos: usize,
    bit_len: usize,
}

impl<'a> BitReader<'a> {
    #[must_use]
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self {
            bytes,
            pos: 0,
            bit_len: bytes.len() * 8,
        }
    }

    /// Number of readable bits left.
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.bit_len - self.pos
    }

    /// Removes `count` bits from the end of the readable range.
    ///
    /// Used to drop the trailing padding declared in a payload header.
    /// Fails if fewer than `count` unread bits remain.
    pub fn strip_trailing(&mut self, count: usize) -> Result<()> {
        if count > self.remaining() {
            return Err(DecompressionError::InvalidPadding);
        }
        self.bit_len -= count;
        Ok(())
    }

    /// Reads the next bit.
    pub fn read_bit(&mut self) -> Result<bool> {
        if self.pos >= self.bit_len {
            return Err(DecompressionError::UnexpectedEof);
        }
        let bit = (self.bytes[self.pos / 8] >> (7 - self.pos % 8)) & 1 != 0;
        self.pos += 1;
        Ok(bit)
    }

    /// Reads the next 8 bits as a byte, most significant first.
    pub fn read_byte(&mut self) -> Result<u8> {
        let mut byte = 0u8;
        for _ in 0..8 {
            byte = byte << 1 | u8::from(self.read_bit()?);
        }
        Ok(byte)
    }
}

#[cfg(test)]
mod tests {
    use super::{BitReader, BitWriter};
    use crate::error::DecompressionError;

    #[test]
    fn writer_packs_msb_first() {
        let mut writer = BitWriter::new();
        writer.push_bits(&[true, false, true]);
        assert_eq!(writer.bit_len(), 3);
        assert_eq!(writer.padding_to_byte(), 5);
        assert_eq!(writer.into_bytes(), [0b1010_0000]);
    }

    #[test]
    fn writer_spans_byte_boundary() {
        let mut writer = BitWriter::new();
        writer.push_byte(0xAB);
        writer.push_bit(true);
        assert_eq!(writer.bit_len(), 9);
        assert_eq!(writer.padding_to_byte(), 7);
        assert_eq!(writer.into_bytes(), [0xAB, 0b1000_0000]);
    }

    #[test]
    fn reader_mirrors_writer() {
        let mut writer = BitWriter::new();
        writer.push_bits(&[true, true, false]);
        writer.push_byte(0x5C);
        let bytes = writer.into_bytes();

        let mut reader = BitReader::new(&bytes);
        assert!(reader.read_bit().unwrap());
        assert!(reader.read_bit().unwrap());
        assert!(!reader.read_bit().unwrap());
        assert_eq!(reader.read_byte().unwrap(), 0x5C);
    }

    #[test]
    fn reader_stops_at_stripped_bound() {
        let bytes = [0xFF];
        let mut reader = BitReader::new(&bytes);
        reader.strip_trailing(6).unwrap();
        assert_eq!(reader.remaining(), 2);
        assert!(reader.read_bit().unwrap());
        assert!(reader.read_bit().unwrap());
        assert_eq!(reader.read_bit(), Err(DecompressionError::UnexpectedEof));
    }

    #[test]
    fn strip_beyond_remaining_is_rejected() {
        let bytes = [0x00];
        let mut reader = BitReader::new(&bytes);
        reader.read_bit().unwrap();
        assert_eq!(
            reader.strip_trailing(8),
            Err(DecompressionError::InvalidPadding)
        );
    }

    #[test]
    fn empty_reader_has_no_bits() {
        let mut reader = BitReader::new(&[]);
        assert_eq!(reader.remaining(), 0);
        assert_eq!(reader.read_bit(), Err(DecompressionError::UnexpectedEof));
    }
}
