use alloc::vec::Vec;

use crate::bits::BitWriter;
use crate::freq::FrequencyTable;
use crate::tree::HuffmanTree;

/// Width of the padding-count field that opens every payload.
pub(crate) const PADDING_FIELD_BITS: usize = 3;

/// Compresses the entire input into the output vector using Huffman coding.
///
/// Wire format, bit-packed MSB-first: a 3-bit padding count, the pre-order
/// tree encoding, each input byte's code in order, then 0-7 zero filler
/// bits to the byte boundary. Empty input produces a header-only payload
/// of one byte.
///
/// Compression cannot fail: any byte sequence is a valid input.
///
/// # Parameters
/// * `input`: The source data to compress.
/// * `output`: The destination vector (appended to).
pub fn compress(input: &[u8], output: &mut Vec<u8>) {
    let frequencies = FrequencyTable::scan(input);

    let mut bits = BitWriter::new();
    // Reserve the padding field; its value is patched in below once the
    // total bit count is known.
    for _ in 0..PADDING_FIELD_BITS {
        bits.push_bit(false);
    }

    if let Some(tree) = HuffmanTree::build(&frequencies) {
        tree.serialize(&mut bits);

        let table = tree.code_table();
        for &byte in input {
            // The frequency scan saw every input byte, so a code exists.
            if let Some(code) = table.code(byte) {
                bits.push_bits(code);
            }
        }
    }

    let padding = bits.padding_to_byte();
    let mut bytes = bits.into_bytes();
    bytes[0] |= (padding as u8) << (8 - PADDING_FIELD_BITS as u8);

    output.extend_from_slice(&bytes);
}
