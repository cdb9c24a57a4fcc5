use alloc::vec::Vec;

use crate::bits::BitReader;
use crate::compress::PADDING_FIELD_BITS;
use crate::error::DecompressionError;
use crate::tree::HuffmanTree;

type Result<T> = core::result::Result<T, DecompressionError>;

/// Decompresses an entire Huffman payload.
///
/// Reads the 3-bit padding header, strips the declared filler bits from
/// the end of the stream, reconstructs the prefix-code tree from its
/// pre-order encoding, then walks the tree (`0` left, `1` right) once per
/// output byte until the readable bits are exhausted.
///
/// A payload that is empty after the header decodes to empty output; that
/// is the header-only form the compressor emits for empty input.
///
/// # Parameters
/// * `input`: The compressed payload.
/// * `output`: The destination vector (appended to).
///
/// # Errors
/// Any malformed or truncated payload is reported as a
/// [`DecompressionError`]; no partial or wrong bytes are emitted for a
/// detectably-invalid stream.
pub fn decompress(input: &[u8], output: &mut Vec<u8>) -> Result<()> {
    let mut reader = BitReader::new(input);

    if reader.remaining() < PADDING_FIELD_BITS {
        return Err(DecompressionError::InvalidHeader);
    }
    let mut padding = 0usize;
    for _ in 0..PADDING_FIELD_BITS {
        padding = padding << 1 | usize::from(reader.read_bit()?);
    }
    reader.strip_trailing(padding)?;

    // Header-only payload: the original input was empty.
    if reader.remaining() == 0 {
        return Ok(());
    }

    let tree = HuffmanTree::deserialize(&mut reader)?;
    if tree.is_bare_leaf() && reader.remaining() > 0 {
        // A bare-leaf tree would decode symbols without consuming bits.
        // The encoder never produces one.
        return Err(DecompressionError::MalformedTree);
    }

    // Heuristic capacity reservation to reduce allocation churn; each
    // decoded byte consumes at least one bit.
    let heuristic_cap = reader.remaining() / 2;
    if output.capacity() < output.len() + heuristic_cap {
        output.reserve(heuristic_cap);
    }

    while reader.remaining() > 0 {
        output.push(tree.decode_symbol(&mut reader)?);
    }

    Ok(())
}
