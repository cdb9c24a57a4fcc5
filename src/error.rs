use thiserror::Error;

/// Errors surfaced while decoding a compressed payload.
///
/// Compression has no failure path: every byte sequence is a valid input.
/// All variants denote a corrupted or truncated payload and are safe for
/// the caller to recover from.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecompressionError {
    #[error("Unexpected end of stream")]
    UnexpectedEof,

    #[error("Input too short for the padding header")]
    InvalidHeader,

    #[error("Declared padding overlaps the header or tree")]
    InvalidPadding,

    #[error("Tree encoding is nested too deeply or decodes no symbol")]
    MalformedTree,
}
