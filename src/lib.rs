//! # Huffman Compression
//!
//! `huffpack` is a safe, pure-Rust implementation of Huffman coding for
//! lossless byte-stream compression. The compressor counts byte
//! frequencies, builds an optimal prefix-code tree with a deterministic
//! tie-break, and emits a self-describing bit-packed payload: a 3-bit
//! padding count, the pre-order tree encoding, then the coded bytes. The
//! decompressor reverses the process exactly.
//!
//! ## Example
//!
//! ```rust
//! extern crate alloc;
//! use huffpack::{compress, decompress};
//! use alloc::vec::Vec;
//!
//! let mut compressed = Vec::new();
//! compress(b"Hello, world!", &mut compressed);
//!
//! let mut restored = Vec::new();
//! decompress(&compressed, &mut restored).expect("decompression failed");
//! assert_eq!(restored, b"Hello, world!");
//! ```

#![no_std]
#![forbid(unsafe_code)]

extern crate alloc;

pub mod bits;
pub mod compress;
pub mod decompress;
pub mod error;
pub mod freq;
pub mod tree;

pub use compress::compress;
pub use decompress::decompress;
pub use error::DecompressionError;
