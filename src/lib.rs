//! Huffman coding of symbol sequences into fixed-width integer chunks.
//!
//! Builds an optimal prefix code from the symbol frequencies of an input
//! sequence, concatenates the per-symbol codes into one bitstream, and packs
//! that bitstream into (value, bit length) chunks suitable for storage or
//! transport. The reverse side reassembles the exact bitstream from the
//! chunks and walks the code tree to recover the original sequence.
//!
//! The encode side is a chain of pure functions, each usable on its own:
//!
//! `frequencies` -> `build_tree` -> `code_table` -> `encode_stream` -> `pack_chunks`
//!
//! `compress` runs the whole chain in one call. The decode side is
//! `reassemble` followed by `decode`.
//!
//! Tree construction is deterministic: equal-weight nodes merge in creation
//! order, and leaves are created in ascending symbol order. Two runs over the
//! same input always produce the same tree, the same codes, and the same
//! chunks, so a decoder can rebuild the tree from nothing but the recounted
//! frequencies.
pub mod bitstream;
pub mod error;
pub mod huffman_coding;
pub mod tools;
