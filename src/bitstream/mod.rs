//! The bitstream module packs encoded data into chunks and unpacks it again.
//!
//! The encoded stream is one long run of bits with no byte alignment of its
//! own. The packer slices it into fixed-width (value, bit length) chunks for
//! storage or transport; the final chunk may be narrower than the rest, and
//! every chunk records its own width so leading zero bits survive the round
//! trip. The unpacker is the exact inverse: concatenate the chunks back into
//! the stream, then walk the code tree to recover the symbols.
pub mod bitpacker;
pub mod bitstring;
pub mod bitunpacker;
