use std::hash::Hash;

use log::debug;

use crate::bitstream::bitstring::BitString;
use crate::error::{HuffError, Result};
use crate::huffman_coding::code_table::{code_table, CodeTable};
use crate::huffman_coding::huffman::build_tree;
use crate::tools::freq_count::frequencies;

/// Widest chunk the packer can produce: one native u64.
pub const MAX_CHUNK_BITS: usize = 64;

/// One fixed-width window of the encoded stream.
///
/// `value` interpreted in binary and zero-padded on the left to `bits`
/// reproduces the window exactly; the recorded width is what keeps leading
/// zero bits recoverable, since the integer alone discards them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Chunk {
    pub value: u64,
    pub bits: u8,
}

/// Compress a symbol sequence into its code table and chunked bitstream.
///
/// Runs the whole encode pipeline: count frequencies, build the prefix tree,
/// derive the code table, concatenate the per-symbol codes in input order,
/// and slice the result into `chunk_bits`-wide chunks. The final chunk may be
/// narrower. The whole input is materialized; there is no streaming mode.
pub fn compress<S>(data: &[S], chunk_bits: usize) -> Result<(CodeTable<S>, Vec<Chunk>)>
where
    S: Eq + Hash + Ord + Clone,
{
    if !(1..=MAX_CHUNK_BITS).contains(&chunk_bits) {
        return Err(HuffError::invalid_input(format!(
            "chunk width must be 1-{} bits, got {}",
            MAX_CHUNK_BITS, chunk_bits
        )));
    }
    let freqs = frequencies(data)?;
    let tree = build_tree(&freqs)?;
    let table = code_table(&tree);
    let stream = encode_stream(data, &table);
    debug!(
        "Encoded {} symbols ({} unique) into {} bits",
        data.len(),
        table.len(),
        stream.len()
    );
    Ok((table, pack_chunks(&stream, chunk_bits)))
}

/// Concatenate each symbol's code, in input order, into one bitstream.
pub fn encode_stream<S: Eq + Hash>(data: &[S], table: &CodeTable<S>) -> BitString {
    let mut stream = BitString::new();
    for symbol in data {
        let entry = table.get(symbol).expect("symbol missing from code table");
        stream.push_bits(entry.code.bits, entry.code.len);
    }
    stream
}

/// Slice the stream into consecutive `chunk_bits`-wide windows, each chunk
/// recording its own actual width. `chunk_bits` must be in 1..=64; `compress`
/// validates it before calling here.
pub fn pack_chunks(stream: &BitString, chunk_bits: usize) -> Vec<Chunk> {
    debug_assert!((1..=MAX_CHUNK_BITS).contains(&chunk_bits));
    let mut chunks = Vec::with_capacity((stream.len() + chunk_bits - 1) / chunk_bits);
    let mut pos = 0;
    while pos < stream.len() {
        let width = chunk_bits.min(stream.len() - pos);
        chunks.push(Chunk {
            value: stream.window(pos, width),
            bits: width as u8,
        });
        pos += width;
    }
    chunks
}
