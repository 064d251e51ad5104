//! Reverses the packer: rebuilds the encoded bitstream from its chunks and
//! walks the code tree to recover the original symbol sequence.

use log::trace;

use crate::bitstream::bitpacker::{Chunk, MAX_CHUNK_BITS};
use crate::bitstream::bitstring::BitString;
use crate::error::{HuffError, Result};
use crate::huffman_coding::huffman::{Node, NodeData};

/// Rebuild the encoded bitstream from its chunks.
///
/// Each chunk contributes its value zero-padded on the left to its recorded
/// width, in chunk order. The packer never produces a zero-width chunk or a
/// value wider than its width, so either marks the data as corrupt.
pub fn reassemble(chunks: &[Chunk]) -> Result<BitString> {
    let mut stream = BitString::new();
    for (i, chunk) in chunks.iter().enumerate() {
        if chunk.bits == 0 || chunk.bits as usize > MAX_CHUNK_BITS {
            return Err(HuffError::decode(format!(
                "chunk {} has invalid width {}",
                i, chunk.bits
            )));
        }
        if chunk.bits < 64 && chunk.value >> chunk.bits != 0 {
            return Err(HuffError::decode(format!(
                "chunk {} value {} does not fit in {} bits",
                i, chunk.value, chunk.bits
            )));
        }
        stream.push_bits(chunk.value, chunk.bits);
    }
    Ok(stream)
}

/// Decode a bitstream back into symbols by walking the tree.
///
/// Starts at the root, descends left on 0 and right on 1, emits the symbol
/// on reaching a leaf, and restarts at the root. The stream must end exactly
/// at a leaf boundary; ending mid-descent means the chunk data was truncated
/// or corrupted, since a correctly packed stream always ends on a symbol no
/// matter where the chunk boundaries fell.
pub fn decode<S: Clone>(stream: &BitString, root: &Node<S>) -> Result<Vec<S>> {
    // A lone-leaf tree codes its one symbol as a single 0 bit.
    if let NodeData::Leaf(symbol) = &root.node_data {
        let mut out = Vec::with_capacity(stream.len());
        for (i, bit) in stream.iter().enumerate() {
            if bit {
                return Err(HuffError::decode(format!(
                    "unexpected 1 bit at {} for a one-symbol alphabet",
                    i
                )));
            }
            out.push(symbol.clone());
        }
        return Ok(out);
    }

    let mut out = Vec::new();
    let mut node = root;
    for bit in stream.iter() {
        node = match &node.node_data {
            NodeData::Kids(left, right) => {
                if bit {
                    right.as_ref()
                } else {
                    left.as_ref()
                }
            }
            NodeData::Leaf(_) => unreachable!("walk restarts at the root after each leaf"),
        };
        if let NodeData::Leaf(symbol) = &node.node_data {
            out.push(symbol.clone());
            node = root;
        }
    }
    if !std::ptr::eq(node, root) {
        return Err(HuffError::decode(
            "bitstream ended mid-code; chunk data is truncated or corrupt",
        ));
    }
    trace!("Decoded {} symbols from {} bits", out.len(), stream.len());
    Ok(out)
}
