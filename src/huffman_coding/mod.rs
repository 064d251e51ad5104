//! The huffman_coding module builds the prefix code at the heart of the
//! pipeline.
//!
//! The tree is an owned recursive sum type built bottom-up from a priority
//! queue of frequency-weighted leaves, so it can hold no cycles and needs no
//! back-references. Codes fall out of a depth-first walk: left edges are 0,
//! right edges are 1, and the path to each leaf is that symbol's code.
//!
//! Equal-weight nodes merge in creation order, with leaves created in
//! ascending symbol order. That tie-break is part of the contract: the same
//! frequency table always produces the same tree and the same codes.
pub mod code_table;
pub mod huffman;
