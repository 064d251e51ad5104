//! The tools module provides the helpers around the coding core.
//!
//! The tools are:
//! - cli: Command line interface.
//! - freq_count: Frequency count of the input symbols.
//! - stats: Weighted path length, entropy-like term, and efficiency of a
//!   code table.
pub mod cli;
pub mod freq_count;
pub mod stats;
