use std::hash::Hash;

use rustc_hash::FxHashMap;

use crate::error::{HuffError, Result};

/// Count of each unique symbol in the input. Counts sum to the input length.
pub type FreqTable<S> = FxHashMap<S, u64>;

/// Returns a frequency count of the input data.
///
/// The input must hold at least two symbols; a shorter sequence has nothing
/// worth coding and is rejected. The alphabet is whatever hashable type the
/// caller supplies, so mixed alphabets are impossible by construction.
pub fn frequencies<S: Eq + Hash + Clone>(data: &[S]) -> Result<FreqTable<S>> {
    if data.len() < 2 {
        return Err(HuffError::invalid_input(format!(
            "input must hold at least 2 symbols, found {}",
            data.len()
        )));
    }
    let mut freqs = FxHashMap::default();
    data.iter()
        .for_each(|el| *freqs.entry(el.clone()).or_insert(0) += 1);
    Ok(freqs)
}
