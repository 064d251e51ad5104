use crate::huffman_coding::code_table::CodeTable;

/// Aggregate quality figures for a code table.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CodeStats {
    /// Mean bits per symbol: sum of weight(s) * len(code(s)).
    pub weighted_path_length: f64,
    /// Sum of 2^-len(code(s)) * -log2(weight(s)).
    pub entropy_like: f64,
    /// entropy_like / weighted_path_length.
    pub efficiency: f64,
}

/// Compute code statistics from a code table (frequencies ride along in the
/// table entries).
///
/// Note that `entropy_like` pairs each code's Kraft budget `2^-len` with the
/// information content `-log2(weight)` of its symbol, so the `efficiency`
/// ratio is not the textbook Shannon-entropy over mean-code-length figure.
/// It is reported exactly as defined here.
pub fn stats<S>(table: &CodeTable<S>) -> CodeStats {
    let total: u64 = table.values().map(|entry| entry.frequency).sum();

    let mut weight_sum = 0.0;
    let mut weighted_path_length = 0.0;
    let mut entropy_like = 0.0;
    for entry in table.values() {
        let weight = entry.frequency as f64 / total as f64;
        let len = entry.code.len as i32;
        weight_sum += weight;
        weighted_path_length += weight * len as f64;
        entropy_like += 0.5_f64.powi(len) * -weight.log2();
    }
    assert!(
        (weight_sum - 1.0).abs() < 1e-9,
        "symbol weights sum to {}, not 1",
        weight_sum
    );

    CodeStats {
        weighted_path_length,
        entropy_like,
        efficiency: entropy_like / weighted_path_length,
    }
}

#[cfg(test)]
mod test {
    use super::stats;
    use crate::bitstream::bitpacker::compress;

    fn chars(text: &str) -> Vec<char> {
        text.chars().collect()
    }

    #[test]
    fn uniform_two_symbol_case() {
        // Two equally frequent symbols get one bit each: exactly 1
        // bit/symbol, and every term collapses to 1.
        let (table, _) = compress(&chars("aabb"), 8).unwrap();
        let report = stats(&table);
        assert_eq!(report.weighted_path_length, 1.0);
        assert_eq!(report.entropy_like, 1.0);
        assert_eq!(report.efficiency, 1.0);
    }

    #[test]
    fn skewed_case_matches_hand_computation() {
        // aabbc: weights 0.4/0.4/0.2, code lengths a=2 b=1 c=2.
        let (table, _) = compress(&chars("aabbc"), 8).unwrap();
        let report = stats(&table);

        let wpl = 0.4 * 2.0 + 0.4 * 1.0 + 0.2 * 2.0;
        // -log2(0.4) = log2(2.5) and -log2(0.2) = log2(5).
        let entropy_like = 0.25 * 2.5_f64.log2() + 0.5 * 2.5_f64.log2() + 0.25 * 5.0_f64.log2();

        assert!((report.weighted_path_length - wpl).abs() < 1e-12);
        assert!((report.entropy_like - entropy_like).abs() < 1e-12);
        assert!((report.efficiency - entropy_like / wpl).abs() < 1e-12);
    }

    #[test]
    fn degenerate_alphabet_stats() {
        // One symbol with the forced one-bit code: weight 1, wpl 1, and the
        // information content of a certain symbol is zero.
        let (table, _) = compress(&chars("aa"), 8).unwrap();
        let report = stats(&table);
        assert_eq!(report.weighted_path_length, 1.0);
        assert_eq!(report.entropy_like, 0.0);
        assert_eq!(report.efficiency, 0.0);
    }
}
