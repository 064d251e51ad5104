use std::fmt::{self, Display, Formatter};
use std::hash::Hash;

use rustc_hash::FxHashMap;

use super::huffman::{Node, NodeData};

/// One huffman code: up to 64 bits, most significant bit first. Only the low
/// `len` bits of `bits` are meaningful.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Codeword {
    pub bits: u64,
    pub len: u8,
}

impl Codeword {
    /// Extend this code by one bit: 0 descends left, 1 descends right.
    fn appended(self, bit: u64) -> Codeword {
        // A 65-bit code would need an alphabet and input size no in-memory
        // sequence can reach; treat it as a construction bug.
        assert!(self.len < 64, "huffman code grew past 64 bits");
        Codeword {
            bits: self.bits << 1 | bit,
            len: self.len + 1,
        }
    }

    /// True when this code matches the leading bits of `other`.
    pub fn is_prefix_of(&self, other: &Codeword) -> bool {
        self.len <= other.len && other.bits >> (other.len - self.len) == self.bits
    }
}

impl Display for Codeword {
    /// Render as a 0/1 string, preserving leading zeros.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.len == 0 {
            return Ok(());
        }
        write!(f, "{:0>1$b}", self.bits, self.len as usize)
    }
}

/// Frequency and code assigned to one symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeEntry {
    pub frequency: u64,
    pub code: Codeword,
}

/// Symbol -> (frequency, code). Codes are prefix-free because they are the
/// root-to-leaf paths of one tree.
pub type CodeTable<S> = FxHashMap<S, CodeEntry>;

/// Walk the tree depth-first and assign a code to every leaf symbol: left
/// edges append 0, right edges append 1.
///
/// A lone-leaf root (one-symbol alphabet) would accumulate an empty code, so
/// it is assigned the one-bit code `0` instead. The packed stream then still
/// carries one bit per occurrence and remains decodable.
pub fn code_table<S: Eq + Hash + Clone>(root: &Node<S>) -> CodeTable<S> {
    let mut table = FxHashMap::default();
    match &root.node_data {
        NodeData::Leaf(symbol) => {
            table.insert(
                symbol.clone(),
                CodeEntry {
                    frequency: root.weight,
                    code: Codeword { bits: 0, len: 1 },
                },
            );
        }
        NodeData::Kids(_, _) => walk(root, Codeword::default(), &mut table),
    }
    table
}

/// Recursively walk the tree, recording the accumulated code at each leaf.
fn walk<S: Eq + Hash + Clone>(node: &Node<S>, code: Codeword, table: &mut CodeTable<S>) {
    match &node.node_data {
        NodeData::Kids(left, right) => {
            walk(left, code.appended(0), table);
            walk(right, code.appended(1), table);
        }
        NodeData::Leaf(symbol) => {
            table.insert(
                symbol.clone(),
                CodeEntry {
                    frequency: node.weight,
                    code,
                },
            );
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::huffman_coding::huffman::build_tree;
    use crate::tools::freq_count::frequencies;

    fn table_of(text: &str) -> CodeTable<char> {
        let data: Vec<char> = text.chars().collect();
        code_table(&build_tree(&frequencies(&data).unwrap()).unwrap())
    }

    #[test]
    fn known_codes_test() {
        // Tree for a:2 b:2 c:1 puts 'b' alone under the root.
        let table = table_of("aabbc");
        assert_eq!(table[&'b'].code.to_string(), "0");
        assert_eq!(table[&'c'].code.to_string(), "10");
        assert_eq!(table[&'a'].code.to_string(), "11");
        assert_eq!(table[&'a'].frequency, 2);
        assert_eq!(table[&'c'].frequency, 1);
    }

    #[test]
    fn single_symbol_gets_a_real_code() {
        let table = table_of("aa");
        assert_eq!(table.len(), 1);
        let entry = &table[&'a'];
        assert_eq!(entry.frequency, 2);
        assert_eq!(entry.code, Codeword { bits: 0, len: 1 });
    }

    #[test]
    fn codes_are_prefix_free() {
        let table = table_of("the quick brown fox jumps over the lazy dog");
        let entries: Vec<_> = table.iter().collect();
        for (i, (sym_a, entry_a)) in entries.iter().enumerate() {
            for (sym_b, entry_b) in entries.iter().skip(i + 1) {
                assert!(
                    !entry_a.code.is_prefix_of(&entry_b.code),
                    "{:?} is a prefix of {:?}",
                    sym_a,
                    sym_b
                );
                assert!(
                    !entry_b.code.is_prefix_of(&entry_a.code),
                    "{:?} is a prefix of {:?}",
                    sym_b,
                    sym_a
                );
            }
        }
    }

    #[test]
    fn codeword_display_pads_leading_zeros() {
        let code = Codeword { bits: 0b001, len: 3 };
        assert_eq!(code.to_string(), "001");
    }

    #[test]
    fn codeword_prefix_test() {
        let short = Codeword { bits: 0b10, len: 2 };
        let long = Codeword { bits: 0b1011, len: 4 };
        let other = Codeword { bits: 0b1111, len: 4 };
        assert!(short.is_prefix_of(&long));
        assert!(!short.is_prefix_of(&other));
        assert!(!long.is_prefix_of(&short));
    }
}
