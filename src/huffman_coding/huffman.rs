use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

use log::trace;

use crate::error::{HuffError, Result};
use crate::tools::freq_count::FreqTable;

#[derive(Eq, PartialEq, Debug, Clone)]
pub enum NodeData<S> {
    Kids(Box<Node<S>>, Box<Node<S>>),
    Leaf(S),
}

#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Node<S> {
    pub weight: u64,
    pub seq: u32,
    pub node_data: NodeData<S>,
}

impl<S: Eq> Node<S> {
    /// Create a new node
    pub fn new(weight: u64, seq: u32, node_data: NodeData<S>) -> Node<S> {
        Node {
            weight,
            seq,
            node_data,
        }
    }
}

impl<S: Eq> Ord for Node<S> {
    /// Sort Nodes by decreasing weight and decreasing creation order, so that
    /// a max-oriented BinaryHeap pops the lightest, oldest node first. The
    /// creation order (`seq`) is the tie-break contract: leaves are numbered
    /// in ascending symbol order before any merge happens, and every merged
    /// node takes the next number. Equal weights therefore always pop in the
    /// same order, and the tree shape is fixed for a given frequency table.
    fn cmp(&self, other: &Self) -> Ordering {
        if other.weight == self.weight {
            return other.seq.cmp(&self.seq);
        }
        other.weight.cmp(&self.weight)
    }
}

impl<S: Eq> PartialOrd for Node<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Merge frequency-weighted leaves into an optimal binary prefix tree.
///
/// Builds a min-priority queue of leaves, then repeatedly pops the two
/// lightest nodes and pushes their parent back until a single root remains.
/// The first pop becomes the left child, the second the right.
pub fn build_tree<S>(freqs: &FreqTable<S>) -> Result<Node<S>>
where
    S: Eq + Hash + Ord + Clone,
{
    if freqs.is_empty() {
        return Err(HuffError::invalid_input(
            "no symbols to build a tree from",
        ));
    }

    // Number the leaves in ascending symbol order so equal-weight pops are
    // reproducible across runs.
    let mut by_symbol: Vec<(&S, &u64)> = freqs.iter().collect();
    by_symbol.sort_unstable_by(|a, b| a.0.cmp(b.0));

    let mut seq = 0_u32;
    let mut heap = BinaryHeap::with_capacity(freqs.len());
    for (symbol, &weight) in by_symbol {
        heap.push(Node::new(weight, seq, NodeData::Leaf(symbol.clone())));
        seq += 1;
    }

    // A one-symbol alphabet never merges; the bare leaf is the root and the
    // code table layer gives it a usable one-bit code.
    while heap.len() > 1 {
        let left = heap.pop().unwrap();
        let right = heap.pop().unwrap();
        trace!("merging weights {} and {}", left.weight, right.weight);
        heap.push(Node::new(
            left.weight + right.weight,
            seq,
            NodeData::Kids(Box::new(left), Box::new(right)),
        ));
        seq += 1;
    }

    Ok(heap.pop().unwrap())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::tools::freq_count::frequencies;

    fn tree_of(text: &str) -> Node<char> {
        let data: Vec<char> = text.chars().collect();
        build_tree(&frequencies(&data).unwrap()).unwrap()
    }

    #[test]
    fn two_even_symbols_test() {
        // 'a' is numbered before 'b', so it pops first and goes left.
        let root = tree_of("aabb");
        assert_eq!(root.weight, 4);
        match &root.node_data {
            NodeData::Kids(left, right) => {
                assert_eq!(left.node_data, NodeData::Leaf('a'));
                assert_eq!(right.node_data, NodeData::Leaf('b'));
            }
            NodeData::Leaf(_) => panic!("two symbols must merge"),
        }
    }

    #[test]
    fn skewed_merge_order_test() {
        // Frequencies a:2 b:2 c:1. The rare 'c' pops first and pairs with
        // 'a' (older of the equal-weight pair); 'b' then joins at the root.
        let root = tree_of("aabbc");
        assert_eq!(root.weight, 5);
        match &root.node_data {
            NodeData::Kids(left, right) => {
                assert_eq!(left.node_data, NodeData::Leaf('b'));
                match &right.node_data {
                    NodeData::Kids(inner_left, inner_right) => {
                        assert_eq!(inner_left.node_data, NodeData::Leaf('c'));
                        assert_eq!(inner_right.node_data, NodeData::Leaf('a'));
                    }
                    NodeData::Leaf(_) => panic!("expected the merged pair on the right"),
                }
            }
            NodeData::Leaf(_) => panic!("three symbols must merge"),
        }
    }

    #[test]
    fn single_symbol_tree_is_a_leaf() {
        let root = tree_of("aa");
        assert_eq!(root.weight, 2);
        assert_eq!(root.node_data, NodeData::Leaf('a'));
    }

    #[test]
    fn tree_is_deterministic() {
        let data: Vec<char> = "the quick brown fox jumps over the lazy dog"
            .chars()
            .collect();
        let freqs = frequencies(&data).unwrap();
        assert_eq!(build_tree(&freqs).unwrap(), build_tree(&freqs).unwrap());
    }

    #[test]
    fn empty_table_is_an_error() {
        let freqs = crate::tools::freq_count::FreqTable::<char>::default();
        assert!(build_tree(&freqs).is_err());
    }

    #[test]
    fn internal_weights_sum_children() {
        fn check(node: &Node<char>) {
            if let NodeData::Kids(left, right) = &node.node_data {
                assert_eq!(node.weight, left.weight + right.weight);
                check(left);
                check(right);
            }
        }
        check(&tree_of("abracadabra"));
    }
}
