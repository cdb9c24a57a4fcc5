use alloc::boxed::Box;
use alloc::collections::BinaryHeap;
use alloc::vec;
use alloc::vec::Vec;
use core::cmp::{Ordering, Reverse};

use crate::bits::{BitReader, BitWriter};
use crate::error::DecompressionError;
use crate::freq::{FrequencyTable, SYMBOL_COUNT};

type Result<T> = core::result::Result<T, DecompressionError>;

/// Deepest internal nesting a well-formed tree over 256 symbols can reach.
/// Deserialization rejects anything deeper, which also bounds recursion
/// on hostile input.
const MAX_DEPTH: usize = 255;

/// One node of a prefix-code tree. Internal nodes always own exactly two
/// children; leaves carry the byte value they decode to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Leaf(u8),
    Internal(Box<Node>, Box<Node>),
}

/// An immutable binary prefix-code tree.
///
/// Built from a [`FrequencyTable`] during compression, or reconstructed
/// from its serialized form during decompression. Frequencies only steer
/// construction; they are not stored in the tree and not serialized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffmanTree {
    root: Node,
}

/// Priority-queue entry ordered by `(weight, seq)`.
///
/// `seq` is the insertion sequence number and makes equal-weight
/// extraction deterministic: the first-inserted node pops first.
struct QueueEntry {
    weight: u64,
    seq: u32,
    node: Node,
}

impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.weight == other.weight && self.seq == other.seq
    }
}

impl Eq for QueueEntry {}

impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .cmp(&other.weight)
            .then(self.seq.cmp(&other.seq))
    }
}

impl HuffmanTree {
    /// Builds the optimal prefix-code tree for `frequencies`.
    ///
    /// Classic bottom-up merge: the two lightest nodes are repeatedly
    /// joined under a new internal node (lighter node on the left) until
    /// one root remains. Ties are broken deterministically: leaves are
    /// seeded in ascending symbol order, every node carries an insertion
    /// sequence number, and equal-weight nodes extract in insertion order,
    /// so repeated builds on the same table produce an identical tree.
    ///
    /// Returns `None` for an empty table. A table with a single distinct
    /// symbol produces an internal root over two leaves for that symbol,
    /// so the symbol still receives a one-bit code.
    #[must_use]
    pub fn build(frequencies: &FrequencyTable) -> Option<Self> {
        let mut queue: BinaryHeap<Reverse<QueueEntry>> = BinaryHeap::new();
        let mut seq = 0u32;
        for (symbol, count) in frequencies.symbols() {
            queue.push(Reverse(QueueEntry {
                weight: count,
                seq,
                node: Node::Leaf(symbol),
            }));
            seq += 1;
        }

        if queue.len() == 1 {
            let Reverse(only) = queue.pop()?;
            let mirror = only.node.clone();
            return Some(Self {
                root: Node::Internal(Box::new(only.node), Box::new(mirror)),
            });
        }

        while queue.len() > 1 {
            let Reverse(lighter) = queue.pop()?;
            let Reverse(heavier) = queue.pop()?;
            queue.push(Reverse(QueueEntry {
                weight: lighter.weight + heavier.weight,
                seq,
                node: Node::Internal(Box::new(lighter.node), Box::new(heavier.node)),
            }));
            seq += 1;
        }

        let Reverse(root) = queue.pop()?;
        Some(Self { root: root.node })
    }

    /// Derives the per-symbol bit codes: `0` descends left, `1` descends
    /// right, and the accumulated path at each leaf is that symbol's code.
    #[must_use]
    pub fn code_table(&self) -> CodeTable {
        let mut codes = vec![Vec::new(); SYMBOL_COUNT];
        let mut path = Vec::new();
        assign_codes(&self.root, &mut path, &mut codes);
        CodeTable { codes }
    }

    /// Appends the pre-order encoding of the tree: marker bit `0` opens an
    /// internal node and is followed by the left then right subtree, `1`
    /// opens a leaf and is followed by the symbol's 8 bits. The encoding is
    /// self-delimiting, so no length field is needed.
    pub fn serialize(&self, writer: &mut BitWriter) {
        write_node(&self.root, writer);
    }

    /// Reconstructs a tree from its pre-order encoding.
    pub fn deserialize(reader: &mut BitReader<'_>) -> Result<Self> {
        Ok(Self {
            root: read_node(reader, 0)?,
        })
    }

    /// Walks the tree from the root, consuming one bit per branch, until a
    /// leaf is reached, and returns its symbol.
    pub fn decode_symbol(&self, reader: &mut BitReader<'_>) -> Result<u8> {
        let mut node = &self.root;
        loop {
            match node {
                Node::Leaf(symbol) => return Ok(*symbol),
                Node::Internal(left, right) => {
                    node = if reader.read_bit()? { right } else { left };
                }
            }
        }
    }

    /// `true` when the whole tree is a single leaf. The encoder never
    /// produces such a tree, but a decoder must recognize one: it would
    /// decode symbols without consuming any bits.
    #[must_use]
    pub const fn is_bare_leaf(&self) -> bool {
        matches!(self.root, Node::Leaf(_))
    }
}

fn assign_codes(node: &Node, path: &mut Vec<bool>, codes: &mut [Vec<bool>]) {
    match node {
        Node::Leaf(symbol) => codes[*symbol as usize] = path.clone(),
        Node::Internal(left, right) => {
            path.push(false);
            assign_codes(left, path, codes);
            path.pop();
            path.push(true);
            assign_codes(right, path, codes);
            path.pop();
        }
    }
}

fn write_node(node: &Node, writer: &mut BitWriter) {
    match node {
        Node::Leaf(symbol) => {
            writer.push_bit(true);
            writer.push_byte(*symbol);
        }
        Node::Internal(left, right) => {
            writer.push_bit(false);
            write_node(left, writer);
            write_node(right, writer);
        }
    }
}

fn read_node(reader: &mut BitReader<'_>, depth: usize) -> Result<Node> {
    if depth > MAX_DEPTH {
        return Err(DecompressionError::MalformedTree);
    }
    if reader.read_bit()? {
        Ok(Node::Leaf(reader.read_byte()?))
    } else {
        let left = read_node(reader, depth + 1)?;
        let right = read_node(reader, depth + 1)?;
        Ok(Node::Internal(Box::new(left), Box::new(right)))
    }
}

/// Per-symbol prefix codes derived from a [`HuffmanTree`].
///
/// Codes are unique, prefix-free and at least one bit long; symbols absent
/// from the tree have no code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    codes: Vec<Vec<bool>>,
}

impl CodeTable {
    /// The code for `symbol`, or `None` if the symbol is not in the tree.
    #[must_use]
    pub fn code(&self, symbol: u8) -> Option<&[bool]> {
        let bits = self.codes[symbol as usize].as_slice();
        if bits.is_empty() { None } else { Some(bits) }
    }
}
