//! Helpers shared by the integration tests and the fuzz targets.

use std::fmt;
use strum::{EnumCount, IntoEnumIterator};
use swift_node_printer::swift::{Kind, MAX_DEPTH, Node};

/// Branching nesting beyond this depth is never generated by [`tree_from_bytes`].
pub const MAX_GENERATED_DEPTH: usize = 24;

/// At most one single-child chain of up to this many nodes is generated per tree by [`tree_from_bytes`], so trees
/// can run past the printer's depth limit.
pub const MAX_GENERATED_CHAIN: usize = 2 * MAX_DEPTH;

/// Upper bound on the number of nodes generated by [`tree_from_bytes`].
pub const MAX_GENERATED_NODES: usize = 4096;

/// A [`fmt::Write`] that fails once more than `capacity` bytes have been written.
pub struct BoundedWriter<T> {
    inner: T,
    capacity: usize,
}

impl<T> BoundedWriter<T> {
    /// Wraps `inner`, accepting at most `capacity` bytes.
    pub const fn new(inner: T, capacity: usize) -> Self {
        Self { inner, capacity }
    }

    /// Bytes that can still be written.
    pub const fn remaining(&self) -> usize {
        self.capacity
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> fmt::Write for BoundedWriter<T>
where
    T: fmt::Write,
{
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.capacity = self.capacity.checked_sub(s.len()).ok_or(fmt::Error)?;

        self.inner.write_str(s)
    }
}

/// Builds a Swift-ish identifier node.
#[must_use]
pub fn identifier(name: &str) -> Node<'static> {
    Node::with_text(Kind::Identifier, name.to_owned())
}

/// Builds a module node.
#[must_use]
pub fn module(name: &str) -> Node<'static> {
    Node::with_text(Kind::Module, name.to_owned())
}

/// Wraps a node into a `Type` node.
#[must_use]
pub fn type_of(node: Node<'static>) -> Node<'static> {
    Node::with_children(Kind::Type, [node])
}

/// Builds `Type(kind(Module(module), Identifier(name)))`.
#[must_use]
pub fn nominal_type(kind: Kind, module_name: &str, name: &str) -> Node<'static> {
    type_of(Node::with_children(kind, [module(module_name), identifier(name)]))
}

/// Builds a bound generic type like `Swift.Array<Swift.Int>`.
#[must_use]
pub fn bound_generic_type(
    kind: Kind,
    unbound: Node<'static>,
    arguments: impl IntoIterator<Item = Node<'static>>,
) -> Node<'static> {
    type_of(Node::with_children(
        kind,
        [unbound, Node::with_children(Kind::TypeList, arguments)],
    ))
}

/// Builds a function type from a parameter type and a result type.
#[must_use]
pub fn function_type(parameters: Node<'static>, result: Node<'static>) -> Node<'static> {
    type_of(Node::with_children(
        Kind::FunctionType,
        [
            Node::with_children(Kind::ArgumentTuple, [parameters]),
            Node::with_children(Kind::ReturnType, [result]),
        ],
    ))
}

/// Builds a tuple type, each element optionally labeled.
#[must_use]
pub fn tuple_type<'l>(elements: impl IntoIterator<Item = (Option<&'l str>, Node<'static>)>) -> Node<'static> {
    type_of(Node::with_children(
        Kind::Tuple,
        elements.into_iter().map(|(label, element)| {
            let mut node = Node::new(Kind::TupleElement);

            if let Some(label) = label {
                node.push(Node::with_text(Kind::TupleElementName, label.to_owned()));
            }

            node.push(element);

            node
        }),
    ))
}

struct ByteReader<'d> {
    data: &'d [u8],
    nodes: usize,
    chained: bool,
}

impl ByteReader<'_> {
    fn next_byte(&mut self) -> u8 {
        match self.data.split_first() {
            Some((&byte, rest)) => {
                self.data = rest;

                byte
            }
            None => 0,
        }
    }

    fn kind(&mut self) -> Kind {
        let raw = u16::from_le_bytes([self.next_byte(), self.next_byte()]);

        Kind::iter()
            .nth(usize::from(raw) % Kind::COUNT)
            .unwrap_or(Kind::Identifier)
    }

    fn text(&mut self) -> String {
        const ALPHABET: &[u8] = b"ABCTUVabcdefgxyz_0123456789";

        let length = usize::from(self.next_byte() % 8);

        (0..length)
            .map(|_| char::from(ALPHABET[usize::from(self.next_byte()) % ALPHABET.len()]))
            .collect()
    }

    fn node(&mut self, depth: usize) -> Node<'static> {
        self.nodes += 1;

        let kind = self.kind();
        let tag = self.next_byte();

        let mut node = match tag % 4 {
            0 => Node::with_text(kind, self.text()),
            1 => Node::with_index(kind, u64::from(self.next_byte())),
            2 => Node::new(kind),
            _ => return self.chain(kind, depth),
        };

        let num_children = if depth < MAX_GENERATED_DEPTH && !self.data.is_empty() {
            tag / 4 % 6
        } else {
            0
        };

        for _ in 0..num_children {
            if self.nodes >= MAX_GENERATED_NODES {
                break;
            }

            node.push(self.node(depth + 1));
        }

        node
    }

    /// Wraps the next node into a run of `kind` nodes that each have one child.
    fn chain(&mut self, kind: Kind, depth: usize) -> Node<'static> {
        if self.chained {
            return Node::new(kind);
        }

        self.chained = true;

        let length = usize::from(self.next_byte()) * MAX_GENERATED_CHAIN / 256;

        let mut node = if depth < MAX_GENERATED_DEPTH {
            self.node(depth + 1)
        } else {
            Node::new(kind)
        };

        let length = length.min(MAX_GENERATED_NODES.saturating_sub(self.nodes));

        self.nodes += length;

        for _ in 0..length {
            node = Node::with_children(kind, [node]);
        }

        node
    }
}

/// Deterministically decodes an arbitrary node tree from raw bytes. Every byte string yields some tree, which makes
/// this suitable for fuzzing and for exhaustive robustness tests.
#[must_use]
pub fn tree_from_bytes(data: &[u8]) -> Node<'static> {
    ByteReader {
        data,
        nodes: 0,
        chained: false,
    }
    .node(0)
}

#[cfg(test)]
mod tests {
    use super::{BoundedWriter, MAX_GENERATED_CHAIN, MAX_GENERATED_DEPTH, tree_from_bytes};
    use strum::IntoEnumIterator;
    use std::fmt::Write;
    use swift_node_printer::swift::{Kind, Node, Payload};

    fn depth(node: &Node) -> usize {
        1 + node.iter().map(depth).max().unwrap_or(0)
    }

    #[test]
    fn test_bounded_writer() {
        let mut writer = BoundedWriter::new(String::new(), 5);

        assert!(writer.write_str("abc").is_ok());
        assert_eq!(writer.remaining(), 2);
        assert!(writer.write_str("def").is_err());
        assert!(writer.write_str("de").is_ok());
        assert_eq!(writer.into_inner(), "abcde");
    }

    #[test]
    fn test_tree_from_empty_bytes() {
        let tree = tree_from_bytes(&[]);

        assert_eq!(tree.kind, Kind::AccessorFunctionReference);
        assert_eq!(tree.payload, Payload::Text("".into()));
        assert!(!tree.has_children());
    }

    #[test]
    fn test_tree_from_bytes_is_deterministic_and_bounded() {
        let data = (0..4096_u32)
            .map(|i| u8::try_from(i.wrapping_mul(2_654_435_761) >> 24).unwrap())
            .collect::<Vec<_>>();

        let tree = tree_from_bytes(&data);

        assert_eq!(tree, tree_from_bytes(&data));
        assert!(depth(&tree) <= MAX_GENERATED_DEPTH + 1 + MAX_GENERATED_CHAIN);
    }

    #[test]
    fn test_tree_from_bytes_makes_one_chain() {
        let [type_low, type_high] = u16::try_from(Kind::iter().position(|kind| kind == Kind::Type).unwrap())
            .unwrap()
            .to_le_bytes();

        // A chain of `Type` nodes around a second chain request, which becomes a plain node.
        let tree = tree_from_bytes(&[type_low, type_high, 3, 255, type_low, type_high, 3, 255]);

        assert_eq!(depth(&tree), MAX_GENERATED_CHAIN - 2 + 1);

        let mut node = &tree;

        while let Some(child) = node.first_child() {
            assert_eq!(node.kind, Kind::Type);
            assert_eq!(node.num_children(), 1);

            node = child;
        }

        assert_eq!(node.kind, Kind::Type);
    }
}
