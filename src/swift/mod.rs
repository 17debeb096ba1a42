//! Printing demangled Swift symbols.
//!
//! A Swift demangler decodes a mangled name into a tree of [`Node`]s. This module turns such a tree into the
//! declaration text a programmer would recognize, e.g. `Module.function(label: Swift.Int) -> Swift.Int`.

pub use self::kind::Kind;
pub use self::options::{DemangleOptions, GenericParameterNamer, PayloadDemangler, generic_parameter_name};
pub use self::printer::MAX_DEPTH;
use self::printer::NodePrinter;
use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};
use std::rc::Rc;

mod classify;
mod kind;
mod options;
mod output;
mod printer;
mod sugar;
#[cfg(test)]
mod tests;

/// Why a node tree was rejected by the printer.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum PrintError {
    /// A node does not have the shape its kind requires.
    #[error("malformed {kind:?} node: {reason}")]
    Malformed {
        /// Kind of the offending node.
        kind: Kind,
        /// What was wrong with it.
        reason: &'static str,
    },
    /// The tree is nested deeper than the printer is willing to recurse.
    #[error("node tree is nested deeper than {limit} levels")]
    TooDeep {
        /// The nesting limit that was exceeded.
        limit: usize,
    },
}

/// The optional payload attached to a [`Node`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub enum Payload<'a> {
    /// No payload.
    None,
    /// A piece of text, e.g. an identifier or a module name.
    Text(Cow<'a, str>),
    /// An unsigned number, e.g. a closure index or a generic parameter depth.
    Index(u64),
}

/// A node of a demangled symbol tree.
///
/// Trees are built by a demangler and are only read by the printer. Sub-trees may be shared through [`Rc`].
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Node<'a> {
    /// What the node represents.
    pub kind: Kind,
    /// Text or numeric payload.
    pub payload: Payload<'a>,
    /// Ordered children. Their expected number and kinds depend on `kind`.
    pub children: Vec<Rc<Node<'a>>>,
}

impl<'a> Node<'a> {
    /// Creates a node without payload or children.
    #[must_use]
    pub const fn new(kind: Kind) -> Self {
        Self {
            kind,
            payload: Payload::None,
            children: Vec::new(),
        }
    }

    /// Creates a node carrying a text payload.
    #[must_use]
    pub fn with_text(kind: Kind, text: impl Into<Cow<'a, str>>) -> Self {
        Self {
            kind,
            payload: Payload::Text(text.into()),
            children: Vec::new(),
        }
    }

    /// Creates a node carrying a numeric payload.
    #[must_use]
    pub const fn with_index(kind: Kind, index: u64) -> Self {
        Self {
            kind,
            payload: Payload::Index(index),
            children: Vec::new(),
        }
    }

    /// Creates a node without payload that owns the given children.
    #[must_use]
    pub fn with_children<I>(kind: Kind, children: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<Rc<Self>>,
    {
        Self {
            kind,
            payload: Payload::None,
            children: children.into_iter().map(Into::into).collect(),
        }
    }

    /// Appends a child.
    pub fn push(&mut self, child: impl Into<Rc<Self>>) {
        self.children.push(child.into());
    }

    /// Returns the child at `index`, if any.
    #[must_use]
    pub fn child(&self, index: usize) -> Option<&Self> {
        self.children.get(index).map(Rc::as_ref)
    }

    /// Returns the first child, if any.
    #[must_use]
    pub fn first_child(&self) -> Option<&Self> {
        self.children.first().map(Rc::as_ref)
    }

    /// Returns the last child, if any.
    #[must_use]
    pub fn last_child(&self) -> Option<&Self> {
        self.children.last().map(Rc::as_ref)
    }

    /// Returns the number of children.
    #[must_use]
    pub fn num_children(&self) -> usize {
        self.children.len()
    }

    /// Returns whether the node has at least one child.
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// Iterates over the children.
    pub fn iter(&self) -> impl Iterator<Item = &Self> {
        self.children.iter().map(Rc::as_ref)
    }

    /// Returns the first child of the given kind, if any.
    #[must_use]
    pub fn child_of_kind(&self, kind: Kind) -> Option<&Self> {
        self.iter().find(|child| child.kind == kind)
    }

    /// Returns the text payload, if the node carries one.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match &self.payload {
            Payload::Text(text) => Some(text),
            Payload::None | Payload::Index(_) => None,
        }
    }

    /// Returns the numeric payload, if the node carries one.
    #[must_use]
    pub const fn index(&self) -> Option<u64> {
        match self.payload {
            Payload::Index(index) => Some(index),
            Payload::None | Payload::Text(_) => None,
        }
    }

    /// Returns a value that formats the tree with the given options.
    ///
    /// A tree that cannot be printed formats as an empty string.
    pub fn display<'b>(&'b self, options: &'b DemangleOptions) -> impl Display + 'b {
        display_fn(move |f| match try_node_to_string(self, options) {
            Ok(text) => f.write_str(&text),
            Err(_) => Ok(()),
        })
    }
}

fn display_fn(f: impl Fn(&mut Formatter) -> fmt::Result) -> impl Display {
    struct Wrapper<F>(F);

    impl<F: Fn(&mut Formatter) -> fmt::Result> Display for Wrapper<F> {
        fn fmt(&self, f: &mut Formatter) -> fmt::Result {
            self.0(f)
        }
    }

    Wrapper(f)
}

/// Prints a node tree.
///
/// Returns an empty string if there is no tree or if the tree turned out to be malformed while printing it.
#[tracing::instrument(level = "trace", skip_all)]
#[must_use]
pub fn node_to_string(root: Option<&Node>, options: &DemangleOptions) -> String {
    root.map_or_else(String::new, |root| {
        try_node_to_string(root, options).unwrap_or_default()
    })
}

/// Prints a node tree, reporting why it was rejected instead of returning an empty string.
///
/// # Errors
///
/// Returns the first shape violation found in the tree, or [`PrintError::TooDeep`] for pathologically nested trees.
#[tracing::instrument(level = "trace", skip_all, fields(kind = ?root.kind))]
pub fn try_node_to_string(root: &Node, options: &DemangleOptions) -> Result<String, PrintError> {
    NodePrinter::new(options).print_root(root)
}
