use super::options::STDLIB_MODULE;
use super::{Kind, Node};

/// Shorthand syntax for standard library generic types.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Sugar {
    /// `T?`
    Optional,
    /// `T!`
    ImplicitlyUnwrappedOptional,
    /// `[T]`
    Array,
    /// `[K : V]`
    Dictionary,
}

impl Sugar {
    const fn arity(self) -> usize {
        match self {
            Self::Optional | Self::ImplicitlyUnwrappedOptional | Self::Array => 1,
            Self::Dictionary => 2,
        }
    }
}

fn is_stdlib_module(node: &Node) -> bool {
    node.kind == Kind::Module && node.text() == Some(STDLIB_MODULE)
}

/// Recognizes a bound generic enum or structure that can be written with sugar.
///
/// The unbound type must be declared directly in the standard library module and the number of generic arguments
/// must match exactly.
pub fn find_sugar(node: &Node) -> Option<Sugar> {
    if node.kind == Kind::Type && node.num_children() == 1 {
        return find_sugar(node.first_child()?);
    }

    if node.num_children() != 2 || !matches!(node.kind, Kind::BoundGenericEnum | Kind::BoundGenericStructure) {
        return None;
    }

    let unbound_type = node.first_child()?.first_child()?;
    let type_arguments = node.child(1)?;
    let name = unbound_type.child(1).filter(|name| name.kind == Kind::Identifier)?;

    if !is_stdlib_module(unbound_type.child(0)?) {
        return None;
    }

    let sugar = match (node.kind, name.text()?) {
        (Kind::BoundGenericEnum, "Optional") => Sugar::Optional,
        (Kind::BoundGenericEnum, "ImplicitlyUnwrappedOptional") => Sugar::ImplicitlyUnwrappedOptional,
        (Kind::BoundGenericStructure, "Array") => Sugar::Array,
        (Kind::BoundGenericStructure, "Dictionary") => Sugar::Dictionary,
        _ => return None,
    };

    (type_arguments.num_children() == sugar.arity()).then_some(sugar)
}
