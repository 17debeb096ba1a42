use super::NodePrinter;
use crate::swift::{Kind, Node};
use strum_macros::{EnumCount, EnumIter, FromRepr, IntoStaticStr};

/// Entries of a value witness table, numbered the way they are mangled.
#[derive(Clone, Copy, Debug, EnumCount, EnumIter, Eq, FromRepr, IntoStaticStr, PartialEq)]
#[strum(serialize_all = "camelCase")]
#[repr(u8)]
enum ValueWitnessKind {
    AllocateBuffer,
    AssignWithCopy,
    AssignWithTake,
    DeallocateBuffer,
    Destroy,
    DestroyBuffer,
    DestroyArray,
    InitializeBufferWithCopyOfBuffer,
    InitializeBufferWithCopy,
    InitializeWithCopy,
    InitializeBufferWithTake,
    InitializeWithTake,
    ProjectBuffer,
    InitializeBufferWithTakeOfBuffer,
    InitializeArrayWithCopy,
    InitializeArrayWithTakeFrontToBack,
    InitializeArrayWithTakeBackToFront,
    StoreExtraInhabitant,
    GetExtraInhabitantIndex,
    GetEnumTag,
    DestructiveProjectEnumData,
    DestructiveInjectEnumTag,
    GetEnumTagSinglePayload,
    StoreEnumTagSinglePayload,
}

#[derive(Clone, Copy, Debug, Eq, FromRepr, IntoStaticStr, PartialEq)]
#[strum(serialize_all = "lowercase")]
#[repr(u8)]
enum Directness {
    Direct,
    Indirect,
}

fn from_index<T>(index: u64, from_repr: impl FnOnce(u8) -> Option<T>) -> Option<T> {
    u8::try_from(index).ok().and_then(from_repr)
}

impl NodePrinter<'_> {
    pub(super) fn print_value_witness(&mut self, node: &Node) {
        let index = self.child_index(node, 0);

        let Some(witness) = from_index(index, ValueWitnessKind::from_repr) else {
            self.set_invalid(node, "unknown value witness");

            return;
        };

        self.output.push_str(witness.into());

        self.output.push_str(if self.options.shorten_value_witness {
            " for "
        } else {
            " value witness for "
        });

        self.print_child(node, 1);
    }

    pub(super) fn print_directness(&mut self, node: &Node) {
        let index = self.index(node);

        match from_index(index, Directness::from_repr) {
            Some(directness) => {
                self.output.push_str(directness.into());
                self.output.push(' ');
            }
            None => self.set_invalid(node, "unknown directness"),
        }
    }

    pub(super) fn print_symbolic_reference(&mut self, description: &str, node: &Node) {
        let address = self.index(node);

        self.output.push_str(description);
        self.output.push_hex(address);
    }

    pub(super) fn print_partial_apply(&mut self, node: &Node) {
        self.output.push_str(if self.options.shorten_partial_apply {
            "partial apply"
        } else if node.kind == Kind::PartialApplyObjCForwarder {
            "partial apply ObjC forwarder"
        } else {
            "partial apply forwarder"
        });

        if node.has_children() {
            self.output.push_str(" for ");
            self.print_children(node, "");
        }
    }

    pub(super) fn print_reabstraction_thunk(&mut self, node: &Node) {
        if self.options.shorten_thunk {
            self.output.push_str("thunk for ");

            match node.last_child() {
                Some(to_type) => {
                    self.print(to_type, false);
                }
                None => self.set_invalid(node, "thunk without types"),
            }

            return;
        }

        self.output.push_str("reabstraction thunk ");

        if node.kind == Kind::ReabstractionThunkHelper {
            self.output.push_str("helper ");
        }

        let first = self.print_thunk_generics(node, 3);

        self.print_described("from ", node, first + 1);
        self.print_described(" to ", node, first);
    }

    pub(super) fn print_reabstraction_thunk_with_self(&mut self, node: &Node) {
        self.output.push_str("reabstraction thunk ");

        let first = self.print_thunk_generics(node, 4);

        self.print_described("from ", node, first + 2);
        self.print_described(" to ", node, first + 1);
        self.print_described(" self ", node, first);
    }

    /// Prints the generic signature that leads a thunk with `generic_arity` children, returning where the types start.
    fn print_thunk_generics(&mut self, node: &Node, generic_arity: usize) -> usize {
        if node.num_children() == generic_arity {
            self.print_child(node, 0);
            self.output.push(' ');

            1
        } else {
            0
        }
    }

    pub(super) fn print_key_path_accessor(&mut self, node: &Node) {
        self.output.push_str(if node.kind == Kind::KeyPathGetterThunkHelper {
            "key path getter for "
        } else {
            "key path setter for "
        });

        self.print_child(node, 0);
        self.output.push_str(" : ");

        for child in node.iter().skip(1) {
            if child.kind == Kind::IsSerialized {
                self.output.push_str(", ");
            }

            self.print(child, false);
        }
    }

    pub(super) fn print_key_path_index_operator(&mut self, node: &Node) {
        self.output.push_str(if node.kind == Kind::KeyPathEqualsThunkHelper {
            "key path index equality operator for "
        } else {
            "key path index hash operator for "
        });

        let mut operands = node.children.as_slice();

        if let [rest @ .., last] = operands
            && last.kind == Kind::IsSerialized
        {
            operands = rest;
        }

        match operands {
            [rest @ .., signature] if signature.kind == Kind::DependentGenericSignature => {
                self.print(signature, false);
                operands = rest;
            }
            [] => {
                self.set_invalid(node, "index operator without operands");

                return;
            }
            _ => {}
        }

        self.output.push('(');

        for (i, operand) in operands.iter().enumerate() {
            if i != 0 {
                self.output.push_str(", ");
            }

            self.print(operand, false);
        }

        self.output.push(')');
    }
}
