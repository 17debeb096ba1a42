use super::NodePrinter;
use crate::swift::classify;
use crate::swift::options::STDLIB_MODULE;
use crate::swift::sugar::{self, Sugar};
use crate::swift::{Kind, Node};

impl NodePrinter<'_> {
    pub(super) fn print_with_parens(&mut self, type_: &Node) {
        let needs_parens = !classify::is_simple_type(type_);

        if needs_parens {
            self.output.push('(');
        }

        self.print(type_, false);

        if needs_parens {
            self.output.push(')');
        }
    }

    pub(super) fn print_bound_generic(&mut self, node: &Node) {
        if node.num_children() < 2 {
            return;
        }

        if node.num_children() != 2 || !self.options.synthesize_sugar_on_types || node.kind == Kind::BoundGenericClass {
            self.print_bound_generic_no_sugar(node);

            return;
        }

        let Some(arguments) = node.child(1) else {
            return;
        };

        // A bound protocol is printed as its conforming type viewed as the protocol.
        if node.kind == Kind::BoundGenericProtocol {
            self.print_children(arguments, "");
            self.output.push_str(" as ");
            self.print_child(node, 0);

            return;
        }

        match sugar::find_sugar(node) {
            None => self.print_bound_generic_no_sugar(node),
            Some(sugar @ (Sugar::Optional | Sugar::ImplicitlyUnwrappedOptional)) => {
                if let Some(wrapped) = self.child(arguments, 0) {
                    self.print_with_parens(wrapped);
                }

                self.output.push(if sugar == Sugar::Optional { '?' } else { '!' });
            }
            Some(Sugar::Array) => {
                self.output.push('[');
                self.print_child(arguments, 0);
                self.output.push(']');
            }
            Some(Sugar::Dictionary) => {
                self.output.push('[');
                self.print_child(arguments, 0);
                self.output.push_str(" : ");
                self.print_child(arguments, 1);
                self.output.push(']');
            }
        }
    }

    fn print_bound_generic_no_sugar(&mut self, node: &Node) {
        self.print_child(node, 0);
        self.output.push('<');

        if let Some(arguments) = self.child(node, 1) {
            self.print_children(arguments, ", ");
        }

        self.output.push('>');
    }

    /// Prints the representation of a metatype, if there is one, and returns the index of the instance type.
    fn print_metatype_representation(&mut self, node: &Node) -> usize {
        if node.num_children() == 2 {
            self.print_child(node, 0);
            self.output.push(' ');

            1
        } else {
            0
        }
    }

    pub(super) fn print_metatype(&mut self, node: &Node) {
        let index = self.print_metatype_representation(node);

        let Some(instance_type) = self.child(node, index).and_then(|type_| self.child(type_, 0)) else {
            return;
        };

        self.print_with_parens(instance_type);

        self.output.push_str(if classify::is_existential_type(instance_type) {
            ".Protocol"
        } else {
            ".Type"
        });
    }

    pub(super) fn print_existential_metatype(&mut self, node: &Node) {
        let index = self.print_metatype_representation(node);

        self.print_child(node, index);
        self.output.push_str(".Type");
    }

    pub(super) fn print_protocol_list(&mut self, node: &Node) {
        let Some(type_list) = node.first_child() else {
            return;
        };

        if type_list.has_children() {
            self.print_children(type_list, " & ");
        } else {
            self.output.push_str("Any");
        }
    }

    pub(super) fn print_protocol_list_with_class(&mut self, node: &Node) {
        if node.num_children() < 2 {
            return;
        }

        self.print_child(node, 1);
        self.output.push_str(" & ");

        if let Some(type_list) = node.first_child().and_then(Node::first_child) {
            self.print_children(type_list, " & ");
        }
    }

    pub(super) fn print_protocol_list_with_any_object(&mut self, node: &Node) {
        let Some(type_list) = node.first_child().and_then(Node::first_child) else {
            return;
        };

        if type_list.has_children() {
            self.print_children(type_list, " & ");
            self.output.push_str(" & ");
        }

        if self.options.qualify_entities && self.options.display_stdlib_module {
            self.output.push_str(STDLIB_MODULE);
            self.output.push('.');
        }

        self.output.push_str("AnyObject");
    }

    pub(super) fn print_sil_box_type_with_layout(&mut self, node: &Node) {
        let Some(layout) = node.first_child().filter(|layout| layout.kind == Kind::SILBoxLayout) else {
            self.set_invalid(node, "box type without layout");

            return;
        };

        let generic_arguments = match (node.num_children(), node.child(1), node.child(2)) {
            (1, _, _) => None,
            (3, Some(signature), Some(arguments))
                if signature.kind == Kind::DependentGenericSignature && arguments.kind == Kind::TypeList =>
            {
                self.print(signature, false);
                self.output.push(' ');

                Some(arguments)
            }
            _ => {
                self.set_invalid(node, "box type needs a layout and an optional signature with arguments");

                return;
            }
        };

        self.print(layout, false);

        if let Some(arguments) = generic_arguments {
            self.output.push_str(" <");
            self.print_children(arguments, ", ");
            self.output.push('>');
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::swift::{DemangleOptions, Kind, Node};
    use pretty_assertions::assert_eq;

    fn nominal(kind: Kind, module: &'static str, name: &'static str) -> Node<'static> {
        Node::with_children(
            Kind::Type,
            [Node::with_children(
                kind,
                [Node::with_text(Kind::Module, module), Node::with_text(Kind::Identifier, name)],
            )],
        )
    }

    fn bound(kind: Kind, unbound: Node<'static>, arguments: Vec<Node<'static>>) -> Node<'static> {
        Node::with_children(
            Kind::Type,
            [Node::with_children(
                kind,
                [unbound, Node::with_children(Kind::TypeList, arguments)],
            )],
        )
    }

    fn int() -> Node<'static> {
        nominal(Kind::Structure, "Swift", "Int")
    }

    fn function() -> Node<'static> {
        Node::with_children(
            Kind::Type,
            [Node::with_children(
                Kind::FunctionType,
                [
                    Node::with_children(Kind::ArgumentTuple, [int()]),
                    Node::with_children(Kind::ReturnType, [int()]),
                ],
            )],
        )
    }

    fn optional(wrapped: Node<'static>) -> Node<'static> {
        bound(Kind::BoundGenericEnum, nominal(Kind::Enum, "Swift", "Optional"), vec![wrapped])
    }

    #[track_caller]
    fn check(node: &Node, options: &DemangleOptions, expected: &str) {
        assert_eq!(crate::swift::try_node_to_string(node, options).as_deref(), Ok(expected));
    }

    #[test]
    fn test_sugar() {
        let sugared = DemangleOptions {
            synthesize_sugar_on_types: true,
            display_stdlib_module: false,
            ..DemangleOptions::default()
        };

        let plain = DemangleOptions {
            display_stdlib_module: false,
            ..DemangleOptions::default()
        };

        check(&optional(int()), &sugared, "Int?");
        check(&optional(int()), &plain, "Optional<Int>");
        check(
            &Node::with_children(Kind::SugaredOptional, [function().children[0].clone()]),
            &sugared,
            "((Int) -> Int)?",
        );
        check(&optional(optional(int())), &sugared, "Int??");
        check(
            &bound(
                Kind::BoundGenericEnum,
                nominal(Kind::Enum, "Swift", "ImplicitlyUnwrappedOptional"),
                vec![int()],
            ),
            &sugared,
            "Int!",
        );
        check(
            &bound(Kind::BoundGenericStructure, nominal(Kind::Structure, "Swift", "Array"), vec![int()]),
            &sugared,
            "[Int]",
        );
        check(
            &bound(
                Kind::BoundGenericStructure,
                nominal(Kind::Structure, "Swift", "Dictionary"),
                vec![int(), optional(int())],
            ),
            &sugared,
            "[Int : Int?]",
        );
    }

    #[test]
    fn test_sugar_requires_standard_library() {
        let options = DemangleOptions {
            synthesize_sugar_on_types: true,
            ..DemangleOptions::default()
        };

        check(
            &bound(Kind::BoundGenericStructure, nominal(Kind::Structure, "main", "Array"), vec![int()]),
            &options,
            "main.Array<Swift.Int>",
        );
        check(
            &bound(
                Kind::BoundGenericStructure,
                nominal(Kind::Structure, "Swift", "Dictionary"),
                vec![int()],
            ),
            &options,
            "Swift.Dictionary<Swift.Int>",
        );
        check(
            &bound(Kind::BoundGenericClass, nominal(Kind::Class, "Swift", "Array"), vec![int()]),
            &options,
            "Swift.Array<Swift.Int>",
        );
        check(
            &bound(Kind::BoundGenericProtocol, nominal(Kind::Protocol, "main", "P"), vec![int()]),
            &options,
            "Swift.Int as main.P",
        );
    }

    #[test]
    fn test_metatypes() {
        let options = DemangleOptions::default();
        let protocol = || {
            Node::with_children(
                Kind::Type,
                [Node::with_children(
                    Kind::ProtocolList,
                    [Node::with_children(Kind::TypeList, [nominal(Kind::Protocol, "main", "P")])],
                )],
            )
        };

        check(&Node::with_children(Kind::Metatype, [int()]), &options, "Swift.Int.Type");
        check(
            &Node::with_children(Kind::Metatype, [Node::with_text(Kind::MetatypeRepresentation, "@thick"), int()]),
            &options,
            "@thick Swift.Int.Type",
        );
        check(&Node::with_children(Kind::Metatype, [protocol()]), &options, "main.P.Protocol");
        check(&Node::with_children(Kind::Metatype, [function()]), &options, "((Swift.Int) -> Swift.Int).Type");
        check(&Node::with_children(Kind::ExistentialMetatype, [protocol()]), &options, "main.P.Type");
    }

    #[test]
    fn test_protocol_lists() {
        let options = DemangleOptions::default();
        let protocols = |names: &[&'static str]| {
            Node::with_children(
                Kind::ProtocolList,
                [Node::with_children(
                    Kind::TypeList,
                    names.iter().copied().map(|name| nominal(Kind::Protocol, "main", name)),
                )],
            )
        };

        check(&protocols(&[]), &options, "Any");
        check(&protocols(&["P", "Q"]), &options, "main.P & main.Q");
        check(
            &Node::with_children(
                Kind::ProtocolListWithClass,
                [protocols(&["P"]), nominal(Kind::Class, "main", "C")],
            ),
            &options,
            "main.C & main.P",
        );
        check(
            &Node::with_children(Kind::ProtocolListWithAnyObject, [protocols(&["P"])]),
            &options,
            "main.P & Swift.AnyObject",
        );
        check(
            &Node::with_children(Kind::ProtocolListWithAnyObject, [protocols(&[])]),
            &DemangleOptions {
                display_stdlib_module: false,
                ..DemangleOptions::default()
            },
            "AnyObject",
        );
    }

    #[test]
    fn test_sil_box_with_layout() {
        let field = |kind| Node::with_children(kind, [int()]);
        let layout = || {
            Node::with_children(
                Kind::SILBoxLayout,
                [field(Kind::SILBoxMutableField), field(Kind::SILBoxImmutableField)],
            )
        };

        check(
            &Node::with_children(Kind::SILBoxTypeWithLayout, [layout()]),
            &DemangleOptions::default(),
            "{ var Swift.Int, let Swift.Int }",
        );

        let generic = Node::with_children(
            Kind::SILBoxTypeWithLayout,
            [
                layout(),
                Node::with_children(
                    Kind::DependentGenericSignature,
                    [Node::with_index(Kind::DependentGenericParamCount, 1)],
                ),
                Node::with_children(Kind::TypeList, [int()]),
            ],
        );

        check(
            &generic,
            &DemangleOptions::default(),
            "<A> { var Swift.Int, let Swift.Int } <Swift.Int>",
        );
    }
}
