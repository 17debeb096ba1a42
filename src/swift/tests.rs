use super::{DemangleOptions, Kind, Node, PrintError};
use pretty_assertions::assert_eq;

fn module(name: &'static str) -> Node<'static> {
    Node::with_text(Kind::Module, name)
}

fn identifier(name: &'static str) -> Node<'static> {
    Node::with_text(Kind::Identifier, name)
}

fn nominal(kind: Kind, context: Node<'static>, name: &'static str) -> Node<'static> {
    Node::with_children(kind, [context, identifier(name)])
}

fn type_of(node: Node<'static>) -> Node<'static> {
    Node::with_children(Kind::Type, [node])
}

fn int() -> Node<'static> {
    type_of(nominal(Kind::Structure, module("Swift"), "Int"))
}

fn void() -> Node<'static> {
    type_of(Node::new(Kind::Tuple))
}

fn function_type(parameters: Node<'static>, result: Node<'static>) -> Node<'static> {
    type_of(Node::with_children(
        Kind::FunctionType,
        [
            Node::with_children(Kind::ArgumentTuple, [parameters]),
            Node::with_children(Kind::ReturnType, [result]),
        ],
    ))
}

/// `main.foo(label: Swift.Int) -> Swift.Int`
fn foo() -> Node<'static> {
    Node::with_children(
        Kind::Function,
        [
            module("main"),
            identifier("foo"),
            Node::with_children(Kind::LabelList, [identifier("label")]),
            function_type(
                type_of(Node::with_children(
                    Kind::Tuple,
                    [Node::with_children(Kind::TupleElement, [int()])],
                )),
                int(),
            ),
        ],
    )
}

#[track_caller]
fn check(node: &Node, options: &DemangleOptions, expected: &str) {
    assert_eq!(super::try_node_to_string(node, options).as_deref(), Ok(expected));
}

#[test]
fn test_end_to_end() {
    let global = Node::with_children(Kind::Global, [foo()]);

    check(&global, &DemangleOptions::default(), "main.foo(label: Swift.Int) -> Swift.Int");

    let options = DemangleOptions {
        display_stdlib_module: false,
        ..DemangleOptions::default()
    };

    check(&global, &options, "main.foo(label: Int) -> Int");
    check(&global, &DemangleOptions::simplified(), "foo(label:)");
}

#[test]
fn test_node_to_string_hides_errors() {
    let options = DemangleOptions::default();
    let malformed = Node::with_children(Kind::Global, [Node::new(Kind::TypeMetadata)]);

    assert_eq!(super::node_to_string(None, &options), "");
    assert_eq!(super::node_to_string(Some(&malformed), &options), "");
    assert_eq!(malformed.display(&options).to_string(), "");

    assert_eq!(
        super::try_node_to_string(&malformed, &options),
        Err(PrintError::Malformed {
            kind: Kind::TypeMetadata,
            reason: "missing child"
        })
    );

    assert_eq!(
        super::node_to_string(Some(&Node::with_children(Kind::Global, [foo()])), &options),
        "main.foo(label: Swift.Int) -> Swift.Int"
    );
    assert_eq!(
        format!("{}", Node::with_children(Kind::TypeMetadata, [int()]).display(&options)),
        "type metadata for Swift.Int"
    );
}

#[test]
fn test_error_messages() {
    assert_eq!(
        PrintError::Malformed {
            kind: Kind::Tuple,
            reason: "missing child"
        }
        .to_string(),
        "malformed Tuple node: missing child"
    );
    assert_eq!(
        PrintError::TooDeep { limit: 256 }.to_string(),
        "node tree is nested deeper than 256 levels"
    );
}

#[test]
fn test_prefix_and_postfix_contexts() {
    let options = DemangleOptions::default();

    check(
        &nominal(Kind::Structure, nominal(Kind::Structure, module("main"), "Outer"), "Inner"),
        &options,
        "main.Outer.Inner",
    );

    // A function has a type, so entities inside it print their context in postfix form.
    check(
        &Node::with_children(Kind::Variable, [foo(), identifier("x"), int()]),
        &options,
        "x : Swift.Int in main.foo(label: Swift.Int) -> Swift.Int",
    );

    check(
        &Node::with_children(
            Kind::Initializer,
            [Node::with_children(Kind::Variable, [module("main"), identifier("x"), int()])],
        ),
        &options,
        "variable initialization expression of main.x : Swift.Int",
    );

    check(
        &Node::with_children(Kind::DefaultArgumentInitializer, [foo(), Node::with_index(Kind::Number, 0)]),
        &options,
        "default argument 0 of main.foo(label: Swift.Int) -> Swift.Int",
    );
}

#[test]
fn test_closures() {
    let closure = Node::with_children(
        Kind::ExplicitClosure,
        [foo(), Node::with_index(Kind::Number, 0), function_type(void(), void())],
    );

    check(
        &closure,
        &DemangleOptions::default(),
        "closure #1 () -> () in main.foo(label: Swift.Int) -> Swift.Int",
    );
    check(&closure, &DemangleOptions::simplified(), "closure #1 in foo(label:)");

    let implicit = Node::with_children(
        Kind::ImplicitClosure,
        [module("main"), Node::with_index(Kind::Number, 2), function_type(void(), void())],
    );

    check(&implicit, &DemangleOptions::default(), "implicit closure #3 () -> () in main");
}

#[test]
fn test_module_qualification() {
    #[track_caller]
    fn check_module(name: &'static str, options: &DemangleOptions, expected: &str) {
        check(&nominal(Kind::Class, module(name), "C"), options, expected);
    }

    let options = DemangleOptions::default();

    check_module("main", &options, "main.C");
    check_module("Swift", &options, "Swift.C");
    check_module("__C", &options, "__C.C");
    check_module("__lldb_expr_12", &options, "__lldb_expr_12.C");

    let options = DemangleOptions {
        display_stdlib_module: false,
        display_objc_module: false,
        display_debugger_generated_module: false,
        ..DemangleOptions::default()
    }
    .hiding_module("main");

    check_module("main", &options, "C");
    check_module("Swift", &options, "C");
    check_module("__C", &options, "C");
    check_module("__lldb_expr_12", &options, "C");
    check_module("other", &options, "other.C");

    let options = DemangleOptions {
        qualify_entities: false,
        ..DemangleOptions::default()
    };

    check_module("other", &options, "C");
}

#[test]
fn test_local_and_private_names() {
    let local = Node::with_children(
        Kind::Structure,
        [
            module("main"),
            Node::with_children(Kind::LocalDeclName, [Node::with_index(Kind::Number, 0), identifier("S")]),
        ],
    );

    check(&local, &DemangleOptions::default(), "S #1 in main");
    check(
        &local,
        &DemangleOptions {
            display_local_name_contexts: false,
            ..DemangleOptions::default()
        },
        "main.S",
    );

    let private = Node::with_children(
        Kind::Structure,
        [
            module("main"),
            Node::with_children(Kind::PrivateDeclName, [identifier("_0123"), identifier("S")]),
        ],
    );

    check(&private, &DemangleOptions::default(), "main.(S in _0123)");
    check(&private, &DemangleOptions::simplified(), "S");
}

#[test]
fn test_extension_context() {
    let method = Node::with_children(
        Kind::Function,
        [
            Node::with_children(
                Kind::Extension,
                [module("other"), nominal(Kind::Structure, module("main"), "S")],
            ),
            identifier("f"),
            function_type(void(), void()),
        ],
    );

    check(&method, &DemangleOptions::default(), "(extension in other):main.S.f() -> ()");
    check(
        &method,
        &DemangleOptions {
            display_extension_contexts: false,
            ..DemangleOptions::default()
        },
        "main.S.f() -> ()",
    );
}

#[test]
fn test_accessors_and_initializers() {
    let options = DemangleOptions::default();
    let variable = || Node::with_children(Kind::Variable, [module("main"), identifier("x"), int()]);

    check(
        &Node::with_children(Kind::Getter, [variable()]),
        &options,
        "main.x.getter : Swift.Int",
    );
    check(
        &Node::with_children(Kind::ModifyAccessor, [variable()]),
        &options,
        "main.x.modify : Swift.Int",
    );
    check(
        &Node::with_children(
            Kind::Setter,
            [Node::with_children(
                Kind::Subscript,
                [nominal(Kind::Structure, module("main"), "S"), function_type(int(), void())],
            )],
        ),
        &options,
        "main.S.subscript.setter : (Swift.Int) -> ()",
    );
    assert!(super::try_node_to_string(&Node::with_children(Kind::Getter, [int()]), &options).is_err());

    let class = || nominal(Kind::Class, module("main"), "C");

    check(
        &Node::with_children(
            Kind::Allocator,
            [class(), function_type(void(), type_of(class()))],
        ),
        &options,
        "main.C.__allocating_init() -> main.C",
    );
    check(
        &Node::with_children(Kind::Deallocator, [class()]),
        &options,
        "main.C.__deallocating_deinit",
    );
    check(
        &Node::with_children(Kind::Deallocator, [nominal(Kind::Structure, module("main"), "S")]),
        &options,
        "main.S.deinit",
    );
}

#[test]
fn test_entity_types_can_be_hidden() {
    let variable = Node::with_children(Kind::Variable, [module("main"), identifier("x"), int()]);

    check(&variable, &DemangleOptions::default(), "main.x : Swift.Int");
    check(
        &variable,
        &DemangleOptions {
            display_entity_types: false,
            ..DemangleOptions::default()
        },
        "main.x",
    );
}

#[test]
fn test_protocol_witness() {
    let conformance = Node::with_children(
        Kind::ProtocolConformance,
        [
            int(),
            type_of(nominal(Kind::Protocol, module("Swift"), "Hashable")),
            module("main"),
        ],
    );

    let witness = Node::with_children(Kind::ProtocolWitness, [conformance, foo()]);

    check(
        &witness,
        &DemangleOptions::default(),
        "protocol witness for main.foo(label: Swift.Int) -> Swift.Int in conformance Swift.Int : Swift.Hashable in main",
    );
    check(
        &witness,
        &DemangleOptions::simplified(),
        "protocol witness for foo(label:) in conformance Int",
    );
}

#[test]
fn test_unmangled_suffix() {
    let global = Node::with_children(
        Kind::Global,
        [
            Node::with_children(Kind::TypeMetadata, [int()]),
            Node::with_text(Kind::Suffix, "\u{1}x\"y"),
        ],
    );

    check(
        &global,
        &DemangleOptions::default(),
        r#"type metadata for Swift.Int with unmangled suffix "\x01x\"y""#,
    );
    check(&global, &DemangleOptions::simplified(), "type metadata for Int");
}

#[test]
fn test_sugar_matches_sugared_nodes() {
    let options = DemangleOptions {
        synthesize_sugar_on_types: true,
        ..DemangleOptions::default()
    };

    let optional_enum = type_of(Node::with_children(
        Kind::BoundGenericEnum,
        [
            type_of(nominal(Kind::Enum, module("Swift"), "Optional")),
            Node::with_children(Kind::TypeList, [int()]),
        ],
    ));

    let sugared = type_of(Node::with_children(Kind::SugaredOptional, [int()]));

    check(&optional_enum, &options, "Swift.Int?");
    check(&sugared, &options, "Swift.Int?");
    check(&optional_enum, &DemangleOptions::default(), "Swift.Optional<Swift.Int>");
}

#[test]
fn test_generic_function() {
    let generic_type = type_of(Node::with_children(
        Kind::DependentGenericType,
        [
            Node::with_children(
                Kind::DependentGenericSignature,
                [
                    Node::with_index(Kind::DependentGenericParamCount, 1),
                    Node::with_children(
                        Kind::DependentGenericConformanceRequirement,
                        [
                            type_of(Node::with_children(
                                Kind::DependentGenericParamType,
                                [Node::with_index(Kind::Index, 0), Node::with_index(Kind::Index, 0)],
                            )),
                            type_of(nominal(Kind::Protocol, module("Swift"), "Equatable")),
                        ],
                    ),
                ],
            ),
            function_type(void(), void()),
        ],
    ));

    let function = Node::with_children(
        Kind::Function,
        [
            module("main"),
            identifier("g"),
            Node::new(Kind::LabelList),
            generic_type,
        ],
    );

    check(
        &function,
        &DemangleOptions::default(),
        "main.g<A where A: Swift.Equatable>() -> ()",
    );
}

#[test]
fn test_shared_subtrees() {
    let shared = std::rc::Rc::new(int());
    let tuple = type_of(Node::with_children(
        Kind::Tuple,
        [
            Node::with_children(Kind::TupleElement, [std::rc::Rc::clone(&shared)]),
            Node::with_children(
                Kind::TupleElement,
                [
                    Node::with_text(Kind::TupleElementName, "b").into(),
                    std::rc::Rc::clone(&shared),
                    Node::new(Kind::VariadicMarker).into(),
                ],
            ),
        ],
    ));

    check(&tuple, &DemangleOptions::default(), "(Swift.Int, b: Swift.Int...)");
}
