use self::entity::{EntityName, TypePrinting};
use super::output::Output;
use super::{DemangleOptions, Kind, Node, PrintError};

mod artifacts;
mod entity;
mod function;
mod generics;
mod specialization;
mod types;

/// Nesting beyond this depth is rejected instead of risking a stack overflow.
pub const MAX_DEPTH: usize = 256;

/// State of one printing call.
pub struct NodePrinter<'o> {
    options: &'o DemangleOptions,
    output: Output,
    specialization_prefix_printed: bool,
    error: Option<PrintError>,
    depth: usize,
}

impl<'o> NodePrinter<'o> {
    pub fn new(options: &'o DemangleOptions) -> Self {
        Self {
            options,
            output: Output::default(),
            specialization_prefix_printed: false,
            error: None,
            depth: 0,
        }
    }

    pub fn print_root(mut self, root: &Node) -> Result<String, PrintError> {
        self.print(root, false);

        match self.error {
            None => Ok(self.output.into_string()),
            Some(error) => Err(error),
        }
    }

    /// Marks the tree as unprintable. Only the first problem is kept.
    fn set_invalid(&mut self, node: &Node, reason: &'static str) {
        if self.error.is_none() {
            tracing::debug!(kind = ?node.kind, reason, "rejecting malformed node tree");

            self.error = Some(PrintError::Malformed { kind: node.kind, reason });
        }
    }

    fn child<'n>(&mut self, node: &'n Node<'n>, index: usize) -> Option<&'n Node<'n>> {
        let child = node.child(index);

        if child.is_none() {
            self.set_invalid(node, "missing child");
        }

        child
    }

    fn text<'n>(&mut self, node: &'n Node<'n>) -> &'n str {
        node.text().unwrap_or_else(|| {
            self.set_invalid(node, "missing text");

            ""
        })
    }

    fn index(&mut self, node: &Node) -> u64 {
        node.index().unwrap_or_else(|| {
            self.set_invalid(node, "missing index");

            0
        })
    }

    fn child_text<'n>(&mut self, node: &'n Node<'n>, index: usize) -> &'n str {
        self.child(node, index).map_or("", |child| self.text(child))
    }

    fn child_index(&mut self, node: &Node, index: usize) -> u64 {
        match node.child(index) {
            Some(child) => self.index(child),
            None => {
                self.set_invalid(node, "missing child");

                0
            }
        }
    }

    fn print_child(&mut self, node: &Node, index: usize) {
        if let Some(child) = self.child(node, index) {
            self.print(child, false);
        }
    }

    fn print_children(&mut self, node: &Node, separator: &str) {
        for (i, child) in node.iter().enumerate() {
            if i != 0 {
                self.output.push_str(separator);
            }

            self.print(child, false);
        }
    }

    /// Prints a fixed description followed by one child, the shape shared by most compiler artifacts.
    fn print_described(&mut self, description: &str, node: &Node, index: usize) {
        self.output.push_str(description);
        self.print_child(node, index);
    }

    /// Prints a node. If the node is an entity that could not be printed in prefix form, the context that still
    /// needs to be printed in postfix form is returned.
    fn print<'n>(&mut self, node: &'n Node<'n>, as_prefix_context: bool) -> Option<&'n Node<'n>> {
        if self.depth >= MAX_DEPTH {
            if self.error.is_none() {
                tracing::warn!(limit = MAX_DEPTH, "node tree is too deep to print");

                self.error = Some(PrintError::TooDeep { limit: MAX_DEPTH });
            }

            return None;
        }

        self.depth += 1;

        let result = self.print_node(node, as_prefix_context);

        self.depth -= 1;

        result
    }

    /// Prints the context of an entity. Entity recursion stacks more frames than plain nesting, so it counts twice
    /// towards the depth limit.
    fn print_context<'n>(&mut self, context: &'n Node<'n>, as_prefix_context: bool) -> Option<&'n Node<'n>> {
        self.depth += 1;

        let result = self.print(context, as_prefix_context);

        self.depth -= 1;

        result
    }

    #[expect(clippy::too_many_lines, reason = "one arm per node kind")]
    fn print_node<'n>(&mut self, node: &'n Node<'n>, as_prefix_context: bool) -> Option<&'n Node<'n>> {
        let options = self.options;

        match node.kind {
            // Entities.
            Kind::Variable => {
                return self.print_entity(node, as_prefix_context, TypePrinting::WithColon, EntityName::named());
            }
            Kind::Function | Kind::BoundGenericFunction => {
                return self.print_entity(node, as_prefix_context, TypePrinting::FunctionStyle, EntityName::named());
            }
            Kind::Subscript => {
                return self.print_entity(
                    node,
                    as_prefix_context,
                    TypePrinting::FunctionStyle,
                    EntityName::overwritten("subscript"),
                );
            }
            Kind::GenericTypeParamDecl
            | Kind::Class
            | Kind::Structure
            | Kind::Enum
            | Kind::Protocol
            | Kind::TypeAlias
            | Kind::OtherNominalType => {
                return self.print_entity(node, as_prefix_context, TypePrinting::NoType, EntityName::named());
            }
            Kind::ExplicitClosure | Kind::ImplicitClosure => {
                let description = if node.kind == Kind::ExplicitClosure {
                    "closure #"
                } else {
                    "implicit closure #"
                };

                let index = self.child_index(node, 1);
                let type_printing = if options.show_function_argument_types {
                    TypePrinting::FunctionStyle
                } else {
                    TypePrinting::NoType
                };

                return self.print_entity(
                    node,
                    as_prefix_context,
                    type_printing,
                    EntityName::extra(description, Some(index.saturating_add(1))),
                );
            }
            Kind::Initializer => {
                return self.print_entity(
                    node,
                    as_prefix_context,
                    TypePrinting::NoType,
                    EntityName::extra("variable initialization expression", None),
                );
            }
            Kind::PropertyWrapperBackingInitializer => {
                return self.print_entity(
                    node,
                    as_prefix_context,
                    TypePrinting::NoType,
                    EntityName::extra("property wrapper backing initializer", None),
                );
            }
            Kind::DefaultArgumentInitializer => {
                let index = self.child_index(node, 1);

                return self.print_entity(
                    node,
                    as_prefix_context,
                    TypePrinting::NoType,
                    EntityName::extra("default argument ", Some(index)),
                );
            }
            Kind::Allocator => {
                let name = if self.context_is_class(node) {
                    "__allocating_init"
                } else {
                    "init"
                };

                return self.print_entity(
                    node,
                    as_prefix_context,
                    TypePrinting::FunctionStyle,
                    EntityName::extra(name, None),
                );
            }
            Kind::Constructor => {
                let name = EntityName {
                    has_name: node.num_children() > 2,
                    ..EntityName::extra("init", None)
                };

                return self.print_entity(node, as_prefix_context, TypePrinting::FunctionStyle, name);
            }
            Kind::Destructor => {
                return self.print_entity(
                    node,
                    as_prefix_context,
                    TypePrinting::NoType,
                    EntityName::extra("deinit", None),
                );
            }
            Kind::Deallocator => {
                let name = if self.context_is_class(node) {
                    "__deallocating_deinit"
                } else {
                    "deinit"
                };

                return self.print_entity(node, as_prefix_context, TypePrinting::NoType, EntityName::extra(name, None));
            }
            Kind::IVarInitializer => {
                return self.print_entity(
                    node,
                    as_prefix_context,
                    TypePrinting::NoType,
                    EntityName::extra("__ivar_initializer", None),
                );
            }
            Kind::IVarDestroyer => {
                return self.print_entity(
                    node,
                    as_prefix_context,
                    TypePrinting::NoType,
                    EntityName::extra("__ivar_destroyer", None),
                );
            }

            // Accessors of variables and subscripts.
            Kind::OwningAddressor => return self.print_abstract_storage(node, as_prefix_context, "owningAddressor"),
            Kind::OwningMutableAddressor => {
                return self.print_abstract_storage(node, as_prefix_context, "owningMutableAddressor");
            }
            Kind::NativeOwningAddressor => {
                return self.print_abstract_storage(node, as_prefix_context, "nativeOwningAddressor");
            }
            Kind::NativeOwningMutableAddressor => {
                return self.print_abstract_storage(node, as_prefix_context, "nativeOwningMutableAddressor");
            }
            Kind::NativePinningAddressor => {
                return self.print_abstract_storage(node, as_prefix_context, "nativePinningAddressor");
            }
            Kind::NativePinningMutableAddressor => {
                return self.print_abstract_storage(node, as_prefix_context, "nativePinningMutableAddressor");
            }
            Kind::UnsafeAddressor => return self.print_abstract_storage(node, as_prefix_context, "unsafeAddressor"),
            Kind::UnsafeMutableAddressor => {
                return self.print_abstract_storage(node, as_prefix_context, "unsafeMutableAddressor");
            }
            Kind::GlobalGetter | Kind::Getter => return self.print_abstract_storage(node, as_prefix_context, "getter"),
            Kind::Setter => return self.print_abstract_storage(node, as_prefix_context, "setter"),
            Kind::MaterializeForSet => {
                return self.print_abstract_storage(node, as_prefix_context, "materializeForSet");
            }
            Kind::WillSet => return self.print_abstract_storage(node, as_prefix_context, "willset"),
            Kind::DidSet => return self.print_abstract_storage(node, as_prefix_context, "didset"),
            Kind::ReadAccessor => return self.print_abstract_storage(node, as_prefix_context, "read"),
            Kind::ModifyAccessor => return self.print_abstract_storage(node, as_prefix_context, "modify"),

            // Structure.
            Kind::Global | Kind::TypeList | Kind::AnyProtocolConformanceList => self.print_children(node, ""),
            Kind::DeclContext | Kind::Type => self.print_child(node, 0),
            Kind::TypeMangling => match node.first_child() {
                Some(label_list) if label_list.kind == Kind::LabelList => {
                    if let Some(function_type) = self.child(node, 1).and_then(|type_| self.child(type_, 0)) {
                        self.print_function_type(Some(label_list), function_type);
                    }
                }
                _ => self.print_child(node, 0),
            },
            Kind::LabelList | Kind::AssociatedType => {}
            Kind::Suffix => {
                if options.display_unmangled_suffix {
                    let text = self.text(node);

                    self.output.push_str(" with unmangled suffix ");
                    self.output.push_quoted(text);
                }
            }
            Kind::Extension => self.print_extension(node),
            Kind::AnonymousContext => {
                if options.qualify_entities && options.display_extension_contexts {
                    self.print_child(node, 1);
                    self.output.push_str(".(unknown context at ");
                    self.print_child(node, 0);
                    self.output.push(')');

                    if let Some(generic_arguments) = node.child(2).filter(|arguments| arguments.has_children()) {
                        self.output.push('<');
                        self.print(generic_arguments, false);
                        self.output.push('>');
                    }
                }
            }

            // Names.
            Kind::Module => {
                let text = self.text(node);

                if options.display_module_names {
                    self.output.push_str(text);
                }
            }
            Kind::Identifier | Kind::ClangType | Kind::BuiltinTypeName | Kind::MetatypeRepresentation => {
                let text = self.text(node);

                self.output.push_str(text);
            }
            Kind::InfixOperator | Kind::PrefixOperator | Kind::PostfixOperator => {
                let text = self.text(node);
                let fixity = match node.kind {
                    Kind::InfixOperator => " infix",
                    Kind::PrefixOperator => " prefix",
                    _ => " postfix",
                };

                self.output.push_str(text);
                self.output.push_str(fixity);
            }
            Kind::LocalDeclName => {
                self.print_child(node, 1);

                let index = self.child_index(node, 0);

                if options.display_local_name_contexts {
                    self.output.push_str(" #");
                    self.output.push_number(index.saturating_add(1));
                }
            }
            Kind::PrivateDeclName => {
                let discriminator = self.child_text(node, 0);

                if node.num_children() > 1 {
                    if options.show_private_discriminators {
                        self.output.push('(');
                    }

                    self.print_child(node, 1);

                    if options.show_private_discriminators {
                        self.output.push_str(" in ");
                        self.output.push_str(discriminator);
                        self.output.push(')');
                    }
                } else if options.show_private_discriminators {
                    self.output.push_str("(in ");
                    self.output.push_str(discriminator);
                    self.output.push(')');
                }
            }
            Kind::RelatedEntityDeclName => {
                let related = self.child_text(node, 0);

                self.output.push_str("related decl '");
                self.output.push_str(related);
                self.output.push_str("' for ");
                self.print_child(node, 1);
            }
            Kind::Index | Kind::Number | Kind::SpecializationPassID => {
                let index = self.index(node);

                self.output.push_number(index);
            }
            Kind::UnknownIndex => self.output.push_str("unknown index"),
            Kind::AccessorFunctionReference => {
                let index = self.index(node);

                self.output.push_str("accessor function at ");
                self.output.push_number(index);
            }

            // Function types.
            Kind::FunctionType
            | Kind::UncurriedFunctionType
            | Kind::NoEscapeFunctionType
            | Kind::AutoClosureType
            | Kind::EscapingAutoClosureType
            | Kind::ThinFunctionType
            | Kind::CFunctionPointer
            | Kind::ObjCBlock
            | Kind::EscapingObjCBlock
            | Kind::DifferentiableFunctionType
            | Kind::EscapingDifferentiableFunctionType
            | Kind::LinearFunctionType
            | Kind::EscapingLinearFunctionType => self.print_function_type(None, node),
            Kind::ArgumentTuple => self.print_function_parameters(None, node, options.show_function_argument_types),
            Kind::ReturnType => {
                self.output.push_str(" -> ");

                if node.has_children() {
                    self.print_children(node, "");
                } else {
                    let text = self.text(node);

                    self.output.push_str(text);
                }
            }
            Kind::AsyncAnnotation => self.output.push_str(" async "),
            Kind::ThrowsAnnotation => self.output.push_str(" throws "),

            // Types.
            Kind::Tuple => {
                self.output.push('(');
                self.print_children(node, ", ");
                self.output.push(')');
            }
            Kind::TupleElement => self.print_tuple_element(node),
            Kind::TupleElementName => {
                let text = self.text(node);

                self.output.push_str(text);
                self.output.push_str(": ");
            }
            Kind::BoundGenericClass
            | Kind::BoundGenericStructure
            | Kind::BoundGenericEnum
            | Kind::BoundGenericProtocol
            | Kind::BoundGenericOtherNominalType
            | Kind::BoundGenericTypeAlias => self.print_bound_generic(node),
            Kind::SugaredOptional => {
                if let Some(wrapped) = self.child(node, 0) {
                    self.print_with_parens(wrapped);
                }

                self.output.push('?');
            }
            Kind::SugaredArray => {
                self.output.push('[');
                self.print_child(node, 0);
                self.output.push(']');
            }
            Kind::SugaredDictionary => {
                self.output.push('[');
                self.print_child(node, 0);
                self.output.push_str(" : ");
                self.print_child(node, 1);
                self.output.push(']');
            }
            Kind::SugaredParen => {
                self.output.push('(');
                self.print_child(node, 0);
                self.output.push(')');
            }
            Kind::Metatype => self.print_metatype(node),
            Kind::ExistentialMetatype => self.print_existential_metatype(node),
            Kind::ProtocolList => self.print_protocol_list(node),
            Kind::ProtocolListWithClass => self.print_protocol_list_with_class(node),
            Kind::ProtocolListWithAnyObject => self.print_protocol_list_with_any_object(node),
            Kind::AssociatedTypeRef => {
                self.print_child(node, 0);

                let name = self.child_text(node, 1);

                self.output.push('.');
                self.output.push_str(name);
            }
            Kind::DynamicSelf => self.output.push_str("Self"),
            Kind::ErrorType => self.output.push_str("<ERROR TYPE>"),
            Kind::OpaqueReturnType => self.output.push_str("some"),
            Kind::OpaqueReturnTypeOf => {
                self.output.push_str("<<opaque return type of ");
                self.print_children(node, "");
                self.output.push_str(">>");
            }
            Kind::OpaqueType => {
                self.print_child(node, 0);
                self.output.push('.');
                self.print_child(node, 1);
            }
            Kind::RetroactiveConformance => {
                if node.num_children() == 2 {
                    self.output.push_str("retroactive @ ");
                    self.print_child(node, 0);
                    self.print_child(node, 1);
                }
            }
            Kind::SILBoxType => self.print_described("@box ", node, 0),
            Kind::SILBoxTypeWithLayout => self.print_sil_box_type_with_layout(node),
            Kind::SILBoxLayout => {
                self.output.push('{');

                for (i, field) in node.iter().enumerate() {
                    if i != 0 {
                        self.output.push(',');
                    }

                    self.output.push(' ');
                    self.print(field, false);
                }

                self.output.push_str(" }");
            }
            Kind::SILBoxImmutableField | Kind::SILBoxMutableField => {
                let keyword = if node.kind == Kind::SILBoxImmutableField {
                    "let "
                } else {
                    "var "
                };

                self.output.push_str(keyword);

                match node.first_child() {
                    Some(field_type) if node.num_children() == 1 && field_type.kind == Kind::Type => {
                        self.print(field_type, false);
                    }
                    _ => self.set_invalid(node, "box field must hold exactly one type"),
                }
            }

            // Type attributes and ownership.
            Kind::Weak => self.print_described("weak ", node, 0),
            Kind::Unowned => self.print_described("unowned ", node, 0),
            Kind::Unmanaged => self.print_described("unowned(unsafe) ", node, 0),
            Kind::InOut => self.print_described("inout ", node, 0),
            Kind::Shared => self.print_described("__shared ", node, 0),
            Kind::Owned => self.print_described("__owned ", node, 0),
            Kind::Static => self.print_described("static ", node, 0),
            Kind::NonObjCAttribute => self.output.push_str("@nonobjc "),
            Kind::ObjCAttribute => self.output.push_str("@objc "),
            Kind::DirectMethodReferenceAttribute => self.output.push_str("super "),
            Kind::DynamicAttribute => self.output.push_str("dynamic "),
            Kind::VTableAttribute => self.output.push_str("override "),
            Kind::EmptyList => self.output.push_str(" empty-list "),
            Kind::FirstElementMarker => self.output.push_str(" first-element-marker "),
            Kind::VariadicMarker => self.output.push_str(" variadic-marker "),

            // Impl function types.
            Kind::ImplFunctionType => self.print_impl_function_type(node),
            Kind::ImplDifferentiable => self.output.push_str("@differentiable"),
            Kind::ImplLinear => self.output.push_str("@differentiable(linear)"),
            Kind::ImplEscaping => self.output.push_str("@escaping"),
            Kind::ImplConvention | Kind::ImplFunctionAttribute => {
                let text = self.text(node);

                self.output.push_str(text);
            }
            Kind::ImplDifferentiability => {
                let text = self.text(node);

                if !text.is_empty() {
                    self.output.push_str(text);
                    self.output.push(' ');
                }
            }
            Kind::ImplFunctionConvention => self.print_impl_function_convention(node),
            Kind::ImplParameter | Kind::ImplResult => {
                self.print_child(node, 0);
                self.output.push(' ');

                if node.num_children() == 3 {
                    self.print_child(node, 1);
                }

                if let Some(type_) = node.last_child() {
                    self.print(type_, false);
                }
            }
            Kind::ImplErrorResult => {
                self.output.push_str("@error ");
                self.print_children(node, " ");
            }
            Kind::ImplYield => {
                self.output.push_str("@yields ");
                self.print_children(node, " ");
            }
            Kind::ImplInvocationSubstitutions => {
                self.output.push_str("for <");

                if let Some(substitutions) = self.child(node, 0) {
                    self.print_children(substitutions, ", ");
                }

                self.output.push('>');
            }
            Kind::ImplPatternSubstitutions => {
                self.output.push_str("@substituted ");
                self.print_child(node, 0);
                self.output.push_str(" for <");

                if let Some(substitutions) = self.child(node, 1) {
                    self.print_children(substitutions, ", ");
                }

                self.output.push('>');
            }

            // Generic signatures.
            Kind::DependentGenericSignature | Kind::DependentPseudogenericSignature => {
                self.print_generic_signature(node);
            }
            Kind::DependentGenericConformanceRequirement => {
                self.print_child(node, 0);
                self.output.push_str(": ");
                self.print_child(node, 1);
            }
            Kind::DependentGenericLayoutRequirement => self.print_layout_requirement(node),
            Kind::DependentGenericSameTypeRequirement => {
                self.print_child(node, 0);
                self.output.push_str(" == ");
                self.print_child(node, 1);
            }
            Kind::DependentGenericParamType => self.print_generic_param_type(node),
            Kind::DependentGenericType => {
                self.print_child(node, 0);

                if let Some(dependent_type) = self.child(node, 1) {
                    if super::classify::needs_space_before_type(dependent_type) {
                        self.output.push(' ');
                    }

                    self.print(dependent_type, false);
                }
            }
            Kind::DependentMemberType => {
                self.print_child(node, 0);
                self.output.push('.');
                self.print_child(node, 1);
            }
            Kind::DependentAssociatedTypeRef => {
                if node.num_children() > 1 {
                    self.print_child(node, 1);
                    self.output.push('.');
                }

                self.print_child(node, 0);
            }
            Kind::AssocTypePath => self.print_children(node, "."),

            // Specializations.
            Kind::FunctionSignatureSpecialization => {
                self.print_specialization_prefix(node, "function signature specialization", "");
            }
            Kind::GenericPartialSpecialization => {
                self.print_specialization_prefix(node, "generic partial specialization", "Signature = ");
            }
            Kind::GenericPartialSpecializationNotReAbstracted => self.print_specialization_prefix(
                node,
                "generic not-reabstracted partial specialization",
                "Signature = ",
            ),
            Kind::GenericSpecialization => self.print_specialization_prefix(node, "generic specialization", ""),
            Kind::GenericSpecializationPrespecialized => {
                self.print_specialization_prefix(node, "generic pre-specialization", "");
            }
            Kind::GenericSpecializationNotReAbstracted => {
                self.print_specialization_prefix(node, "generic not re-abstracted specialization", "");
            }
            Kind::InlinedGenericFunction => self.print_specialization_prefix(node, "inlined generic function", ""),
            Kind::IsSerialized => self.output.push_str("serialized"),
            Kind::GenericSpecializationParam => self.print_generic_specialization_param(node),
            Kind::FunctionSignatureSpecializationParamKind => self.print_function_signature_param_kind(node),
            Kind::FunctionSignatureSpecializationParamPayload => {
                let payload = self.text(node);

                self.print_mangled_payload(payload);
            }
            Kind::FunctionSignatureSpecializationParam
            | Kind::FunctionSignatureSpecializationReturn
            | Kind::DependentGenericParamCount
            | Kind::ImplFunctionConventionName => {
                self.set_invalid(node, "node can only be printed as part of its parent");
            }

            // Thunks.
            Kind::CurryThunk => self.print_described("curry thunk of ", node, 0),
            Kind::DispatchThunk => self.print_described("dispatch thunk of ", node, 0),
            Kind::VTableThunk => {
                self.print_described("vtable thunk for ", node, 1);
                self.print_described(" dispatching to ", node, 0);
            }
            Kind::PartialApplyForwarder | Kind::PartialApplyObjCForwarder => self.print_partial_apply(node),
            Kind::ReabstractionThunk | Kind::ReabstractionThunkHelper => self.print_reabstraction_thunk(node),
            Kind::ReabstractionThunkHelperWithSelf => self.print_reabstraction_thunk_with_self(node),
            Kind::KeyPathGetterThunkHelper | Kind::KeyPathSetterThunkHelper => self.print_key_path_accessor(node),
            Kind::KeyPathEqualsThunkHelper | Kind::KeyPathHashThunkHelper => self.print_key_path_index_operator(node),
            Kind::MergedFunction => {
                if !options.shorten_thunk {
                    self.output.push_str("merged ");
                }
            }
            Kind::DynamicallyReplaceableFunctionKey => {
                if !options.shorten_thunk {
                    self.output.push_str("dynamically replaceable key for ");
                }
            }
            Kind::DynamicallyReplaceableFunctionImpl => {
                if !options.shorten_thunk {
                    self.output.push_str("dynamically replaceable thunk for ");
                }
            }
            Kind::DynamicallyReplaceableFunctionVar => {
                if !options.shorten_thunk {
                    self.output.push_str("dynamically replaceable variable for ");
                }
            }
            Kind::ObjCAsyncCompletionHandlerImpl => {
                self.print_described("@objc completion handler block implementation for ", node, 0);
            }

            // Outlined operations.
            Kind::OutlinedCopy | Kind::OutlinedConsume => {
                let description = if node.kind == Kind::OutlinedCopy {
                    "outlined copy of "
                } else {
                    "outlined consume of "
                };

                self.print_described(description, node, 0);

                if let Some(generic_arguments) = node.child(1) {
                    self.print(generic_arguments, false);
                }
            }
            Kind::OutlinedRetain => self.print_described("outlined retain of ", node, 0),
            Kind::OutlinedRelease => self.print_described("outlined release of ", node, 0),
            Kind::OutlinedInitializeWithTake => self.print_described("outlined init with take of ", node, 0),
            Kind::OutlinedInitializeWithCopy => self.print_described("outlined init with copy of ", node, 0),
            Kind::OutlinedAssignWithTake => self.print_described("outlined assign with take of ", node, 0),
            Kind::OutlinedAssignWithCopy => self.print_described("outlined assign with copy of ", node, 0),
            Kind::OutlinedDestroy => self.print_described("outlined destroy of ", node, 0),
            Kind::OutlinedBridgedMethod => {
                let text = self.text(node);

                self.output.push_str("outlined bridged method (");
                self.output.push_str(text);
                self.output.push_str(") of ");
            }
            Kind::OutlinedVariable => {
                let index = self.index(node);

                self.output.push_str("outlined variable #");
                self.output.push_number(index);
                self.output.push_str(" of ");
            }

            // Witness tables and conformances.
            Kind::ValueWitness => self.print_value_witness(node),
            Kind::ValueWitnessTable => self.print_described("value witness table for ", node, 0),
            Kind::ProtocolWitness => {
                self.print_described("protocol witness for ", node, 1);
                self.print_described(" in conformance ", node, 0);
            }
            Kind::ProtocolSelfConformanceWitness => {
                self.print_described("protocol self-conformance witness for ", node, 0);
            }
            Kind::ProtocolWitnessTable => self.print_described("protocol witness table for ", node, 0),
            Kind::ProtocolWitnessTableAccessor => {
                self.print_described("protocol witness table accessor for ", node, 0);
            }
            Kind::ProtocolWitnessTablePattern => self.print_described("protocol witness table pattern for ", node, 0),
            Kind::ProtocolSelfConformanceWitnessTable => {
                self.print_described("protocol self-conformance witness table for ", node, 0);
            }
            Kind::GenericProtocolWitnessTable => self.print_described("generic protocol witness table for ", node, 0),
            Kind::GenericProtocolWitnessTableInstantiationFunction => {
                self.print_described("instantiation function for generic protocol witness table for ", node, 0);
            }
            Kind::ResilientProtocolWitnessTable => {
                self.print_described("resilient protocol witness table for ", node, 0);
            }
            Kind::LazyProtocolWitnessTableAccessor => {
                self.print_described("lazy protocol witness table accessor for type ", node, 0);
                self.print_described(" and conformance ", node, 1);
            }
            Kind::LazyProtocolWitnessTableCacheVariable => {
                self.print_described("lazy protocol witness table cache variable for type ", node, 0);
                self.print_described(" and conformance ", node, 1);
            }
            Kind::AssociatedTypeMetadataAccessor => {
                self.print_described("associated type metadata accessor for ", node, 1);
                self.print_described(" in ", node, 0);
            }
            Kind::DefaultAssociatedTypeMetadataAccessor => {
                self.print_described("default associated type metadata accessor for ", node, 0);
            }
            Kind::AssociatedTypeWitnessTableAccessor => {
                self.print_described("associated type witness table accessor for ", node, 1);
                self.print_described(" : ", node, 2);
                self.print_described(" in ", node, 0);
            }
            Kind::BaseWitnessTableAccessor => {
                self.print_described("base witness table accessor for ", node, 1);
                self.print_described(" in ", node, 0);
            }
            Kind::AssociatedConformanceDescriptor => {
                self.print_described("associated conformance descriptor for ", node, 0);
                self.print_described(".", node, 1);
                self.print_described(": ", node, 2);
            }
            Kind::DefaultAssociatedConformanceAccessor => {
                self.print_described("default associated conformance accessor for ", node, 0);
                self.print_described(".", node, 1);
                self.print_described(": ", node, 2);
            }
            Kind::BaseConformanceDescriptor => {
                self.print_described("base conformance descriptor for ", node, 0);
                self.print_described(": ", node, 1);
            }
            Kind::ProtocolConformance => self.print_protocol_conformance(node),
            Kind::ConcreteProtocolConformance => {
                self.output.push_str("concrete protocol conformance ");

                if let Some(index) = node.index() {
                    self.output.push('#');
                    self.output.push_number(index);
                    self.output.push(' ');
                }

                self.print_children(node, "");
            }
            Kind::DependentAssociatedConformance => {
                self.output.push_str("dependent associated conformance ");
                self.print_children(node, "");
            }
            Kind::DependentProtocolConformanceAssociated => {
                self.print_dependent_conformance("dependent associated protocol conformance ", node);
            }
            Kind::DependentProtocolConformanceInherited => {
                self.print_dependent_conformance("dependent inherited protocol conformance ", node);
            }
            Kind::DependentProtocolConformanceRoot => {
                self.print_dependent_conformance("dependent root protocol conformance ", node);
            }
            Kind::ProtocolConformanceRefInTypeModule => {
                self.output.push_str("protocol conformance ref (type's module) ");
                self.print_children(node, "");
            }
            Kind::ProtocolConformanceRefInProtocolModule => {
                self.output.push_str("protocol conformance ref (protocol's module) ");
                self.print_children(node, "");
            }
            Kind::ProtocolConformanceRefInOtherModule => {
                self.output.push_str("protocol conformance ref (retroactive) ");
                self.print_children(node, "");
            }

            // Descriptors.
            Kind::MethodDescriptor => self.print_described("method descriptor for ", node, 0),
            Kind::MethodLookupFunction => self.print_described("method lookup function for ", node, 0),
            Kind::ProtocolDescriptor => self.print_described("protocol descriptor for ", node, 0),
            Kind::ProtocolConformanceDescriptor => {
                self.print_described("protocol conformance descriptor for ", node, 0);
            }
            Kind::ProtocolSelfConformanceDescriptor => {
                self.print_described("protocol self-conformance descriptor for ", node, 0);
            }
            Kind::ProtocolRequirementsBaseDescriptor => {
                self.print_described("protocol requirements base descriptor for ", node, 0);
            }
            Kind::AssociatedTypeDescriptor => self.print_described("associated type descriptor for ", node, 0),
            Kind::NominalTypeDescriptor => self.print_described("nominal type descriptor for ", node, 0),
            Kind::PropertyDescriptor => self.print_described("property descriptor for ", node, 0),
            Kind::OpaqueTypeDescriptor => self.print_described("opaque type descriptor for ", node, 0),
            Kind::OpaqueTypeDescriptorAccessor => {
                self.print_described("opaque type descriptor accessor for ", node, 0);
            }
            Kind::OpaqueTypeDescriptorAccessorImpl => {
                self.print_described("opaque type descriptor accessor impl for ", node, 0);
            }
            Kind::OpaqueTypeDescriptorAccessorKey => {
                self.print_described("opaque type descriptor accessor key for ", node, 0);
            }
            Kind::OpaqueTypeDescriptorAccessorVar => {
                self.print_described("opaque type descriptor accessor var for ", node, 0);
            }
            Kind::ModuleDescriptor => self.print_described("module descriptor ", node, 0),
            Kind::AnonymousDescriptor => self.print_described("anonymous descriptor ", node, 0),
            Kind::ExtensionDescriptor => self.print_described("extension descriptor ", node, 0),
            Kind::ReflectionMetadataBuiltinDescriptor => {
                self.print_described("reflection metadata builtin descriptor ", node, 0);
            }
            Kind::ReflectionMetadataFieldDescriptor => {
                self.print_described("reflection metadata field descriptor ", node, 0);
            }
            Kind::ReflectionMetadataAssocTypeDescriptor => {
                self.print_described("reflection metadata associated type descriptor ", node, 0);
            }
            Kind::ReflectionMetadataSuperclassDescriptor => {
                self.print_described("reflection metadata superclass descriptor ", node, 0);
            }
            Kind::AssociatedTypeGenericParamRef => {
                self.output.push_str("generic parameter reference for associated type ");
                self.print_children(node, "");
            }

            // Type metadata.
            Kind::TypeMetadata => self.print_described("type metadata for ", node, 0),
            Kind::FullTypeMetadata => self.print_described("full type metadata for ", node, 0),
            Kind::TypeMetadataAccessFunction => self.print_described("type metadata accessor for ", node, 0),
            Kind::TypeMetadataInstantiationCache => {
                self.print_described("type metadata instantiation cache for ", node, 0);
            }
            Kind::TypeMetadataInstantiationFunction => {
                self.print_described("type metadata instantiation function for ", node, 0);
            }
            Kind::TypeMetadataSingletonInitializationCache => {
                self.print_described("type metadata singleton initialization cache for ", node, 0);
            }
            Kind::TypeMetadataCompletionFunction => {
                self.print_described("type metadata completion function for ", node, 0);
            }
            Kind::TypeMetadataDemanglingCache => {
                self.print_described("demangling cache variable for type metadata for ", node, 0);
            }
            Kind::TypeMetadataLazyCache => self.print_described("lazy cache variable for type metadata for ", node, 0),
            Kind::GenericTypeMetadataPattern => self.print_described("generic type metadata pattern for ", node, 0),
            Kind::MetadataInstantiationCache => self.print_described("metadata instantiation cache for ", node, 0),
            Kind::Metaclass => self.print_described("metaclass for ", node, 0),
            Kind::ClassMetadataBaseOffset => self.print_described("class metadata base offset for ", node, 0),
            Kind::ObjCMetadataUpdateFunction => self.print_described("ObjC metadata update function for ", node, 0),
            Kind::ObjCResilientClassStub => self.print_described("ObjC resilient class stub for ", node, 0),
            Kind::FullObjCResilientClassStub => self.print_described("full ObjC resilient class stub for ", node, 0),
            Kind::CanonicalSpecializedGenericMetaclass => {
                self.print_described("specialized generic metaclass for ", node, 0);
            }
            Kind::CanonicalSpecializedGenericTypeMetadataAccessFunction => {
                self.print_described("canonical specialized generic type metadata accessor for ", node, 0);
            }
            Kind::NoncanonicalSpecializedGenericTypeMetadata => {
                self.print_described("noncanonical specialized generic type metadata for ", node, 0);
            }
            Kind::NoncanonicalSpecializedGenericTypeMetadataCache => self.print_described(
                "cache variable for noncanonical specialized generic type metadata for ",
                node,
                0,
            ),
            Kind::CanonicalPrespecializedGenericTypeCachingOnceToken => self.print_described(
                "flag for loading of canonical specialized generic type metadata for ",
                node,
                0,
            ),
            Kind::CoroutineContinuationPrototype => {
                self.print_described("coroutine continuation prototype for ", node, 0);
            }

            // Other compiler artifacts.
            Kind::FieldOffset => {
                self.print_child(node, 0);
                self.print_described("field offset for ", node, 1);
            }
            Kind::EnumCase => self.print_described("enum case for ", node, 0),
            Kind::Directness => self.print_directness(node),
            Kind::TypeSymbolicReference => self.print_symbolic_reference("type symbolic reference 0x", node),
            Kind::ProtocolSymbolicReference => self.print_symbolic_reference("protocol symbolic reference 0x", node),
            Kind::OpaqueTypeDescriptorSymbolicReference => {
                self.print_symbolic_reference("opaque type symbolic reference 0x", node);
            }
            Kind::GlobalVariableOnceToken | Kind::GlobalVariableOnceFunction => {
                let description = if node.kind == Kind::GlobalVariableOnceToken {
                    "one-time initialization token for "
                } else {
                    "one-time initialization function for "
                };

                // The context is required but never printed.
                if self.child(node, 0).is_some() {
                    self.print_described(description, node, 1);
                }
            }
            Kind::GlobalVariableOnceDeclList => {
                if node.num_children() == 1 {
                    self.print_child(node, 0);
                } else {
                    self.output.push('(');
                    self.print_children(node, ", ");
                    self.output.push(')');
                }
            }
        }

        None
    }

    fn print_extension(&mut self, node: &Node) {
        if !matches!(node.num_children(), 2 | 3) {
            self.set_invalid(node, "extension needs a module, a type and an optional signature");

            return;
        }

        if self.options.qualify_entities && self.options.display_extension_contexts {
            self.output.push_str("(extension in ");

            if let Some(module) = node.first_child() {
                self.print(module, true);
            }

            self.output.push_str("):");
        }

        self.print_child(node, 1);

        // The runtime does not mangle the generic signature of extensions.
        if node.num_children() == 3 && !self.options.print_for_type_name {
            self.print_child(node, 2);
        }
    }

    fn print_tuple_element(&mut self, node: &Node) {
        if let Some(label) = node.child_of_kind(Kind::TupleElementName) {
            let label = self.text(label);

            self.output.push_str(label);
            self.output.push_str(": ");
        }

        match node.child_of_kind(Kind::Type) {
            Some(element_type) => {
                self.print(element_type, false);
            }
            None => self.set_invalid(node, "tuple element without type"),
        }

        if node.child_of_kind(Kind::VariadicMarker).is_some() {
            self.output.push_str("...");
        }
    }

    fn print_dependent_conformance(&mut self, description: &str, node: &Node) {
        self.output.push_str(description);

        if let Some(index) = self.child(node, 2) {
            self.print_optional_index(index);
        }

        self.print_child(node, 0);
        self.print_child(node, 1);
    }

    fn print_optional_index(&mut self, node: &Node) {
        if !matches!(node.kind, Kind::Index | Kind::UnknownIndex) {
            self.set_invalid(node, "expected an index");
        } else if let Some(index) = node.index() {
            self.output.push('#');
            self.output.push_number(index);
            self.output.push(' ');
        }
    }

    fn print_protocol_conformance(&mut self, node: &Node) {
        if node.num_children() == 4 {
            self.print_described("property behavior storage of ", node, 2);
            self.print_described(" in ", node, 0);
            self.print_described(" : ", node, 1);
        } else {
            self.print_child(node, 0);

            if self.options.display_protocol_conformances {
                self.print_described(" : ", node, 1);
                self.print_described(" in ", node, 2);
            }
        }
    }

    fn context_is_class(&mut self, node: &Node) -> bool {
        self.child(node, 0).is_some_and(|context| context.kind == Kind::Class)
    }
}

#[cfg(test)]
mod tests {
    use super::MAX_DEPTH;
    use crate::swift::{DemangleOptions, Kind, Node, PrintError};
    use pretty_assertions::assert_eq;
    use strum::IntoEnumIterator;

    /// Kinds that cannot be printed without children.
    const NEEDS_CHILDREN: &[Kind] = &[
        Kind::Variable, Kind::Function, Kind::BoundGenericFunction, Kind::Subscript, Kind::GenericTypeParamDecl,
        Kind::Class, Kind::Structure, Kind::Enum, Kind::Protocol, Kind::TypeAlias, Kind::OtherNominalType,
        Kind::ExplicitClosure, Kind::ImplicitClosure, Kind::Initializer, Kind::PropertyWrapperBackingInitializer,
        Kind::DefaultArgumentInitializer, Kind::Allocator, Kind::Constructor, Kind::Destructor, Kind::Deallocator,
        Kind::IVarInitializer, Kind::IVarDestroyer, Kind::Getter, Kind::Setter, Kind::WillSet, Kind::DidSet,
        Kind::ReadAccessor, Kind::ModifyAccessor, Kind::SILBoxType, Kind::Weak, Kind::Unowned, Kind::Unmanaged,
        Kind::InOut, Kind::Shared, Kind::Owned, Kind::Static, Kind::CurryThunk, Kind::DispatchThunk, Kind::VTableThunk,
        Kind::ObjCAsyncCompletionHandlerImpl, Kind::OutlinedRetain, Kind::OutlinedRelease,
        Kind::OutlinedInitializeWithTake, Kind::OutlinedInitializeWithCopy, Kind::OutlinedAssignWithTake,
        Kind::OutlinedAssignWithCopy, Kind::OutlinedDestroy, Kind::ValueWitnessTable, Kind::ProtocolWitness,
        Kind::ProtocolSelfConformanceWitness, Kind::ProtocolWitnessTable, Kind::ProtocolWitnessTableAccessor,
        Kind::ProtocolWitnessTablePattern, Kind::ProtocolSelfConformanceWitnessTable,
        Kind::GenericProtocolWitnessTable, Kind::GenericProtocolWitnessTableInstantiationFunction,
        Kind::ResilientProtocolWitnessTable, Kind::LazyProtocolWitnessTableAccessor,
        Kind::LazyProtocolWitnessTableCacheVariable, Kind::AssociatedTypeMetadataAccessor,
        Kind::DefaultAssociatedTypeMetadataAccessor, Kind::AssociatedTypeWitnessTableAccessor,
        Kind::BaseWitnessTableAccessor, Kind::AssociatedConformanceDescriptor,
        Kind::DefaultAssociatedConformanceAccessor, Kind::BaseConformanceDescriptor, Kind::MethodDescriptor,
        Kind::MethodLookupFunction, Kind::ProtocolDescriptor, Kind::ProtocolConformanceDescriptor,
        Kind::ProtocolSelfConformanceDescriptor, Kind::ProtocolRequirementsBaseDescriptor,
        Kind::AssociatedTypeDescriptor, Kind::NominalTypeDescriptor, Kind::PropertyDescriptor,
        Kind::OpaqueTypeDescriptor, Kind::OpaqueTypeDescriptorAccessor, Kind::OpaqueTypeDescriptorAccessorImpl,
        Kind::OpaqueTypeDescriptorAccessorKey, Kind::OpaqueTypeDescriptorAccessorVar, Kind::ModuleDescriptor,
        Kind::AnonymousDescriptor, Kind::ExtensionDescriptor, Kind::ReflectionMetadataBuiltinDescriptor,
        Kind::ReflectionMetadataFieldDescriptor, Kind::ReflectionMetadataAssocTypeDescriptor,
        Kind::ReflectionMetadataSuperclassDescriptor, Kind::TypeMetadata, Kind::FullTypeMetadata,
        Kind::TypeMetadataAccessFunction, Kind::TypeMetadataInstantiationCache,
        Kind::TypeMetadataInstantiationFunction, Kind::TypeMetadataSingletonInitializationCache,
        Kind::TypeMetadataCompletionFunction, Kind::TypeMetadataDemanglingCache, Kind::TypeMetadataLazyCache,
        Kind::GenericTypeMetadataPattern, Kind::MetadataInstantiationCache, Kind::Metaclass,
        Kind::ClassMetadataBaseOffset, Kind::ObjCMetadataUpdateFunction, Kind::ObjCResilientClassStub,
        Kind::FullObjCResilientClassStub, Kind::CanonicalSpecializedGenericMetaclass,
        Kind::CanonicalSpecializedGenericTypeMetadataAccessFunction, Kind::NoncanonicalSpecializedGenericTypeMetadata,
        Kind::CoroutineContinuationPrototype, Kind::EnumCase,
    ];

    #[test]
    fn test_every_kind_is_dispatched() {
        let options = DemangleOptions::default();

        for kind in Kind::iter() {
            let nodes = [Node::new(kind), Node::with_text(kind, "x"), Node::with_index(kind, 3)];

            for node in &nodes {
                let text = crate::swift::node_to_string(Some(node), &options);

                match crate::swift::try_node_to_string(node, &options) {
                    Ok(expected) => assert_eq!(text, expected, "{kind:?}"),
                    Err(_) => assert_eq!(text, "", "{kind:?}"),
                }

                assert_eq!(node.display(&options).to_string(), text, "{kind:?}");

                if NEEDS_CHILDREN.contains(&kind) {
                    assert!(crate::swift::try_node_to_string(node, &options).is_err(), "{kind:?}");
                }
            }
        }
    }

    #[test]
    fn test_depth_limit() {
        let options = DemangleOptions::default();
        let mut node = Node::with_text(Kind::Identifier, "x");

        for _ in 0..MAX_DEPTH {
            node = Node::with_children(Kind::Type, [node]);
        }

        assert_eq!(
            crate::swift::try_node_to_string(&node, &options),
            Err(PrintError::TooDeep { limit: MAX_DEPTH })
        );
        assert_eq!(crate::swift::node_to_string(Some(&node), &options), "");

        let node = node.children[0].clone();

        assert_eq!(crate::swift::try_node_to_string(&node, &options).as_deref(), Ok("x"));
    }

    #[test]
    fn test_depth_limit_of_nested_contexts() {
        fn nested_classes(count: usize) -> Node<'static> {
            let mut node = Node::with_children(
                Kind::Class,
                [Node::with_text(Kind::Module, "main"), Node::with_text(Kind::Identifier, "C")],
            );

            for _ in 1..count {
                node = Node::with_children(Kind::Class, [node, Node::with_text(Kind::Identifier, "C")]);
            }

            node
        }

        let options = DemangleOptions::default();
        let deepest = MAX_DEPTH / 2 - 1;

        assert_eq!(
            crate::swift::try_node_to_string(&nested_classes(deepest), &options),
            Ok(format!("main{}", ".C".repeat(deepest)))
        );

        for count in [MAX_DEPTH / 2, MAX_DEPTH * 3] {
            assert_eq!(
                crate::swift::try_node_to_string(&nested_classes(count), &options),
                Err(PrintError::TooDeep { limit: MAX_DEPTH })
            );
        }
    }

    #[test]
    fn test_first_error_is_kept() {
        let node = Node::with_children(
            Kind::Global,
            [Node::new(Kind::TypeMetadata), Node::new(Kind::Identifier)],
        );

        assert_eq!(
            crate::swift::try_node_to_string(&node, &DemangleOptions::default()),
            Err(PrintError::Malformed {
                kind: Kind::TypeMetadata,
                reason: "missing child"
            })
        );
    }
}
