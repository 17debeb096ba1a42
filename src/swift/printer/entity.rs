use super::NodePrinter;
use crate::swift::classify;
use crate::swift::options::{DEBUGGER_EXPRESSION_MODULE_PREFIX, OBJC_MODULE, STDLIB_MODULE};
use crate::swift::{Kind, Node};

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TypePrinting {
    NoType,
    WithColon,
    FunctionStyle,
}

/// How the name of an entity is composed.
#[derive(Clone, Copy, Debug)]
pub struct EntityName {
    /// The entity carries its own name as the second child.
    pub has_name: bool,
    /// Description appended to or put in front of the name, like `getter` or `closure #`.
    pub extra_name: &'static str,
    pub extra_index: Option<u64>,
    /// Printed instead of the name child.
    pub overwrite_name: &'static str,
}

impl EntityName {
    pub const fn named() -> Self {
        Self {
            has_name: true,
            extra_name: "",
            extra_index: None,
            overwrite_name: "",
        }
    }

    pub const fn overwritten(name: &'static str) -> Self {
        Self {
            has_name: false,
            overwrite_name: name,
            ..Self::named()
        }
    }

    pub const fn extra(extra_name: &'static str, extra_index: Option<u64>) -> Self {
        Self {
            has_name: false,
            extra_name,
            extra_index,
            overwrite_name: "",
        }
    }
}

impl NodePrinter<'_> {
    /// Whether the context of an entity is printed as a qualification.
    pub(super) fn should_print_context(&self, context: &Node) -> bool {
        if !self.options.qualify_entities {
            return false;
        }

        if context.kind == Kind::Module {
            let name = context.text().unwrap_or_default();

            if name == STDLIB_MODULE {
                return self.options.display_stdlib_module;
            }

            if name == OBJC_MODULE {
                return self.options.display_objc_module;
            }

            if self.options.hiding_current_module.as_deref() == Some(name) {
                return false;
            }

            if name.starts_with(DEBUGGER_EXPRESSION_MODULE_PREFIX) {
                return self.options.display_debugger_generated_module;
            }
        }

        true
    }

    /// Prints an accessor of a variable or subscript.
    pub(super) fn print_abstract_storage<'n>(
        &mut self,
        accessor: &'n Node<'n>,
        as_prefix_context: bool,
        accessor_name: &'static str,
    ) -> Option<&'n Node<'n>> {
        let storage = self.child(accessor, 0)?;

        match storage.kind {
            Kind::Variable => self.print_entity(
                storage,
                as_prefix_context,
                TypePrinting::WithColon,
                EntityName {
                    extra_name: accessor_name,
                    ..EntityName::named()
                },
            ),
            Kind::Subscript => self.print_entity(
                storage,
                as_prefix_context,
                TypePrinting::WithColon,
                EntityName {
                    extra_name: accessor_name,
                    ..EntityName::overwritten("subscript")
                },
            ),
            _ => {
                self.set_invalid(accessor, "accessor of something that is not a variable or subscript");

                None
            }
        }
    }

    /// Prints an entity either as `Context.name` or as `name in Context`. When printing as a prefix context and the
    /// entity cannot be written that way, nothing is printed and the entity is returned.
    pub(super) fn print_entity<'n>(
        &mut self,
        entity: &'n Node<'n>,
        as_prefix_context: bool,
        type_printing: TypePrinting,
        name: EntityName,
    ) -> Option<&'n Node<'n>> {
        let mut entity = entity;
        let mut type_printing = type_printing;
        let mut extra_name = name.extra_name;
        let mut generic_function_type_list = None;

        if entity.kind == Kind::BoundGenericFunction {
            generic_function_type_list = Some(self.child(entity, 1)?);
            entity = self.child(entity, 0)?;
        }

        let local_name = name.has_name && entity.child(1).is_some_and(|name| name.kind == Kind::LocalDeclName);
        let multi_word_name = extra_name.contains(' ') || (local_name && self.options.display_local_name_contexts);

        if as_prefix_context && (type_printing != TypePrinting::NoType || multi_word_name) {
            return Some(entity);
        }

        let context = self.child(entity, 0)?;
        let mut postfix_context = None;

        if self.should_print_context(context) {
            if multi_word_name {
                postfix_context = Some(context);
            } else {
                let position = self.output.len();

                postfix_context = self.print_context(context, true);

                if self.output.len() != position {
                    self.output.push('.');
                }
            }
        }

        if name.has_name || !name.overwrite_name.is_empty() {
            if !extra_name.is_empty() && multi_word_name {
                self.output.push_str(extra_name);
                self.output.push_str(" of ");
                extra_name = "";
            }

            let position = self.output.len();

            if name.overwrite_name.is_empty() {
                let name_node = self.child(entity, 1)?;

                if name_node.kind != Kind::PrivateDeclName {
                    self.print(name_node, false);
                }

                if let Some(private_name) = entity.child_of_kind(Kind::PrivateDeclName) {
                    self.print(private_name, false);
                }
            } else {
                self.output.push_str(name.overwrite_name);
            }

            if self.output.len() != position && !extra_name.is_empty() {
                self.output.push('.');
            }
        }

        if !extra_name.is_empty() {
            self.output.push_str(extra_name);

            if let Some(index) = name.extra_index {
                self.output.push_number(index);
            }
        }

        if type_printing != TypePrinting::NoType {
            let Some(type_) = entity.child_of_kind(Kind::Type) else {
                self.set_invalid(entity, "entity without type");

                return None;
            };

            let type_ = self.child(type_, 0)?;

            if type_printing == TypePrinting::FunctionStyle && !self.is_function_like(type_) {
                type_printing = TypePrinting::WithColon;
            }

            if type_printing == TypePrinting::WithColon {
                if self.options.display_entity_types {
                    self.output.push_str(" : ");
                    self.print_entity_type(entity, type_, generic_function_type_list);
                }
            } else {
                if multi_word_name || classify::needs_space_before_type(type_) {
                    self.output.push(' ');
                }

                self.print_entity_type(entity, type_, generic_function_type_list);
            }
        }

        if !as_prefix_context && (!local_name || self.options.display_local_name_contexts) {
            if let Some(context) = postfix_context.take() {
                let joiner = match entity.kind {
                    Kind::DefaultArgumentInitializer | Kind::Initializer | Kind::PropertyWrapperBackingInitializer => {
                        " of "
                    }
                    _ => " in ",
                };

                self.output.push_str(joiner);
                self.print_context(context, false);
            }
        }

        postfix_context
    }

    /// Whether the type, looking through generic signatures, is something that prints as a function.
    fn is_function_like(&mut self, type_: &Node) -> bool {
        let mut type_ = type_;

        while type_.kind == Kind::DependentGenericType {
            match self.child(type_, 1).and_then(|dependent_type| self.child(dependent_type, 0)) {
                Some(inner) => type_ = inner,
                None => return false,
            }
        }

        matches!(
            type_.kind,
            Kind::FunctionType
                | Kind::NoEscapeFunctionType
                | Kind::UncurriedFunctionType
                | Kind::CFunctionPointer
                | Kind::ThinFunctionType
        )
    }

    fn print_entity_type(&mut self, entity: &Node, type_: &Node, generic_function_type_list: Option<&Node>) {
        let label_list = entity.child_of_kind(Kind::LabelList);

        if label_list.is_none() && generic_function_type_list.is_none() {
            self.print(type_, false);

            return;
        }

        if let Some(generic_arguments) = generic_function_type_list {
            self.output.push('<');
            self.print_children(generic_arguments, ", ");
            self.output.push('>');
        }

        let mut type_ = type_;

        if type_.kind == Kind::DependentGenericType {
            if generic_function_type_list.is_none() {
                self.print_child(type_, 0);
            }

            let Some(dependent_type) = self.child(type_, 1) else {
                return;
            };

            if classify::needs_space_before_type(dependent_type) {
                self.output.push(' ');
            }

            let Some(inner) = self.child(dependent_type, 0) else {
                return;
            };

            type_ = inner;
        }

        self.print_function_type(label_list, type_);
    }
}
