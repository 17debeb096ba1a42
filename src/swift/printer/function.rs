use super::NodePrinter;
use crate::swift::{Kind, Node};

/// Progress through an impl function type. Only moves forward.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
enum ImplState {
    Attributes,
    Inputs,
    Results,
}

impl NodePrinter<'_> {
    /// Prints a function type, using `label_list` for the argument labels if given.
    pub(super) fn print_function_type(&mut self, label_list: Option<&Node>, node: &Node) {
        if !(2..=5).contains(&node.num_children()) {
            self.set_invalid(node, "function type needs between 2 and 5 children");

            return;
        }

        match node.kind {
            Kind::FunctionType | Kind::UncurriedFunctionType | Kind::NoEscapeFunctionType => {}
            Kind::AutoClosureType | Kind::EscapingAutoClosureType => self.output.push_str("@autoclosure "),
            Kind::ThinFunctionType => self.output.push_str("@convention(thin) "),
            Kind::CFunctionPointer => self.print_convention_with_c_type(node, "c"),
            Kind::EscapingObjCBlock => {
                self.output.push_str("@escaping ");
                self.print_convention_with_c_type(node, "block");
            }
            Kind::ObjCBlock => self.print_convention_with_c_type(node, "block"),
            Kind::DifferentiableFunctionType => self.output.push_str("@differentiable "),
            Kind::EscapingDifferentiableFunctionType => self.output.push_str("@escaping @differentiable "),
            Kind::LinearFunctionType => self.output.push_str("@differentiable(linear) "),
            Kind::EscapingLinearFunctionType => self.output.push_str("@escaping @differentiable(linear) "),
            _ => {
                self.set_invalid(node, "not a function type");

                return;
            }
        }

        let mut children = node.iter().peekable();

        children.next_if(|child| child.kind == Kind::ClangType);

        let is_throws = children.next_if(|child| child.kind == Kind::ThrowsAnnotation).is_some();
        let is_async = children.next_if(|child| child.kind == Kind::AsyncAnnotation).is_some();

        let (Some(parameters), Some(return_type)) = (children.next(), children.next()) else {
            self.set_invalid(node, "function type without parameters or result");

            return;
        };

        let show_types = self.options.show_function_argument_types;

        self.print_function_parameters(label_list, parameters, show_types);

        if !show_types {
            return;
        }

        if is_async {
            self.output.push_str(" async");
        }

        if is_throws {
            self.output.push_str(" throws");
        }

        self.print(return_type, false);
    }

    fn print_convention_with_c_type(&mut self, node: &Node, convention: &str) {
        self.output.push_str("@convention(");
        self.output.push_str(convention);

        if let Some(clang_type) = node.first_child().filter(|child| child.kind == Kind::ClangType) {
            self.output.push_str(", mangledCType: \"");
            self.print(clang_type, false);
            self.output.push('"');
        }

        self.output.push_str(") ");
    }

    /// Prints the parameter list of a function, either with types or as a selector like `(a:_:)`.
    pub(super) fn print_function_parameters(&mut self, label_list: Option<&Node>, parameter_type: &Node, show_types: bool) {
        if parameter_type.kind != Kind::ArgumentTuple {
            self.set_invalid(parameter_type, "parameters must be an argument tuple");

            return;
        }

        let Some(parameters) = self.child(parameter_type, 0).and_then(|type_| self.child(type_, 0)) else {
            return;
        };

        if parameters.kind != Kind::Tuple {
            // A single unnamed parameter.
            if show_types {
                self.output.push('(');
                self.print(parameters, false);
                self.output.push(')');
            } else {
                self.output.push_str("(_:)");
            }

            return;
        }

        let label_list = label_list.filter(|labels| labels.has_children());

        self.output.push('(');

        for (i, parameter) in parameters.iter().enumerate() {
            if i != 0 && show_types {
                self.output.push_str(", ");
            }

            if let Some(labels) = label_list {
                let Some(label) = self.child(labels, i) else {
                    return;
                };

                match label.kind {
                    Kind::Identifier => {
                        let text = self.text(label);

                        self.output.push_str(text);
                    }
                    Kind::FirstElementMarker => self.output.push('_'),
                    _ => {
                        self.set_invalid(label, "argument label must be an identifier or a placeholder");

                        return;
                    }
                }

                self.output.push(':');

                if show_types {
                    self.output.push(' ');
                }
            } else if !show_types {
                match parameter.child_of_kind(Kind::TupleElementName) {
                    Some(name) => {
                        let text = self.text(name);

                        self.output.push_str(text);
                        self.output.push(':');
                    }
                    None => self.output.push_str("_:"),
                }
            }

            if show_types {
                self.print(parameter, false);
            }
        }

        self.output.push(')');
    }

    /// Prints a lowered function type like `@convention(thin) (@in Int) -> (@out Int)`.
    pub(super) fn print_impl_function_type(&mut self, node: &Node) {
        let mut state = ImplState::Attributes;
        let mut pattern_substitutions = None;
        let mut invocation_substitutions = None;

        for child in node.iter() {
            match child.kind {
                Kind::ImplParameter => {
                    if state == ImplState::Inputs {
                        self.output.push_str(", ");
                    }

                    self.transition(&mut state, ImplState::Inputs, pattern_substitutions);
                    self.print(child, false);
                }
                Kind::ImplResult | Kind::ImplYield | Kind::ImplErrorResult => {
                    if state == ImplState::Results {
                        self.output.push_str(", ");
                    }

                    self.transition(&mut state, ImplState::Results, pattern_substitutions);
                    self.print(child, false);
                }
                Kind::ImplPatternSubstitutions => pattern_substitutions = Some(child),
                Kind::ImplInvocationSubstitutions => invocation_substitutions = Some(child),
                _ => {
                    if state != ImplState::Attributes {
                        self.set_invalid(child, "attribute after parameters or results");

                        return;
                    }

                    self.print(child, false);
                    self.output.push(' ');
                }
            }
        }

        self.transition(&mut state, ImplState::Results, pattern_substitutions);
        self.output.push(')');

        if let Some(substitutions) = pattern_substitutions {
            self.output.push_str(" for <");

            if let Some(arguments) = self.child(substitutions, 1) {
                self.print_children(arguments, "");
            }

            self.output.push('>');
        }

        if let Some(substitutions) = invocation_substitutions {
            self.output.push_str(" for <");

            if let Some(arguments) = self.child(substitutions, 0) {
                self.print_children(arguments, "");
            }

            self.output.push('>');
        }
    }

    /// Advances the impl function state, printing the punctuation of every state that is left behind.
    fn transition(&mut self, state: &mut ImplState, target: ImplState, pattern_substitutions: Option<&Node>) {
        while *state < target {
            match *state {
                ImplState::Attributes => {
                    if let Some(substitutions) = pattern_substitutions {
                        self.output.push_str("@substituted ");
                        self.print_child(substitutions, 0);
                        self.output.push(' ');
                    }

                    self.output.push('(');
                    *state = ImplState::Inputs;
                }
                ImplState::Inputs => {
                    self.output.push_str(") -> (");
                    *state = ImplState::Results;
                }
                ImplState::Results => break,
            }
        }
    }

    pub(super) fn print_impl_function_convention(&mut self, node: &Node) {
        self.output.push_str("@convention(");

        match node.num_children() {
            1 => {
                let name = self.child_text(node, 0);

                self.output.push_str(name);
            }
            2 => {
                let name = self.child_text(node, 0);

                self.output.push_str(name);
                self.output.push_str(", mangledCType: \"");
                self.print_child(node, 1);
                self.output.push('"');
            }
            _ => {
                self.set_invalid(node, "convention needs a name and an optional C type");

                return;
            }
        }

        self.output.push(')');
    }
}
