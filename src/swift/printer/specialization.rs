use super::NodePrinter;
use crate::swift::{Kind, Node};
use bitflags::bitflags;

bitflags! {
    /// Optimizations that can be combined on a single specialized parameter.
    #[derive(Clone, Copy, Debug, Eq, PartialEq)]
    struct ParamOptions: u64 {
        const DEAD = 1 << 6;
        const OWNED_TO_GUARANTEED = 1 << 7;
        const SROA = 1 << 8;
        const GUARANTEED_TO_OWNED = 1 << 9;
        const EXISTENTIAL_TO_GENERIC = 1 << 10;
    }
}

/// Option descriptions, in printing order.
const PARAM_OPTION_NAMES: [(ParamOptions, &str); 5] = [
    (ParamOptions::EXISTENTIAL_TO_GENERIC, "Existential To Protocol Constrained Generic"),
    (ParamOptions::DEAD, "Dead"),
    (ParamOptions::OWNED_TO_GUARANTEED, "Owned To Guaranteed"),
    (ParamOptions::GUARANTEED_TO_OWNED, "Guaranteed To Owned"),
    (ParamOptions::SROA, "Exploded"),
];

/// What a function signature specialization did to a parameter.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum ParamKind {
    ConstantPropFunction,
    ConstantPropGlobal,
    ConstantPropInteger,
    ConstantPropFloat,
    ConstantPropString,
    ClosureProp,
    BoxToValue,
    BoxToStack,
    Options(ParamOptions),
}

impl ParamKind {
    fn from_raw(raw: u64) -> Option<Self> {
        let options = ParamOptions::from_bits_truncate(raw);

        if !options.is_empty() {
            return Some(Self::Options(options));
        }

        Some(match raw {
            0 => Self::ConstantPropFunction,
            1 => Self::ConstantPropGlobal,
            2 => Self::ConstantPropInteger,
            3 => Self::ConstantPropFloat,
            4 => Self::ConstantPropString,
            5 => Self::ClosureProp,
            6 => Self::BoxToValue,
            7 => Self::BoxToStack,
            _ => return None,
        })
    }

    fn description(self) -> &'static str {
        match self {
            Self::ConstantPropFunction => "Constant Propagated Function",
            Self::ConstantPropGlobal => "Constant Propagated Global",
            Self::ConstantPropInteger => "Constant Propagated Integer",
            Self::ConstantPropFloat => "Constant Propagated Float",
            Self::ConstantPropString => "Constant Propagated String",
            Self::ClosureProp => "Closure Propagated",
            Self::BoxToValue => "Value Promoted from Box",
            Self::BoxToStack => "Stack Promoted from Box",
            Self::Options(_) => "",
        }
    }
}

impl NodePrinter<'_> {
    /// Prints the `<description> <arguments> of ` prefix of a specialized function, or only `specialized ` once per
    /// call when specializations are not displayed in detail.
    pub(super) fn print_specialization_prefix(&mut self, node: &Node, description: &str, param_prefix: &str) {
        if !self.options.display_generic_specializations {
            if !self.specialization_prefix_printed {
                self.output.push_str("specialized ");
                self.specialization_prefix_printed = true;
            }

            return;
        }

        self.output.push_str(description);
        self.output.push_str(" <");

        let mut separator = "";
        let mut argument_number = 0_u64;

        for child in node.iter() {
            match child.kind {
                Kind::SpecializationPassID => {}
                Kind::IsSerialized => {
                    self.output.push_str(separator);
                    separator = ", ";
                    self.print(child, false);
                }
                _ => {
                    // Empty specializations are not printed, but still count as an argument.
                    if child.has_children() {
                        self.output.push_str(separator);
                        self.output.push_str(param_prefix);
                        separator = ", ";

                        match child.kind {
                            Kind::FunctionSignatureSpecializationParam => {
                                self.output.push_str("Arg[");
                                self.output.push_number(argument_number);
                                self.output.push_str("] = ");
                                self.print_function_signature_params(child);
                            }
                            Kind::FunctionSignatureSpecializationReturn => {
                                self.output.push_str("Return = ");
                                self.print_function_signature_params(child);
                            }
                            _ => {
                                self.print(child, false);
                            }
                        }
                    }

                    argument_number += 1;
                }
            }
        }

        self.output.push_str("> of ");
    }

    fn print_function_signature_params(&mut self, node: &Node) {
        let mut i = 0;

        while i < node.num_children() && self.error.is_none() {
            let raw = self.child_index(node, i);

            let Some(kind) = ParamKind::from_raw(raw) else {
                self.set_invalid(node, "unknown specialization parameter kind");

                return;
            };

            match kind {
                ParamKind::BoxToValue | ParamKind::BoxToStack | ParamKind::Options(_) => {
                    self.print_child(node, i);
                    i += 1;
                }
                ParamKind::ConstantPropFunction | ParamKind::ConstantPropGlobal => {
                    self.output.push('[');
                    self.print_child(node, i);
                    self.output.push_str(" : ");

                    let payload = self.child_text(node, i + 1);

                    self.print_mangled_payload(payload);
                    self.output.push(']');
                    i += 2;
                }
                ParamKind::ConstantPropInteger | ParamKind::ConstantPropFloat => {
                    self.output.push('[');
                    self.print_child(node, i);
                    self.output.push_str(" : ");
                    self.print_child(node, i + 1);
                    self.output.push(']');
                    i += 2;
                }
                ParamKind::ConstantPropString => {
                    self.output.push('[');
                    self.print_child(node, i);
                    self.output.push_str(" : ");
                    self.print_child(node, i + 1);
                    self.output.push('\'');
                    self.print_child(node, i + 2);
                    self.output.push_str("']");
                    i += 3;
                }
                ParamKind::ClosureProp => {
                    self.output.push('[');
                    self.print_child(node, i);
                    self.output.push_str(" : ");
                    self.print_child(node, i + 1);
                    self.output.push_str(", Argument Types : [");
                    i += 2;

                    while let Some(argument_type) = node.child(i).filter(|child| child.kind == Kind::Type) {
                        self.print(argument_type, false);
                        i += 1;

                        if node.child(i).is_some_and(|next| next.text().is_some()) {
                            self.output.push_str(", ");
                        }
                    }

                    self.output.push(']');
                }
            }
        }
    }

    pub(super) fn print_function_signature_param_kind(&mut self, node: &Node) {
        let raw = self.index(node);

        match ParamKind::from_raw(raw) {
            Some(ParamKind::Options(options)) => {
                let names = PARAM_OPTION_NAMES
                    .iter()
                    .filter(|(option, _)| options.contains(*option))
                    .map(|(_, name)| *name);

                for (i, name) in names.enumerate() {
                    if i != 0 {
                        self.output.push_str(" and ");
                    }

                    self.output.push_str(name);
                }
            }
            Some(kind) => self.output.push_str(kind.description()),
            None => self.set_invalid(node, "unknown specialization parameter kind"),
        }
    }

    /// Prints a mangled name carried by a constant-propagated parameter, demangled if the options know how.
    pub(super) fn print_mangled_payload(&mut self, payload: &str) {
        let demangled = self
            .options
            .payload_demangler
            .as_deref()
            .and_then(|demangle| demangle(payload))
            .filter(|demangled| !demangled.is_empty());

        self.output.push_str(demangled.as_deref().unwrap_or(payload));
    }

    pub(super) fn print_generic_specialization_param(&mut self, node: &Node) {
        self.print_child(node, 0);

        for (i, argument) in node.iter().enumerate().skip(1) {
            self.output.push_str(if i == 1 { " with " } else { " and " });
            self.print(argument, false);
        }
    }
}
