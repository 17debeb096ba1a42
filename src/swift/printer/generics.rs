use super::NodePrinter;
use crate::swift::{Kind, Node};

/// Generic parameters beyond this count in one depth are elided.
const MAX_PRINTED_GENERIC_PARAMETERS: u64 = 128;

/// Maps a layout constraint code to the name of the constraint.
fn layout_constraint_name(code: char) -> &'static str {
    match code {
        'U' => "_UnknownLayout",
        'R' => "_RefCountedObject",
        'N' => "_NativeRefCountedObject",
        'C' => "AnyObject",
        'D' => "_NativeClass",
        'T' | 'E' | 'e' => "_Trivial",
        'M' | 'm' => "_TrivialAtMost",
        _ => "",
    }
}

impl NodePrinter<'_> {
    /// Prints `<A, B><A1 where A: P, A1 == B>`. Every leading parameter count child opens a new depth.
    pub(super) fn print_generic_signature(&mut self, node: &Node) {
        self.output.push('<');

        let num_depths = node
            .iter()
            .take_while(|child| child.kind == Kind::DependentGenericParamCount)
            .count();

        for (depth, count) in (0_u64..).zip(node.iter().take(num_depths)) {
            if depth != 0 {
                self.output.push_str("><");
            }

            let count = self.index(count);

            for index in 0..count {
                if index != 0 {
                    self.output.push_str(", ");
                }

                if index >= MAX_PRINTED_GENERIC_PARAMETERS {
                    self.output.push_str("...");

                    break;
                }

                let name = (self.options.generic_parameter_name)(depth, index);

                self.output.push_str(&name);
            }
        }

        if num_depths != node.num_children() && self.options.display_where_clauses {
            self.output.push_str(" where ");

            for (i, requirement) in node.iter().skip(num_depths).enumerate() {
                if i != 0 {
                    self.output.push_str(", ");
                }

                self.print(requirement, false);
            }
        }

        self.output.push('>');
    }

    /// Prints `T: _Trivial(64)` and the like.
    pub(super) fn print_layout_requirement(&mut self, node: &Node) {
        self.print_child(node, 0);
        self.output.push_str(": ");

        let Some(layout) = self.child(node, 1) else {
            return;
        };

        let mut code = layout.text().unwrap_or_default().chars();

        match (layout.kind, code.next(), code.next()) {
            (Kind::Identifier, Some(code), None) => self.output.push_str(layout_constraint_name(code)),
            _ => {
                self.set_invalid(layout, "layout constraint must be a one-letter identifier");

                return;
            }
        }

        if node.num_children() > 2 {
            self.output.push('(');
            self.print_child(node, 2);

            if node.num_children() > 3 {
                self.output.push_str(", ");
                self.print_child(node, 3);
            }

            self.output.push(')');
        }
    }

    pub(super) fn print_generic_param_type(&mut self, node: &Node) {
        let depth = self.child_index(node, 0);
        let index = self.child_index(node, 1);
        let name = (self.options.generic_parameter_name)(depth, index);

        self.output.push_str(&name);
    }
}
