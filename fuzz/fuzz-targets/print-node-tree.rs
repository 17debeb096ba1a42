#![no_main]

use std::fmt::Write;
use swift_node_printer::swift::{self, DemangleOptions, Node};
use test_utilities::BoundedWriter;

fn options_from_byte(flags: u8) -> DemangleOptions {
    let flag = |bit: u8| flags & (1 << bit) != 0;

    DemangleOptions {
        synthesize_sugar_on_types: flag(0),
        qualify_entities: flag(1),
        display_module_names: flag(2),
        display_entity_types: flag(3),
        display_local_name_contexts: flag(4),
        show_function_argument_types: flag(5),
        print_for_type_name: flag(6),
        display_generic_specializations: flag(7),
        ..DemangleOptions::default()
    }
}

fn check(tree: &Node, options: &DemangleOptions) {
    let text = swift::node_to_string(Some(tree), options);
    let mut sink = BoundedWriter::new(String::new(), 1 << 20);

    if write!(sink, "{}", tree.display(options)).is_ok() {
        assert_eq!(sink.into_inner(), text);
    }
}

fn fuzz_with(data: &[u8]) {
    let Some((&flags, rest)) = data.split_first() else {
        return;
    };

    let tree = test_utilities::tree_from_bytes(rest);

    check(&tree, &DemangleOptions::default());
    check(&tree, &DemangleOptions::simplified());
    check(&tree, &options_from_byte(flags));
}

libfuzzer_sys::fuzz_target!(|data: &[u8]| {
    fuzz_with(data);
});
