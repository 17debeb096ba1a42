//! # swift-node-printer
//!
//! Prints demangled Swift symbols as human-readable declarations.
//!
//! A demangler turns a mangled name into a tree of [`swift::Node`]s. This crate renders such trees, with a set of
//! [`swift::DemangleOptions`] deciding how much detail is shown.
//!
//! Example:
//!
//! ```rust
//! use swift_node_printer::swift::{self, DemangleOptions, Kind, Node};
//!
//! // `Swift.Int`
//! let int = || {
//!     Node::with_children(
//!         Kind::Type,
//!         [Node::with_children(
//!             Kind::Structure,
//!             [Node::with_text(Kind::Module, "Swift"), Node::with_text(Kind::Identifier, "Int")],
//!         )],
//!     )
//! };
//!
//! // `main.foo(label:)`, taking and returning a `Swift.Int`.
//! let symbol = Node::with_children(
//!     Kind::Global,
//!     [Node::with_children(
//!         Kind::Function,
//!         [
//!             Node::with_text(Kind::Module, "main"),
//!             Node::with_text(Kind::Identifier, "foo"),
//!             Node::with_children(Kind::LabelList, [Node::with_text(Kind::Identifier, "label")]),
//!             Node::with_children(
//!                 Kind::Type,
//!                 [Node::with_children(
//!                     Kind::FunctionType,
//!                     [
//!                         Node::with_children(
//!                             Kind::ArgumentTuple,
//!                             [Node::with_children(
//!                                 Kind::Type,
//!                                 [Node::with_children(
//!                                     Kind::Tuple,
//!                                     [Node::with_children(Kind::TupleElement, [int()])],
//!                                 )],
//!                             )],
//!                         ),
//!                         Node::with_children(Kind::ReturnType, [int()]),
//!                     ],
//!                 )],
//!             ),
//!         ],
//!     )],
//! );
//!
//! // By default, everything is printed.
//! assert_eq!(
//!     swift::node_to_string(Some(&symbol), &DemangleOptions::default()),
//!     "main.foo(label: Swift.Int) -> Swift.Int"
//! );
//!
//! // Options control the level of detail.
//! let options = DemangleOptions {
//!     display_stdlib_module: false,
//!     ..DemangleOptions::default()
//! };
//!
//! assert_eq!(format!("{}", symbol.display(&options)), "main.foo(label: Int) -> Int");
//! assert_eq!(format!("{}", symbol.display(&DemangleOptions::simplified())), "foo(label:)");
//!
//! // Malformed trees are reported by `try_node_to_string`, and print as an empty string otherwise.
//! let malformed = Node::new(Kind::TypeMetadata);
//!
//! assert!(swift::try_node_to_string(&malformed, &DemangleOptions::default()).is_err());
//! assert_eq!(swift::node_to_string(Some(&malformed), &DemangleOptions::default()), "");
//! ```

#![warn(
    explicit_outlives_requirements,
    macro_use_extern_crate,
    meta_variable_misuse,
    missing_abi,
    // missing_docs,
    noop_method_call,
    pointer_structural_match,
    // single_use_lifetimes, // See <https://github.com/rust-lang/rust/issues/69952>.
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unsafe_op_in_unsafe_fn,
    // unused_crate_dependencies, // False positive.
    unused_extern_crates,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications,
    variant_size_differences,
    // clippy::cargo_common_metadata,
    clippy::clone_on_ref_ptr,
    clippy::cognitive_complexity,
    clippy::create_dir,
    clippy::dbg_macro,
    clippy::debug_assert_with_mut_call,
    clippy::empty_line_after_outer_attr,
    clippy::fallible_impl_from,
    clippy::filetype_is_file,
    clippy::float_cmp_const,
    clippy::get_unwrap,
    clippy::if_then_some_else_none,
    clippy::imprecise_flops,
    clippy::let_underscore_must_use,
    clippy::lossy_float_literal,
    clippy::mutex_integer,
    clippy::nonstandard_macro_braces,
    clippy::panic_in_result_fn,
    clippy::path_buf_push_overwrite,
    clippy::pedantic,
    clippy::print_stderr,
    clippy::print_stdout,
    clippy::rc_buffer,
    clippy::rc_mutex,
    clippy::rest_pat_in_fully_bound_structs,
    clippy::string_lit_as_bytes,
    clippy::string_to_string,
    clippy::suboptimal_flops,
    clippy::suspicious_operation_groupings,
    clippy::todo,
    clippy::trivial_regex,
    clippy::unimplemented,
    clippy::unnecessary_self_imports,
    clippy::unneeded_field_pattern,
    clippy::use_debug,
    clippy::use_self,
    clippy::useless_let_if_seq,
    clippy::useless_transmute,
    clippy::verbose_file_reads,
    // clippy::wildcard_dependencies,
)]
#![allow(clippy::module_name_repetitions, clippy::non_ascii_literal)]

pub mod swift;
