use std::fmt::{self, Debug, Formatter, Write};
use std::sync::Arc;

/// Name of the standard library module.
pub(crate) const STDLIB_MODULE: &str = "Swift";

/// Name of the module that holds imported C and Objective-C declarations.
pub(crate) const OBJC_MODULE: &str = "__C";

/// Prefix of the modules the debugger synthesizes for evaluated expressions.
pub(crate) const DEBUGGER_EXPRESSION_MODULE_PREFIX: &str = "__lldb_expr_";

/// Names a generic parameter from its depth and index.
pub type GenericParameterNamer = dyn Fn(u64, u64) -> String + Send + Sync;

/// Demangles a mangled name embedded in a node payload, returning `None` if it cannot.
pub type PayloadDemangler = dyn Fn(&str) -> Option<String> + Send + Sync;

/// The default generic parameter naming: `A`, `B`, …, `Z`, `AB`, `BB`, … followed by the depth unless it is zero.
///
/// ```rust
/// use swift_node_printer::swift::generic_parameter_name;
///
/// assert_eq!(generic_parameter_name(0, 0), "A");
/// assert_eq!(generic_parameter_name(0, 27), "BB");
/// assert_eq!(generic_parameter_name(1, 0), "A1");
/// ```
#[must_use]
pub fn generic_parameter_name(depth: u64, index: u64) -> String {
    let mut name = String::new();
    let mut index = index;

    loop {
        let [offset, ..] = (index % 26).to_le_bytes();

        name.push(char::from(b'A' + offset));
        index /= 26;

        if index == 0 {
            break;
        }
    }

    if depth != 0 {
        let _ = write!(name, "{depth}");
    }

    name
}

/// Controls how a node tree is printed.
///
/// The [`Default`] value prints everything the tree contains; [`DemangleOptions::simplified`] produces the terse form
/// suitable for user interfaces.
#[derive(Clone)]
pub struct DemangleOptions {
    /// Print `T?`, `T!`, `[T]` and `[K : V]` instead of the standard library generic types they stand for.
    pub synthesize_sugar_on_types: bool,
    /// Qualify entities with their context, e.g. `Module.Type.method`.
    pub qualify_entities: bool,
    /// Print `(extension in Module):` for entities declared in extensions.
    pub display_extension_contexts: bool,
    /// Print the unmangled suffix of a symbol.
    pub display_unmangled_suffix: bool,
    /// Print module names at all.
    pub display_module_names: bool,
    /// Print the parameters of generic and function signature specializations instead of just `specialized`.
    pub display_generic_specializations: bool,
    /// Print the protocol and module of a protocol conformance.
    pub display_protocol_conformances: bool,
    /// Print the `where` clauses of generic signatures.
    pub display_where_clauses: bool,
    /// Print the types of variables and other entities that are not function-like.
    pub display_entity_types: bool,
    /// Print the `#N` discriminator of local declarations.
    pub display_local_name_contexts: bool,
    /// Print `partial apply` instead of `partial apply forwarder`.
    pub shorten_partial_apply: bool,
    /// Print `thunk for` instead of the full reabstraction thunk description, and omit thunk prefixes.
    pub shorten_thunk: bool,
    /// Print `X for T` instead of `X value witness for T`.
    pub shorten_value_witness: bool,
    /// Print the discriminators of private declarations.
    pub show_private_discriminators: bool,
    /// Print parameter and result types of functions; otherwise only the argument labels are printed.
    pub show_function_argument_types: bool,
    /// Qualify entities that live in modules synthesized by the debugger.
    pub display_debugger_generated_module: bool,
    /// Qualify entities that live in the standard library module.
    pub display_stdlib_module: bool,
    /// Qualify entities that live in the imported C and Objective-C module.
    pub display_objc_module: bool,
    /// The tree is printed as a type name for runtime use, so parts that the runtime does not mangle are omitted.
    pub print_for_type_name: bool,
    /// Do not qualify entities with this module.
    pub hiding_current_module: Option<String>,
    /// Names generic parameters.
    pub generic_parameter_name: Arc<GenericParameterNamer>,
    /// Demangles the mangled names carried by constant-propagated specialization parameters.
    pub payload_demangler: Option<Arc<PayloadDemangler>>,
}

impl DemangleOptions {
    /// Options for a short, user-facing rendering.
    #[must_use]
    pub fn simplified() -> Self {
        Self {
            synthesize_sugar_on_types: true,
            display_extension_contexts: false,
            display_unmangled_suffix: false,
            display_module_names: false,
            display_generic_specializations: false,
            display_protocol_conformances: false,
            display_where_clauses: false,
            display_entity_types: false,
            shorten_partial_apply: true,
            shorten_thunk: true,
            shorten_value_witness: true,
            show_private_discriminators: false,
            show_function_argument_types: false,
            ..Self::default()
        }
    }

    /// Replaces the generic parameter naming.
    #[must_use]
    pub fn with_generic_parameter_name(mut self, f: impl Fn(u64, u64) -> String + Send + Sync + 'static) -> Self {
        self.generic_parameter_name = Arc::new(f);

        self
    }

    /// Sets the payload demangler.
    #[must_use]
    pub fn with_payload_demangler(mut self, f: impl Fn(&str) -> Option<String> + Send + Sync + 'static) -> Self {
        self.payload_demangler = Some(Arc::new(f));

        self
    }

    /// Hides the given module when qualifying entities.
    #[must_use]
    pub fn hiding_module(mut self, module: impl Into<String>) -> Self {
        self.hiding_current_module = Some(module.into());

        self
    }
}

impl Default for DemangleOptions {
    fn default() -> Self {
        Self {
            synthesize_sugar_on_types: false,
            qualify_entities: true,
            display_extension_contexts: true,
            display_unmangled_suffix: true,
            display_module_names: true,
            display_generic_specializations: true,
            display_protocol_conformances: true,
            display_where_clauses: true,
            display_entity_types: true,
            display_local_name_contexts: true,
            shorten_partial_apply: false,
            shorten_thunk: false,
            shorten_value_witness: false,
            show_private_discriminators: true,
            show_function_argument_types: true,
            display_debugger_generated_module: true,
            display_stdlib_module: true,
            display_objc_module: true,
            print_for_type_name: false,
            hiding_current_module: None,
            generic_parameter_name: Arc::new(generic_parameter_name),
            payload_demangler: None,
        }
    }
}

impl Debug for DemangleOptions {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("DemangleOptions")
            .field("synthesize_sugar_on_types", &self.synthesize_sugar_on_types)
            .field("qualify_entities", &self.qualify_entities)
            .field("display_extension_contexts", &self.display_extension_contexts)
            .field("display_unmangled_suffix", &self.display_unmangled_suffix)
            .field("display_module_names", &self.display_module_names)
            .field("display_generic_specializations", &self.display_generic_specializations)
            .field("display_protocol_conformances", &self.display_protocol_conformances)
            .field("display_where_clauses", &self.display_where_clauses)
            .field("display_entity_types", &self.display_entity_types)
            .field("display_local_name_contexts", &self.display_local_name_contexts)
            .field("shorten_partial_apply", &self.shorten_partial_apply)
            .field("shorten_thunk", &self.shorten_thunk)
            .field("shorten_value_witness", &self.shorten_value_witness)
            .field("show_private_discriminators", &self.show_private_discriminators)
            .field("show_function_argument_types", &self.show_function_argument_types)
            .field("display_debugger_generated_module", &self.display_debugger_generated_module)
            .field("display_stdlib_module", &self.display_stdlib_module)
            .field("display_objc_module", &self.display_objc_module)
            .field("print_for_type_name", &self.print_for_type_name)
            .field("hiding_current_module", &self.hiding_current_module)
            .field("payload_demangler", &self.payload_demangler.is_some())
            .finish_non_exhaustive()
    }
}
