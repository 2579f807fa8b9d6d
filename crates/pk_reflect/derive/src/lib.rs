//! Derive macro for `pk_reflect`.
//!
//! See [`Reflect`](derive_reflect).
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";
static PROPERTY_ATTRIBUTE_NAME: &str = "property";
static CONSTRAINT_ATTRIBUTE_NAME: &str = "constraint";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Property Host Derivation
///
/// `#[derive(Reflect)]` on a struct with named fields implements:
///
/// - `Typed`, with kind `Host`
/// - `Reflect`
/// - `FromValue`
/// - `PropertyHost`, with one descriptor per field
///
/// The type must implement `Clone`. Generic types, tuple structs, enums
/// and unions are rejected; enumerations use `impl_reflect_enumerated!`.
///
/// Every field type must implement `Reflect`, `Typed` and `FromValue`.
///
/// ## Type Attributes
///
/// ```rust, ignore
/// #[derive(Reflect, Clone)]
/// #[reflect(rename_all = "camelCase", type_name = "Client")]
/// #[reflect(supertype = Party, capability = Auditable)]
/// #[reflect(identity, debug, partial_eq)]
/// struct Customer { /* ... */ }
/// ```
///
/// - `rename_all = "camelCase" | "PascalCase"`: property naming; field
///   names are used verbatim by default.
/// - `type_name = "..."`: the short name in `TypeInfo`; defaults to the
///   struct name.
/// - `supertype = Path`, `capability = Path`: appended to the type's
///   lineage in declaration order. May be repeated.
/// - `identity`: adds the `Identity` capability and a `TypeTraitFromId`.
///   The type must implement `Identifiable`.
/// - `debug`, `partial_eq`: route `reflect_debug` and
///   `reflect_partial_eq` through the standard traits.
///
/// ## Field Attributes
///
/// ```rust, ignore
/// #[derive(Reflect, Clone)]
/// struct Account {
///     #[property(setter = Account::set_email)]
///     email: String,
///     #[property(rename = "id", read_only)]
///     account_id: i64,
///     #[property(write_only)]
///     password: String,
///     #[property(skip)]
///     cache: Vec<u8>,
/// }
/// ```
///
/// - `skip`: no descriptor is generated.
/// - `rename = "..."`: overrides the property name.
/// - `read_only`, `write_only`: omit the writer or the reader.
/// - `setter = path`: writes call `path(&mut Self, FieldType)`, which
///   must return `Result<(), E>` with `E` convertible into
///   `Box<dyn Error + Send + Sync>`.
///
/// ## Constraint Markers
///
/// ```rust, ignore
/// #[derive(Reflect, Clone)]
/// struct Person {
///     #[constraint(required, bounded_length(min = 1, max = 64))]
///     name: String,
///     #[constraint(bounded_number(min = 0, max = 150))]
///     age: u8,
///     #[constraint(bounded_date(after = "1900-01-01"))]
///     born: Option<NaiveDate>,
///     #[constraint(default = "en")]
///     locale: String,
/// }
/// ```
///
/// Markers are stored in the descriptor in declaration order and are
/// never enforced by the generated code.
#[proc_macro_derive(Reflect, attributes(reflect, property, constraint))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::ReflectHost::from_input(&ast) {
        Ok(host) => impls::impl_reflect_host(&host).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
