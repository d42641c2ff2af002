//! Derive macro for `df_reflect`.
//!
//! See [`Reflect`].
#![allow(clippy::std_instead_of_core, reason = "proc-macro lib")]
#![allow(clippy::std_instead_of_alloc, reason = "proc-macro lib")]

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

static REFLECT_ATTRIBUTE_NAME: &str = "reflect";

// -----------------------------------------------------------------------------
// Modules

mod derive_data;
mod impls;
mod path;

// -----------------------------------------------------------------------------
// Macros

/// # Record Reflection Derivation
///
/// `#[derive(Reflect)]` implements `TypePath`, `Typed`, `Reflect` and `Struct`
/// for a non-generic struct with named fields (or a unit struct, which is a
/// record with no fields).
///
/// ## Visibility and mutability
///
/// A field declared `pub` is reported public; any other visibility, including
/// `pub(crate)`, is reported private. Every field is mutable unless marked
/// `#[reflect(readonly)]`:
///
/// ```rust, ignore
/// #[derive(Reflect, Default)]
/// struct User {
///     pub name: String,
///     #[reflect(readonly)]
///     pub id: u64,
///     password: String,
/// }
/// ```
///
/// ## Custom type path
///
/// The default type path is `module_path!()` followed by the type name.
/// Override it on the type:
///
/// ```rust, ignore
/// #[derive(Reflect)]
/// #[reflect(type_path = "app::model::User")]
/// struct User { /* ... */ }
/// ```
///
/// ## Zero value
///
/// `Reflect::set_zero` zeroes the record field by field, so every field type
/// only needs to implement `Reflect`.
#[proc_macro_derive(Reflect, attributes(reflect))]
pub fn derive_reflect(input: TokenStream) -> TokenStream {
    let ast = parse_macro_input!(input as DeriveInput);

    match derive_data::ReflectStruct::from_ast(&ast) {
        Ok(info) => impls::impl_struct(&info).into(),
        Err(err) => err.into_compile_error().into(),
    }
}
