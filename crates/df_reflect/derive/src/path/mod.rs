//! Paths into `df_reflect` used by the generated code.
//!
//! Kept in one place so the generated code follows `df_reflect`'s layout
//! from a single spot.

use proc_macro2::TokenStream;
use quote::quote;

/// Get the access path to the `df_reflect` crate.
///
/// 1. For crates that depend on `df_reflect`, `::df_reflect` is returned.
/// 2. For crates that depend on `df_core`, `::df_core::reflect` is returned.
/// 3. Otherwise `::df_reflect` is returned, which needs
///    `extern crate self as df_reflect;` inside `df_reflect` itself.
///
/// This reads the caller's `Cargo.toml`, so call it once per derive.
pub(crate) fn df_reflect() -> syn::Path {
    df_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("df_reflect"))
}

#[inline(always)]
pub(crate) fn macro_utils_(df_reflect_path: &syn::Path) -> TokenStream {
    quote! { #df_reflect_path::__macro_exports::macro_utils }
}

#[inline(always)]
pub(crate) fn reflect_(df_reflect_path: &syn::Path) -> TokenStream {
    quote! { #df_reflect_path::Reflect }
}

#[inline(always)]
pub(crate) fn info_(df_reflect_path: &syn::Path) -> TokenStream {
    quote! { #df_reflect_path::info }
}

#[inline(always)]
pub(crate) fn ops_(df_reflect_path: &syn::Path) -> TokenStream {
    quote! { #df_reflect_path::ops }
}

#[inline(always)]
pub(crate) fn impls_(df_reflect_path: &syn::Path) -> TokenStream {
    quote! { #df_reflect_path::impls }
}
