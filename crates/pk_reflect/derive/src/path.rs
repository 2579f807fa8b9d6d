//! Paths to `pk_reflect` items used by the generated code.

use proc_macro2::TokenStream;
use quote::quote;

/// Get the correct access path to the `pk_reflect` crate.
///
/// 1. For crates that depend on `pk_reflect`, `::pk_reflect` is returned.
/// 2. For crates that depend on `propkit`, `::propkit::reflect` is returned.
/// 3. Otherwise `::pk_reflect` is returned, which is also correct inside
///    `pk_reflect` itself.
///
/// Reading the manifest is not cheap, so the path is obtained once per
/// derive and passed around.
pub(crate) fn pk_reflect() -> syn::Path {
    pk_macro_utils::Manifest::shared(|manifest| manifest.get_crate_path("pk_reflect"))
}

#[inline(always)]
pub(crate) fn typed_(pk_reflect_path: &syn::Path) -> TokenStream {
    quote! { #pk_reflect_path::info::Typed }
}

#[inline(always)]
pub(crate) fn type_info_(pk_reflect_path: &syn::Path) -> TokenStream {
    quote! { #pk_reflect_path::info::TypeInfo }
}

#[inline(always)]
pub(crate) fn reflect_(pk_reflect_path: &syn::Path) -> TokenStream {
    quote! { #pk_reflect_path::Reflect }
}

#[inline(always)]
pub(crate) fn property_host_(pk_reflect_path: &syn::Path) -> TokenStream {
    quote! { #pk_reflect_path::PropertyHost }
}

#[inline(always)]
pub(crate) fn invocation_error_(pk_reflect_path: &syn::Path) -> TokenStream {
    quote! { #pk_reflect_path::InvocationError }
}

#[inline(always)]
pub(crate) fn value_(pk_reflect_path: &syn::Path) -> TokenStream {
    quote! { #pk_reflect_path::value::Value }
}

#[inline(always)]
pub(crate) fn from_value_(pk_reflect_path: &syn::Path) -> TokenStream {
    quote! { #pk_reflect_path::value::FromValue }
}

#[inline(always)]
pub(crate) fn apply_error_(pk_reflect_path: &syn::Path) -> TokenStream {
    quote! { #pk_reflect_path::value::ApplyError }
}

#[inline(always)]
pub(crate) fn constraint_marker_(pk_reflect_path: &syn::Path) -> TokenStream {
    quote! { #pk_reflect_path::constraint::ConstraintMarker }
}

// -----------------------------------------------------------------------------
// std

#[inline(always)]
pub(crate) fn option_() -> TokenStream {
    quote! { ::core::option::Option }
}

#[inline(always)]
pub(crate) fn result_() -> TokenStream {
    quote! { ::core::result::Result }
}

#[inline(always)]
pub(crate) fn box_() -> TokenStream {
    quote! { ::std::boxed::Box }
}
