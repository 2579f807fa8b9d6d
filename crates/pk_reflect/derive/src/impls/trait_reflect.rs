use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectHost;

/// Generate implementation code for `Reflect`.
///
/// Snapshots and clones go through `Clone`, so the type must implement it.
pub(crate) fn impl_trait_reflect(host: &ReflectHost) -> TokenStream {
    let pk_reflect_path = host.pk_reflect_path();
    let reflect_ = crate::path::reflect_(pk_reflect_path);
    let typed_ = crate::path::typed_(pk_reflect_path);
    let type_info_ = crate::path::type_info_(pk_reflect_path);
    let value_ = crate::path::value_(pk_reflect_path);
    let from_value_ = crate::path::from_value_(pk_reflect_path);
    let apply_error_ = crate::path::apply_error_(pk_reflect_path);
    let option_ = crate::path::option_();
    let result_ = crate::path::result_();
    let box_ = crate::path::box_();

    let ident = host.ident;

    let partial_eq_tokens = if host.attrs.partial_eq {
        quote! {
            fn reflect_partial_eq(&self, other: &dyn #reflect_) -> #option_<bool> {
                #option_::Some(other.downcast_ref::<Self>().is_some_and(|other| other == self))
            }
        }
    } else {
        TokenStream::new()
    };

    let debug_tokens = if host.attrs.debug {
        quote! {
            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(self, f)
            }
        }
    } else {
        TokenStream::new()
    };

    quote! {
        impl #reflect_ for #ident {
            #[inline]
            fn reflect_type_info(&self) -> &'static #type_info_ {
                <Self as #typed_>::type_info()
            }

            #[inline]
            fn reflect_ref(&self) -> #pk_reflect_path::ReflectRef<'_> {
                #pk_reflect_path::ReflectRef::Host(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> #pk_reflect_path::ReflectMut<'_> {
                #pk_reflect_path::ReflectMut::Host(self)
            }

            fn to_value(&self) -> #value_ {
                #value_::object(::core::clone::Clone::clone(self))
            }

            fn apply(&mut self, value: #value_) -> #result_<(), #apply_error_> {
                *self = <Self as #from_value_>::from_value(value)?;
                #result_::Ok(())
            }

            fn reflect_clone(&self) -> #box_<dyn #reflect_> {
                #box_::new(::core::clone::Clone::clone(self))
            }

            #partial_eq_tokens

            #debug_tokens
        }
    }
}

/// Generate implementation code for `FromValue`.
///
/// Only an object value holding this exact type is accepted.
pub(crate) fn impl_from_value(host: &ReflectHost) -> TokenStream {
    let pk_reflect_path = host.pk_reflect_path();
    let value_ = crate::path::value_(pk_reflect_path);
    let from_value_ = crate::path::from_value_(pk_reflect_path);
    let apply_error_ = crate::path::apply_error_(pk_reflect_path);
    let result_ = crate::path::result_();

    let ident = host.ident;

    quote! {
        impl #from_value_ for #ident {
            fn from_value(value: #value_) -> #result_<Self, #apply_error_> {
                value.take_object::<Self>()
            }
        }
    }
}
