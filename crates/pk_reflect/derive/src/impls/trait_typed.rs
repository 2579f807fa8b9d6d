use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectHost;

/// Generate implementation code for `Typed`.
///
/// The info is built once into a `NonGenericTypeInfoCell`. Supertypes
/// and capabilities keep their declaration order; `identity` appends the
/// `Identity` capability last.
pub(crate) fn impl_trait_typed(host: &ReflectHost) -> TokenStream {
    let pk_reflect_path = host.pk_reflect_path();
    let trait_typed_ = crate::path::typed_(pk_reflect_path);
    let type_info_ = crate::path::type_info_(pk_reflect_path);

    let ident = host.ident;
    let name = host.type_name();
    let supertypes = &host.attrs.supertypes;
    let capabilities = &host.attrs.capabilities;

    let identity_tokens = if host.attrs.identity {
        quote! {
            .capability(<#pk_reflect_path::info::Identity as #trait_typed_>::type_info())
            .with_trait(<#pk_reflect_path::type_traits::TypeTraitFromId as #pk_reflect_path::type_traits::FromType<Self>>::from_type())
        }
    } else {
        TokenStream::new()
    };

    quote! {
        impl #trait_typed_ for #ident {
            fn type_info() -> &'static #type_info_ {
                static CELL: #pk_reflect_path::info::NonGenericTypeInfoCell =
                    #pk_reflect_path::info::NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    #type_info_::builder::<Self>(#name, #pk_reflect_path::info::TypeKind::Host)
                        #( .supertype(<#supertypes as #trait_typed_>::type_info()) )*
                        #( .capability(<#capabilities as #trait_typed_>::type_info()) )*
                        #identity_tokens
                        .build()
                })
            }
        }
    }
}
