// -----------------------------------------------------------------------------
// Modules

mod property_host;
mod trait_reflect;
mod trait_typed;

// -----------------------------------------------------------------------------
// Internal API

use proc_macro2::TokenStream;
use quote::quote;

use crate::derive_data::ReflectHost;

use property_host::impl_property_host;
use trait_reflect::{impl_from_value, impl_trait_reflect};
use trait_typed::impl_trait_typed;

/// Generates every impl of `#[derive(Reflect)]`.
pub(crate) fn impl_reflect_host(host: &ReflectHost) -> TokenStream {
    let typed = impl_trait_typed(host);
    let reflect = impl_trait_reflect(host);
    let from_value = impl_from_value(host);
    let property_host = impl_property_host(host);

    quote! {
        #typed
        #reflect
        #from_value
        #property_host
    }
}
