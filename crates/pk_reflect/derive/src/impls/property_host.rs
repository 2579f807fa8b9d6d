use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};

use crate::derive_data::{Marker, ReflectField, ReflectHost};

/// Generate implementation code for `PropertyHost`.
///
/// Accessors are plain `fn` items nested in `descriptors`, next to the
/// `static` descriptor table that points at them.
pub(crate) fn impl_property_host(host: &ReflectHost) -> TokenStream {
    let pk_reflect_path = host.pk_reflect_path();
    let property_host_ = crate::path::property_host_(pk_reflect_path);

    let ident = host.ident;
    let len = host.fields.len();

    let accessors = host.fields.iter().map(|field| field_accessors(host, field));
    let descriptors = host.fields.iter().map(|field| field_descriptor(host, field));

    quote! {
        impl #property_host_ for #ident {
            fn descriptors(&self) -> &'static [#pk_reflect_path::PropertyDescriptor] {
                #( #accessors )*

                static DESCRIPTORS: [#pk_reflect_path::PropertyDescriptor; #len] = [
                    #( #descriptors ),*
                ];
                &DESCRIPTORS
            }
        }
    }
}

fn read_fn(field: &ReflectField) -> syn::Ident {
    format_ident!("__pk_read_{}", field.ident)
}

fn read_mut_fn(field: &ReflectField) -> syn::Ident {
    format_ident!("__pk_read_mut_{}", field.ident)
}

fn write_fn(field: &ReflectField) -> syn::Ident {
    format_ident!("__pk_write_{}", field.ident)
}

fn field_accessors(host: &ReflectHost, field: &ReflectField) -> TokenStream {
    let pk_reflect_path = host.pk_reflect_path();
    let reflect_ = crate::path::reflect_(pk_reflect_path);
    let property_host_ = crate::path::property_host_(pk_reflect_path);
    let invocation_error_ = crate::path::invocation_error_(pk_reflect_path);
    let value_ = crate::path::value_(pk_reflect_path);
    let from_value_ = crate::path::from_value_(pk_reflect_path);
    let result_ = crate::path::result_();

    let ident = host.ident;
    let member = field.ident;
    let ty = field.ty;

    // Nested `fn` items cannot name `Self`, so the receiver is downcast
    // to the concrete type.
    let mut out = TokenStream::new();

    if field.is_readable() {
        let read = read_fn(field);
        let read_mut = read_mut_fn(field);
        out.extend(quote! {
            #[allow(non_snake_case)]
            fn #read(
                host: &dyn #property_host_,
            ) -> #result_<#pk_reflect_path::Slot<'_>, #invocation_error_> {
                let this = host
                    .downcast_ref::<#ident>()
                    .ok_or_else(#invocation_error_::receiver::<#ident>)?;
                #result_::Ok(#pk_reflect_path::Slot::Borrowed(&this.#member))
            }

            #[allow(non_snake_case)]
            fn #read_mut(
                host: &mut dyn #property_host_,
            ) -> #result_<&mut dyn #reflect_, #invocation_error_> {
                let this = host
                    .downcast_mut::<#ident>()
                    .ok_or_else(#invocation_error_::receiver::<#ident>)?;
                #result_::Ok(&mut this.#member)
            }
        });
    }

    if field.is_writable() {
        let write = write_fn(field);
        let assign = match &field.attrs.setter {
            Some(setter) => quote! {
                #setter(this, value).map_err(#invocation_error_::raised)
            },
            None => quote! {
                this.#member = value;
                #result_::Ok(())
            },
        };
        out.extend(quote! {
            #[allow(non_snake_case)]
            fn #write(
                host: &mut dyn #property_host_,
                value: #value_,
            ) -> #result_<(), #invocation_error_> {
                let this = host
                    .downcast_mut::<#ident>()
                    .ok_or_else(#invocation_error_::receiver::<#ident>)?;
                let value = <#ty as #from_value_>::from_value(value)?;
                #assign
            }
        });
    }

    out
}

fn field_descriptor(host: &ReflectHost, field: &ReflectField) -> TokenStream {
    let pk_reflect_path = host.pk_reflect_path();
    let typed_ = crate::path::typed_(pk_reflect_path);

    let name = &field.name;
    let ty = field.ty;

    let reader = if field.is_readable() {
        let read = read_fn(field);
        let read_mut = read_mut_fn(field);
        quote! {
            .with_reader(#pk_reflect_path::Reader::new(#read).with_mut(#read_mut))
        }
    } else {
        TokenStream::new()
    };

    let writer = if field.is_writable() {
        let write = write_fn(field);
        quote! { .with_writer(#write) }
    } else {
        TokenStream::new()
    };

    let markers = if field.attrs.markers.is_empty() {
        TokenStream::new()
    } else {
        let markers = field.attrs.markers.iter().map(|marker| marker_tokens(host, marker));
        quote! { .with_markers(&[ #( #markers ),* ]) }
    };

    quote! {
        #pk_reflect_path::PropertyDescriptor::new(#name, <#ty as #typed_>::type_info)
            #reader
            #writer
            #markers
    }
}

fn optional<T: ToTokens>(value: Option<&T>) -> TokenStream {
    let option_ = crate::path::option_();
    match value {
        Some(value) => quote! { #option_::Some(#value) },
        None => quote! { #option_::None },
    }
}

fn marker_tokens(host: &ReflectHost, marker: &Marker) -> TokenStream {
    let constraint_marker_ = crate::path::constraint_marker_(host.pk_reflect_path());

    match marker {
        Marker::Required => quote! { #constraint_marker_::Required },
        Marker::BoundedNumber { min, max } => {
            let (min, max) = (optional(min.as_ref()), optional(max.as_ref()));
            quote! { #constraint_marker_::BoundedNumber { min: #min, max: #max } }
        }
        Marker::BoundedLength { min, max } => {
            let (min, max) = (optional(min.as_ref()), optional(max.as_ref()));
            quote! { #constraint_marker_::BoundedLength { min: #min, max: #max } }
        }
        Marker::BoundedDate { after, before } => {
            let (after, before) = (optional(after.as_ref()), optional(before.as_ref()));
            quote! { #constraint_marker_::BoundedDate { after: #after, before: #before } }
        }
        Marker::Default(value) => quote! { #constraint_marker_::Default(#value) },
    }
}
