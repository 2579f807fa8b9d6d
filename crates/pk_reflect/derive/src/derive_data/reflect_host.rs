use proc_macro2::Span;
use syn::{Data, DeriveInput, Fields, Ident, LitStr, Type};

use super::{FieldAttributes, TypeAttributes};

/// A reflected field that produces a descriptor.
pub(crate) struct ReflectField<'a> {
    pub ident: &'a Ident,
    pub ty: &'a Type,
    /// The property name after renaming.
    pub name: LitStr,
    pub attrs: FieldAttributes,
}

impl ReflectField<'_> {
    #[inline]
    pub(crate) fn is_readable(&self) -> bool {
        !self.attrs.write_only
    }

    #[inline]
    pub(crate) fn is_writable(&self) -> bool {
        !self.attrs.read_only
    }
}

/// A struct deriving `Reflect`.
pub(crate) struct ReflectHost<'a> {
    pub ident: &'a Ident,
    pub attrs: TypeAttributes,
    pub fields: Vec<ReflectField<'a>>,
    pk_reflect_path: syn::Path,
}

impl<'a> ReflectHost<'a> {
    pub(crate) fn from_input(ast: &'a DeriveInput) -> syn::Result<Self> {
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "`#[derive(Reflect)]` does not support generic types",
            ));
        }

        let named = match &ast.data {
            Data::Struct(data) => match &data.fields {
                Fields::Named(named) => named,
                _ => {
                    return Err(syn::Error::new_spanned(
                        &ast.ident,
                        "`#[derive(Reflect)]` requires a struct with named fields",
                    ));
                }
            },
            _ => {
                return Err(syn::Error::new_spanned(
                    &ast.ident,
                    "`#[derive(Reflect)]` only supports structs; use `impl_reflect_enumerated!` for enumerations",
                ));
            }
        };

        let attrs = TypeAttributes::parse_attrs(&ast.attrs)?;

        let mut fields: Vec<ReflectField<'a>> = Vec::with_capacity(named.named.len());
        for field in &named.named {
            let field_attrs = FieldAttributes::parse_attrs(&field.attrs)?;
            if field_attrs.skip {
                continue;
            }
            // Named fields always carry an ident.
            let Some(ident) = field.ident.as_ref() else {
                continue;
            };

            let name = match &field_attrs.rename {
                Some(rename) => rename.clone(),
                None => {
                    let raw = ident.to_string();
                    let raw = raw.strip_prefix("r#").unwrap_or(&raw);
                    LitStr::new(&attrs.rename_all.apply(raw), ident.span())
                }
            };
            if let Some(previous) = fields.iter().find(|f| f.name.value() == name.value()) {
                let mut err = syn::Error::new(name.span(), "duplicate property name");
                err.combine(syn::Error::new(previous.name.span(), "first declared here"));
                return Err(err);
            }

            fields.push(ReflectField {
                ident,
                ty: &field.ty,
                name,
                attrs: field_attrs,
            });
        }

        Ok(Self {
            ident: &ast.ident,
            attrs,
            fields,
            pk_reflect_path: crate::path::pk_reflect(),
        })
    }

    #[inline]
    pub(crate) fn pk_reflect_path(&self) -> &syn::Path {
        &self.pk_reflect_path
    }

    /// The short name recorded in `TypeInfo`.
    pub(crate) fn type_name(&self) -> LitStr {
        match &self.attrs.type_name {
            Some(name) => name.clone(),
            None => LitStr::new(&self.ident.to_string(), Span::call_site()),
        }
    }
}
