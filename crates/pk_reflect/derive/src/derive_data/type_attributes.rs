use syn::{Attribute, LitStr, Path};

use crate::REFLECT_ATTRIBUTE_NAME;

/// Casing applied to field names by `#[reflect(rename_all = "...")]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum RenameRule {
    #[default]
    Verbatim,
    CamelCase,
    PascalCase,
}

impl RenameRule {
    fn parse(lit: &LitStr) -> syn::Result<Self> {
        match lit.value().as_str() {
            "camelCase" => Ok(Self::CamelCase),
            "PascalCase" => Ok(Self::PascalCase),
            "snake_case" => Ok(Self::Verbatim),
            _ => Err(syn::Error::new(
                lit.span(),
                "expected one of `camelCase`, `PascalCase` or `snake_case`",
            )),
        }
    }

    pub(crate) fn apply(self, field: &str) -> String {
        if self == Self::Verbatim {
            return field.to_owned();
        }

        let mut out = String::with_capacity(field.len());
        let mut upper = self == Self::PascalCase;
        for ch in field.chars() {
            if ch == '_' {
                upper = !out.is_empty();
            } else if upper {
                out.extend(ch.to_uppercase());
                upper = false;
            } else {
                out.push(ch);
            }
        }
        out
    }
}

/// Attributes from `#[reflect(...)]` on the type.
#[derive(Default)]
pub(crate) struct TypeAttributes {
    pub rename_all: RenameRule,
    pub type_name: Option<LitStr>,
    pub supertypes: Vec<Path>,
    pub capabilities: Vec<Path>,
    pub identity: bool,
    pub debug: bool,
    pub partial_eq: bool,
}

impl TypeAttributes {
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();

        for attr in attrs {
            if !attr.path().is_ident(REFLECT_ATTRIBUTE_NAME) {
                continue;
            }
            attr.parse_nested_meta(|meta| {
                if meta.path.is_ident("rename_all") {
                    out.rename_all = RenameRule::parse(&meta.value()?.parse()?)?;
                } else if meta.path.is_ident("type_name") {
                    out.type_name = Some(meta.value()?.parse()?);
                } else if meta.path.is_ident("supertype") {
                    out.supertypes.push(meta.value()?.parse()?);
                } else if meta.path.is_ident("capability") {
                    out.capabilities.push(meta.value()?.parse()?);
                } else if meta.path.is_ident("identity") {
                    out.identity = true;
                } else if meta.path.is_ident("debug") {
                    out.debug = true;
                } else if meta.path.is_ident("partial_eq") {
                    out.partial_eq = true;
                } else {
                    return Err(meta.error("unsupported `reflect` attribute"));
                }
                Ok(())
            })?;
        }

        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::RenameRule;

    #[test]
    fn rename_rules() {
        assert_eq!(RenameRule::CamelCase.apply("value_object_list"), "valueObjectList");
        assert_eq!(RenameRule::CamelCase.apply("count"), "count");
        assert_eq!(RenameRule::CamelCase.apply("_private_id"), "privateId");
        assert_eq!(RenameRule::PascalCase.apply("created_by"), "CreatedBy");
        assert_eq!(RenameRule::Verbatim.apply("created_by"), "created_by");
    }
}
