use syn::meta::ParseNestedMeta;
use syn::{Attribute, Expr, LitStr, Path};

use crate::{CONSTRAINT_ATTRIBUTE_NAME, PROPERTY_ATTRIBUTE_NAME};

/// A `#[constraint(...)]` entry.
pub(crate) enum Marker {
    Required,
    BoundedNumber { min: Option<Expr>, max: Option<Expr> },
    BoundedLength { min: Option<Expr>, max: Option<Expr> },
    BoundedDate { after: Option<LitStr>, before: Option<LitStr> },
    Default(LitStr),
}

/// Attributes from `#[property(...)]` and `#[constraint(...)]` on a field.
#[derive(Default)]
pub(crate) struct FieldAttributes {
    pub skip: bool,
    pub rename: Option<LitStr>,
    pub read_only: bool,
    pub write_only: bool,
    pub setter: Option<Path>,
    pub markers: Vec<Marker>,
}

impl FieldAttributes {
    pub(crate) fn parse_attrs(attrs: &[Attribute]) -> syn::Result<Self> {
        let mut out = Self::default();

        for attr in attrs {
            if attr.path().is_ident(PROPERTY_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| out.parse_property(meta))?;
            } else if attr.path().is_ident(CONSTRAINT_ATTRIBUTE_NAME) {
                attr.parse_nested_meta(|meta| {
                    let marker = parse_marker(&meta)?;
                    out.markers.push(marker);
                    Ok(())
                })?;
            }
        }

        Ok(out)
    }

    fn parse_property(&mut self, meta: ParseNestedMeta) -> syn::Result<()> {
        if meta.path.is_ident("skip") {
            self.skip = true;
        } else if meta.path.is_ident("rename") {
            self.rename = Some(meta.value()?.parse()?);
        } else if meta.path.is_ident("read_only") {
            if self.write_only || self.setter.is_some() {
                return Err(meta.error("`read_only` conflicts with `write_only` and `setter`"));
            }
            self.read_only = true;
        } else if meta.path.is_ident("write_only") {
            if self.read_only {
                return Err(meta.error("`write_only` conflicts with `read_only`"));
            }
            self.write_only = true;
        } else if meta.path.is_ident("setter") {
            if self.read_only {
                return Err(meta.error("a `read_only` property cannot have a setter"));
            }
            self.setter = Some(meta.value()?.parse()?);
        } else {
            return Err(meta.error("unsupported `property` attribute"));
        }
        Ok(())
    }
}

fn parse_marker(meta: &ParseNestedMeta) -> syn::Result<Marker> {
    if meta.path.is_ident("required") {
        Ok(Marker::Required)
    } else if meta.path.is_ident("bounded_number") {
        let (min, max) = parse_bounds(meta)?;
        Ok(Marker::BoundedNumber { min, max })
    } else if meta.path.is_ident("bounded_length") {
        let (min, max) = parse_bounds(meta)?;
        Ok(Marker::BoundedLength { min, max })
    } else if meta.path.is_ident("bounded_date") {
        let mut after = None;
        let mut before = None;
        meta.parse_nested_meta(|inner| {
            let slot = if inner.path.is_ident("after") {
                &mut after
            } else if inner.path.is_ident("before") {
                &mut before
            } else {
                return Err(inner.error("expected `after` or `before`"));
            };
            let date: LitStr = inner.value()?.parse()?;
            if !is_iso_date(&date.value()) {
                return Err(syn::Error::new(date.span(), "expected a `YYYY-MM-DD` date"));
            }
            *slot = Some(date);
            Ok(())
        })?;
        Ok(Marker::BoundedDate { after, before })
    } else if meta.path.is_ident("default") {
        Ok(Marker::Default(meta.value()?.parse()?))
    } else {
        Err(meta.error("unsupported `constraint` marker"))
    }
}

fn parse_bounds(meta: &ParseNestedMeta) -> syn::Result<(Option<Expr>, Option<Expr>)> {
    let mut min = None;
    let mut max = None;
    meta.parse_nested_meta(|inner| {
        if inner.path.is_ident("min") {
            min = Some(inner.value()?.parse()?);
        } else if inner.path.is_ident("max") {
            max = Some(inner.value()?.parse()?);
        } else {
            return Err(inner.error("expected `min` or `max`"));
        }
        Ok(())
    })?;
    Ok((min, max))
}

fn is_iso_date(text: &str) -> bool {
    let bytes = text.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}
