use crate::Reflect;
use crate::info::Typed;
use crate::type_traits::{FromType, TypeTrait};

/// A closed set of named constants.
///
/// Each variant is looked up by its `code` first, then by its optional
/// `external_code`, then by its optional `numeric_id`. Implement this
/// and invoke [`impl_reflect_enumerated!`](crate::impl_reflect_enumerated)
/// to make the type reflectable.
///
/// # Examples
///
/// ```
/// use pk_reflect::type_traits::Enumerated;
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// enum Plan {
///     Basic,
///     Premium,
/// }
///
/// impl Enumerated for Plan {
///     fn variants() -> &'static [Self] {
///         &[Plan::Basic, Plan::Premium]
///     }
///
///     fn code(&self) -> &str {
///         match self {
///             Plan::Basic => "BASIC",
///             Plan::Premium => "PREMIUM",
///         }
///     }
/// }
///
/// pk_reflect::impl_reflect_enumerated!(Plan);
/// ```
pub trait Enumerated: Reflect + Typed + Clone {
    fn variants() -> &'static [Self];

    fn code(&self) -> &str;

    /// An alternative code used by external systems.
    fn external_code(&self) -> Option<&str> {
        None
    }

    fn numeric_id(&self) -> Option<i64> {
        None
    }

    /// Human-readable label; defaults to the code.
    fn label(&self) -> &str {
        self.code()
    }
}

/// Looks up constants of an [`Enumerated`] type.
#[derive(Clone, Copy)]
pub struct TypeTraitEnumerated {
    by_code: fn(&str) -> Option<Box<dyn Reflect>>,
    by_external_code: fn(&str) -> Option<Box<dyn Reflect>>,
    by_numeric_id: fn(i64) -> Option<Box<dyn Reflect>>,
    code_of: fn(&dyn Reflect) -> Option<String>,
    label_of: fn(&dyn Reflect) -> Option<String>,
}

impl TypeTraitEnumerated {
    #[inline]
    pub fn by_code(&self, code: &str) -> Option<Box<dyn Reflect>> {
        (self.by_code)(code)
    }

    #[inline]
    pub fn by_external_code(&self, code: &str) -> Option<Box<dyn Reflect>> {
        (self.by_external_code)(code)
    }

    #[inline]
    pub fn by_numeric_id(&self, id: i64) -> Option<Box<dyn Reflect>> {
        (self.by_numeric_id)(id)
    }

    /// Resolves `key` as a code, an external code, then a numeric id.
    pub fn lookup(&self, key: &str) -> Option<Box<dyn Reflect>> {
        self.by_code(key)
            .or_else(|| self.by_external_code(key))
            .or_else(|| key.parse::<i64>().ok().and_then(|id| self.by_numeric_id(id)))
    }

    #[inline]
    pub fn code_of(&self, value: &dyn Reflect) -> Option<String> {
        (self.code_of)(value)
    }

    #[inline]
    pub fn label_of(&self, value: &dyn Reflect) -> Option<String> {
        (self.label_of)(value)
    }
}

impl TypeTrait for TypeTraitEnumerated {}

fn boxed<T: Reflect + Clone>(value: &T) -> Box<dyn Reflect> {
    Box::new(value.clone())
}

impl<T: Enumerated> FromType<T> for TypeTraitEnumerated {
    fn from_type() -> Self {
        Self {
            by_code: |code| T::variants().iter().find(|v| v.code() == code).map(boxed),
            by_external_code: |code| {
                T::variants()
                    .iter()
                    .find(|v| v.external_code() == Some(code))
                    .map(boxed)
            },
            by_numeric_id: |id| {
                T::variants()
                    .iter()
                    .find(|v| v.numeric_id() == Some(id))
                    .map(boxed)
            },
            code_of: |value| value.downcast_ref::<T>().map(|v| v.code().to_owned()),
            label_of: |value| value.downcast_ref::<T>().map(|v| v.label().to_owned()),
        }
    }
}
