use crate::info::Typed;

/// Builds a [`TypeTrait`] for the type `T`.
///
/// Used by `#[derive(Reflect)]` and
/// [`impl_reflect_enumerated!`](crate::impl_reflect_enumerated) to fill
/// the trait table of the generated [`TypeInfo`].
///
/// # Example
///
/// ```
/// use pk_reflect::info::{TypeInfo, TypeKind};
/// use pk_reflect::type_traits::{FromType, TypeTraitEnumerated};
/// # use pk_reflect::type_traits::Enumerated;
/// # #[derive(Clone, Copy, Debug, PartialEq)]
/// # enum Level { Low }
/// # impl Enumerated for Level {
/// #     fn variants() -> &'static [Self] { &[Level::Low] }
/// #     fn code(&self) -> &str { "LOW" }
/// # }
/// # pk_reflect::impl_reflect_enumerated!(Level);
///
/// let data: TypeTraitEnumerated = FromType::<Level>::from_type();
/// assert!(data.by_code("LOW").is_some());
/// ```
///
/// [`TypeTrait`]: crate::type_traits::TypeTrait
/// [`TypeInfo`]: crate::info::TypeInfo
pub trait FromType<T: Typed> {
    fn from_type() -> Self;
}
