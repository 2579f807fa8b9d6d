/// Implements [`Typed`], [`Reflect`] and [`FromValue`] for a type that
/// implements [`Enumerated`].
///
/// The type must also be `Clone + PartialEq + Debug`. Its info has kind
/// [`TypeKind::Enumerated`], the [`EnumeratedValue`] capability and a
/// [`TypeTraitEnumerated`], which the converters use to resolve codes.
///
/// An optional second argument overrides the display name.
///
/// # Examples
///
/// ```
/// use pk_reflect::info::Typed;
/// use pk_reflect::type_traits::Enumerated;
///
/// #[derive(Clone, Copy, Debug, PartialEq)]
/// enum Tier {
///     Free,
///     Paid,
/// }
///
/// impl Enumerated for Tier {
///     fn variants() -> &'static [Self] {
///         &[Tier::Free, Tier::Paid]
///     }
///
///     fn code(&self) -> &str {
///         match self {
///             Tier::Free => "F",
///             Tier::Paid => "P",
///         }
///     }
/// }
///
/// pk_reflect::impl_reflect_enumerated!(Tier, "AccountTier");
///
/// assert_eq!(Tier::type_info().name(), "AccountTier");
/// ```
///
/// [`Typed`]: crate::info::Typed
/// [`Reflect`]: crate::Reflect
/// [`FromValue`]: crate::value::FromValue
/// [`Enumerated`]: crate::type_traits::Enumerated
/// [`TypeKind::Enumerated`]: crate::info::TypeKind::Enumerated
/// [`EnumeratedValue`]: crate::info::EnumeratedValue
/// [`TypeTraitEnumerated`]: crate::type_traits::TypeTraitEnumerated
#[macro_export]
macro_rules! impl_reflect_enumerated {
    ($ty:ty) => {
        $crate::impl_reflect_enumerated!($ty, ::core::stringify!($ty));
    };
    ($ty:ty, $name:expr) => {
        impl $crate::info::Typed for $ty {
            fn type_info() -> &'static $crate::info::TypeInfo {
                static CELL: $crate::info::NonGenericTypeInfoCell =
                    $crate::info::NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    $crate::info::TypeInfo::builder::<$ty>($name, $crate::info::TypeKind::Enumerated)
                        .capability(<$crate::info::EnumeratedValue as $crate::info::Typed>::type_info())
                        .with_trait(<$crate::type_traits::TypeTraitEnumerated as $crate::type_traits::FromType<$ty>>::from_type())
                        .build()
                })
            }
        }

        impl $crate::Reflect for $ty {
            #[inline]
            fn reflect_type_info(&self) -> &'static $crate::info::TypeInfo {
                <Self as $crate::info::Typed>::type_info()
            }

            #[inline]
            fn reflect_ref(&self) -> $crate::ReflectRef<'_> {
                $crate::ReflectRef::Leaf(self)
            }

            #[inline]
            fn reflect_mut(&mut self) -> $crate::ReflectMut<'_> {
                $crate::ReflectMut::Leaf(self)
            }

            fn to_value(&self) -> $crate::value::Value {
                $crate::value::Value::object(::core::clone::Clone::clone(self))
            }

            fn apply(
                &mut self,
                value: $crate::value::Value,
            ) -> ::core::result::Result<(), $crate::value::ApplyError> {
                *self = <Self as $crate::value::FromValue>::from_value(value)?;
                ::core::result::Result::Ok(())
            }

            fn reflect_clone(&self) -> ::std::boxed::Box<dyn $crate::Reflect> {
                ::std::boxed::Box::new(::core::clone::Clone::clone(self))
            }

            fn reflect_partial_eq(&self, other: &dyn $crate::Reflect) -> ::core::option::Option<bool> {
                ::core::option::Option::Some(
                    other.downcast_ref::<Self>().is_some_and(|other| other == self),
                )
            }

            fn reflect_debug(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                ::core::fmt::Debug::fmt(self, f)
            }
        }

        impl $crate::value::FromValue for $ty {
            fn from_value(
                value: $crate::value::Value,
            ) -> ::core::result::Result<Self, $crate::value::ApplyError> {
                value.take_object::<Self>()
            }
        }
    };
}
