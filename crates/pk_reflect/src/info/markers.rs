use crate::info::{NonGenericTypeInfoCell, TypeInfo, TypeKind, Typed};

macro_rules! impl_abstract {
    ($(#[$meta:meta])* $ty:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub struct $ty;

        impl Typed for $ty {
            fn type_info() -> &'static TypeInfo {
                static CELL: NonGenericTypeInfoCell = NonGenericTypeInfoCell::new();
                CELL.get_or_init(|| {
                    TypeInfo::builder::<$ty>(stringify!($ty), TypeKind::Abstract).build()
                })
            }
        }
    };
}

impl_abstract!(
    /// Common supertype of every numeric scalar.
    ///
    /// A converter registered for `Number` serves `i8` through `f64`
    /// unless a more specific one is registered.
    Number
);

impl_abstract!(
    /// Capability of entity types constructible from a numeric id.
    Identity
);

impl_abstract!(
    /// Capability shared by every enumerated type.
    EnumeratedValue
);
