use core::any::{Any, TypeId};
use core::fmt;

use crate::info::TypeKind;
use crate::type_traits::{TypeTrait, TypeTraitTable};

// -----------------------------------------------------------------------------
// Typed

/// A static accessor to compile-time type information.
///
/// Implementations are generated by `#[derive(Reflect)]`, by
/// [`impl_reflect_enumerated!`](crate::impl_reflect_enumerated) and by the
/// built-in scalar and container impls. Manual implementations should
/// cache the result in a [`NonGenericTypeInfoCell`] or
/// [`GenericTypeInfoCell`] so the same `&'static TypeInfo` is returned
/// on every call.
///
/// # Examples
///
/// ```
/// use pk_reflect::info::{ScalarKind, TypeKind, Typed};
///
/// let info = i32::type_info();
/// assert_eq!(info.name(), "i32");
/// assert_eq!(info.kind(), TypeKind::Scalar(ScalarKind::I32));
/// ```
///
/// [`NonGenericTypeInfoCell`]: crate::info::NonGenericTypeInfoCell
/// [`GenericTypeInfoCell`]: crate::info::GenericTypeInfoCell
pub trait Typed: 'static {
    /// Returns the compile-time info for the underlying type.
    fn type_info() -> &'static TypeInfo;
}

// -----------------------------------------------------------------------------
// TypeInfo

/// Static description of a reflected type.
///
/// Two `TypeInfo`s are equal when they describe the same [`TypeId`].
pub struct TypeInfo {
    id: TypeId,
    name: &'static str,
    path: &'static str,
    kind: TypeKind,
    supertypes: Vec<&'static TypeInfo>,
    capabilities: Vec<&'static TypeInfo>,
    traits: TypeTraitTable,
}

impl TypeInfo {
    /// Starts building the info of `T`.
    ///
    /// `name` is the short display name; the full path is taken from
    /// [`core::any::type_name`].
    pub fn builder<T: Any + ?Sized>(name: &'static str, kind: TypeKind) -> TypeInfoBuilder {
        TypeInfoBuilder {
            info: TypeInfo {
                id: TypeId::of::<T>(),
                name,
                path: core::any::type_name::<T>(),
                kind,
                supertypes: Vec::new(),
                capabilities: Vec::new(),
                traits: TypeTraitTable::new(),
            },
        }
    }

    #[inline]
    pub fn id(&self) -> TypeId {
        self.id
    }

    /// Returns the short name, e.g. `Customer` or `Vec<i32>`.
    #[inline]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns the full type path, e.g. `my_crate::model::Customer`.
    #[inline]
    pub fn path(&self) -> &'static str {
        self.path
    }

    #[inline]
    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Direct supertypes in declaration order.
    #[inline]
    pub fn supertypes(&self) -> &[&'static TypeInfo] {
        &self.supertypes
    }

    /// Direct capabilities in declaration order.
    #[inline]
    pub fn capabilities(&self) -> &[&'static TypeInfo] {
        &self.capabilities
    }

    /// Returns `true` if this info describes `T`.
    #[inline]
    pub fn is<T: Any + ?Sized>(&self) -> bool {
        self.id == TypeId::of::<T>()
    }

    /// Returns the type trait `T` registered for this type, if any.
    #[inline]
    pub fn get_trait<T: TypeTrait>(&self) -> Option<&T> {
        self.traits.get::<T>()
    }

    #[inline]
    pub fn has_trait<T: TypeTrait>(&self) -> bool {
        self.traits.contains::<T>()
    }
}

impl PartialEq for TypeInfo {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeInfo")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("supertypes", &Names(&self.supertypes))
            .field("capabilities", &Names(&self.capabilities))
            .field("traits", &self.traits)
            .finish()
    }
}

struct Names<'a>(&'a [&'static TypeInfo]);

impl fmt::Debug for Names<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter().map(|info| info.name)).finish()
    }
}

// -----------------------------------------------------------------------------
// TypeInfoBuilder

/// Builder returned by [`TypeInfo::builder`].
#[must_use]
pub struct TypeInfoBuilder {
    info: TypeInfo,
}

impl TypeInfoBuilder {
    /// Appends a direct supertype.
    pub fn supertype(mut self, info: &'static TypeInfo) -> Self {
        if !self.info.supertypes.contains(&info) {
            self.info.supertypes.push(info);
        }
        self
    }

    /// Appends a direct capability.
    pub fn capability(mut self, info: &'static TypeInfo) -> Self {
        if !self.info.capabilities.contains(&info) {
            self.info.capabilities.push(info);
        }
        self
    }

    /// Attaches a type trait, replacing any previous one of the same type.
    pub fn with_trait<T: TypeTrait>(mut self, data: T) -> Self {
        self.info.traits.insert(data);
        self
    }

    #[inline]
    pub fn build(self) -> TypeInfo {
        self.info
    }
}
