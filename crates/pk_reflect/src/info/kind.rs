use core::fmt;

use crate::info::TypeInfo;

/// Structural classification of a reflected type.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TypeKind {
    /// A leaf value handled by the built-in converters.
    Scalar(ScalarKind),
    /// An indexable sequence of `element` values.
    Sequence { element: &'static TypeInfo },
    /// A value exposing named properties.
    Host,
    /// A closed set of named constants.
    Enumerated,
    /// A marker that only exists to be a supertype or capability.
    Abstract,
}

impl TypeKind {
    /// Returns the scalar kind, if any.
    #[inline]
    pub const fn as_scalar(&self) -> Option<ScalarKind> {
        match self {
            Self::Scalar(kind) => Some(*kind),
            _ => None,
        }
    }
}

/// The scalar families understood by the built-in converters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarKind {
    Bool,
    Char,
    I8,
    I16,
    I32,
    I64,
    U8,
    U16,
    U32,
    U64,
    F32,
    F64,
    String,
    DateTime,
    Date,
    Url,
    Path,
}

impl ScalarKind {
    /// Returns `true` for integer and floating point kinds.
    #[inline]
    pub const fn is_numeric(self) -> bool {
        self.is_integer() || self.is_float()
    }

    #[inline]
    pub const fn is_integer(self) -> bool {
        matches!(
            self,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::U8 | Self::U16 | Self::U32 | Self::U64
        )
    }

    #[inline]
    pub const fn is_float(self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }
}

impl fmt::Display for ScalarKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
