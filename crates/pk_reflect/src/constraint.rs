//! Declarative constraint markers and the scanner that finds them.
//!
//! Markers are attached to writable properties with
//! `#[constraint(..)]` and stored in the property's
//! [`PropertyDescriptor`](crate::PropertyDescriptor). They are metadata
//! only; nothing in this crate enforces them.

use alloc::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::{Reflect, ReflectRef};

// -----------------------------------------------------------------------------
// ConstraintMarker

/// A constraint declared on a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstraintMarker {
    Required,
    BoundedNumber { min: Option<i64>, max: Option<i64> },
    BoundedLength { min: Option<usize>, max: Option<usize> },
    /// Bounds as ISO dates, `YYYY-MM-DD`.
    BoundedDate {
        after: Option<&'static str>,
        before: Option<&'static str>,
    },
    /// The textual default value.
    Default(&'static str),
}

impl ConstraintMarker {
    #[inline]
    pub const fn kind(&self) -> MarkerKind {
        match self {
            Self::Required => MarkerKind::Required,
            Self::BoundedNumber { .. } => MarkerKind::BoundedNumber,
            Self::BoundedLength { .. } => MarkerKind::BoundedLength,
            Self::BoundedDate { .. } => MarkerKind::BoundedDate,
            Self::Default(_) => MarkerKind::Default,
        }
    }
}

/// The kind of a [`ConstraintMarker`], ignoring its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum MarkerKind {
    Required,
    BoundedNumber,
    BoundedLength,
    BoundedDate,
    Default,
}

// -----------------------------------------------------------------------------
// Scanning

/// Returns the names of the writable properties of `target` carrying a
/// marker of `kind`.
///
/// Targets that are not property hosts yield an empty set.
///
/// # Examples
///
/// ```
/// use pk_reflect::constraint::{MarkerKind, find_marked};
/// use pk_reflect::derive::Reflect;
///
/// #[derive(Reflect, Clone, Default)]
/// struct Signup {
///     #[constraint(required)]
///     email: String,
///     #[constraint(required, bounded_length(min = 8))]
///     password: String,
///     nickname: Option<String>,
/// }
///
/// let required = find_marked(&Signup::default(), MarkerKind::Required);
/// assert_eq!(required.into_iter().collect::<Vec<_>>(), ["email", "password"]);
///
/// assert!(find_marked(&42_i32, MarkerKind::Required).is_empty());
/// ```
pub fn find_marked(target: &dyn Reflect, kind: MarkerKind) -> BTreeSet<&'static str> {
    let ReflectRef::Host(host) = target.reflect_ref() else {
        return BTreeSet::new();
    };
    host.descriptors()
        .iter()
        .filter(|descriptor| descriptor.is_writable() && descriptor.has_marker(kind))
        .map(|descriptor| descriptor.name())
        .collect()
}
