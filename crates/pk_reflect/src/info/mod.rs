//! Static type information.
//!
//! Every reflected type exposes one leaked, process-wide [`TypeInfo`]
//! through [`Typed`]. A `TypeInfo` names the type, classifies it with a
//! [`TypeKind`], lists its direct supertypes and capabilities in
//! declaration order, and carries a table of [`TypeTrait`] data used by
//! the converters and renderers.
//!
//! [`TypeTrait`]: crate::type_traits::TypeTrait

// -----------------------------------------------------------------------------
// Modules

mod cell;
mod kind;
mod lineage;
mod markers;
mod type_info;

// -----------------------------------------------------------------------------
// Exports

pub use cell::{GenericTypeInfoCell, NonGenericTypeInfoCell};
pub(crate) use cell::leak_name;
pub use kind::{ScalarKind, TypeKind};
pub use lineage::Relation;
pub use markers::{EnumeratedValue, Identity, Number};
pub use type_info::{TypeInfo, TypeInfoBuilder, Typed};
