//! Per-type capability data.
//!
//! A [`TypeTrait`] is a small table of function pointers attached to a
//! [`TypeInfo`](crate::info::TypeInfo). The converters look them up to
//! build values of a type they know nothing else about.

// -----------------------------------------------------------------------------
// Modules

mod enumerated;
mod from_type;
mod identity;
mod table;

// -----------------------------------------------------------------------------
// Exports

pub use enumerated::{Enumerated, TypeTraitEnumerated};
pub use from_type::FromType;
pub use identity::{Identifiable, TypeTraitFromId};
pub use table::{TypeTrait, TypeTraitTable};
