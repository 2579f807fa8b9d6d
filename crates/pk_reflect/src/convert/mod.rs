//! Conversion of raw values to declared property types.
//!
//! A [`ConversionRegistry`] maps target types to [`Converter`]s by
//! `TypeId`. Lookup tries the exact target first, then walks its
//! [lineage](crate::info::TypeInfo::lineage) nearest first, so a
//! converter registered for [`Number`](crate::info::Number) serves every
//! numeric type without one of its own.
//!
//! Targets with no registered converter fall back to the built-in
//! behaviour: identity types are built from ids, enumerated types are
//! resolved by code, scalars go through the converters in [`builtin`],
//! and sequences are converted element-wise. Anything else is passed
//! through unchanged.

// -----------------------------------------------------------------------------
// Modules

mod converter;
mod dispatch;
mod error;
mod registry;

pub mod builtin;

// -----------------------------------------------------------------------------
// Exports

pub use converter::{Converter, DefaultPolicy, is_absent};
pub(crate) use dispatch::convert_unregistered;
pub use error::ConversionError;
pub use registry::{ConversionRegistry, ConversionRegistryArc};
