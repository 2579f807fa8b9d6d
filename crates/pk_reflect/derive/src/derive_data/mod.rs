//! Parsed form of a `#[derive(Reflect)]` input.

// -----------------------------------------------------------------------------
// Modules

mod field_attributes;
mod reflect_host;
mod type_attributes;

// -----------------------------------------------------------------------------
// Internal API

pub(crate) use field_attributes::{FieldAttributes, Marker};
pub(crate) use reflect_host::{ReflectField, ReflectHost};
pub(crate) use type_attributes::TypeAttributes;
