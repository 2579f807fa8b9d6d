//! The dynamic value model.
//!
//! Every read through the engine yields a [`Value`] and every write takes
//! one. Scalars map to dedicated variants, sequences to [`Value::List`]
//! and anything else (hosts, enumerated constants, entities) is carried
//! as an [`ObjectValue`] wrapping the boxed reflected value.

// -----------------------------------------------------------------------------
// Modules

mod from_value;
mod object;
mod ser;
mod value;

// -----------------------------------------------------------------------------
// Exports

pub use from_value::{ApplyError, FromValue};
pub use object::ObjectValue;
pub use value::Value;
