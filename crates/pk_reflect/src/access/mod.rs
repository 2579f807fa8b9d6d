//! Single-segment property access.
//!
//! [`PropertyAccessResolver`] reads and writes one path segment at a
//! time against a reflected target; the engine chains these calls to
//! walk a full path.

// -----------------------------------------------------------------------------
// Modules

mod error;
mod resolver;

// -----------------------------------------------------------------------------
// Exports

pub use error::{Cause, PropertyError};
pub use resolver::{CLASS_PROPERTY, PropertyAccessResolver};
