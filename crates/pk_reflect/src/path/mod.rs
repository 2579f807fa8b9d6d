//! The property path grammar.
//!
//! A path is one or more segments joined by `.`. A segment is either a
//! plain identifier (`name`) or an identifier followed by a bracketed
//! digit index (`items[3]`). Anything that does not match the nested
//! grammar is treated as a single raw property name.

// -----------------------------------------------------------------------------
// Modules

mod parser;
mod segment;

// -----------------------------------------------------------------------------
// Exports

pub use parser::{extract_index, is_indexed, is_nested, split};
pub use segment::{PathSegment, PropertyPath};
