#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]

// -----------------------------------------------------------------------------
// Extern Self

// Derived code names items through `::pk_reflect`, which must also
// resolve inside this crate's own tests.
extern crate self as pk_reflect;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod impls;
mod reflection;

pub mod access;
pub mod constraint;
pub mod convert;
pub mod engine;
pub mod info;
pub mod path;
pub mod render;
pub mod type_traits;
pub mod value;

#[doc(hidden)]
pub mod __macro_exports;

#[cfg(test)]
mod fixtures;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use pk_reflect_derive as derive;
pub use reflection::{InvocationError, PropertyDescriptor, PropertyHost, Reader, Slot};
pub use reflection::{ReadFn, ReadMutFn, WriteFn};
pub use reflection::{Reflect, ReflectMut, ReflectRef, Sequence};
