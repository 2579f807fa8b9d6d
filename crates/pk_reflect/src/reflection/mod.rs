// -----------------------------------------------------------------------------
// Modules

mod descriptor;
mod host;
mod invocation;
mod reflect;

// -----------------------------------------------------------------------------
// Exports

pub use descriptor::{PropertyDescriptor, ReadFn, ReadMutFn, Reader, WriteFn};
pub use host::{PropertyHost, Slot};
pub use invocation::InvocationError;
pub use reflect::{Reflect, ReflectMut, ReflectRef, Sequence};
