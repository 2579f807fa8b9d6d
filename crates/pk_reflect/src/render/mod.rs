//! Display renderers.
//!
//! A [`RenderRegistry`] maps value types to [`Renderer`]s. Resolution
//! looks at the runtime type of the value: exact type first, then its
//! capabilities, then its supertypes. Absent values never render.

// -----------------------------------------------------------------------------
// Modules

mod builtin;
mod registry;
mod renderer;

// -----------------------------------------------------------------------------
// Exports

pub use builtin::{BooleanRenderer, DateTimeRenderer, EnumeratedRenderer, IdentityRenderer};
pub use registry::{RenderRegistry, RenderRegistryArc};
pub use renderer::Renderer;
