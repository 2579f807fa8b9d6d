//! Items used by exported macros. Not public API.

#[cfg(feature = "auto_register")]
pub mod auto_register {
    use std::sync::Arc;

    pub use inventory;

    use crate::convert::Converter;
    use crate::info::TypeInfo;
    use crate::render::Renderer;

    pub struct ConverterSubmission {
        pub target: fn() -> &'static TypeInfo,
        pub converter: fn() -> Arc<dyn Converter>,
    }

    inventory::collect!(ConverterSubmission);

    pub struct RendererSubmission {
        pub target: fn() -> &'static TypeInfo,
        pub renderer: fn() -> Arc<dyn Renderer>,
    }

    inventory::collect!(RendererSubmission);
}

/// Submits a converter for static registration.
///
/// Picked up by [`ConversionRegistry::auto_register`]. Requires the
/// `auto_register` feature.
///
/// ```
/// use pk_reflect::convert::ConversionRegistry;
/// use pk_reflect::convert::builtin::BooleanConverter;
///
/// pk_reflect::submit_converter!(bool, BooleanConverter::new().with_default(true));
///
/// fn main() {
///     let mut registry = ConversionRegistry::new();
///     assert!(registry.auto_register());
/// }
/// ```
///
/// [`ConversionRegistry::auto_register`]: crate::convert::ConversionRegistry::auto_register
#[cfg(feature = "auto_register")]
#[macro_export]
macro_rules! submit_converter {
    ($target:ty, $converter:expr $(,)?) => {
        $crate::__macro_exports::auto_register::inventory::submit! {
            $crate::__macro_exports::auto_register::ConverterSubmission {
                target: <$target as $crate::info::Typed>::type_info,
                converter: || ::std::sync::Arc::new($converter),
            }
        }
    };
}

/// Submits a renderer for static registration.
///
/// Picked up by [`RenderRegistry::auto_register`]. Requires the
/// `auto_register` feature.
///
/// [`RenderRegistry::auto_register`]: crate::render::RenderRegistry::auto_register
#[cfg(feature = "auto_register")]
#[macro_export]
macro_rules! submit_renderer {
    ($target:ty, $renderer:expr $(,)?) => {
        $crate::__macro_exports::auto_register::inventory::submit! {
            $crate::__macro_exports::auto_register::RendererSubmission {
                target: <$target as $crate::info::Typed>::type_info,
                renderer: || ::std::sync::Arc::new($renderer),
            }
        }
    };
}
