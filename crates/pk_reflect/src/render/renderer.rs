use crate::value::Value;

/// Produces a display form of a value.
///
/// The result is usually a [`Value::String`], but any value may be
/// returned; callers display it with [`Value`]'s `Display`.
pub trait Renderer: Send + Sync + 'static {
    fn render(&self, value: &Value) -> Value;
}

impl<F> Renderer for F
where
    F: Fn(&Value) -> Value + Send + Sync + 'static,
{
    #[inline]
    fn render(&self, value: &Value) -> Value {
        self(value)
    }
}
