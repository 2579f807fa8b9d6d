use core::error::Error;

use thiserror::Error;

use crate::value::ApplyError;

/// A failure raised by a property accessor itself.
///
/// The access layer wraps these in
/// [`PropertyError::FailedToReadProperty`] or
/// [`PropertyError::FailedToWriteProperty`].
///
/// [`PropertyError::FailedToReadProperty`]: crate::access::PropertyError::FailedToReadProperty
/// [`PropertyError::FailedToWriteProperty`]: crate::access::PropertyError::FailedToWriteProperty
#[derive(Debug, Error)]
pub enum InvocationError {
    #[error("accessor invoked on a value that is not a `{expected}`")]
    ReceiverMismatch { expected: &'static str },
    #[error(transparent)]
    Apply(#[from] ApplyError),
    #[error("index {index} is out of bounds for a sequence of length {len}")]
    IndexOutOfBounds { index: usize, len: usize },
    #[error("property `{0}` is computed and cannot be borrowed mutably")]
    Detached(&'static str),
    #[error(transparent)]
    Raised(Box<dyn Error + Send + Sync>),
}

impl InvocationError {
    #[inline]
    pub fn receiver<T: ?Sized + 'static>() -> Self {
        Self::ReceiverMismatch {
            expected: core::any::type_name::<T>(),
        }
    }

    /// Wraps an error returned by a user-supplied accessor.
    #[inline]
    pub fn raised(error: impl Into<Box<dyn Error + Send + Sync>>) -> Self {
        Self::Raised(error.into())
    }
}
