#[cfg(feature = "std")]
use std::sync as impl_;

#[cfg(not(feature = "std"))]
use spin as impl_;

/// A process-wide cell holding at most one `Copy` value.
///
/// Values are copied out of the cell before use, so no guard is ever held
/// while user code runs.
#[repr(transparent)]
pub(crate) struct HandlerLock<T: 'static + Copy + Send + Sync>(impl_::RwLock<Option<T>>);

impl<T: 'static + Copy + Send + Sync> HandlerLock<T> {
    #[must_use]
    pub(crate) const fn new() -> Self {
        Self(impl_::RwLock::new(None))
    }

    /// Returns a copy of the stored value, if any.
    #[inline]
    pub(crate) fn get(&'static self) -> Option<T> {
        #[cfg(not(feature = "std"))]
        let guard = self.0.read();

        // The stored value is `Copy`, so a writer that panicked cannot have
        // left it half-updated.
        #[cfg(feature = "std")]
        let guard = self.0.read().unwrap_or_else(impl_::PoisonError::into_inner);

        *guard
    }

    /// Stores `value` and returns the previously stored value.
    #[inline]
    pub(crate) fn replace(&'static self, value: Option<T>) -> Option<T> {
        #[cfg(not(feature = "std"))]
        let mut guard = self.0.write();

        #[cfg(feature = "std")]
        let mut guard = self.0.write().unwrap_or_else(impl_::PoisonError::into_inner);

        core::mem::replace(&mut *guard, value)
    }
}
