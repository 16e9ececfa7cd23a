//! The process-wide exception handler.
//!
//! Liquid reports invalid arguments (null buffers, self-aliasing copies, out
//! of range lengths) by *raising* a short message through a single, replaceable
//! callback before returning an error value to the caller. The callback is a
//! plain function pointer of type [`ExceptionHandler`]; it receives the message
//! bytes and returns how many of them it consumed, the way a byte sink's
//! `write` would.
//!
//! # Quick Start
//!
//! ```rust,standalone_crate
//! use liquid::exception;
//!
//! fn log_to_stderr(message: &[u8]) -> usize {
//!     eprintln!("liquid: {}", String::from_utf8_lossy(message));
//!     message.len()
//! }
//!
//! let previous = exception::set_handler(Some(log_to_stderr));
//! assert_eq!(exception::raise(b"something went wrong"), 20);
//!
//! // Put back whatever was there before.
//! exception::set_handler(previous);
//! ```
//!
//! # Slot Lifecycle
//!
//! The slot starts out empty when the process starts and lives for the whole
//! process. [`set_handler`] is the only way to change it. While the slot is
//! empty, [`raise`](fn@raise) does nothing and returns `0`.
//!
//! # Concurrency
//!
//! The slot is guarded by a read-write lock (`std::sync::RwLock` with the
//! `std` feature, `spin::RwLock` without it). The handler is copied out of the
//! slot before it is called, so a handler may itself call [`raise`](fn@raise) or
//! [`set_handler`]. Recursion is not guarded against: a handler that raises
//! unconditionally recurses until the stack runs out.
//!
//! See also [`raise!`](crate::raise!), [`raise_if!`](crate::raise_if!) and
//! [`raise_if_not!`](crate::raise_if_not!), and the ready-made handlers in
//! [`handlers`](crate::handlers).

mod handler_lock;

use self::handler_lock::HandlerLock;

/// A callback that receives raised exception messages.
///
/// The slice carries both the message and its length. The return value is the
/// number of bytes the handler consumed, which [`raise`](fn@raise) hands back to its
/// caller unchanged.
pub type ExceptionHandler = fn(&[u8]) -> usize;

static HANDLER: HandlerLock<ExceptionHandler> = HandlerLock::new();

/// Installs `handler` as the process-wide exception handler and returns the
/// previously installed one.
///
/// Passing `None` removes the current handler. The handler is not validated.
///
/// # Examples
///
/// ```rust,standalone_crate
/// use liquid::exception;
///
/// fn first(message: &[u8]) -> usize {
///     message.len()
/// }
///
/// fn second(_message: &[u8]) -> usize {
///     0
/// }
///
/// let original = exception::set_handler(Some(first));
/// let previous = exception::set_handler(Some(second));
/// let first: exception::ExceptionHandler = first;
/// assert!(previous.is_some_and(|previous| core::ptr::fn_addr_eq(previous, first)));
/// # exception::set_handler(original);
/// ```
pub fn set_handler(handler: Option<ExceptionHandler>) -> Option<ExceptionHandler> {
    let previous = HANDLER.replace(handler);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        installed = handler.is_some(),
        replaced = previous.is_some(),
        "exception handler updated"
    );

    previous
}

/// Returns the currently installed exception handler, if any, without
/// changing it.
pub fn handler() -> Option<ExceptionHandler> {
    HANDLER.get()
}

/// Raises `message` through the installed exception handler.
///
/// Returns whatever the handler returns, which by convention is the number of
/// bytes it consumed. If no handler is installed, nothing happens and `0` is
/// returned.
///
/// # Examples
///
/// ```rust,standalone_crate
/// use liquid::exception;
///
/// let original = exception::set_handler(None);
/// assert_eq!(exception::raise(b"nobody is listening"), 0);
/// # exception::set_handler(original);
/// ```
pub fn raise(message: &[u8]) -> usize {
    match HANDLER.get() {
        Some(handler) => handler(message),
        None => {
            #[cfg(feature = "tracing")]
            tracing::trace!(len = message.len(), "exception raised with no handler installed");

            0
        }
    }
}
