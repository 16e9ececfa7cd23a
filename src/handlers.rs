//! Ready-made exception handlers.
//!
//! Any function of type [`ExceptionHandler`](crate::exception::ExceptionHandler)
//! can be installed with [`exception::set_handler`](crate::exception::set_handler).
//! This module provides the common ones:
//!
//! - [`discard`]: consume the message and do nothing with it
//! - `stderr`: write the message to standard error (requires `std`)
//! - `tracing_error`: emit the message as a `tracing` event (requires `tracing`)
//!
//! # Examples
//!
//! ```rust,standalone_crate
//! use liquid::{array_raw, exception, handlers};
//!
//! exception::set_handler(Some(handlers::stderr));
//!
//! // Prints "copy length exceeds the destination or source range"
//! let result = array_raw::copy(&mut [0u8; 2], b"abc", 3);
//! assert_eq!(result, Err(array_raw::CopyError::OutOfBounds));
//! ```

/// Consumes the message without doing anything with it.
///
/// Returns the length of the message, as if all of it had been written.
pub fn discard(message: &[u8]) -> usize {
    message.len()
}

/// Writes the message to standard error, followed by a newline.
///
/// Returns the number of message bytes written (the newline is not counted),
/// or `0` if standard error could not be written to.
#[cfg(feature = "std")]
pub fn stderr(message: &[u8]) -> usize {
    use std::io::Write;

    let mut stream = std::io::stderr().lock();
    match stream.write_all(message).and_then(|()| stream.write_all(b"\n")) {
        Ok(()) => message.len(),
        Err(_) => 0,
    }
}

/// Emits the message as an `error`-level `tracing` event.
///
/// Messages that are valid UTF-8 are recorded as text, anything else as the
/// raw bytes. Returns the length of the message.
#[cfg(feature = "tracing")]
pub fn tracing_error(message: &[u8]) -> usize {
    match core::str::from_utf8(message) {
        Ok(text) => tracing::error!(target: "liquid::exception", len = message.len(), "{text}"),
        Err(_) => tracing::error!(
            target: "liquid::exception",
            len = message.len(),
            bytes = ?message,
            "non-UTF-8 exception message"
        ),
    }

    message.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::exception::ExceptionHandler;

    #[test]
    fn test_handlers_coerce_to_exception_handler() {
        let _: ExceptionHandler = discard;

        #[cfg(feature = "std")]
        let _: ExceptionHandler = stderr;

        #[cfg(feature = "tracing")]
        let _: ExceptionHandler = tracing_error;
    }

    #[test]
    fn test_discard() {
        assert_eq!(discard(b"hello"), 5);
        assert_eq!(discard(b""), 0);
    }

    #[cfg(feature = "std")]
    #[test]
    fn test_stderr_reports_message_length() {
        assert_eq!(stderr(b"liquid handler test"), 19);
    }
}
