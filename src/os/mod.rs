//! Platform error codes.
//!
//! Every platform keeps a thread-local "last error" slot that system calls set
//! when they fail: `errno` on unix, `GetLastError`/`SetLastError` on Windows.
//! This module reads and writes that slot and renders codes as readable
//! messages, with the same shape on every platform:
//!
//! - [`last_error_code`]: read the slot
//! - [`set_last_error_code`]: write the slot
//! - [`error_message`]: render a code into a caller-supplied buffer
//! - [`last_error_message`]: render the current slot
//!
//! Messages come from the platform's own table (`strerror_r` on unix,
//! `FormatMessageA` on Windows) and are copied into the buffer with
//! [`str::cpy`](crate::str::cpy): they are truncated to fit and always
//! null-terminated.
//!
//! # Examples
//!
//! ```rust
//! use liquid::os;
//!
//! os::set_last_error_code(2);
//! assert_eq!(os::last_error_code(), 2);
//!
//! let mut buffer = [0u8; 256];
//! let len = os::last_error_message(&mut buffer);
//! assert!(len > 0);
//! assert_eq!(buffer[len], 0);
//! ```

#[cfg(unix)]
mod unix;
#[cfg(windows)]
mod windows;

#[cfg(unix)]
use self::unix as platform;
#[cfg(windows)]
use self::windows as platform;

pub use self::platform::{ErrorCode, last_error_code, set_last_error_code};

/// Renders `code` as a human-readable message into `buffer`.
///
/// The message is truncated to `buffer.len() - 1` bytes and null-terminated.
/// Returns the length of the rendered message, not counting the terminator.
/// An empty buffer receives nothing and `0` is returned.
pub fn error_message(code: ErrorCode, buffer: &mut [u8]) -> usize {
    platform::render(code, buffer)
}

/// Renders the calling thread's last error code into `buffer`.
///
/// See [`error_message`].
pub fn last_error_message(buffer: &mut [u8]) -> usize {
    error_message(last_error_code(), buffer)
}

/// Copies the terminated `message` into `buffer` and returns its length,
/// not counting the terminator.
fn terminated_copy(buffer: &mut [u8], message: &[u8]) -> usize {
    let capacity = buffer.len();

    match crate::str::cpy(buffer, capacity, message, 0) {
        Ok(written) => written.saturating_sub(1),
        Err(_) => 0,
    }
}
