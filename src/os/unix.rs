/// A unix error number, as stored in `errno`.
pub type ErrorCode = libc::c_int;

/// Returns the calling thread's `errno`.
pub fn last_error_code() -> ErrorCode {
    std::io::Error::last_os_error().raw_os_error().unwrap_or(0)
}

/// Sets the calling thread's `errno` to `code`.
pub fn set_last_error_code(code: ErrorCode) {
    let location = errno_location();

    // SAFETY: libc returns a valid, aligned pointer to the calling thread's
    // `errno`, which stays alive for as long as the thread does.
    unsafe { location.write(code) };
}

/// Longest message `strerror_r` is asked to produce.
const MESSAGE_CAPACITY: usize = 256;

/// Renders `code` through the platform's error-string table (`strerror_r`)
/// and copies the text into `buffer`.
pub(super) fn render(code: ErrorCode, buffer: &mut [u8]) -> usize {
    let mut message = [0u8; MESSAGE_CAPACITY];

    // SAFETY: `message` is valid for writes of `MESSAGE_CAPACITY` bytes. The
    // return value is ignored because unknown codes still get a terminated
    // "Unknown error" text.
    let _ = unsafe { libc::strerror_r(code, message.as_mut_ptr().cast(), message.len()) };

    super::terminated_copy(buffer, &message)
}

fn errno_location() -> *mut libc::c_int {
    #[cfg(any(
        target_os = "linux",
        target_os = "emscripten",
        target_os = "fuchsia",
        target_os = "hurd",
        target_os = "redox"
    ))]
    // SAFETY: `__errno_location` has no preconditions.
    let location = unsafe { libc::__errno_location() };

    #[cfg(any(
        target_os = "android",
        target_os = "netbsd",
        target_os = "openbsd",
        target_os = "cygwin"
    ))]
    // SAFETY: `__errno` has no preconditions.
    let location = unsafe { libc::__errno() };

    #[cfg(any(target_vendor = "apple", target_os = "freebsd"))]
    // SAFETY: `__error` has no preconditions.
    let location = unsafe { libc::__error() };

    #[cfg(any(target_os = "solaris", target_os = "illumos"))]
    // SAFETY: `___errno` has no preconditions.
    let location = unsafe { libc::___errno() };

    #[cfg(target_os = "dragonfly")]
    // SAFETY: `__dfly_error` has no preconditions.
    let location = unsafe { libc::__dfly_error() };

    #[cfg(target_os = "haiku")]
    // SAFETY: `_errnop` has no preconditions.
    let location = unsafe { libc::_errnop() };

    #[cfg(target_os = "aix")]
    // SAFETY: `_Errno` has no preconditions.
    let location = unsafe { libc::_Errno() };

    #[cfg(not(any(
        target_os = "linux",
        target_os = "emscripten",
        target_os = "fuchsia",
        target_os = "hurd",
        target_os = "redox",
        target_os = "android",
        target_os = "netbsd",
        target_os = "openbsd",
        target_os = "cygwin",
        target_vendor = "apple",
        target_os = "freebsd",
        target_os = "solaris",
        target_os = "illumos",
        target_os = "dragonfly",
        target_os = "haiku",
        target_os = "aix"
    )))]
    compile_error!("setting `errno` is not supported on this target");

    location
}
