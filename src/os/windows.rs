use core::{ffi::c_void, ptr};

/// A Windows system error code, as returned by `GetLastError`.
pub type ErrorCode = u32;

const FORMAT_MESSAGE_IGNORE_INSERTS: u32 = 0x0000_0200;
const FORMAT_MESSAGE_FROM_SYSTEM: u32 = 0x0000_1000;
/// `MAKELANGID(LANG_NEUTRAL, SUBLANG_DEFAULT)`
const LANG_NEUTRAL_DEFAULT: u32 = 0x0400;

/// Longest message `FormatMessageA` is asked to produce.
const MESSAGE_CAPACITY: usize = 512;

#[link(name = "kernel32")]
unsafe extern "system" {
    safe fn GetLastError() -> u32;
    safe fn SetLastError(code: u32);
    fn FormatMessageA(
        flags: u32,
        source: *const c_void,
        message_id: u32,
        language_id: u32,
        buffer: *mut u8,
        size: u32,
        arguments: *const c_void,
    ) -> u32;
}

/// Returns the calling thread's last-error code.
pub fn last_error_code() -> ErrorCode {
    GetLastError()
}

/// Sets the calling thread's last-error code to `code`.
pub fn set_last_error_code(code: ErrorCode) {
    SetLastError(code);
}

/// Renders `code` through the system message table (`FormatMessageA`) and
/// copies the text into `buffer`.
pub(super) fn render(code: ErrorCode, buffer: &mut [u8]) -> usize {
    let mut message = [0u8; MESSAGE_CAPACITY];

    // SAFETY: `message` is valid for writes of `MESSAGE_CAPACITY` bytes, and
    // no source or insert arguments are read with these flags.
    let written = unsafe {
        FormatMessageA(
            FORMAT_MESSAGE_FROM_SYSTEM | FORMAT_MESSAGE_IGNORE_INSERTS,
            ptr::null(),
            code,
            LANG_NEUTRAL_DEFAULT,
            message.as_mut_ptr(),
            MESSAGE_CAPACITY as u32,
            ptr::null(),
        )
    };

    match message.get(..written as usize) {
        Some(text) if !text.is_empty() => super::terminated_copy(buffer, text),
        _ => 0,
    }
}
