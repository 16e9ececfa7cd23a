//! Truncating copies of narrow and wide null-terminated strings.
//!
//! Every function here works in three steps:
//!
//! 1. Resolve omitted sizes. A `dest_capacity` of `0` means "unknown" and is
//!    replaced by the length of the string already stored in `dest`, up to its
//!    terminator. A `src_length` of `0` is replaced by the length of `src` up
//!    to its terminator. Sizes larger than the slice they describe are clamped
//!    to the slice.
//! 2. Copy `min(capacity, length)` units through
//!    [`array_raw::copy_units`](crate::array_raw::copy_units). Truncation is
//!    silent; compare the returned count with the intended length to detect
//!    it.
//! 3. For [`cpy`], terminate the copy. One unit of the capacity is reserved
//!    for the terminator, so the terminator always lands in bounds.
//!
//! Resolving the destination capacity from its current contents is only safe
//! when `dest` already holds a terminated string of the right size. Pass a
//! real capacity whenever one is known.
//!
//! # Examples
//!
//! ```rust
//! use liquid::str;
//!
//! let mut buffer = [0x7Fu8; 8];
//! let written = str::str_cpy(&mut buffer, 8, b"truncated text", 0)?;
//!
//! assert_eq!(written, 8);
//! assert_eq!(&buffer, b"truncat\0");
//! assert_eq!(str::len(&buffer), 7);
//! # Ok::<(), liquid::array_raw::CopyError>(())
//! ```

use crate::array_raw::{self, CopyError};

pub use liquid_internals::unit::CodeUnit;

/// The platform's wide character unit, matching the width of C's `wchar_t`.
#[cfg(windows)]
pub type WideChar = u16;

/// The platform's wide character unit, matching the width of C's `wchar_t`.
#[cfg(not(windows))]
pub type WideChar = u32;

/// Returns the number of units in `s` before the first terminator, or
/// `s.len()` if `s` is not terminated.
pub fn len<C: CodeUnit>(s: &[C]) -> usize {
    array_raw::find(s, &C::NUL).unwrap_or(s.len())
}

fn resolve<C: CodeUnit>(size: usize, s: &[C]) -> usize {
    match size {
        0 => len(s),
        size => size.min(s.len()),
    }
}

/// Copies up to `min(dest_capacity, src_length)` units of `src` into `dest`
/// without terminating the result.
///
/// Returns the number of units copied. See the [module docs](self) for how
/// zero sizes are resolved.
pub fn raw_copy<C: CodeUnit>(
    dest: &mut [C],
    dest_capacity: usize,
    src: &[C],
    src_length: usize,
) -> Result<usize, CopyError> {
    let capacity = resolve(dest_capacity, dest);
    let length = resolve(src_length, src);

    array_raw::copy_units(dest, src, capacity.min(length))
}

/// Copies up to `dest_capacity - 1` units of `src` into `dest` and terminates
/// the result.
///
/// Returns the number of units written, including the terminator. When the
/// resolved capacity is `0` there is no room for a terminator: nothing is
/// written and `0` is returned.
pub fn cpy<C: CodeUnit>(
    dest: &mut [C],
    dest_capacity: usize,
    src: &[C],
    src_length: usize,
) -> Result<usize, CopyError> {
    let Some(room) = resolve(dest_capacity, dest).checked_sub(1) else {
        return Ok(0);
    };
    let length = resolve(src_length, src);

    let copied = array_raw::copy_units(dest, src, room.min(length))?;

    // `copied <= room`, and `room` is strictly less than `dest.len()`.
    match dest.get_mut(copied) {
        Some(terminator) => {
            *terminator = C::NUL;
            Ok(copied + 1)
        }
        None => Ok(copied),
    }
}

/// [`raw_copy`] over narrow strings.
pub fn str_raw_cpy(
    dest: &mut [u8],
    dest_size: usize,
    src: &[u8],
    src_size: usize,
) -> Result<usize, CopyError> {
    raw_copy(dest, dest_size, src, src_size)
}

/// [`raw_copy`] over wide strings.
pub fn wstr_raw_cpy(
    dest: &mut [WideChar],
    dest_size: usize,
    src: &[WideChar],
    src_size: usize,
) -> Result<usize, CopyError> {
    raw_copy(dest, dest_size, src, src_size)
}

/// [`cpy`] over narrow strings.
pub fn str_cpy(
    dest: &mut [u8],
    dest_size: usize,
    src: &[u8],
    src_size: usize,
) -> Result<usize, CopyError> {
    cpy(dest, dest_size, src, src_size)
}

/// [`cpy`] over wide strings.
pub fn wstr_cpy(
    dest: &mut [WideChar],
    dest_size: usize,
    src: &[WideChar],
    src_size: usize,
) -> Result<usize, CopyError> {
    cpy(dest, dest_size, src, src_size)
}
