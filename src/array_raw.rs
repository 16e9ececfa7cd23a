//! Copy, search and compare over untyped element ranges.
//!
//! The safe functions take slices, which carry their own bounds. The
//! `_raw` variants keep the pointer-level contract: nullable pointers and
//! `[begin, end)` positions. Both report invalid arguments the same way: the
//! fixed message of a [`CopyError`] is raised through the
//! [exception handler](crate::exception) and the error is returned to the
//! caller.
//!
//! Searching and comparing never fail. A miss is an ordinary `None`.
//!
//! # Examples
//!
//! ```rust
//! use liquid::array_raw;
//!
//! let mut buffer = [0u8; 11];
//! let mut written = array_raw::copy(&mut buffer, b"hello", 5)?;
//! written += array_raw::copy(&mut buffer[written..], b" world", 6)?;
//!
//! assert_eq!(written, 11);
//! assert_eq!(&buffer, b"hello world");
//! assert_eq!(array_raw::find_byte(&buffer, b' '), Some(5));
//! assert_eq!(array_raw::compare(&buffer[..5], b"help!"), Some(3));
//! # Ok::<(), array_raw::CopyError>(())
//! ```

use core::{fmt, ptr::NonNull};

use liquid_internals::{
    bytes, range,
    unit::{self, CodeUnit},
};

/// The reasons a copy can be rejected.
///
/// Every variant has a fixed [`message`](Self::message), which is what gets
/// raised through the exception handler.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum CopyError {
    /// The destination or source pointer was null.
    NullPointer,
    /// The destination and source were the same buffer.
    SelfCopy,
    /// The requested length exceeds the destination or the source.
    OutOfBounds,
}

impl CopyError {
    /// The message raised through the exception handler for this error.
    pub const fn message(self) -> &'static str {
        match self {
            CopyError::NullPointer => "invalid destination or source pointer",
            CopyError::SelfCopy => {
                "copying a buffer onto itself is not supported, use a move for overlapping ranges"
            }
            CopyError::OutOfBounds => "copy length exceeds the destination or source range",
        }
    }
}

impl fmt::Display for CopyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl core::error::Error for CopyError {}

/// Copies the first `n` bytes of `src` into the start of `dest`.
///
/// Returns the offset into `dest` immediately after the last byte written,
/// which is always `n`. The offset can seed the next copy into the same
/// buffer.
///
/// Raises and returns [`CopyError::OutOfBounds`] without copying anything if
/// `n` is larger than either slice. A zero-length copy always succeeds.
pub fn copy(dest: &mut [u8], src: &[u8], n: usize) -> Result<usize, CopyError> {
    raise_if!(
        n > dest.len() || n > src.len(),
        Err(CopyError::OutOfBounds),
        CopyError::OutOfBounds.message()
    );

    if n == 0 {
        return Ok(0);
    }

    // SAFETY:
    // 1. Both slices hold at least `n` bytes, as checked above.
    // 2. `dest` is borrowed mutably while `src` is borrowed shared, so the
    //    borrow checker guarantees the two do not overlap.
    unsafe { copy_raw(dest.as_mut_ptr(), src.as_ptr(), n) }
}

/// Copies the first `n` code units of `src` into the start of `dest`.
///
/// This is [`copy`] over the underlying bytes, with the length multiplied by
/// the size of a unit. Returns the number of units copied.
pub fn copy_units<C: CodeUnit>(dest: &mut [C], src: &[C], n: usize) -> Result<usize, CopyError> {
    let width = size_of::<C>();
    let Some(byte_len) = n.checked_mul(width) else {
        raise!(CopyError::OutOfBounds.message());
        return Err(CopyError::OutOfBounds);
    };

    let copied = copy(unit::as_bytes_mut(dest), unit::as_bytes(src), byte_len)?;
    Ok(copied / width)
}

/// Copies `n` bytes from `src` to `dest` through raw pointers.
///
/// Returns the offset immediately after the last byte written (`n`), so the
/// next write can start at `dest.add(n)`.
///
/// Raises and returns [`CopyError::NullPointer`] if either pointer is null, and
/// [`CopyError::SelfCopy`] if both pointers are the same, even for `n == 0`.
/// Nothing is written in either case.
///
/// # Safety
///
/// When both pointers are non-null and distinct, the caller must ensure that:
///
/// 1. `src` is valid for reads of `n` bytes.
/// 2. `dest` is valid for writes of `n` bytes.
/// 3. The two `n`-byte ranges do not overlap.
pub unsafe fn copy_raw(dest: *mut u8, src: *const u8, n: usize) -> Result<usize, CopyError> {
    let (Some(dest), Some(src)) = (NonNull::new(dest), NonNull::new(src.cast_mut())) else {
        raise!(CopyError::NullPointer.message());
        return Err(CopyError::NullPointer);
    };

    raise_if!(dest == src, Err(CopyError::SelfCopy), CopyError::SelfCopy.message());

    // SAFETY: Both pointers are non-null and distinct, and the caller
    // guarantees validity for `n` bytes and that the ranges do not overlap.
    let end = unsafe { bytes::copy_nonoverlapping(dest, src, n) };

    // SAFETY: `end` was derived from `dest` by advancing `n` bytes within the
    // same allocation.
    Ok(unsafe { end.offset_from_unsigned(dest) })
}

/// Returns the index of the first byte in `values` equal to `value`.
///
/// Returns `None` if there is no such byte, including when `values` is empty.
pub fn find_byte(values: &[u8], value: u8) -> Option<usize> {
    find(values, &value)
}

/// Returns the index of the first element in `values` equal to `value`.
pub fn find<T: PartialEq>(values: &[T], value: &T) -> Option<usize> {
    // Zero-sized elements share one address, so the pointer range is empty.
    if size_of::<T>() == 0 {
        return values.iter().position(|candidate| candidate == value);
    }

    let bounds = values.as_ptr_range();

    // SAFETY: `bounds` covers exactly the initialized elements of `values`.
    let found = unsafe { range::position(bounds.start, bounds.end, value) }?;

    // SAFETY: `found` lies within `values`, at or after its start.
    Some(unsafe { range::length(bounds.start, found.as_ptr().cast_const()) })
}

/// Compares `a` with `b` element by element, up to the length of the shorter
/// slice.
///
/// Returns the index of the first element of `a` that differs from its
/// counterpart in `b`, or `None` if every compared element matches.
///
/// Lengths are not compared: slices that agree on their common prefix are
/// reported as equal even when one is longer. Check the lengths separately
/// when full equality is needed.
///
/// ```rust
/// use liquid::array_raw::compare;
///
/// assert_eq!(compare(&[1, 2, 3, 4, 5], &[1, 2, 3, 4, 5]), None);
/// assert_eq!(compare(&[1, 2, 3, 4, 5], &[1, 2, 3, 4, 0]), Some(4));
/// assert_eq!(compare(&[1, 2, 3, 4, 5], &[1, 2, 3]), None);
/// ```
pub fn compare<T: PartialEq>(a: &[T], b: &[T]) -> Option<usize> {
    if size_of::<T>() == 0 {
        return a.iter().zip(b).position(|(a, b)| a != b);
    }

    let a_bounds = a.as_ptr_range();
    let b_bounds = b.as_ptr_range();

    // SAFETY: each pair of bounds covers exactly the initialized elements of
    // its slice.
    let found =
        unsafe { range::mismatch(a_bounds.start, a_bounds.end, b_bounds.start, b_bounds.end) }?;

    // SAFETY: `found` lies within `a`, at or after its start.
    Some(unsafe { range::length(a_bounds.start, found.as_ptr().cast_const()) })
}

/// Returns the position of the first byte in `[begin, end)` equal to `value`.
///
/// Returns `None` if there is no such byte or the range is empty.
///
/// # Safety
///
/// `begin` and `end` must be derived from the same allocation, with
/// `end >= begin`, and every byte in `[begin, end)` must be initialized and
/// readable.
pub unsafe fn find_byte_raw(begin: *const u8, end: *const u8, value: u8) -> Option<NonNull<u8>> {
    // SAFETY: forwarded from the caller.
    unsafe { range::position(begin, end, &value) }
}

/// Compares `[a_begin, a_end)` with `[b_begin, b_end)` byte by byte, up to the
/// length of the shorter range.
///
/// Returns the position within the first range of the first mismatching byte,
/// or `None` if the compared prefix is equal. See [`compare`].
///
/// # Safety
///
/// Both ranges must satisfy the requirements of [`find_byte_raw`].
pub unsafe fn compare_raw(
    a_begin: *const u8,
    a_end: *const u8,
    b_begin: *const u8,
    b_end: *const u8,
) -> Option<NonNull<u8>> {
    // SAFETY: forwarded from the caller.
    unsafe { range::mismatch(a_begin, a_end, b_begin, b_end) }
}

/// Returns the number of elements between `begin` and `end`.
///
/// # Safety
///
/// Both pointers must be derived from the same allocation, with
/// `end >= begin`.
pub unsafe fn length<T>(begin: *const T, end: *const T) -> usize {
    // SAFETY: forwarded from the caller.
    unsafe { range::length(begin, end) }
}
