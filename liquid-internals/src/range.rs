//! Operations over `[begin, end)` element ranges.
//!
//! A range is described by a pointer to its first element and a pointer one
//! past its last element. A range whose `begin` equals its `end` is empty;
//! searching it finds nothing and comparing it reports no mismatch.
//!
//! None of these functions read outside the ranges they are given. Ranges of
//! zero-sized elements always have `begin == end`, so they are empty here.

use core::ptr::NonNull;

/// Returns the number of elements in `[begin, end)`.
///
/// # Safety
///
/// The caller must ensure that:
///
/// 1. `begin` and `end` are derived from the same allocation.
/// 2. `end >= begin`.
#[inline]
pub unsafe fn length<T>(begin: *const T, end: *const T) -> usize {
    // SAFETY: The caller guarantees that both pointers belong to the same
    // allocation and that `end` does not precede `begin`.
    unsafe { end.offset_from_unsigned(begin) }
}

/// Scans `[begin, end)` front to back and returns the position of the first
/// element equal to `value`.
///
/// Returns `None` if no element matches, including when the range is empty.
///
/// # Safety
///
/// The caller must ensure that:
///
/// 1. `begin` and `end` are derived from the same allocation and
///    `end >= begin`.
/// 2. Every element in `[begin, end)` is initialized and valid for reads for
///    the duration of the call.
#[inline]
pub unsafe fn position<T: PartialEq>(
    begin: *const T,
    end: *const T,
    value: &T,
) -> Option<NonNull<T>> {
    let mut cursor = begin;

    while cursor != end {
        // SAFETY: `cursor` lies in `[begin, end)`, which the caller guarantees
        // is readable.
        let current = unsafe { &*cursor };

        if current == value {
            return NonNull::new(cursor.cast_mut());
        }

        // SAFETY: `cursor < end`, so advancing by one stays within the
        // allocation or lands exactly on `end`.
        cursor = unsafe { cursor.add(1) };
    }

    None
}

/// Compares `[a_begin, a_end)` with `[b_begin, b_end)` element by element, up
/// to the length of the shorter range.
///
/// Returns the position within the first range of the first element that
/// differs from its counterpart, or `None` if every compared element matches.
///
/// The lengths of the ranges are not themselves compared: two ranges that
/// agree on their common prefix produce `None` even if one is longer.
///
/// # Safety
///
/// The caller must ensure that both ranges satisfy the requirements of
/// [`position`]: each pair of pointers is derived from one allocation, ends do
/// not precede beginnings, and every element is initialized and readable.
#[inline]
pub unsafe fn mismatch<T: PartialEq>(
    a_begin: *const T,
    a_end: *const T,
    b_begin: *const T,
    b_end: *const T,
) -> Option<NonNull<T>> {
    let mut a = a_begin;
    let mut b = b_begin;

    while a != a_end && b != b_end {
        // SAFETY: `a` lies in `[a_begin, a_end)`, which is readable.
        let left = unsafe { &*a };
        // SAFETY: `b` lies in `[b_begin, b_end)`, which is readable.
        let right = unsafe { &*b };

        if left != right {
            return NonNull::new(a.cast_mut());
        }

        // SAFETY: `a < a_end`, so advancing by one stays in bounds.
        a = unsafe { a.add(1) };
        // SAFETY: `b < b_end`, so advancing by one stays in bounds.
        b = unsafe { b.add(1) };
    }

    None
}
