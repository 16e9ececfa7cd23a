//! Integration tests for the liquid-internals crate.
//!
//! ## Byte copy tests
//! - `test_copy_returns_position_past_end`: the returned pointer lands exactly
//!   `n` bytes past the destination start
//! - `test_copy_zero_bytes`: zero-length copies write nothing
//! - `test_chained_copies`: the returned pointer can seed the next copy
//!
//! ## Range tests
//! - `test_position_*`: first match, miss, empty range, sub-range bounds
//! - `test_mismatch_*`: equal ranges, mismatch index, prefix quirk, empty
//! - `test_length`: element distance between two positions
//!
//! ## Code unit tests
//! - `test_as_bytes_*`: byte views of narrow and wide units

use core::ptr::NonNull;

use liquid_internals::{
    bytes::copy_nonoverlapping,
    range::{length, mismatch, position},
    unit::{CodeUnit, as_bytes, as_bytes_mut},
};

fn index_of<T>(base: &[T], found: Option<NonNull<T>>) -> Option<usize> {
    let found = found?;
    // SAFETY: every pointer handed to this helper was produced from `base`.
    Some(unsafe { length(base.as_ptr(), found.as_ptr().cast_const()) })
}

#[test]
fn test_copy_returns_position_past_end() {
    let src = [1u8, 2, 3, 4, 5];
    let mut dest = [0u8; 8];

    let dest_start = NonNull::from(&mut dest).cast::<u8>();
    let src_start = NonNull::from(&src).cast::<u8>();

    // SAFETY: both arrays are live, large enough and distinct.
    let end = unsafe { copy_nonoverlapping(dest_start, src_start, src.len()) };

    // SAFETY: `end` was derived from `dest_start` within the same array.
    let written = unsafe { end.offset_from(dest_start) };
    assert_eq!(written, 5);
    assert_eq!(dest, [1, 2, 3, 4, 5, 0, 0, 0]);
}

#[test]
fn test_copy_zero_bytes() {
    let src = [9u8; 4];
    let mut dest = [0u8; 4];

    let dest_start = NonNull::from(&mut dest).cast::<u8>();

    // SAFETY: zero-length copies touch no memory.
    let end = unsafe { copy_nonoverlapping(dest_start, NonNull::from(&src).cast::<u8>(), 0) };

    assert_eq!(end, dest_start);
    assert_eq!(dest, [0; 4]);
}

#[test]
fn test_chained_copies() {
    let mut dest = [0u8; 11];
    let dest_start = NonNull::from(&mut dest).cast::<u8>();

    // SAFETY: "hello" fits at the start of `dest`.
    let middle =
        unsafe { copy_nonoverlapping(dest_start, NonNull::from(b"hello").cast::<u8>(), 5) };
    // SAFETY: " " fits right after "hello".
    let middle = unsafe { copy_nonoverlapping(middle, NonNull::from(b" ").cast::<u8>(), 1) };
    // SAFETY: "world" fills the remaining five bytes.
    let end = unsafe { copy_nonoverlapping(middle, NonNull::from(b"world").cast::<u8>(), 5) };

    // SAFETY: `end` was derived from `dest_start` within the same array.
    assert_eq!(unsafe { end.offset_from(dest_start) }, 11);
    assert_eq!(&dest, b"hello world");
}

#[test]
fn test_position_first_match() {
    let values = [1u8, 2, 3, 4, 3];
    let range = values.as_ptr_range();

    // SAFETY: the range covers exactly the initialized array.
    let found = unsafe { position(range.start, range.end, &3) };

    assert_eq!(index_of(&values, found), Some(2));
}

#[test]
fn test_position_miss() {
    let values = [1u8, 2, 3, 4, 5];
    let range = values.as_ptr_range();

    // SAFETY: the range covers exactly the initialized array.
    let found = unsafe { position(range.start, range.end, &6) };

    assert_eq!(found, None);
}

#[test]
fn test_position_empty_range() {
    let values = [1u8, 2, 3];
    let begin = values.as_ptr();

    for value in 0..=4u8 {
        // SAFETY: an empty range reads nothing.
        let found = unsafe { position(begin, begin, &value) };
        assert_eq!(found, None);
    }
}

#[test]
fn test_position_respects_end() {
    let values = [1u8, 2, 3, 4, 5];
    let begin = values.as_ptr();
    // SAFETY: two elements past the start is inside the array.
    let end = unsafe { begin.add(2) };

    // SAFETY: `[begin, end)` is the first two elements.
    let found = unsafe { position(begin, end, &3) };

    assert_eq!(found, None);
}

#[test]
fn test_position_wide_elements() {
    let values = [10i32, -4, 7, -4];
    let range = values.as_ptr_range();

    // SAFETY: the range covers exactly the initialized array.
    let found = unsafe { position(range.start, range.end, &-4) };

    assert_eq!(index_of(&values, found), Some(1));
}

#[test]
fn test_mismatch_equal_ranges() {
    let a = [1i32, 2, 3, 4, 5];
    let b = [1i32, 2, 3, 4, 5];
    let (a_range, b_range) = (a.as_ptr_range(), b.as_ptr_range());

    // SAFETY: both ranges cover their initialized arrays.
    let found = unsafe { mismatch(a_range.start, a_range.end, b_range.start, b_range.end) };

    assert_eq!(found, None);
}

#[test]
fn test_mismatch_reports_position_in_first_range() {
    let a = [1i32, 2, 3, 4, 5];
    let b = [1i32, 2, 3, 4, 6];
    let (a_range, b_range) = (a.as_ptr_range(), b.as_ptr_range());

    // SAFETY: both ranges cover their initialized arrays.
    let found = unsafe { mismatch(a_range.start, a_range.end, b_range.start, b_range.end) };

    assert_eq!(index_of(&a, found), Some(4));
}

#[test]
fn test_mismatch_ignores_length_difference() {
    let a = [1i32, 2, 3, 4, 5];
    let b = [1i32, 2, 3];
    let (a_range, b_range) = (a.as_ptr_range(), b.as_ptr_range());

    // SAFETY: both ranges cover their initialized arrays.
    let longer_first = unsafe { mismatch(a_range.start, a_range.end, b_range.start, b_range.end) };
    // SAFETY: same ranges, swapped.
    let shorter_first = unsafe { mismatch(b_range.start, b_range.end, a_range.start, a_range.end) };

    assert_eq!(longer_first, None);
    assert_eq!(shorter_first, None);
}

#[test]
fn test_mismatch_empty_ranges() {
    let a: [u8; 0] = [];
    let b: [u8; 0] = [];
    let (a_range, b_range) = (a.as_ptr_range(), b.as_ptr_range());

    // SAFETY: empty ranges read nothing.
    let found = unsafe { mismatch(a_range.start, a_range.end, b_range.start, b_range.end) };

    assert_eq!(found, None);
}

#[test]
fn test_length() {
    let values = [0u16; 9];
    let range = values.as_ptr_range();

    // SAFETY: both pointers come from `values` and `end >= start`.
    assert_eq!(unsafe { length(range.start, range.end) }, 9);
    // SAFETY: same pointer twice.
    assert_eq!(unsafe { length(range.start, range.start) }, 0);
}

#[test]
fn test_as_bytes_narrow() {
    let text = *b"abc";
    assert_eq!(as_bytes(&text), b"abc");
}

#[test]
fn test_as_bytes_wide() {
    let text = [0x0041u16, 0x0042];
    let bytes = as_bytes(&text);

    assert_eq!(bytes.len(), 4);
    assert_eq!(u16::from_ne_bytes([bytes[0], bytes[1]]), 0x0041);
    assert_eq!(u16::from_ne_bytes([bytes[2], bytes[3]]), 0x0042);
}

#[test]
fn test_as_bytes_mut_writes_units() {
    let mut text = [u32::NUL; 2];
    let bytes = as_bytes_mut(&mut text);
    bytes[4..8].copy_from_slice(&0x1F600u32.to_ne_bytes());

    assert_eq!(text, [0, 0x1F600]);
}

#[test]
fn test_code_unit_properties() {
    static_assertions::assert_impl_all!(u8: CodeUnit, Copy, Send, Sync);
    static_assertions::assert_impl_all!(u16: CodeUnit, Copy, Send, Sync);
    static_assertions::assert_impl_all!(u32: CodeUnit, Copy, Send, Sync);
    static_assertions::assert_not_impl_any!(u64: CodeUnit);
    static_assertions::assert_not_impl_any!(i32: CodeUnit);

    assert_eq!(u8::NUL, 0);
    assert_eq!(u16::NUL, 0);
}
