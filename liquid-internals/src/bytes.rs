//! Byte copies between raw buffers.

use core::ptr::NonNull;

/// Copies `n` bytes from `src` to `dest`, front to back, and returns the
/// position immediately after the last byte written to `dest`.
///
/// The returned pointer lets callers chain several writes into one larger
/// buffer. When `n` is zero nothing is read or written and `dest` itself is
/// returned.
///
/// # Safety
///
/// The caller must ensure that:
///
/// 1. `src` is valid for reads of `n` bytes.
/// 2. `dest` is valid for writes of `n` bytes.
/// 3. The two ranges `[src, src + n)` and `[dest, dest + n)` do not overlap.
#[inline]
pub unsafe fn copy_nonoverlapping(dest: NonNull<u8>, src: NonNull<u8>, n: usize) -> NonNull<u8> {
    // SAFETY:
    // 1. The caller guarantees `src` is readable and `dest` writable for `n` bytes.
    // 2. The caller guarantees the ranges do not overlap.
    unsafe {
        core::ptr::copy_nonoverlapping(src.as_ptr().cast_const(), dest.as_ptr(), n);
    }

    // SAFETY: `dest + n` is at most one byte past the end of the writable
    // range, which is a valid position within (or one past) the same
    // allocation.
    unsafe { dest.add(n) }
}
