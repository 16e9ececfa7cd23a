//! Character code units and their byte representation.

mod sealed {
    /// Prevents implementations of [`CodeUnit`](super::CodeUnit) outside this
    /// crate.
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// A single unit of a narrow or wide string.
///
/// This trait is sealed and implemented only for `u8`, `u16` and `u32`: plain
/// integers without padding, for which every bit pattern is valid. That is
/// what allows [`as_bytes`] and [`as_bytes_mut`] to reinterpret slices of code
/// units as bytes.
pub trait CodeUnit: sealed::Sealed + Copy + Eq + core::fmt::Debug + Send + Sync + 'static {
    /// The terminating unit of a null-terminated string.
    const NUL: Self;
}

impl CodeUnit for u8 {
    const NUL: Self = 0;
}

impl CodeUnit for u16 {
    const NUL: Self = 0;
}

impl CodeUnit for u32 {
    const NUL: Self = 0;
}

/// Views a slice of code units as its underlying bytes.
#[inline]
pub fn as_bytes<C: CodeUnit>(units: &[C]) -> &[u8] {
    let len = core::mem::size_of_val(units);

    // SAFETY:
    // 1. `C` is one of `u8`, `u16` or `u32` (the trait is sealed), none of
    //    which have padding, so every byte of the slice is initialized.
    // 2. `u8` has alignment 1, so any pointer is suitably aligned.
    // 3. `len` is exactly the size in bytes of `units`, and the returned slice
    //    borrows `units` for the same lifetime.
    unsafe { core::slice::from_raw_parts(units.as_ptr().cast::<u8>(), len) }
}

/// Views a mutable slice of code units as its underlying bytes.
///
/// Any byte pattern written through the returned slice leaves every unit
/// valid, since all bit patterns are valid for the implementing integers.
#[inline]
pub fn as_bytes_mut<C: CodeUnit>(units: &mut [C]) -> &mut [u8] {
    let len = core::mem::size_of_val(units);

    // SAFETY:
    // 1. `C` is a padding-free integer for which every bit pattern is valid,
    //    so arbitrary byte writes keep every unit valid.
    // 2. `u8` has alignment 1.
    // 3. `len` is exactly the size in bytes of `units`, and the returned slice
    //    exclusively borrows `units` for the same lifetime.
    unsafe { core::slice::from_raw_parts_mut(units.as_mut_ptr().cast::<u8>(), len) }
}
