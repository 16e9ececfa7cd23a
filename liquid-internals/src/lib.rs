#![no_std]
#![forbid(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_safety_doc,
    clippy::missing_docs_in_private_items,
    clippy::undocumented_unsafe_blocks,
    clippy::multiple_unsafe_ops_per_block,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
#![allow(rustdoc::private_intra_doc_links)]
//! Internal implementation crate for [`liquid`].
//!
//! # Overview
//!
//! This crate contains the pointer-level, unchecked operations that power the
//! [`liquid`] foundation library: byte copies between raw buffers, linear
//! searches and prefix comparisons over `[begin, end)` pointer ranges, and the
//! reinterpretation of character code units as bytes.
//!
//! **This crate is an implementation detail.** No semantic versioning guarantees
//! are provided. Users should depend on the [`liquid`] crate, not this one.
//!
//! # Architecture
//!
//! - **[`bytes`]**: Byte-for-byte copy between non-overlapping buffers
//!   - [`copy_nonoverlapping`]: Copies `n` bytes and returns the position past
//!     the last written byte
//!
//! - **[`range`]**: Operations over `[begin, end)` element ranges
//!   - [`position`]: First element equal to a value
//!   - [`mismatch`]: First element that differs between two ranges
//!   - [`length`]: Number of elements between two positions
//!
//! - **[`unit`]**: Character code units
//!   - [`CodeUnit`]: Sealed trait for the plain integer types that make up
//!     narrow and wide strings
//!   - [`as_bytes`]/[`as_bytes_mut`]: Views of code unit slices as bytes
//!
//! # Safety Strategy
//!
//! None of the functions in this crate validate their inputs. The [`liquid`]
//! crate performs every null, aliasing and bounds check before calling into
//! this crate, and reports violations through its exception handler. Every
//! `unsafe fn` here documents exactly which of those checks the caller must
//! have performed.
//!
//! [`liquid`]: https://docs.rs/liquid/latest/liquid/
//! [`copy_nonoverlapping`]: bytes::copy_nonoverlapping
//! [`position`]: range::position
//! [`mismatch`]: range::mismatch
//! [`length`]: range::length
//! [`CodeUnit`]: unit::CodeUnit
//! [`as_bytes`]: unit::as_bytes
//! [`as_bytes_mut`]: unit::as_bytes_mut

pub mod bytes;
pub mod range;
pub mod unit;
