#![no_std]
#![deny(
    missing_docs,
    clippy::alloc_instead_of_core,
    clippy::std_instead_of_alloc,
    clippy::std_instead_of_core,
    clippy::missing_safety_doc,
    clippy::undocumented_unsafe_blocks,
    clippy::multiple_unsafe_ops_per_block,
    clippy::as_ptr_cast_mut,
    clippy::ptr_as_ptr,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::broken_intra_doc_links,
    missing_copy_implementations,
    unused_doc_comments
)]
// Make docs.rs generate better docs
#![cfg_attr(docsrs, feature(doc_cfg))]

//! A small foundation library of raw memory primitives, null-terminated string
//! copies and a pluggable exception handler.
//!
//! ## Overview
//!
//! Liquid provides the handful of building blocks that low-level code keeps
//! rewriting: copying, searching and comparing element ranges, copying narrow
//! and wide strings into fixed-size buffers with truncation and termination,
//! and reading the platform's last error code. When one of these operations is
//! handed invalid arguments it does not panic or abort. It *raises* a short
//! message through a process-wide exception handler of your choosing and
//! returns an error value to its caller.
//!
//! ## Quick Example
//!
//! ```rust,standalone_crate
//! use liquid::{exception, handlers, str};
//!
//! exception::set_handler(Some(handlers::stderr));
//!
//! let mut name = [0u8; 8];
//! let written = str::str_cpy(&mut name, 8, b"liquid", 0)?;
//! assert_eq!(written, 7);
//! assert_eq!(&name[..7], b"liquid\0");
//! # Ok::<(), liquid::array_raw::CopyError>(())
//! ```
//!
//! ## Core Concepts
//!
//! The library is layered, and no layer depends on the one above it:
//!
//! - **[`exception`]**: the process-wide handler slot, [`set_handler`] and
//!   [`raise`]. Handlers are plain functions that receive the message bytes
//!   and return how many they consumed. With no handler installed, raising is
//!   a no-op that returns `0`.
//! - **[`array_raw`]**: [`copy`], [`find_byte`] and [`compare`] over slices,
//!   plus `unsafe` raw-pointer variants. Invalid copies raise through the
//!   exception handler and return a [`CopyError`].
//! - **[`str`](mod@str)**: [`raw_copy`] and [`cpy`], generic over narrow (`u8`) and
//!   wide ([`WideChar`]) code units. Zero sizes mean "look for the
//!   terminator", truncation is silent, and [`cpy`] always leaves room for
//!   the terminator.
//! - **[`os`]** (requires `std`): the platform's last-error slot and its
//!   messages.
//!
//! Ready-made handlers live in [`handlers`].
//!
//! [`set_handler`]: exception::set_handler
//! [`raise`]: fn@exception::raise
//! [`copy`]: array_raw::copy
//! [`find_byte`]: array_raw::find_byte
//! [`compare`]: array_raw::compare
//! [`CopyError`]: array_raw::CopyError
//! [`raw_copy`]: crate::str::raw_copy
//! [`cpy`]: crate::str::cpy
//! [`WideChar`]: crate::str::WideChar
//!
//! ## Feature Flags
//!
//! - `std` (default): uses `std::sync::RwLock` for the handler slot and
//!   enables [`handlers::stderr`] and the [`os`] module. Without it the crate
//!   is `no_std` and the slot uses a spin lock.
//! - `tracing`: emits `tracing` events when the handler slot changes or a
//!   message is raised with no handler installed, and enables
//!   `handlers::tracing_error`.
//!
//! ## Allocation
//!
//! Nothing in the crate allocates. Every operation works only on caller-owned
//! memory and fixed-size stack buffers.

#[cfg(any(feature = "std", test))]
extern crate std;

#[macro_use]
mod macros;

pub mod array_raw;
pub mod exception;
pub mod handlers;
#[cfg(feature = "std")]
#[cfg_attr(docsrs, doc(cfg(feature = "std")))]
pub mod os;
pub mod prelude;
pub mod str;

#[doc(hidden)]
pub mod __private {
    pub use core::convert::AsRef;
}
