//! Commonly used items.
//!
//! ```rust
//! use liquid::prelude::*;
//!
//! let mut buffer = [0u8; 4];
//! assert_eq!(copy(&mut buffer, b"abcd", 4), Ok(4));
//! assert_eq!(find_byte(&buffer, b'c'), Some(2));
//! ```

pub use crate::{
    array_raw::{CopyError, compare, copy, find_byte},
    exception::{ExceptionHandler, raise, set_handler},
    raise, raise_if, raise_if_not,
    str::{CodeUnit, WideChar},
};
