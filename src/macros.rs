/// Raise a message through the installed exception handler.
///
/// Accepts anything that can be viewed as bytes (`&str`, `&[u8]`, byte string
/// literals) and evaluates to the value returned by
/// [`exception::raise`](crate::exception::raise).
///
/// # Examples
///
/// ```rust,standalone_crate
/// use liquid::{exception, raise};
///
/// fn count(message: &[u8]) -> usize {
///     message.len()
/// }
///
/// exception::set_handler(Some(count));
/// assert_eq!(raise!("disk on fire"), 12);
/// assert_eq!(raise!(b"bytes work too"), 14);
/// ```
#[macro_export]
macro_rules! raise {
    ($message:expr $(,)?) => {
        $crate::exception::raise($crate::__private::AsRef::<[u8]>::as_ref($message))
    };
}

/// Raise a message and return early if a condition holds.
///
/// `raise_if!(condition, value, message)` raises `message` through the
/// installed exception handler and then returns `value` from the enclosing
/// function when `condition` is true. Otherwise it does nothing.
///
/// # Examples
///
/// ```rust
/// use liquid::raise_if;
///
/// fn halve(value: u32) -> Option<u32> {
///     raise_if!(value % 2 != 0, None, "value must be even");
///     Some(value / 2)
/// }
///
/// assert_eq!(halve(8), Some(4));
/// assert_eq!(halve(7), None);
/// ```
#[macro_export]
macro_rules! raise_if {
    ($condition:expr, $value:expr, $message:expr $(,)?) => {
        if $condition {
            $crate::raise!($message);
            return $value;
        }
    };
}

/// Raise a message and return early unless a condition holds.
///
/// The inverse of [`raise_if!`]: `raise_if_not!(condition, value, message)`
/// raises and returns `value` when `condition` is false.
///
/// # Examples
///
/// ```rust
/// use liquid::raise_if_not;
///
/// fn first(bytes: &[u8]) -> Result<u8, ()> {
///     raise_if_not!(!bytes.is_empty(), Err(()), "input must not be empty");
///     Ok(bytes[0])
/// }
///
/// assert_eq!(first(b"abc"), Ok(b'a'));
/// assert_eq!(first(b""), Err(()));
/// ```
#[macro_export]
macro_rules! raise_if_not {
    ($condition:expr, $value:expr, $message:expr $(,)?) => {
        $crate::raise_if!(!($condition), $value, $message)
    };
}
