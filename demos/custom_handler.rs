//! Installing your own exception handler.
//!
//! An exception handler is any `fn(&[u8]) -> usize`. This example shows:
//! 1. A handler that counts and prefixes messages
//! 2. Swapping handlers and restoring the previous one
//! 3. Using the `raise_if!` macros in your own functions

use std::sync::atomic::{AtomicUsize, Ordering};

use liquid::prelude::*;
use liquid::{exception, str};

static RAISED: AtomicUsize = AtomicUsize::new(0);

fn counting(message: &[u8]) -> usize {
    let count = RAISED.fetch_add(1, Ordering::Relaxed) + 1;
    eprintln!("[liquid #{count}] {}", String::from_utf8_lossy(message));
    message.len()
}

fn silent(_message: &[u8]) -> usize {
    0
}

/// Parses a single ASCII digit, raising on anything else.
fn digit(byte: u8) -> Option<u8> {
    raise_if_not!(byte.is_ascii_digit(), None, b"expected an ASCII digit");
    Some(byte - b'0')
}

fn main() {
    println!("Example 1: A counting handler\n");
    let previous = set_handler(Some(counting));
    println!("previous handler installed: {}", previous.is_some());

    let _ = copy(&mut [0u8; 2], b"abc", 3);
    println!("digit(b'7') = {:?}", digit(b'7'));
    println!("digit(b'x') = {:?}", digit(b'x'));
    println!("raise returned {}", raise!("raised by hand"));

    println!("\nExample 2: Temporarily silencing errors\n");
    let counting_handler = set_handler(Some(silent));
    let mut buffer = [0u8; 4];
    println!("copy into 4 bytes: {:?}", str::str_raw_cpy(&mut buffer, 4, b"abcdef", 0));
    println!("raise returned {}", raise!(b"nobody is listening"));
    set_handler(counting_handler);

    println!("\nExample 3: No handler at all\n");
    set_handler(None);
    println!("handler installed: {}", exception::handler().is_some());
    println!("raise returned {}", raise!("dropped"));

    println!("\n{} messages reached the counting handler", RAISED.load(Ordering::Relaxed));
}
