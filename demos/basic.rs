//! Basic introduction to liquid.
//!
//! This example demonstrates the fundamental concepts:
//! 1. Installing an exception handler with `set_handler`
//! 2. Copying and searching byte ranges with `array_raw`
//! 3. Copying strings into fixed-size buffers with `str_cpy`
//! 4. Reading the platform's last error message

use liquid::prelude::*;
use liquid::{handlers, os, str};

/// Copies each part into `buffer` back to back and returns the total length.
fn join(buffer: &mut [u8], parts: &[&[u8]]) -> Result<usize, CopyError> {
    let mut offset = 0;
    for part in parts {
        offset += copy(&mut buffer[offset..], part, part.len())?;
    }
    Ok(offset)
}

fn main() {
    println!("Example 1: Raw copies\n");
    set_handler(Some(handlers::stderr));

    let mut path = [0u8; 32];
    match join(&mut path, &[b"/usr", b"/local", b"/bin"]) {
        Ok(length) => {
            let path = &path[..length];
            println!("joined: {}", String::from_utf8_lossy(path));
            println!("last '/' at byte {:?}", path.iter().rposition(|&b| b == b'/'));
            println!("first 'l' at byte {:?}", find_byte(path, b'l'));
        }
        Err(error) => println!("join failed: {error}"),
    }

    println!("\nExample 2: A copy that does not fit\n");
    // The handler prints the message to stderr, the caller still gets an error.
    let mut small = [0u8; 8];
    match join(&mut small, &[b"/usr", b"/local", b"/bin"]) {
        Ok(length) => println!("unexpectedly fit in {length} bytes"),
        Err(error) => println!("join failed: {error}"),
    }

    println!("\nExample 3: Comparing ranges\n");
    let expected = b"liquid 0.3.0";
    let actual = b"liquid 0.2.9";
    match compare(expected, actual) {
        Some(index) => println!("versions differ at byte {index}"),
        None => println!("versions match"),
    }

    println!("\nExample 4: Truncating string copies\n");
    let mut name = [0u8; 8];
    let name_len = name.len();
    match str::str_cpy(&mut name, name_len, b"a rather long name", 0) {
        Ok(written) => println!(
            "wrote {written} bytes: {:?}",
            String::from_utf8_lossy(&name[..str::len(&name)])
        ),
        Err(error) => println!("copy failed: {error}"),
    }

    println!("\nExample 5: Platform error messages\n");
    let _ = std::fs::File::open("/definitely/not/here");
    let mut message = [0u8; 128];
    let length = os::last_error_message(&mut message);
    println!(
        "last error {}: {}",
        os::last_error_code(),
        String::from_utf8_lossy(&message[..length])
    );
}
