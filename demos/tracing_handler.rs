//! Routing exception messages into `tracing`.
//!
//! Run with `cargo run --example tracing_handler --features tracing`.

use liquid::{array_raw, exception, handlers, str};

fn main() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .init();

    // No handler yet: the raise is dropped, with a trace event.
    exception::raise(b"raised before any handler");

    exception::set_handler(Some(handlers::tracing_error));

    let mut buffer = [0u8; 4];
    let result = array_raw::copy(&mut buffer, b"too long", 8);
    tracing::info!(?result, "copy finished");

    let mut name = [0u32; 3];
    let written = str::cpy(&mut name, 3, &[0x68, 0x69, 0x21], 3);
    tracing::info!(?written, ?name, "wide copy finished");

    exception::raise(&[0xFF, 0xFE, 0x00]);
}
