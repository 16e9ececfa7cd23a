//! Shared helpers for tests that observe the process-wide exception handler.
//!
//! The handler slot is global, so every test in a binary that installs a
//! handler or triggers a raise holds the [`serial`] guard for its whole body.

#![allow(dead_code)]

use std::sync::{Mutex, MutexGuard, PoisonError};

use liquid::exception;

static SERIAL: Mutex<()> = Mutex::new(());
static CAPTURED: Mutex<Vec<Vec<u8>>> = Mutex::new(Vec::new());

/// Serializes access to the handler slot and starts from an empty slot and an
/// empty capture log.
pub fn serial() -> MutexGuard<'static, ()> {
    let guard = SERIAL.lock().unwrap_or_else(PoisonError::into_inner);
    exception::set_handler(None);
    captured_mut().clear();
    guard
}

fn captured_mut() -> MutexGuard<'static, Vec<Vec<u8>>> {
    CAPTURED.lock().unwrap_or_else(PoisonError::into_inner)
}

/// A handler that records every message it receives and claims to have
/// consumed all of it.
pub fn capture(message: &[u8]) -> usize {
    captured_mut().push(message.to_vec());
    message.len()
}

/// Returns every message recorded by [`capture`] since the last [`serial`].
pub fn captured() -> Vec<Vec<u8>> {
    captured_mut().clone()
}
