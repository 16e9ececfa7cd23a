mod common;

use std::sync::atomic::{AtomicUsize, Ordering};

use common::{capture, captured, serial};
use liquid::exception::{self, ExceptionHandler};

static FIRST_CALLS: AtomicUsize = AtomicUsize::new(0);
static SECOND_CALLS: AtomicUsize = AtomicUsize::new(0);

fn first(message: &[u8]) -> usize {
    FIRST_CALLS.fetch_add(1, Ordering::SeqCst);
    message.len()
}

fn second(_message: &[u8]) -> usize {
    SECOND_CALLS.fetch_add(1, Ordering::SeqCst);
    42
}

fn same_handler(a: Option<ExceptionHandler>, b: ExceptionHandler) -> bool {
    a.is_some_and(|a| core::ptr::fn_addr_eq(a, b))
}

#[test]
fn raise_without_handler_returns_zero() {
    let _guard = serial();

    assert!(exception::handler().is_none());
    assert_eq!(exception::raise(b"nobody is listening"), 0);
    assert_eq!(exception::raise(b""), 0);
}

#[test]
fn raise_routes_exact_message_once() {
    let _guard = serial();
    exception::set_handler(Some(capture));

    let consumed = exception::raise(b"Test message");

    assert_eq!(consumed, 12);
    assert_eq!(captured(), vec![b"Test message".to_vec()]);
}

#[test]
fn raise_preserves_embedded_nul_and_length() {
    let _guard = serial();
    exception::set_handler(Some(capture));

    exception::raise(b"before\0after");

    let messages = captured();
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].len(), 12);
    assert_eq!(messages[0], b"before\0after");
}

#[test]
fn raise_returns_handler_result() {
    let _guard = serial();
    exception::set_handler(Some(second));

    let before = SECOND_CALLS.load(Ordering::SeqCst);
    assert_eq!(exception::raise(b"ignored"), 42);
    assert_eq!(SECOND_CALLS.load(Ordering::SeqCst), before + 1);
}

#[test]
fn set_handler_returns_previous() {
    let _guard = serial();

    assert!(exception::set_handler(Some(first)).is_none());

    let previous = exception::set_handler(Some(second));
    assert!(same_handler(previous, first));

    let previous = exception::set_handler(None);
    assert!(same_handler(previous, second));

    assert!(exception::set_handler(None).is_none());
}

#[test]
fn handler_does_not_replace() {
    let _guard = serial();
    exception::set_handler(Some(first));

    assert!(same_handler(exception::handler(), first));
    assert!(same_handler(exception::handler(), first));
}

#[test]
fn each_raise_calls_the_current_handler() {
    let _guard = serial();
    let first_before = FIRST_CALLS.load(Ordering::SeqCst);
    let second_before = SECOND_CALLS.load(Ordering::SeqCst);

    exception::set_handler(Some(first));
    exception::raise(b"one");
    exception::raise(b"two");
    exception::set_handler(Some(second));
    exception::raise(b"three");

    assert_eq!(FIRST_CALLS.load(Ordering::SeqCst), first_before + 2);
    assert_eq!(SECOND_CALLS.load(Ordering::SeqCst), second_before + 1);
}

fn reentrant(message: &[u8]) -> usize {
    // Swap ourselves out before raising again, so the nested raise reaches
    // `capture` instead of recursing.
    exception::set_handler(Some(capture));
    exception::raise(message) + 1
}

#[test]
fn handler_may_raise_and_replace_itself() {
    let _guard = serial();
    exception::set_handler(Some(reentrant));

    assert_eq!(exception::raise(b"nested"), 7);
    assert_eq!(captured(), vec![b"nested".to_vec()]);
    assert!(same_handler(exception::handler(), capture));
}

#[test]
fn raise_macros() {
    let _guard = serial();
    exception::set_handler(Some(capture));

    fn checked(value: i32) -> Option<i32> {
        liquid::raise_if!(value < 0, None, "value must not be negative");
        liquid::raise_if_not!(value < 100, None, b"value must be below 100");
        Some(value)
    }

    assert_eq!(liquid::raise!("direct"), 6);
    assert_eq!(checked(5), Some(5));
    assert_eq!(checked(-1), None);
    assert_eq!(checked(100), None);

    assert_eq!(
        captured(),
        vec![
            b"direct".to_vec(),
            b"value must not be negative".to_vec(),
            b"value must be below 100".to_vec(),
        ]
    );
}

#[test]
fn slot_is_shared_across_threads() {
    let _guard = serial();
    exception::set_handler(Some(capture));

    std::thread::spawn(|| {
        assert_eq!(exception::raise(b"from another thread"), 19);
    })
    .join()
    .unwrap();

    assert_eq!(captured(), vec![b"from another thread".to_vec()]);
}
