// Host-side tests for the resize debouncer.
// The main crate is wasm-only, so we include the pure-Rust module directly.

#![allow(dead_code)]
mod debounce {
    include!("../src/core/debounce.rs");
}

use debounce::{DebouncePoll, Debouncer};

#[test]
fn due_once_after_the_quiet_period() {
    let mut d = Debouncer::new(150.0);
    assert_eq!(d.poll(0.0), DebouncePoll::Idle);
    assert_eq!(d.trigger(1000.0), 150.0);
    assert_eq!(d.poll(1100.0), DebouncePoll::Wait(50.0));
    assert_eq!(d.poll(1150.0), DebouncePoll::Due);
    assert_eq!(d.poll(1200.0), DebouncePoll::Idle, "due only once per burst");
}

#[test]
fn burst_of_ten_events_is_due_once() {
    let mut d = Debouncer::new(150.0);
    let mut due = 0;
    for i in 0..10 {
        let now = i as f64 * 5.0;
        d.trigger(now);
        // An earlier timer expiring mid-burst must not run the action.
        if d.poll(now) == DebouncePoll::Due {
            due += 1;
        }
    }
    for now in (50..=400).step_by(10) {
        if d.poll(now as f64) == DebouncePoll::Due {
            due += 1;
            assert_eq!(now, 200, "due at {now}");
        }
    }
    assert_eq!(due, 1);
}

#[test]
fn retrigger_pushes_the_deadline_out() {
    let mut d = Debouncer::new(200.0);
    d.trigger(0.0);
    d.trigger(150.0);
    assert_eq!(d.poll(200.0), DebouncePoll::Wait(150.0));
    assert_eq!(d.poll(350.0), DebouncePoll::Due);
}

#[test]
fn early_poll_keeps_the_action_pending() {
    // A coarse clock can read behind the timer that woke us up; the pending
    // action must survive until a later poll.
    let mut d = Debouncer::new(150.0);
    d.trigger(1000.0);
    let DebouncePoll::Wait(remaining) = d.poll(1100.0) else {
        panic!("expected a wait");
    };
    assert!(remaining > 0.0 && remaining <= 150.0);
    assert_eq!(d.poll(1100.0 + remaining), DebouncePoll::Due);
}

#[test]
fn negative_delay_is_treated_as_zero() {
    let mut d = Debouncer::new(-5.0);
    assert_eq!(d.trigger(10.0), 0.0);
    assert_eq!(d.poll(10.0), DebouncePoll::Due);
}
