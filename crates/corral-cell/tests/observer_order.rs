//! Integration tests for the notification contract shared by all policy
//! cells: delivery order, late subscription, and cancellation semantics,
//! exercised through the public cell types rather than `Notifier` directly.
//!
//! Validates:
//! 1. Observer order equals write order, for every subscriber.
//! 2. A rejected validated write republishes the retained value in sequence.
//! 3. Late subscribers never see earlier writes.
//! 4. Cancellation stops delivery immediately, including when it happens
//!    inside another subscriber's callback during a publish.

#![forbid(unsafe_code)]

use std::cell::RefCell;
use std::rc::Rc;

use corral_cell::{Clamped, Subscription, Validated};

#[test]
fn every_subscriber_sees_the_full_sequence_in_write_order() {
    let mut cell = Clamped::new(0, 0, 100);

    let first = Rc::new(RefCell::new(Vec::new()));
    let second = Rc::new(RefCell::new(Vec::new()));

    let f = Rc::clone(&first);
    let _sub_a = cell.subscribe(move |v| f.borrow_mut().push(*v));
    let s = Rc::clone(&second);
    let _sub_b = cell.subscribe(move |v| s.borrow_mut().push(*v));

    for write in [5, 150, -3, 42] {
        cell.set(write);
    }

    let expected = vec![5, 100, 0, 42];
    assert_eq!(*first.borrow(), expected);
    assert_eq!(*second.borrow(), expected);
}

#[test]
fn validated_rejection_is_observed_as_the_retained_value() {
    let mut cell = Validated::new(0, |v: &i32| *v >= 0);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = Rc::clone(&seen);
    let _sub = cell.subscribe(move |v| s.borrow_mut().push(*v));

    cell.set(0);
    cell.set(-1);
    cell.set(1);

    assert_eq!(*seen.borrow(), vec![0, 0, 1]);
    assert_eq!(cell.get(), 1);
}

#[test]
fn late_subscriber_only_sees_writes_after_subscription() {
    let mut cell = Clamped::new(0, 0, 100);
    cell.set(10); // A
    cell.set(20); // B

    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = Rc::clone(&seen);
    let _sub = cell.subscribe(move |v| s.borrow_mut().push(*v));

    cell.set(30);
    assert_eq!(*seen.borrow(), vec![30]);
}

#[test]
fn cancelled_subscriber_hears_nothing_further() {
    let mut cell = Clamped::new(0, 0, 100);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = Rc::clone(&seen);
    let sub = cell.subscribe(move |v| s.borrow_mut().push(*v));

    cell.set(1);
    sub.cancel();
    cell.set(2);
    cell.set(3);

    assert_eq!(*seen.borrow(), vec![1]);
}

#[test]
fn cancellation_during_a_publish_is_safe_and_final() {
    let mut cell = Clamped::new(0, 0, 100);

    // First subscriber cancels the second from inside its callback.
    let victim: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
    let victim_seen = Rc::new(RefCell::new(Vec::new()));

    let slot = Rc::clone(&victim);
    let _killer = cell.subscribe(move |_| {
        slot.borrow_mut().take();
    });

    let s = Rc::clone(&victim_seen);
    *victim.borrow_mut() = Some(cell.subscribe(move |v| s.borrow_mut().push(*v)));

    cell.set(1);
    cell.set(2);

    // The victim was cancelled before its first delivery came up.
    assert!(victim_seen.borrow().is_empty());
}

#[test]
fn independent_cells_have_independent_channels() {
    let mut a = Clamped::new(0, 0, 10);
    let mut b = Clamped::new(0, 0, 10);

    let seen = Rc::new(RefCell::new(Vec::new()));
    let s = Rc::clone(&seen);
    let _sub = a.subscribe(move |v| s.borrow_mut().push(*v));

    b.set(9);
    a.set(1);

    assert_eq!(*seen.borrow(), vec![1]);
}
