//! Unit tests for cleanup disposers.

use pagedrop::Cleanup;
use std::cell::Cell;
use std::rc::Rc;

fn counting(counter: &Rc<Cell<u32>>) -> Cleanup {
    let counter = counter.clone();
    Cleanup::new(move || counter.set(counter.get() + 1))
}

#[test]
fn test_dispose_runs_once() {
    let count = Rc::new(Cell::new(0));
    let cleanup = counting(&count);
    assert!(!cleanup.is_disposed());

    cleanup.dispose();
    cleanup.dispose();
    assert_eq!(count.get(), 1);
    assert!(cleanup.is_disposed());
}

#[test]
fn test_clones_share_disposer() {
    let count = Rc::new(Cell::new(0));
    let cleanup = counting(&count);
    let clone = cleanup.clone();

    clone.dispose();
    cleanup.dispose();
    assert_eq!(count.get(), 1);
    assert!(cleanup.is_disposed());
}

#[test]
fn test_combine_disposes_each_in_order() {
    let order = Rc::new(std::cell::RefCell::new(Vec::new()));
    let parts: Vec<Cleanup> = (0..3)
        .map(|i| {
            let order = order.clone();
            Cleanup::new(move || order.borrow_mut().push(i))
        })
        .collect();
    let first = parts[0].clone();

    // A part disposed early is skipped by the combined cleanup
    first.dispose();
    let combined = Cleanup::combine(parts);
    combined.dispose();
    combined.dispose();

    assert_eq!(*order.borrow(), vec![0, 1, 2]);
}

#[test]
fn test_guard_disposes_on_drop() {
    let count = Rc::new(Cell::new(0));
    {
        let _guard = counting(&count).into_guard();
        assert_eq!(count.get(), 0);
    }
    assert_eq!(count.get(), 1);
}

#[test]
fn test_noop_is_already_disposed() {
    let cleanup = Cleanup::noop();
    assert!(cleanup.is_disposed());
    cleanup.dispose();
}

#[test]
fn test_disposer_may_dispose_itself() {
    let slot: Rc<std::cell::RefCell<Option<Cleanup>>> = Rc::default();
    let count = Rc::new(Cell::new(0));
    let cleanup = {
        let slot = slot.clone();
        let count = count.clone();
        Cleanup::new(move || {
            count.set(count.get() + 1);
            if let Some(me) = slot.borrow().as_ref() {
                me.dispose();
            }
        })
    };
    *slot.borrow_mut() = Some(cleanup.clone());

    cleanup.dispose();
    assert_eq!(count.get(), 1);
    slot.borrow_mut().take();
}
