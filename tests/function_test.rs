//! Single-signature wrapper: every kind of callable it binds.

use std::cell::Cell;
use std::rc::Rc;

use tola_fnany::{Error, Function};

struct Counter {
    hits: Cell<u32>,
}

impl Counter {
    fn bump(&self, by: u32) -> u32 {
        self.hits.set(self.hits.get() + by);
        self.hits.get()
    }

    fn zero() -> u32 {
        0
    }

    fn label(&self, prefix: &str, n: u32) -> String {
        format!("{prefix}{}", self.hits.get() + n)
    }
}

fn double(n: u32) -> u32 {
    n * 2
}

#[test]
fn test_default_is_unbound() {
    let f = Function::<fn(u32) -> u32>::default();
    assert!(!f.is_bound());
    assert_eq!(f.call((1,)), Err(Error::Unbound));
    assert_eq!(Error::Unbound.to_string(), "function is not bound to a callable");
}

#[test]
fn test_free_function() {
    let f = Function::<fn(u32) -> u32>::new(double);
    assert!(f.is_bound());
    assert_eq!(f.call((21,)), Ok(42));
}

#[test]
fn test_associated_function() {
    let f = Function::<fn() -> u32>::new(Counter::zero);
    assert_eq!(f.call(()), Ok(0));
}

#[test]
fn test_method_bound_to_instance() {
    let counter = Counter { hits: Cell::new(1) };
    let f = Function::<fn(u32) -> u32>::bind(Counter::bump, (&counter,));

    assert_eq!(f.call((2,)), Ok(3));
    assert_eq!(counter.hits.get(), 3);
}

#[test]
fn test_method_through_shared_pointer() {
    let counter = Rc::new(Counter { hits: Cell::new(0) });
    let f = Function::<fn(u32) -> u32>::bind(|c: Rc<Counter>, by: u32| c.bump(by), (counter.clone(),));

    f.call((5,)).ok();
    assert_eq!(counter.hits.get(), 5);
    // one clone held by the wrapper
    assert_eq!(Rc::strong_count(&counter), 2);
    drop(f);
    assert_eq!(Rc::strong_count(&counter), 1);
}

#[test]
fn test_several_bound_arguments() {
    let counter = Counter { hits: Cell::new(10) };
    let f = Function::<fn(u32) -> String>::bind(Counter::label, (&counter, "hits="));
    assert_eq!(f.call((1,)), Ok("hits=11".to_string()));
}

#[test]
fn test_closure_with_capture() {
    let base = 100;
    let f = Function::<fn(i32, i32) -> i32>::new(|a, b| base + a - b);
    assert_eq!(f.call((5, 2)), Ok(103));
}

#[test]
fn test_clone_shares_the_callable() {
    let calls = Cell::new(0);
    let f = Function::<fn()>::new(|| calls.set(calls.get() + 1));
    let g = f.clone();

    f.call(()).ok();
    g.call(()).ok();
    assert_eq!(calls.get(), 2);
    assert_eq!(f, g);
}

#[test]
fn test_reassignment_releases_the_callable() {
    let held = Rc::new(());
    let captured = held.clone();
    let mut f = Function::<fn() -> usize>::new(move || Rc::strong_count(&captured));
    assert_eq!(Rc::strong_count(&held), 2);
    assert_eq!(f.call(()), Ok(2));

    f = Function::<fn() -> usize>::new(|| 0);
    assert_eq!(Rc::strong_count(&held), 1);
    assert_eq!(f.call(()), Ok(0));
}
