//! Signature set construction and conversions between sets.

use std::fmt::Debug;

use tola_fnany::prelude::*;

struct Store {
    items: Vec<String>,
}

impl Store {
    fn first(&self) -> &String {
        &self.items[0]
    }

    fn get(&self, i: usize) -> bool {
        i < self.items.len()
    }
}

/// Prints whatever the dispatch produced.
struct Print;

impl<T: Debug> Visitor<T> for Print {
    type Output = ();

    fn visit(&mut self, value: T) {
        println!("  -> {value:?}");
    }
}

type Lookup<'a> = sigs![[fn() -> &'a String], [fn(usize) -> bool, fn() -> &'a String]];
type Wide<'a> = sigs![fn() -> &'a String, fn(usize) -> bool, fn(i32, i32) -> i32];
type Checks = sigs_product!([bool], [(usize,), (u8, u8)]);

fn lookup<'a>(store: &'a Store) -> FunctionAny<'a, Lookup<'a>> {
    FunctionAny::new(Function::<fn() -> &'a String>::bind(Store::first, (store,)))
}

fn main() {
    env_logger::init();

    let store = Store { items: vec!["apple".into(), "pear".into()] };

    println!("Lookup: {} signatures, {} results", FunctionAny::<Lookup>::SIGNATURES, FunctionAny::<Lookup>::RETURNS);
    println!("Checks: {} signatures, {} results", FunctionAny::<Checks>::SIGNATURES, FunctionAny::<Checks>::RETURNS);

    let first = lookup(&store);
    println!("first()");
    first.invoke(&mut Print, ());
    println!("first(1)");
    first.invoke(&mut Print, (1usize,));

    if let Some(item) = first.call(()).take::<&String, _>() {
        println!("same object: {}", std::ptr::eq(item, &store.items[0]));
    }

    // Every Lookup signature is declared in Wide.
    let wide: FunctionAny<Wide> = first.clone().widen();
    println!("widened, active: {:?}", wide.active_signature());

    // Checks and Wide share fn(usize) -> bool.
    let mut check = FunctionAny::<Checks>::new(Function::<fn(usize) -> bool>::bind(Store::get, (&store,)));
    check.invoke(&mut Print, (5usize,));

    match check.narrow::<Wide>() {
        Ok(wide) => println!("narrowed, active: {:?}", wide.active_signature()),
        Err(err) => println!("narrowing failed: {err}"),
    }

    check.set(Function::<fn(u8, u8) -> bool>::new(|a, b| a < b));
    match check.narrow::<Wide>() {
        Ok(wide) => println!("narrowed, active: {:?}", wide.active_signature()),
        Err(err) => println!("narrowing failed: {err}"),
    }
}
