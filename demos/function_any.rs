//! A list of dispatchers holding different kinds of callables.
//!
//! Every entry is called twice, once with no arguments and once with
//! `(5, 6)`; only the entries whose active signature accepts the arguments
//! run. Set `RUST_LOG=trace` to see the missed dispatches.

use tola_fnany::prelude::*;

struct A;

impl A {
    fn out(&self, v1: i32, v2: f32) {
        println!("{v1} {v2}");
    }

    fn out2(&self, v1: i32) {
        println!("{v1}");
    }

    fn moo() {
        println!("MOOO");
    }
}

fn add(v1: i32, v2: i32) {
    println!("{v1} + {v2} = {}", v1 + v2);
}

type Sigs = sigs![fn(i32, i32), fn(i32, f32), fn()];

fn main() {
    env_logger::init();

    let local = String::from("the world");
    let hello_world = |s: &str| println!("{local} says {s}");

    let a = A;

    let mut list: Vec<FunctionAny<Sigs>> = Vec::new();

    list.push(FunctionAny::new(Function::<fn(i32, f32)>::bind(A::out, (&a,))));
    show(list[0].call((5, 7.5)));

    list.push(FunctionAny::new(Function::<fn()>::new(A::moo)));
    show(fcall!(list[1]));

    list.push(FunctionAny::new(Function::<fn()>::bind(A::out2, (&a, 92))));
    show(fcall!(list[2]));

    list.push(FunctionAny::new(Function::<fn(i32, i32)>::new(add)));
    show(fcall!(list[3], 5, 6));

    list.push(FunctionAny::new(Function::<fn()>::bind(hello_world, ("boo hoo",))));
    show(fcall!(list[4]));

    println!();

    for any in &list {
        show(any.call(()));
        show(any.call((5, 6)));
    }
}

fn show<R: Returned>(result: R) {
    if result.is_no_call() {
        println!("(no call)");
    }
}
