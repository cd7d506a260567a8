//! Argument convertibility: the built-in table and registered user types.

use tola_fnany::coerce::accepts;
use tola_fnany::prelude::*;
use tola_fnany::{Bool, Coerce};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Meters(f64);

#[derive(Debug, Clone, PartialEq)]
struct Label(String);

arg_types!(Meters, Label);

type Measure = sigs![fn(Meters) -> f64, fn(Label, i64) -> String, fn(i32)];

#[test]
fn test_builtin_table() {
    assert!(accepts::<(u8, i16), (u32, f32)>());
    assert!(accepts::<(bool,), (u8,)>());
    assert!(accepts::<(char,), (String,)>());
    assert!(accepts::<(u32,), (i32,)>());
    assert!(accepts::<(f64,), (f32,)>());
    assert!(accepts::<(f32,), (i64,)>());
    assert!(!accepts::<(u32,), (bool,)>());
    assert!(!accepts::<(String,), (&'static str,)>());
}

#[test]
fn test_unsuffixed_literals() {
    type Outs = sigs![fn(i32, f32) -> f32, fn(i32)];
    type Bytes = sigs![fn(u8) -> u8];

    let any = FunctionAny::<Outs>::new(Function::<fn(i32, f32) -> f32>::new(|a, b| a as f32 + b));
    assert_eq!(any.call((5, 7.5)).take::<f32, _>(), Some(12.5));
    assert_eq!(any.call((5, 6)).take::<f32, _>(), Some(11.0));

    let bytes = FunctionAny::<Bytes>::new(Function::<fn(u8) -> u8>::new(|b| b.wrapping_mul(2)));
    assert_eq!(bytes.call((5,)).take::<u8, _>(), Some(10));
    assert_eq!(bytes.call((200,)).take::<u8, _>(), Some(144));
}

#[test]
fn test_user_types_only_accept_themselves() {
    assert!(<<Meters as Coerce<Meters>>::Accepts as Bool>::VALUE);
    assert!(!<<Meters as Coerce<f64>>::Accepts as Bool>::VALUE);
    assert!(!<<f64 as Coerce<Meters>>::Accepts as Bool>::VALUE);
    assert!(!<<Meters as Coerce<Label>>::Accepts as Bool>::VALUE);
    assert!(!<<&'static str as Coerce<Label>>::Accepts as Bool>::VALUE);
}

#[test]
fn test_dispatch_with_user_types() {
    let any = FunctionAny::<Measure>::new(Function::<fn(Meters) -> f64>::new(|m| m.0 * 2.0));

    assert_eq!(any.call((Meters(1.5),)).take::<f64, _>(), Some(3.0));
    assert!(any.call((Label("x".into()), 1i64)).is_no_call());
}

#[test]
fn test_dispatch_mixing_user_and_builtin() {
    let any = FunctionAny::<Measure>::new(Function::<fn(Label, i64) -> String>::new(|label, n| {
        format!("{}{}", label.0, n)
    }));

    // i32 widens to i64
    let result = any.call((Label("n=".into()), 4i32));
    assert_eq!(result.take::<String, _>(), Some("n=4".to_string()));
}

#[test]
fn test_string_parameters() {
    type Texts = sigs![fn(String) -> usize];

    let any = FunctionAny::<Texts>::new(Function::<fn(String) -> usize>::new(|s| s.chars().count()));

    assert_eq!(any.call(("abc",)).take::<usize, _>(), Some(3));
    assert_eq!(any.call(('x',)).take::<usize, _>(), Some(1));
    assert_eq!(any.call((String::from("hello"),)).take::<usize, _>(), Some(5));
}
