//! # Argument convertibility
//!
//! Decides, at build time, whether call arguments can be passed to a
//! signature's parameters.
//!
//! Every type converts to itself. Between distinct types the answer comes
//! from a closed table: the built-in scalar and string types are generated by
//! `define_coercion_table!` (feature `coerce-table`), user types join with
//! `arg_types!`. A pair missing from the table is a build error, not `Absent`.
//!
//! Among the built-ins, `bool`, `char` and every number convert to every
//! number with an `as` cast (`7.5` reaches an `f32` parameter, `5` a `u8`
//! one). `u8` converts to `char`, `char` and `&str` convert to `String`.
//! Nothing converts to `bool`.
//!
//! ```text
//! (A0, A1) : CoerceArgs<(P0, P1)>   Accepts = A0→P0 AND A1→P1
//! (A0,)    : CoerceArgs<(P0, P1)>   Accepts = Absent (arity)
//! ```

use crate::primitives::{Absent, Bool, Present};

/// Convertibility of a single value to `T`.
pub trait Coerce<T> {
    type Accepts: Bool;

    /// `Some` exactly when `Accepts` is `Present`.
    fn coerce(self) -> Option<T>;
}

impl<T> Coerce<T> for T {
    type Accepts = Present;

    #[inline(always)]
    fn coerce(self) -> Option<T> {
        Some(self)
    }
}

#[cfg(feature = "coerce-table")]
macros::define_coercion_table!();

/// Element-wise convertibility of an argument tuple to a parameter tuple.
pub trait CoerceArgs<P> {
    type Accepts: Bool;
    fn coerce_args(self) -> Option<P>;
}

macro_rules! impl_coerce_args {
    ($($T:ident => $U:ident),*) => {
        ::paste::paste! {
            #[allow(unused_variables)]
            impl<$($T, $U,)*> CoerceArgs<($($U,)*)> for ($($T,)*)
            where
                $($T: Coerce<$U>,)*
            {
                type Accepts = crate::__all_of!($(<$T as Coerce<$U>>::Accepts),*);

                #[inline(always)]
                fn coerce_args(self) -> Option<($($U,)*)> {
                    let ($([<$T:lower>],)*) = self;
                    Some(($(<$T as Coerce<$U>>::coerce([<$T:lower>])?,)*))
                }
            }
        }
    };
}

impl_coerce_args!();
impl_coerce_args!(T0 => U0);
impl_coerce_args!(T0 => U0, T1 => U1);
impl_coerce_args!(T0 => U0, T1 => U1, T2 => U2);
impl_coerce_args!(T0 => U0, T1 => U1, T2 => U2, T3 => U3);
impl_coerce_args!(T0 => U0, T1 => U1, T2 => U2, T3 => U3, T4 => U4);
impl_coerce_args!(T0 => U0, T1 => U1, T2 => U2, T3 => U3, T4 => U4, T5 => U5);
impl_coerce_args!(T0 => U0, T1 => U1, T2 => U2, T3 => U3, T4 => U4, T5 => U5, T6 => U6);
impl_coerce_args!(T0 => U0, T1 => U1, T2 => U2, T3 => U3, T4 => U4, T5 => U5, T6 => U6, T7 => U7);

// Tuples of different arity never convert.
macro_rules! impl_mismatch {
    ([$($T:ident)*] [$($U:ident)*]) => {
        impl<$($T,)* $($U,)*> CoerceArgs<($($U,)*)> for ($($T,)*) {
            type Accepts = Absent;

            #[inline(always)]
            fn coerce_args(self) -> Option<($($U,)*)> {
                None
            }
        }
    };
}

macro_rules! impl_mismatch_pair {
    ([$hT:tt $hU:tt] [$tT:tt $tU:tt]) => {
        impl_mismatch!($hT $tU);
        impl_mismatch!($tT $hU);
    };
}

macro_rules! for_distinct_arities {
    () => {};
    ($head:tt $(, $tail:tt)*) => {
        $(impl_mismatch_pair!($head $tail);)*
        for_distinct_arities!($($tail),*);
    };
}

for_distinct_arities!(
    [[] []],
    [[T0] [U0]],
    [[T0 T1] [U0 U1]],
    [[T0 T1 T2] [U0 U1 U2]],
    [[T0 T1 T2 T3] [U0 U1 U2 U3]],
    [[T0 T1 T2 T3 T4] [U0 U1 U2 U3 U4]],
    [[T0 T1 T2 T3 T4 T5] [U0 U1 U2 U3 U4 U5]],
    [[T0 T1 T2 T3 T4 T5 T6] [U0 U1 U2 U3 U4 U5 U6]],
    [[T0 T1 T2 T3 T4 T5 T6 T7] [U0 U1 U2 U3 U4 U5 U6 U7]]
);

/// Does `A` convert to `P`? (const form of `CoerceArgs::Accepts`)
pub const fn accepts<A, P>() -> bool
where
    A: CoerceArgs<P>,
{
    <A::Accepts as Bool>::VALUE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity() {
        assert!(accepts::<(i32, f32), (i32, f32)>());
        assert_eq!(CoerceArgs::<(i32, f32)>::coerce_args((7i32, 1.5f32)), Some((7i32, 1.5f32)));
        assert!(accepts::<(), ()>());
    }

    #[test]
    fn test_arity_mismatch() {
        assert!(!accepts::<(i32,), (i32, i32)>());
        assert!(!accepts::<(i32, i32), (i32,)>());
        assert!(!accepts::<(), (i32,)>());
        assert_eq!(CoerceArgs::<(i32, i32)>::coerce_args((1i32,)), None);
    }

    #[cfg(feature = "coerce-table")]
    #[test]
    fn test_arithmetic_casts() {
        assert!(accepts::<(i32, f32), (i64, f64)>());
        assert!(accepts::<(i32, f64), (i32, f32)>());
        assert!(accepts::<(i32,), (u8,)>());
        assert!(accepts::<(bool,), (f32,)>());
        assert_eq!(
            CoerceArgs::<(u8, f32)>::coerce_args((300i32, 7.5f64)),
            Some((44u8, 7.5f32))
        );
        assert_eq!(CoerceArgs::<(f64,)>::coerce_args((true,)), Some((1.0f64,)));
        assert_eq!(CoerceArgs::<(i32,)>::coerce_args((2.9f64,)), Some((2i32,)));
    }

    #[cfg(feature = "coerce-table")]
    #[test]
    fn test_non_arithmetic_pairs() {
        assert!(accepts::<(u8,), (char,)>());
        assert!(accepts::<(&'static str,), (alloc::string::String,)>());
        assert!(!accepts::<(i32,), (bool,)>());
        assert!(!accepts::<(i32,), (char,)>());
        assert!(!accepts::<(i32,), (&'static str,)>());
        assert!(!accepts::<(alloc::string::String,), (&'static str,)>());
        assert_eq!(CoerceArgs::<(bool,)>::coerce_args((1i32,)), None);
    }
}
