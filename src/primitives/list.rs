//! Type-level lists and their value-level counterpart, the coproduct.
//!
//! - `HNil` / `HCons<H, T>`: a list of types, never instantiated.
//! - `End` / `Alt<H, T>`: a value holding exactly one of the listed types.
//!
//! Positions are Peano numbers: `Z` is the head, `S<I>` is position `I` of the tail.

use core::marker::PhantomData;
use super::stream::{Z, S};

// =============================================================================
// HList
// =============================================================================

/// HList terminator
#[derive(Debug)]
pub struct HNil;

/// HList cons cell
pub struct HCons<H, T>(PhantomData<(H, T)>);

/// Length of a type-level list.
pub trait TypeList {
    const LEN: usize;
}

impl TypeList for HNil {
    const LEN: usize = 0;
}

impl<H, T: TypeList> TypeList for HCons<H, T> {
    const LEN: usize = 1 + T::LEN;
}

/// Build an HList type: `hlist![A, B]` is `HCons<A, HCons<B, HNil>>`.
#[macro_export]
macro_rules! hlist {
    () => { $crate::primitives::HNil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::primitives::HCons<$head, $crate::hlist![$($tail),*]>
    };
}

// =============================================================================
// Coproduct
// =============================================================================

/// Uninhabited terminator of a coproduct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum End {}

/// One alternative of a coproduct: either the head type or something in the tail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Alt<H, T> {
    Here(H),
    There(T),
}

/// Number of alternatives of a coproduct.
pub trait Union: Sized {
    const LEN: usize;

    /// Position of the populated alternative.
    fn index(&self) -> usize;
}

impl Union for End {
    const LEN: usize = 0;

    fn index(&self) -> usize {
        match *self {}
    }
}

impl<H, T: Union> Union for Alt<H, T> {
    const LEN: usize = 1 + T::LEN;

    fn index(&self) -> usize {
        match self {
            Alt::Here(_) => 0,
            Alt::There(rest) => 1 + rest.index(),
        }
    }
}

/// Build a coproduct value at position `I`.
pub trait Inject<T, I> {
    fn inject(value: T) -> Self;
}

impl<T, Tail> Inject<T, Z> for Alt<T, Tail> {
    #[inline(always)]
    fn inject(value: T) -> Self {
        Alt::Here(value)
    }
}

impl<H, Tail, T, I> Inject<T, S<I>> for Alt<H, Tail>
where
    Tail: Inject<T, I>,
{
    #[inline(always)]
    fn inject(value: T) -> Self {
        Alt::There(Tail::inject(value))
    }
}

/// Read the alternative of type `T` (at inferred position `I`).
pub trait Select<T, I>: Sized {
    fn select(&self) -> Option<&T>;
    fn into_selected(self) -> Option<T>;
}

impl<T, Tail> Select<T, Z> for Alt<T, Tail> {
    fn select(&self) -> Option<&T> {
        match self {
            Alt::Here(value) => Some(value),
            Alt::There(_) => None,
        }
    }

    fn into_selected(self) -> Option<T> {
        match self {
            Alt::Here(value) => Some(value),
            Alt::There(_) => None,
        }
    }
}

impl<H, Tail, T, I> Select<T, S<I>> for Alt<H, Tail>
where
    Tail: Select<T, I>,
{
    fn select(&self) -> Option<&T> {
        match self {
            Alt::Here(_) => None,
            Alt::There(rest) => rest.select(),
        }
    }

    fn into_selected(self) -> Option<T> {
        match self {
            Alt::Here(_) => None,
            Alt::There(rest) => rest.into_selected(),
        }
    }
}
