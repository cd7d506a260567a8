//! Moving the active wrapper between two signature sets.
//!
//! Entries of different sets are matched by identity hash stream, not by
//! position, so the two lists may declare their signatures in any order.
//!
//! ```text
//! source: [fn(i32), fn(i32, f32)]         target: [fn(i32, f32), fn(), fn(i32)]
//!             \________________________________/                    |
//!                       \______________________________________________/
//! ```

use crate::function::Function;
use crate::primitives::{Absent, Alt, Bool, DefaultMaxDepth, End, HCons, HNil, Present, SameId, StreamEq};
use crate::signature::Entry;

use super::list::SigList;

// =============================================================================
// Place: one wrapper into a target list
// =============================================================================

/// Build the target storage for a wrapper of entry `E`.
///
/// `None` when the target does not declare `E`'s signature.
pub trait Place<'a, E: Entry>: SigList<'a> {
    type Found: Bool;

    fn place(function: Function<'a, E::Sig>) -> Option<Self::Storage>;
}

impl<'a, E: Entry> Place<'a, E> for HNil {
    type Found = Absent;

    fn place(_: Function<'a, E::Sig>) -> Option<End> {
        None
    }
}

impl<'a, E, H, T> Place<'a, E> for HCons<H, T>
where
    E: Entry,
    H: Entry,
    H::Id: StreamEq<E::Id, DefaultMaxDepth>,
    SameId<H::Id, E::Id>: PlaceStep<'a, E, H, T>,
    T: Place<'a, E>,
{
    type Found = <SameId<H::Id, E::Id> as Bool>::Or<T::Found>;

    fn place(function: Function<'a, E::Sig>) -> Option<Self::Storage> {
        <SameId<H::Id, E::Id> as PlaceStep<'a, E, H, T>>::step(function)
    }
}

/// Selected by whether the head `H` has `E`'s identity.
pub trait PlaceStep<'a, E: Entry, H: Entry, T: SigList<'a>> {
    fn step(function: Function<'a, E::Sig>) -> Option<Alt<Function<'a, H::Sig>, T::Storage>>;
}

impl<'a, E, H, T> PlaceStep<'a, E, H, T> for Present
where
    E: Entry,
    H: Entry<Sig = E::Sig>,
    T: SigList<'a>,
{
    fn step(function: Function<'a, E::Sig>) -> Option<Alt<Function<'a, H::Sig>, T::Storage>> {
        Some(Alt::Here(function))
    }
}

impl<'a, E, H, T> PlaceStep<'a, E, H, T> for Absent
where
    E: Entry,
    H: Entry,
    T: Place<'a, E>,
{
    fn step(function: Function<'a, E::Sig>) -> Option<Alt<Function<'a, H::Sig>, T::Storage>> {
        T::place(function).map(Alt::There)
    }
}

// =============================================================================
// Transfer: a whole source storage into a target list
// =============================================================================

/// Move the active wrapper of a `Self` storage into a `D` storage.
///
/// `AllFound`: every source entry is declared in `D` (transfer never fails).
/// `AnyFound`: at least one is (transfer may succeed).
pub trait Transfer<'a, D: SigList<'a>>: SigList<'a> {
    type AllFound: Bool;
    type AnyFound: Bool;

    fn transfer(storage: Self::Storage) -> Option<D::Storage>;
}

impl<'a, D: SigList<'a>> Transfer<'a, D> for HNil {
    type AllFound = Present;
    type AnyFound = Absent;

    fn transfer(storage: End) -> Option<D::Storage> {
        match storage {}
    }
}

impl<'a, D, E, T> Transfer<'a, D> for HCons<E, T>
where
    D: Place<'a, E>,
    E: Entry,
    T: Transfer<'a, D>,
{
    type AllFound = <D::Found as Bool>::And<T::AllFound>;
    type AnyFound = <D::Found as Bool>::Or<T::AnyFound>;

    fn transfer(storage: Self::Storage) -> Option<D::Storage> {
        match storage {
            Alt::Here(function) => D::place(function),
            Alt::There(rest) => T::transfer(rest),
        }
    }
}
