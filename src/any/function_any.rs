//! # Dispatcher over a closed set of signatures
//!
//! ```ignore
//! type Sigs = sigs![fn(i32, f32), fn(i32)];
//!
//! let any = FunctionAny::<Sigs>::new(Function::<fn(i32, f32)>::bind(A::out, (&a,)));
//! assert_eq!(any.call((5, 7.5)).get::<Void, _>(), Some(&Void));
//! assert!(any.call((92,)).is_no_call());
//! ```
//!
//! The active signature is picked at run time; everything else is decided
//! when the program is built:
//!
//! | Operation            | Build-time requirement                          | Run-time outcome          |
//! |----------------------|-------------------------------------------------|---------------------------|
//! | `new` / `set`        | signature declared in the set                   | always succeeds           |
//! | `call` / `invoke`    | some declared signature accepts the arguments   | result or `NoCall`        |
//! | `widen::<M>`         | every declared signature is declared in `M`     | always succeeds           |
//! | `narrow::<M>`        | the sets share a signature                      | `Err` if active not in `M`|
//! | `assign_from`        | the sets share a signature                      | `Err` if active not in set|

use core::fmt;
use core::marker::PhantomData;

use log::debug;

use crate::error::{Error, Result};
use crate::function::Function;
use crate::primitives::{HCons, Inject, IsTrue, TypeList, Union, Z};
use crate::signature::{NoCall, Signature};

use super::convert::Transfer;
use super::list::{Dispatch, Position, PositionAny, SigList};
use super::returns::Visit;

// =============================================================================
// Signature sets
// =============================================================================

/// A declared signature set, as produced by `sigs!`.
///
/// `Sigs` lists the deduplicated entries, `Returns` is the result union.
pub struct SigSet<Sigs, Returns>(PhantomData<(Sigs, Returns)>);

/// A non-empty signature set usable by [`FunctionAny`].
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a non-empty signature set",
    label = "expected a type built by `sigs![..]`",
    note = "declare at least one signature, e.g. `sigs![fn(i32) -> bool]`"
)]
pub trait SignatureSet<'a> {
    type Sigs: SigList<'a>;
    type Returns: Union + Inject<NoCall, Z>;
}

impl<'a, E, T, R> SignatureSet<'a> for SigSet<HCons<E, T>, R>
where
    HCons<E, T>: SigList<'a>,
    R: Union + Inject<NoCall, Z>,
{
    type Sigs = HCons<E, T>;
    type Returns = R;
}

/// Storage coproduct of a set.
pub type Storage<'a, L> = <<L as SignatureSet<'a>>::Sigs as SigList<'a>>::Storage;

// Queries named in build-time diagnostics.

/// Some declared signature accepts arguments `A`.
pub struct CallWith<A>(PhantomData<A>);

/// Every declared signature is declared in `M`.
pub struct Subset<M>(PhantomData<M>);

/// At least one declared signature is declared in `M`.
pub struct Overlap<M>(PhantomData<M>);

// =============================================================================
// FunctionAny
// =============================================================================

/// Holds at most one wrapper, for one of the signatures declared by `L`.
///
/// # Build-time errors
///
/// Storing a wrapper whose signature is not declared:
///
/// ```compile_fail
/// use tola_fnany::prelude::*;
///
/// type Sigs = sigs![fn(i32), fn(i32, f32)];
/// let _ = FunctionAny::<Sigs>::new(Function::<fn(u8)>::new(|_| {}));
/// ```
///
/// Widening into a set that misses one of the source signatures:
///
/// ```compile_fail
/// use tola_fnany::prelude::*;
///
/// type Sigs = sigs![fn(i32), fn(i32, f32)];
/// let _ = FunctionAny::<Sigs>::empty().widen::<sigs![fn(i32)]>();
/// ```
///
/// Narrowing into a set that shares no signature:
///
/// ```compile_fail
/// use tola_fnany::prelude::*;
///
/// type Sigs = sigs![fn(i32), fn(i32, f32)];
/// let _ = FunctionAny::<Sigs>::empty().narrow::<sigs![fn() -> bool]>();
/// ```
///
/// An empty set, or a type that is not a signature:
///
/// ```compile_fail
/// use tola_fnany::prelude::*;
///
/// let _ = FunctionAny::<sigs![]>::empty();
/// ```
///
/// ```compile_fail
/// use tola_fnany::prelude::*;
///
/// let _ = FunctionAny::<sigs![fn(i32), String]>::empty();
/// ```
///
/// A reference without a named lifetime:
///
/// ```compile_fail
/// use tola_fnany::prelude::*;
///
/// type Lengths = sigs![fn(&str) -> usize];
/// let _ = FunctionAny::<Lengths>::empty();
/// ```
pub struct FunctionAny<'a, L: SignatureSet<'a>> {
    storage: Option<Storage<'a, L>>,
}

impl<'a, L: SignatureSet<'a>> FunctionAny<'a, L> {
    /// Number of declared signatures, duplicates removed.
    pub const SIGNATURES: usize = <L::Sigs as TypeList>::LEN;

    /// Number of result alternatives, `NoCall` included.
    pub const RETURNS: usize = <L::Returns as Union>::LEN;

    pub const fn empty() -> Self {
        Self { storage: None }
    }

    /// Activate the alternative for `function`'s signature.
    pub fn new<S, I>(function: Function<'a, S>) -> Self
    where
        S: Signature,
        L::Sigs: Position<'a, S, I>,
    {
        Self { storage: Some(<L::Sigs as Position<'a, S, I>>::wrap(function)) }
    }

    /// Replace the whole state with `function`.
    pub fn set<S, I>(&mut self, function: Function<'a, S>)
    where
        S: Signature,
        L::Sigs: Position<'a, S, I>,
    {
        self.storage = Some(<L::Sigs as Position<'a, S, I>>::wrap(function));
    }

    /// Back to the empty state.
    pub fn clear(&mut self) {
        self.storage = None;
    }

    /// True when the active wrapper is bound.
    pub fn is_bound(&self) -> bool {
        self.storage.as_ref().is_some_and(<L::Sigs as SigList<'a>>::is_bound)
    }

    /// True when `S` is the active signature.
    pub fn holds<S, I>(&self) -> bool
    where
        S: Signature,
        L::Sigs: Position<'a, S, I>,
    {
        self.storage.as_ref().is_some_and(<L::Sigs as Position<'a, S, I>>::holds)
    }

    /// True when one of the tuple `Sigs` is the active signature.
    pub fn holds_any<Sigs, Is>(&self) -> bool
    where
        L::Sigs: PositionAny<'a, Sigs, Is>,
    {
        self.storage.as_ref().is_some_and(<L::Sigs as PositionAny<'a, Sigs, Is>>::holds_any)
    }

    /// Name of the active signature.
    pub fn active_signature(&self) -> Option<&'static str> {
        self.storage.as_ref().map(<L::Sigs as SigList<'a>>::name)
    }

    /// Call the active wrapper.
    ///
    /// `args` must be accepted by at least one declared signature, otherwise
    /// the call does not compile. The result holds the active signature's
    /// normalized return value, or `NoCall` when the active signature does
    /// not accept `args` or nothing is bound.
    pub fn call<A>(&self, args: A) -> L::Returns
    where
        L::Sigs: Dispatch<'a, A, L::Returns>,
        <L::Sigs as Dispatch<'a, A, L::Returns>>::Accepts: IsTrue<L, CallWith<A>>,
    {
        match &self.storage {
            Some(storage) => <L::Sigs as Dispatch<'a, A, L::Returns>>::dispatch(storage, args),
            None => <L::Returns as Inject<NoCall, Z>>::inject(NoCall),
        }
    }

    /// [`call`](Self::call), then hand the populated alternative to `visitor`.
    pub fn invoke<A, V, O>(&self, visitor: &mut V, args: A) -> O
    where
        L::Sigs: Dispatch<'a, A, L::Returns>,
        <L::Sigs as Dispatch<'a, A, L::Returns>>::Accepts: IsTrue<L, CallWith<A>>,
        L::Returns: Visit<V, O>,
    {
        self.call(args).accept(visitor)
    }

    /// Convert into a dispatcher over a superset `M`.
    pub fn widen<M>(self) -> FunctionAny<'a, M>
    where
        M: SignatureSet<'a>,
        L::Sigs: Transfer<'a, M::Sigs>,
        <L::Sigs as Transfer<'a, M::Sigs>>::AllFound: IsTrue<L, Subset<M>>,
    {
        FunctionAny { storage: self.storage.and_then(<L::Sigs as Transfer<'a, M::Sigs>>::transfer) }
    }

    /// Convert into a dispatcher over an overlapping set `M`.
    ///
    /// Fails when the active signature is not declared in `M`. An empty
    /// dispatcher converts to an empty one.
    pub fn narrow<M>(&self) -> Result<FunctionAny<'a, M>>
    where
        M: SignatureSet<'a>,
        L::Sigs: Transfer<'a, M::Sigs>,
        <L::Sigs as Transfer<'a, M::Sigs>>::AnyFound: IsTrue<L, Overlap<M>>,
    {
        let Some(storage) = &self.storage else {
            return Ok(FunctionAny::empty());
        };

        match <L::Sigs as Transfer<'a, M::Sigs>>::transfer(storage.clone()) {
            Some(storage) => Ok(FunctionAny { storage: Some(storage) }),
            None => {
                let name = <L::Sigs as SigList<'a>>::name(storage);
                debug!("narrowing rejected: `{}` is not declared in `{}`", name, core::any::type_name::<M>());
                Err(Error::Undeclared(name))
            }
        }
    }

    /// Take over the state of a dispatcher over an overlapping set `M`.
    ///
    /// On error `self` is left untouched. Nothing is written when both
    /// already hold the same wrapper.
    pub fn assign_from<M>(&mut self, other: &FunctionAny<'a, M>) -> Result<()>
    where
        M: SignatureSet<'a>,
        M::Sigs: Transfer<'a, L::Sigs>,
        <M::Sigs as Transfer<'a, L::Sigs>>::AnyFound: IsTrue<M, Overlap<L>>,
    {
        let converted = other.narrow::<L>()?;
        if converted.storage != self.storage {
            self.storage = converted.storage;
        }
        Ok(())
    }
}

impl<'a, L: SignatureSet<'a>> Default for FunctionAny<'a, L> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<'a, L: SignatureSet<'a>> Clone for FunctionAny<'a, L> {
    fn clone(&self) -> Self {
        Self { storage: self.storage.clone() }
    }
}

/// Equal when both are empty, or hold the same signature with the same wrapper state.
impl<'a, L: SignatureSet<'a>> PartialEq for FunctionAny<'a, L> {
    fn eq(&self, other: &Self) -> bool {
        self.storage == other.storage
    }
}

impl<'a, L: SignatureSet<'a>> fmt::Debug for FunctionAny<'a, L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FunctionAny")
            .field("active", &self.active_signature())
            .field("bound", &self.is_bound())
            .finish()
    }
}
