//! Recursion over the declared signatures of a set.
//!
//! Each trait walks `HCons<Entry, ..>` and its value-level mirror, the
//! storage coproduct `Alt<Function<'a, Sig>, ..>`, in lock step.

use log::trace;

use crate::coerce::CoerceArgs;
use crate::function::Function;
use crate::primitives::{Absent, Alt, Bool, End, HCons, HNil, Inject, TypeList, Union, S, Z};
use crate::signature::{Decl, Entry, NoCall, Normalize, Normalized, Params, Ret, Signature};

// =============================================================================
// SigList: storage layout
// =============================================================================

/// A type-level list of declared entries and the coproduct storing one
/// wrapper per entry.
pub trait SigList<'a>: TypeList {
    type Storage: Clone + PartialEq + Union;

    fn is_bound(storage: &Self::Storage) -> bool;

    /// Name of the active signature.
    fn name(storage: &Self::Storage) -> &'static str;
}

impl<'a> SigList<'a> for HNil {
    type Storage = End;

    fn is_bound(storage: &End) -> bool {
        match *storage {}
    }

    fn name(storage: &End) -> &'static str {
        match *storage {}
    }
}

impl<'a, E, T> SigList<'a> for HCons<E, T>
where
    E: Entry,
    T: SigList<'a>,
{
    type Storage = Alt<Function<'a, E::Sig>, T::Storage>;

    fn is_bound(storage: &Self::Storage) -> bool {
        match storage {
            Alt::Here(function) => function.is_bound(),
            Alt::There(rest) => T::is_bound(rest),
        }
    }

    fn name(storage: &Self::Storage) -> &'static str {
        match storage {
            Alt::Here(_) => Function::<'a, E::Sig>::signature_name(),
            Alt::There(rest) => T::name(rest),
        }
    }
}

// =============================================================================
// Position: membership by index inference
// =============================================================================

/// `Sig` is declared at position `I`.
///
/// `I` is inferred; it is unique because the list holds no duplicates.
#[diagnostic::on_unimplemented(
    message = "signature `{Sig}` is not declared in this set",
    label = "not a member of the signature set",
    note = "declared signatures: `{Self}`"
)]
pub trait Position<'a, Sig: Signature, I>: SigList<'a> {
    fn wrap(function: Function<'a, Sig>) -> Self::Storage;
    fn holds(storage: &Self::Storage) -> bool;
}

impl<'a, Sig, Norm, At, Id, T> Position<'a, Sig, Z> for HCons<Decl<Sig, Norm, At, Id>, T>
where
    Sig: Signature,
    Decl<Sig, Norm, At, Id>: Entry<Sig = Sig>,
    T: SigList<'a>,
{
    fn wrap(function: Function<'a, Sig>) -> Self::Storage {
        Alt::Here(function)
    }

    fn holds(storage: &Self::Storage) -> bool {
        matches!(storage, Alt::Here(_))
    }
}

impl<'a, Sig, E, T, I> Position<'a, Sig, S<I>> for HCons<E, T>
where
    Sig: Signature,
    E: Entry,
    T: Position<'a, Sig, I>,
{
    fn wrap(function: Function<'a, Sig>) -> Self::Storage {
        Alt::There(T::wrap(function))
    }

    fn holds(storage: &Self::Storage) -> bool {
        match storage {
            Alt::Here(_) => false,
            Alt::There(rest) => T::holds(rest),
        }
    }
}

/// Every signature of the tuple `Sigs` is declared (positions `Is`).
pub trait PositionAny<'a, Sigs, Is>: SigList<'a> {
    fn holds_any(storage: &Self::Storage) -> bool;
}

macro_rules! impl_position_any {
    ($($Sig:ident $I:ident),+) => {
        impl<'a, L, $($Sig, $I,)+> PositionAny<'a, ($($Sig,)+), ($($I,)+)> for L
        where
            $($Sig: Signature, L: Position<'a, $Sig, $I>,)+
        {
            fn holds_any(storage: &Self::Storage) -> bool {
                false $(|| <L as Position<'a, $Sig, $I>>::holds(storage))+
            }
        }
    };
}

impl_position_any!(S0 I0);
impl_position_any!(S0 I0, S1 I1);
impl_position_any!(S0 I0, S1 I1, S2 I2);
impl_position_any!(S0 I0, S1 I1, S2 I2, S3 I3);

// =============================================================================
// Dispatch: calling the active wrapper
// =============================================================================

/// Call the active wrapper with arguments `A`, producing the result union `U`.
///
/// `Accepts` is `Present` iff some declared signature accepts `A`.
pub trait Dispatch<'a, A, U>: SigList<'a> {
    type Accepts: Bool;

    fn dispatch(storage: &Self::Storage, args: A) -> U;
}

impl<'a, A, U> Dispatch<'a, A, U> for HNil {
    type Accepts = Absent;

    fn dispatch(storage: &End, _args: A) -> U {
        match *storage {}
    }
}

impl<'a, A, U, E, T> Dispatch<'a, A, U> for HCons<E, T>
where
    E: Entry,
    A: CoerceArgs<Params<E::Sig>>,
    U: Inject<NoCall, Z> + Inject<Normalized<E>, E::At>,
    T: Dispatch<'a, A, U>,
{
    type Accepts = <<A as CoerceArgs<Params<E::Sig>>>::Accepts as Bool>::Or<T::Accepts>;

    fn dispatch(storage: &Self::Storage, args: A) -> U {
        let function = match storage {
            Alt::Here(function) => function,
            Alt::There(rest) => return T::dispatch(rest, args),
        };

        if !<<A as CoerceArgs<Params<E::Sig>>>::Accepts as Bool>::VALUE {
            trace!(
                "active signature `{}` does not accept `{}`",
                Function::<'a, E::Sig>::signature_name(),
                core::any::type_name::<A>()
            );
            return <U as Inject<NoCall, Z>>::inject(NoCall);
        }

        match <A as CoerceArgs<Params<E::Sig>>>::coerce_args(args).map(|params| function.call(params)) {
            Some(Ok(ret)) => {
                let ret = <E::Norm as Normalize<Ret<E::Sig>>>::normalize(ret);
                <U as Inject<Normalized<E>, E::At>>::inject(ret)
            }
            Some(Err(_)) | None => <U as Inject<NoCall, Z>>::inject(NoCall),
        }
    }
}
