//! # Signatures and declared entries
//!
//! A signature is a bare function pointer type used purely as a tag:
//! `fn(i32, f32) -> bool` stands for "takes `(i32, f32)`, returns `bool`".
//! It is never instantiated.
//!
//! A signature set does not store bare signatures. Each member is a [`Decl`],
//! which the `sigs!` macro fills with everything the dispatcher needs to know
//! at build time:
//!
//! ```text
//! Decl<Sig, Norm, At, Id>
//!       |     |    |   |
//!       |     |    |   +-- 64-bit identity hash stream (cross-set matching)
//!       |     |    +------ position of the normalized return type in the result union
//!       |     +----------- return normalizer (Keep, or ToVoid for `()`)
//!       +----------------- the signature itself
//! ```

use core::marker::PhantomData;
use crate::primitives::HashStream;

// =============================================================================
// Signature
// =============================================================================

/// A call shape: ordered parameter types plus a return type.
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a function signature",
    label = "expected a bare `fn(..) -> R` type",
    note = "signatures are written as function pointer types, e.g. `fn(i32, f32) -> bool`"
)]
pub trait Signature {
    /// Parameter types as a tuple.
    type Params;
    type Ret;
    const ARITY: usize;
}

macro_rules! count {
    () => { 0 };
    ($head:ident $($tail:ident)*) => { 1 + count!($($tail)*) };
}

macro_rules! impl_signature {
    ($($A:ident),*) => {
        impl<R, $($A,)*> Signature for fn($($A),*) -> R {
            type Params = ($($A,)*);
            type Ret = R;
            const ARITY: usize = count!($($A)*);
        }
    };
}

impl_signature!();
impl_signature!(A0);
impl_signature!(A0, A1);
impl_signature!(A0, A1, A2);
impl_signature!(A0, A1, A2, A3);
impl_signature!(A0, A1, A2, A3, A4);
impl_signature!(A0, A1, A2, A3, A4, A5);
impl_signature!(A0, A1, A2, A3, A4, A5, A6);
impl_signature!(A0, A1, A2, A3, A4, A5, A6, A7);

pub type Params<S> = <S as Signature>::Params;
pub type Ret<S> = <S as Signature>::Ret;

// =============================================================================
// Special return markers
// =============================================================================

/// Result alternative for a successful call to a signature returning `()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Void;

/// Result alternative for a call the active signature did not accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct NoCall;

// =============================================================================
// Return normalization
// =============================================================================

/// Maps a signature's return value into its alternative of the result union.
pub trait Normalize<R> {
    type Out;
    fn normalize(ret: R) -> Self::Out;
}

/// Return values stored as they are.
///
/// Reference returns (`&'a T`) also use `Keep`: the union stores the borrow
/// itself, a non-owning handle to the object the callable returned. It stays
/// valid as long as that object does.
#[derive(Debug)]
pub struct Keep;

/// `()` becomes [`Void`].
#[derive(Debug)]
pub struct ToVoid;

impl<R> Normalize<R> for Keep {
    type Out = R;

    #[inline(always)]
    fn normalize(ret: R) -> R {
        ret
    }
}

impl Normalize<()> for ToVoid {
    type Out = Void;

    #[inline(always)]
    fn normalize(_: ()) -> Void {
        Void
    }
}

// =============================================================================
// Declared entries
// =============================================================================

/// A member of a signature set.
pub trait Entry {
    type Sig: Signature;
    type Norm: Normalize<Ret<Self::Sig>>;
    /// Position of `Normalized<Self>` in the result union.
    type At;
    type Id: HashStream;
}

/// Concrete [`Entry`], produced by `sigs!`.
pub struct Decl<Sig, Norm, At, Id>(PhantomData<(Sig, Norm, At, Id)>);

impl<Sig, Norm, At, Id> Entry for Decl<Sig, Norm, At, Id>
where
    Sig: Signature,
    Norm: Normalize<Ret<Sig>>,
    Id: HashStream,
{
    type Sig = Sig;
    type Norm = Norm;
    type At = At;
    type Id = Id;
}

/// Normalized return type of an entry.
pub type Normalized<E> = <<E as Entry>::Norm as Normalize<Ret<<E as Entry>::Sig>>>::Out;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity() {
        assert_eq!(<fn() as Signature>::ARITY, 0);
        assert_eq!(<fn(i32, f32) as Signature>::ARITY, 2);
        assert_eq!(<fn(u8, u8, u8, u8, u8, u8, u8, u8) -> u8 as Signature>::ARITY, 8);
    }

    #[test]
    fn test_params_and_ret() {
        let params: Params<fn(i32, &'static str) -> bool> = (1, "x");
        let ret: Ret<fn(i32, &'static str) -> bool> = true;
        assert_eq!(params, (1, "x"));
        assert!(ret);
    }

    #[test]
    fn test_normalize() {
        assert_eq!(<ToVoid as Normalize<()>>::normalize(()), Void);
        assert_eq!(<Keep as Normalize<u8>>::normalize(4), 4);

        let value = 10;
        let handle = <Keep as Normalize<&i32>>::normalize(&value);
        assert!(core::ptr::eq(handle, &value));
    }
}
