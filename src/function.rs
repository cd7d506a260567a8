//! # Single-signature wrapper
//!
//! `Function<'a, S>` owns one callable erased behind the signature `S`.
//!
//! ```ignore
//! // free function or closure
//! let add = Function::<fn(i32, i32) -> i32>::new(|a, b| a + b);
//!
//! // method with its receiver bound as the leading argument
//! let out = Function::<fn(i32, f32)>::bind(Printer::out, (&printer,));
//!
//! assert_eq!(add.call((2, 3)), Ok(5));
//! ```
//!
//! The callable is reference counted so clones share it. A wrapper may be
//! empty; calling it then yields [`Error::Unbound`].

use alloc::rc::Rc;
use core::fmt;

use crate::error::{Error, Result};
use crate::signature::{Params, Ret, Signature};

/// Callable erased to a signature: takes the parameter tuple.
pub type Erased<'a, S> = dyn Fn(Params<S>) -> Ret<S> + 'a;

/// Exclusive holder of one callable of signature `S`.
pub struct Function<'a, S: Signature> {
    inner: Option<Rc<Erased<'a, S>>>,
}

impl<'a, S: Signature> Function<'a, S> {
    /// An unbound wrapper.
    pub const fn empty() -> Self {
        Self { inner: None }
    }

    /// Bind `f` together with leading arguments.
    ///
    /// `bound` is a tuple of up to three values passed in front of the call
    /// arguments on every call, cloned each time. Binding a method together
    /// with `(&receiver,)` is the usual case.
    pub fn bind<F, B>(f: F, bound: B) -> Self
    where
        F: Bind<'a, S, B>,
    {
        Self { inner: Some(f.bind(bound)) }
    }

    /// True when a callable is bound.
    pub fn is_bound(&self) -> bool {
        self.inner.is_some()
    }

    /// Call with exactly the declared parameter types.
    pub fn call(&self, params: Params<S>) -> Result<Ret<S>> {
        let f = self.inner.as_ref().ok_or(Error::Unbound)?;
        Ok(f(params))
    }

    /// Drop the bound callable.
    pub fn clear(&mut self) {
        self.inner = None;
    }

    /// Name of the signature, as the compiler spells it.
    pub fn signature_name() -> &'static str {
        core::any::type_name::<S>()
    }
}

impl<S: Signature> Default for Function<'_, S> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<S: Signature> Clone for Function<'_, S> {
    fn clone(&self) -> Self {
        Self { inner: self.inner.clone() }
    }
}

/// Two wrappers are equal when both are empty or both share the same callable.
impl<S: Signature> PartialEq for Function<'_, S> {
    fn eq(&self, other: &Self) -> bool {
        match (&self.inner, &other.inner) {
            (None, None) => true,
            (Some(a), Some(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl<S: Signature> fmt::Debug for Function<'_, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
            .field("signature", &Self::signature_name())
            .field("bound", &self.is_bound())
            .finish()
    }
}

// =============================================================================
// Binding
// =============================================================================

/// Callables that can be erased to signature `S` after binding `Bound`.
///
/// Implemented for every `Fn(B.., A..) -> R` where `B..` are the bound
/// leading arguments (0 to 3 of them) and `A..` the signature's parameters.
#[diagnostic::on_unimplemented(
    message = "`{Self}` cannot be bound as `{S}` with leading arguments `{Bound}`",
    label = "parameter or return types do not line up with the signature",
    note = "the callable must take the bound arguments first, then exactly the signature's parameters"
)]
pub trait Bind<'a, S: Signature, Bound> {
    fn bind(self, bound: Bound) -> Rc<Erased<'a, S>>;
}

macro_rules! impl_bind {
    ([$($A:ident),*] [$($B:ident),*]) => {
        ::paste::paste! {
            impl<'a, F, R, $($B,)* $($A,)*> Bind<'a, fn($($A),*) -> R, ($($B,)*)> for F
            where
                F: Fn($($B,)* $($A,)*) -> R + 'a,
                $($B: Clone + 'a,)*
            {
                #[allow(unused_variables)]
                fn bind(self, bound: ($($B,)*)) -> Rc<Erased<'a, fn($($A),*) -> R>> {
                    let ($([<$B:lower>],)*) = bound;
                    Rc::new(move |($([<$A:lower>],)*): ($($A,)*)| {
                        self($([<$B:lower>].clone(),)* $([<$A:lower>],)*)
                    })
                }
            }
        }
    };
}

macro_rules! impl_arity {
    ($($A:ident),*) => {
        impl_bind!([$($A),*] []);
        impl_bind!([$($A),*] [B0]);
        impl_bind!([$($A),*] [B0, B1]);
        impl_bind!([$($A),*] [B0, B1, B2]);

        impl<'a, R, $($A,)*> Function<'a, fn($($A),*) -> R> {
            /// Bind a callable taking exactly the signature's parameters.
            pub fn new<F>(f: F) -> Self
            where
                F: Fn($($A),*) -> R + 'a,
            {
                Self::bind(f, ())
            }
        }
    };
}

impl_arity!();
impl_arity!(A0);
impl_arity!(A0, A1);
impl_arity!(A0, A1, A2);
impl_arity!(A0, A1, A2, A3);
impl_arity!(A0, A1, A2, A3, A4);
impl_arity!(A0, A1, A2, A3, A4, A5);
impl_arity!(A0, A1, A2, A3, A4, A5, A6);
impl_arity!(A0, A1, A2, A3, A4, A5, A6, A7);

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;

    struct Counter {
        hits: Cell<u32>,
    }

    impl Counter {
        fn hit(&self, by: u32) -> u32 {
            self.hits.set(self.hits.get() + by);
            self.hits.get()
        }
    }

    fn add(a: i32, b: i32) -> i32 {
        a + b
    }

    #[test]
    fn test_empty() {
        let f = Function::<fn(i32)>::empty();
        assert!(!f.is_bound());
        assert_eq!(f.call((1,)), Err(Error::Unbound));
        assert!(!Function::<fn()>::default().is_bound());
    }

    #[test]
    fn test_free_function() {
        let f = Function::<fn(i32, i32) -> i32>::new(add);
        assert!(f.is_bound());
        assert_eq!(f.call((5, 6)), Ok(11));
    }

    #[test]
    fn test_method_with_receiver() {
        let counter = Counter { hits: Cell::new(0) };
        let f = Function::<fn(u32) -> u32>::bind(Counter::hit, (&counter,));
        assert_eq!(f.call((2,)), Ok(2));
        assert_eq!(f.call((3,)), Ok(5));
        assert_eq!(counter.hits.get(), 5);
    }

    #[test]
    fn test_bound_arguments_are_cloned_per_call() {
        let f = Function::<fn() -> usize>::bind(|s: String, n: usize| s.len() + n, (String::from("abc"), 1usize));
        assert_eq!(f.call(()), Ok(4));
        assert_eq!(f.call(()), Ok(4));
    }

    #[test]
    fn test_clone_shares_callable() {
        let f = Function::<fn() -> u8>::new(|| 1);
        let g = f.clone();
        let h = Function::<fn() -> u8>::new(|| 1);
        assert_eq!(f, g);
        assert_ne!(f, h);
        assert_eq!(Function::<fn() -> u8>::empty(), Function::empty());
    }

    #[test]
    fn test_clear() {
        let mut f = Function::<fn() -> u8>::new(|| 1);
        f.clear();
        assert!(!f.is_bound());
    }
}
