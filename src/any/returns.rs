//! The result union of a dispatch and how to read it.
//!
//! A signature set over `fn(i32)`, `fn(i32, f32) -> bool` and `fn() -> &'a A`
//! returns
//!
//! ```text
//! Alt<NoCall, Alt<Void, Alt<bool, Alt<&'a A, End>>>>
//! ```
//!
//! `NoCall` always comes first. Read a value with [`Returned::get`] or
//! [`Returned::take`], or fold every alternative through a [`Visitor`].

use crate::primitives::{Alt, End, Select, Union};
use crate::signature::NoCall;

/// Accessors on a result union.
pub trait Returned: Union {
    /// True when the active signature did not accept the call.
    fn is_no_call(&self) -> bool;

    /// The alternative of type `T`, if populated.
    fn get<T, I>(&self) -> Option<&T>
    where
        Self: Select<T, I>,
    {
        self.select()
    }

    /// Consume the union, keeping the alternative of type `T`.
    fn take<T, I>(self) -> Option<T>
    where
        Self: Select<T, I>,
    {
        self.into_selected()
    }
}

impl<T: Union> Returned for Alt<NoCall, T> {
    fn is_no_call(&self) -> bool {
        matches!(self, Alt::Here(NoCall))
    }
}

/// Handles one alternative of a result union.
///
/// A visitor implements this once per return type of the set, `Void` and
/// `NoCall` included, all with the same `Output`. Blanket impls such as
/// `impl<T: Debug> Visitor<T> for Printer` cover them at once.
pub trait Visitor<T> {
    type Output;

    fn visit(&mut self, value: T) -> Self::Output;
}

/// Fold a union through a visitor producing `O`.
#[diagnostic::on_unimplemented(
    message = "`{V}` cannot visit every alternative of `{Self}`",
    label = "missing `Visitor` impl",
    note = "implement `Visitor<T, Output = {O}>` for each return type, including `Void` and `NoCall`"
)]
pub trait Visit<V, O> {
    fn accept(self, visitor: &mut V) -> O;
}

impl<V, O> Visit<V, O> for End {
    fn accept(self, _: &mut V) -> O {
        match self {}
    }
}

impl<V, O, H, T> Visit<V, O> for Alt<H, T>
where
    V: Visitor<H, Output = O>,
    T: Visit<V, O>,
{
    fn accept(self, visitor: &mut V) -> O {
        match self {
            Alt::Here(value) => visitor.visit(value),
            Alt::There(rest) => rest.accept(visitor),
        }
    }
}
