//! Type-level boolean logic.
//!
//! Core types: `Present` (true), `Absent` (false), `Bool` trait.

/// Type-level boolean.
pub trait Bool: 'static {
    const VALUE: bool;
    /// Type-level conditional: If<Then, Else> (General Type Selector)
    type If<Then, Else>;

    /// Logical AND
    type And<Other: Bool>: Bool;

    /// Logical OR
    type Or<Other: Bool>: Bool;

    /// Logical NOT
    type Not: Bool;
}

/// Type-level True.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Present;

/// Type-level False.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Absent;

impl Bool for Present {
    const VALUE: bool = true;
    type If<Then, Else> = Then;

    type And<Other: Bool> = Other;
    type Or<Other: Bool> = Present;
    type Not = Absent;
}

impl Bool for Absent {
    const VALUE: bool = false;
    type If<Then, Else> = Else;

    type And<Other: Bool> = Absent;
    type Or<Other: Bool> = Other;
    type Not = Present;
}

/// Fold a comma separated list of `Bool` types with `And`.
///
/// An empty list is `Present`.
#[macro_export]
#[doc(hidden)]
macro_rules! __all_of {
    () => { $crate::primitives::Present };
    ($head:ty $(, $tail:ty)*) => {
        <$head as $crate::primitives::Bool>::And<$crate::__all_of!($($tail),*)>
    };
}

/// Static requirement that a type-level boolean is `Present`.
///
/// `Set` and `Query` only feed the diagnostic.
#[diagnostic::on_unimplemented(
    message = "requirement `{Query}` does not hold for `{Set}`",
    label = "evaluated to `Absent`",
    note = "check that the signature set declares what this operation needs"
)]
pub trait IsTrue<Set: ?Sized, Query: ?Sized> {}

impl<S: ?Sized, Q: ?Sized> IsTrue<S, Q> for Present {}
