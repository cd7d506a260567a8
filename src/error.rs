//! Runtime errors.
//!
//! Almost every misuse of a signature set is rejected at build time. What is
//! left are the cases that depend on which callable a value holds right now.

use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The wrapper holds no callable.
    #[error("function is not bound to a callable")]
    Unbound,

    /// The active signature is not declared in the target set.
    #[error("signature `{0}` is not declared in the target set")]
    Undeclared(&'static str),
}

pub type Result<T> = core::result::Result<T, Error>;
