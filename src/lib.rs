#![cfg_attr(not(feature = "std"), no_std)]

//! # tola-fnany
//!
//! A value holding one callable out of a closed set of signatures, with
//! type-level dispatch.
//!
//! ```text
//! sigs![fn(i32, f32), fn(i32), fn() -> &'a A]
//!         |
//!         v
//! FunctionAny<'a, Sigs>  = Empty | Function<fn(i32, f32)> | Function<fn(i32)> | Function<fn() -> &'a A>
//!         |
//!         | call((5, 7.5))
//!         v
//! Alt<NoCall, Alt<Void, Alt<&'a A, End>>>
//! ```
//!
//! ## Architecture
//!
//! ```text
//! +-------------------------------------------------------------------+
//! |  Layer 0: Primitives                                              |
//! |  - Present/Absent, Nibble (X0-XF), identity streams, HList, Alt   |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 1: Signatures                                              |
//! |  - Signature, Decl, Function, Coerce (argument convertibility)    |
//! +-------------------------------------------------------------------+
//!                                |
//!                                v
//! +-------------------------------------------------------------------+
//! |  Layer 2: Dispatcher                                              |
//! |  - FunctionAny, Dispatch, Transfer, Visitor, sigs! / fcall!       |
//! +-------------------------------------------------------------------+
//! ```
//!
//! ## What is checked when
//!
//! - **Build time**: the set is non-empty and deduplicated, a stored wrapper's
//!   signature is declared, call arguments are accepted by some declared
//!   signature, a widening target declares every source signature.
//! - **Run time**: which signature is active. A call the active signature does
//!   not accept yields `NoCall`; a narrowing whose active signature is missing
//!   from the target yields [`Error::Undeclared`].
//!
//! ## Quick Start
//!
//! ```
//! use tola_fnany::prelude::*;
//!
//! fn add(a: i32, b: i32) -> i32 {
//!     a + b
//! }
//!
//! type Sigs = sigs![fn(i32, i32) -> i32, fn(i32)];
//!
//! let any = FunctionAny::<Sigs>::new(Function::<fn(i32, i32) -> i32>::new(add));
//!
//! assert_eq!(any.call((5, 6)).get::<i32, _>(), Some(&11));
//! assert!(any.call((92,)).is_no_call());
//! ```
//!
//! A call no declared signature accepts does not compile:
//!
//! ```compile_fail
//! use tola_fnany::prelude::*;
//!
//! type Sigs = sigs![fn(i32, i32) -> i32, fn(i32)];
//!
//! let any = FunctionAny::<Sigs>::empty();
//! let _ = any.call(("text",));
//! ```

extern crate alloc;

// Allow `::tola_fnany` paths emitted by the macros to work inside the crate itself
extern crate self as tola_fnany;

// Used by the arity macros
pub use paste;

// =============================================================================
// Layer 0: Primitives
// =============================================================================
pub mod primitives;

// =============================================================================
// Layer 1: Signatures
// =============================================================================
pub mod signature;
pub mod error;
pub mod function;
pub mod coerce;

// =============================================================================
// Layer 2: Dispatcher
// =============================================================================
pub mod any;

// fcall!
pub mod syntax_macros;

// =============================================================================
// Re-exports at Crate Root
// =============================================================================

pub use primitives::{Bool, Present, Absent, IsTrue, HNil, HCons, Alt, End, Union, Z, S, HashStream16};
pub use signature::{Signature, Params, Ret, Decl, Entry, Keep, ToVoid, Void, NoCall};
pub use error::{Error, Result};
pub use function::{Function, Bind};
pub use coerce::{Coerce, CoerceArgs};
pub use any::{FunctionAny, SigSet, SignatureSet, Returned, Visitor, Visit};

// Re-export proc-macros
pub use macros::{sigs, sigs_product, arg_types};

#[doc(hidden)]
pub mod __private {
    pub use alloc::string::String;
}

/// Common items for declaring and calling signature sets.
pub mod prelude {
    pub use crate::any::{FunctionAny, Returned, Visitor};
    pub use crate::error::Error;
    pub use crate::function::Function;
    pub use crate::signature::{NoCall, Void};
    pub use macros::{sigs, sigs_product, arg_types};
    pub use crate::fcall;
}
