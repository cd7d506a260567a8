//! # Layer 0: Primitives
//!
//! Basic building blocks for signature sets:
//! - `bool.rs`: Type-level boolean logic (Present/Absent).
//! - `nibble.rs`: Type-level 4-bit values (X0-XF).
//! - `stream.rs`: Identity hash streams and Peano numbers.
//! - `list.rs`: Type-level lists and coproducts.

pub mod bool;
pub mod nibble;
pub mod stream;
pub mod list;

// Re-export key types at this level
pub use bool::{Bool, Present, Absent, IsTrue};
pub use nibble::{Nibble, NibbleEq, X0, X1, X2, X3, X4, X5, X6, X7, X8, X9, XA, XB, XC, XD, XE, XF};
pub use stream::{HashStream, HashStream16, StreamEq, SameId, DefaultMaxDepth, Peano, Z, S};
pub use list::{HNil, HCons, TypeList, End, Alt, Union, Inject, Select};
