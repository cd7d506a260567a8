//! # Layer 2: Dispatcher
//!
//! - `list.rs`: recursion over the declared entries (storage, membership, dispatch).
//! - `convert.rs`: moving the active wrapper between two sets.
//! - `returns.rs`: the result union and visitors.
//! - `function_any.rs`: `FunctionAny` itself.

pub mod list;
pub mod convert;
pub mod returns;
pub mod function_any;

pub use list::{SigList, Position, PositionAny, Dispatch};
pub use convert::{Place, PlaceStep, Transfer};
pub use returns::{Returned, Visitor, Visit};
pub use function_any::{FunctionAny, SigSet, SignatureSet, Storage, CallWith, Subset, Overlap};
