// Common utilities shared between internal and user-facing macros
//
// This module contains:
// - signature: signature parsing, canonical spelling, identity hashing
// - builtins: built-in argument types and their conversions

mod signature;
mod builtins;

pub use signature::*;
pub use builtins::*;
