//! User-facing macro implementations
//!
//! | Macro | Usage | Purpose |
//! |-------|-------|---------|
//! | `sigs!` | type position | Build a signature set |
//! | `sigs_product!` | type position | Signature set from return types x parameter lists |
//! | `arg_types!` | item position | Register user types as call arguments |

mod sig_set;
mod arg_types;

pub use sig_set::{expand_sigs, ProductInput, SigsInput};
pub use arg_types::{expand_arg_types, ArgTypesInput};
