//! Procedural macros for tola-fnany signature sets
//!
//! | Macro | Target | Purpose |
//! |-------|--------|---------|
//! | `sigs![]` | type | Build a deduplicated signature set |
//! | `sigs_product!()` | type | Every return type paired with every parameter list |
//! | `arg_types!()` | items | Register user types as call arguments |
//!
//! ## Example
//!
//! ```ignore
//! type Sigs = sigs![fn(i32, f32), fn(i32), fn(i32) -> bool];
//! type Grid = sigs_product!([(), bool], [(i32,), (i32, f32)]);
//!
//! struct Meters(f64);
//! arg_types!(Meters);
//! ```

use proc_macro::TokenStream;
use syn::parse_macro_input;

// =============================================================================
// Module Declarations (Three-tier: inner / common / user)
// =============================================================================

mod inner;
mod common;
mod user;

// =============================================================================
// Internal Macros (inner/)
// =============================================================================

/// Generate depth aliases D0..Dn.
///
/// # Usage
/// ```ignore
/// peano!(16);  // Generates D0 = Z, D1 = S<Z>, ..., D16
/// ```
#[proc_macro]
pub fn peano(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as inner::peano::PeanoInput);
    inner::peano::expand_peano(input).into()
}

/// Generate the `Coerce` impls between every ordered pair of distinct
/// built-in argument types (`Present` for casts and `From` pairs, else `Absent`).
#[proc_macro]
pub fn define_coercion_table(_input: TokenStream) -> TokenStream {
    inner::coerce_table::expand_coercion_table().into()
}

// =============================================================================
// User-facing Macros (user/)
// =============================================================================

/// Build a signature set type.
///
/// Duplicates are dropped (first occurrence wins); bracketed groups are
/// concatenated in place.
///
/// # Usage
/// ```ignore
/// type Sigs = sigs![fn(i32, f32), fn(i32)];
///
/// // Groups
/// type Both = sigs![[fn(i32), fn(u8)], [fn(u8), fn() -> bool]];
///
/// // Borrowed returns need a named lifetime
/// type Getters<'a> = sigs![fn() -> &'a str, fn(usize) -> &'a str];
/// ```
#[proc_macro]
pub fn sigs(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::SigsInput);
    user::expand_sigs(&input.flatten()).into()
}

/// Build a signature set from return types and parameter lists.
///
/// # Usage
/// ```ignore
/// // fn(i32), fn(i32, f32), fn(i32) -> bool, fn(i32, f32) -> bool
/// type Grid = sigs_product!([(), bool], [(i32,), (i32, f32)]);
/// ```
#[proc_macro]
pub fn sigs_product(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::ProductInput);
    user::expand_sigs(&input.signatures()).into()
}

/// Register user types as call arguments.
///
/// Every type converts to itself; the listed types convert to nothing else.
/// List all user argument types of a crate in one invocation.
///
/// # Usage
/// ```ignore
/// struct Meters(f64);
/// struct Seconds(f64);
///
/// arg_types!(Meters, Seconds, &'a Meters);
/// ```
#[proc_macro]
pub fn arg_types(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as user::ArgTypesInput);
    user::expand_arg_types(input).into()
}
