// Macros used by tola-fnany itself
//
// - peano: depth aliases D0..Dn
// - coerce_table: `Coerce` impls between the built-in argument types

pub mod peano;
pub mod coerce_table;
