//! Built-in argument types and how they convert into each other.
//!
//! - Arithmetic types (`bool`, integers, floats) convert to every integer and
//!   float type with an `as` cast, truncating or rounding on the way.
//! - `char` casts to every integer.
//! - The remaining pairs follow the standard library's `From` impls.

use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::{format_ident, quote};
use syn::Lifetime;

/// Every built-in type taking part in argument conversion.
pub const BUILTINS: &[&str] = &[
    "bool", "char",
    "i8", "i16", "i32", "i64", "i128", "isize",
    "u8", "u16", "u32", "u64", "u128", "usize",
    "f32", "f64",
    "String", "&str",
];

const INTEGERS: &[&str] = &["i8", "i16", "i32", "i64", "i128", "isize", "u8", "u16", "u32", "u64", "u128", "usize"];
const FLOATS: &[&str] = &["f32", "f64"];

const FROM_PAIRS: &[(&str, &[&str])] = &[
    ("char", &["String"]),
    ("u8", &["char"]),
    ("&str", &["String"]),
];

/// How a value of one built-in becomes another.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// Not convertible.
    None,
    /// `<to as From<from>>::from(value)`
    From,
    /// `value as to`
    Cast,
    /// `value as u8 as to` (`bool` to a float)
    CastViaU8,
}

fn is_number(name: &str) -> bool {
    INTEGERS.contains(&name) || FLOATS.contains(&name)
}

/// Conversion from `from` to `to`, two distinct built-ins.
pub fn conversion(from: &str, to: &str) -> Conversion {
    match from {
        _ if is_number(from) && is_number(to) => Conversion::Cast,
        "bool" | "char" if INTEGERS.contains(&to) => Conversion::Cast,
        "bool" if FLOATS.contains(&to) => Conversion::CastViaU8,
        _ if FROM_PAIRS.iter().any(|(src, targets)| *src == from && targets.contains(&to)) => Conversion::From,
        _ => Conversion::None,
    }
}

/// Does the type need the `'a` lifetime of the generated impl?
pub fn borrows(name: &str) -> bool {
    name.starts_with('&')
}

/// Tokens naming a built-in from any crate; `&str` borrows for `'a`.
pub fn builtin_type(name: &str) -> TokenStream2 {
    builtin_type_for(name, &Lifetime::new("'a", Span::call_site()))
}

/// [`builtin_type`] with `&str` borrowing for `lifetime`.
pub fn builtin_type_for(name: &str, lifetime: &Lifetime) -> TokenStream2 {
    match name {
        "String" => quote! { ::tola_fnany::__private::String },
        "&str" => quote! { &#lifetime str },
        other => {
            let ident = format_ident!("{}", other);
            quote! { #ident }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_only_names_builtins() {
        for (from, targets) in FROM_PAIRS {
            assert!(BUILTINS.contains(from), "{from}");
            for to in *targets {
                assert!(BUILTINS.contains(to), "{to}");
                assert_ne!(from, to);
            }
        }
    }

    #[test]
    fn test_arithmetic_casts() {
        assert_eq!(conversion("f64", "f32"), Conversion::Cast);
        assert_eq!(conversion("i32", "u8"), Conversion::Cast);
        assert_eq!(conversion("i32", "f32"), Conversion::Cast);
        assert_eq!(conversion("usize", "u64"), Conversion::Cast);
        assert_eq!(conversion("bool", "i64"), Conversion::Cast);
        assert_eq!(conversion("bool", "f32"), Conversion::CastViaU8);
        assert_eq!(conversion("char", "u32"), Conversion::Cast);
    }

    #[test]
    fn test_from_and_none() {
        assert_eq!(conversion("u8", "char"), Conversion::From);
        assert_eq!(conversion("&str", "String"), Conversion::From);
        assert_eq!(conversion("char", "String"), Conversion::From);
        assert_eq!(conversion("i32", "bool"), Conversion::None);
        assert_eq!(conversion("i32", "char"), Conversion::None);
        assert_eq!(conversion("f32", "char"), Conversion::None);
        assert_eq!(conversion("i32", "String"), Conversion::None);
        assert_eq!(conversion("String", "&str"), Conversion::None);
    }

    #[test]
    fn test_builtin_type() {
        assert_eq!(builtin_type("i32").to_string(), "i32");
        assert_eq!(builtin_type("&str").to_string(), quote! { &'a str }.to_string());
    }
}
