//! `arg_types!` - register user types as call arguments.
//!
//! A registered type converts only to itself. The macro emits the `Absent`
//! impls against every built-in and between the listed types, so call sites
//! mixing them with other argument types resolve.

use proc_macro2::{Span, TokenStream as TokenStream2, TokenTree};
use quote::{quote, ToTokens};
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    Lifetime, Token, Type,
};

use crate::common::{borrows, builtin_type_for, type_key, Conversion, BUILTINS};
use crate::inner::coerce_table::coerce_impl;

pub struct ArgTypesInput {
    pub types: Punctuated<Type, Token![,]>,
}

impl Parse for ArgTypesInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let types = Punctuated::parse_terminated(input)?;
        Ok(ArgTypesInput { types })
    }
}

/// Named lifetimes mentioned by a type, `'static` excluded.
fn lifetimes_in(tokens: TokenStream2, out: &mut Vec<Lifetime>) {
    let mut iter = tokens.into_iter().peekable();
    while let Some(tree) = iter.next() {
        match tree {
            TokenTree::Group(group) => lifetimes_in(group.stream(), out),
            TokenTree::Punct(punct) if punct.as_char() == '\'' => {
                if let Some(TokenTree::Ident(ident)) = iter.peek() {
                    let lifetime = Lifetime::new(&format!("'{ident}"), ident.span());
                    if lifetime.ident != "static" && !out.contains(&lifetime) {
                        out.push(lifetime);
                    }
                    iter.next();
                }
            }
            _ => {}
        }
    }
}

fn generics(lifetimes: &[Lifetime]) -> TokenStream2 {
    if lifetimes.is_empty() {
        quote! {}
    } else {
        quote! { <#(#lifetimes),*> }
    }
}

fn absent_impl(from: &TokenStream2, to: &TokenStream2, lifetimes: &[Lifetime]) -> TokenStream2 {
    coerce_impl(from, to, Conversion::None, &generics(lifetimes))
}

pub fn expand_arg_types(input: ArgTypesInput) -> TokenStream2 {
    let types: Vec<Type> = input.types.into_iter().collect();

    for (i, ty) in types.iter().enumerate() {
        if types[..i].iter().any(|seen| type_key(seen) == type_key(ty)) {
            return syn::Error::new_spanned(ty, format!("`{}` is listed twice", type_key(ty))).to_compile_error();
        }
    }

    let str_lifetime = Lifetime::new("'__fnany_str", Span::call_site());
    let mut impls = Vec::new();

    for ty in &types {
        let mut own = Vec::new();
        lifetimes_in(ty.to_token_stream(), &mut own);
        let user = ty.to_token_stream();

        for builtin in BUILTINS {
            let mut lifetimes = own.clone();
            if borrows(builtin) {
                lifetimes.push(str_lifetime.clone());
            }
            let builtin = builtin_type_for(builtin, &str_lifetime);
            impls.push(absent_impl(&user, &builtin, &lifetimes));
            impls.push(absent_impl(&builtin, &user, &lifetimes));
        }

        for other in &types {
            if type_key(other) == type_key(ty) {
                continue;
            }
            let mut lifetimes = own.clone();
            lifetimes_in(other.to_token_stream(), &mut lifetimes);
            impls.push(absent_impl(&user, &other.to_token_stream(), &lifetimes));
        }
    }

    quote! { #(#impls)* }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn expand(src: &str) -> String {
        expand_arg_types(syn::parse_str(src).unwrap()).to_string()
    }

    #[test]
    fn test_impl_count() {
        let out = expand("Meters, Seconds");
        let per_type = 2 * BUILTINS.len() + 1;
        assert_eq!(out.matches("impl").count(), 2 * per_type);
        assert!(!out.contains(":: tola_fnany :: Present"));
    }

    #[test]
    fn test_lifetimes_collected() {
        let mut out = Vec::new();
        lifetimes_in(quote! { &'a Wrapper<'b, &'static str, 'a> }, &mut out);
        let names: Vec<_> = out.iter().map(|l| l.to_string()).collect();
        assert_eq!(names, vec!["'a", "'b"]);
    }

    #[test]
    fn test_borrowed_user_type() {
        let out = expand("&'a Meters").replace(' ', "");
        assert!(out.contains("impl<'a>::tola_fnany::Coerce<i32>for&'aMeters"));
        assert!(out.contains("impl<'a,'__fnany_str>::tola_fnany::Coerce<&'__fnany_strstr>for&'aMeters"));
    }

    #[test]
    fn test_duplicate_is_rejected() {
        assert!(expand("Meters, Meters").contains("compile_error"));
    }
}
