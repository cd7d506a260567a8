//! Signature set construction
//!
//! - `sigs!` - deduplicated set from signatures and bracketed groups
//! - `sigs_product!` - every return type paired with every parameter list
//!
//! Output shape for `sigs![fn(i32, f32), fn(i32) -> bool, fn(i32)]`:
//!
//! ```text
//! SigSet<
//!     HCons<Decl<fn(i32, f32) -> (), ToVoid, S<Z>,    HashStream16<..>>,
//!     HCons<Decl<fn(i32) -> bool,    Keep,   S<S<Z>>, HashStream16<..>>,
//!     HNil>>,
//!     Alt<NoCall, Alt<Void, Alt<bool, End>>>,
//! >
//! ```

use std::collections::HashSet;

use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{
    bracketed,
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    token, Token, Type,
};

use crate::common::{identity_nibbles, parse_sig, peano, Sig};

// =============================================================================
// sigs! Input Parser
// =============================================================================

/// One item of `sigs!`: a signature, or a bracketed group of items.
pub enum SigItem {
    Sig(Type),
    Group(Vec<SigItem>),
}

impl Parse for SigItem {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.peek(token::Bracket) {
            let content;
            bracketed!(content in input);
            let items = Punctuated::<SigItem, Token![,]>::parse_terminated(&content)?;
            Ok(SigItem::Group(items.into_iter().collect()))
        } else {
            Ok(SigItem::Sig(input.parse()?))
        }
    }
}

pub struct SigsInput {
    pub items: Vec<SigItem>,
}

impl Parse for SigsInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let items = Punctuated::<SigItem, Token![,]>::parse_terminated(input)?;
        Ok(SigsInput { items: items.into_iter().collect() })
    }
}

impl SigsInput {
    /// Signatures in declaration order, groups concatenated.
    pub fn flatten(self) -> Vec<Type> {
        fn walk(items: Vec<SigItem>, out: &mut Vec<Type>) {
            for item in items {
                match item {
                    SigItem::Sig(ty) => out.push(ty),
                    SigItem::Group(items) => walk(items, out),
                }
            }
        }

        let mut out = Vec::new();
        walk(self.items, &mut out);
        out
    }
}

// =============================================================================
// sigs_product! Input Parser
// =============================================================================

/// `[R1, R2, ..], [(A, B), (C,), ..]`
pub struct ProductInput {
    pub returns: Vec<Type>,
    pub params: Vec<Vec<Type>>,
}

impl Parse for ProductInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let content;
        bracketed!(content in input);
        let returns = Punctuated::<Type, Token![,]>::parse_terminated(&content)?;

        input.parse::<Token![,]>()?;

        let content;
        bracketed!(content in input);
        let lists = Punctuated::<Type, Token![,]>::parse_terminated(&content)?;
        let _ = input.parse::<Option<Token![,]>>()?;

        let params = lists
            .into_iter()
            .map(|list| match list {
                Type::Tuple(tuple) => Ok(tuple.elems.into_iter().collect()),
                Type::Paren(paren) => Ok(vec![*paren.elem]),
                other => Err(syn::Error::new_spanned(
                    &other,
                    "expected a parenthesized parameter list, e.g. `(i32, f32)` or `()`",
                )),
            })
            .collect::<syn::Result<Vec<Vec<Type>>>>()?;

        Ok(ProductInput { returns: returns.into_iter().collect(), params })
    }
}

impl ProductInput {
    /// `fn(params) -> ret` for every return type, then every parameter list.
    pub fn signatures(&self) -> Vec<Type> {
        let mut out = Vec::new();
        for ret in &self.returns {
            for params in &self.params {
                out.push(syn::parse_quote! { fn(#(#params),*) -> #ret });
            }
        }
        out
    }
}

// =============================================================================
// Set building
// =============================================================================

/// Parse, validate and deduplicate (first occurrence wins).
pub fn collect_sigs(types: &[Type]) -> syn::Result<Vec<Sig>> {
    if types.is_empty() {
        return Err(syn::Error::new(
            Span::call_site(),
            "a signature set needs at least one signature\n\
             \n\
             Declare the call shapes the value may hold, e.g. `sigs![fn(i32), fn(i32, f32) -> bool]`.",
        ));
    }

    let mut seen = HashSet::new();
    let mut sigs = Vec::new();
    for ty in types {
        let sig = parse_sig(ty)?;
        if seen.insert(sig.canonical.clone()) {
            sigs.push(sig);
        }
    }
    Ok(sigs)
}

/// Normalized return type of a signature and its dedup key.
fn normalized_return(sig: &Sig) -> (String, TokenStream2) {
    if sig.returns_unit() {
        ("Void".to_string(), quote! { ::tola_fnany::Void })
    } else {
        let output = &sig.output;
        (sig.output_key.clone(), quote! { #output })
    }
}

/// Build the `SigSet<..>` type for deduplicated signatures.
pub fn build_sig_set(sigs: &[Sig]) -> TokenStream2 {
    // Position 0 of the result union is NoCall; a declared `NoCall` return shares it.
    let mut returns: Vec<(String, TokenStream2)> = Vec::new();
    let mut entries = Vec::new();

    for sig in sigs {
        let (key, ty) = normalized_return(sig);
        let at = if key == "NoCall" {
            0
        } else {
            match returns.iter().position(|(seen, _)| *seen == key) {
                Some(i) => i + 1,
                None => {
                    returns.push((key, ty));
                    returns.len()
                }
            }
        };

        let sig_ty = sig.to_type();
        let norm = if sig.returns_unit() {
            quote! { ::tola_fnany::ToVoid }
        } else {
            quote! { ::tola_fnany::Keep }
        };
        let at = peano(at);
        let nibbles = identity_nibbles(&sig.canonical);

        entries.push(quote! {
            ::tola_fnany::Decl<#sig_ty, #norm, #at, ::tola_fnany::HashStream16<#(#nibbles),*>>
        });
    }

    let mut list = quote! { ::tola_fnany::HNil };
    for entry in entries.iter().rev() {
        list = quote! { ::tola_fnany::HCons<#entry, #list> };
    }

    let mut union = quote! { ::tola_fnany::End };
    for (_, ty) in returns.iter().rev() {
        union = quote! { ::tola_fnany::Alt<#ty, #union> };
    }
    union = quote! { ::tola_fnany::Alt<::tola_fnany::NoCall, #union> };

    quote! { ::tola_fnany::SigSet<#list, #union> }
}

pub fn expand_sigs(types: &[Type]) -> TokenStream2 {
    match collect_sigs(types) {
        Ok(sigs) => build_sig_set(&sigs),
        Err(err) => err.to_compile_error(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn flat(src: &str) -> Vec<Type> {
        syn::parse_str::<SigsInput>(src).unwrap().flatten()
    }

    fn canonicals(src: &str) -> Vec<String> {
        collect_sigs(&flat(src))
            .unwrap()
            .into_iter()
            .map(|sig| sig.canonical)
            .collect()
    }

    #[test]
    fn test_dedup_keeps_first() {
        assert_eq!(
            canonicals("fn(i32, f32), fn(i32), fn(i32, f32) -> (), fn(i32)"),
            vec!["fn(i32,f32)->()", "fn(i32)->()"]
        );
    }

    #[test]
    fn test_groups_concatenate() {
        assert_eq!(
            canonicals("[fn(i32), fn(u8)], fn() -> bool, [[fn(u8)], fn(char)]"),
            vec!["fn(i32)->()", "fn(u8)->()", "fn()->bool", "fn(char)->()"]
        );
    }

    #[test]
    fn test_empty_set_is_rejected() {
        assert!(collect_sigs(&flat("")).is_err());
        assert!(collect_sigs(&flat("[], []")).is_err());
    }

    #[test]
    fn test_non_signature_is_rejected() {
        let err = collect_sigs(&flat("fn(i32), String")).err().unwrap();
        assert!(err.to_string().contains("`String` is not a function signature"));
    }

    #[test]
    fn test_return_union() {
        let sigs = collect_sigs(&flat("fn(i32), fn(i32, f32) -> bool, fn(u8), fn() -> bool")).unwrap();
        let out = build_sig_set(&sigs).to_string().replace(' ', "");
        assert!(out.ends_with(
            "::tola_fnany::Alt<::tola_fnany::NoCall,::tola_fnany::Alt<::tola_fnany::Void,::tola_fnany::Alt<bool,::tola_fnany::End>>>>"
        ));
        assert_eq!(out.matches("::tola_fnany::Decl<").count(), 4);
        assert_eq!(out.matches("::tola_fnany::ToVoid").count(), 2);
    }

    #[test]
    fn test_dedup_sees_through_paths() {
        assert_eq!(
            canonicals("fn(String) -> usize, fn(std::string::String) -> usize, fn(::alloc::string::String) -> core::primitive::usize"),
            vec!["fn(String)->usize"]
        );
        assert_eq!(canonicals("fn((i32)), fn(i32) -> ()"), vec!["fn(i32)->()"]);
    }

    #[test]
    fn test_returns_dedup_sees_through_paths() {
        let sigs = collect_sigs(&flat("fn() -> String, fn(u8) -> std::string::String")).unwrap();
        let out = build_sig_set(&sigs).to_string().replace(' ', "");
        assert!(out.ends_with("::tola_fnany::Alt<::tola_fnany::NoCall,::tola_fnany::Alt<String,::tola_fnany::End>>>"));
    }

    #[test]
    fn test_declared_no_call_shares_position_zero() {
        let sigs = collect_sigs(&flat("fn() -> NoCall, fn(u8) -> tola_fnany::NoCall, fn(i32)")).unwrap();
        let out = build_sig_set(&sigs).to_string().replace(' ', "");
        assert_eq!(out.matches("::tola_fnany::NoCall").count(), 1);
        assert!(out.ends_with("::tola_fnany::Alt<::tola_fnany::NoCall,::tola_fnany::Alt<::tola_fnany::Void,::tola_fnany::End>>>"));
        assert_eq!(out.matches("::tola_fnany::Z,::tola_fnany::HashStream16").count(), 2);
    }

    #[test]
    fn test_product() {
        let input: ProductInput = syn::parse_str("[(), bool], [(i32, f32), (i32), ()]").unwrap();
        let sigs = collect_sigs(&input.signatures()).unwrap();
        let names: Vec<_> = sigs.iter().map(|sig| sig.canonical.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "fn(i32,f32)->()",
                "fn(i32)->()",
                "fn()->()",
                "fn(i32,f32)->bool",
                "fn(i32)->bool",
                "fn()->bool",
            ]
        );
    }
}
