//! Depth aliases `D0..=Dn` for identity stream comparison.

use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{parse::Parse, parse::ParseStream, Ident, LitInt};

use crate::common::peano;

pub struct PeanoInput {
    pub max: usize,
}

impl Parse for PeanoInput {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let lit: LitInt = input.parse()?;
        let max = lit.base10_parse::<usize>()?;
        Ok(PeanoInput { max })
    }
}

/// `pub type Dn = S<..Z>;` for every `n` up to `max`.
pub fn expand_peano(input: PeanoInput) -> TokenStream2 {
    let aliases = (0..=input.max).map(|n| {
        let name = Ident::new(&format!("D{n}"), Span::call_site());
        let value = peano(n);
        quote! { pub type #name = #value; }
    });

    quote! { #(#aliases)* }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aliases() {
        let out = expand_peano(PeanoInput { max: 2 }).to_string().replace(' ', "");
        assert!(out.starts_with("pubtypeD0=::tola_fnany::Z;"));
        assert!(out.ends_with("pubtypeD2=::tola_fnany::S<::tola_fnany::S<::tola_fnany::Z>>;"));
    }
}
