//! Convertibility table between the built-in argument types.

use proc_macro2::TokenStream as TokenStream2;
use quote::quote;

use crate::common::{borrows, builtin_type, conversion, Conversion, BUILTINS};

/// One `Coerce` impl for an ordered pair of distinct types.
pub fn coerce_impl(from: &TokenStream2, to: &TokenStream2, conversion: Conversion, generics: &TokenStream2) -> TokenStream2 {
    let body = match conversion {
        Conversion::None => None,
        Conversion::From => Some(quote! { <#to as ::core::convert::From<#from>>::from(self) }),
        Conversion::Cast => Some(quote! { self as #to }),
        Conversion::CastViaU8 => Some(quote! { (self as u8) as #to }),
    };

    match body {
        Some(body) => quote! {
            impl #generics ::tola_fnany::Coerce<#to> for #from {
                type Accepts = ::tola_fnany::Present;

                #[inline(always)]
                fn coerce(self) -> ::core::option::Option<#to> {
                    ::core::option::Option::Some(#body)
                }
            }
        },
        None => quote! {
            impl #generics ::tola_fnany::Coerce<#to> for #from {
                type Accepts = ::tola_fnany::Absent;

                #[inline(always)]
                fn coerce(self) -> ::core::option::Option<#to> {
                    ::core::option::Option::None
                }
            }
        },
    }
}

pub fn expand_coercion_table() -> TokenStream2 {
    let mut impls = Vec::new();

    for from in BUILTINS {
        for to in BUILTINS {
            if from == to {
                continue;
            }
            let generics = if borrows(from) || borrows(to) { quote! { <'a> } } else { quote! {} };
            impls.push(coerce_impl(&builtin_type(from), &builtin_type(to), conversion(from, to), &generics));
        }
    }

    quote! { #(#impls)* }
}
