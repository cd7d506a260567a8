//! Signature parsing, canonical spelling and identity hashing.
//!
//! Two signatures are the same iff their canonical strings are equal:
//! parameter types and return type, token by token, whitespace removed,
//! a missing return written as `()`. Before spelling, paths that name a
//! prelude type or a primitive are shortened (`std::string::String` is
//! `String`, `core::primitive::u8` is `u8`) and parentheses are dropped.

use proc_macro2::TokenStream as TokenStream2;
use quote::{quote, ToTokens};
use syn::punctuated::Punctuated;
use syn::{GenericArgument, Lifetime, Path, PathArguments, ReturnType, Type, TypeBareFn};

/// Highest supported arity (matches the `Signature` impls).
pub const MAX_ARITY: usize = 8;

/// A parsed `fn(..) -> R` signature.
#[derive(Clone)]
pub struct Sig {
    pub inputs: Vec<Type>,
    pub output: Type,
    pub canonical: String,
    /// Canonical spelling of `output`.
    pub output_key: String,
}

impl Sig {
    /// `fn(A, B) -> R`, always with an explicit return type.
    pub fn to_type(&self) -> TokenStream2 {
        let inputs = &self.inputs;
        let output = &self.output;
        quote! { fn(#(#inputs),*) -> #output }
    }

    pub fn returns_unit(&self) -> bool {
        is_unit(&self.output)
    }
}

/// Whitespace-free token spelling of a type.
pub fn type_key(ty: &Type) -> String {
    ty.to_token_stream().to_string().replace(' ', "")
}

pub fn is_unit(ty: &Type) -> bool {
    matches!(unwrap_groups(ty), Type::Tuple(tuple) if tuple.elems.is_empty())
}

// =============================================================================
// Canonical spelling
// =============================================================================

const PRIMITIVES: &[&str] = &[
    "bool", "char", "str",
    "i8", "i16", "i32", "i64", "i128", "isize",
    "u8", "u16", "u32", "u64", "u128", "usize",
    "f32", "f64",
];

/// `(crates, module, name)`: `<crate>::<module>::<name>` is the prelude `name`.
const PRELUDE: &[(&[&str], &str, &str)] = &[
    (&["std", "alloc"], "string", "String"),
    (&["std", "alloc"], "vec", "Vec"),
    (&["std", "alloc"], "boxed", "Box"),
    (&["std", "core"], "option", "Option"),
    (&["std", "core"], "result", "Result"),
];

/// Markers of this crate, spelled without their path.
const MARKERS: &[&str] = &["Void", "NoCall"];

fn is_short_form(idents: &[String]) -> bool {
    match idents {
        [krate, module, name] => {
            (matches!(krate.as_str(), "std" | "core") && module == "primitive" && PRIMITIVES.contains(&name.as_str()))
                || PRELUDE
                    .iter()
                    .any(|(crates, m, n)| crates.contains(&krate.as_str()) && *m == module.as_str() && *n == name.as_str())
                || (krate == "tola_fnany" && (module == "signature" || module == "prelude") && MARKERS.contains(&name.as_str()))
        }
        [krate, name] => krate == "tola_fnany" && MARKERS.contains(&name.as_str()),
        _ => false,
    }
}

fn canonicalize_path(path: &mut Path) {
    let idents: Vec<String> = path.segments.iter().map(|seg| seg.ident.to_string()).collect();
    if is_short_form(&idents) {
        if let Some(last) = path.segments.pop() {
            path.leading_colon = None;
            path.segments = Punctuated::new();
            path.segments.push(last.into_value());
        }
    }

    for seg in path.segments.iter_mut() {
        match &mut seg.arguments {
            PathArguments::AngleBracketed(args) => {
                for arg in args.args.iter_mut() {
                    if let GenericArgument::Type(ty) = arg {
                        canonicalize(ty);
                    }
                }
            }
            PathArguments::Parenthesized(args) => {
                args.inputs.iter_mut().for_each(canonicalize);
                if let ReturnType::Type(_, ty) = &mut args.output {
                    canonicalize(ty);
                }
            }
            PathArguments::None => {}
        }
    }
}

/// Rewrite `ty` into its canonical form, in place.
pub fn canonicalize(ty: &mut Type) {
    if let Type::Group(_) | Type::Paren(_) = ty {
        *ty = unwrap_groups(ty).clone();
    }

    match ty {
        Type::Path(path) => {
            if let Some(qself) = &mut path.qself {
                canonicalize(&mut qself.ty);
            }
            canonicalize_path(&mut path.path);
        }
        Type::Reference(reference) => canonicalize(&mut reference.elem),
        Type::Ptr(ptr) => canonicalize(&mut ptr.elem),
        Type::Slice(slice) => canonicalize(&mut slice.elem),
        Type::Array(array) => canonicalize(&mut array.elem),
        Type::Tuple(tuple) => tuple.elems.iter_mut().for_each(canonicalize),
        Type::BareFn(bare) => {
            bare.inputs.iter_mut().for_each(|arg| canonicalize(&mut arg.ty));
            if let ReturnType::Type(_, ty) = &mut bare.output {
                canonicalize(ty);
            }
        }
        _ => {}
    }
}

/// [`type_key`] of the canonical form.
pub fn canonical_key(ty: &Type) -> String {
    let mut ty = ty.clone();
    canonicalize(&mut ty);
    type_key(&ty)
}

/// A reference without a named lifetime (`&T`, `&'_ T`), searched recursively.
pub fn find_elided_lifetime(ty: &Type) -> Option<&Type> {
    fn in_path(path: &Path) -> Option<&Type> {
        path.segments.iter().find_map(|seg| match &seg.arguments {
            PathArguments::AngleBracketed(args) => args.args.iter().find_map(|arg| match arg {
                GenericArgument::Type(ty) => find_elided_lifetime(ty),
                _ => None,
            }),
            PathArguments::Parenthesized(args) => args.inputs.iter().find_map(find_elided_lifetime),
            PathArguments::None => None,
        })
    }

    match ty {
        Type::Reference(reference) => match &reference.lifetime {
            None => Some(ty),
            Some(lifetime) if is_anonymous(lifetime) => Some(ty),
            Some(_) => find_elided_lifetime(&reference.elem),
        },
        Type::Group(group) => find_elided_lifetime(&group.elem),
        Type::Paren(paren) => find_elided_lifetime(&paren.elem),
        Type::Path(path) => in_path(&path.path),
        Type::Ptr(ptr) => find_elided_lifetime(&ptr.elem),
        Type::Slice(slice) => find_elided_lifetime(&slice.elem),
        Type::Array(array) => find_elided_lifetime(&array.elem),
        Type::Tuple(tuple) => tuple.elems.iter().find_map(find_elided_lifetime),
        _ => None,
    }
}

fn is_anonymous(lifetime: &Lifetime) -> bool {
    lifetime.ident == "_"
}

fn unwrap_groups(ty: &Type) -> &Type {
    match ty {
        Type::Group(group) => unwrap_groups(&group.elem),
        Type::Paren(paren) => unwrap_groups(&paren.elem),
        _ => ty,
    }
}

/// Parse and validate one signature.
pub fn parse_sig(ty: &Type) -> syn::Result<Sig> {
    let Type::BareFn(bare) = unwrap_groups(ty) else {
        return Err(syn::Error::new_spanned(
            ty,
            format!(
                "`{}` is not a function signature\n\
                 \n\
                 Signatures are written as function pointer types, e.g. `fn(i32, f32) -> bool`.",
                type_key(ty)
            ),
        ));
    };

    check_bare_fn(bare)?;

    let inputs: Vec<Type> = bare.inputs.iter().map(|arg| arg.ty.clone()).collect();
    let output: Type = match &bare.output {
        ReturnType::Default => syn::parse_quote! { () },
        ReturnType::Type(_, ty) => (**ty).clone(),
    };

    if let Some(elided) = inputs.iter().chain([&output]).find_map(find_elided_lifetime) {
        return Err(syn::Error::new_spanned(
            elided,
            format!(
                "`{}` has an elided lifetime; name the lifetime on the enclosing type alias\n\
                 \n\
                 e.g. `type Sigs<'a> = sigs![fn(&'a str) -> usize];`",
                type_key(elided)
            ),
        ));
    }

    let params: Vec<String> = inputs.iter().map(canonical_key).collect();
    let output_key = canonical_key(&output);
    let canonical = format!("fn({})->{}", params.join(","), output_key);

    Ok(Sig { inputs, output, canonical, output_key })
}

fn check_bare_fn(bare: &TypeBareFn) -> syn::Result<()> {
    if let Some(lifetimes) = &bare.lifetimes {
        return Err(syn::Error::new_spanned(
            lifetimes,
            "higher-ranked signatures are not supported; name the lifetime on the enclosing type alias instead",
        ));
    }
    if let Some(unsafety) = &bare.unsafety {
        return Err(syn::Error::new_spanned(unsafety, "`unsafe fn` signatures are not supported"));
    }
    if let Some(abi) = &bare.abi {
        return Err(syn::Error::new_spanned(abi, "`extern` signatures are not supported"));
    }
    if let Some(variadic) = &bare.variadic {
        return Err(syn::Error::new_spanned(variadic, "variadic signatures are not supported"));
    }
    if bare.inputs.len() > MAX_ARITY {
        return Err(syn::Error::new_spanned(
            &bare.inputs,
            format!("signatures take at most {} parameters, found {}", MAX_ARITY, bare.inputs.len()),
        ));
    }
    Ok(())
}

/// 64-bit identity of a canonical signature as 16 nibbles, low nibble first.
pub fn identity_nibbles(canonical: &str) -> [u8; 16] {
    let hash = blake3::hash(canonical.as_bytes());
    let mut word = [0u8; 8];
    word.copy_from_slice(&hash.as_bytes()[..8]);
    let hash = u64::from_le_bytes(word);

    let mut nibbles = [0u8; 16];
    for (i, nibble) in nibbles.iter_mut().enumerate() {
        *nibble = ((hash >> (i * 4)) & 0xF) as u8;
    }
    nibbles
}

/// `S<S<..Z>>` for `n`.
pub fn peano(n: usize) -> TokenStream2 {
    let mut out = quote! { ::tola_fnany::Z };
    for _ in 0..n {
        out = quote! { ::tola_fnany::S<#out> };
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sig(src: &str) -> syn::Result<Sig> {
        parse_sig(&syn::parse_str(src).unwrap())
    }

    #[test]
    fn test_canonical() {
        assert_eq!(sig("fn(i32, f32)").unwrap().canonical, "fn(i32,f32)->()");
        assert_eq!(sig("fn(i32, f32) -> ()").unwrap().canonical, "fn(i32,f32)->()");
        assert_eq!(sig("fn(x: i32) -> &'a A").unwrap().canonical, "fn(i32)->&'aA");
        assert_eq!(sig("fn()").unwrap().canonical, "fn()->()");
    }

    #[test]
    fn test_canonical_paths() {
        assert_eq!(
            sig("fn(std::string::String) -> usize").unwrap().canonical,
            sig("fn(String) -> usize").unwrap().canonical
        );
        assert_eq!(
            sig("fn(::alloc::vec::Vec<core::primitive::u8>) -> Option<std::string::String>").unwrap().canonical,
            "fn(Vec<u8>)->Option<String>"
        );
        assert_eq!(sig("fn((i32), &'a (str))").unwrap().canonical, "fn(i32,&'astr)->()");
        assert_eq!(sig("fn() -> tola_fnany::NoCall").unwrap().output_key, "NoCall");
        // Not a prelude path: kept as written.
        assert_eq!(sig("fn(std::rc::Rc<u8>)").unwrap().canonical, "fn(std::rc::Rc<u8>)->()");
    }

    #[test]
    fn test_rejects_elided_lifetimes() {
        for src in ["fn(&str)", "fn(&'_ str)", "fn() -> &u8", "fn(Option<&'a [&u8]>)", "fn((&i32, u8))"] {
            let err = sig(src).err().unwrap_or_else(|| panic!("{src} accepted"));
            assert!(err.to_string().contains("elided lifetime"), "{src}: {err}");
        }
        assert!(sig("fn(&'a str) -> &'a u8").is_ok());
        assert!(sig("fn(&'static str)").is_ok());
    }

    #[test]
    fn test_explicit_return() {
        let sig = sig("fn(u8)").unwrap();
        assert!(sig.returns_unit());
        assert_eq!(sig.to_type().to_string(), quote! { fn(u8) -> () }.to_string());
    }

    #[test]
    fn test_rejects() {
        assert!(sig("i32").is_err());
        assert!(sig("for<'a> fn(&'a str)").is_err());
        assert!(sig("unsafe fn()").is_err());
        assert!(sig("extern \"C\" fn()").is_err());
        assert!(sig("fn(u8, u8, u8, u8, u8, u8, u8, u8, u8)").is_err());
        assert!(sig("fn(u8, u8, u8, u8, u8, u8, u8, u8)").is_ok());
    }

    #[test]
    fn test_identity_is_stable() {
        let a = identity_nibbles("fn(i32)->()");
        assert_eq!(a, identity_nibbles("fn(i32)->()"));
        assert_ne!(a, identity_nibbles("fn(i64)->()"));
        assert!(a.iter().all(|n| *n < 16));
    }

    #[test]
    fn test_peano() {
        assert_eq!(peano(0).to_string(), quote! { ::tola_fnany::Z }.to_string());
        assert_eq!(
            peano(2).to_string().replace(' ', ""),
            "::tola_fnany::S<::tola_fnany::S<::tola_fnany::Z>>"
        );
    }
}
