//! Implementation of `#[derive(TypeIdent)]`.

use proc_macro::TokenStream;
use proc_macro2::TokenStream as TokenStream2;
use quote::quote;
use syn::{DeriveInput, GenericParam, parse_macro_input, parse_quote};

use crate::common::get_value_from_attrs;

pub fn derive_type_ident_impl(item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);

    match generate_impl(&input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.to_compile_error().into(),
    }
}

/// Builds the `TypeIdent` impl.
///
/// Every type parameter gets a `TypeIdent` bound and contributes its key to
/// `args`, in declaration order. Lifetimes are left out of the key.
fn generate_impl(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;

    // An explicit name is the whole identity. Otherwise the module path is
    // narrowed by the declaration site, since items in function bodies share
    // their module's path.
    let (path, site) = match get_value_from_attrs(&input.attrs, "type_ident", "name")? {
        Some(explicit) => (quote!(#explicit), quote!("")),
        None => {
            let name_str = name.to_string();
            (
                quote!(::core::concat!(::core::module_path!(), "::", #name_str)),
                quote!(::core::concat!(
                    ::core::file!(),
                    ":",
                    ::core::line!(),
                    ":",
                    ::core::column!()
                )),
            )
        }
    };

    let mut generics = input.generics.clone();
    let mut args = Vec::new();
    for param in generics.params.iter_mut() {
        match param {
            GenericParam::Type(ty_param) => {
                let ident = ty_param.ident.clone();
                args.push(quote!(&<#ident as ::typeseq::TypeIdent>::KEY));
                ty_param.bounds.push(parse_quote!(::typeseq::TypeIdent));
            }
            GenericParam::Lifetime(_) => {}
            GenericParam::Const(const_param) => {
                return Err(syn::Error::new_spanned(
                    const_param,
                    "[typeseq] const generic parameters are not supported by `TypeIdent`",
                ));
            }
        }
    }

    let (impl_generics, _, where_clause) = generics.split_for_impl();
    let (_, ty_generics, _) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics ::typeseq::TypeIdent for #name #ty_generics #where_clause {
            const KEY: ::typeseq::TypeKey = ::typeseq::TypeKey::Named {
                path: #path,
                args: &[#(#args),*],
                site: #site,
            };
        }
    })
}
