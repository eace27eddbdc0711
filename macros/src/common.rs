//! Shared utilities for typeseq procedural macros.

use proc_macro2::TokenStream as TokenStream2;
use syn::{Attribute, Expr, ExprLit, Lit, LitStr, Meta};

/// Parse a single `key = "value"` from attribute tokens.
///
/// # Returns
/// - `Ok(Some(value))` if `key = "value"` is found.
/// - `Ok(None)` if the tokens are empty.
/// - `Err(...)` if malformed or another key is present.
pub(crate) fn parse_name_value(tokens: TokenStream2, key: &str) -> syn::Result<Option<LitStr>> {
    if tokens.is_empty() {
        return Ok(None);
    }

    let meta: Meta = syn::parse2(tokens)?;
    match meta {
        Meta::NameValue(nv) if nv.path.is_ident(key) => match &nv.value {
            Expr::Lit(ExprLit {
                lit: Lit::Str(value),
                ..
            }) => Ok(Some(value.clone())),
            other => Err(syn::Error::new_spanned(
                other,
                format!("[typeseq] {} must be a string literal", key),
            )),
        },
        _ => Err(syn::Error::new_spanned(
            meta,
            format!("[typeseq] expected `{} = \"...\"`, or no arguments", key),
        )),
    }
}

/// Look up `#[attr_name(key = "...")]` among an item's attributes.
///
/// # Returns
/// - `Ok(Some(value))`: the attribute is present and names a value.
/// - `Ok(None)`: the attribute is absent, or present without arguments.
/// - `Err(...)`: the attribute is malformed or repeated.
pub(crate) fn get_value_from_attrs(
    attrs: &[Attribute],
    attr_name: &str,
    key: &str,
) -> syn::Result<Option<LitStr>> {
    let mut found = attrs.iter().filter(|a| a.path().is_ident(attr_name));
    let Some(attr) = found.next() else {
        return Ok(None);
    };
    if let Some(repeated) = found.next() {
        return Err(syn::Error::new_spanned(
            repeated,
            format!("[typeseq] `#[{}]` may only appear once", attr_name),
        ));
    }

    let tokens = match &attr.meta {
        Meta::Path(_) => TokenStream2::new(),
        Meta::List(list) => list.tokens.clone(),
        Meta::NameValue(_) => {
            return Err(syn::Error::new_spanned(
                attr,
                format!("[typeseq] invalid attribute syntax for `#[{}]`", attr_name),
            ));
        }
    };

    parse_name_value(tokens, key)
}
