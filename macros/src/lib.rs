//! Procedural macros for typeseq.
//!
//! - `#[derive(TypeIdent)]` - Give a type a compile-time identity so it can
//!   be compared inside type lists.

extern crate proc_macro;

use proc_macro::TokenStream;

mod common;
mod type_ident;

/// Derive `typeseq::TypeIdent` for a struct, enum or union.
///
/// The key is the type's path (`module_path!()` plus its name) with one
/// argument per type parameter, so `Reading<Celsius>` and `Reading<u8>` are
/// different types to `contains`, `find` and `equals`. The key also records
/// where the type is declared, which keeps same-named types in different
/// function bodies apart.
///
/// # Example
///
/// ```ignore
/// use typeseq::{TypeIdent, contains, tlist};
///
/// #[derive(TypeIdent)]
/// struct Celsius;
///
/// #[derive(TypeIdent)]
/// struct Reading<U>(f64, U);
///
/// const _: () = assert!(contains::<Reading<Celsius>, tlist![u8, Reading<Celsius>]>());
/// ```
///
/// # Naming
///
/// The path can be fixed explicitly, e.g. to keep keys stable when a type
/// moves between modules. An explicit name is the whole key, with no
/// declaration site:
///
/// ```ignore
/// #[derive(TypeIdent)]
/// #[type_ident(name = "units::Celsius")]
/// struct Celsius;
/// ```
///
/// # Restrictions
///
/// - Lifetime parameters are ignored: `Foo<'a>` and `Foo<'static>` share a key.
/// - Const generic parameters are not supported.
#[proc_macro_derive(TypeIdent, attributes(type_ident))]
pub fn derive_type_ident(item: TokenStream) -> TokenStream {
    type_ident::derive_type_ident_impl(item)
}
