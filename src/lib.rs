//! Compile-time operations over ordered lists of types.
//!
//! A type list is a zero-sized marker type: [`Nil`] is empty and
//! [`Cons<H, T>`] puts `H` in front of the list `T`. [`tlist!`] spells them
//! out. Every operation is a trait over those two shapes. Operations that
//! produce a type are type aliases, operations that produce a `bool` or an
//! index are associated consts (with `const fn` spellings in [`ops`]). All
//! results are known at compile time and cost nothing at run time.
//!
//! # Example
//!
//! ```
//! use static_assertions::{assert_type_eq_all, const_assert, const_assert_eq};
//! use typeseq::*;
//!
//! type Numbers = tlist![i32, f32, f64];
//!
//! const_assert_eq!(size::<Numbers>(), 3);
//! assert_type_eq_all!(Head<Numbers>, i32);
//! assert_type_eq_all!(Tail<Numbers>, tlist![f32, f64]);
//! assert_type_eq_all!(PushFront<char, Numbers>, tlist![char, i32, f32, f64]);
//! assert_type_eq_all!(Get<Numbers, 2>, f64);
//!
//! const_assert!(contains::<f32, Numbers>());
//! const_assert_eq!(find::<f64, Numbers>(), 2);
//! const_assert_eq!(find::<char, Numbers>(), size::<Numbers>());
//! const_assert_eq!(find_if::<IsPointer, tlist![i32, *const f32, f64]>(), 1);
//! const_assert!(none_of::<IsPointer, Numbers>());
//!
//! assert_type_eq_all!(
//!     Transformed<AddPointer, Numbers>,
//!     tlist![*const i32, *const f32, *const f64]
//! );
//! ```
//!
//! # Identity
//!
//! Moving types around works on any type. Comparing them (`equals`,
//! `contains`, `find`, most predicates) needs [`TypeIdent`], which gives a
//! type a const-comparable [`TypeKey`]. It is implemented for primitives,
//! pointers, references, arrays, slices, tuples and the common `alloc`
//! types. Use [`impl_type_ident!`] or `#[derive(TypeIdent)]` for your own:
//!
//! ```
//! use typeseq::{TypeIdent, contains, find, tlist};
//!
//! #[derive(TypeIdent)]
//! struct Celsius;
//!
//! #[derive(TypeIdent)]
//! struct Reading<U> {
//!     value: f64,
//!     unit: U,
//! }
//!
//! type Units = tlist![Reading<Celsius>, Celsius];
//! const _: () = assert!(contains::<Celsius, Units>());
//! const _: () = assert!(find::<Reading<Celsius>, Units>() == 0);
//! const _: () = assert!(!contains::<Reading<f64>, Units>());
//! ```
//!
//! Keys made this way also record where the type is declared, so two
//! `Local` structs in different function bodies are different types.
//!
//! # Rejected programs
//!
//! Operations with preconditions fail to compile when they are violated.
//! There is no runtime failure mode. The diagnostics are pinned by the
//! `trybuild` cases in `macros/tests/compile_fail`.
//!
//! ```compile_fail
//! let _: Option<typeseq::Tail<typeseq::Nil>> = None;
//! ```
//!
//! ```compile_fail
//! let _: Option<typeseq::PopFront<typeseq::tlist![]>> = None;
//! ```
//!
//! ```compile_fail
//! let _: Option<typeseq::Get<typeseq::tlist![u8], 1>> = None;
//! ```
//!
//! ```compile_fail
//! // `NotIdent` has no key, so it cannot be searched for.
//! struct NotIdent;
//! const _: bool = typeseq::contains::<NotIdent, typeseq::tlist![u8]>();
//! ```
//!
//! ```compile_fail
//! // Const generic parameters have no key either.
//! #[derive(typeseq::TypeIdent)]
//! struct Buffer<const N: usize>;
//! ```

#![cfg_attr(not(test), no_std)]

extern crate alloc;

mod eq;
mod ident;
mod index;
mod key;
mod list;
pub mod ops;
mod predicate;
mod push;
mod search;
mod transform;
mod value;

pub use eq::Equals;
pub use ident::TypeIdent;
pub use index::{At, Get};
pub use key::TypeKey;
pub use list::{Cons, Head, IdentList, Nil, NonEmpty, PopFront, Tail, TypeList};
pub use ops::*;
pub use predicate::{
    AllOf, And, AnyOf, IsArray, IsPointer, IsReference, IsTuple, NoneOf, Not, OneOf, Or,
    Predicate, SameAs,
};
pub use push::{Append, Concat, PushBack, PushBackAll, PushFront, PushFrontAll};
pub use search::{Contains, Find, FindIf};
pub use transform::{
    AddMutPointer, AddPointer, AddRef, Boxed, Compose, Identity, Map, Optional, RemovePointer,
    Transform, Transformed,
};
pub use value::Type;

#[cfg(feature = "derive")]
pub use typeseq_macros::TypeIdent;
