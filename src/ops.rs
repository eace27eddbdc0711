//! `const fn` spellings of the list operations that produce values.
//!
//! Each one reads an associated const, so calling it in a const context
//! (`const _: () = assert!(...)`, `static_assertions::const_assert!`)
//! evaluates it during compilation.

use crate::{AllOf, AnyOf, Contains, Equals, Find, FindIf, NoneOf, TypeList};

pub const fn size<L: TypeList>() -> usize {
    L::LEN
}

pub const fn is_empty<L: TypeList>() -> bool {
    L::IS_EMPTY
}

pub const fn equals<A: Equals<B>, B>() -> bool {
    <A as Equals<B>>::VALUE
}

pub const fn not_equals<A: Equals<B>, B>() -> bool {
    !<A as Equals<B>>::VALUE
}

pub const fn contains<T: ?Sized, L: Contains<T>>() -> bool {
    <L as Contains<T>>::VALUE
}

/// Index of the first `T` in `L`, or `size::<L>()` if absent.
pub const fn find<T: ?Sized, L: Find<T>>() -> usize {
    <L as Find<T>>::INDEX
}

/// Index of the first element of `L` satisfying `P`, or `size::<L>()`.
pub const fn find_if<P, L: FindIf<P>>() -> usize {
    <L as FindIf<P>>::INDEX
}

pub const fn any_of<P, L: AnyOf<P>>() -> bool {
    <L as AnyOf<P>>::VALUE
}

pub const fn all_of<P, L: AllOf<P>>() -> bool {
    <L as AllOf<P>>::VALUE
}

pub const fn none_of<P, L: NoneOf<P>>() -> bool {
    <L as NoneOf<P>>::VALUE
}
