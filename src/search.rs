//! Membership and left-to-right search.
//!
//! Both searches give the index of the first match. When nothing matches
//! they give the list's length: `Nil` answers `0` and every `Cons` adds one.

use crate::{Cons, Nil, Predicate, TypeIdent, TypeList};

/// Whether `T` occurs anywhere in the list. Types are matched exactly, by key.
pub trait Contains<T: ?Sized>: TypeList {
    const VALUE: bool;
}

impl<T: ?Sized> Contains<T> for Nil {
    const VALUE: bool = false;
}

impl<T, H, R> Contains<T> for Cons<H, R>
where
    T: ?Sized + TypeIdent,
    H: TypeIdent,
    R: Contains<T>,
{
    const VALUE: bool = H::KEY.same_as(&T::KEY) || R::VALUE;
}

/// Position of the first `T`, or `LEN` if there is none.
pub trait Find<T: ?Sized>: TypeList {
    const INDEX: usize;
}

impl<T: ?Sized> Find<T> for Nil {
    const INDEX: usize = 0;
}

impl<T, H, R> Find<T> for Cons<H, R>
where
    T: ?Sized + TypeIdent,
    H: TypeIdent,
    R: Find<T>,
{
    const INDEX: usize = if H::KEY.same_as(&T::KEY) {
        0
    } else {
        R::INDEX + 1
    };
}

/// Position of the first element satisfying `P`, or `LEN` if there is none.
pub trait FindIf<P>: TypeList {
    const INDEX: usize;
}

impl<P> FindIf<P> for Nil {
    const INDEX: usize = 0;
}

impl<P, H, R> FindIf<P> for Cons<H, R>
where
    P: Predicate<H>,
    R: FindIf<P>,
{
    const INDEX: usize = if <P as Predicate<H>>::VALUE {
        0
    } else {
        R::INDEX + 1
    };
}
