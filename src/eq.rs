//! Structural equality between lists.
//!
//! The four `Nil`/`Cons` pairings are covered by four disjoint impls. Only
//! `Cons`/`Cons` looks at the elements. Mismatched shapes mean the lengths
//! differ, so those impls are `false` outright.

use crate::{Cons, Nil, TypeIdent, TypeList};

/// Whether `Self` and `Rhs` hold the same types in the same order.
pub trait Equals<Rhs>: TypeList {
    const VALUE: bool;
}

impl Equals<Nil> for Nil {
    const VALUE: bool = true;
}

impl<H, T: TypeList> Equals<Cons<H, T>> for Nil {
    const VALUE: bool = false;
}

impl<H, T: TypeList> Equals<Nil> for Cons<H, T> {
    const VALUE: bool = false;
}

impl<H1, T1, H2, T2> Equals<Cons<H2, T2>> for Cons<H1, T1>
where
    H1: TypeIdent,
    H2: TypeIdent,
    T1: Equals<T2>,
{
    const VALUE: bool = H1::KEY.same_as(&H2::KEY) && <T1 as Equals<T2>>::VALUE;
}

impl<Rhs> PartialEq<Rhs> for Nil
where
    Nil: Equals<Rhs>,
{
    fn eq(&self, _other: &Rhs) -> bool {
        <Nil as Equals<Rhs>>::VALUE
    }
}

impl Eq for Nil {}

impl<H, T: TypeList, Rhs> PartialEq<Rhs> for Cons<H, T>
where
    Cons<H, T>: Equals<Rhs>,
{
    fn eq(&self, _other: &Rhs) -> bool {
        <Self as Equals<Rhs>>::VALUE
    }
}

impl<H, T: TypeList> Eq for Cons<H, T> where Cons<H, T>: Equals<Cons<H, T>> {}
