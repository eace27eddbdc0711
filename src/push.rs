//! Growing lists at either end.
//!
//! Pushing one type and pushing a whole list are separate operations:
//! [`PushFront`]/[`PushBack`] take an element, [`PushFrontAll`]/
//! [`PushBackAll`] take a list and keep its order.

use crate::{Cons, Nil, TypeList};

/// Appends `T` after the last element.
pub trait Append<T>: TypeList {
    type Output: TypeList;
}

impl<T> Append<T> for Nil {
    type Output = Cons<T, Nil>;
}

impl<T, H, R: Append<T>> Append<T> for Cons<H, R> {
    type Output = Cons<H, R::Output>;
}

/// Appends every element of `Rhs`, in order.
pub trait Concat<Rhs: TypeList>: TypeList {
    type Output: TypeList;
}

impl<Rhs: TypeList> Concat<Rhs> for Nil {
    type Output = Rhs;
}

impl<Rhs: TypeList, H, R: Concat<Rhs>> Concat<Rhs> for Cons<H, R> {
    type Output = Cons<H, R::Output>;
}

/// `T` followed by the elements of `L`.
pub type PushFront<T, L> = Cons<T, L>;

/// The elements of `L` followed by `T`.
pub type PushBack<T, L> = <L as Append<T>>::Output;

/// The elements of `U` followed by the elements of `L`.
pub type PushFrontAll<U, L> = <U as Concat<L>>::Output;

/// The elements of `L` followed by the elements of `U`.
pub type PushBackAll<U, L> = <L as Concat<U>>::Output;
