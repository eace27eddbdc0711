//! Type-level predicates and the quantifiers that apply them to a list.

use core::marker::PhantomData;

use crate::{Cons, Contains, Nil, TypeIdent, TypeList};

/// A compile-time test on a type.
///
/// Implemented by a marker type for every `T` it can judge. A predicate that
/// has no impl for some element makes any operation using it on that list
/// fail to compile.
///
/// ```
/// use typeseq::{Predicate, all_of, tlist};
///
/// struct IsWide;
/// impl<T> Predicate<T> for IsWide {
///     const VALUE: bool = size_of::<T>() >= 8;
/// }
///
/// const _: () = assert!(all_of::<IsWide, tlist![u64, f64, [u32; 2]]>());
/// ```
pub trait Predicate<T: ?Sized> {
    const VALUE: bool;
}

/// Matches `*const T` and `*mut T`.
pub struct IsPointer;

impl<T: ?Sized + TypeIdent> Predicate<T> for IsPointer {
    const VALUE: bool = T::KEY.is_pointer();
}

/// Matches `&T` and `&mut T`.
pub struct IsReference;

impl<T: ?Sized + TypeIdent> Predicate<T> for IsReference {
    const VALUE: bool = T::KEY.is_reference();
}

/// Matches tuples, including `()`.
pub struct IsTuple;

impl<T: ?Sized + TypeIdent> Predicate<T> for IsTuple {
    const VALUE: bool = T::KEY.is_tuple();
}

/// Matches arrays and slices.
pub struct IsArray;

impl<T: ?Sized + TypeIdent> Predicate<T> for IsArray {
    const VALUE: bool = T::KEY.is_array();
}

/// Matches exactly `U`.
pub struct SameAs<U: ?Sized>(PhantomData<U>);

impl<T: ?Sized + TypeIdent, U: ?Sized + TypeIdent> Predicate<T> for SameAs<U> {
    const VALUE: bool = T::KEY.same_as(&U::KEY);
}

/// Matches any element of the list `L`.
pub struct OneOf<L>(PhantomData<L>);

impl<T: ?Sized, L: Contains<T>> Predicate<T> for OneOf<L> {
    const VALUE: bool = <L as Contains<T>>::VALUE;
}

pub struct Not<P>(PhantomData<P>);

impl<T: ?Sized, P: Predicate<T>> Predicate<T> for Not<P> {
    const VALUE: bool = !P::VALUE;
}

pub struct And<P, Q>(PhantomData<(P, Q)>);

impl<T: ?Sized, P: Predicate<T>, Q: Predicate<T>> Predicate<T> for And<P, Q> {
    const VALUE: bool = P::VALUE && Q::VALUE;
}

pub struct Or<P, Q>(PhantomData<(P, Q)>);

impl<T: ?Sized, P: Predicate<T>, Q: Predicate<T>> Predicate<T> for Or<P, Q> {
    const VALUE: bool = P::VALUE || Q::VALUE;
}

/// Whether at least one element satisfies `P`. False for `Nil`.
pub trait AnyOf<P>: TypeList {
    const VALUE: bool;
}

impl<P> AnyOf<P> for Nil {
    const VALUE: bool = false;
}

impl<P: Predicate<H>, H, R: AnyOf<P>> AnyOf<P> for Cons<H, R> {
    const VALUE: bool = <P as Predicate<H>>::VALUE || <R as AnyOf<P>>::VALUE;
}

/// Whether every element satisfies `P`. True for `Nil`.
pub trait AllOf<P>: TypeList {
    const VALUE: bool;
}

impl<P> AllOf<P> for Nil {
    const VALUE: bool = true;
}

impl<P: Predicate<H>, H, R: AllOf<P>> AllOf<P> for Cons<H, R> {
    const VALUE: bool = <P as Predicate<H>>::VALUE && <R as AllOf<P>>::VALUE;
}

/// Whether no element satisfies `P`.
pub trait NoneOf<P>: TypeList {
    const VALUE: bool;
}

impl<P, L: AnyOf<P>> NoneOf<P> for L {
    const VALUE: bool = !<L as AnyOf<P>>::VALUE;
}
