//! Type-level functions and mapping them over lists.

use alloc::boxed::Box;
use core::marker::PhantomData;

use crate::{Cons, Nil, TypeList};

/// A compile-time function from `T` to [`Transform::Output`].
///
/// A transform with no impl for some element makes [`Transformed`] fail to
/// compile for that list.
pub trait Transform<T> {
    type Output;
}

pub struct Identity;

impl<T> Transform<T> for Identity {
    type Output = T;
}

/// `T` to `*const T`.
pub struct AddPointer;

impl<T> Transform<T> for AddPointer {
    type Output = *const T;
}

/// `T` to `*mut T`.
pub struct AddMutPointer;

impl<T> Transform<T> for AddMutPointer {
    type Output = *mut T;
}

/// `T` to `&'static T`.
pub struct AddRef;

impl<T: 'static> Transform<T> for AddRef {
    type Output = &'static T;
}

/// `T` to `Box<T>`.
pub struct Boxed;

impl<T> Transform<T> for Boxed {
    type Output = Box<T>;
}

/// `T` to `Option<T>`.
pub struct Optional;

impl<T> Transform<T> for Optional {
    type Output = Option<T>;
}

/// `*const T` or `*mut T` to `T`. Not defined for anything else.
///
/// ```compile_fail
/// use typeseq::{RemovePointer, Transformed, tlist};
/// let _: Option<Transformed<RemovePointer, tlist![*const u8, u16]>> = None;
/// ```
pub struct RemovePointer;

impl<T> Transform<*const T> for RemovePointer {
    type Output = T;
}

impl<T> Transform<*mut T> for RemovePointer {
    type Output = T;
}

/// Applies `F`, then `G`.
pub struct Compose<F, G>(PhantomData<(F, G)>);

impl<T, F: Transform<T>, G: Transform<F::Output>> Transform<T> for Compose<F, G> {
    type Output = G::Output;
}

/// Applies `F` to every element, keeping order and length.
pub trait Map<F>: TypeList {
    type Output: TypeList;
}

impl<F> Map<F> for Nil {
    type Output = Nil;
}

impl<F: Transform<H>, H, R: Map<F>> Map<F> for Cons<H, R> {
    type Output = Cons<F::Output, R::Output>;
}

/// `L` with `F` applied to every element.
pub type Transformed<F, L> = <L as Map<F>>::Output;
