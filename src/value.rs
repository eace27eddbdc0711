//! Zero-sized stand-in for a single type.

use core::{fmt, marker::PhantomData};

use crate::TypeIdent;

/// A value standing for the type `T`.
///
/// Carries no data. Two markers compare equal when their types have the
/// same [`TypeKey`](crate::TypeKey):
///
/// ```
/// use typeseq::Type;
///
/// assert_eq!(Type::<*const u8>::new(), Type::<*const u8>::new());
/// assert_ne!(Type::<*const u8>::new(), Type::<*mut u8>::new());
/// ```
pub struct Type<T: ?Sized>(PhantomData<fn() -> *const T>);

impl<T: ?Sized> Type<T> {
    pub const fn new() -> Self {
        Type(PhantomData)
    }
}

impl<T: ?Sized> Clone for Type<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: ?Sized> Copy for Type<T> {}

impl<T: ?Sized> Default for Type<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized + TypeIdent, U: ?Sized + TypeIdent> PartialEq<Type<U>> for Type<T> {
    fn eq(&self, _other: &Type<U>) -> bool {
        T::KEY.same_as(&U::KEY)
    }
}

impl<T: ?Sized + TypeIdent> Eq for Type<T> {}

impl<T: ?Sized + TypeIdent> fmt::Debug for Type<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Type<{}>", T::KEY)
    }
}

impl<T: ?Sized + TypeIdent> fmt::Display for Type<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&T::KEY, f)
    }
}
