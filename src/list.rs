//! The type list itself: [`Nil`], [`Cons`] and the traits describing them.

use alloc::vec::Vec;
use core::{fmt, marker::PhantomData};

use crate::{Append, At, Concat, Type, TypeIdent, TypeKey};

mod sealed {
    pub trait Sealed {}
}

/// The empty type list.
#[derive(Clone, Copy, Default)]
pub struct Nil;

/// A type list starting with `H`, followed by the list `T`.
///
/// Zero-sized and `Copy` whatever `H` is. Spell long lists with
/// [`tlist!`](crate::tlist).
pub struct Cons<H, T>(PhantomData<fn() -> (H, T)>);

impl<H, T> Clone for Cons<H, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<H, T> Copy for Cons<H, T> {}

impl<H, T> Default for Cons<H, T> {
    fn default() -> Self {
        Cons(PhantomData)
    }
}

static_assertions::assert_eq_size!(Nil, ());
static_assertions::assert_eq_size!(Cons<u128, Cons<[u64; 8], Nil>>, ());
static_assertions::assert_impl_all!(Cons<*const u8, Nil>: Copy, Send, Sync);

impl sealed::Sealed for Nil {}
impl<H, T: TypeList> sealed::Sealed for Cons<H, T> {}

/// Spells a type list.
///
/// `tlist![A, B, C]` is `Cons<A, Cons<B, Cons<C, Nil>>>` and `tlist![]` is
/// `Nil`.
#[macro_export]
macro_rules! tlist {
    () => { $crate::Nil };
    ($head:ty $(, $tail:ty)* $(,)?) => {
        $crate::Cons<$head, $crate::tlist![$($tail),*]>
    };
}

/// An ordered, compile-time list of types.
///
/// Values of a list type carry no data; they exist so lists can be passed
/// around and compared like the types they stand for.
pub trait TypeList: Copy + Default + sealed::Sealed {
    /// Number of elements.
    const LEN: usize;
    const IS_EMPTY: bool = Self::LEN == 0;

    fn new() -> Self {
        Self::default()
    }

    fn len(self) -> usize {
        Self::LEN
    }

    fn is_empty(self) -> bool {
        Self::IS_EMPTY
    }

    fn push_front<U>(self, _item: Type<U>) -> Cons<U, Self> {
        Cons::default()
    }

    fn push_back<U>(self, _item: Type<U>) -> <Self as Append<U>>::Output
    where
        Self: Append<U>,
    {
        Default::default()
    }

    /// Prepends every element of `prefix`, keeping their order.
    fn push_front_all<U>(self, _prefix: U) -> <U as Concat<Self>>::Output
    where
        U: Concat<Self>,
    {
        Default::default()
    }

    /// Appends every element of `suffix`, keeping their order.
    fn push_back_all<U>(self, _suffix: U) -> <Self as Concat<U>>::Output
    where
        U: TypeList,
        Self: Concat<U>,
    {
        Default::default()
    }
}

impl TypeList for Nil {
    const LEN: usize = 0;
}

impl<H, T: TypeList> TypeList for Cons<H, T> {
    const LEN: usize = T::LEN + 1;
}

/// A list with at least one element.
///
/// `Nil` does not implement this, so taking the head or tail of an empty
/// list is a compile error:
///
/// ```compile_fail
/// type Oops = typeseq::Head<typeseq::Nil>;
/// let _: Option<Oops> = None;
/// ```
///
/// ```compile_fail
/// use typeseq::{NonEmpty, Nil, TypeList};
/// let _ = Nil::new().pop_front();
/// ```
pub trait NonEmpty: TypeList {
    type Head;
    type Tail: TypeList;

    fn head(self) -> Type<Self::Head> {
        Type::new()
    }

    fn tail(self) -> Self::Tail {
        Default::default()
    }

    fn pop_front(self) -> Self::Tail {
        Default::default()
    }

    /// The element at position `I`.
    fn get<const I: usize>(self) -> Type<<Self as At<I>>::Output>
    where
        Self: At<I>,
    {
        Type::new()
    }
}

impl<H, T: TypeList> NonEmpty for Cons<H, T> {
    type Head = H;
    type Tail = T;
}

/// First element of `L`.
pub type Head<L> = <L as NonEmpty>::Head;

/// `L` without its first element.
pub type Tail<L> = <L as NonEmpty>::Tail;

/// `L` without its first element. Same as [`Tail`].
pub type PopFront<L> = <L as NonEmpty>::Tail;

/// A list whose elements all implement [`TypeIdent`].
pub trait IdentList: TypeList {
    /// Keys of the elements, in order.
    fn keys() -> Vec<TypeKey> {
        let mut keys = Vec::with_capacity(Self::LEN);
        Self::extend_keys(&mut keys);
        keys
    }

    #[doc(hidden)]
    fn extend_keys(keys: &mut Vec<TypeKey>);
}

impl IdentList for Nil {
    fn extend_keys(_keys: &mut Vec<TypeKey>) {}
}

impl<H: TypeIdent, T: IdentList> IdentList for Cons<H, T> {
    fn extend_keys(keys: &mut Vec<TypeKey>) {
        keys.push(H::KEY);
        T::extend_keys(keys);
    }
}

impl fmt::Display for Nil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[]")
    }
}

impl<H: TypeIdent, T: IdentList> fmt::Display for Cons<H, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, key) in Self::keys().iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}")?;
        }
        f.write_str("]")
    }
}

impl fmt::Debug for Nil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl<H: TypeIdent, T: IdentList> fmt::Debug for Cons<H, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
