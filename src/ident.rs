//! Compile-time type identity.

use alloc::{boxed::Box, string::String, vec::Vec};
use core::marker::PhantomData;

use crate::TypeKey;

/// A type that can be compared against other types at compile time.
///
/// Operations that only move types around (`Head`, `PushBack`, `Get`, ...)
/// work on any type. Operations that compare types (`Contains`, `Find`,
/// `Equals`) need their elements to implement this trait.
///
/// Implement it with [`impl_type_ident!`](crate::impl_type_ident) for plain
/// local types, or `#[derive(TypeIdent)]` for anything with type parameters.
pub trait TypeIdent {
    const KEY: TypeKey;
}

/// Implements [`TypeIdent`] for non-generic types, keyed by their path and
/// the place the macro is invoked.
///
/// ```
/// use typeseq::{impl_type_ident, contains, tlist};
///
/// struct Meters;
/// struct Feet;
/// impl_type_ident!(Meters, Feet);
///
/// const _: () = assert!(contains::<Feet, tlist![Meters, Feet]>());
/// ```
#[macro_export]
macro_rules! impl_type_ident {
    ($($ty:ident),+ $(,)?) => {
        $(
            impl $crate::TypeIdent for $ty {
                const KEY: $crate::TypeKey = $crate::TypeKey::Named {
                    path: ::core::concat!(::core::module_path!(), "::", ::core::stringify!($ty)),
                    args: &[],
                    site: ::core::concat!(
                        ::core::file!(),
                        ":",
                        ::core::line!(),
                        ":",
                        ::core::column!()
                    ),
                };
            }
        )+
    };
}

macro_rules! impl_primitive {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl TypeIdent for $ty {
                const KEY: TypeKey = TypeKey::named(stringify!($ty));
            }
        )+
    };
}

impl_primitive!(
    bool, char, str, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);

impl TypeIdent for String {
    const KEY: TypeKey = TypeKey::named("alloc::string::String");
}

impl<T: ?Sized + TypeIdent> TypeIdent for *const T {
    const KEY: TypeKey = TypeKey::Pointer {
        mutable: false,
        pointee: &T::KEY,
    };
}

impl<T: ?Sized + TypeIdent> TypeIdent for *mut T {
    const KEY: TypeKey = TypeKey::Pointer {
        mutable: true,
        pointee: &T::KEY,
    };
}

impl<T: ?Sized + TypeIdent> TypeIdent for &T {
    const KEY: TypeKey = TypeKey::Reference {
        mutable: false,
        referent: &T::KEY,
    };
}

impl<T: ?Sized + TypeIdent> TypeIdent for &mut T {
    const KEY: TypeKey = TypeKey::Reference {
        mutable: true,
        referent: &T::KEY,
    };
}

impl<T: TypeIdent> TypeIdent for [T] {
    const KEY: TypeKey = TypeKey::Slice { elem: &T::KEY };
}

impl<T: TypeIdent, const N: usize> TypeIdent for [T; N] {
    const KEY: TypeKey = TypeKey::Array {
        elem: &T::KEY,
        len: N,
    };
}

macro_rules! impl_generic {
    ($($path:literal => $name:ident<$($param:ident $(: ?$relax:ident)?),+>),+ $(,)?) => {
        $(
            impl<$($param: $(?$relax +)? TypeIdent),+> TypeIdent for $name<$($param),+> {
                const KEY: TypeKey = TypeKey::Named {
                    path: $path,
                    args: &[$(&$param::KEY),+],
                    site: "",
                };
            }
        )+
    };
}

impl_generic!(
    "alloc::vec::Vec" => Vec<T>,
    "alloc::boxed::Box" => Box<T: ?Sized>,
    "core::option::Option" => Option<T>,
    "core::result::Result" => Result<T, E>,
    "core::marker::PhantomData" => PhantomData<T: ?Sized>,
);

macro_rules! impl_tuple {
    ($($name:ident)*) => {
        impl<$($name: TypeIdent),*> TypeIdent for ($($name,)*) {
            const KEY: TypeKey = TypeKey::Tuple {
                elems: &[$(&$name::KEY),*],
            };
        }
    };
}

impl_tuple!();
impl_tuple!(A);
impl_tuple!(A B);
impl_tuple!(A B C);
impl_tuple!(A B C D);
impl_tuple!(A B C D E);
impl_tuple!(A B C D E F);
impl_tuple!(A B C D E F G);
impl_tuple!(A B C D E F G H);
impl_tuple!(A B C D E F G H I);
impl_tuple!(A B C D E F G H I J);
impl_tuple!(A B C D E F G H I J K);
impl_tuple!(A B C D E F G H I J K L);
