//! Structural, const-comparable descriptions of types.
//!
//! A [`TypeKey`] is what a [`TypeIdent`](crate::TypeIdent) type reports about
//! itself. Keys are plain data made of `&'static` references, so they can be
//! built inside associated consts and compared inside `const fn`s. That is
//! what lets `contains`, `find` and `equals` produce constants rather than
//! runtime values.

use core::fmt;

/// Structural description of one type.
///
/// Lifetimes are not part of a key: `&'a T` and `&'static T` describe the
/// same type.
///
/// Named keys of local types also carry the declaration site, so two types
/// spelled `Local` in different function bodies of one module stay apart.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKey {
    /// A nominal type, e.g. `i32`, `alloc::vec::Vec<u8>`, `my_crate::Foo`.
    Named {
        path: &'static str,
        args: &'static [&'static TypeKey],
        /// `file:line:column` of the declaration, or empty when `path` alone
        /// identifies the type (built-in types, explicit names).
        site: &'static str,
    },
    /// `*const T` or `*mut T`.
    Pointer {
        mutable: bool,
        pointee: &'static TypeKey,
    },
    /// `&T` or `&mut T`.
    Reference {
        mutable: bool,
        referent: &'static TypeKey,
    },
    /// `[T]`.
    Slice { elem: &'static TypeKey },
    /// `[T; N]`.
    Array { elem: &'static TypeKey, len: usize },
    /// `()`, `(A,)`, `(A, B)`, ...
    Tuple { elems: &'static [&'static TypeKey] },
}

impl TypeKey {
    /// Key of a nominal type without type arguments.
    pub const fn named(path: &'static str) -> Self {
        TypeKey::Named {
            path,
            args: &[],
            site: "",
        }
    }

    /// Structural equality, usable in const contexts.
    pub const fn same_as(&self, other: &TypeKey) -> bool {
        match (self, other) {
            (
                TypeKey::Named {
                    path: a,
                    args: x,
                    site: s,
                },
                TypeKey::Named {
                    path: b,
                    args: y,
                    site: t,
                },
            ) => str_eq(*a, *b) && str_eq(*s, *t) && keys_eq(*x, *y),
            (
                TypeKey::Pointer {
                    mutable: m,
                    pointee: a,
                },
                TypeKey::Pointer {
                    mutable: n,
                    pointee: b,
                },
            ) => *m == *n && (*a).same_as(*b),
            (
                TypeKey::Reference {
                    mutable: m,
                    referent: a,
                },
                TypeKey::Reference {
                    mutable: n,
                    referent: b,
                },
            ) => *m == *n && (*a).same_as(*b),
            (TypeKey::Slice { elem: a }, TypeKey::Slice { elem: b }) => (*a).same_as(*b),
            (TypeKey::Array { elem: a, len: m }, TypeKey::Array { elem: b, len: n }) => {
                *m == *n && (*a).same_as(*b)
            }
            (TypeKey::Tuple { elems: x }, TypeKey::Tuple { elems: y }) => keys_eq(*x, *y),
            _ => false,
        }
    }

    pub const fn is_pointer(&self) -> bool {
        matches!(self, TypeKey::Pointer { .. })
    }

    pub const fn is_reference(&self) -> bool {
        matches!(self, TypeKey::Reference { .. })
    }

    pub const fn is_tuple(&self) -> bool {
        matches!(self, TypeKey::Tuple { .. })
    }

    /// True for both `[T; N]` and `[T]`.
    pub const fn is_array(&self) -> bool {
        matches!(self, TypeKey::Array { .. } | TypeKey::Slice { .. })
    }

    /// The nominal path, if this is a [`TypeKey::Named`] key.
    pub const fn path(&self) -> Option<&'static str> {
        match self {
            TypeKey::Named { path, .. } => Some(*path),
            _ => None,
        }
    }

    /// The declaration site of a local nominal type, if recorded.
    pub const fn site(&self) -> Option<&'static str> {
        match self {
            TypeKey::Named { site, .. } if !site.is_empty() => Some(*site),
            _ => None,
        }
    }
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

const fn keys_eq(a: &[&TypeKey], b: &[&TypeKey]) -> bool {
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if !a[i].same_as(b[i]) {
            return false;
        }
        i += 1;
    }
    true
}

fn write_list(f: &mut fmt::Formatter<'_>, keys: &[&TypeKey]) -> fmt::Result {
    for (i, key) in keys.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        fmt::Display::fmt(key, f)?;
    }
    Ok(())
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKey::Named { path, args, .. } => {
                f.write_str(path)?;
                if !args.is_empty() {
                    f.write_str("<")?;
                    write_list(f, args)?;
                    f.write_str(">")?;
                }
                Ok(())
            }
            TypeKey::Pointer { mutable, pointee } => {
                let qualifier = if *mutable { "mut" } else { "const" };
                write!(f, "*{qualifier} {pointee}")
            }
            TypeKey::Reference { mutable, referent } => {
                if *mutable {
                    write!(f, "&mut {referent}")
                } else {
                    write!(f, "&{referent}")
                }
            }
            TypeKey::Slice { elem } => write!(f, "[{elem}]"),
            TypeKey::Array { elem, len } => write!(f, "[{elem}; {len}]"),
            TypeKey::Tuple { elems } => {
                f.write_str("(")?;
                write_list(f, elems)?;
                if elems.len() == 1 {
                    f.write_str(",")?;
                }
                f.write_str(")")
            }
        }
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.site() {
            Some(site) => write!(f, "TypeKey({self} @ {site})"),
            None => write!(f, "TypeKey({self})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use pretty_assertions::assert_eq;

    const INT: TypeKey = TypeKey::named("i32");
    const FLOAT: TypeKey = TypeKey::named("f32");
    const INT_PTR: TypeKey = TypeKey::Pointer {
        mutable: false,
        pointee: &INT,
    };

    static_assertions::const_assert!(INT.same_as(&TypeKey::named("i32")));
    static_assertions::const_assert!(!INT.same_as(&FLOAT));
    static_assertions::const_assert!(!TypeKey::named("i3").same_as(&INT));
    static_assertions::const_assert!(INT_PTR.is_pointer());
    static_assertions::const_assert!(!INT_PTR.same_as(&TypeKey::Pointer {
        mutable: true,
        pointee: &INT,
    }));

    #[test]
    fn named_keys_compare_arguments() {
        let vec_int = TypeKey::Named {
            path: "Vec",
            args: &[&INT],
            site: "",
        };
        let vec_float = TypeKey::Named {
            path: "Vec",
            args: &[&FLOAT],
            site: "",
        };
        assert!(vec_int.same_as(&vec_int));
        assert!(!vec_int.same_as(&vec_float));
        assert!(!vec_int.same_as(&TypeKey::named("Vec")));
    }

    #[test]
    fn declaration_site_separates_same_path() {
        let here = TypeKey::Named {
            path: "app::Local",
            args: &[],
            site: "src/app.rs:10:12",
        };
        let there = TypeKey::Named {
            path: "app::Local",
            args: &[],
            site: "src/app.rs:24:12",
        };
        assert!(here.same_as(&here));
        assert!(!here.same_as(&there));
        assert!(!here.same_as(&TypeKey::named("app::Local")));
        assert_eq!(here.to_string(), there.to_string());
        assert_eq!(here.site(), Some("src/app.rs:10:12"));
        assert_eq!(INT.site(), None);
        assert_eq!(
            alloc::format!("{here:?}"),
            "TypeKey(app::Local @ src/app.rs:10:12)"
        );
    }

    #[test]
    fn arrays_compare_length() {
        let a = TypeKey::Array { elem: &INT, len: 3 };
        let b = TypeKey::Array { elem: &INT, len: 4 };
        assert!(!a.same_as(&b));
        assert!(a.is_array());
        assert!(TypeKey::Slice { elem: &INT }.is_array());
    }

    #[test]
    fn same_as_agrees_with_partial_eq() {
        let keys = [
            INT,
            FLOAT,
            INT_PTR,
            TypeKey::Tuple { elems: &[] },
            TypeKey::Tuple {
                elems: &[&INT, &FLOAT],
            },
        ];
        for a in &keys {
            for b in &keys {
                assert_eq!(a.same_as(b), a == b, "{a} vs {b}");
            }
        }
    }

    #[test]
    fn display_uses_rust_syntax() {
        let tuple = TypeKey::Tuple {
            elems: &[&INT, &INT_PTR],
        };
        assert_eq!(tuple.to_string(), "(i32, *const i32)");
        assert_eq!(TypeKey::Tuple { elems: &[&INT] }.to_string(), "(i32,)");
        assert_eq!(TypeKey::Tuple { elems: &[] }.to_string(), "()");
        assert_eq!(
            TypeKey::Reference {
                mutable: true,
                referent: &TypeKey::Slice { elem: &FLOAT },
            }
            .to_string(),
            "&mut [f32]"
        );
        assert_eq!(
            TypeKey::Array { elem: &INT, len: 4 }.to_string(),
            "[i32; 4]"
        );
        assert_eq!(
            TypeKey::Named {
                path: "Result",
                args: &[&INT, &FLOAT],
                site: "",
            }
            .to_string(),
            "Result<i32, f32>"
        );
    }
}
