//! Positional access.
//!
//! `At<I>` is implemented for `Cons` at every index below the list's length
//! and for nothing else, so an out-of-range index does not compile:
//!
//! ```compile_fail
//! use typeseq::{Get, tlist};
//! let _: Option<Get<tlist![i32, f32], 2>> = None;
//! ```

use crate::{Cons, TypeList};

/// Element at zero-based position `I`.
///
/// Indices up to 63 are supported.
pub trait At<const I: usize>: TypeList {
    type Output;
}

impl<H, T: TypeList> At<0> for Cons<H, T> {
    type Output = H;
}

macro_rules! impl_at {
    ($($i:literal)+) => {
        $(
            impl<H, T: At<{ $i - 1 }>> At<$i> for Cons<H, T> {
                type Output = <T as At<{ $i - 1 }>>::Output;
            }
        )+
    };
}

impl_at!(
     1  2  3  4  5  6  7  8  9 10 11 12 13 14 15
    16 17 18 19 20 21 22 23 24 25 26 27 28 29 30 31
    32 33 34 35 36 37 38 39 40 41 42 43 44 45 46 47
    48 49 50 51 52 53 54 55 56 57 58 59 60 61 62 63
);

/// The element of `L` at position `I`.
pub type Get<L, const I: usize> = <L as At<I>>::Output;
