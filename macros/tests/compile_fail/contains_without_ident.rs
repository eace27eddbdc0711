//! Test: a type without `TypeIdent` cannot be searched for.

use typeseq::{Cons, Nil, contains};

struct Opaque;

fn main() {
    let _ = contains::<Opaque, Cons<u8, Nil>>();
}
