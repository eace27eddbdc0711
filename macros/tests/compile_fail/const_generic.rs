//! Test: const generic parameters have no key and are rejected.

use typeseq::TypeIdent;

#[derive(TypeIdent)]
struct Buffer<const N: usize>;

fn main() {
    let _ = Buffer::<4>;
}
