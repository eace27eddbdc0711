//! Test: `Get<L, I>` needs `I < LEN`; the empty list has no index 0.

use typeseq::{Get, Nil};

fn main() {
    let _: Option<Get<Nil, 0>> = None;
}
