//! Test: nothing can be popped off the empty list.

use typeseq::{Nil, PopFront};

fn main() {
    let _: Option<PopFront<Nil>> = None;
}
