//! Test: the empty list has no head.

use typeseq::{Head, Nil};

fn main() {
    let _: Option<Head<Nil>> = None;
}
