//! Algebraic laws of the list operations, checked on concrete lists.
//!
//! Laws quantified over every list are written as generic `const fn`s over
//! their bounds and instantiated on a few shapes: empty, singleton,
//! repeated elements and longer mixed lists.

use pretty_assertions::assert_eq;
use static_assertions::{assert_type_eq_all, const_assert, const_assert_eq};
use typeseq::*;

type Numbers = tlist![i32, f32, f64];
type Repeated = tlist![u8, u16, u8, u16];
type Mixed = tlist![*const i32, &'static str, (u8, char), [u8; 4], Option<u64>];

// Reflexive, symmetric, structural.
const fn reflexive<L: Equals<L>>() -> bool {
    equals::<L, L>() && !not_equals::<L, L>()
}

const fn symmetric<A: Equals<B>, B: Equals<A>>() -> bool {
    equals::<A, B>() == equals::<B, A>()
}

const_assert!(reflexive::<Nil>());
const_assert!(reflexive::<Numbers>());
const_assert!(reflexive::<Repeated>());
const_assert!(reflexive::<Mixed>());
const_assert!(symmetric::<Numbers, Repeated>());
const_assert!(symmetric::<Numbers, Nil>());
const_assert!(symmetric::<Mixed, Mixed>());
const_assert!(equals::<Numbers, Cons<i32, Cons<f32, Cons<f64, Nil>>>>());

// Any differing length or position makes lists unequal.
const_assert!(not_equals::<tlist![i32, i32, i32], tlist![i32, f32, i32]>());
const_assert!(not_equals::<Numbers, tlist![i32, f32, f64, f64]>());
const_assert!(not_equals::<Numbers, tlist![f64, f32, i32]>());
const_assert!(not_equals::<Nil, tlist![()]>());

// Reconstruction: push_front(head(S), tail(S)) == S.
assert_type_eq_all!(PushFront<Head<Numbers>, Tail<Numbers>>, Numbers);
assert_type_eq_all!(PushFront<Head<Mixed>, Tail<Mixed>>, Mixed);
assert_type_eq_all!(Head<Numbers>, i32);
assert_type_eq_all!(Tail<Numbers>, tlist![f32, f64]);

// Inverse: pop_front(push_front(X, S)) == S.
assert_type_eq_all!(PushFront<char, Numbers>, tlist![char, i32, f32, f64]);
assert_type_eq_all!(PopFront<PushFront<char, Numbers>>, Numbers);
assert_type_eq_all!(PopFront<PushFront<char, Nil>>, Nil);
assert_type_eq_all!(PopFront<Numbers>, tlist![f32, f64]);

// Sizes.
const_assert_eq!(size::<PushBack<char, Numbers>>(), size::<Numbers>() + 1);
const_assert_eq!(size::<PushBack<char, Nil>>(), 1);
const_assert_eq!(size::<Transformed<AddPointer, Mixed>>(), size::<Mixed>());
const_assert_eq!(size::<PushBackAll<Repeated, Numbers>>(), 7);

// Find and get agree; a miss returns the length.
const fn find_contains_agree<T, L: Find<T> + Contains<T>>() -> bool {
    (find::<T, L>() == size::<L>()) != contains::<T, L>()
}

const_assert!(find_contains_agree::<f64, Numbers>());
const_assert!(find_contains_agree::<char, Numbers>());
const_assert!(find_contains_agree::<char, Nil>());
const_assert!(find_contains_agree::<u16, Repeated>());
const_assert!(find_contains_agree::<&'static str, Mixed>());
const_assert_eq!(find::<aliases::F64, Numbers>(), 2);
assert_type_eq_all!(Get<Numbers, 2>, f64);
assert_type_eq_all!(Get<Numbers, { find::<f64, Numbers>() }>, f64);
assert_type_eq_all!(Get<Repeated, { find::<u16, Repeated>() }>, u16);
const_assert_eq!(find::<u16, Repeated>(), 1);
assert_type_eq_all!(Get<tlist![f64, i32, char], 1>, i32);

mod aliases {
    pub type F64 = f64;
}

// Empty-list identities and any/none duality.
const fn any_none_dual<P, L: AnyOf<P> + NoneOf<P>>() -> bool {
    any_of::<P, L>() == !none_of::<P, L>()
}

const_assert!(any_none_dual::<IsPointer, Nil>());
const_assert!(any_none_dual::<IsPointer, Numbers>());
const_assert!(any_none_dual::<IsPointer, Mixed>());
const_assert!(any_none_dual::<SameAs<u8>, Repeated>());
const_assert!(all_of::<IsPointer, Nil>());
const_assert!(!any_of::<IsPointer, Nil>());
const_assert!(none_of::<IsPointer, Nil>());
const_assert!(any_of::<IsPointer, tlist![i32, *const f32, f64]>());
const_assert!(all_of::<IsPointer, tlist![*const i32, *const f32, *const f64]>());
const_assert!(none_of::<IsPointer, Numbers>());
const_assert_eq!(find_if::<IsPointer, tlist![i32, *const f32, f64]>(), 1);
const_assert_eq!(find_if::<IsPointer, Numbers>(), size::<Numbers>());
const_assert_eq!(find_if::<OneOf<tlist![String, (u8, char)]>, Mixed>(), 2);

// Transform is elementwise.
assert_type_eq_all!(
    Transformed<AddPointer, Numbers>,
    tlist![*const i32, *const f32, *const f64]
);
assert_type_eq_all!(
    Get<Transformed<AddPointer, Mixed>, 3>,
    <AddPointer as Transform<Get<Mixed, 3>>>::Output
);
assert_type_eq_all!(
    Get<Transformed<Optional, Mixed>, 4>,
    Option<Option<u64>>
);

// Rejections (head/tail/pop of Nil, out-of-range get) must not type-check.
static_assertions::assert_not_impl_any!(Nil: NonEmpty, At<0>);
static_assertions::assert_not_impl_any!(Numbers: At<3>);
static_assertions::assert_impl_all!(Numbers: NonEmpty, At<2>);

#[test]
fn value_level_mirrors_type_level() {
    let numbers = Numbers::new();
    assert_eq!(numbers.tail().push_front(numbers.head()), numbers);
    assert_eq!(
        numbers.push_front(Type::<char>::new()).pop_front(),
        numbers
    );
    assert_eq!(numbers.push_back(Type::<char>::new()).len(), numbers.len() + 1);
    assert_eq!(numbers.get::<2>(), Type::<f64>::new());
    assert!(numbers != Numbers::new().push_back_all(Numbers::new()));
}

#[test]
fn lists_print_their_elements() {
    assert_eq!(
        <Transformed<AddPointer, Numbers>>::new().to_string(),
        "[*const i32, *const f32, *const f64]"
    );
    assert_eq!(
        Mixed::new().to_string(),
        "[*const i32, &str, (u8, char), [u8; 4], core::option::Option<u64>]"
    );
}
