//! A subset drawn from present members is constructible, in any order.

use tyset::prelude::*;

type Scalars = tyset![i32, f32, char];

fn assert_subset<Sub, Of, I>()
where
    Sub: SubsetOf<Of, I>,
{
}

fn main() {
    assert_subset::<tyset![char, i32], Scalars, _>();
    assert_subset::<tyset![], Scalars, _>();
}
