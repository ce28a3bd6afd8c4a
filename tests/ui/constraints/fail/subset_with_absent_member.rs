//! A subset containing a tag absent from the source set must not compile.

use tyset::prelude::*;

type Scalars = tyset![i32, f32, char];

fn assert_subset<Sub, Of, I>()
where
    Sub: SubsetOf<Of, I>,
{
}

fn main() {
    assert_subset::<tyset![i32, bool], Scalars, _>();
}
