//! Indexing past the end of a set must not compile.

use core::marker::PhantomData;

use tyset::prelude::*;

type Pair = tyset![u8, u16];

fn main() {
    let _third = PhantomData::<<Pair as At<N2>>::Output>;
}
