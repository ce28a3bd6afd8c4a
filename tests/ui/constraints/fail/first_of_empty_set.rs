//! The empty set has no first element.

use core::marker::PhantomData;

use tyset::prelude::*;

fn main() {
    let _first = PhantomData::<<tyset![] as First>::First>;
}
