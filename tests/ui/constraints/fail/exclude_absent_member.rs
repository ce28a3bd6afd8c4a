//! Excluding a tag that is not a member must not compile.

use tyset::prelude::*;

struct Noop;

impl Visit for Noop {
    fn visit<T: 'static>(&mut self) {}
}

fn main() {
    let mut noop = Noop;
    for_each_excluding::<tyset![i32, f32], tyset![bool], _, _>(&mut noop);
}
