//! Excluding members that are present compiles and skips them.

use tyset::prelude::*;

struct Count(usize);

impl Visit for Count {
    fn visit<T: 'static>(&mut self) {
        self.0 += 1;
    }
}

fn main() {
    let mut count = Count(0);
    for_each_excluding::<tyset![i32, f32, char], tyset![f32], _, _>(&mut count);
    assert_eq!(count.0, 2);
}
