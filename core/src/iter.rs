//! The iteration primitive.
//!
//! [`ForEach::for_each`] invokes a caller-supplied polymorphic operation once
//! per element of a set, in declaration order, never sorted or hashed, so
//! iteration output is deterministic and reproducible. [`ForEach::fold`] is
//! the same walk threading an accumulator through a caller-supplied
//! combining step; plain `for_each` is the degenerate accumulation that
//! discards per-element results.
//!
//! [`for_each_excluding`] and [`fold_excluding`] first validate that every
//! excluded tag is a member (an absent exclusion is a compile error), then
//! compute the filtered set with [`Without`] and run the ordinary walk over
//! it. There is exactly one iteration algorithm; exclusion is sugar for
//! iterating a computed difference.

use crate::algebra::Without;
use crate::set::{Cons, Nil, TypeSet};
use crate::tyset_trace_visit;

/// A polymorphic operation applied to each element of a set.
///
/// Visitors are structs rather than closures because Rust closures cannot be
/// generic over a type parameter; state lives in the struct's fields.
///
/// ```
/// use tyset_core::{tyset, ForEach, Visit};
///
/// struct Sizes(usize);
///
/// impl Visit for Sizes {
///     fn visit<T: 'static>(&mut self) {
///         self.0 += core::mem::size_of::<T>();
///     }
/// }
///
/// let mut sizes = Sizes(0);
/// <tyset![u8, u16, u32]>::for_each(&mut sizes);
/// assert_eq!(sizes.0, 7);
/// ```
pub trait Visit {
    fn visit<T: 'static>(&mut self);
}

/// The accumulation step of a fold over a set's elements.
pub trait FoldStep<Acc> {
    fn step<T: 'static>(&mut self, acc: Acc) -> Acc;
}

/// Walks a set's elements in declaration order.
pub trait ForEach: TypeSet {
    /// Visit every element once, left to right.
    fn for_each<V: Visit>(visitor: &mut V);

    /// Left fold over the elements, threading `acc` through `op`.
    fn fold<Acc, F: FoldStep<Acc>>(op: &mut F, acc: Acc) -> Acc;
}

impl ForEach for Nil {
    fn for_each<V: Visit>(_: &mut V) {}

    fn fold<Acc, F: FoldStep<Acc>>(_: &mut F, acc: Acc) -> Acc {
        acc
    }
}

impl<Head: 'static, Tail: ForEach> ForEach for Cons<Head, Tail> {
    fn for_each<V: Visit>(visitor: &mut V) {
        tyset_trace_visit!(Head);
        visitor.visit::<Head>();
        Tail::for_each(visitor);
    }

    fn fold<Acc, F: FoldStep<Acc>>(op: &mut F, acc: Acc) -> Acc {
        tyset_trace_visit!(Head);
        let acc = op.step::<Head>(acc);
        Tail::fold(op, acc)
    }
}

/// Visits every element of `S` not in `Ex`, in declaration order.
///
/// Every member of `Ex` must be present in `S`; the membership paths `I` are
/// inferred:
///
/// ```
/// use tyset_core::{tyset, for_each_excluding, Visit};
///
/// struct Count(usize);
/// impl Visit for Count {
///     fn visit<T: 'static>(&mut self) {
///         self.0 += 1;
///     }
/// }
///
/// let mut count = Count(0);
/// for_each_excluding::<tyset![i32, f32, char], tyset![f32], _, _>(&mut count);
/// assert_eq!(count.0, 2);
/// ```
pub fn for_each_excluding<S, Ex, I, V>(visitor: &mut V)
where
    S: Without<Ex, I>,
    <S as Without<Ex, I>>::Output: ForEach,
    V: Visit,
{
    <<S as Without<Ex, I>>::Output as ForEach>::for_each(visitor);
}

/// [`ForEach::fold`] over `S` minus `Ex`; same validation as
/// [`for_each_excluding`].
pub fn fold_excluding<S, Ex, I, Acc, F>(op: &mut F, acc: Acc) -> Acc
where
    S: Without<Ex, I>,
    <S as Without<Ex, I>>::Output: ForEach,
    F: FoldStep<Acc>,
{
    <<S as Without<Ex, I>>::Output as ForEach>::fold(op, acc)
}
