//! Type-level positions.
//!
//! Two flavors: unary naturals ([`Z`], [`S`]) for positional indexing with
//! [`At`], and membership paths ([`Here`], [`There`]) that record where a
//! lookup found its element. Paths are normally inferred at the use site
//! (the `_` in `assert_member::<char, Scalars, _>()`); only sets with
//! duplicated tags need them spelled out to pick an occurrence.

use core::marker::PhantomData;

use crate::set::{Cons, TypeSet};

/// Zero.
pub struct Z;

/// Successor of `N`.
pub struct S<N>(PhantomData<N>);

pub type N0 = Z;
pub type N1 = S<N0>;
pub type N2 = S<N1>;
pub type N3 = S<N2>;
pub type N4 = S<N3>;
pub type N5 = S<N4>;
pub type N6 = S<N5>;
pub type N7 = S<N6>;
pub type N8 = S<N7>;
pub type N9 = S<N8>;

/// Membership path head marker: the element is the head of the current node.
pub struct Here;

/// Membership path tail marker: the element is found in the tail via `I`.
pub struct There<I>(PhantomData<I>);

/// Element at position `N` (zero based, declaration order).
///
/// Positions past the end of the set have no impl, so an out-of-range index
/// is rejected during compilation.
#[diagnostic::on_unimplemented(
    message = "type set `{Self}` has no element at index `{N}`",
    label = "index out of range for this type set"
)]
pub trait At<N>: TypeSet {
    type Output;
}

impl<Head, Tail: TypeSet> At<Z> for Cons<Head, Tail> {
    type Output = Head;
}

impl<N, Head, Tail> At<S<N>> for Cons<Head, Tail>
where
    Tail: At<N>,
{
    type Output = <Tail as At<N>>::Output;
}
