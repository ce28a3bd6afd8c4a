//! Inductive type-level sets.
//!
//! A set is an ordered, fixed collection of type tags, written with the
//! [`tyset!`](crate::tyset) macro and represented as a [`Cons`] chain
//! terminated by [`Nil`]. Sets have no runtime representation; every node is
//! zero sized and every operation on a set resolves during compilation.

use core::marker::PhantomData;

mod private {
    pub trait Sealed {}
}

/// Empty type-level set.
pub struct Nil;

/// Non-empty type-level set node.
pub struct Cons<Head, Tail>(PhantomData<(Head, Tail)>);

impl private::Sealed for Nil {}
impl<Head, Tail: private::Sealed> private::Sealed for Cons<Head, Tail> {}

/// Marker trait for type-level sets.
///
/// Sealed: the only inhabitants are [`Nil`] and well-formed [`Cons`] chains.
pub trait TypeSet: private::Sealed {
    /// Number of elements, duplicates included.
    const LEN: usize;
    const IS_EMPTY: bool = Self::LEN == 0;
}

impl TypeSet for Nil {
    const LEN: usize = 0;
}

impl<Head, Tail: TypeSet> TypeSet for Cons<Head, Tail> {
    const LEN: usize = 1 + Tail::LEN;
}

/// Type-level concatenation.
pub trait Concat<Rhs> {
    type Output: TypeSet;
}

impl<Rhs> Concat<Rhs> for Nil
where
    Rhs: TypeSet,
{
    type Output = Rhs;
}

impl<Head, Tail, Rhs> Concat<Rhs> for Cons<Head, Tail>
where
    Tail: Concat<Rhs> + TypeSet,
    Rhs: TypeSet,
{
    type Output = Cons<Head, <Tail as Concat<Rhs>>::Output>;
}

/// First element of a non-empty set.
///
/// [`Nil`] deliberately has no impl, so asking for the first element of an
/// empty set is rejected during compilation.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no first element",
    label = "the empty type set has no elements"
)]
pub trait First: TypeSet {
    type First;
}

impl<Head, Tail: TypeSet> First for Cons<Head, Tail> {
    type First = Head;
}

/// Last element of a non-empty set.
#[diagnostic::on_unimplemented(
    message = "`{Self}` has no last element",
    label = "the empty type set has no elements"
)]
pub trait Last: TypeSet {
    type Last;
}

impl<Head> Last for Cons<Head, Nil> {
    type Last = Head;
}

impl<Head, Next, Tail> Last for Cons<Head, Cons<Next, Tail>>
where
    Tail: TypeSet,
    Cons<Next, Tail>: Last,
{
    type Last = <Cons<Next, Tail> as Last>::Last;
}

/// Builds the [`Cons`] chain type for an ordered list of type tags.
///
/// Usable anywhere a type is expected:
///
/// ```
/// use tyset_core::{tyset, TypeSet};
///
/// type Scalars = tyset![i32, f32, char];
/// assert_eq!(Scalars::LEN, 3);
/// ```
#[macro_export]
macro_rules! tyset {
    () => { $crate::set::Nil };
    ($head:ty $(, $rest:ty)* $(,)?) => {
        $crate::set::Cons<$head, $crate::tyset!($($rest),*)>
    };
}
