//! Set algebra: removal of a sub-collection from a set.
//!
//! [`Pluck`] removes a single element, [`Without`] folds it over a whole
//! target set. Both require the removed element to be present; the membership
//! path parameter is inferred at the use site, and an absent target surfaces
//! as an unsatisfied bound with a diagnostic rather than silently doing
//! nothing. Survivors keep their relative order.

use crate::index::{Here, There};
use crate::set::{Cons, Nil, TypeSet};

/// Removes the first occurrence of `T` from this set.
#[diagnostic::on_unimplemented(
    message = "cannot remove `{T}`: it is not a member of the type set `{Self}`",
    label = "missing member"
)]
pub trait Pluck<T, I>: TypeSet {
    type Remainder: TypeSet;
}

impl<T, Tail: TypeSet> Pluck<T, Here> for Cons<T, Tail> {
    type Remainder = Tail;
}

impl<T, I, Head, Tail> Pluck<T, There<I>> for Cons<Head, Tail>
where
    Tail: Pluck<T, I>,
{
    type Remainder = Cons<Head, <Tail as Pluck<T, I>>::Remainder>;
}

/// Removes every member of `Targets` from this set, one occurrence each,
/// peeling one target at a time.
///
/// ```
/// use tyset_core::{tyset, ForEach, Without, format_set};
///
/// fn survivors<S, Targets, I>() -> String
/// where
///     S: Without<Targets, I>,
///     S::Output: ForEach,
/// {
///     format_set::<S::Output>(true)
/// }
///
/// type Scalars = tyset![i32, f32, char];
/// assert_eq!(survivors::<Scalars, tyset![f32], _>(), "i32, char");
/// ```
#[diagnostic::on_unimplemented(
    message = "cannot exclude `{Targets}`: some member is missing from the type set `{Self}`",
    label = "excluded types must all be members"
)]
pub trait Without<Targets, I>: TypeSet {
    type Output: TypeSet;
}

impl<S: TypeSet> Without<Nil, Nil> for S {
    type Output = S;
}

impl<S, Target, Rest, I, Is> Without<Cons<Target, Rest>, Cons<I, Is>> for S
where
    S: Pluck<Target, I>,
    <S as Pluck<Target, I>>::Remainder: Without<Rest, Is>,
{
    type Output = <<S as Pluck<Target, I>>::Remainder as Without<Rest, Is>>::Output;
}

/// `S` minus `Targets`, with the membership paths `I` spelled out.
///
/// Mostly useful in generic code where `I` is already a parameter; concrete
/// call sites get the paths inferred through a [`Without`] bound instead.
pub type Difference<S, Targets, I> = <S as Without<Targets, I>>::Output;
