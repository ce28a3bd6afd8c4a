//! Membership queries.
//!
//! Queries come in two layers with one semantics. The trait layer
//! ([`Contains`], [`ContainsAll`], [`SubsetOf`]) expresses membership as a
//! bound, so a violation is a compile error naming the violated constraint.
//! The value layer ([`has`], [`has_any`], [`has_all`], [`is_subset`]) answers
//! with a `bool`; it walks the set's `TypeId`s and monomorphizes to a
//! constant, so there is still no runtime registry behind it.

use core::any::TypeId;

use crate::index::{Here, There};
use crate::set::{Cons, Nil, TypeSet};

/// `T` is a member of this set; `I` is the inferred membership path.
///
/// Membership is exact: `&T`, `Box<T>` and `T` are three distinct tags.
#[diagnostic::on_unimplemented(
    message = "`{T}` is not a member of the type set `{Self}`",
    label = "missing member",
    note = "membership is exact, references and wrappers are distinct tags"
)]
pub trait Contains<T, I>: TypeSet {}

impl<T, Tail: TypeSet> Contains<T, Here> for Cons<T, Tail> {}

impl<T, I, Head, Tail> Contains<T, There<I>> for Cons<Head, Tail>
where
    Tail: Contains<T, I>,
{
}

/// Every member of the query set `Q` is a member of this set.
#[diagnostic::on_unimplemented(
    message = "a member of `{Q}` is missing from the type set `{Self}`",
    label = "not a superset of `{Q}`"
)]
pub trait ContainsAll<Q, I>: TypeSet {}

impl<S: TypeSet> ContainsAll<Nil, Nil> for S {}

impl<S, QHead, QTail, IHead, ITail> ContainsAll<Cons<QHead, QTail>, Cons<IHead, ITail>> for S
where
    S: Contains<QHead, IHead> + ContainsAll<QTail, ITail>,
{
}

/// This set's members all occur in `S`.
///
/// The subset itself is declared with [`tyset!`](crate::tyset); this bound
/// makes it constructible only against a source set that contains every
/// member:
///
/// ```
/// use tyset_core::{tyset, SubsetOf};
///
/// type Scalars = tyset![i32, f32, char];
///
/// fn assert_subset<Sub, Of, I>()
/// where
///     Sub: SubsetOf<Of, I>,
/// {
/// }
///
/// assert_subset::<tyset![char, i32], Scalars, _>();
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` is not a subset of `{S}`",
    label = "has members missing from `{S}`"
)]
pub trait SubsetOf<S, I>: TypeSet {}

impl<Sub: TypeSet, S, I> SubsetOf<S, I> for Sub where S: ContainsAll<Sub, I> {}

/// Value-level view of a set: its elements' `TypeId`s, in declaration order.
///
/// Implemented for every set whose elements are `'static`.
pub trait Members: TypeSet {
    fn contains_id(id: TypeId) -> bool;
    fn each_id(f: &mut dyn FnMut(TypeId));
}

impl Members for Nil {
    fn contains_id(_: TypeId) -> bool {
        false
    }

    fn each_id(_: &mut dyn FnMut(TypeId)) {}
}

impl<Head: 'static, Tail: Members> Members for Cons<Head, Tail> {
    fn contains_id(id: TypeId) -> bool {
        id == TypeId::of::<Head>() || Tail::contains_id(id)
    }

    fn each_id(f: &mut dyn FnMut(TypeId)) {
        f(TypeId::of::<Head>());
        Tail::each_id(f);
    }
}

/// True iff `T` is a member of `S`, by exact match.
pub fn has<T: 'static, S: Members>() -> bool {
    S::contains_id(TypeId::of::<T>())
}

/// True iff any member of the query set `Q` is a member of `S`.
pub fn has_any<Q: Members, S: Members>() -> bool {
    let mut found = false;
    Q::each_id(&mut |id| found |= S::contains_id(id));
    found
}

/// True iff every member of the query set `Q` is a member of `S`.
///
/// Vacuously true for the empty query set.
pub fn has_all<Q: Members, S: Members>() -> bool {
    let mut all = true;
    Q::each_id(&mut |id| all &= S::contains_id(id));
    all
}

/// [`has_all`] read as set inclusion.
pub fn is_subset<Q: Members, S: Members>() -> bool {
    has_all::<Q, S>()
}
