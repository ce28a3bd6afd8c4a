use tyset::prelude::*;

type Scalars = tyset![i32, f32, char];
type Empty = tyset![];

fn assert_member<T, S, I>()
where
    S: Contains<T, I>,
{
}

fn assert_subset<Sub, Of, I>()
where
    Sub: SubsetOf<Of, I>,
{
}

#[test]
fn member_present() {
    assert!(has::<i32, Scalars>());
    assert!(has::<f32, Scalars>());
    assert!(has::<char, Scalars>());
    // Same entry point through the core crate re-export
    assert!(tyset::core::has::<i32, Scalars>());
}

#[test]
fn member_absent() {
    assert!(!has::<bool, Scalars>());
    assert!(!has::<u32, Scalars>());
}

#[test]
fn membership_is_exact() {
    assert!(!has::<&'static i32, Scalars>());
    assert!(!has::<Option<i32>, Scalars>());
}

#[test]
fn empty_set_has_nothing() {
    assert!(!has::<i32, Empty>());
}

#[test]
fn has_any_mixed_presence() {
    assert!(has_any::<tyset![bool, char], Scalars>());
    assert!(!has_any::<tyset![bool, u8], Scalars>());
    assert!(!has_any::<tyset![], Scalars>());
}

#[test]
fn has_all_requires_every_member() {
    assert!(has_all::<tyset![i32, f32], Scalars>());
    assert!(has_all::<tyset![char, i32], Scalars>());
    assert!(!has_all::<tyset![i32, bool], Scalars>());
    // AND over nothing
    assert!(has_all::<tyset![], Scalars>());
}

#[test]
fn subset_value_check() {
    assert!(is_subset::<tyset![char, i32], Scalars>());
    assert!(!is_subset::<tyset![char, bool], Scalars>());
    assert!(is_subset::<Scalars, Scalars>());
}

#[test]
fn len_counts_duplicates() {
    assert_eq!(Scalars::LEN, 3);
    assert_eq!(<tyset![i32, i32]>::LEN, 2);
    assert_eq!(Empty::LEN, 0);
    assert!(Empty::IS_EMPTY);
    assert!(!Scalars::IS_EMPTY);
}

#[test]
fn trait_level_membership() {
    assert_member::<char, Scalars, _>();
    assert_member::<i32, Scalars, _>();
    // Subsets may reorder members
    assert_subset::<tyset![char, i32], Scalars, _>();
    assert_subset::<tyset![], Scalars, _>();
}

#[test]
fn first_last_and_positions() {
    assert!(has::<<Scalars as First>::First, tyset![i32]>());
    assert!(has::<<Scalars as Last>::Last, tyset![char]>());
    assert!(has::<<Scalars as At<N0>>::Output, tyset![i32]>());
    assert!(has::<<Scalars as At<N1>>::Output, tyset![f32]>());
    assert!(has::<<Scalars as At<N2>>::Output, tyset![char]>());
}

#[test]
fn tuple_interop_round_trips() {
    use tyset::{SetOf, TupleOf};

    assert!(has::<i32, SetOf<(i32, f32, char)>>());
    assert_eq!(SetOf::<(u8, u16)>::LEN, 2);
    assert_eq!(
        std::any::TypeId::of::<TupleOf<tyset![u8, u16]>>(),
        std::any::TypeId::of::<(u8, u16)>()
    );
    // The tuple spelling of a set is usable as a type again
    fn tupled() -> <Scalars as IntoTuple>::Tuple {
        (0i32, 0.0f32, 'a')
    }
    let (i, f, c) = tupled();
    assert_eq!(i, 0);
    assert_eq!(f, 0.0);
    assert_eq!(c, 'a');
}
