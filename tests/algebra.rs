use tyset::prelude::*;
use tyset::{Here, There};

type Scalars = tyset![i32, f32, char];

fn diff_len<S, Targets, I>() -> usize
where
    S: Without<Targets, I>,
{
    <S as Without<Targets, I>>::Output::LEN
}

fn diff_names<S, Targets, I>() -> String
where
    S: Without<Targets, I>,
    <S as Without<Targets, I>>::Output: ForEach,
{
    format_set::<<S as Without<Targets, I>>::Output>(true)
}

#[test]
fn removing_nothing_is_identity() {
    assert_eq!(diff_len::<Scalars, tyset![], tyset![]>(), 3);
    assert_eq!(diff_names::<Scalars, tyset![], tyset![]>(), "i32, f32, char");
}

#[test]
fn removal_preserves_survivor_order() {
    assert_eq!(diff_names::<Scalars, tyset![f32], _>(), "i32, char");
    assert_eq!(diff_names::<Scalars, tyset![i32], _>(), "f32, char");
    assert_eq!(diff_names::<Scalars, tyset![char], _>(), "i32, f32");
}

#[test]
fn removal_shrinks_len_by_target_count() {
    assert_eq!(diff_len::<Scalars, tyset![f32], _>(), 2);
    assert_eq!(diff_len::<Scalars, tyset![f32, i32], _>(), 1);
    assert_eq!(diff_len::<Scalars, tyset![char, i32, f32], _>(), 0);
}

#[test]
fn removal_order_does_not_matter() {
    assert_eq!(diff_names::<Scalars, tyset![char, i32], _>(), "f32");
    assert_eq!(diff_names::<Scalars, tyset![i32, char], _>(), "f32");
}

#[test]
fn duplicate_tags_need_explicit_paths() {
    // Two occurrences of i32 make the membership path ambiguous, so it is
    // spelled out instead of inferred.
    type Dup = tyset![i32, f32, i32];
    assert_eq!(diff_names::<Dup, tyset![i32], tyset![Here]>(), "f32, i32");
    assert_eq!(diff_names::<Dup, tyset![i32], tyset![There<There<Here>>]>(), "i32, f32");
    assert_eq!(diff_len::<Dup, tyset![i32, i32], tyset![Here, There<Here>]>(), 1);
}

#[test]
fn difference_alias_with_explicit_paths() {
    type Rest = Difference<Scalars, tyset![i32], tyset![Here]>;
    assert_eq!(Rest::LEN, 2);
    assert_eq!(format_set::<Rest>(true), "f32, char");
}

#[test]
fn concat_appends_in_order() {
    type Joined = <tyset![u8, u16] as Concat<tyset![u32]>>::Output;
    assert_eq!(Joined::LEN, 3);
    assert_eq!(format_set::<Joined>(true), "u8, u16, u32");
    assert!(has::<u32, Joined>());
}

#[test]
fn concat_with_empty_is_identity() {
    assert_eq!(format_set::<<tyset![] as Concat<Scalars>>::Output>(true), "i32, f32, char");
    assert_eq!(format_set::<<Scalars as Concat<tyset![]>>::Output>(true), "i32, f32, char");
}
