//! Preset sets of built-in type tags.
//!
//! Each alias is a fixed, ordered set; the composed aliases are built with
//! [`Concat`] so declaration order is signed, then unsigned, then floats.
//! The `Ex` variants extend the base sets with the 128-bit integers.

use crate::set::Concat;
use crate::tyset;

pub type Unsigned = tyset![u8, u16, u32, u64, usize];
pub type UnsignedEx = tyset![u8, u16, u32, u64, u128, usize];

pub type Signed = tyset![i8, i16, i32, i64, isize];
pub type SignedEx = tyset![i8, i16, i32, i64, i128, isize];

pub type Floats = tyset![f32, f64];

pub type Integers = <Signed as Concat<Unsigned>>::Output;
pub type IntegersEx = <SignedEx as Concat<UnsignedEx>>::Output;

pub type Numerics = <Integers as Concat<Floats>>::Output;
pub type NumericsEx = <IntegersEx as Concat<Floats>>::Output;

/// Character tags: `char` plus the byte character `u8`.
pub type Chars = tyset![char, u8];

/// Every built-in scalar tag: unit, bool, char, then the numerics.
pub type Primitives = <tyset![(), bool, char] as Concat<Numerics>>::Output;
pub type PrimitivesEx = <tyset![(), bool, char] as Concat<NumericsEx>>::Output;
