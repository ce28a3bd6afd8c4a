//! Core implementation of `tyset`: compile-time type sets.
//!
//! A type set is a fixed, ordered collection of type tags declared with
//! [`tyset!`]. Membership queries, subset checks, set difference and
//! per-element iteration all resolve during compilation; the only runtime
//! work in the crate is the string assembly done by the name formatting
//! helpers.
//!
//! # Features
//!
//! - `std` - Standard library support (enabled by default)
//! - `alloc` - Allocator support for no_std environments
//! - `tracing` - Emit a trace event per visited element during iteration

#![cfg_attr(not(feature = "std"), no_std)]

#[cfg(not(feature = "std"))]
extern crate alloc;

// Internal prelude for std/alloc compatibility
#[allow(unused_imports)]
pub(crate) mod alloc_prelude {
    #[cfg(feature = "std")]
    pub use std::string::{String, ToString};

    #[cfg(not(feature = "std"))]
    pub use alloc::string::{String, ToString};
}

pub mod algebra;
pub mod convert;
pub mod error;
pub mod index;
pub mod iter;
pub mod name;
pub mod presets;
pub mod query;
pub mod set;
mod tracing;

// Re-export key types and traits
pub use algebra::{Difference, Pluck, Without};
pub use convert::{IntoSet, IntoTuple, SetOf, TupleOf};
pub use error::{Result, TysetError};
pub use index::{At, Here, N0, N1, N2, N3, N4, N5, N6, N7, N8, N9, There};
pub use iter::{FoldStep, ForEach, Visit, for_each_excluding, fold_excluding};
pub use name::{Verbosity, format_set, format_set_with, type_name_of};
pub use query::{Contains, ContainsAll, Members, SubsetOf, has, has_all, has_any, is_subset};
pub use set::{Concat, Cons, First, Last, Nil, TypeSet};
