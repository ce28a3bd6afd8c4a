//! # tyset
//!
//! Compile-time type sets: declare a fixed, ordered collection of type tags
//! and query, slice and iterate it with zero runtime cost. There is no
//! runtime type registry; membership violations, invalid subsets and
//! out-of-range indices are compile errors with readable diagnostics.
//!
//! ## Quick Start
//!
//! ```rust
//! use tyset::prelude::*;
//!
//! type Scalars = tyset![i32, f32, char];
//!
//! // Membership queries
//! assert!(has::<i32, Scalars>());
//! assert!(!has::<bool, Scalars>());
//! assert!(has_any::<tyset![bool, char], Scalars>());
//! assert!(!has_all::<tyset![i32, bool], Scalars>());
//! assert_eq!(Scalars::LEN, 3);
//!
//! // Iteration, in declaration order
//! struct Count(usize);
//! impl Visit for Count {
//!     fn visit<T: 'static>(&mut self) {
//!         self.0 += 1;
//!     }
//! }
//! let mut count = Count(0);
//! Scalars::for_each(&mut count);
//! assert_eq!(count.0, 3);
//!
//! // Exclusions are validated at compile time, then iterated
//! let mut count = Count(0);
//! for_each_excluding::<Scalars, tyset![f32], _, _>(&mut count);
//! assert_eq!(count.0, 2);
//!
//! // Display names for diagnostics
//! assert_eq!(format_set::<Scalars>(true), "i32, f32, char");
//! ```
//!
//! ## Feature Flags
//!
//! | Feature   | Default | Effect                                        |
//! |-----------|---------|-----------------------------------------------|
//! | `std`     | ✅      | Standard library support                      |
//! | `alloc`   |         | no_std + allocator support                    |
//! | `tracing` |         | Trace event per visited element via `tracing` |

#![cfg_attr(not(feature = "std"), no_std)]

// =============================================================================
// Root-level exports
// =============================================================================

/// Result type for tyset operations
pub use tyset_core::error::Result;

/// Set constructor macro
pub use tyset_core::tyset;

/// Error types
pub mod error {
    pub use tyset_core::error::TysetError;
}

/// The core implementation crate, for advanced or generic use.
pub mod core {
    pub use tyset_core::*;
}

pub use tyset_core::{
    At, Concat, Cons, Contains, ContainsAll, Difference, First, FoldStep, ForEach, Here, IntoSet,
    IntoTuple, Last, Members, N0, N1, N2, N3, N4, N5, N6, N7, N8, N9, Nil, Pluck, SetOf, SubsetOf,
    There, TupleOf, TypeSet, TysetError, Verbosity, Visit, Without, for_each_excluding,
    fold_excluding, format_set, format_set_with, has, has_all, has_any, is_subset, type_name_of,
};

/// Preset sets of built-in type tags.
pub mod presets {
    pub use tyset_core::presets::*;
}

/// Everything needed to declare and use type sets.
pub mod prelude {
    pub use tyset_core::tyset;

    pub use tyset_core::{
        At, Concat, Cons, Contains, ContainsAll, Difference, First, FoldStep, ForEach, IntoSet,
        IntoTuple, Last, Members, N0, N1, N2, N3, N4, N5, N6, N7, N8, N9, Nil, Pluck, SubsetOf,
        TypeSet, Verbosity, Visit, Without, for_each_excluding, fold_excluding, format_set,
        format_set_with, has, has_all, has_any, is_subset, type_name_of,
    };
}
