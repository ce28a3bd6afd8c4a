//! Human-readable names for type tags.
//!
//! Display names come from `core::any::type_name`, whose output is
//! implementation defined; everything here is best-effort string cleanup for
//! diagnostics and log output. Formatting never fails: when the expected
//! path markers are absent the raw name is returned unmodified.

use core::any::{TypeId, type_name};
use core::str::FromStr;

use compact_str::CompactString;
use smallvec::SmallVec;

use crate::alloc_prelude::*;
use crate::error::TysetError;
use crate::iter::{ForEach, Visit};

/// Detail level for display names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Innermost identifiers only, module paths stripped everywhere,
    /// including inside generic arguments (`Option<String>`).
    #[default]
    Bare,
    /// Module-qualified path (`core::option::Option<alloc::string::String>`).
    Qualified,
    /// The raw `core::any::type_name` output, implementation defined.
    Raw,
}

impl Verbosity {
    pub const fn level(self) -> u8 {
        match self {
            Verbosity::Bare => 0,
            Verbosity::Qualified => 1,
            Verbosity::Raw => 2,
        }
    }
}

impl TryFrom<u8> for Verbosity {
    type Error = TysetError;

    fn try_from(level: u8) -> Result<Self, Self::Error> {
        match level {
            0 => Ok(Verbosity::Bare),
            1 => Ok(Verbosity::Qualified),
            2 => Ok(Verbosity::Raw),
            other => Err(TysetError::VerbosityOutOfRange(other)),
        }
    }
}

impl FromStr for Verbosity {
    type Err = TysetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "bare" | "0" => Ok(Verbosity::Bare),
            "qualified" | "1" => Ok(Verbosity::Qualified),
            "raw" | "2" => Ok(Verbosity::Raw),
            other => Err(TysetError::UnknownVerbosity(String::from(other))),
        }
    }
}

// =============================================================================
// Built-in overrides
// =============================================================================

/// Generates the `TypeId`-keyed lookup for built-in tags whose display name
/// is pinned to the exact keyword spelling at every verbosity.
macro_rules! builtin_names {
    ($($ty:ty => $name:literal),+ $(,)?) => {
        fn builtin_name(id: TypeId) -> Option<&'static str> {
            $(
                if id == TypeId::of::<$ty>() {
                    return Some($name);
                }
            )+
            None
        }
    };
}

builtin_names! {
    () => "()",
    bool => "bool",
    char => "char",
    u8 => "u8",
    u16 => "u16",
    u32 => "u32",
    u64 => "u64",
    u128 => "u128",
    usize => "usize",
    i8 => "i8",
    i16 => "i16",
    i32 => "i32",
    i64 => "i64",
    i128 => "i128",
    isize => "isize",
    f32 => "f32",
    f64 => "f64",
    str => "str",
    &'static str => "&str",
    String => "String",
}

// =============================================================================
// Formatting
// =============================================================================

/// Display name for the tag `T` at the requested verbosity.
///
/// Built-in tags always format as their keyword spelling, regardless of
/// verbosity, because the raw compiler name for some of them is not stable
/// across toolchains (`alloc::string::String`).
///
/// ```
/// use tyset_core::{type_name_of, Verbosity};
///
/// assert_eq!(type_name_of::<u64>(Verbosity::Bare), "u64");
/// assert_eq!(type_name_of::<String>(Verbosity::Qualified), "String");
/// assert_eq!(type_name_of::<Option<String>>(Verbosity::Bare), "Option<String>");
/// ```
pub fn type_name_of<T: ?Sized + 'static>(verbosity: Verbosity) -> CompactString {
    if let Some(name) = builtin_name(TypeId::of::<T>()) {
        return CompactString::const_new(name);
    }
    let raw = type_name::<T>();
    match verbosity {
        Verbosity::Bare => strip_paths(raw),
        Verbosity::Qualified => CompactString::from(raw),
        Verbosity::Raw => CompactString::const_new(raw),
    }
}

/// Drops every `path::` qualifier, keeping innermost identifiers, also
/// inside generic arguments, references and tuples. A name without path
/// markers passes through unmodified.
fn strip_paths(raw: &str) -> CompactString {
    let mut out = CompactString::default();
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ':' && chars.peek() == Some(&':') {
            chars.next();
            let mut popped = false;
            while out.chars().last().is_some_and(|p| p.is_alphanumeric() || p == '_') {
                out.pop();
                popped = true;
            }
            if !popped {
                // Not preceded by a path segment (`<T as Trait>::Item`),
                // keep the separator as found.
                out.push_str("::");
            }
        } else {
            out.push(c);
        }
    }
    out
}

struct NameCollector {
    verbosity: Verbosity,
    names: SmallVec<[CompactString; 8]>,
}

impl Visit for NameCollector {
    fn visit<T: 'static>(&mut self) {
        self.names.push(type_name_of::<T>(self.verbosity));
    }
}

/// Joins the display names of every element of `S`, comma separated, in
/// declaration order. With `just_types` false the list is wrapped in the
/// declaration spelling, `tyset![...]`.
///
/// ```
/// use tyset_core::{tyset, format_set};
///
/// type Scalars = tyset![i32, f32, char];
///
/// assert_eq!(format_set::<Scalars>(true), "i32, f32, char");
/// assert_eq!(format_set::<Scalars>(false), "tyset![i32, f32, char]");
/// ```
pub fn format_set<S: ForEach>(just_types: bool) -> String {
    format_set_with::<S>(just_types, Verbosity::default())
}

/// [`format_set`] with an explicit verbosity.
pub fn format_set_with<S: ForEach>(just_types: bool, verbosity: Verbosity) -> String {
    let mut collector = NameCollector {
        verbosity,
        names: SmallVec::new(),
    };
    S::for_each(&mut collector);

    let mut out = CompactString::default();
    if !just_types {
        out.push_str("tyset![");
    }
    for (i, name) in collector.names.iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        out.push_str(name);
    }
    if !just_types {
        out.push(']');
    }
    String::from(out)
}
