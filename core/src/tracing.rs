//! Tracing utilities for iteration observability.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate.
//! The macro no-ops when the feature is disabled, avoiding `#[cfg]`
//! boilerplate at every call site.

/// Emit a trace-level event naming the type tag about to be visited.
///
/// ```ignore
/// tyset_trace_visit!(Head);
/// ```
#[macro_export]
macro_rules! tyset_trace_visit {
    ($ty:ty) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!(element = ::core::any::type_name::<$ty>(), "tyset.visit");
    };
}
