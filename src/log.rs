//! Internal logging shims.
//!
//! When the `tracing` feature is enabled these macros forward to [`tracing`].
//! When it is disabled they expand to nothing, so call sites never need
//! `#[cfg]` annotations.
//!
//! [`tracing`]: https://docs.rs/tracing

// Only one side of each cfg pair is active at a time.
#![allow(unused_macros)]

// ---- feature = "tracing" ----

/// Emits a `TRACE` level event.
#[cfg(feature = "tracing")]
macro_rules! trace {
    ($($tt:tt)*) => { ::tracing::trace!($($tt)*) }
}

/// Emits a `DEBUG` level event.
#[cfg(feature = "tracing")]
macro_rules! debug {
    ($($tt:tt)*) => { ::tracing::debug!($($tt)*) }
}

/// Emits a `WARN` level event.
#[cfg(feature = "tracing")]
macro_rules! warn {
    ($($tt:tt)*) => { ::tracing::warn!($($tt)*) }
}

// ---- not(feature = "tracing") ----

/// Emits a `TRACE` level event (disabled).
#[cfg(not(feature = "tracing"))]
macro_rules! trace {
    ($($tt:tt)*) => {};
}

/// Emits a `DEBUG` level event (disabled).
#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($tt:tt)*) => {};
}

/// Emits a `WARN` level event (disabled).
#[cfg(not(feature = "tracing"))]
macro_rules! warn {
    ($($tt:tt)*) => {};
}
