// Diagnostic event macros. They forward to `tracing` when the `tracing`
// feature is enabled and expand to nothing otherwise.
#![allow(unused_macros)]

macro_rules! trace {
    ($($args:tt)+) => {{
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($args)+);
    }};
}

macro_rules! debug {
    ($($args:tt)+) => {{
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($args)+);
    }};
}
