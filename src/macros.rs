//! Logging helpers.
//!
//! Graph events go through `tracing` when the `tracing` feature is enabled and
//! compile to nothing otherwise, so arguments must not carry side effects.
//!
//! ```ignore
//! trace_graph!(node = %id, "node added");
//! ```

/// TRACE-level graph event.
#[cfg(feature = "tracing")]
macro_rules! trace_graph {
    ($($arg:tt)+) => {
        tracing::trace!(target: "halo_graph", $($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_graph {
    ($($arg:tt)+) => {};
}

/// DEBUG-level graph event, for rejected or ignored requests.
#[cfg(feature = "tracing")]
macro_rules! debug_graph {
    ($($arg:tt)+) => {
        tracing::debug!(target: "halo_graph", $($arg)+)
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! debug_graph {
    ($($arg:tt)+) => {};
}
