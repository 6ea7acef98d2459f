//! The todo temporal lifecycle model.
//!
//! Everything here is pure: no I/O, no shared state, and no hidden clock.
//! Callers sample "now" once and pass it in, which keeps the create path,
//! the update path and countdown polling consistent and testable.
//!
//! - [`window`]: time normalization of `(start_at, end_at)` input
//! - [`status`]: status resolution against the window
//! - [`countdown`]: countdown metrics for polling displays
//! - [`tracker`]: per-session phase edge detection

pub mod countdown;
pub mod status;
pub mod tracker;
pub mod window;

pub use countdown::CountdownMetrics;
pub use status::resolve_status;
pub use tracker::{PhaseEdge, PhaseTracker};
pub use window::{
    clamp_to_future, ensure_minimum_duration, parse_instant, parse_supplied, Window,
    WindowPolicy, DEFAULT_DURATION, MIN_DURATION,
};
