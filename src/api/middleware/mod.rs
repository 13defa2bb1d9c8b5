//! API Middleware
//!
//! Contains middleware for:
//! - per-request start timestamps
//! - HTTP metrics recording

pub mod metrics;

pub use self::metrics::{start_timer, track_metrics};
