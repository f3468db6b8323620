//! Mock mode: fixture data and simulated latency
//!
//! Used whenever no backend base URL is configured.

pub mod fixtures;
pub mod latency;

pub use fixtures::FixtureProvider;
pub use latency::{MockLatency, MockOperation};
