//! Checks installed mods for newer published versions
//!
//! - [`version`]: descriptor parsing, comparison and the per-run aggregator
//! - [`report`]: console and JSON rendering of a check run
//! - [`config`]: user configuration and data paths
//! - [`logging`]: file-backed `tracing` subscriber

pub mod config;
pub mod logging;
pub mod report;
pub mod version;
