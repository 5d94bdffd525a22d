//! Version checking layer for installed mods
//!
//! This module parses version descriptors, compares local and remote versions,
//! and classifies every checked mod into one of three outcomes.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │   Loader    │────▶│   Checker   │◀────│   Fetcher   │
//! │  (local)    │     │ (orchestr.) │     │  (remote)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                            │
//!                            ▼
//!                     ┌─────────────┐
//!                     │ Aggregator  │
//!                     │  (buckets)  │
//!                     └─────────────┘
//! ```
//!
//! # Modules
//!
//! - [`info`]: `VersionInfo` parsing, ordering and rendering
//! - [`outcome`]: `ModInfo` pairing a local version with its remote counterpart
//! - [`aggregator`]: Accumulates outcomes for one check run
//! - [`document`]: Descriptor text decoding
//! - [`fetcher`]: Trait for retrieving remote descriptors
//! - [`fetchers`]: Concrete fetcher implementations (HTTP)
//! - [`loader`]: Trait and filesystem implementation for local descriptors
//! - [`checker`]: Runs checks for a batch of mods concurrently
//! - [`error`]: Error types

pub mod aggregator;
pub mod checker;
pub mod document;
pub mod error;
pub mod fetcher;
pub mod fetchers;
pub mod info;
pub mod loader;
pub mod outcome;
