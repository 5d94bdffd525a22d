//! Shared test utilities

mod fetcher;
mod mods;

pub use fetcher::StubFetcher;
pub use mods::{ModsDir, local_descriptor, master_descriptor};
