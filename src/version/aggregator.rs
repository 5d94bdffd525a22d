//! Accumulates the outcomes of one check run

use crate::version::info::VersionInfo;
use crate::version::outcome::{ModInfo, UpdateStatus};

/// Buckets checked mods by outcome.
///
/// Entries are only ever appended; each bucket keeps insertion order.
#[derive(Debug, Default)]
pub struct UpdateAggregator {
    updated: Vec<ModInfo>,
    unchanged: Vec<ModInfo>,
    failed: Vec<VersionInfo>,
    num_checked: usize,
}

impl UpdateAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a mod whose remote version could not be obtained
    pub fn add_failed(&mut self, local: VersionInfo) {
        self.failed.push(local);
        self.num_checked += 1;
    }

    /// Record a mod with a newer remote version.
    ///
    /// The caller is expected to have checked `is_update_available`.
    pub fn add_update(&mut self, info: ModInfo) {
        self.updated.push(info);
        self.num_checked += 1;
    }

    pub fn add_no_update(&mut self, info: ModInfo) {
        self.unchanged.push(info);
        self.num_checked += 1;
    }

    /// Route a checked mod to the bucket matching its status
    pub fn record(&mut self, info: ModInfo) {
        match info.status() {
            UpdateStatus::UpdateAvailable => self.add_update(info),
            UpdateStatus::UpToDate => self.add_no_update(info),
            UpdateStatus::CheckFailed => self.add_failed(info.into_local()),
        }
    }

    pub fn failed(&self) -> &[VersionInfo] {
        &self.failed
    }

    pub fn updated(&self) -> &[ModInfo] {
        &self.updated
    }

    pub fn unchanged(&self) -> &[ModInfo] {
        &self.unchanged
    }

    pub fn num_checked(&self) -> usize {
        self.num_checked
    }
}
