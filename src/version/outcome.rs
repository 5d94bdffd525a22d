//! Outcome of checking one mod

use std::fmt;

use crate::version::info::{UNKNOWN_MOD_NAME, VersionInfo};

/// Classification of a checked mod
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpdateStatus {
    /// Installed version is the latest
    UpToDate,
    /// A newer version is published
    UpdateAvailable,
    /// No remote version could be obtained
    CheckFailed,
}

/// Local version paired with the remote version it was checked against
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModInfo {
    local: VersionInfo,
    remote: Option<VersionInfo>,
}

impl ModInfo {
    pub fn new(local: VersionInfo, remote: Option<VersionInfo>) -> Self {
        Self { local, remote }
    }

    pub fn local(&self) -> &VersionInfo {
        &self.local
    }

    pub fn into_local(self) -> VersionInfo {
        self.local
    }

    pub fn remote(&self) -> Option<&VersionInfo> {
        self.remote.as_ref()
    }

    pub fn check_failed(&self) -> bool {
        self.remote.is_none()
    }

    pub fn is_update_available(&self) -> bool {
        self.local.is_older_than(self.remote.as_ref())
    }

    pub fn status(&self) -> UpdateStatus {
        if self.check_failed() {
            UpdateStatus::CheckFailed
        } else if self.is_update_available() {
            UpdateStatus::UpdateAvailable
        } else {
            UpdateStatus::UpToDate
        }
    }
}

impl fmt::Display for ModInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let remote = self
            .remote
            .as_ref()
            .map(VersionInfo::version)
            .unwrap_or_else(|| "null".to_string());

        write!(
            f,
            "{} ({} => {})",
            self.local.name().unwrap_or(UNKNOWN_MOD_NAME),
            self.local.version(),
            remote
        )
    }
}
