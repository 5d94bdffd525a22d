//! Rendering of check results for the console

use serde::Serialize;

use crate::version::checker::CheckRun;
use crate::version::info::{UNKNOWN_MOD_NAME, VersionInfo};
use crate::version::outcome::ModInfo;

/// Machine-readable summary of a check run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Summary {
    pub num_checked: usize,
    pub updates: Vec<ModEntry>,
    pub up_to_date: Vec<ModEntry>,
    pub failed: Vec<ModEntry>,
    pub skipped: Vec<SkippedEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModEntry {
    pub name: String,
    pub local_version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remote_version: Option<String>,
    pub thread_url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedEntry {
    pub unit_id: String,
    pub reason: String,
}

impl ModEntry {
    fn from_local(local: &VersionInfo, remote: Option<&VersionInfo>) -> Self {
        Self {
            name: local.name().unwrap_or(UNKNOWN_MOD_NAME).to_string(),
            local_version: local.version(),
            remote_version: remote.map(VersionInfo::version),
            thread_url: local.thread_url(),
        }
    }

    fn from_mod(info: &ModInfo) -> Self {
        Self::from_local(info.local(), info.remote())
    }
}

impl From<&CheckRun> for Summary {
    fn from(run: &CheckRun) -> Self {
        let aggregator = &run.aggregator;
        Self {
            num_checked: aggregator.num_checked(),
            updates: aggregator.updated().iter().map(ModEntry::from_mod).collect(),
            up_to_date: aggregator
                .unchanged()
                .iter()
                .map(ModEntry::from_mod)
                .collect(),
            failed: aggregator
                .failed()
                .iter()
                .map(|local| ModEntry::from_local(local, None))
                .collect(),
            skipped: run
                .skipped
                .iter()
                .map(|s| SkippedEntry {
                    unit_id: s.unit_id.clone(),
                    reason: s.reason.clone(),
                })
                .collect(),
        }
    }
}

/// Render a human-readable report of a check run
pub fn render_text(run: &CheckRun) -> String {
    let aggregator = &run.aggregator;

    let mut lines = vec![format!(
        "Found updates for {} of {} mods",
        aggregator.updated().len(),
        aggregator.num_checked()
    )];

    let mut section = |title: &str, entries: Vec<String>| {
        if !entries.is_empty() {
            lines.push(String::new());
            lines.push(format!("{}:", title));
            lines.extend(entries.into_iter().map(|entry| format!("  {}", entry)));
        }
    };

    section(
        "Updates available",
        aggregator
            .updated()
            .iter()
            .map(|info| format!("{} ({})", info, info.local().thread_url()))
            .collect(),
    );
    section(
        "Update check failed",
        aggregator.failed().iter().map(ToString::to_string).collect(),
    );
    section(
        "Skipped (unreadable descriptor)",
        run.skipped
            .iter()
            .map(|skipped| format!("{}: {}", skipped.unit_id, skipped.reason))
            .collect(),
    );
    section(
        "Up to date",
        aggregator
            .unchanged()
            .iter()
            .map(|info| info.local().to_string())
            .collect(),
    );

    lines.join("\n") + "\n"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::version::aggregator::UpdateAggregator;
    use crate::version::checker::SkippedUnit;
    use serde_json::json;

    fn local(name: &str, major: u32, minor: u32, patch: &str) -> VersionInfo {
        VersionInfo::from_local(&json!({
            "modName": name,
            "masterVersionFile": "https://example.com/x.version",
            "modThreadId": 100,
            "modVersion": { "major": major, "minor": minor, "patch": patch }
        }))
        .unwrap()
    }

    fn sample_run() -> CheckRun {
        let mut aggregator = UpdateAggregator::new();
        aggregator.add_update(ModInfo::new(
            local("LazyLib", 2, 4, "0"),
            Some(VersionInfo::new(2, 5, "0")),
        ));
        aggregator.add_no_update(ModInfo::new(
            local("Nexerelin", 0, 11, "b"),
            Some(VersionInfo::new(0, 11, "b")),
        ));
        aggregator.add_failed(local("GraphicsLib", 1, 0, "0"));

        CheckRun {
            aggregator,
            skipped: vec![SkippedUnit {
                unit_id: "Broken/broken.version".to_string(),
                reason: "Missing required field: masterVersionFile".to_string(),
            }],
        }
    }

    #[test]
    fn render_text_lists_every_bucket() {
        let text = render_text(&sample_run());

        assert_eq!(
            text,
            "Found updates for 1 of 3 mods\n\
             \n\
             Updates available:\n  \
             LazyLib (2.4 => 2.5) (http://fractalsoftworks.com/forum/index.php?topic=100.0)\n\
             \n\
             Update check failed:\n  \
             GraphicsLib v1\n\
             \n\
             Skipped (unreadable descriptor):\n  \
             Broken/broken.version: Missing required field: masterVersionFile\n\
             \n\
             Up to date:\n  \
             Nexerelin v0.11b\n"
        );
    }

    #[test]
    fn render_text_for_empty_run_has_only_header() {
        assert_eq!(
            render_text(&CheckRun::default()),
            "Found updates for 0 of 0 mods\n"
        );
    }

    #[test]
    fn summary_serializes_to_camel_case_json() {
        let summary = Summary::from(&sample_run());

        let value = serde_json::to_value(&summary).unwrap();

        assert_eq!(value["numChecked"], 3);
        assert_eq!(value["updates"][0]["remoteVersion"], "2.5");
        assert_eq!(value["upToDate"][0]["localVersion"], "0.11b");
        assert!(value["failed"][0].get("remoteVersion").is_none());
        assert_eq!(value["skipped"][0]["unitId"], "Broken/broken.version");
    }
}
