//! Runs version checks for a batch of mods

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use futures::future::join_all;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::version::aggregator::UpdateAggregator;
use crate::version::document::decode_document;
use crate::version::fetcher::DescriptorFetcher;
use crate::version::info::VersionInfo;
use crate::version::loader::DescriptorLoader;
use crate::version::outcome::ModInfo;

/// A unit whose local descriptor could not be read or parsed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedUnit {
    pub unit_id: String,
    pub reason: String,
}

/// Everything produced by one check run
#[derive(Debug, Default)]
pub struct CheckRun {
    pub aggregator: UpdateAggregator,
    pub skipped: Vec<SkippedUnit>,
}

enum LocalOutcome {
    Checked,
    Skipped(SkippedUnit),
}

fn load_local<L: DescriptorLoader + ?Sized>(
    loader: &L,
    unit_id: &str,
) -> Result<VersionInfo, String> {
    let text = loader
        .load_descriptor(unit_id)
        .map_err(|e| e.to_string())?;
    let document = decode_document(&text).map_err(|e| e.to_string())?;
    VersionInfo::from_local(&document).map_err(|e| e.to_string())
}

/// Check a single unit and report the result into `aggregator`.
///
/// Handles:
/// - Loading and parsing the local descriptor (failure skips the unit)
/// - Fetching the master descriptor (failure records the unit as failed)
/// - Parsing the master descriptor (failure leaves the remote version absent)
async fn check_unit<L, F>(
    loader: &L,
    fetcher: &F,
    unit_id: &str,
    aggregator: &Mutex<UpdateAggregator>,
) -> LocalOutcome
where
    L: DescriptorLoader + ?Sized,
    F: DescriptorFetcher + ?Sized,
{
    let local = match load_local(loader, unit_id) {
        Ok(local) => local,
        Err(reason) => {
            error!("Skipping {}: {}", unit_id, reason);
            return LocalOutcome::Skipped(SkippedUnit {
                unit_id: unit_id.to_string(),
                reason,
            });
        }
    };

    // from_local guarantees a master URL
    let master_url = local.master_url().unwrap_or_default().to_string();

    let text = match fetcher.fetch_descriptor(&master_url).await {
        Ok(text) => text,
        Err(e) => {
            warn!("Failed to fetch master descriptor for {}: {}", local, e);
            lock(aggregator).add_failed(local);
            return LocalOutcome::Checked;
        }
    };

    let remote = decode_document(&text)
        .and_then(|document| VersionInfo::from_master(&document))
        .inspect_err(|e| warn!("Failed to parse master descriptor for {}: {}", local, e))
        .ok();

    let mod_info = ModInfo::new(local, remote);
    debug!("Checked {}: {:?}", mod_info, mod_info.status());
    lock(aggregator).record(mod_info);

    LocalOutcome::Checked
}

fn lock(aggregator: &Mutex<UpdateAggregator>) -> std::sync::MutexGuard<'_, UpdateAggregator> {
    // Each add is a single push, so a poisoned guard still holds consistent buckets
    aggregator.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Check every unit concurrently and collect the outcomes.
///
/// Checks start `stagger` apart to avoid hammering shared hosts. Every unit
/// ends up in exactly one aggregator bucket, or in `skipped` when its local
/// descriptor is unusable.
pub async fn check_all<L, F>(
    loader: &L,
    fetcher: &F,
    unit_ids: Vec<String>,
    stagger: Duration,
) -> CheckRun
where
    L: DescriptorLoader + ?Sized,
    F: DescriptorFetcher + ?Sized,
{
    info!("Checking {} mods for updates", unit_ids.len());

    let aggregator = Mutex::new(UpdateAggregator::new());

    let futures = unit_ids.iter().enumerate().map(|(i, unit_id)| {
        let delay = stagger * i as u32;
        let aggregator = &aggregator;
        async move {
            sleep(delay).await;
            check_unit(loader, fetcher, unit_id, aggregator).await
        }
    });

    let skipped = join_all(futures)
        .await
        .into_iter()
        .filter_map(|outcome| match outcome {
            LocalOutcome::Checked => None,
            LocalOutcome::Skipped(unit) => Some(unit),
        })
        .collect();

    let aggregator = aggregator
        .into_inner()
        .unwrap_or_else(PoisonError::into_inner);

    info!(
        "Found updates for {} of {} mods",
        aggregator.updated().len(),
        aggregator.num_checked()
    );

    CheckRun {
        aggregator,
        skipped,
    }
}
