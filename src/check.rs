// src/check.rs

use tracing::{info, instrument};

use crate::config::CheckConfig;
use crate::diff::{compare_and_notify, DiffOutcome};
use crate::error::Result;
use crate::extract::extract_devices;
use crate::fetch;
use crate::notify::Notifier;
use crate::snapshot::SnapshotStore;

/// One full pass: fetch → extract → load snapshot → diff/notify.
#[instrument(level = "info", skip_all, fields(url = %cfg.url))]
pub async fn run(cfg: &CheckConfig, notifier: &dyn Notifier) -> Result<DiffOutcome> {
    let client = fetch::client()?;
    let html = fetch::fetch_page(&client, &cfg.url).await?;
    let current = extract_devices(&html)?;

    let store = SnapshotStore::new(&cfg.snapshot_path);
    let existing = store.load()?;
    info!(
        current = current.len(),
        known = existing.len(),
        snapshot = %store.path().display(),
        "comparing"
    );

    compare_and_notify(&current, &existing, &store, notifier)
}
