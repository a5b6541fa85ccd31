// src/diff.rs

use std::collections::HashSet;
use tracing::{info, instrument, warn};

use crate::config::NOTIFY_TITLE;
use crate::error::Result;
use crate::notify::Notifier;
use crate::record::{Record, Signature};
use crate::snapshot::SnapshotStore;

/// What a comparison found and whether it rewrote the snapshot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffOutcome {
    pub new_records: Vec<Record>,
    pub snapshot_written: bool,
}

/// Records of `current` whose content is absent from `existing`, in `current` order.
pub fn new_records<'a>(current: &'a [Record], existing: &[Record]) -> Vec<&'a Record> {
    let known: HashSet<Signature> = existing.iter().map(Record::signature).collect();
    current
        .iter()
        .filter(|r| !known.contains(&r.signature()))
        .collect()
}

/// Announce every new device, then replace the snapshot with all of `current`.
///
/// Each new device gets a console notice followed by a desktop notification.
/// When nothing is new a single notice is emitted and the snapshot is left as
/// it is. A notifier failure is logged and does not stop the save.
#[instrument(level = "info", skip_all, fields(current = current.len(), existing = existing.len()))]
pub fn compare_and_notify(
    current: &[Record],
    existing: &[Record],
    store: &SnapshotStore,
    notifier: &dyn Notifier,
) -> Result<DiffOutcome> {
    let fresh: Vec<Record> = new_records(current, existing).into_iter().cloned().collect();

    if fresh.is_empty() {
        notifier.notice("No new devices detected.");
        info!("no new devices");
        return Ok(DiffOutcome {
            new_records: fresh,
            snapshot_written: false,
        });
    }

    for record in &fresh {
        notifier.notice(&format!("New device added: {}", record));
        if let Err(e) = notifier.notify(NOTIFY_TITLE, &format!("New device: {}", record)) {
            warn!(error = %e, "notification failed");
        }
    }

    // whole current list, known devices included
    store.save(current)?;
    info!(new = fresh.len(), "snapshot updated");

    Ok(DiffOutcome {
        new_records: fresh,
        snapshot_written: true,
    })
}
