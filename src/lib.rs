pub mod check;
pub mod config;
pub mod diff;
pub mod error;
pub mod extract;
pub mod fetch;
pub mod notify;
pub mod record;
pub mod snapshot;

pub use config::CheckConfig;
pub use diff::{compare_and_notify, new_records, DiffOutcome};
pub use error::CheckError;
pub use notify::{DesktopNotifier, Notifier};
pub use record::{Record, Signature};
pub use snapshot::SnapshotStore;
