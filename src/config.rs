// src/config.rs

use clap::Parser;
use std::path::PathBuf;

/// Desktop-browser identity sent with every fetch.
pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

pub const DEFAULT_SNAPSHOT_FILE: &str = "devices.json";

pub const APP_NAME: &str = "Device Checker";
pub const NOTIFY_TITLE: &str = "New Device Detected";

/// CSS selector for the one table we watch.
pub const TABLE_SELECTOR: &str = "table#devices";

/// Command-line args: page URL and where to keep the snapshot.
#[derive(Parser, Debug)]
#[command(name = "devicewatch", version)]
#[command(about = "Check for new devices in an HTML table from a URL.")]
pub struct Args {
    /// The URL to fetch the HTML from
    pub url: String,

    /// Path to the JSON file for storing devices
    #[arg(long = "file", default_value = DEFAULT_SNAPSHOT_FILE)]
    pub file: PathBuf,
}

/// Resolved settings for one check run.
#[derive(Debug, Clone)]
pub struct CheckConfig {
    pub url: String,
    pub snapshot_path: PathBuf,
}

impl From<Args> for CheckConfig {
    fn from(args: Args) -> Self {
        Self {
            url: args.url,
            snapshot_path: args.file,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_defaults_to_devices_json() {
        let args = Args::try_parse_from(["devicewatch", "http://router.local/"]).unwrap();
        let cfg = CheckConfig::from(args);
        assert_eq!(cfg.url, "http://router.local/");
        assert_eq!(cfg.snapshot_path, PathBuf::from("devices.json"));
    }

    #[test]
    fn file_flag_overrides_default() {
        let args =
            Args::try_parse_from(["devicewatch", "http://x/", "--file", "/tmp/seen.json"]).unwrap();
        assert_eq!(args.file, PathBuf::from("/tmp/seen.json"));
    }

    #[test]
    fn url_is_required() {
        assert!(Args::try_parse_from(["devicewatch"]).is_err());
    }
}
