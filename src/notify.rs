// src/notify.rs

use anyhow::{Context, Result};
use notify_rust::Notification;

use crate::config::APP_NAME;

/// Somewhere to announce a newly seen device.
pub trait Notifier {
    /// One console line for the user. Goes to stdout unless overridden.
    fn notice(&self, line: &str) {
        println!("{line}");
    }

    fn notify(&self, title: &str, message: &str) -> Result<()>;
}

/// Pops an OS desktop notification under a fixed application name.
#[derive(Debug, Clone)]
pub struct DesktopNotifier {
    app_name: String,
}

impl DesktopNotifier {
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
        }
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new(APP_NAME)
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, title: &str, message: &str) -> Result<()> {
        Notification::new()
            .appname(&self.app_name)
            .summary(title)
            .body(message)
            .show()
            .with_context(|| format!("showing desktop notification '{}'", title))?;
        Ok(())
    }
}

/// What a [`RecordingNotifier`] saw, in call order.
#[cfg(test)]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Sent {
    Notice(String),
    Desktop { title: String, message: String },
}

/// Test double that keeps every notice and notification it was handed.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub sent: std::cell::RefCell<Vec<Sent>>,
    pub fail: bool,
}

#[cfg(test)]
impl RecordingNotifier {
    pub fn desktop_count(&self) -> usize {
        self.sent
            .borrow()
            .iter()
            .filter(|s| matches!(s, Sent::Desktop { .. }))
            .count()
    }
}

#[cfg(test)]
impl Notifier for RecordingNotifier {
    fn notice(&self, line: &str) {
        self.sent.borrow_mut().push(Sent::Notice(line.to_string()));
    }

    fn notify(&self, title: &str, message: &str) -> Result<()> {
        self.sent.borrow_mut().push(Sent::Desktop {
            title: title.to_string(),
            message: message.to_string(),
        });
        if self.fail {
            anyhow::bail!("notification daemon unavailable");
        }
        Ok(())
    }
}
