#![allow(dead_code)]

use std::sync::Arc;
use std::time::Duration;

use portable_dialogs::detect::{Capabilities, Helper, Platform};
use portable_dialogs::settings::Settings;

use crate::fake_backend::FakeProcesses;

/// Builder for `Settings` wired to a fake process backend.
pub struct SettingsBuilder {
    helpers: Vec<Helper>,
    platform: Platform,
    verbose: bool,
    notify_timeout: Duration,
}

impl SettingsBuilder {
    pub fn new() -> Self {
        Self {
            helpers: Vec::new(),
            platform: Platform::Posix,
            verbose: false,
            notify_timeout: Duration::from_secs(5),
        }
    }

    pub fn with_helper(mut self, helper: Helper) -> Self {
        self.helpers.push(helper);
        self
    }

    pub fn windows(mut self) -> Self {
        self.platform = Platform::Windows;
        self
    }

    pub fn verbose(mut self, val: bool) -> Self {
        self.verbose = val;
        self
    }

    pub fn notify_timeout(mut self, timeout: Duration) -> Self {
        self.notify_timeout = timeout;
        self
    }

    /// Build settings whose dialogs run on `processes`, polling every
    /// millisecond so blocking calls return quickly.
    pub fn build(self, processes: &FakeProcesses) -> Settings {
        Settings::new(Arc::new(Capabilities::with_helpers(&self.helpers)))
            .with_platform(self.platform)
            .with_verbose(self.verbose)
            .with_notify_timeout(self.notify_timeout)
            .with_poll_interval(Duration::from_millis(1))
            .with_backend(processes.factory())
    }
}

impl Default for SettingsBuilder {
    fn default() -> Self {
        Self::new()
    }
}
