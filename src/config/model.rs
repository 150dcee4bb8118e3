// src/config/model.rs

use serde::Deserialize;

/// Top-level configuration as read from a TOML file.
///
/// ```toml
/// [settings]
/// verbose = true
/// poll_interval_ms = 200
/// notify_timeout_ms = 5000
/// ```
///
/// All sections are optional and have reasonable defaults.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub settings: SettingsSection,
}

/// `[settings]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SettingsSection {
    /// Log every dialog command before it runs.
    #[serde(default)]
    pub verbose: bool,

    /// Backoff between two liveness polls while waiting for a dialog.
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,

    /// How long notifications stay on screen.
    #[serde(default = "default_notify_timeout_ms")]
    pub notify_timeout_ms: u64,
}

fn default_poll_interval_ms() -> u64 {
    200
}

fn default_notify_timeout_ms() -> u64 {
    5000
}

impl Default for SettingsSection {
    fn default() -> Self {
        Self {
            verbose: false,
            poll_interval_ms: default_poll_interval_ms(),
            notify_timeout_ms: default_notify_timeout_ms(),
        }
    }
}

/// Configuration that passed validation.
///
/// Only obtainable through `TryFrom<RawConfigFile>` (see
/// [`validate`](super::validate)) or [`ConfigFile::default`].
#[derive(Debug, Clone, Default)]
pub struct ConfigFile {
    settings: SettingsSection,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(settings: SettingsSection) -> Self {
        Self { settings }
    }

    pub fn settings(&self) -> &SettingsSection {
        &self.settings
    }
}
