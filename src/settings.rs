// src/settings.rs

//! Settings shared by every dialog.
//!
//! Dialogs take a [`Settings`] value at construction. The convenience
//! constructors (`Message::new`, ...) use [`current`], which snapshots the
//! process-wide state:
//!
//! - the verbosity flag set by [`verbose`],
//! - the helper capabilities, probed lazily on first use and re-probed by
//!   [`rescan`].
//!
//! `rescan` must not race with dialog construction on other threads; callers
//! that rescan while dialogs are being created have to serialise the two.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tracing::info;

use crate::config::ConfigFile;
use crate::detect::{Capabilities, CapabilityCell, Platform};
use crate::exec::{BackendFactory, DEFAULT_POLL_INTERVAL};

/// How long notifications stay visible unless configured otherwise.
pub const DEFAULT_NOTIFY_TIMEOUT: Duration = Duration::from_millis(5000);

static VERBOSE: AtomicBool = AtomicBool::new(false);
static CAPABILITIES: CapabilityCell = CapabilityCell::new();

/// Everything a dialog needs to pick a target and run its command.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Log each command before running it.
    pub verbose: bool,
    /// Sleep between two liveness polls while blocking on a result.
    pub poll_interval: Duration,
    pub notify_timeout: Duration,
    pub platform: Platform,
    pub capabilities: Arc<Capabilities>,
    /// Creates the process backend of each dialog.
    pub backend: BackendFactory,
}

impl Settings {
    pub fn new(capabilities: Arc<Capabilities>) -> Self {
        Self {
            verbose: false,
            poll_interval: DEFAULT_POLL_INTERVAL,
            notify_timeout: DEFAULT_NOTIFY_TIMEOUT,
            platform: Platform::current(),
            capabilities,
            backend: BackendFactory::shell(),
        }
    }

    /// Global state overlaid with the values of a config file.
    pub fn from_config(cfg: &ConfigFile) -> Self {
        let section = cfg.settings();
        let mut settings = current();
        settings.verbose |= section.verbose;
        settings.poll_interval = Duration::from_millis(section.poll_interval_ms);
        settings.notify_timeout = Duration::from_millis(section.notify_timeout_ms);
        settings
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn with_notify_timeout(mut self, timeout: Duration) -> Self {
        self.notify_timeout = timeout;
        self
    }

    pub fn with_platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn with_backend(mut self, backend: BackendFactory) -> Self {
        self.backend = backend;
        self
    }
}

/// Enable or disable command logging for dialogs built from [`current`].
pub fn verbose(value: bool) {
    VERBOSE.store(value, Ordering::Relaxed);
}

pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::Relaxed)
}

/// Process-wide capabilities, probing the system on first call.
pub fn capabilities() -> Arc<Capabilities> {
    CAPABILITIES.get_or_init(|| Capabilities::detect(Platform::current()))
}

/// Forget the cached capabilities and probe again.
pub fn rescan() -> Arc<Capabilities> {
    info!("rescanning dialog helpers");
    CAPABILITIES.reset();
    capabilities()
}

/// Snapshot of the global settings.
pub fn current() -> Settings {
    Settings::new(capabilities()).with_verbose(is_verbose())
}
