// src/detect/mod.rs

//! Detection of the dialog helper programs installed on this system.
//!
//! - [`Helper`] lists the known helpers in priority order.
//! - [`Capabilities`] records which of them were found.
//! - [`cell`] memoises the result for the process lifetime.

pub mod cell;

use std::time::Duration;

use tracing::{debug, info};

use crate::exec::Executor;

pub use cell::CapabilityCell;

/// Family of dialog facilities available on the build target.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    /// WinForms dialogs through PowerShell; no helper programs.
    Windows,
    /// External helper programs found in `PATH`.
    Posix,
}

impl Platform {
    pub fn current() -> Self {
        if cfg!(windows) {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Platform::current()
    }
}

const HELPER_COUNT: usize = 4;

/// External dialog helpers, in the order they are preferred.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Helper {
    Zenity,
    Matedialog,
    Qarma,
    Kdialog,
}

impl Helper {
    pub const ALL: [Helper; HELPER_COUNT] = [
        Helper::Zenity,
        Helper::Matedialog,
        Helper::Qarma,
        Helper::Kdialog,
    ];

    pub fn program(self) -> &'static str {
        match self {
            Helper::Zenity => "zenity",
            Helper::Matedialog => "matedialog",
            Helper::Qarma => "qarma",
            Helper::Kdialog => "kdialog",
        }
    }

    fn index(self) -> usize {
        match self {
            Helper::Zenity => 0,
            Helper::Matedialog => 1,
            Helper::Qarma => 2,
            Helper::Kdialog => 3,
        }
    }
}

/// Presence flag per known helper.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Capabilities {
    present: [bool; HELPER_COUNT],
}

impl Capabilities {
    /// No helper available.
    pub fn none() -> Self {
        Self::default()
    }

    /// Capabilities with exactly the given helpers present.
    pub fn with_helpers(helpers: &[Helper]) -> Self {
        let mut caps = Self::none();
        for helper in helpers {
            caps.set(*helper, true);
        }
        caps
    }

    /// Probe the system with `which`.
    ///
    /// Windows never probes: dialogs there use WinForms directly.
    pub fn detect(platform: Platform) -> Self {
        match platform {
            Platform::Windows => Self::none(),
            Platform::Posix => Self::detect_with(check_program),
        }
    }

    /// Build capabilities from an arbitrary probe, called once per helper.
    pub fn detect_with(mut probe: impl FnMut(&str) -> bool) -> Self {
        let mut caps = Self::none();
        for helper in Helper::ALL {
            let found = probe(helper.program());
            debug!(helper = helper.program(), found, "probed dialog helper");
            caps.set(helper, found);
        }
        info!(helpers = ?caps.present_helpers(), "dialog helper detection complete");
        caps
    }

    pub fn has(&self, helper: Helper) -> bool {
        self.present[helper.index()]
    }

    pub fn set(&mut self, helper: Helper, present: bool) {
        self.present[helper.index()] = present;
    }

    pub fn first_present(&self) -> Option<Helper> {
        Helper::ALL.into_iter().find(|h| self.has(*h))
    }

    pub fn present_helpers(&self) -> Vec<Helper> {
        Helper::ALL.into_iter().filter(|h| self.has(*h)).collect()
    }
}

const PROBE_POLL_INTERVAL: Duration = Duration::from_millis(20);

/// A helper is present when `which` exits with status 0.
fn check_program(program: &str) -> bool {
    let mut exec = Executor::new().with_poll_interval(PROBE_POLL_INTERVAL);
    exec.start(format!("which {program} 2>/dev/null"));
    exec.result().exit_code == 0
}
