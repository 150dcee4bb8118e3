// src/dialog/base.rs

//! Pieces shared by every dialog: target selection, token tables, and the
//! executor handle.

use tracing::{debug, info};

use crate::detect::{Capabilities, Helper, Platform};
use crate::exec::{CommandOutput, Executor};
use crate::settings::Settings;
use crate::types::{Buttons, Icon};

/// Program run when no dialog facility is available. Prints an empty line
/// and exits successfully.
pub const FALLBACK_PROGRAM: &str = "echo";

/// Facility a dialog command is built for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Target {
    /// WinForms through `powershell.exe`.
    Windows,
    /// `zenity` or one of its clones (`matedialog`, `qarma`).
    Zenity(Helper),
    Kdialog,
    /// Nothing usable; dialogs degrade to a no-op command.
    Fallback,
}

impl Target {
    /// Windows always uses WinForms; elsewhere the first helper present in
    /// priority order wins.
    pub fn select(platform: Platform, capabilities: &Capabilities) -> Self {
        if platform == Platform::Windows {
            return Target::Windows;
        }
        match capabilities.first_present() {
            Some(Helper::Kdialog) => Target::Kdialog,
            Some(helper) => Target::Zenity(helper),
            None => Target::Fallback,
        }
    }

    pub fn program(self) -> &'static str {
        match self {
            Target::Windows => "powershell.exe",
            Target::Zenity(helper) => helper.program(),
            Target::Kdialog => Helper::Kdialog.program(),
            Target::Fallback => FALLBACK_PROGRAM,
        }
    }
}

/// Icon token understood by the target.
///
/// | Icon     | helpers     | Windows |
/// |----------|-------------|---------|
/// | Info     | information | info    |
/// | Warning  | warning     | warning |
/// | Error    | error       | error   |
/// | Question | question    | question|
pub fn icon_name(icon: Icon, target: Target) -> &'static str {
    match icon {
        Icon::Warning => "warning",
        Icon::Error => "error",
        Icon::Question => "question",
        Icon::Info if target == Target::Windows => "info",
        Icon::Info => "information",
    }
}

/// Button layout token; WinForms `MessageBoxButtons` parses these
/// case-insensitively.
pub fn buttons_name(buttons: Buttons) -> &'static str {
    match buttons {
        Buttons::Ok => "ok",
        Buttons::OkCancel => "okcancel",
        Buttons::YesNo => "yesno",
        Buttons::YesNoCancel => "yesnocancel",
    }
}

/// Wrap a PowerShell script into a command line.
pub fn powershell_command(script: &str) -> String {
    format!("powershell.exe -Command \"{script}\"")
}

/// A running (or finished) dialog process.
#[derive(Debug)]
pub struct Dialog {
    executor: Executor,
}

impl Dialog {
    /// Start `command` with a backend from `settings`. Returns immediately.
    pub fn launch(settings: &Settings, command: String) -> Self {
        if settings.verbose {
            info!(command = %command, "running dialog command");
        } else {
            debug!(command = %command, "running dialog command");
        }

        let mut executor =
            Executor::with_backend(settings.backend.create()).with_poll_interval(settings.poll_interval);
        executor.start(command);
        Self { executor }
    }

    /// Non-blocking: `true` once the dialog process has exited.
    pub fn ready(&mut self) -> bool {
        self.executor.ready()
    }

    /// Block until the dialog closes.
    pub fn result(&mut self) -> CommandOutput {
        self.executor.result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn windows_ignores_helpers() {
        let caps = Capabilities::with_helpers(&[Helper::Zenity]);
        assert_eq!(Target::select(Platform::Windows, &caps), Target::Windows);
    }

    #[test]
    fn zenity_clones_share_the_zenity_target() {
        let caps = Capabilities::with_helpers(&[Helper::Qarma, Helper::Kdialog]);
        let target = Target::select(Platform::Posix, &caps);
        assert_eq!(target, Target::Zenity(Helper::Qarma));
        assert_eq!(target.program(), "qarma");
    }

    #[test]
    fn kdialog_then_fallback() {
        let kde = Capabilities::with_helpers(&[Helper::Kdialog]);
        assert_eq!(Target::select(Platform::Posix, &kde), Target::Kdialog);
        let bare = Capabilities::none();
        assert_eq!(Target::select(Platform::Posix, &bare), Target::Fallback);
        assert_eq!(Target::Fallback.program(), "echo");
    }

    #[test]
    fn info_icon_differs_per_target() {
        assert_eq!(icon_name(Icon::Info, Target::Windows), "info");
        assert_eq!(icon_name(Icon::Info, Target::Kdialog), "information");
        assert_eq!(icon_name(Icon::Warning, Target::Windows), "warning");
    }

    #[test]
    fn buttons_tokens() {
        assert_eq!(buttons_name(Buttons::YesNoCancel), "yesnocancel");
        assert_eq!(buttons_name(Buttons::Ok), "ok");
    }
}
