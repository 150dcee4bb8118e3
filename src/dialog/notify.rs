// src/dialog/notify.rs

//! Desktop notifications.

use std::time::Duration;

use crate::exec::CommandOutput;
use crate::settings::{self, Settings};
use crate::types::Icon;

use super::base::{Dialog, Target, icon_name, powershell_command};
use super::quote::{powershell_quote, shell_quote};

/// A notification popup, shown as soon as it is constructed.
#[derive(Debug)]
pub struct Notify {
    dialog: Dialog,
}

impl Notify {
    pub fn new(title: &str, message: &str, icon: Icon) -> Self {
        Self::with_settings(&settings::current(), title, message, icon)
    }

    pub fn with_settings(settings: &Settings, title: &str, message: &str, icon: Icon) -> Self {
        let target = Target::select(settings.platform, &settings.capabilities);
        let command = Self::command(target, title, message, icon, settings.notify_timeout);
        Self {
            dialog: Dialog::launch(settings, command),
        }
    }

    /// Command line that shows this notification on `target`.
    ///
    /// Notifications have no question glyph, so `Icon::Question` is shown as
    /// `Icon::Info`.
    pub fn command(
        target: Target,
        title: &str,
        message: &str,
        icon: Icon,
        timeout: Duration,
    ) -> String {
        let icon = match icon {
            Icon::Question => Icon::Info,
            other => other,
        };

        match target {
            Target::Windows => {
                let delay = timeout.as_millis();
                powershell_command(&format!(
                    "Add-Type -AssemblyName System.Windows.Forms; \
                     $exe = (Get-Process -id {pid}).Path; \
                     $popup = New-Object System.Windows.Forms.NotifyIcon; \
                     $popup.Icon = [System.Drawing.Icon]::ExtractAssociatedIcon($exe); \
                     $popup.Visible = $true; \
                     $popup.ShowBalloonTip({delay}, {title}, {message}, '{icon}'); \
                     Start-Sleep -Milliseconds {delay}; \
                     $popup.Dispose();",
                    pid = std::process::id(),
                    title = powershell_quote(title),
                    message = powershell_quote(message),
                    icon = icon_name(icon, target),
                ))
            }
            Target::Zenity(_) => format!(
                "{} --notification --window-icon {} --text {}",
                target.program(),
                icon_name(icon, target),
                shell_quote(&format!("{title}\n{message}")),
            ),
            Target::Kdialog => format!(
                "{} --icon {} --title {} --passivepopup {} {}",
                target.program(),
                icon_name(icon, target),
                shell_quote(title),
                shell_quote(message),
                timeout.as_secs().max(1),
            ),
            Target::Fallback => target.program().to_string(),
        }
    }

    pub fn ready(&mut self) -> bool {
        self.dialog.ready()
    }

    /// Block until the notification helper exits; `true` if it succeeded.
    pub fn result(&mut self) -> bool {
        self.dialog.result().success()
    }

    pub fn output(&mut self) -> CommandOutput {
        self.dialog.result()
    }
}
