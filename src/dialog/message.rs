// src/dialog/message.rs

//! Message boxes.
//!
//! Per-target button layouts:
//!
//! | Buttons       | zenity family                                   | kdialog                 |
//! |---------------|-------------------------------------------------|-------------------------|
//! | ok            | `--info` / `--warning` / `--error`              | `--msgbox` / `--sorry` / `--error` |
//! | ok_cancel     | `--question --ok-label=OK --cancel-label=Cancel`| `--[warning]yesno` + OK/Cancel labels |
//! | yes_no        | `--question`                                    | `--[warning]yesno`      |
//! | yes_no_cancel | `--list --column '' --hide-header 'Yes' 'No'`   | `--[warning]yesnocancel`|
//!
//! Zenity has no three-button question box, so `yes_no_cancel` is shown as a
//! two-row list; closing the list counts as cancel.

use crate::exec::{CommandOutput, EXIT_CODE_UNKNOWN};
use crate::settings::{self, Settings};
use crate::types::{Buttons, Choice, Icon};

use super::base::{Dialog, Target, buttons_name, icon_name, powershell_command};
use super::quote::{powershell_quote, shell_quote};

/// A message box, shown as soon as it is constructed.
#[derive(Debug)]
pub struct Message {
    dialog: Dialog,
    target: Target,
    buttons: Buttons,
}

impl Message {
    pub fn new(title: &str, text: &str, buttons: Buttons, icon: Icon) -> Self {
        Self::with_settings(&settings::current(), title, text, buttons, icon)
    }

    pub fn with_settings(
        settings: &Settings,
        title: &str,
        text: &str,
        buttons: Buttons,
        icon: Icon,
    ) -> Self {
        let target = Target::select(settings.platform, &settings.capabilities);
        let command = Self::command(target, title, text, buttons, icon);
        Self {
            dialog: Dialog::launch(settings, command),
            target,
            buttons,
        }
    }

    /// Command line that shows this message box on `target`.
    pub fn command(target: Target, title: &str, text: &str, buttons: Buttons, icon: Icon) -> String {
        let mut command = target.program().to_string();

        match target {
            Target::Windows => {
                command = powershell_command(&format!(
                    "Add-Type -AssemblyName System.Windows.Forms; \
                     [System.Windows.Forms.MessageBox]::Show({}, {}, '{}', '{}')",
                    powershell_quote(text),
                    powershell_quote(title),
                    buttons_name(buttons),
                    message_box_icon(icon),
                ));
            }
            Target::Zenity(_) => {
                command += match buttons {
                    Buttons::OkCancel => " --question --ok-label=OK --cancel-label=Cancel",
                    Buttons::YesNo => " --question",
                    Buttons::YesNoCancel => " --list --column '' --hide-header 'Yes' 'No'",
                    Buttons::Ok => match icon {
                        Icon::Error => " --error",
                        Icon::Warning => " --warning",
                        _ => " --info",
                    },
                };

                command += &format!(
                    " --title {} --width 300 --height 0 --text {} --icon-name=dialog-{}",
                    shell_quote(title),
                    shell_quote(text),
                    icon_name(icon, target),
                );
            }
            Target::Kdialog => {
                if buttons == Buttons::Ok {
                    command += match icon {
                        Icon::Error => " --error",
                        Icon::Warning => " --sorry",
                        _ => " --msgbox",
                    };
                } else {
                    command += " --";
                    if matches!(icon, Icon::Warning | Icon::Error) {
                        command += "warning";
                    }
                    command += "yesno";
                    if buttons == Buttons::YesNoCancel {
                        command += "cancel";
                    }
                }

                command += &format!(" {} --title {}", shell_quote(text), shell_quote(title));

                if buttons == Buttons::OkCancel {
                    command += " --yes-label OK --no-label Cancel";
                }
            }
            Target::Fallback => {}
        }

        command
    }

    pub fn ready(&mut self) -> bool {
        self.dialog.ready()
    }

    /// Block until the box is closed and report the chosen button.
    pub fn result(&mut self) -> Choice {
        let output = self.dialog.result();
        choice_from_output(self.target, self.buttons, &output)
    }

    /// Raw helper output and exit code.
    pub fn output(&mut self) -> CommandOutput {
        self.dialog.result()
    }
}

/// `MessageBoxIcon` member names.
fn message_box_icon(icon: Icon) -> &'static str {
    match icon {
        Icon::Info => "Information",
        Icon::Warning => "Warning",
        Icon::Error => "Error",
        Icon::Question => "Question",
    }
}

/// Choice reported when the box was dismissed or never shown.
fn dismissed(buttons: Buttons) -> Choice {
    match buttons {
        Buttons::Ok => Choice::Ok,
        Buttons::OkCancel | Buttons::YesNoCancel => Choice::Cancel,
        Buttons::YesNo => Choice::No,
    }
}

/// Map a helper's exit code and output to the button the user chose.
pub(crate) fn choice_from_output(target: Target, buttons: Buttons, output: &CommandOutput) -> Choice {
    if output.exit_code == EXIT_CODE_UNKNOWN {
        return dismissed(buttons);
    }

    let accepted = output.success();
    match target {
        Target::Windows => match output.text.trim() {
            "OK" => Choice::Ok,
            "Cancel" => Choice::Cancel,
            "Yes" => Choice::Yes,
            "No" => Choice::No,
            _ => dismissed(buttons),
        },
        Target::Zenity(_) => match buttons {
            Buttons::Ok => Choice::Ok,
            Buttons::OkCancel if accepted => Choice::Ok,
            Buttons::YesNo if accepted => Choice::Yes,
            Buttons::YesNoCancel if accepted => match output.text.trim() {
                "Yes" => Choice::Yes,
                "No" => Choice::No,
                _ => Choice::Cancel,
            },
            _ => dismissed(buttons),
        },
        Target::Kdialog => match (buttons, output.exit_code) {
            (Buttons::Ok, _) => Choice::Ok,
            (Buttons::OkCancel, 0) => Choice::Ok,
            (Buttons::YesNo | Buttons::YesNoCancel, 0) => Choice::Yes,
            (Buttons::YesNo | Buttons::YesNoCancel, 1) => Choice::No,
            _ => dismissed(buttons),
        },
        Target::Fallback => dismissed(buttons),
    }
}
