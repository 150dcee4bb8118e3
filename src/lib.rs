// src/lib.rs

//! Portable message boxes, notifications and file pickers.
//!
//! Dialogs are shown by running a platform facility as a child process:
//! WinForms through PowerShell on Windows, or the first of `zenity`,
//! `matedialog`, `qarma` and `kdialog` found in `PATH` elsewhere. Showing a
//! dialog never blocks; poll `ready()` or block on `result()`.
//!
//! ```no_run
//! use portable_dialogs::{Buttons, Choice, Icon, Message};
//!
//! let mut msg = Message::new("Quit", "Discard changes?", Buttons::YesNo, Icon::Warning);
//! if msg.result() == Choice::Yes {
//!     // ...
//! }
//! ```

pub mod cli;
pub mod config;
pub mod detect;
pub mod dialog;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod settings;
pub mod types;

use anyhow::Result;
use tracing::debug;

use crate::cli::{CliArgs, DialogCommand};
use crate::dialog::file::{self, FileDialogKind, FileRequest};

pub use crate::detect::{Capabilities, Helper, Platform};
pub use crate::dialog::{Message, Notify, OpenFile, SaveFile, SelectFolder, Target};
pub use crate::exec::{CommandOutput, Executor};
pub use crate::settings::Settings;
pub use crate::types::{Buttons, Choice, Icon};

/// High-level entry point used by `main.rs`. Returns the process exit code:
/// `0` when the user accepted, `1` when the dialog was cancelled.
pub fn run(args: CliArgs) -> Result<i32> {
    let cfg = config::load_or_default(args.config.as_deref())?;
    if args.verbose {
        settings::verbose(true);
    }
    let settings = Settings::from_config(&cfg);

    if args.dry_run {
        print_dry_run(&args.command, &settings);
        return Ok(0);
    }

    let accepted = match args.command {
        DialogCommand::Message {
            title,
            text,
            buttons,
            icon,
        } => {
            let choice = Message::with_settings(&settings, &title, &text, buttons, icon).result();
            println!("{choice}");
            matches!(choice, Choice::Ok | Choice::Yes)
        }
        DialogCommand::Notify {
            title,
            message,
            icon,
        } => Notify::with_settings(&settings, &title, &message, icon).result(),
        DialogCommand::Open {
            title,
            path,
            filter,
            multiple,
        } => {
            let paths = OpenFile::with_settings(&settings, &title, &path, &filter, multiple).result();
            for p in &paths {
                println!("{}", p.display());
            }
            !paths.is_empty()
        }
        DialogCommand::Save {
            title,
            path,
            filter,
        } => print_path(SaveFile::with_settings(&settings, &title, &path, &filter).result()),
        DialogCommand::Folder { title, path } => {
            print_path(SelectFolder::with_settings(&settings, &title, &path).result())
        }
        DialogCommand::Helpers => {
            print_helpers(&settings);
            true
        }
    };

    Ok(if accepted { 0 } else { 1 })
}

fn print_path(path: Option<std::path::PathBuf>) -> bool {
    match path {
        Some(p) => {
            println!("{}", p.display());
            true
        }
        None => false,
    }
}

fn print_helpers(settings: &Settings) {
    println!("platform: {:?}", settings.platform);
    for helper in Helper::ALL {
        let state = if settings.capabilities.has(helper) {
            "found"
        } else {
            "missing"
        };
        println!("  {:<12} {state}", helper.program());
    }
    let target = Target::select(settings.platform, &settings.capabilities);
    println!("target: {}", target.program());
}

/// Dry-run output: the command line each dialog would run.
fn print_dry_run(command: &DialogCommand, settings: &Settings) {
    let target = Target::select(settings.platform, &settings.capabilities);
    let line = match command {
        DialogCommand::Message {
            title,
            text,
            buttons,
            icon,
        } => Message::command(target, title, text, *buttons, *icon),
        DialogCommand::Notify {
            title,
            message,
            icon,
        } => Notify::command(target, title, message, *icon, settings.notify_timeout),
        DialogCommand::Open {
            title,
            path,
            filter,
            multiple,
        } => file::command(
            target,
            &FileRequest {
                kind: FileDialogKind::Open,
                title,
                default_path: path,
                filter,
                multiselect: *multiple,
            },
        ),
        DialogCommand::Save {
            title,
            path,
            filter,
        } => file::command(
            target,
            &FileRequest {
                kind: FileDialogKind::Save,
                title,
                default_path: path,
                filter,
                multiselect: false,
            },
        ),
        DialogCommand::Folder { title, path } => file::command(
            target,
            &FileRequest {
                kind: FileDialogKind::Folder,
                title,
                default_path: path,
                filter: "",
                multiselect: false,
            },
        ),
        DialogCommand::Helpers => {
            print_helpers(settings);
            return;
        }
    };

    println!("{line}");
    debug!("dry-run complete (no dialog shown)");
}
