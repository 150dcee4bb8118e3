// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use crate::types::{Buttons, Icon};

/// Command-line arguments for `pdialog`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "pdialog",
    version,
    about = "Show native message boxes, notifications and file pickers.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to a config file (TOML).
    ///
    /// Default: `$PDIALOG_CONFIG`, else `pdialog.toml` if it exists.
    #[arg(long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `PDIALOG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL", global = true)]
    pub log_level: Option<LogLevel>,

    /// Log every dialog command before it runs.
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Print the command that would be run, without showing anything.
    #[arg(long, global = true)]
    pub dry_run: bool,

    #[command(subcommand)]
    pub command: DialogCommand,
}

#[derive(Debug, Clone, Subcommand)]
pub enum DialogCommand {
    /// Message box; prints the chosen button.
    Message {
        #[arg(long)]
        title: String,
        #[arg(long)]
        text: String,
        /// ok, okcancel, yesno or yesnocancel.
        #[arg(long, default_value = "okcancel")]
        buttons: Buttons,
        /// info, warning, error or question.
        #[arg(long, default_value = "info")]
        icon: Icon,
    },
    /// Desktop notification.
    Notify {
        #[arg(long)]
        title: String,
        #[arg(long)]
        message: String,
        #[arg(long, default_value = "info")]
        icon: Icon,
    },
    /// Pick existing file(s); prints one path per line.
    Open {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        path: String,
        #[arg(long, default_value = "")]
        filter: String,
        #[arg(long)]
        multiple: bool,
    },
    /// Pick a file to save to.
    Save {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        path: String,
        #[arg(long, default_value = "")]
        filter: String,
    },
    /// Pick a directory.
    Folder {
        #[arg(long)]
        title: String,
        #[arg(long, default_value = "")]
        path: String,
    },
    /// List detected helper programs and the selected target.
    Helpers,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_message_with_defaults() {
        let args = CliArgs::try_parse_from(["pdialog", "message", "--title", "T", "--text", "x"])
            .unwrap();
        match args.command {
            DialogCommand::Message { buttons, icon, .. } => {
                assert_eq!(buttons, Buttons::OkCancel);
                assert_eq!(icon, Icon::Info);
            }
            other => panic!("expected message, got {other:?}"),
        }
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = CliArgs::try_parse_from([
            "pdialog", "open", "--title", "T", "--multiple", "--dry-run", "--verbose",
        ])
        .unwrap();
        assert!(args.dry_run);
        assert!(args.verbose);
        assert!(matches!(args.command, DialogCommand::Open { multiple: true, .. }));
    }

    #[test]
    fn rejects_unknown_icon() {
        let res = CliArgs::try_parse_from([
            "pdialog", "notify", "--title", "T", "--message", "m", "--icon", "skull",
        ]);
        assert!(res.is_err());
    }
}
