// tests/dialogs_fake_backend.rs

mod common;
use crate::common::{init_tracing, wait_until_ready};

use std::path::PathBuf;
use std::time::Duration;

use tracing::Level;

use portable_dialogs::detect::Helper;
use portable_dialogs::{
    Buttons, Choice, Icon, Message, Notify, OpenFile, SaveFile, SelectFolder,
};
use portable_dialogs_test_utils::builders::SettingsBuilder;
use portable_dialogs_test_utils::capture_logs;
use portable_dialogs_test_utils::fake_backend::{FakeProcesses, FakeRun};

#[test]
fn yes_no_cancel_on_zenity_uses_list_fallback() {
    init_tracing();
    let processes = FakeProcesses::new();
    processes.push(FakeRun::prints("Yes\n"));
    let settings = SettingsBuilder::new()
        .with_helper(Helper::Zenity)
        .build(&processes);

    let mut msg = Message::with_settings(
        &settings,
        "Unsaved",
        "Save changes?",
        Buttons::YesNoCancel,
        Icon::Warning,
    );
    assert_eq!(msg.result(), Choice::Yes);

    let spawned = processes.spawned();
    assert_eq!(spawned.len(), 1);
    assert_eq!(
        spawned[0],
        "zenity --list --column '' --hide-header 'Yes' 'No' --title 'Unsaved' \
         --width 300 --height 0 --text 'Save changes?' --icon-name=dialog-warning"
    );
}

#[test]
fn kdialog_exit_two_is_cancel() {
    let processes = FakeProcesses::new();
    processes.push(FakeRun::exits(2));
    let settings = SettingsBuilder::new()
        .with_helper(Helper::Kdialog)
        .build(&processes);

    let mut msg = Message::with_settings(&settings, "T", "x", Buttons::YesNoCancel, Icon::Info);
    assert_eq!(msg.result(), Choice::Cancel);
    assert!(processes.spawned()[0].starts_with("kdialog --yesnocancel 'x'"));
}

#[test]
fn message_is_not_blocking_and_polls_until_closed() {
    let processes = FakeProcesses::new();
    processes.push(FakeRun::exits(0).after_polls(3));
    let settings = SettingsBuilder::new()
        .with_helper(Helper::Qarma)
        .build(&processes);

    let mut msg = Message::with_settings(&settings, "T", "x", Buttons::OkCancel, Icon::Info);
    assert!(!msg.ready());
    wait_until_ready(|| msg.ready(), Duration::from_secs(1));
    assert_eq!(msg.result(), Choice::Ok);
    assert!(processes.spawned()[0].starts_with("qarma --question --ok-label=OK"));
}

#[test]
fn spawn_failure_reads_as_dismissed() {
    let processes = FakeProcesses::new();
    processes.fail_spawns();
    let settings = SettingsBuilder::new()
        .with_helper(Helper::Zenity)
        .build(&processes);

    let mut msg = Message::with_settings(&settings, "T", "x", Buttons::YesNo, Icon::Info);
    assert!(msg.ready());
    let out = msg.output();
    assert_eq!(out.exit_code, -1);
    assert!(out.text.is_empty());
    assert_eq!(msg.result(), Choice::No);
}

#[test]
fn notify_question_is_rendered_as_info() {
    let processes = FakeProcesses::new();
    let settings = SettingsBuilder::new()
        .with_helper(Helper::Zenity)
        .build(&processes);

    let mut note = Notify::with_settings(&settings, "Done", "All good?", Icon::Question);
    assert!(note.result());

    let cmd = &processes.spawned()[0];
    assert!(cmd.contains("--window-icon information"), "{cmd}");
    assert!(!cmd.contains("question"), "{cmd}");
}

#[test]
fn kdialog_notification_uses_configured_timeout() {
    let processes = FakeProcesses::new();
    let settings = SettingsBuilder::new()
        .with_helper(Helper::Kdialog)
        .notify_timeout(Duration::from_secs(8))
        .build(&processes);

    Notify::with_settings(&settings, "T", "m", Icon::Warning).result();
    assert!(processes.spawned()[0].ends_with("--passivepopup 'm' 8"));
}

#[test]
fn open_file_returns_every_selected_path() {
    let processes = FakeProcesses::new();
    processes.push(FakeRun::prints("/home/u/a.png|/home/u/b c.png\n"));
    let settings = SettingsBuilder::new()
        .with_helper(Helper::Zenity)
        .build(&processes);

    let mut dlg = OpenFile::with_settings(&settings, "Images", "/home/u", "*.png", true);
    assert_eq!(
        dlg.result(),
        vec![PathBuf::from("/home/u/a.png"), PathBuf::from("/home/u/b c.png")]
    );
    assert!(processes.spawned()[0].contains("--multiple"));
}

#[test]
fn cancelled_save_returns_none() {
    let processes = FakeProcesses::new();
    processes.push(FakeRun::exits(1));
    let settings = SettingsBuilder::new()
        .with_helper(Helper::Kdialog)
        .build(&processes);

    let mut dlg = SaveFile::with_settings(&settings, "Export", "/tmp/out.csv", "");
    assert_eq!(dlg.result(), None);
    assert_eq!(
        processes.spawned()[0],
        "kdialog --getsavefilename '/tmp/out.csv' --title 'Export'"
    );
}

#[test]
fn select_folder_returns_the_chosen_directory() {
    let processes = FakeProcesses::new();
    processes.push(FakeRun::prints("/srv/data\n"));
    let settings = SettingsBuilder::new()
        .with_helper(Helper::Matedialog)
        .build(&processes);

    let mut dlg = SelectFolder::with_settings(&settings, "Where?", "/srv");
    assert_eq!(dlg.result(), Some(PathBuf::from("/srv/data")));
    assert!(processes.spawned()[0].ends_with(" --directory"));
}

#[test]
fn no_helper_degrades_to_echo() {
    let processes = FakeProcesses::new();
    processes.push(FakeRun::prints("\n"));
    let settings = SettingsBuilder::new().build(&processes);

    let mut dlg = OpenFile::with_settings(&settings, "T", "", "", false);
    assert!(dlg.result().is_empty());
    assert_eq!(processes.spawned(), vec!["echo".to_string()]);
}

#[test]
fn windows_settings_target_powershell() {
    let processes = FakeProcesses::new();
    processes.push(FakeRun::prints("No\r\n"));
    let settings = SettingsBuilder::new()
        .windows()
        .with_helper(Helper::Zenity)
        .build(&processes);

    let mut msg = Message::with_settings(&settings, "T", "x", Buttons::YesNo, Icon::Question);
    assert_eq!(msg.result(), Choice::No);
    assert!(processes.spawned()[0].starts_with("powershell.exe -Command \""));
}

#[test]
fn dropping_an_unfinished_dialog_reaps_it() {
    let processes = FakeProcesses::new();
    processes.push(FakeRun::exits(0).after_polls(10));
    let settings = SettingsBuilder::new()
        .with_helper(Helper::Zenity)
        .build(&processes);

    let note = Notify::with_settings(&settings, "T", "m", Icon::Info);
    drop(note);
    assert_eq!(processes.reaped(), 1);
}

fn info_lines_mentioning(logs: &str, needle: &str) -> usize {
    logs.lines()
        .filter(|line| line.contains("INFO") && line.contains(needle))
        .count()
}

#[test]
fn verbose_settings_log_each_command_at_info() {
    let processes = FakeProcesses::new();
    let settings = SettingsBuilder::new()
        .with_helper(Helper::Kdialog)
        .verbose(true)
        .build(&processes);

    let (_, logs) = capture_logs(Level::INFO, || {
        Message::with_settings(&settings, "Loud", "shown", Buttons::Ok, Icon::Info).result()
    });

    let command = "kdialog --msgbox 'shown' --title 'Loud'";
    assert_eq!(processes.spawned(), vec![command.to_string()]);
    assert_eq!(info_lines_mentioning(&logs, command), 1, "{logs}");
}

#[test]
fn quiet_settings_keep_commands_out_of_info() {
    let processes = FakeProcesses::new();
    let settings = SettingsBuilder::new()
        .with_helper(Helper::Kdialog)
        .verbose(false)
        .build(&processes);

    let (_, logs) = capture_logs(Level::INFO, || {
        Message::with_settings(&settings, "Quiet", "hidden", Buttons::Ok, Icon::Info).result()
    });

    assert_eq!(processes.spawned().len(), 1);
    assert_eq!(info_lines_mentioning(&logs, "kdialog"), 0, "{logs}");

    let (_, debug_logs) = capture_logs(Level::DEBUG, || {
        Notify::with_settings(&settings, "Quiet", "hidden", Icon::Info).result()
    });
    assert!(debug_logs.contains("kdialog --icon information"), "{debug_logs}");
}
