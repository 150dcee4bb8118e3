// src/dialog/file.rs

//! Open, save and folder pickers.
//!
//! Results are read from the helper's stdout. Zenity prints multiple
//! selections separated by `|`; kdialog (with `--separate-output`) and the
//! WinForms script print one path per line. A nonzero exit code means the
//! picker was cancelled.

use std::path::PathBuf;

use crate::exec::CommandOutput;
use crate::settings::{self, Settings};

use super::base::{Dialog, Target, powershell_command};
use super::quote::{powershell_quote, shell_quote};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileDialogKind {
    /// Pick existing file(s).
    Open,
    /// Pick a destination; confirm before overwriting.
    Save,
    /// Pick a directory.
    Folder,
}

/// Parameters of a file picker.
#[derive(Debug, Clone, Copy)]
pub struct FileRequest<'a> {
    pub kind: FileDialogKind,
    pub title: &'a str,
    pub default_path: &'a str,
    /// Passed to the helper verbatim; empty means no filter.
    pub filter: &'a str,
    /// Only honoured for [`FileDialogKind::Open`].
    pub multiselect: bool,
}

impl FileRequest<'_> {
    fn multiple(&self) -> bool {
        self.multiselect && self.kind == FileDialogKind::Open
    }
}

/// Command line that shows the picker described by `req` on `target`.
pub fn command(target: Target, req: &FileRequest<'_>) -> String {
    match target {
        Target::Windows => windows_command(req),
        Target::Zenity(_) => {
            let mut command = format!(
                "{} --file-selection --filename={} --title {}",
                target.program(),
                shell_quote(req.default_path),
                shell_quote(req.title),
            );
            if !req.filter.is_empty() {
                command += &format!(" --file-filter={}", shell_quote(req.filter));
            }
            if req.multiple() {
                command += " --multiple";
            }
            match req.kind {
                FileDialogKind::Open => {}
                FileDialogKind::Save => command += " --save --confirm-overwrite",
                FileDialogKind::Folder => command += " --directory",
            }
            command
        }
        Target::Kdialog => {
            let mut command = target.program().to_string();
            command += match req.kind {
                FileDialogKind::Open => " --getopenfilename ",
                FileDialogKind::Save => " --getsavefilename ",
                FileDialogKind::Folder => " --getexistingdirectory ",
            };
            command += &shell_quote(req.default_path);
            if req.kind != FileDialogKind::Folder && !req.filter.is_empty() {
                command += " ";
                command += &shell_quote(req.filter);
            }
            if req.multiple() {
                command += " --multiple --separate-output";
            }
            command += " --title ";
            command += &shell_quote(req.title);
            command
        }
        Target::Fallback => target.program().to_string(),
    }
}

fn windows_command(req: &FileRequest<'_>) -> String {
    let mut script = String::from("Add-Type -AssemblyName System.Windows.Forms; ");

    match req.kind {
        FileDialogKind::Folder => {
            script += "$d = New-Object System.Windows.Forms.FolderBrowserDialog; ";
            script += &format!("$d.Description = {}; ", powershell_quote(req.title));
            if !req.default_path.is_empty() {
                script += &format!("$d.SelectedPath = {}; ", powershell_quote(req.default_path));
            }
            script += "if ($d.ShowDialog() -eq 'OK') { $d.SelectedPath }";
        }
        FileDialogKind::Open | FileDialogKind::Save => {
            if req.kind == FileDialogKind::Open {
                script += "$d = New-Object System.Windows.Forms.OpenFileDialog; ";
                script += "$d.CheckFileExists = $true; $d.CheckPathExists = $true; ";
            } else {
                script += "$d = New-Object System.Windows.Forms.SaveFileDialog; ";
                script += "$d.OverwritePrompt = $true; ";
            }
            script += &format!("$d.Title = {}; ", powershell_quote(req.title));
            let (dir, file_name) = split_default_path(req.default_path);
            if !dir.is_empty() {
                script += &format!("$d.InitialDirectory = {}; ", powershell_quote(dir));
            }
            if let Some(name) = file_name {
                script += &format!("$d.FileName = {}; ", powershell_quote(name));
            }
            if !req.filter.is_empty() {
                script += &format!("$d.Filter = {}; ", powershell_quote(req.filter));
            }
            if req.multiple() {
                script += "$d.Multiselect = $true; ";
            }
            script += "if ($d.ShowDialog() -eq 'OK') { $d.FileNames }";
        }
    }

    powershell_command(&script)
}

/// Split a default path into the directory to open and a file name to
/// pre-fill. A last component with an extension is a file name; anything
/// else is taken as a directory.
fn split_default_path(path: &str) -> (&str, Option<&str>) {
    let (dir, last) = match path.rfind(['/', '\\']) {
        Some(i) => (&path[..i], &path[i + 1..]),
        None => ("", path),
    };
    match last.rfind('.') {
        Some(dot) if dot > 0 && dot + 1 < last.len() => (dir, Some(last)),
        _ => (path, None),
    }
}

/// Paths printed by a picker, empty if it was cancelled or failed.
pub(crate) fn parse_paths(target: Target, multiple: bool, output: &CommandOutput) -> Vec<PathBuf> {
    if !output.success() {
        return Vec::new();
    }

    let text = output.text.trim_end_matches(['\r', '\n']);
    let parts: Vec<&str> = match target {
        Target::Zenity(_) if multiple => text.split('|').collect(),
        _ => text.lines().collect(),
    };

    parts
        .into_iter()
        .map(|part| part.trim_end_matches('\r'))
        .filter(|part| !part.is_empty())
        .map(PathBuf::from)
        .collect()
}

/// Shared state of the three picker types.
#[derive(Debug)]
struct FileDialog {
    dialog: Dialog,
    target: Target,
    multiple: bool,
}

impl FileDialog {
    fn launch(settings: &Settings, req: FileRequest<'_>) -> Self {
        let target = Target::select(settings.platform, &settings.capabilities);
        Self {
            dialog: Dialog::launch(settings, command(target, &req)),
            target,
            multiple: req.multiple(),
        }
    }

    fn paths(&mut self) -> Vec<PathBuf> {
        let output = self.dialog.result();
        parse_paths(self.target, self.multiple, &output)
    }
}

/// Picker for one or more existing files.
#[derive(Debug)]
pub struct OpenFile {
    inner: FileDialog,
}

impl OpenFile {
    pub fn new(title: &str, default_path: &str, filter: &str, multiselect: bool) -> Self {
        Self::with_settings(&settings::current(), title, default_path, filter, multiselect)
    }

    pub fn with_settings(
        settings: &Settings,
        title: &str,
        default_path: &str,
        filter: &str,
        multiselect: bool,
    ) -> Self {
        let req = FileRequest {
            kind: FileDialogKind::Open,
            title,
            default_path,
            filter,
            multiselect,
        };
        Self {
            inner: FileDialog::launch(settings, req),
        }
    }

    pub fn ready(&mut self) -> bool {
        self.inner.dialog.ready()
    }

    /// Selected files; empty if the picker was cancelled.
    pub fn result(&mut self) -> Vec<PathBuf> {
        self.inner.paths()
    }

    pub fn output(&mut self) -> CommandOutput {
        self.inner.dialog.result()
    }
}

/// Picker for a file to write.
#[derive(Debug)]
pub struct SaveFile {
    inner: FileDialog,
}

impl SaveFile {
    pub fn new(title: &str, default_path: &str, filter: &str) -> Self {
        Self::with_settings(&settings::current(), title, default_path, filter)
    }

    pub fn with_settings(settings: &Settings, title: &str, default_path: &str, filter: &str) -> Self {
        let req = FileRequest {
            kind: FileDialogKind::Save,
            title,
            default_path,
            filter,
            multiselect: false,
        };
        Self {
            inner: FileDialog::launch(settings, req),
        }
    }

    pub fn ready(&mut self) -> bool {
        self.inner.dialog.ready()
    }

    pub fn result(&mut self) -> Option<PathBuf> {
        self.inner.paths().into_iter().next()
    }

    pub fn output(&mut self) -> CommandOutput {
        self.inner.dialog.result()
    }
}

/// Picker for a directory.
#[derive(Debug)]
pub struct SelectFolder {
    inner: FileDialog,
}

impl SelectFolder {
    pub fn new(title: &str, default_path: &str) -> Self {
        Self::with_settings(&settings::current(), title, default_path)
    }

    pub fn with_settings(settings: &Settings, title: &str, default_path: &str) -> Self {
        let req = FileRequest {
            kind: FileDialogKind::Folder,
            title,
            default_path,
            filter: "",
            multiselect: false,
        };
        Self {
            inner: FileDialog::launch(settings, req),
        }
    }

    pub fn ready(&mut self) -> bool {
        self.inner.dialog.ready()
    }

    pub fn result(&mut self) -> Option<PathBuf> {
        self.inner.paths().into_iter().next()
    }

    pub fn output(&mut self) -> CommandOutput {
        self.inner.dialog.result()
    }
}
