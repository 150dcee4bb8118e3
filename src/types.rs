// src/types.rs

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Glyph shown next to a message or notification.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    #[default]
    Info,
    Warning,
    Error,
    Question,
}

impl FromStr for Icon {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "info" | "information" => Ok(Icon::Info),
            "warning" => Ok(Icon::Warning),
            "error" => Ok(Icon::Error),
            "question" => Ok(Icon::Question),
            other => Err(format!(
                "invalid icon: {other} (expected \"info\", \"warning\", \"error\" or \"question\")"
            )),
        }
    }
}

/// Button layout of a message box.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Buttons {
    Ok,
    #[default]
    OkCancel,
    YesNo,
    YesNoCancel,
}

impl FromStr for Buttons {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace(['_', '-'], "").as_str() {
            "ok" => Ok(Buttons::Ok),
            "okcancel" => Ok(Buttons::OkCancel),
            "yesno" => Ok(Buttons::YesNo),
            "yesnocancel" => Ok(Buttons::YesNoCancel),
            other => Err(format!(
                "invalid buttons: {other} (expected \"ok\", \"okcancel\", \"yesno\" or \"yesnocancel\")"
            )),
        }
    }
}

/// Which button the user picked in a message box.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Choice {
    Ok,
    Cancel,
    Yes,
    No,
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Choice::Ok => "ok",
            Choice::Cancel => "cancel",
            Choice::Yes => "yes",
            Choice::No => "no",
        };
        f.write_str(name)
    }
}
