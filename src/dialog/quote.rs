// src/dialog/quote.rs

//! Quoting of user strings for the two command-line dialects we emit.
//!
//! Neither function removes embedded newlines. A newline inside a quoted
//! argument survives as a literal newline, which the POSIX shell accepts but
//! `cmd.exe` treats as the end of the command.

use std::sync::LazyLock;

use regex::Regex;

static POWERSHELL_SPECIAL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"['"]"#).expect("static regex is valid"));

/// Quote for a POSIX shell: wrap in `'...'`, turning each `'` into `'\''`.
pub fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', r"'\''"))
}

/// Quote for a PowerShell script passed inside a double-quoted
/// `-Command "..."`: wrap in `'...'`, doubling each `'` and `"`.
pub fn powershell_quote(s: &str) -> String {
    format!("'{}'", POWERSHELL_SPECIAL.replace_all(s, "$0$0"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_quote_wraps_plain_text() {
        assert_eq!(shell_quote("hello world"), "'hello world'");
        assert_eq!(shell_quote(""), "''");
    }

    #[test]
    fn shell_quote_escapes_single_quotes() {
        assert_eq!(shell_quote("it's"), r"'it'\''s'");
    }

    #[test]
    fn shell_quote_leaves_metacharacters_inert() {
        assert_eq!(shell_quote("$(rm -rf ~); `x` \"y\""), "'$(rm -rf ~); `x` \"y\"'");
    }

    #[test]
    fn powershell_quote_doubles_both_quote_kinds() {
        assert_eq!(powershell_quote(r#"a'b"c"#), r#"'a''b""c'"#);
        assert_eq!(powershell_quote("plain"), "'plain'");
    }
}
