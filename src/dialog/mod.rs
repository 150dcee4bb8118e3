// src/dialog/mod.rs

//! Dialog front-ends.
//!
//! Every dialog picks a [`Target`] from the settings, builds a command line
//! for it, and starts that command without waiting. Callers then poll
//! `ready()` or block on `result()`.
//!
//! - [`base`]: target selection, token tables, the shared `Dialog` handle.
//! - [`quote`]: POSIX shell and PowerShell quoting.
//! - [`message`], [`notify`], [`file`]: the dialog types.

pub mod base;
pub mod file;
pub mod message;
pub mod notify;
pub mod quote;

pub use base::{Dialog, Target};
pub use file::{FileDialogKind, FileRequest, OpenFile, SaveFile, SelectFolder};
pub use message::Message;
pub use notify::Notify;
pub use quote::{powershell_quote, shell_quote};
