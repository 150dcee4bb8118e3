// src/exec/mod.rs

//! Process execution layer.
//!
//! This module runs dialog helper commands asynchronously and lets callers
//! poll or wait for their output.
//!
//! - [`executor`] owns the per-process state machine
//!   (`Idle -> Running -> Finished -> Idle`).
//! - [`backend`] provides the `ProcessBackend` trait the executor drives, and
//!   the `BackendFactory` stored in settings.
//! - [`shell`] is the production backend built on `tokio::process`.
//! - [`runtime`] owns the background tokio runtime shared by all children.

pub mod backend;
pub mod executor;
pub mod runtime;
pub mod shell;

pub use backend::{BackendFactory, Poll, ProcessBackend};
pub use executor::{
    CommandOutput, DEFAULT_POLL_INTERVAL, EXIT_CODE_UNKNOWN, ExecState, Executor,
};
pub use shell::ShellBackend;
