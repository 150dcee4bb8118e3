// src/exec/backend.rs

//! Pluggable process backend abstraction.
//!
//! The [`Executor`](super::Executor) talks to a `ProcessBackend` instead of
//! creating processes itself. This keeps the lifecycle state machine
//! independent of how a command is actually run:
//!
//! - [`ShellBackend`](super::ShellBackend) is the production implementation.
//!   It runs the command through the platform shell on a background tokio
//!   runtime.
//! - Tests can provide their own `ProcessBackend` that, for example, replays
//!   scripted output and exit codes without spawning anything.

use std::fmt;
use std::io;
use std::sync::Arc;

/// Result of a single non-blocking poll of a running process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Poll {
    /// A chunk of standard output became available.
    Output(Vec<u8>),
    /// Nothing happened since the last poll.
    Pending,
    /// The process has exited and all of its output has been delivered.
    Exited,
}

/// Trait abstracting how a command is spawned, polled and reaped.
///
/// A backend manages at most one process at a time. The executor guarantees
/// that `reap` is called exactly once after `poll` reported [`Poll::Exited`]
/// and before the next `spawn`.
pub trait ProcessBackend: Send {
    /// Start `command` asynchronously. Must not wait for the process.
    fn spawn(&mut self, command: &str) -> io::Result<()>;

    /// Perform one bounded, non-blocking step.
    fn poll(&mut self) -> Poll;

    /// Release process resources and return the exit code, or `-1` if it is
    /// unknown.
    fn reap(&mut self) -> i32;
}

/// Factory producing a fresh backend for every executor.
///
/// Stored in [`Settings`](crate::settings::Settings) so dialogs can be pointed
/// at a fake backend in tests.
#[derive(Clone)]
pub struct BackendFactory(Arc<dyn Fn() -> Box<dyn ProcessBackend> + Send + Sync>);

impl BackendFactory {
    pub fn new<F>(make: F) -> Self
    where
        F: Fn() -> Box<dyn ProcessBackend> + Send + Sync + 'static,
    {
        Self(Arc::new(make))
    }

    /// Factory for the real shell backend.
    pub fn shell() -> Self {
        Self::new(|| Box::new(super::ShellBackend::new()) as Box<dyn ProcessBackend>)
    }

    pub fn create(&self) -> Box<dyn ProcessBackend> {
        (self.0)()
    }
}

impl Default for BackendFactory {
    fn default() -> Self {
        Self::shell()
    }
}

impl fmt::Debug for BackendFactory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("BackendFactory(..)")
    }
}
