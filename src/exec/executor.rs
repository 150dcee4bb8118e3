// src/exec/executor.rs

//! Lifecycle of exactly one asynchronously spawned process.

use std::time::Duration;

use tracing::{debug, trace, warn};

use super::backend::{Poll, ProcessBackend};
use super::shell::ShellBackend;

/// Backoff between two `ready()` attempts while draining.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(200);

/// Exit code reported when no process ran or its status is unknown.
pub const EXIT_CODE_UNKNOWN: i32 = -1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecState {
    Idle,
    Running,
    /// Exit observed by `ready()`, not yet reaped.
    Finished,
}

/// Captured stdout and exit status of a finished command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandOutput {
    pub text: String,
    pub exit_code: i32,
}

impl CommandOutput {
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Owns at most one external process at any time.
///
/// `start` never waits for the process. `ready` is a bounded poll. `result`
/// and `Drop` block until the process has exited and been reaped, so no
/// process outlives its executor.
pub struct Executor {
    backend: Box<dyn ProcessBackend>,
    state: ExecState,
    output: Vec<u8>,
    exit_code: i32,
    poll_interval: Duration,
}

impl Executor {
    pub fn new() -> Self {
        Self::with_backend(Box::new(ShellBackend::new()))
    }

    pub fn with_backend(backend: Box<dyn ProcessBackend>) -> Self {
        Self {
            backend,
            state: ExecState::Idle,
            output: Vec::new(),
            exit_code: EXIT_CODE_UNKNOWN,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    pub fn with_poll_interval(mut self, interval: Duration) -> Self {
        self.poll_interval = interval;
        self
    }

    pub fn state(&self) -> ExecState {
        self.state
    }

    /// Spawn `command`, first draining any process still owned by this
    /// executor.
    ///
    /// Spawn failures are not reported: the executor stays idle with an
    /// empty output and the `-1` exit code.
    pub fn start(&mut self, command: impl Into<String>) {
        let command = command.into();
        self.stop();
        self.output.clear();
        self.exit_code = EXIT_CODE_UNKNOWN;

        match self.backend.spawn(&command) {
            Ok(()) => {
                trace!(command = %command, "executor running");
                self.state = ExecState::Running;
            }
            Err(err) => {
                warn!(command = %command, error = %err, "failed to spawn dialog command");
            }
        }
    }

    /// Non-blocking liveness check; `true` once the process has exited (or
    /// when nothing is running).
    pub fn ready(&mut self) -> bool {
        if self.state != ExecState::Running {
            return true;
        }

        match self.backend.poll() {
            Poll::Output(chunk) => {
                self.output.extend_from_slice(&chunk);
                false
            }
            Poll::Pending => false,
            Poll::Exited => {
                self.state = ExecState::Finished;
                true
            }
        }
    }

    /// Block until the process exits, then return its output and exit code.
    ///
    /// Waits indefinitely. The executor is idle afterwards and may be reused.
    pub fn result(&mut self) -> CommandOutput {
        self.stop();
        CommandOutput {
            text: String::from_utf8_lossy(&self.output).into_owned(),
            exit_code: self.exit_code,
        }
    }

    fn stop(&mut self) {
        if self.state == ExecState::Idle {
            return;
        }

        loop {
            let seen = self.output.len();
            if self.ready() {
                break;
            }
            // Back off only when the poll delivered nothing.
            if self.output.len() == seen {
                std::thread::sleep(self.poll_interval);
            }
        }

        self.exit_code = self.backend.reap();
        self.state = ExecState::Idle;
        debug!(exit_code = self.exit_code, bytes = self.output.len(), "executor drained");
    }
}

impl Default for Executor {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for Executor {
    fn drop(&mut self) {
        self.stop();
    }
}

impl std::fmt::Debug for Executor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Executor")
            .field("state", &self.state)
            .field("output_len", &self.output.len())
            .field("exit_code", &self.exit_code)
            .field("poll_interval", &self.poll_interval)
            .finish()
    }
}
