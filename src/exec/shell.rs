// src/exec/shell.rs

//! Production process backend: runs commands through `sh -c`, or starts
//! the program directly on Windows.

use std::io;
use std::process::{ExitStatus, Stdio};

use tokio::io::AsyncReadExt;
use tokio::process::{Child, Command};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender, error::TryRecvError};
use tracing::{debug, warn};

use super::backend::{Poll, ProcessBackend};
use super::runtime;

const READ_CHUNK: usize = 8192;

/// Events emitted by the driver task of one child process.
#[derive(Debug)]
enum ChildEvent {
    Stdout(Vec<u8>),
    Exited(i32),
}

#[derive(Debug)]
struct RunningChild {
    events: UnboundedReceiver<ChildEvent>,
    exit_code: Option<i32>,
}

/// Runs commands with `sh -c` (the program token directly on Windows).
///
/// Each spawned child is handed to a driver task on the shared background
/// runtime. The driver forwards stdout chunks over a channel, then waits for
/// the child and sends its exit code, so the child is always reaped even if
/// nobody polls. `poll` is a single `try_recv` and never blocks.
#[derive(Debug, Default)]
pub struct ShellBackend {
    running: Option<RunningChild>,
}

impl ShellBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Split a command line into its program token and the raw remainder.
fn split_program(command: &str) -> (&str, &str) {
    let command = command.trim_start();
    match command.split_once(' ') {
        Some((program, rest)) => (program, rest),
        None => (command, ""),
    }
}

/// The program token is started directly, with the rest of the line as its
/// raw argument string and no console window. No `cmd` layer: `%VAR%` must
/// reach PowerShell unexpanded.
#[cfg(windows)]
fn shell_command(command: &str) -> Command {
    const CREATE_NO_WINDOW: u32 = 0x0800_0000;

    let (program, rest) = split_program(command);
    let mut c = Command::new(program);
    if !rest.is_empty() {
        c.raw_arg(rest);
    }
    c.creation_flags(CREATE_NO_WINDOW);
    c
}

#[cfg(not(windows))]
fn shell_command(command: &str) -> Command {
    let mut c = Command::new("sh");
    c.arg("-c").arg(command);
    c
}

/// Exit code of a finished child. A unix child killed by a signal reports
/// `128 + signal` like the shell does, keeping `-1` for "unknown".
fn exit_code(status: ExitStatus) -> i32 {
    #[cfg(unix)]
    {
        use std::os::unix::process::ExitStatusExt;
        if let Some(signal) = status.signal() {
            return 128 + signal;
        }
    }
    status.code().unwrap_or(-1)
}

impl ProcessBackend for ShellBackend {
    fn spawn(&mut self, command: &str) -> io::Result<()> {
        let rt = runtime::shared()?;
        // tokio::process needs a runtime context to register the child.
        let _guard = rt.enter();

        let mut cmd = shell_command(command);
        cmd.stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit());

        let child = cmd.spawn()?;
        debug!(pid = child.id(), program = split_program(command).0, "spawned dialog process");

        let (tx, rx) = mpsc::unbounded_channel();
        rt.spawn(drive_child(child, tx));

        self.running = Some(RunningChild {
            events: rx,
            exit_code: None,
        });
        Ok(())
    }

    fn poll(&mut self) -> Poll {
        let Some(running) = self.running.as_mut() else {
            return Poll::Exited;
        };
        if running.exit_code.is_some() {
            return Poll::Exited;
        }

        match running.events.try_recv() {
            Ok(ChildEvent::Stdout(chunk)) => Poll::Output(chunk),
            Ok(ChildEvent::Exited(code)) => {
                running.exit_code = Some(code);
                Poll::Exited
            }
            Err(TryRecvError::Empty) => Poll::Pending,
            Err(TryRecvError::Disconnected) => {
                warn!("dialog process driver stopped without reporting an exit code");
                running.exit_code = Some(-1);
                Poll::Exited
            }
        }
    }

    fn reap(&mut self) -> i32 {
        self.running
            .take()
            .and_then(|running| running.exit_code)
            .unwrap_or(-1)
    }
}

/// Drain stdout until EOF, then wait for the child and report its exit code.
async fn drive_child(mut child: Child, tx: UnboundedSender<ChildEvent>) {
    let pid = child.id();

    if let Some(mut stdout) = child.stdout.take() {
        let mut buf = vec![0u8; READ_CHUNK];
        loop {
            match stdout.read(&mut buf).await {
                Ok(0) => break,
                Ok(n) => {
                    // Keep draining even if the receiver is gone so the child
                    // never blocks on a full pipe.
                    let _ = tx.send(ChildEvent::Stdout(buf[..n].to_vec()));
                }
                Err(err) => {
                    warn!(pid, error = %err, "failed to read dialog process stdout");
                    break;
                }
            }
        }
    }

    let code = match child.wait().await {
        Ok(status) => exit_code(status),
        Err(err) => {
            warn!(pid, error = %err, "failed to wait for dialog process");
            -1
        }
    };

    debug!(pid, exit_code = code, "dialog process exited");
    let _ = tx.send(ChildEvent::Exited(code));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_program_from_raw_arguments() {
        assert_eq!(
            split_program("powershell.exe -Command \"Show('100%PATH%')\""),
            ("powershell.exe", "-Command \"Show('100%PATH%')\"")
        );
        assert_eq!(split_program("echo"), ("echo", ""));
    }

    #[cfg(unix)]
    fn drain(backend: &mut ShellBackend) -> Vec<u8> {
        use std::time::{Duration, Instant};

        let deadline = Instant::now() + Duration::from_secs(5);
        let mut out = Vec::new();
        loop {
            match backend.poll() {
                Poll::Output(chunk) => out.extend(chunk),
                Poll::Pending => {
                    assert!(Instant::now() < deadline, "process never exited");
                    std::thread::sleep(Duration::from_millis(10));
                }
                Poll::Exited => return out,
            }
        }
    }

    #[cfg(unix)]
    #[test]
    fn delivers_output_before_exit() {
        let mut backend = ShellBackend::new();
        backend.spawn("printf abc; printf def").unwrap();

        assert_eq!(drain(&mut backend), b"abcdef".to_vec());
        assert_eq!(backend.reap(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn reports_nonzero_exit_code() {
        let mut backend = ShellBackend::new();
        backend.spawn("exit 7").unwrap();

        assert!(drain(&mut backend).is_empty());
        assert_eq!(backend.reap(), 7);
    }

    #[cfg(unix)]
    #[test]
    fn killed_child_reports_signal_exit_code() {
        let mut backend = ShellBackend::new();
        backend.spawn("printf x; kill -9 $$").unwrap();

        assert_eq!(drain(&mut backend), b"x".to_vec());
        assert_eq!(backend.reap(), 128 + 9);
    }

    #[test]
    fn reap_without_spawn_is_sentinel() {
        let mut backend = ShellBackend::new();
        assert_eq!(backend.poll(), Poll::Exited);
        assert_eq!(backend.reap(), -1);
    }
}
