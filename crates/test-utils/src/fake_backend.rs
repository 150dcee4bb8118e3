use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

use portable_dialogs::exec::{BackendFactory, Poll, ProcessBackend};

/// Scripted behaviour of one fake process.
#[derive(Debug, Clone)]
pub struct FakeRun {
    /// Polls answered with `Pending` before anything else happens.
    pub pending_polls: usize,
    /// Stdout chunks delivered one per poll.
    pub chunks: Vec<String>,
    pub exit_code: i32,
}

impl FakeRun {
    pub fn exits(exit_code: i32) -> Self {
        Self {
            pending_polls: 0,
            chunks: Vec::new(),
            exit_code,
        }
    }

    pub fn prints(text: &str) -> Self {
        Self {
            chunks: vec![text.to_string()],
            ..Self::exits(0)
        }
    }

    pub fn after_polls(mut self, pending_polls: usize) -> Self {
        self.pending_polls = pending_polls;
        self
    }

    pub fn with_exit_code(mut self, exit_code: i32) -> Self {
        self.exit_code = exit_code;
        self
    }
}

#[derive(Debug, Default)]
struct Shared {
    script: VecDeque<FakeRun>,
    spawned: Vec<String>,
    polls: usize,
    reaped: usize,
    fail_spawn: bool,
}

/// Handle shared between a test and every `FakeBackend` it creates.
///
/// - records which commands were "spawned"
/// - replays queued `FakeRun`s in order (an empty queue behaves like a
///   process that exits 0 without output)
/// - counts polls and reaps so tests can check the executor lifecycle.
#[derive(Debug, Clone, Default)]
pub struct FakeProcesses {
    shared: Arc<Mutex<Shared>>,
}

impl FakeProcesses {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, run: FakeRun) -> &Self {
        self.shared.lock().unwrap().script.push_back(run);
        self
    }

    /// Make every subsequent `spawn` fail.
    pub fn fail_spawns(&self) {
        self.shared.lock().unwrap().fail_spawn = true;
    }

    pub fn spawned(&self) -> Vec<String> {
        self.shared.lock().unwrap().spawned.clone()
    }

    pub fn polls(&self) -> usize {
        self.shared.lock().unwrap().polls
    }

    pub fn reaped(&self) -> usize {
        self.shared.lock().unwrap().reaped
    }

    pub fn backend(&self) -> FakeBackend {
        FakeBackend {
            shared: Arc::clone(&self.shared),
            current: None,
        }
    }

    pub fn factory(&self) -> BackendFactory {
        let this = self.clone();
        BackendFactory::new(move || Box::new(this.backend()) as Box<dyn ProcessBackend>)
    }
}

/// `ProcessBackend` that never spawns anything.
#[derive(Debug)]
pub struct FakeBackend {
    shared: Arc<Mutex<Shared>>,
    current: Option<FakeRun>,
}

impl ProcessBackend for FakeBackend {
    fn spawn(&mut self, command: &str) -> io::Result<()> {
        let mut shared = self.shared.lock().unwrap();
        if shared.fail_spawn {
            return Err(io::Error::new(io::ErrorKind::NotFound, "fake spawn failure"));
        }
        shared.spawned.push(command.to_string());
        let run = shared.script.pop_front().unwrap_or_else(|| FakeRun::exits(0));
        self.current = Some(run);
        Ok(())
    }

    fn poll(&mut self) -> Poll {
        self.shared.lock().unwrap().polls += 1;

        let Some(run) = self.current.as_mut() else {
            return Poll::Exited;
        };
        if run.pending_polls > 0 {
            run.pending_polls -= 1;
            return Poll::Pending;
        }
        if !run.chunks.is_empty() {
            return Poll::Output(run.chunks.remove(0).into_bytes());
        }
        Poll::Exited
    }

    fn reap(&mut self) -> i32 {
        self.shared.lock().unwrap().reaped += 1;
        self.current.take().map(|run| run.exit_code).unwrap_or(-1)
    }
}
