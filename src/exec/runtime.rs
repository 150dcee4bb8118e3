// src/exec/runtime.rs

//! Shared background runtime that drives every spawned dialog process.

use std::io;
use std::sync::OnceLock;

use tokio::runtime::{Builder, Runtime};
use tracing::{debug, error};

static RUNTIME: OnceLock<Result<Runtime, String>> = OnceLock::new();

/// Return the process-wide runtime, building it on first use.
///
/// Built with a single worker: children only need their stdout drained and
/// their exit status collected.
pub fn shared() -> io::Result<&'static Runtime> {
    let slot = RUNTIME.get_or_init(|| {
        let built = Builder::new_multi_thread()
            .worker_threads(1)
            .thread_name("pdialog-exec")
            .enable_io()
            .enable_time()
            .build();

        match built {
            Ok(rt) => {
                debug!("background process runtime started");
                Ok(rt)
            }
            Err(err) => {
                error!(error = %err, "failed to build background process runtime");
                Err(err.to_string())
            }
        }
    });

    slot.as_ref().map_err(|msg| io::Error::other(msg.clone()))
}
