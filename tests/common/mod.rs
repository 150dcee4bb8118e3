#![allow(dead_code)]

use std::time::{Duration, Instant};

pub use portable_dialogs_test_utils::init_tracing;

/// Poll `ready` until it returns true, failing the test after `limit`.
pub fn wait_until_ready(mut ready: impl FnMut() -> bool, limit: Duration) {
    let deadline = Instant::now() + limit;
    while !ready() {
        assert!(Instant::now() < deadline, "dialog process did not finish in {limit:?}");
        std::thread::sleep(Duration::from_millis(5));
    }
}
