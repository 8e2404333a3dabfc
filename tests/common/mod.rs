//! Shared helpers for integration tests
// This helper module is consumed selectively by the integration test files.
// Keep these utilities available without forcing every helper to be
// referenced in each individual test target.
#![allow(dead_code)]

use std::sync::{Mutex, MutexGuard};

use log::{Level, LevelFilter, Log, Metadata, Record};
use once_cell::sync::Lazy;

/// One captured diagnostic record: level plus rendered message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRecord {
    pub level: Level,
    pub message: String,
}

static RECORDS: Lazy<Mutex<Vec<CapturedRecord>>> = Lazy::new(|| Mutex::new(Vec::new()));

// `log::set_logger` is process-global, so tests that assert on records must
// not interleave. Each capture() holds this lock for the test's duration.
static CAPTURE_LOCK: Lazy<Mutex<()>> = Lazy::new(|| Mutex::new(()));

struct CaptureLogger;

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let mut records = RECORDS.lock().unwrap();
        records.push(CapturedRecord {
            level: record.level(),
            message: record.args().to_string(),
        });
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger;

/// Install the capture logger and clear previously captured records.
///
/// Returns a guard serializing log-asserting tests; hold it until the last
/// assertion.
pub fn capture() -> MutexGuard<'static, ()> {
    let guard = CAPTURE_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    // set_logger fails after the first call; that is fine, the logger is
    // already ours.
    let _ = log::set_logger(&LOGGER);
    log::set_max_level(LevelFilter::Trace);
    RECORDS.lock().unwrap().clear();
    guard
}

/// Take every record captured since the last `capture()` / `take_records()`.
pub fn take_records() -> Vec<CapturedRecord> {
    std::mem::take(&mut *RECORDS.lock().unwrap())
}

/// Count captured records at the given level.
pub fn count_at_level(records: &[CapturedRecord], level: Level) -> usize {
    records.iter().filter(|r| r.level == level).count()
}
