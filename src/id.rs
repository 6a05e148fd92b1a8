//! Record identifier generation
//!
//! Identifiers are Unix-epoch milliseconds taken at creation time. Two
//! creations in the same millisecond would collide, so the generator never
//! hands out a value less than or equal to the previous one: it bumps to
//! `last + 1` instead.

use std::sync::atomic::{AtomicU64, Ordering};

use crate::types::RecordId;

#[derive(Debug, Default)]
pub struct IdGenerator {
    last: AtomicU64,
}

impl IdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next identifier: current wall-clock milliseconds, strictly greater
    /// than anything this generator issued before.
    pub fn next_id(&self) -> RecordId {
        self.next_from(now_millis())
    }

    fn next_from(&self, now: RecordId) -> RecordId {
        let mut last = self.last.load(Ordering::Relaxed);
        loop {
            let candidate = now.max(last + 1);
            match self
                .last
                .compare_exchange_weak(last, candidate, Ordering::AcqRel, Ordering::Relaxed)
            {
                Ok(_) => return candidate,
                Err(actual) => last = actual,
            }
        }
    }
}

fn now_millis() -> RecordId {
    // Clocks before 1970 would be a misconfigured host; fall back to 0 and
    // let the monotonic bump carry on.
    u64::try_from(chrono::Utc::now().timestamp_millis()).unwrap_or(0)
}
