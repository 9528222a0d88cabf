use std::sync::atomic::{AtomicI64, Ordering};

/// Process-wide queue depth, sampled by the `custom_queue_size` gauge.
///
/// Plain signed counter with no floor: unmatched removes drive it negative,
/// which the demo surfaces as-is instead of clamping.
#[derive(Debug, Default)]
pub struct QueueSizeState {
    size: AtomicI64,
}

impl QueueSizeState {
    pub fn new() -> Self {
        Self {
            size: AtomicI64::new(0),
        }
    }

    /// Increment and return the new size.
    pub fn add(&self) -> i64 {
        self.size.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Decrement and return the new size. No floor check.
    pub fn remove(&self) -> i64 {
        self.size.fetch_sub(1, Ordering::SeqCst) - 1
    }

    pub fn get(&self) -> i64 {
        self.size.load(Ordering::SeqCst)
    }
}
