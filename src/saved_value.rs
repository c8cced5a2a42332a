//! A single integer the host can stash and read back later.
//!
//! Reads and writes are individually atomic and nothing more: concurrent
//! callers get last-write-wins with no ordering between them.

use std::sync::atomic::{AtomicI32, Ordering};

static SAVED_VAL: AtomicI32 = AtomicI32::new(0);

pub fn save_val(val: i32) {
    SAVED_VAL.store(val, Ordering::Relaxed);
}

/// Last value passed to [`save_val`], or 0 if nothing was saved yet.
pub fn retrieve_val() -> i32 {
    SAVED_VAL.load(Ordering::Relaxed)
}
