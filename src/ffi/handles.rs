//! Process-wide table of `MathResult` objects owned on behalf of the host.
//!
//! Handle 0 is never issued so hosts can use it as a null value.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use crate::error::SdkError;
use crate::math_result::MathResult;

#[derive(Default)]
struct HandleTable {
    last: i64,
    entries: HashMap<i64, Box<MathResult>>,
}

static HANDLES: OnceLock<Mutex<HandleTable>> = OnceLock::new();

fn table() -> MutexGuard<'static, HandleTable> {
    HANDLES
        .get_or_init(|| Mutex::new(HandleTable::default()))
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
}

/// Take ownership of `result` and return the handle the host refers to it by.
pub fn register(result: Box<MathResult>) -> i64 {
    let mut table = table();
    table.last += 1;
    let handle = table.last;
    table.entries.insert(handle, result);
    handle
}

/// Drop the record behind `handle`. Returns false if it was not registered.
pub fn release(handle: i64) -> bool {
    table().entries.remove(&handle).is_some()
}

/// Run `f` on the record behind `handle`.
pub fn with_result<T>(handle: i64, f: impl FnOnce(&mut MathResult) -> T) -> Result<T, SdkError> {
    let mut table = table();
    let result = table
        .entries
        .get_mut(&handle)
        .ok_or(SdkError::UnknownHandle(handle))?;
    Ok(f(result))
}
