//! Persistence for the recent-codes list.
//!
//! One `localStorage` entry under a fixed key, read once at startup and
//! rewritten after every submission that changes the list. A missing or
//! unreadable entry degrades to an empty list; nothing here is fatal.

use flashkey_core::RecentCodes;
use gloo::storage::errors::StorageError;
use gloo::storage::{LocalStorage, Storage};

/// The single persisted key.
pub const RECENT_KEY: &str = "flashkey.recent";

#[must_use]
pub fn load_recent() -> RecentCodes {
    match LocalStorage::get(RECENT_KEY) {
        Ok(list) => list,
        Err(StorageError::KeyNotFound(_)) => RecentCodes::new(),
        Err(err) => {
            log::warn!("discarding unreadable recent-code list: {err}");
            RecentCodes::new()
        }
    }
}

pub fn save_recent(list: &RecentCodes) {
    if let Err(err) = LocalStorage::set(RECENT_KEY, list) {
        log::warn!("failed to persist recent codes: {err}");
    }
}
