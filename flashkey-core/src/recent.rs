//! Bounded most-recent-first list of submitted codes.

use serde::{Deserialize, Serialize};

/// Maximum number of remembered codes.
pub const RECENT_LIMIT: usize = 5;

/// Recently submitted codes, newest first. Resubmitting a code promotes it
/// to the front instead of duplicating it; the list never grows past
/// [`RECENT_LIMIT`]. Serializes as a plain JSON string array.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentCodes(Vec<String>);

impl RecentCodes {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a submission.
    pub fn record(&mut self, code: &str) {
        self.0.retain(|existing| existing != code);
        self.0.insert(0, code.to_string());
        self.0.truncate(RECENT_LIMIT);
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }
}
