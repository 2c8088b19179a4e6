//! Distinct-user accounting.

use std::collections::HashSet;

use parking_lot::Mutex;

/// Records which users have received a reading.
pub trait UserRegistry: Send + Sync {
    /// Record `user_id`. Returns true if it was not seen before.
    fn record(&self, user_id: u64) -> bool;

    /// Number of distinct users recorded.
    fn count(&self) -> usize;
}

/// Process-lifetime registry. Counts reset on restart.
#[derive(Debug, Default)]
pub struct InMemoryRegistry {
    users: Mutex<HashSet<u64>>,
}

impl InMemoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }
}

impl UserRegistry for InMemoryRegistry {
    fn record(&self, user_id: u64) -> bool {
        self.users.lock().insert(user_id)
    }

    fn count(&self) -> usize {
        self.users.lock().len()
    }
}
