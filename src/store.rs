use std::collections::HashMap;
use std::sync::Mutex;

use uuid::Uuid;

use crate::models::CategorySpending;

/// An uploaded dataset waiting to be analyzed, keyed by the UUID returned
/// from the upload endpoint.
///
/// `rows` is the validated CSV grid, header row included at index 0.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub rows: Vec<Vec<String>>,
    pub category_spending: Vec<CategorySpending>,
}

/// Server-side store for uploaded sessions.
///
/// Records are one-shot: `take` hands the record out and removes it in the
/// same operation, so a UUID cannot be analyzed twice.
pub trait SessionStore: Send + Sync {
    fn put(&self, uuid: Uuid, record: SessionRecord);

    /// Remove and return the record for `uuid`, if present.
    fn take(&self, uuid: &Uuid) -> Option<SessionRecord>;
}

/// In-memory `SessionStore` backed by a mutex-guarded map.
#[derive(Default)]
pub struct MemoryStore {
    sessions: Mutex<HashMap<Uuid, SessionRecord>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn put(&self, uuid: Uuid, record: SessionRecord) {
        self.sessions
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .insert(uuid, record);
    }

    fn take(&self, uuid: &Uuid) -> Option<SessionRecord> {
        // Lookup and removal happen under one lock so two concurrent readers
        // cannot both receive the same record.
        self.sessions
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .remove(uuid)
    }
}
