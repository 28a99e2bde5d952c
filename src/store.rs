// src/store.rs
//! Persisted complaint collection.
//!
//! The whole collection lives as one JSON array under [`COMPLAINTS_KEY`].
//! Every write is a read-modify-write of the full array; there are no
//! per-record keys and no partial updates.

use chrono::{DateTime, Utc};
use thiserror::Error;
use tracing::{debug, info, warn};

use crate::db::kv::KeyValueStore;
use crate::domain::complaint::{self, Complaint, ComplaintStatus};

pub const COMPLAINTS_KEY: &str = "complaints";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend failed: {0}")]
    Backend(String),

    #[error("stored complaints are unreadable: {0}")]
    Corrupt(String),

    #[error("failed to encode complaints: {0}")]
    Encode(String),

    #[error("complaint id already exists: {0}")]
    DuplicateId(String),
}

pub struct ComplaintStore<S> {
    storage: S,
}

impl<S: KeyValueStore> ComplaintStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    /// Whole collection, newest first. An absent key is an empty collection.
    pub fn load_all(&self) -> Result<Vec<Complaint>, StoreError> {
        let raw = self
            .storage
            .get(COMPLAINTS_KEY)
            .map_err(|e| StoreError::Backend(e.to_string()))?;

        match raw {
            None => Ok(Vec::new()),
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt(e.to_string()))
            }
        }
    }

    /// Prepends an already-validated complaint and writes the collection back.
    pub fn append(&self, new_complaint: Complaint) -> Result<(), StoreError> {
        let mut all = self.load_or_empty()?;

        if all.iter().any(|c| c.id == new_complaint.id) {
            return Err(StoreError::DuplicateId(new_complaint.id));
        }

        let id = new_complaint.id.clone();
        all.insert(0, new_complaint);
        self.write_all(&all)?;

        info!(%id, total = all.len(), "complaint appended");
        Ok(())
    }

    pub fn update_status(&self, id: &str, new_status: ComplaintStatus) -> Result<(), StoreError> {
        self.update_status_at(id, new_status, complaint::now())
    }

    /// Same-status and unknown-id requests are no-ops and perform no write.
    pub fn update_status_at(
        &self,
        id: &str,
        new_status: ComplaintStatus,
        now: DateTime<Utc>,
    ) -> Result<(), StoreError> {
        let mut all = self.load_or_empty()?;

        let Some(target) = all.iter_mut().find(|c| c.id == id) else {
            debug!(%id, "status change for unknown complaint ignored");
            return Ok(());
        };

        if target.status == new_status {
            return Ok(());
        }

        let previous = target.status;
        target.status = new_status;
        target.updated_at = now;
        self.write_all(&all)?;

        info!(%id, from = %previous, to = %new_status, "complaint status changed");
        Ok(())
    }

    /// Read side of read-modify-write. A corrupt value is treated as absent so
    /// it never blocks a write.
    fn load_or_empty(&self) -> Result<Vec<Complaint>, StoreError> {
        match self.load_all() {
            Err(StoreError::Corrupt(msg)) => {
                warn!(error = %msg, "stored complaints unreadable, treating as empty");
                Ok(Vec::new())
            }
            other => other,
        }
    }

    fn write_all(&self, all: &[Complaint]) -> Result<(), StoreError> {
        let json = serde_json::to_string(all).map_err(|e| StoreError::Encode(e.to_string()))?;
        self.storage
            .set(COMPLAINTS_KEY, &json)
            .map_err(|e| StoreError::Backend(e.to_string()))
    }
}
