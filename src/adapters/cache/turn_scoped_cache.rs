//! Turn-Scoped Cache Adapter
//!
//! Holds structured records in memory for one conversation turn.
//! The cache stops serving and accepting entries once its time box closes.

use std::collections::HashMap;

use chrono::Duration;
use tracing::debug;

use crate::domain::entities::StructuredRecord;
use crate::domain::foundation::{Timestamp, TurnId};
use crate::ports::StructuredRecordCache;

/// In-memory, time-boxed record cache owned by a single turn.
#[derive(Debug, Clone)]
pub struct TurnScopedCache {
    turn_id: TurnId,
    opened_at: Timestamp,
    ttl: Duration,
    entries: HashMap<String, StructuredRecord>,
}

impl TurnScopedCache {
    /// Opens a cache for `turn_id` that lives for `ttl` from now.
    pub fn open(turn_id: TurnId, ttl: Duration) -> Self {
        Self::open_at(turn_id, ttl, Timestamp::now())
    }

    /// Opens a cache with an explicit start time.
    pub fn open_at(turn_id: TurnId, ttl: Duration, opened_at: Timestamp) -> Self {
        Self {
            turn_id,
            opened_at,
            ttl,
            entries: HashMap::new(),
        }
    }

    pub fn turn_id(&self) -> TurnId {
        self.turn_id
    }

    /// Returns true once the time box has closed.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(&Timestamp::now())
    }

    fn is_expired_at(&self, now: &Timestamp) -> bool {
        now.duration_since(&self.opened_at) >= self.ttl
    }

    /// Number of cached records, including any held past expiry.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl StructuredRecordCache for TurnScopedCache {
    fn get(&self, text: &str) -> Option<StructuredRecord> {
        if self.is_expired() {
            debug!(turn_id = %self.turn_id, "Turn cache expired; ignoring lookup");
            return None;
        }
        self.entries.get(text).cloned()
    }

    fn set(&mut self, text: &str, record: StructuredRecord) {
        if self.is_expired() {
            debug!(turn_id = %self.turn_id, "Turn cache expired; dropping record");
            return;
        }
        self.entries.insert(text.to_string(), record);
    }
}
