// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! In-memory history store, plus a failing variant for best-effort
//! persistence tests.

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use showroom_core::types::{StoredTurn, TurnRole};
use showroom_core::{HistoryStore, ShowroomError};

/// In-memory per-user turn log.
pub struct MemoryHistory {
    turns: Mutex<HashMap<String, Vec<StoredTurn>>>,
}

impl MemoryHistory {
    pub fn new() -> Self {
        Self {
            turns: Mutex::new(HashMap::new()),
        }
    }

    /// All stored turns for a user, oldest first.
    pub fn all_for(&self, user_id: &str) -> Vec<StoredTurn> {
        self.turns
            .lock()
            .unwrap()
            .get(user_id)
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HistoryStore for MemoryHistory {
    async fn append(
        &self,
        user_id: &str,
        role: TurnRole,
        content: &str,
    ) -> Result<(), ShowroomError> {
        self.turns
            .lock()
            .unwrap()
            .entry(user_id.to_string())
            .or_default()
            .push(StoredTurn {
                user_id: user_id.to_string(),
                role,
                content: content.to_string(),
                created_at: Utc::now(),
            });
        Ok(())
    }

    async fn recent(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<StoredTurn>, ShowroomError> {
        let turns = self.all_for(user_id);
        let skip = turns.len().saturating_sub(limit);
        Ok(turns.into_iter().skip(skip).collect())
    }
}

/// A history store whose every operation fails.
pub struct FailingHistory;

#[async_trait]
impl HistoryStore for FailingHistory {
    async fn append(&self, _: &str, _: TurnRole, _: &str) -> Result<(), ShowroomError> {
        Err(ShowroomError::Storage {
            source: "history store down".into(),
        })
    }

    async fn recent(&self, _: &str, _: usize) -> Result<Vec<StoredTurn>, ShowroomError> {
        Err(ShowroomError::Storage {
            source: "history store down".into(),
        })
    }
}
