// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversation history trait for persistence backends.

use async_trait::async_trait;

use crate::error::ShowroomError;
use crate::types::{StoredTurn, TurnRole};

/// Append-only per-user message log with bounded-recency reads.
#[async_trait]
pub trait HistoryStore: Send + Sync {
    /// Appends one turn to the user's log.
    async fn append(
        &self,
        user_id: &str,
        role: TurnRole,
        content: &str,
    ) -> Result<(), ShowroomError>;

    /// Returns at most `limit` most-recent turns, oldest first.
    async fn recent(&self, user_id: &str, limit: usize)
        -> Result<Vec<StoredTurn>, ShowroomError>;
}
