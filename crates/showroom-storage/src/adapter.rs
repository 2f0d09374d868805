// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite implementation of the HistoryStore trait.

use async_trait::async_trait;
use tracing::debug;

use showroom_config::model::StorageConfig;
use showroom_core::types::{StoredTurn, TurnRole};
use showroom_core::{HistoryStore, ShowroomError};

use crate::database::Database;
use crate::queries;

/// SQLite-backed conversation history.
///
/// Wraps a [`Database`] handle and delegates all query operations to the
/// typed query modules.
pub struct SqliteHistory {
    db: Database,
}

impl SqliteHistory {
    /// Opens the database at the configured path and applies the schema.
    pub async fn open(config: &StorageConfig) -> Result<Self, ShowroomError> {
        let db = Database::open(&config.database_path, config.wal_mode).await?;
        debug!(path = %config.database_path, "SQLite history initialized");
        Ok(Self { db })
    }

    /// Checkpoints the WAL before shutdown.
    pub async fn close(&self) -> Result<(), ShowroomError> {
        self.db.close().await
    }
}

#[async_trait]
impl HistoryStore for SqliteHistory {
    async fn append(
        &self,
        user_id: &str,
        role: TurnRole,
        content: &str,
    ) -> Result<(), ShowroomError> {
        queries::turns::insert_turn(&self.db, user_id, role, content).await
    }

    async fn recent(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<StoredTurn>, ShowroomError> {
        queries::turns::recent_turns(&self.db, user_id, limit).await
    }
}
