// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Conversation turn CRUD operations.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use rusqlite::params;

use showroom_core::types::{StoredTurn, TurnRole};
use showroom_core::ShowroomError;

use crate::database::Database;

/// Insert one turn, stamped with the current UTC time.
pub async fn insert_turn(
    db: &Database,
    user_id: &str,
    role: TurnRole,
    content: &str,
) -> Result<(), ShowroomError> {
    let user_id = user_id.to_string();
    let role = role.to_string();
    let content = content.to_string();
    let created_at = Utc::now().to_rfc3339();
    db.connection()
        .call(move |conn| {
            conn.execute(
                "INSERT INTO turns (user_id, role, content, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                params![user_id, role, content, created_at],
            )?;
            Ok(())
        })
        .await
        .map_err(crate::database::map_tr_err)
}

/// Get the `limit` most-recent turns for a user, oldest first.
///
/// The query selects newest-first so the LIMIT keeps recency, then the rows
/// are reversed into chronological order for the caller.
pub async fn recent_turns(
    db: &Database,
    user_id: &str,
    limit: usize,
) -> Result<Vec<StoredTurn>, ShowroomError> {
    let user_id = user_id.to_string();
    db.connection()
        .call(move |conn| {
            let mut stmt = conn.prepare(
                "SELECT user_id, role, content, created_at
                 FROM turns WHERE user_id = ?1
                 ORDER BY created_at DESC, id DESC LIMIT ?2",
            )?;
            let rows = stmt.query_map(params![user_id, limit as i64], |row| {
                let role: String = row.get(1)?;
                let created_at: String = row.get(3)?;
                Ok(StoredTurn {
                    user_id: row.get(0)?,
                    role: TurnRole::from_str(&role).map_err(|e| {
                        rusqlite::Error::FromSqlConversionFailure(
                            1,
                            rusqlite::types::Type::Text,
                            Box::new(e),
                        )
                    })?,
                    content: row.get(2)?,
                    created_at: DateTime::parse_from_rfc3339(&created_at)
                        .map(|dt| dt.with_timezone(&Utc))
                        .map_err(|e| {
                            rusqlite::Error::FromSqlConversionFailure(
                                3,
                                rusqlite::types::Type::Text,
                                Box::new(e),
                            )
                        })?,
                })
            })?;
            let mut turns = Vec::new();
            for row in rows {
                turns.push(row?);
            }
            turns.reverse();
            Ok(turns)
        })
        .await
        .map_err(crate::database::map_tr_err)
}
