// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! SQLite persistence for Showroom conversation history.
//!
//! A single tokio-rusqlite connection serializes all writes; the schema is
//! applied idempotently on open. History is append-only; retention and
//! cleanup are external concerns.

pub mod adapter;
pub mod database;
pub mod queries;

pub use adapter::SqliteHistory;
pub use database::Database;
