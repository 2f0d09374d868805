// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalog store trait. Read-only from the core's perspective.

use async_trait::async_trait;

use crate::error::ShowroomError;
use crate::types::CarModel;

/// Lookup of sellable car models by id.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Returns the model with the given id, or `None`.
    async fn get_by_id(&self, id: &str) -> Result<Option<CarModel>, ShowroomError>;

    /// Returns every model in the catalog.
    async fn get_all(&self) -> Result<Vec<CarModel>, ShowroomError>;
}
