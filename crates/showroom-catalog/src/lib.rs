// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Car catalog for the Showroom assistant.
//!
//! Provides [`StaticCatalog`], an in-memory [`CatalogStore`] seeded with the
//! dealership lineup, plus the financing quotation arithmetic used by the
//! quotation tool.

pub mod quote;
pub mod seed;

use async_trait::async_trait;

use showroom_core::types::CarModel;
use showroom_core::{CatalogStore, ShowroomError};

pub use quote::{QuoteBreakdown, DEFAULT_DOWNPAYMENT_PERCENT, DEFAULT_TERM_YEARS};

/// An immutable in-memory catalog.
///
/// The admin-facing catalog CRUD lives outside this system; from the core's
/// perspective the inventory only ever changes between process restarts.
pub struct StaticCatalog {
    models: Vec<CarModel>,
}

impl StaticCatalog {
    /// Creates a catalog over an explicit set of models.
    pub fn new(models: Vec<CarModel>) -> Self {
        Self { models }
    }

    /// Creates a catalog seeded with the demonstration lineup.
    pub fn seeded() -> Self {
        Self::new(seed::seed_models())
    }
}

#[async_trait]
impl CatalogStore for StaticCatalog {
    async fn get_by_id(&self, id: &str) -> Result<Option<CarModel>, ShowroomError> {
        Ok(self.models.iter().find(|m| m.id == id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<CarModel>, ShowroomError> {
        Ok(self.models.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn seeded_catalog_resolves_known_id() {
        let catalog = StaticCatalog::seeded();
        let car = catalog.get_by_id("car_xpander_gls").await.unwrap().unwrap();
        assert_eq!(car.name, "Mitsubishi Xpander GLS");
        assert_eq!(car.price, 1_266_000);
    }

    #[tokio::test]
    async fn unknown_id_is_none_not_error() {
        let catalog = StaticCatalog::seeded();
        assert!(catalog.get_by_id("car_bogus").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn get_all_returns_full_lineup() {
        let catalog = StaticCatalog::seeded();
        let all = catalog.get_all().await.unwrap();
        assert_eq!(all.len(), 4);
    }
}
