// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Catalog-facing tools: specs lookup, quotation, gallery.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use showroom_catalog::{QuoteBreakdown, DEFAULT_DOWNPAYMENT_PERCENT, DEFAULT_TERM_YEARS};
use showroom_core::{CatalogStore, OutboundChannel, ShowroomError};

use crate::render;
use crate::tools::{Tool, ToolOutcome, INVALID_CAR_ID};

/// Resolves a model id and shows its details card.
pub struct GetCarSpecs {
    pub channel: Arc<dyn OutboundChannel>,
    pub catalog: Arc<dyn CatalogStore>,
}

#[async_trait]
impl Tool for GetCarSpecs {
    fn name(&self) -> &str {
        "get_car_specs"
    }

    fn description(&self) -> &str {
        "Show the detailed specifications of a specific car model to the user."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "model_id": {
                    "type": "string",
                    "description": "The ID of the car model (e.g., car_xpander_gls)."
                }
            },
            "required": ["model_id"]
        })
    }

    async fn invoke(
        &self,
        sender_id: &str,
        args: serde_json::Value,
    ) -> Result<ToolOutcome, ShowroomError> {
        let model_id = args["model_id"].as_str().unwrap_or_default();
        let Some(car) = self.catalog.get_by_id(model_id).await? else {
            return Ok(ToolOutcome::error(INVALID_CAR_ID));
        };

        let card = render::details_card(&car);
        if let Err(e) = self.channel.send_carousel(sender_id, &[card]).await {
            warn!(sender_id, error = %e, "failed to deliver details card");
        }
        Ok(ToolOutcome::ok(format!("Displayed specs for {}.", car.name)))
    }
}

/// Computes and sends a financing quotation.
pub struct CalculateQuotation {
    pub channel: Arc<dyn OutboundChannel>,
    pub catalog: Arc<dyn CatalogStore>,
}

#[async_trait]
impl Tool for CalculateQuotation {
    fn name(&self) -> &str {
        "calculate_quotation"
    }

    fn description(&self) -> &str {
        "Calculate and send a financing quotation for a car model, with optional downpayment percent and term in years."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "model_id": {
                    "type": "string",
                    "description": "The ID of the car model."
                },
                "downpayment_percent": {
                    "type": "number",
                    "description": "Downpayment as a fraction of the price (default 0.20)."
                },
                "years": {
                    "type": "integer",
                    "description": "Loan term in years (default 5)."
                }
            },
            "required": ["model_id"]
        })
    }

    async fn invoke(
        &self,
        sender_id: &str,
        args: serde_json::Value,
    ) -> Result<ToolOutcome, ShowroomError> {
        let model_id = args["model_id"].as_str().unwrap_or_default();
        let Some(car) = self.catalog.get_by_id(model_id).await? else {
            return Ok(ToolOutcome::error(INVALID_CAR_ID));
        };

        let dp_percent = args["downpayment_percent"]
            .as_f64()
            .unwrap_or(DEFAULT_DOWNPAYMENT_PERCENT);
        let years = args["years"]
            .as_u64()
            .map(|y| y as u32)
            .unwrap_or(DEFAULT_TERM_YEARS);

        let quote = QuoteBreakdown::compute(car.price, dp_percent, years);
        let text = render::quotation_text(&car, &quote);
        let replies = render::quotation_quick_replies(&car);
        if let Err(e) = self
            .channel
            .send_quick_replies(sender_id, &text, &replies)
            .await
        {
            warn!(sender_id, error = %e, "failed to deliver quotation");
        }

        Ok(ToolOutcome::ok(format!(
            "Sent quotation for {} with {}% DP for {} years.",
            car.name,
            (dp_percent * 100.0).round() as i64,
            years
        )))
    }
}

/// Sends the full gallery carousel.
pub struct ShowCarGallery {
    pub channel: Arc<dyn OutboundChannel>,
    pub catalog: Arc<dyn CatalogStore>,
}

#[async_trait]
impl Tool for ShowCarGallery {
    fn name(&self) -> &str {
        "show_car_gallery"
    }

    fn description(&self) -> &str {
        "Show a visual gallery of all available car models."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {}
        })
    }

    async fn invoke(
        &self,
        sender_id: &str,
        _args: serde_json::Value,
    ) -> Result<ToolOutcome, ShowroomError> {
        let cars = self.catalog.get_all().await?;
        let cards = render::gallery_cards(&cars);
        if let Err(e) = self.channel.send_carousel(sender_id, &cards).await {
            warn!(sender_id, error = %e, "failed to deliver gallery");
        }
        Ok(ToolOutcome::ok("Car gallery displayed to user."))
    }
}
