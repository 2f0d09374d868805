// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Tool trait and registry for the domain actions the model may request.
//!
//! The [`Tool`] trait defines the unified interface for every tool. The
//! [`ToolRegistry`] manages lookup by name and generates the provider-facing
//! tool definitions from the same objects, so the schema sent to the model
//! can never drift from the handlers that execute it.

pub mod catalog;
pub mod replies;
pub mod scheduling;

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;

use showroom_core::{BookingService, CatalogStore, OutboundChannel, ShowroomError};

/// Fixed error string fed back to the model for an unresolvable car id.
pub(crate) const INVALID_CAR_ID: &str = "Error: Invalid car model ID.";

/// Output from a tool invocation.
///
/// The content is never shown verbatim to the user; it exists solely as the
/// tool-result message fed back into the next completion round.
#[derive(Debug, Clone)]
pub struct ToolOutcome {
    pub content: String,
    pub is_error: bool,
}

impl ToolOutcome {
    pub fn ok(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: false,
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_error: true,
        }
    }
}

/// Unified interface for all domain tools.
///
/// Resolution failures (unknown ids, missing appointments) come back as
/// error outcomes for the model to react to; only failures that must not be
/// misreported as success (a failed booking mutation) surface as `Err`.
#[async_trait]
pub trait Tool: Send + Sync {
    /// The tool's unique name (used for lookup and API serialization).
    fn name(&self) -> &str;

    /// Human-readable description of what the tool does.
    fn description(&self) -> &str;

    /// JSON Schema describing the tool's input parameters.
    fn parameters_schema(&self) -> serde_json::Value;

    /// Invokes the tool for the given sender with parsed JSON arguments.
    async fn invoke(
        &self,
        sender_id: &str,
        args: serde_json::Value,
    ) -> Result<ToolOutcome, ShowroomError>;
}

/// Registry of available tools, indexed by name.
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    /// Creates an empty tool registry.
    pub fn new() -> Self {
        Self {
            tools: HashMap::new(),
        }
    }

    /// Creates the full built-in tool set over the given collaborators.
    pub fn builtin(
        channel: Arc<dyn OutboundChannel>,
        catalog: Arc<dyn CatalogStore>,
        booking: Arc<dyn BookingService>,
    ) -> Self {
        let mut registry = Self::new();
        registry.register(Arc::new(catalog::GetCarSpecs {
            channel: channel.clone(),
            catalog: catalog.clone(),
        }));
        registry.register(Arc::new(catalog::CalculateQuotation {
            channel: channel.clone(),
            catalog: catalog.clone(),
        }));
        registry.register(Arc::new(catalog::ShowCarGallery {
            channel: channel.clone(),
            catalog: catalog.clone(),
        }));
        registry.register(Arc::new(scheduling::CheckTestDriveAvailability {
            catalog: catalog.clone(),
            booking: booking.clone(),
        }));
        registry.register(Arc::new(scheduling::BookTestDrive {
            channel: channel.clone(),
            catalog,
            booking: booking.clone(),
        }));
        registry.register(Arc::new(scheduling::CancelAppointment {
            booking: booking.clone(),
        }));
        registry.register(Arc::new(scheduling::RescheduleAppointment { booking }));
        registry.register(Arc::new(replies::SendQuickReplies { channel }));
        registry
    }

    /// Registers a tool, indexed by its `name()`.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Looks up a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// Returns provider-format tool definitions for all registered tools.
    ///
    /// Each definition has the shape
    /// `{"name": ..., "description": ..., "input_schema": ...}`.
    pub fn tool_definitions(&self) -> Vec<serde_json::Value> {
        let mut defs: Vec<serde_json::Value> = self
            .tools
            .values()
            .map(|t| {
                serde_json::json!({
                    "name": t.name(),
                    "description": t.description(),
                    "input_schema": t.parameters_schema(),
                })
            })
            .collect();
        defs.sort_by(|a, b| {
            a["name"]
                .as_str()
                .unwrap_or("")
                .cmp(b["name"].as_str().unwrap_or(""))
        });
        defs
    }

    /// Number of registered tools.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::new()
    }
}
