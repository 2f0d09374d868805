// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Common types used across adapter traits and the Showroom core.

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

// --- Inbound events ---

/// One normalized notification derived from a messaging-platform webhook delivery.
///
/// Constructed by the webhook parser, consumed exactly once by the
/// orchestrator. Only its effects are persisted.
#[derive(Debug, Clone)]
pub struct InboundEvent {
    /// Opaque id of the remote chat participant.
    pub sender_id: String,
    pub kind: InboundKind,
}

/// Payload variants of an inbound event.
#[derive(Debug, Clone)]
pub enum InboundKind {
    /// A plain text message from the user.
    Text { text: String },
    /// A button-click postback carrying an opaque payload string.
    Postback { payload: String },
    /// An echo of a previously sent outbound message. `metadata` identifies
    /// whether the echoed message originated from the assistant or a human
    /// operator typing in the platform's native inbox.
    Echo {
        recipient_id: String,
        metadata: Option<String>,
    },
}

// --- Conversation history ---

/// Role of a stored conversation turn.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum TurnRole {
    User,
    Assistant,
}

/// One persisted exchange unit. Append-only; never mutated or deleted by the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredTurn {
    pub user_id: String,
    pub role: TurnRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

// --- In-flight transcript ---

/// One entry of the in-flight transcript handed to the completion provider.
///
/// Each role carries only the fields that role requires: tool results carry
/// their correlation id and tool name, assistant entries carry the pending
/// tool-call requests from the round that produced them.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatTurn {
    User {
        content: String,
    },
    Assistant {
        content: Option<String>,
        tool_calls: Vec<ToolCall>,
    },
    ToolResult {
        call_id: String,
        name: String,
        content: String,
    },
}

impl ChatTurn {
    pub fn user(content: impl Into<String>) -> Self {
        Self::User {
            content: content.into(),
        }
    }
}

/// A tool invocation requested by the completion provider.
///
/// The `id` is a correlation id that must be echoed back in the paired
/// [`ChatTurn::ToolResult`] so the provider can match request to response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolCall {
    pub id: String,
    pub name: String,
    pub arguments: serde_json::Value,
}

// --- Completion provider contract types ---

/// A request to the completion provider: the transcript (ending with the
/// newest user turn) plus an optional synthetic instruction injected by
/// postback flows.
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub transcript: Vec<ChatTurn>,
    pub instruction: Option<String>,
}

impl CompletionRequest {
    pub fn new(transcript: Vec<ChatTurn>) -> Self {
        Self {
            transcript,
            instruction: None,
        }
    }
}

/// The provider's answer for one round: final text, tool calls, or neither.
///
/// Both fields empty is a valid terminal state (the orchestrator delivers
/// nothing), not an error.
#[derive(Debug, Clone, Default)]
pub struct CompletionOutcome {
    pub content: Option<String>,
    pub tool_calls: Vec<ToolCall>,
}

impl CompletionOutcome {
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            tool_calls: Vec::new(),
        }
    }
}

// --- Catalog ---

/// A sellable car model. Immutable from the core's perspective; owned and
/// mutated only by the catalog store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarModel {
    pub id: String,
    pub name: String,
    /// Suggested retail price in whole pesos.
    pub price: i64,
    pub body_type: String,
    pub description: String,
    pub image_url: String,
    pub specs: CarSpecs,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarSpecs {
    pub engine: String,
    pub transmission: String,
    pub seating_capacity: u8,
    pub fuel_type: String,
    pub power: String,
    pub torque: String,
}

// --- Appointments ---

/// Lifecycle status of a test-drive appointment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, Serialize, Deserialize,
)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AppointmentStatus {
    Confirmed,
    Cancelled,
    Completed,
    NoShow,
}

/// Contact details collected during the booking flow.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerInfo {
    pub name: String,
    pub phone: String,
    /// The messaging-platform user id the booking originated from.
    pub channel_user_id: String,
}

/// A booked test drive, owned by the booking service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub car: CarModel,
    /// Dealership-local date and time of the slot.
    pub date_time: NaiveDateTime,
    pub customer: CustomerInfo,
    pub status: AppointmentStatus,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

// --- Outbound message shapes ---

/// One quick-reply button attached to a text message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuickReply {
    pub title: String,
    pub payload: String,
}

/// A postback button on a carousel card.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardButton {
    pub title: String,
    pub payload: String,
}

/// One card of a rich carousel (generic template element).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CarouselCard {
    pub title: String,
    pub subtitle: String,
    pub image_url: String,
    pub buttons: Vec<CardButton>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn turn_role_round_trips_through_strings() {
        assert_eq!(TurnRole::User.to_string(), "user");
        assert_eq!(TurnRole::Assistant.to_string(), "assistant");
        assert_eq!(TurnRole::from_str("user").unwrap(), TurnRole::User);
        assert_eq!(TurnRole::from_str("assistant").unwrap(), TurnRole::Assistant);
    }

    #[test]
    fn appointment_status_uses_screaming_snake_case() {
        assert_eq!(AppointmentStatus::Confirmed.to_string(), "CONFIRMED");
        assert_eq!(AppointmentStatus::NoShow.to_string(), "NO_SHOW");
        assert_eq!(
            AppointmentStatus::from_str("CANCELLED").unwrap(),
            AppointmentStatus::Cancelled
        );
    }

    #[test]
    fn turn_role_serde_matches_storage_representation() {
        let json = serde_json::to_string(&TurnRole::Assistant).unwrap();
        assert_eq!(json, "\"assistant\"");
        let parsed: TurnRole = serde_json::from_str("\"user\"").unwrap();
        assert_eq!(parsed, TurnRole::User);
    }

    #[test]
    fn completion_outcome_text_has_no_tool_calls() {
        let outcome = CompletionOutcome::text("hello");
        assert_eq!(outcome.content.as_deref(), Some("hello"));
        assert!(outcome.tool_calls.is_empty());
    }

    #[test]
    fn tool_call_serializes_arguments_verbatim() {
        let call = ToolCall {
            id: "call_1".into(),
            name: "get_car_specs".into(),
            arguments: serde_json::json!({"model_id": "car_xpander_gls"}),
        };
        let json = serde_json::to_value(&call).unwrap();
        assert_eq!(json["name"], "get_car_specs");
        assert_eq!(json["arguments"]["model_id"], "car_xpander_gls");
    }
}
