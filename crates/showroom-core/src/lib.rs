// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Core library for the Showroom conversational assistant.
//!
//! This crate provides the foundational trait definitions, error types, and
//! domain types used throughout the Showroom workspace. Every adapter crate
//! implements traits defined here.

pub mod error;
pub mod traits;
pub mod types;

// Re-export key items at crate root for ergonomic imports.
pub use error::ShowroomError;
pub use types::{
    Appointment, AppointmentStatus, CarModel, CarSpecs, CarouselCard, ChatTurn,
    CompletionOutcome, CompletionRequest, CustomerInfo, InboundEvent, InboundKind, QuickReply,
    StoredTurn, ToolCall, TurnRole,
};

// Re-export all adapter traits at crate root.
pub use traits::{
    BookingService, CalendarBackend, CatalogStore, CompletionProvider, EventSpan, HistoryStore,
    OutboundChannel,
};
