// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Capability traits for the Showroom core's external collaborators.
//!
//! Every collaborator (completion provider, outbound channel, history store,
//! catalog, booking service) is consumed through one of these traits and
//! injected into the orchestrator, so tests substitute fakes and
//! multi-instance deployments swap in shared external stores without
//! touching orchestration logic. All traits use `#[async_trait]` for
//! dynamic dispatch compatibility.

pub mod booking;
pub mod catalog;
pub mod channel;
pub mod history;
pub mod provider;

pub use booking::{BookingService, CalendarBackend, EventSpan};
pub use catalog::CatalogStore;
pub use channel::OutboundChannel;
pub use history::HistoryStore;
pub use provider::CompletionProvider;
