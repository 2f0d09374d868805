// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Facebook Messenger integration for the Showroom assistant.
//!
//! Outbound: [`MessengerChannel`] implements the core delivery trait over
//! the Graph Send API. Inbound: [`webhook`] parses one webhook delivery into
//! the channel-agnostic events the orchestrator consumes.

pub mod channel;
pub mod payload;
pub mod webhook;

pub use channel::MessengerChannel;
