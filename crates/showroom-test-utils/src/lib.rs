// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Test fakes for Showroom integration tests.
//!
//! Fast, deterministic, CI-runnable substitutes for every collaborator
//! trait: a scripted completion provider, a recording channel, and
//! in-memory/failing history stores.

pub mod memory_history;
pub mod mock_provider;
pub mod recording_channel;

pub use memory_history::{FailingHistory, MemoryHistory};
pub use mock_provider::MockProvider;
pub use recording_channel::{Delivery, RecordingChannel};
