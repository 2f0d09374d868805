// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Completion provider trait for LLM integrations.

use async_trait::async_trait;

use crate::error::ShowroomError;
use crate::types::{CompletionOutcome, CompletionRequest};

/// Adapter for the LLM completion API.
///
/// Implementations assemble the system persona, the fixed tool schema, and
/// the transcript, and return either final text or a list of requested tool
/// calls. The full tool schema must be attached on every call so the model
/// can choose to invoke zero or more tools per round.
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Sends one completion round and returns its outcome.
    ///
    /// A call-level timeout is required; exceeding it is reported the same
    /// way as any other provider error. The orchestrator does not retry a
    /// failed call within the same event.
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionOutcome, ShowroomError>;
}
