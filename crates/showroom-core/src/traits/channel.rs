// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Outbound channel trait for the messaging platform's Send API.

use async_trait::async_trait;

use crate::error::ShowroomError;
use crate::types::{CarouselCard, QuickReply};

/// Adapter for outbound message delivery.
///
/// Every method is fire-and-forget from the core's perspective: callers log
/// delivery failures and continue, they never retry and never let a send
/// failure block persistence or subsequent processing.
#[async_trait]
pub trait OutboundChannel: Send + Sync {
    /// Sends a plain text message.
    async fn send_text(&self, recipient_id: &str, text: &str) -> Result<(), ShowroomError>;

    /// Sends a text message with quick-reply buttons.
    async fn send_quick_replies(
        &self,
        recipient_id: &str,
        text: &str,
        replies: &[QuickReply],
    ) -> Result<(), ShowroomError>;

    /// Sends a rich carousel of cards.
    async fn send_carousel(
        &self,
        recipient_id: &str,
        cards: &[CarouselCard],
    ) -> Result<(), ShowroomError>;

    /// Shows a typing indicator. Failures are ignored by callers.
    async fn send_typing(&self, recipient_id: &str) -> Result<(), ShowroomError>;
}
