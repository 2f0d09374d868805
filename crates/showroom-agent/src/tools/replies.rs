// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Quick-reply tool.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use showroom_core::{OutboundChannel, ShowroomError};

use crate::render;
use crate::tools::{Tool, ToolOutcome};

/// Sends a yes/no quick-reply prompt. Always succeeds: delivery failures are
/// swallowed at the channel boundary, not surfaced as tool failure.
pub struct SendQuickReplies {
    pub channel: Arc<dyn OutboundChannel>,
}

#[async_trait]
impl Tool for SendQuickReplies {
    fn name(&self) -> &str {
        "send_quick_replies"
    }

    fn description(&self) -> &str {
        "Send the user a yes/no quick reply prompt."
    }

    fn parameters_schema(&self) -> serde_json::Value {
        serde_json::json!({
            "type": "object",
            "properties": {
                "text": {
                    "type": "string",
                    "description": "The text message to accompany the quick replies."
                }
            },
            "required": ["text"]
        })
    }

    async fn invoke(
        &self,
        sender_id: &str,
        args: serde_json::Value,
    ) -> Result<ToolOutcome, ShowroomError> {
        let text = args["text"].as_str().unwrap_or_default();
        if let Err(e) = self
            .channel
            .send_quick_replies(sender_id, text, &render::yes_no_replies())
            .await
        {
            warn!(sender_id, error = %e, "failed to deliver quick replies");
        }
        Ok(ToolOutcome::ok("Quick replies sent to user."))
    }
}
