// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Anthropic Claude completion provider for the Showroom assistant.
//!
//! Maps the channel-agnostic transcript into the Messages API shape
//! (preserving tool_use / tool_result pairing), attaches the persona and the
//! full tool schema on every call, and maps the response back into a
//! [`CompletionOutcome`].

pub mod client;
pub mod types;

use async_trait::async_trait;
use tracing::debug;

use showroom_config::model::AnthropicConfig;
use showroom_core::types::{ChatTurn, CompletionOutcome, CompletionRequest, ToolCall};
use showroom_core::{CompletionProvider, ShowroomError};

use crate::client::AnthropicClient;
use crate::types::{
    ApiContent, ApiContentBlock, ApiMessage, MessageRequest, MessageResponse,
    ResponseContentBlock, SystemBlock, SystemContent, ToolDefinition,
};

/// Completion provider backed by the Anthropic Messages API.
pub struct AnthropicProvider {
    client: AnthropicClient,
    model: String,
    max_tokens: u32,
    persona: String,
    tools: Vec<ToolDefinition>,
}

impl AnthropicProvider {
    /// Creates a provider from configuration.
    ///
    /// The API key comes from `anthropic.api_key` or, failing that, the
    /// `ANTHROPIC_API_KEY` environment variable.
    pub fn new(
        config: &AnthropicConfig,
        persona: String,
        tools: Vec<ToolDefinition>,
    ) -> Result<Self, ShowroomError> {
        let api_key = config
            .api_key
            .clone()
            .or_else(|| std::env::var("ANTHROPIC_API_KEY").ok())
            .ok_or_else(|| {
                ShowroomError::Config(
                    "no Anthropic API key: set anthropic.api_key or ANTHROPIC_API_KEY".into(),
                )
            })?;

        let client = AnthropicClient::new(
            &api_key,
            &config.api_version,
            std::time::Duration::from_secs(config.request_timeout_secs),
        )?;

        Ok(Self {
            client,
            model: config.default_model.clone(),
            max_tokens: config.max_tokens,
            persona,
            tools,
        })
    }

    #[cfg(test)]
    fn for_tests(client: AnthropicClient, tools: Vec<ToolDefinition>) -> Self {
        Self {
            client,
            model: "claude-sonnet-4-20250514".into(),
            max_tokens: 1024,
            persona: "test persona".into(),
            tools,
        }
    }

    fn build_request(&self, request: &CompletionRequest) -> MessageRequest {
        // The persona block is stable across calls, so it is marked for
        // prompt caching; the synthetic instruction (when present) is not.
        let mut system = vec![SystemBlock::cached(&self.persona)];
        if let Some(instruction) = &request.instruction {
            system.push(SystemBlock::text(instruction));
        }

        let mut messages = transcript_to_messages(&request.transcript);
        // The API rejects an empty messages array; an instruction-only
        // request (postback flow on a fresh conversation) carries the
        // instruction as the sole user turn instead.
        if messages.is_empty()
            && let Some(instruction) = &request.instruction
        {
            messages.push(ApiMessage {
                role: "user".into(),
                content: ApiContent::Text(instruction.clone()),
            });
        }

        MessageRequest {
            model: self.model.clone(),
            messages,
            system: Some(SystemContent::Blocks(system)),
            max_tokens: self.max_tokens,
            tools: if self.tools.is_empty() {
                None
            } else {
                Some(self.tools.clone())
            },
        }
    }
}

#[async_trait]
impl CompletionProvider for AnthropicProvider {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionOutcome, ShowroomError> {
        let api_request = self.build_request(&request);
        let response = self.client.complete_message(&api_request).await?;
        debug!(
            model = response.model.as_str(),
            stop_reason = response.stop_reason.as_deref().unwrap_or("none"),
            input_tokens = response.usage.input_tokens,
            output_tokens = response.usage.output_tokens,
            "completion round finished"
        );
        Ok(outcome_from_response(response))
    }
}

/// Maps the transcript into Anthropic conversation messages.
///
/// Tool results are user-role content in the Messages API; consecutive
/// results are merged into one user message so they immediately follow the
/// assistant message whose tool_use blocks requested them.
fn transcript_to_messages(transcript: &[ChatTurn]) -> Vec<ApiMessage> {
    let mut messages: Vec<ApiMessage> = Vec::new();

    // The conversation must open with a user turn; a leading assistant turn
    // can appear when the stored history starts with a postback reply.
    let start = transcript
        .iter()
        .position(|t| matches!(t, ChatTurn::User { .. }))
        .unwrap_or(transcript.len());

    for turn in &transcript[start..] {
        match turn {
            ChatTurn::User { content } => messages.push(ApiMessage {
                role: "user".into(),
                content: ApiContent::Text(content.clone()),
            }),
            ChatTurn::Assistant {
                content,
                tool_calls,
            } => {
                let mut blocks = Vec::new();
                if let Some(text) = content
                    && !text.is_empty()
                {
                    blocks.push(ApiContentBlock::Text { text: text.clone() });
                }
                for call in tool_calls {
                    blocks.push(ApiContentBlock::ToolUse {
                        id: call.id.clone(),
                        name: call.name.clone(),
                        input: call.arguments.clone(),
                    });
                }
                if blocks.is_empty() {
                    continue;
                }
                messages.push(ApiMessage {
                    role: "assistant".into(),
                    content: ApiContent::Blocks(blocks),
                });
            }
            ChatTurn::ToolResult {
                call_id, content, ..
            } => {
                let block = ApiContentBlock::ToolResult {
                    tool_use_id: call_id.clone(),
                    content: content.clone(),
                    is_error: None,
                };
                match messages.last_mut() {
                    Some(ApiMessage {
                        role,
                        content: ApiContent::Blocks(blocks),
                    }) if role == "user" && is_tool_result_carrier(blocks) => {
                        blocks.push(block);
                    }
                    _ => messages.push(ApiMessage {
                        role: "user".into(),
                        content: ApiContent::Blocks(vec![block]),
                    }),
                }
            }
        }
    }

    messages
}

fn is_tool_result_carrier(blocks: &[ApiContentBlock]) -> bool {
    blocks
        .iter()
        .all(|b| matches!(b, ApiContentBlock::ToolResult { .. }))
}

/// Collapses response content blocks into text + requested tool calls.
fn outcome_from_response(response: MessageResponse) -> CompletionOutcome {
    let mut text_parts = Vec::new();
    let mut tool_calls = Vec::new();

    for block in response.content {
        match block {
            ResponseContentBlock::Text { text } => text_parts.push(text),
            ResponseContentBlock::ToolUse { id, name, input } => tool_calls.push(ToolCall {
                id,
                name,
                arguments: input,
            }),
        }
    }

    let content = if text_parts.is_empty() {
        None
    } else {
        Some(text_parts.join(""))
    };

    CompletionOutcome {
        content,
        tool_calls,
    }
}
