// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Orchestration loop for the Showroom assistant.
//!
//! The [`Orchestrator`] is the central coordinator that:
//! - Consumes inbound webhook events one at a time
//! - Gates replies on the human-handoff pause registry
//! - Dispatches postbacks to fixed actions without an LLM round-trip
//! - Drives the completion ⇄ tool-execution loop to a final reply
//! - Persists turns best-effort and delivers the reply

pub mod pause;
pub mod postback;
pub mod prompt;
pub mod render;
pub mod tools;

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, error, info, warn};

use showroom_catalog::{QuoteBreakdown, DEFAULT_DOWNPAYMENT_PERCENT, DEFAULT_TERM_YEARS};
use showroom_config::model::ShowroomConfig;
use showroom_core::types::{
    ChatTurn, CompletionOutcome, CompletionRequest, InboundEvent, InboundKind, StoredTurn,
    ToolCall, TurnRole,
};
use showroom_core::{
    CatalogStore, CompletionProvider, HistoryStore, OutboundChannel, ShowroomError,
};

use crate::pause::PauseRegistry;
use crate::postback::Postback;
use crate::prompt::{APOLOGY_REPLY, HANDOFF_NOTICE, HANDOFF_SENTINEL, TROUBLE_REPLY};
use crate::tools::ToolRegistry;

/// Tunables lifted from configuration at startup.
#[derive(Debug, Clone)]
pub struct OrchestratorSettings {
    /// Most-recent turns assembled as conversation context.
    pub history_limit: usize,
    /// Completion/tool rounds allowed per event before degrading.
    pub max_tool_rounds: u32,
    /// Pause applied when a human operator reply is detected.
    pub human_pause: Duration,
    /// Pause applied when the assistant emits the handoff sentinel.
    pub handoff_pause: Duration,
    /// Metadata tag identifying the assistant's own outbound messages.
    pub bot_metadata_tag: String,
}

impl OrchestratorSettings {
    pub fn from_config(config: &ShowroomConfig) -> Self {
        Self {
            history_limit: config.storage.history_limit,
            max_tool_rounds: config.agent.max_tool_rounds,
            human_pause: Duration::from_secs(config.messenger.human_pause_mins * 60),
            handoff_pause: Duration::from_secs(config.messenger.handoff_pause_mins * 60),
            bot_metadata_tag: config.messenger.bot_metadata_tag.clone(),
        }
    }
}

/// The message-handling orchestration loop.
///
/// Every collaborator is an injected capability, so tests substitute fakes
/// and deployments swap backends without touching this logic.
pub struct Orchestrator {
    provider: Arc<dyn CompletionProvider>,
    channel: Arc<dyn OutboundChannel>,
    history: Arc<dyn HistoryStore>,
    catalog: Arc<dyn CatalogStore>,
    pauses: Arc<PauseRegistry>,
    tools: Arc<ToolRegistry>,
    settings: OrchestratorSettings,
}

impl Orchestrator {
    pub fn new(
        provider: Arc<dyn CompletionProvider>,
        channel: Arc<dyn OutboundChannel>,
        history: Arc<dyn HistoryStore>,
        catalog: Arc<dyn CatalogStore>,
        pauses: Arc<PauseRegistry>,
        tools: Arc<ToolRegistry>,
        settings: OrchestratorSettings,
    ) -> Self {
        info!(
            tools = tools.len(),
            history_limit = settings.history_limit,
            max_tool_rounds = settings.max_tool_rounds,
            "orchestrator initialized"
        );
        Self {
            provider,
            channel,
            history,
            catalog,
            pauses,
            tools,
            settings,
        }
    }

    /// Processes one webhook batch sequentially.
    ///
    /// A failure in one event never aborts its siblings: the error is
    /// logged and a best-effort apology goes to that sender.
    pub async fn handle_batch(&self, events: Vec<InboundEvent>) {
        for event in events {
            let sender_id = event.sender_id.clone();
            if let Err(e) = self.handle_event(event).await {
                error!(sender_id = sender_id.as_str(), error = %e, "event handling failed");
                if let Err(send_err) = self.channel.send_text(&sender_id, APOLOGY_REPLY).await {
                    warn!(error = %send_err, "failed to deliver apology");
                }
            }
        }
    }

    /// Processes one inbound event to completion.
    pub async fn handle_event(&self, event: InboundEvent) -> Result<(), ShowroomError> {
        match event.kind {
            InboundKind::Echo {
                recipient_id,
                metadata,
            } => {
                self.handle_echo(&recipient_id, metadata.as_deref());
                Ok(())
            }
            InboundKind::Postback { payload } => {
                self.handle_postback(&event.sender_id, &payload).await
            }
            InboundKind::Text { text } => self.handle_text(&event.sender_id, &text).await,
        }
    }

    /// Echo of an outbound message. A tag other than our own means a human
    /// operator replied from the platform inbox: yield the conversation.
    fn handle_echo(&self, recipient_id: &str, metadata: Option<&str>) {
        if metadata == Some(self.settings.bot_metadata_tag.as_str()) {
            debug!(recipient_id, "own outbound echo ignored");
            return;
        }
        info!(recipient_id, "human operator reply detected, pausing assistant");
        self.pauses.pause(recipient_id, self.settings.human_pause);
    }

    /// Fixed postback actions; unknown payloads are logged and ignored.
    async fn handle_postback(&self, sender_id: &str, payload: &str) -> Result<(), ShowroomError> {
        info!(sender_id, payload, "postback received");

        let Some(action) = Postback::parse(payload) else {
            debug!(sender_id, payload, "unrecognized postback payload ignored");
            return Ok(());
        };

        match action {
            Postback::Details(model_id) => {
                let Some(car) = self.catalog.get_by_id(&model_id).await? else {
                    warn!(sender_id, model_id = model_id.as_str(), "details for unknown model");
                    return Ok(());
                };
                let card = render::details_card(&car);
                self.deliver_carousel(sender_id, &[card]).await;
            }
            Postback::Quote(model_id) => {
                let Some(car) = self.catalog.get_by_id(&model_id).await? else {
                    warn!(sender_id, model_id = model_id.as_str(), "quote for unknown model");
                    return Ok(());
                };
                let quote =
                    QuoteBreakdown::compute(car.price, DEFAULT_DOWNPAYMENT_PERCENT, DEFAULT_TERM_YEARS);
                let text = render::quotation_text(&car, &quote);
                let replies = render::quotation_quick_replies(&car);
                if let Err(e) = self
                    .channel
                    .send_quick_replies(sender_id, &text, &replies)
                    .await
                {
                    warn!(sender_id, error = %e, "failed to deliver default quotation");
                }
            }
            Postback::TestDrive(model_id) => {
                self.start_booking_flow(sender_id, &model_id).await?;
            }
            Postback::ShowGallery => {
                let cars = self.catalog.get_all().await?;
                let cards = render::gallery_cards(&cars);
                self.deliver_carousel(sender_id, &cards).await;
            }
        }
        Ok(())
    }

    /// One synthetic system instruction seeds the guided booking flow; the
    /// model's reply is delivered and persisted as a single assistant turn.
    async fn start_booking_flow(
        &self,
        sender_id: &str,
        model_id: &str,
    ) -> Result<(), ShowroomError> {
        let Some(car) = self.catalog.get_by_id(model_id).await? else {
            warn!(sender_id, model_id, "test drive for unknown model");
            return Ok(());
        };

        let transcript = self.fetch_transcript(sender_id).await;
        let mut request = CompletionRequest::new(transcript);
        request.instruction = Some(format!(
            "User clicked \"Book Test Drive\" for {}. Start the booking process by asking for their preferred date.",
            car.name
        ));

        let outcome = self.provider.complete(request).await?;
        if let Some(reply) = outcome.content.filter(|c| !c.trim().is_empty()) {
            self.deliver_text(sender_id, &reply).await;
            self.persist_best_effort(sender_id, TurnRole::Assistant, reply);
        }
        Ok(())
    }

    /// The text path: pause gate, history assembly, tool-calling loop,
    /// sentinel handling, delivery, best-effort persistence.
    async fn handle_text(&self, sender_id: &str, text: &str) -> Result<(), ShowroomError> {
        if self.pauses.is_paused(sender_id) {
            debug!(sender_id, "sender paused, assistant yields to human");
            return Ok(());
        }

        if let Err(e) = self.channel.send_typing(sender_id).await {
            debug!(error = %e, "failed to send typing indicator");
        }

        let mut transcript = self.fetch_transcript(sender_id).await;
        transcript.push(ChatTurn::user(text));

        let mut outcome = match self
            .provider
            .complete(CompletionRequest::new(transcript.clone()))
            .await
        {
            Ok(o) => o,
            Err(e) => {
                warn!(sender_id, error = %e, "completion failed, degrading");
                self.deliver_text(sender_id, TROUBLE_REPLY).await;
                return Ok(());
            }
        };

        // Tool-calling loop. Strictly sequential within a round: round N's
        // results are always appended before round N+1's completion call.
        let mut rounds = 0u32;
        while !outcome.tool_calls.is_empty() {
            if rounds >= self.settings.max_tool_rounds {
                warn!(
                    sender_id,
                    rounds, "tool loop exceeded max rounds, degrading"
                );
                outcome = CompletionOutcome::text(TROUBLE_REPLY);
                break;
            }
            rounds += 1;

            let calls = std::mem::take(&mut outcome.tool_calls);
            let mut results = Vec::with_capacity(calls.len());
            for call in &calls {
                let content = self.execute_tool(sender_id, call).await?;
                results.push(ChatTurn::ToolResult {
                    call_id: call.id.clone(),
                    name: call.name.clone(),
                    content,
                });
            }

            transcript.push(ChatTurn::Assistant {
                content: outcome.content.clone(),
                tool_calls: calls,
            });
            transcript.extend(results);

            outcome = match self
                .provider
                .complete(CompletionRequest::new(transcript.clone()))
                .await
            {
                Ok(o) => o,
                Err(e) => {
                    warn!(sender_id, error = %e, "completion failed mid-loop, degrading");
                    CompletionOutcome::text(TROUBLE_REPLY)
                }
            };
        }

        let Some(reply) = outcome.content.filter(|c| !c.trim().is_empty()) else {
            // Null content with no tool calls is a valid terminal state.
            debug!(sender_id, "no reply candidate, nothing delivered");
            return Ok(());
        };

        if reply.contains(HANDOFF_SENTINEL) {
            info!(sender_id, "handoff sentinel detected, pausing assistant");
            self.pauses.pause(sender_id, self.settings.handoff_pause);
            self.deliver_text(sender_id, HANDOFF_NOTICE).await;
            self.persist_best_effort(sender_id, TurnRole::User, text.to_string());
            self.persist_best_effort(sender_id, TurnRole::Assistant, HANDOFF_NOTICE.to_string());
        } else {
            self.deliver_text(sender_id, &reply).await;
            self.persist_best_effort(sender_id, TurnRole::User, text.to_string());
            self.persist_best_effort(sender_id, TurnRole::Assistant, reply);
        }
        Ok(())
    }

    /// Executes one tool call; the returned string is the tool result fed
    /// back to the model, never shown verbatim to the user.
    async fn execute_tool(
        &self,
        sender_id: &str,
        call: &ToolCall,
    ) -> Result<String, ShowroomError> {
        info!(sender_id, tool = call.name.as_str(), "executing tool");
        match self.tools.get(&call.name) {
            Some(tool) => {
                let outcome = tool.invoke(sender_id, call.arguments.clone()).await?;
                if outcome.is_error {
                    debug!(
                        sender_id,
                        tool = call.name.as_str(),
                        result = outcome.content.as_str(),
                        "tool resolution error fed back to model"
                    );
                }
                Ok(outcome.content)
            }
            None => {
                warn!(sender_id, tool = call.name.as_str(), "unknown tool requested");
                Ok(format!("Error: Unknown tool '{}'.", call.name))
            }
        }
    }

    /// Recent stored turns mapped into the in-flight transcript. A history
    /// read failure degrades to an empty transcript rather than failing the
    /// event.
    async fn fetch_transcript(&self, sender_id: &str) -> Vec<ChatTurn> {
        let stored = match self
            .history
            .recent(sender_id, self.settings.history_limit)
            .await
        {
            Ok(turns) => turns,
            Err(e) => {
                warn!(sender_id, error = %e, "history fetch failed, continuing without it");
                Vec::new()
            }
        };
        stored.into_iter().map(stored_to_chat).collect()
    }

    async fn deliver_text(&self, sender_id: &str, text: &str) {
        if let Err(e) = self.channel.send_text(sender_id, text).await {
            warn!(sender_id, error = %e, "failed to deliver reply");
        }
    }

    async fn deliver_carousel(&self, sender_id: &str, cards: &[showroom_core::CarouselCard]) {
        if let Err(e) = self.channel.send_carousel(sender_id, cards).await {
            warn!(sender_id, error = %e, "failed to deliver carousel");
        }
    }

    /// Spawns the history write without awaiting it: delivery must never
    /// block on storage success, and a failed write only logs.
    fn persist_best_effort(&self, sender_id: &str, role: TurnRole, content: String) {
        let history = self.history.clone();
        let user_id = sender_id.to_string();
        tokio::spawn(async move {
            if let Err(e) = history.append(&user_id, role, &content).await {
                warn!(user_id = user_id.as_str(), error = %e, "best-effort history write failed");
            }
        });
    }
}

fn stored_to_chat(turn: StoredTurn) -> ChatTurn {
    match turn.role {
        TurnRole::User => ChatTurn::User {
            content: turn.content,
        },
        TurnRole::Assistant => ChatTurn::Assistant {
            content: Some(turn.content),
            tool_calls: Vec::new(),
        },
    }
}
