// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Webhook payload parsing and content extraction.
//!
//! Turns one Graph webhook delivery into channel-agnostic [`InboundEvent`]s.
//! Malformed entries are skipped with a warning; a missing sender id is a
//! local failure, never a crash of the batch.

use serde::Deserialize;
use tracing::{debug, warn};

use showroom_core::types::{InboundEvent, InboundKind};

/// Top-level webhook delivery body.
#[derive(Debug, Clone, Deserialize)]
pub struct WebhookBody {
    /// Subscription object type; only `page` deliveries carry chat events.
    pub object: String,
    #[serde(default)]
    pub entry: Vec<WebhookEntry>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebhookEntry {
    #[serde(default)]
    pub messaging: Vec<MessagingEvent>,
}

/// One raw messaging event inside an entry.
#[derive(Debug, Clone, Deserialize)]
pub struct MessagingEvent {
    pub sender: Option<Party>,
    pub recipient: Option<Party>,
    pub message: Option<MessagePayload>,
    pub postback: Option<PostbackPayload>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Party {
    pub id: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MessagePayload {
    pub text: Option<String>,
    #[serde(default)]
    pub is_echo: bool,
    pub metadata: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PostbackPayload {
    pub payload: String,
}

/// Whether the delivery belongs to a page subscription at all.
pub fn is_page_delivery(body: &WebhookBody) -> bool {
    body.object == "page"
}

/// Flattens a webhook delivery into the events the orchestrator consumes.
///
/// Echo events address the *recipient* (the user the echoed message was sent
/// to); everything else addresses the sender. Attachments and other
/// unsupported message types produce no event.
pub fn parse_events(body: &WebhookBody) -> Vec<InboundEvent> {
    let mut events = Vec::new();

    for entry in &body.entry {
        for raw in &entry.messaging {
            let Some(sender) = raw.sender.as_ref() else {
                warn!("dropping messaging event without sender id");
                continue;
            };

            if let Some(postback) = &raw.postback {
                events.push(InboundEvent {
                    sender_id: sender.id.clone(),
                    kind: InboundKind::Postback {
                        payload: postback.payload.clone(),
                    },
                });
                continue;
            }

            let Some(message) = &raw.message else {
                debug!(sender_id = sender.id.as_str(), "ignoring non-message event");
                continue;
            };

            if message.is_echo {
                let Some(recipient) = raw.recipient.as_ref() else {
                    warn!("dropping echo event without recipient id");
                    continue;
                };
                events.push(InboundEvent {
                    sender_id: sender.id.clone(),
                    kind: InboundKind::Echo {
                        recipient_id: recipient.id.clone(),
                        metadata: message.metadata.clone(),
                    },
                });
                continue;
            }

            match &message.text {
                Some(text) => events.push(InboundEvent {
                    sender_id: sender.id.clone(),
                    kind: InboundKind::Text { text: text.clone() },
                }),
                None => {
                    debug!(
                        sender_id = sender.id.as_str(),
                        "ignoring unsupported message type"
                    );
                }
            }
        }
    }

    events
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(json: serde_json::Value) -> Vec<InboundEvent> {
        let body: WebhookBody = serde_json::from_value(json).unwrap();
        parse_events(&body)
    }

    #[test]
    fn text_message_becomes_text_event() {
        let events = parse(serde_json::json!({
            "object": "page",
            "entry": [{"messaging": [{
                "sender": {"id": "U1"},
                "recipient": {"id": "PAGE"},
                "message": {"text": "show me your cars"}
            }]}]
        }));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].sender_id, "U1");
        assert!(
            matches!(&events[0].kind, InboundKind::Text { text } if text == "show me your cars")
        );
    }

    #[test]
    fn postback_becomes_postback_event() {
        let events = parse(serde_json::json!({
            "object": "page",
            "entry": [{"messaging": [{
                "sender": {"id": "U1"},
                "postback": {"payload": "DETAILS_car_xpander_gls"}
            }]}]
        }));
        assert_eq!(events.len(), 1);
        assert!(
            matches!(&events[0].kind, InboundKind::Postback { payload } if payload == "DETAILS_car_xpander_gls")
        );
    }

    #[test]
    fn echo_addresses_the_recipient() {
        let events = parse(serde_json::json!({
            "object": "page",
            "entry": [{"messaging": [{
                "sender": {"id": "PAGE"},
                "recipient": {"id": "U1"},
                "message": {"text": "typed by a human", "is_echo": true, "metadata": null}
            }]}]
        }));
        assert_eq!(events.len(), 1);
        match &events[0].kind {
            InboundKind::Echo {
                recipient_id,
                metadata,
            } => {
                assert_eq!(recipient_id, "U1");
                assert!(metadata.is_none());
            }
            other => panic!("expected Echo, got {other:?}"),
        }
    }

    #[test]
    fn missing_sender_is_skipped_not_fatal() {
        let events = parse(serde_json::json!({
            "object": "page",
            "entry": [{"messaging": [
                {"message": {"text": "orphan"}},
                {"sender": {"id": "U2"}, "message": {"text": "kept"}}
            ]}]
        }));
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].sender_id, "U2");
    }

    #[test]
    fn attachment_only_message_produces_no_event() {
        let events = parse(serde_json::json!({
            "object": "page",
            "entry": [{"messaging": [{
                "sender": {"id": "U1"},
                "message": {"attachments": [{"type": "image"}]}
            }]}]
        }));
        assert!(events.is_empty());
    }

    #[test]
    fn batched_entries_flatten_in_order() {
        let events = parse(serde_json::json!({
            "object": "page",
            "entry": [
                {"messaging": [{"sender": {"id": "U1"}, "message": {"text": "first"}}]},
                {"messaging": [{"sender": {"id": "U2"}, "message": {"text": "second"}}]}
            ]
        }));
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].sender_id, "U1");
        assert_eq!(events[1].sender_id, "U2");
    }

    #[test]
    fn non_page_delivery_is_detectable() {
        let body: WebhookBody = serde_json::from_value(serde_json::json!({
            "object": "instagram",
            "entry": []
        }))
        .unwrap();
        assert!(!is_page_delivery(&body));
    }
}
