// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Send API request payloads.
//!
//! Typed bodies for the Graph `me/messages` endpoint: plain text (always
//! tagged with the bot metadata marker), quick replies, generic-template
//! carousels, and sender actions.

use serde::Serialize;

use showroom_core::types::{CarouselCard, QuickReply};

/// Top-level Send API request body.
#[derive(Debug, Clone, Serialize)]
pub struct SendRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub messaging_type: Option<&'static str>,
    pub recipient: Recipient,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<MessageBody>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sender_action: Option<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Recipient {
    pub id: String,
}

/// The message portion of a Send API request.
#[derive(Debug, Clone, Serialize)]
pub struct MessageBody {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Bot marker echoed back in echo events; how the assistant recognizes
    /// its own outbound messages.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_replies: Option<Vec<QuickReplyPayload>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachment: Option<Attachment>,
}

#[derive(Debug, Clone, Serialize)]
pub struct QuickReplyPayload {
    pub content_type: &'static str,
    pub title: String,
    pub payload: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Attachment {
    #[serde(rename = "type")]
    pub attachment_type: &'static str,
    pub payload: TemplatePayload,
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplatePayload {
    pub template_type: &'static str,
    pub elements: Vec<TemplateElement>,
}

/// One card of a generic template.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateElement {
    pub title: String,
    pub subtitle: String,
    pub image_url: String,
    pub buttons: Vec<TemplateButton>,
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateButton {
    #[serde(rename = "type")]
    pub button_type: &'static str,
    pub title: String,
    pub payload: String,
}

/// The generic-template limit on elements per message.
const MAX_CAROUSEL_ELEMENTS: usize = 10;

impl SendRequest {
    /// A plain text message carrying the bot metadata tag.
    pub fn text(recipient_id: &str, text: &str, metadata_tag: &str) -> Self {
        Self {
            messaging_type: Some("RESPONSE"),
            recipient: Recipient {
                id: recipient_id.to_string(),
            },
            message: Some(MessageBody {
                text: Some(text.to_string()),
                metadata: Some(metadata_tag.to_string()),
                quick_replies: None,
                attachment: None,
            }),
            sender_action: None,
        }
    }

    /// A text message with quick-reply buttons.
    pub fn quick_replies(recipient_id: &str, text: &str, replies: &[QuickReply]) -> Self {
        Self {
            messaging_type: Some("RESPONSE"),
            recipient: Recipient {
                id: recipient_id.to_string(),
            },
            message: Some(MessageBody {
                text: Some(text.to_string()),
                metadata: None,
                quick_replies: Some(
                    replies
                        .iter()
                        .map(|r| QuickReplyPayload {
                            content_type: "text",
                            title: r.title.clone(),
                            payload: r.payload.clone(),
                        })
                        .collect(),
                ),
                attachment: None,
            }),
            sender_action: None,
        }
    }

    /// A generic-template carousel, truncated to the platform's element limit.
    pub fn carousel(recipient_id: &str, cards: &[CarouselCard]) -> Self {
        Self {
            messaging_type: Some("RESPONSE"),
            recipient: Recipient {
                id: recipient_id.to_string(),
            },
            message: Some(MessageBody {
                text: None,
                metadata: None,
                quick_replies: None,
                attachment: Some(Attachment {
                    attachment_type: "template",
                    payload: TemplatePayload {
                        template_type: "generic",
                        elements: cards
                            .iter()
                            .take(MAX_CAROUSEL_ELEMENTS)
                            .map(|card| TemplateElement {
                                title: card.title.clone(),
                                subtitle: card.subtitle.clone(),
                                image_url: card.image_url.clone(),
                                buttons: card
                                    .buttons
                                    .iter()
                                    .map(|b| TemplateButton {
                                        button_type: "postback",
                                        title: b.title.clone(),
                                        payload: b.payload.clone(),
                                    })
                                    .collect(),
                            })
                            .collect(),
                    },
                }),
            }),
            sender_action: None,
        }
    }

    /// A typing indicator sender action.
    pub fn typing(recipient_id: &str) -> Self {
        Self {
            messaging_type: None,
            recipient: Recipient {
                id: recipient_id.to_string(),
            },
            message: None,
            sender_action: Some("typing_on"),
        }
    }
}
