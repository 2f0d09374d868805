// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Recording outbound channel for delivery assertions.

use std::sync::Mutex;

use async_trait::async_trait;

use showroom_core::types::{CarouselCard, QuickReply};
use showroom_core::{OutboundChannel, ShowroomError};

/// One observed delivery.
#[derive(Debug, Clone, PartialEq)]
pub enum Delivery {
    Text {
        recipient_id: String,
        text: String,
    },
    QuickReplies {
        recipient_id: String,
        text: String,
        replies: Vec<QuickReply>,
    },
    Carousel {
        recipient_id: String,
        cards: Vec<CarouselCard>,
    },
    Typing {
        recipient_id: String,
    },
}

/// A channel that records every delivery instead of sending it.
///
/// With `failing = true` every send errors, for asserting that callers
/// swallow delivery failures.
pub struct RecordingChannel {
    deliveries: Mutex<Vec<Delivery>>,
    failing: bool,
}

impl RecordingChannel {
    pub fn new() -> Self {
        Self {
            deliveries: Mutex::new(Vec::new()),
            failing: false,
        }
    }

    /// A channel whose every send fails.
    pub fn failing() -> Self {
        Self {
            deliveries: Mutex::new(Vec::new()),
            failing: true,
        }
    }

    /// Snapshot of observed deliveries, in order.
    pub fn deliveries(&self) -> Vec<Delivery> {
        self.deliveries.lock().unwrap().clone()
    }

    /// Observed deliveries excluding typing indicators.
    pub fn messages(&self) -> Vec<Delivery> {
        self.deliveries()
            .into_iter()
            .filter(|d| !matches!(d, Delivery::Typing { .. }))
            .collect()
    }

    /// Texts delivered to the given recipient, in order.
    pub fn texts_to(&self, recipient_id: &str) -> Vec<String> {
        self.deliveries()
            .into_iter()
            .filter_map(|d| match d {
                Delivery::Text {
                    recipient_id: to,
                    text,
                } if to == recipient_id => Some(text),
                _ => None,
            })
            .collect()
    }

    fn record(&self, delivery: Delivery) -> Result<(), ShowroomError> {
        self.deliveries.lock().unwrap().push(delivery);
        if self.failing {
            return Err(ShowroomError::Channel {
                message: "recording channel configured to fail".into(),
                source: None,
            });
        }
        Ok(())
    }
}

impl Default for RecordingChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OutboundChannel for RecordingChannel {
    async fn send_text(&self, recipient_id: &str, text: &str) -> Result<(), ShowroomError> {
        self.record(Delivery::Text {
            recipient_id: recipient_id.to_string(),
            text: text.to_string(),
        })
    }

    async fn send_quick_replies(
        &self,
        recipient_id: &str,
        text: &str,
        replies: &[QuickReply],
    ) -> Result<(), ShowroomError> {
        self.record(Delivery::QuickReplies {
            recipient_id: recipient_id.to_string(),
            text: text.to_string(),
            replies: replies.to_vec(),
        })
    }

    async fn send_carousel(
        &self,
        recipient_id: &str,
        cards: &[CarouselCard],
    ) -> Result<(), ShowroomError> {
        self.record(Delivery::Carousel {
            recipient_id: recipient_id.to_string(),
            cards: cards.to_vec(),
        })
    }

    async fn send_typing(&self, recipient_id: &str) -> Result<(), ShowroomError> {
        self.record(Delivery::Typing {
            recipient_id: recipient_id.to_string(),
        })
    }
}
