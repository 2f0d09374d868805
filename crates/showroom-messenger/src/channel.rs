// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Outbound channel over the Graph Send API.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use showroom_config::model::MessengerConfig;
use showroom_core::types::{CarouselCard, QuickReply};
use showroom_core::{OutboundChannel, ShowroomError};

use crate::payload::SendRequest;

/// Default Graph API endpoint for message sends.
const SEND_API_URL: &str = "https://graph.facebook.com/v22.0/me/messages";

/// Messenger Send API channel.
pub struct MessengerChannel {
    client: reqwest::Client,
    access_token: String,
    metadata_tag: String,
    base_url: String,
}

impl MessengerChannel {
    /// Creates a channel from configuration.
    ///
    /// Fails when no page access token is configured: the channel cannot
    /// deliver anything without one.
    pub fn new(config: &MessengerConfig) -> Result<Self, ShowroomError> {
        let access_token = config.page_access_token.clone().ok_or_else(|| {
            ShowroomError::Config("messenger.page_access_token is required for delivery".into())
        })?;

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| ShowroomError::Channel {
                message: format!("failed to build HTTP client: {e}"),
                source: Some(Box::new(e)),
            })?;

        Ok(Self {
            client,
            access_token,
            metadata_tag: config.bot_metadata_tag.clone(),
            base_url: SEND_API_URL.to_string(),
        })
    }

    /// Overrides the Send API URL (for testing with wiremock).
    #[cfg(test)]
    pub(crate) fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }

    async fn post(&self, request: &SendRequest) -> Result<(), ShowroomError> {
        let response = self
            .client
            .post(&self.base_url)
            .query(&[("access_token", self.access_token.as_str())])
            .json(request)
            .send()
            .await
            .map_err(|e| ShowroomError::Channel {
                message: format!("send request failed: {e}"),
                source: Some(Box::new(e)),
            })?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ShowroomError::Channel {
                message: format!("Send API returned {status}: {body}"),
                source: None,
            });
        }

        debug!(recipient = request.recipient.id.as_str(), "message delivered");
        Ok(())
    }
}

#[async_trait]
impl OutboundChannel for MessengerChannel {
    async fn send_text(&self, recipient_id: &str, text: &str) -> Result<(), ShowroomError> {
        self.post(&SendRequest::text(recipient_id, text, &self.metadata_tag))
            .await
    }

    async fn send_quick_replies(
        &self,
        recipient_id: &str,
        text: &str,
        replies: &[QuickReply],
    ) -> Result<(), ShowroomError> {
        self.post(&SendRequest::quick_replies(recipient_id, text, replies))
            .await
    }

    async fn send_carousel(
        &self,
        recipient_id: &str,
        cards: &[CarouselCard],
    ) -> Result<(), ShowroomError> {
        self.post(&SendRequest::carousel(recipient_id, cards)).await
    }

    async fn send_typing(&self, recipient_id: &str) -> Result<(), ShowroomError> {
        self.post(&SendRequest::typing(recipient_id)).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_partial_json, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_channel(base_url: &str) -> MessengerChannel {
        let config = MessengerConfig {
            page_access_token: Some("page-token".into()),
            ..MessengerConfig::default()
        };
        MessengerChannel::new(&config)
            .unwrap()
            .with_base_url(base_url.to_string())
    }

    #[test]
    fn missing_token_is_a_config_error() {
        let config = MessengerConfig::default();
        assert!(matches!(
            MessengerChannel::new(&config),
            Err(ShowroomError::Config(_))
        ));
    }

    #[tokio::test]
    async fn send_text_posts_tagged_payload_with_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .and(query_param("access_token", "page-token"))
            .and(body_partial_json(serde_json::json!({
                "recipient": {"id": "U1"},
                "message": {"text": "hello", "metadata": "SHOWROOM_BOT"}
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "recipient_id": "U1", "message_id": "mid.1"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let channel = test_channel(&server.uri());
        channel.send_text("U1", "hello").await.unwrap();
    }

    #[tokio::test]
    async fn send_failure_surfaces_as_channel_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": {"message": "Invalid user id"}
            })))
            .mount(&server)
            .await;

        let channel = test_channel(&server.uri());
        let err = channel.send_text("bogus", "hello").await.unwrap_err();
        assert!(matches!(err, ShowroomError::Channel { .. }));
    }

    #[tokio::test]
    async fn typing_indicator_round_trips() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/"))
            .and(body_partial_json(serde_json::json!({
                "sender_action": "typing_on"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({})))
            .expect(1)
            .mount(&server)
            .await;

        let channel = test_channel(&server.uri());
        channel.send_typing("U1").await.unwrap();
    }
}
