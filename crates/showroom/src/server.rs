// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Webhook HTTP surface.
//!
//! GET handles the platform's verification handshake; POST acknowledges the
//! delivery immediately with `EVENT_RECEIVED` and processes the batch in a
//! spawned task, so slow downstream calls never trigger the transport's
//! retry logic.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::{Json, Router};
use tracing::{debug, info, warn};

use showroom_agent::Orchestrator;
use showroom_messenger::webhook::{self, WebhookBody};

/// Shared webhook endpoint state.
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<Orchestrator>,
    pub verify_token: Option<String>,
}

/// Builds the webhook router.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/webhook", get(verify_webhook).post(receive_webhook))
        .with_state(state)
}

/// Verification challenge: echo `hub.challenge` when the token matches.
async fn verify_webhook(
    State(state): State<AppState>,
    Query(params): Query<HashMap<String, String>>,
) -> impl IntoResponse {
    let mode = params.get("hub.mode");
    let token = params.get("hub.verify_token");
    let challenge = params.get("hub.challenge");

    match (mode, token) {
        (Some(mode), Some(token)) => {
            if mode == "subscribe" && Some(token) == state.verify_token.as_ref() {
                info!("webhook verified");
                (StatusCode::OK, challenge.cloned().unwrap_or_default())
            } else {
                warn!("webhook verification rejected");
                (StatusCode::FORBIDDEN, String::new())
            }
        }
        _ => (StatusCode::BAD_REQUEST, String::new()),
    }
}

/// Event delivery: ack immediately, process asynchronously.
async fn receive_webhook(
    State(state): State<AppState>,
    Json(body): Json<WebhookBody>,
) -> impl IntoResponse {
    if !webhook::is_page_delivery(&body) {
        return (StatusCode::NOT_FOUND, "");
    }

    let events = webhook::parse_events(&body);
    debug!(events = events.len(), "webhook delivery parsed");

    let orchestrator = state.orchestrator.clone();
    tokio::spawn(async move {
        orchestrator.handle_batch(events).await;
    });

    (StatusCode::OK, "EVENT_RECEIVED")
}
