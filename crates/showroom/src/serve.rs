// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! `showroom serve` command implementation.
//!
//! Wires the configured adapters (Messenger channel, Anthropic provider,
//! SQLite history, seeded catalog, appointment book) into the orchestrator
//! and runs the webhook server with graceful shutdown.

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

use showroom_agent::pause::PauseRegistry;
use showroom_agent::tools::ToolRegistry;
use showroom_agent::{prompt, Orchestrator, OrchestratorSettings};
use showroom_anthropic::types::ToolDefinition;
use showroom_anthropic::AnthropicProvider;
use showroom_booking::AppointmentBook;
use showroom_catalog::StaticCatalog;
use showroom_config::ShowroomConfig;
use showroom_core::ShowroomError;
use showroom_messenger::MessengerChannel;
use showroom_storage::SqliteHistory;

use crate::server::{self, AppState};

/// Runs the `showroom serve` command.
pub async fn run_serve(config: ShowroomConfig) -> Result<(), ShowroomError> {
    init_tracing(&config.agent.log_level);

    let persona = resolve_persona(&config)?;

    let history = Arc::new(SqliteHistory::open(&config.storage).await?);
    let catalog = Arc::new(StaticCatalog::seeded());
    let booking = Arc::new(AppointmentBook::new(config.dealership.clone()));
    let channel = Arc::new(MessengerChannel::new(&config.messenger)?);

    let tools = Arc::new(ToolRegistry::builtin(
        channel.clone(),
        catalog.clone(),
        booking,
    ));
    let tool_definitions: Vec<ToolDefinition> =
        serde_json::from_value(serde_json::Value::Array(tools.tool_definitions())).map_err(
            |e| ShowroomError::Internal(format!("tool definitions failed to serialize: {e}")),
        )?;

    let provider = Arc::new(AnthropicProvider::new(
        &config.anthropic,
        persona,
        tool_definitions,
    )?);

    let orchestrator = Arc::new(Orchestrator::new(
        provider,
        channel,
        history.clone(),
        catalog,
        Arc::new(PauseRegistry::new()),
        tools,
        OrchestratorSettings::from_config(&config),
    ));

    let app = server::router(AppState {
        orchestrator,
        verify_token: config.messenger.verify_token.clone(),
    });

    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                info!("shutdown signal received");
                cancel.cancel();
            }
        });
    }

    let bind = format!(
        "{}:{}",
        config.messenger.bind_address, config.messenger.port
    );
    let listener = tokio::net::TcpListener::bind(&bind)
        .await
        .map_err(|e| ShowroomError::Internal(format!("failed to bind {bind}: {e}")))?;
    info!(bind = bind.as_str(), "webhook server listening");

    axum::serve(listener, app)
        .with_graceful_shutdown({
            let cancel = cancel.clone();
            async move { cancel.cancelled().await }
        })
        .await
        .map_err(|e| ShowroomError::Internal(format!("server error: {e}")))?;

    // Checkpoint the history store before exit.
    history.close().await?;
    info!("showroom stopped");
    Ok(())
}

/// Resolves the system persona: file takes precedence over inline config,
/// which takes precedence over the built-in default.
fn resolve_persona(config: &ShowroomConfig) -> Result<String, ShowroomError> {
    if let Some(path) = &config.agent.system_prompt_file {
        return std::fs::read_to_string(path).map_err(|e| {
            ShowroomError::Config(format!("failed to read system_prompt_file {path}: {e}"))
        });
    }
    if let Some(inline) = &config.agent.system_prompt {
        return Ok(inline.clone());
    }
    Ok(prompt::DEFAULT_PERSONA.to_string())
}

/// Initializes the tracing subscriber from the configured log level.
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level))
        .unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn persona_defaults_to_built_in() {
        let config = ShowroomConfig::default();
        let persona = resolve_persona(&config).unwrap();
        assert!(persona.contains("TRANSFER_AGENT"));
    }

    #[test]
    fn inline_persona_overrides_default() {
        let mut config = ShowroomConfig::default();
        config.agent.system_prompt = Some("be terse".into());
        assert_eq!(resolve_persona(&config).unwrap(), "be terse");
    }

    #[test]
    fn missing_persona_file_is_a_config_error() {
        let mut config = ShowroomConfig::default();
        config.agent.system_prompt_file = Some("/nonexistent/persona.md".into());
        assert!(matches!(
            resolve_persona(&config),
            Err(ShowroomError::Config(_))
        ));
    }
}
