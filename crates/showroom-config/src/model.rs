// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration model structs for the Showroom assistant.
//!
//! All structs use `#[serde(deny_unknown_fields)]` to reject unrecognized
//! config keys at startup, providing actionable error messages.

use serde::{Deserialize, Serialize};

/// Top-level Showroom configuration.
///
/// Loaded from TOML files following XDG hierarchy, with environment variable
/// overrides. All sections are optional and default to sensible values.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct ShowroomConfig {
    /// Assistant identity and behavior settings.
    #[serde(default)]
    pub agent: AgentConfig,

    /// Messenger platform integration settings.
    #[serde(default)]
    pub messenger: MessengerConfig,

    /// Anthropic API settings.
    #[serde(default)]
    pub anthropic: AnthropicConfig,

    /// Storage backend settings.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Dealership business settings (hours, slots, booking window).
    #[serde(default)]
    pub dealership: DealershipConfig,
}

/// Assistant identity and behavior configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AgentConfig {
    /// Display name of the assistant.
    #[serde(default = "default_agent_name")]
    pub name: String,

    /// Logging level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Maximum completion/tool rounds per inbound message before the loop
    /// degrades to the fixed trouble reply.
    #[serde(default = "default_max_tool_rounds")]
    pub max_tool_rounds: u32,

    /// Inline system persona string. Overridden by `system_prompt_file` if both set.
    #[serde(default)]
    pub system_prompt: Option<String>,

    /// Path to a markdown file containing the system persona.
    /// Takes precedence over `system_prompt` if both are set.
    #[serde(default)]
    pub system_prompt_file: Option<String>,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: default_agent_name(),
            log_level: default_log_level(),
            max_tool_rounds: default_max_tool_rounds(),
            system_prompt: None,
            system_prompt_file: None,
        }
    }
}

fn default_agent_name() -> String {
    "showroom".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_max_tool_rounds() -> u32 {
    5
}

/// Messenger platform integration configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct MessengerConfig {
    /// Page access token for the Send API. `None` disables outbound delivery.
    #[serde(default)]
    pub page_access_token: Option<String>,

    /// Token expected in the webhook verification handshake.
    #[serde(default)]
    pub verify_token: Option<String>,

    /// Metadata tag attached to every outbound text message. Echo events
    /// carrying a different tag are treated as human-operator replies.
    #[serde(default = "default_bot_metadata_tag")]
    pub bot_metadata_tag: String,

    /// Minutes the assistant stays silent after a human-operator reply.
    #[serde(default = "default_human_pause_mins")]
    pub human_pause_mins: u64,

    /// Minutes the assistant stays silent after emitting the handoff sentinel.
    #[serde(default = "default_handoff_pause_mins")]
    pub handoff_pause_mins: u64,

    /// Address the webhook server binds to.
    #[serde(default = "default_bind_address")]
    pub bind_address: String,

    /// Port the webhook server listens on.
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for MessengerConfig {
    fn default() -> Self {
        Self {
            page_access_token: None,
            verify_token: None,
            bot_metadata_tag: default_bot_metadata_tag(),
            human_pause_mins: default_human_pause_mins(),
            handoff_pause_mins: default_handoff_pause_mins(),
            bind_address: default_bind_address(),
            port: default_port(),
        }
    }
}

fn default_bot_metadata_tag() -> String {
    "SHOWROOM_BOT".to_string()
}

fn default_human_pause_mins() -> u64 {
    30
}

fn default_handoff_pause_mins() -> u64 {
    5
}

fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8080
}

/// Anthropic API configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct AnthropicConfig {
    /// Anthropic API key. `None` requires environment variable.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Default model to use for LLM requests.
    #[serde(default = "default_model")]
    pub default_model: String,

    /// Maximum tokens to generate per response.
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,

    /// Anthropic API version string.
    #[serde(default = "default_api_version")]
    pub api_version: String,

    /// Call-level timeout in seconds. Bounds webhook response latency;
    /// exceeding it is treated identically to a provider error.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl Default for AnthropicConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            default_model: default_model(),
            max_tokens: default_max_tokens(),
            api_version: default_api_version(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_model() -> String {
    "claude-sonnet-4-20250514".to_string()
}

fn default_max_tokens() -> u32 {
    1024
}

fn default_api_version() -> String {
    "2023-06-01".to_string()
}

fn default_request_timeout_secs() -> u64 {
    10
}

/// Storage backend configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct StorageConfig {
    /// Path to the SQLite database file.
    #[serde(default = "default_database_path")]
    pub database_path: String,

    /// Enable WAL (Write-Ahead Logging) mode for SQLite.
    #[serde(default = "default_wal_mode")]
    pub wal_mode: bool,

    /// Most-recent turns fetched as conversation context per completion.
    #[serde(default = "default_history_limit")]
    pub history_limit: usize,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            database_path: default_database_path(),
            wal_mode: default_wal_mode(),
            history_limit: default_history_limit(),
        }
    }
}

fn default_database_path() -> String {
    dirs::data_dir()
        .map(|p| p.join("showroom").join("showroom.db"))
        .unwrap_or_else(|| std::path::PathBuf::from("showroom.db"))
        .to_string_lossy()
        .into_owned()
}

fn default_wal_mode() -> bool {
    true
}

fn default_history_limit() -> usize {
    10
}

/// Dealership business configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct DealershipConfig {
    /// Hour the dealership opens (24h clock, local time).
    #[serde(default = "default_open_hour")]
    pub open_hour: u32,

    /// Hour the dealership closes. No slot may start at or after this hour.
    #[serde(default = "default_close_hour")]
    pub close_hour: u32,

    /// Length of one test-drive slot in minutes.
    #[serde(default = "default_slot_minutes")]
    pub slot_minutes: u32,

    /// How many days ahead a booking may be placed.
    #[serde(default = "default_booking_window_days")]
    pub booking_window_days: u32,

    /// Prefix used when generating appointment reference ids.
    #[serde(default = "default_appointment_prefix")]
    pub appointment_prefix: String,
}

impl Default for DealershipConfig {
    fn default() -> Self {
        Self {
            open_hour: default_open_hour(),
            close_hour: default_close_hour(),
            slot_minutes: default_slot_minutes(),
            booking_window_days: default_booking_window_days(),
            appointment_prefix: default_appointment_prefix(),
        }
    }
}

fn default_open_hour() -> u32 {
    9
}

fn default_close_hour() -> u32 {
    17
}

fn default_slot_minutes() -> u32 {
    60
}

fn default_booking_window_days() -> u32 {
    30
}

fn default_appointment_prefix() -> String {
    "APT".to_string()
}
