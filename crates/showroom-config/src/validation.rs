// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Post-deserialization validation for configuration values.
//!
//! Validates semantic constraints that cannot be expressed via serde
//! attributes, such as business-hour ordering and non-empty paths.

use crate::diagnostic::ConfigError;
use crate::model::ShowroomConfig;

/// Validate a deserialized configuration for semantic correctness.
///
/// Returns `Ok(())` if all validations pass, or `Err(Vec<ConfigError>)` with
/// all collected validation errors (does not fail fast).
pub fn validate_config(config: &ShowroomConfig) -> Result<(), Vec<ConfigError>> {
    let mut errors = Vec::new();

    if config.storage.database_path.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "storage.database_path must not be empty".to_string(),
        });
    }

    if config.storage.history_limit == 0 {
        errors.push(ConfigError::Validation {
            message: "storage.history_limit must be at least 1".to_string(),
        });
    }

    if config.agent.max_tool_rounds == 0 {
        errors.push(ConfigError::Validation {
            message: "agent.max_tool_rounds must be at least 1".to_string(),
        });
    }

    let bind = config.messenger.bind_address.trim();
    if bind.is_empty() {
        errors.push(ConfigError::Validation {
            message: "messenger.bind_address must not be empty".to_string(),
        });
    } else {
        let is_valid_ip = bind.parse::<std::net::IpAddr>().is_ok();
        let is_valid_hostname = bind
            .chars()
            .all(|c| c.is_alphanumeric() || c == '.' || c == '-' || c == ':');
        if !is_valid_ip && !is_valid_hostname {
            errors.push(ConfigError::Validation {
                message: format!(
                    "messenger.bind_address `{bind}` is not a valid IP address or hostname"
                ),
            });
        }
    }

    if config.messenger.bot_metadata_tag.trim().is_empty() {
        errors.push(ConfigError::Validation {
            message: "messenger.bot_metadata_tag must not be empty".to_string(),
        });
    }

    let hours = &config.dealership;
    if hours.open_hour >= hours.close_hour {
        errors.push(ConfigError::Validation {
            message: format!(
                "dealership.open_hour ({}) must be before dealership.close_hour ({})",
                hours.open_hour, hours.close_hour
            ),
        });
    }
    if hours.close_hour > 24 {
        errors.push(ConfigError::Validation {
            message: format!(
                "dealership.close_hour must be at most 24, got {}",
                hours.close_hour
            ),
        });
    }
    if hours.slot_minutes == 0 {
        errors.push(ConfigError::Validation {
            message: "dealership.slot_minutes must be at least 1".to_string(),
        });
    }

    if config.anthropic.request_timeout_secs == 0 {
        errors.push(ConfigError::Validation {
            message: "anthropic.request_timeout_secs must be at least 1".to_string(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
