// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Configuration loader using Figment for layered config merging.
//!
//! Supports XDG hierarchy: `./showroom.toml` > `~/.config/showroom/showroom.toml`
//! > `/etc/showroom/showroom.toml` with environment variable overrides via
//! `SHOWROOM_` prefix.

#![allow(clippy::result_large_err)] // figment::Error is external and cannot be boxed without wrapper

use std::path::Path;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    Figment,
};

use crate::model::ShowroomConfig;

/// Load configuration from the standard XDG hierarchy with env var overrides.
///
/// Merge order (later overrides earlier):
/// 1. Compiled defaults
/// 2. `/etc/showroom/showroom.toml` (system-wide)
/// 3. `~/.config/showroom/showroom.toml` (user XDG config)
/// 4. `./showroom.toml` (local directory)
/// 5. `SHOWROOM_*` environment variables
pub fn load_config() -> Result<ShowroomConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ShowroomConfig::default()))
        .merge(Toml::file("/etc/showroom/showroom.toml"))
        .merge(Toml::file(
            dirs::config_dir()
                .map(|d| d.join("showroom/showroom.toml"))
                .unwrap_or_default(),
        ))
        .merge(Toml::file("showroom.toml"))
        .merge(env_provider())
        .extract()
}

/// Load configuration from a TOML string only (no XDG lookup).
///
/// Used for testing and explicit config specification.
pub fn load_config_from_str(toml_content: &str) -> Result<ShowroomConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ShowroomConfig::default()))
        .merge(Toml::string(toml_content))
        .extract()
}

/// Load configuration from a specific file path with env var overrides.
pub fn load_config_from_path(path: &Path) -> Result<ShowroomConfig, figment::Error> {
    Figment::new()
        .merge(Serialized::defaults(ShowroomConfig::default()))
        .merge(Toml::file(path))
        .merge(env_provider())
        .extract()
}

/// Create the environment variable provider using explicit `map()` for
/// section-to-dot mapping.
///
/// Uses `Env::map()` NOT `Env::split("_")` to avoid ambiguity with
/// underscore-containing key names. For example,
/// `SHOWROOM_MESSENGER_PAGE_ACCESS_TOKEN` must map to
/// `messenger.page_access_token`, not `messenger.page.access.token`.
fn env_provider() -> Env {
    Env::prefixed("SHOWROOM_").map(|key| {
        // `key` is the lowercased env var name with prefix stripped.
        // Example: SHOWROOM_MESSENGER_VERIFY_TOKEN -> "messenger_verify_token"
        let key_str = key.as_str();
        let mapped = key_str
            .replacen("agent_", "agent.", 1)
            .replacen("messenger_", "messenger.", 1)
            .replacen("anthropic_", "anthropic.", 1)
            .replacen("storage_", "storage.", 1)
            .replacen("dealership_", "dealership.", 1);
        mapped.into()
    })
}
