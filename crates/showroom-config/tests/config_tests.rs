// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Integration tests for configuration loading and validation.

use showroom_config::{load_and_validate_str, load_config_from_str};

#[test]
fn empty_toml_yields_defaults() {
    let config = load_config_from_str("").unwrap();
    assert_eq!(config.agent.name, "showroom");
    assert_eq!(config.agent.max_tool_rounds, 5);
    assert_eq!(config.storage.history_limit, 10);
    assert_eq!(config.messenger.bot_metadata_tag, "SHOWROOM_BOT");
    assert_eq!(config.messenger.human_pause_mins, 30);
    assert_eq!(config.messenger.handoff_pause_mins, 5);
    assert_eq!(config.dealership.open_hour, 9);
    assert_eq!(config.dealership.close_hour, 17);
    assert_eq!(config.dealership.slot_minutes, 60);
    assert_eq!(config.anthropic.request_timeout_secs, 10);
}

#[test]
fn sections_override_defaults() {
    let toml = r#"
        [agent]
        name = "lotbot"
        max_tool_rounds = 3

        [messenger]
        page_access_token = "EAAtoken"
        verify_token = "hub-secret"
        human_pause_mins = 45

        [dealership]
        open_hour = 8
        close_hour = 18
    "#;
    let config = load_config_from_str(toml).unwrap();
    assert_eq!(config.agent.name, "lotbot");
    assert_eq!(config.agent.max_tool_rounds, 3);
    assert_eq!(config.messenger.page_access_token.as_deref(), Some("EAAtoken"));
    assert_eq!(config.messenger.human_pause_mins, 45);
    assert_eq!(config.dealership.open_hour, 8);
    // Untouched keys keep their defaults.
    assert_eq!(config.messenger.handoff_pause_mins, 5);
}

#[test]
fn unknown_key_is_rejected() {
    let toml = r#"
        [agent]
        naem = "typo"
    "#;
    assert!(load_config_from_str(toml).is_err());
}

#[test]
fn unknown_key_gets_suggestion() {
    let toml = r#"
        [agent]
        naem = "typo"
    "#;
    let errors = load_and_validate_str(toml).unwrap_err();
    let rendered: Vec<String> = errors.iter().map(|e| e.to_string()).collect();
    assert!(
        rendered.iter().any(|m| m.contains("naem")),
        "expected the offending key in diagnostics, got {rendered:?}"
    );
}

#[test]
fn semantic_validation_runs_after_parse() {
    let toml = r#"
        [dealership]
        open_hour = 20
        close_hour = 9
    "#;
    let errors = load_and_validate_str(toml).unwrap_err();
    assert!(errors
        .iter()
        .any(|e| e.to_string().contains("open_hour")));
}

#[test]
fn wrong_type_is_a_parse_error() {
    let toml = r#"
        [storage]
        history_limit = "ten"
    "#;
    assert!(load_config_from_str(toml).is_err());
}
