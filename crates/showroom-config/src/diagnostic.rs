// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Figment-to-miette error bridge with fuzzy match suggestions.
//!
//! Converts Figment deserialization errors into miette diagnostics with
//! "did you mean?" suggestions using Jaro-Winkler string similarity.

use miette::Diagnostic;
use thiserror::Error;

/// Minimum Jaro-Winkler similarity score to suggest a correction.
/// 0.75 catches common typos like `naem` -> `name` while filtering noise.
const SUGGESTION_THRESHOLD: f64 = 0.75;

/// A configuration error with diagnostic information.
#[derive(Debug, Error, Diagnostic)]
pub enum ConfigError {
    /// An unknown key was found in the configuration.
    #[error("unknown configuration key `{key}`")]
    #[diagnostic(
        code(showroom::config::unknown_key),
        help("{}", format_unknown_key_help(suggestion.as_deref()))
    )]
    UnknownKey {
        key: String,
        /// Suggested correction via fuzzy matching, if any.
        suggestion: Option<String>,
    },

    /// A configuration value failed to deserialize.
    #[error("configuration parse error: {message}")]
    #[diagnostic(code(showroom::config::parse))]
    Parse { message: String },

    /// A semantic constraint was violated after deserialization.
    #[error("{message}")]
    #[diagnostic(code(showroom::config::validation))]
    Validation { message: String },
}

fn format_unknown_key_help(suggestion: Option<&str>) -> String {
    match suggestion {
        Some(s) => format!("did you mean `{s}`?"),
        None => "check the key against the documented configuration sections".to_string(),
    }
}

/// Convert a Figment error chain into a list of [`ConfigError`]s.
///
/// Unknown-field errors get fuzzy-match suggestions against the set of
/// valid keys Figment reports; everything else becomes a parse error.
pub fn figment_to_config_errors(err: figment::Error) -> Vec<ConfigError> {
    err.into_iter()
        .map(|e| match e.kind {
            figment::error::Kind::UnknownField(ref field, ref valid) => {
                let suggestion = best_suggestion(field, valid);
                ConfigError::UnknownKey {
                    key: field.clone(),
                    suggestion,
                }
            }
            _ => ConfigError::Parse {
                message: e.to_string(),
            },
        })
        .collect()
}

/// Pick the closest valid key by Jaro-Winkler similarity, if close enough.
fn best_suggestion(field: &str, valid: &[&str]) -> Option<String> {
    valid
        .iter()
        .map(|candidate| (strsim::jaro_winkler(field, candidate), *candidate))
        .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.0.total_cmp(&b.0))
        .map(|(_, candidate)| candidate.to_string())
}

/// Render all collected errors to stderr via miette's report formatting.
pub fn render_errors(errors: &[ConfigError]) {
    for err in errors {
        eprintln!("{:?}", miette::Report::msg(err.to_string()));
    }
}
