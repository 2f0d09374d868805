// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Postback payload encoding and prefix dispatch.
//!
//! Button payloads are opaque strings the orchestrator pattern-matches by
//! prefix to trigger a fixed action without a general LLM round-trip.

/// Payload prefix for "View Specs" buttons.
pub const DETAILS_PREFIX: &str = "DETAILS_";
/// Payload prefix for "Get Quote" buttons.
pub const QUOTE_PREFIX: &str = "QUOTE_";
/// Payload prefix for "Book Test Drive" buttons.
pub const TEST_DRIVE_PREFIX: &str = "TEST_DRIVE_";
/// Exact payload for "show everything" buttons.
pub const SHOW_GALLERY_PAYLOAD: &str = "SHOW_SERVICES";

/// A recognized postback action.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Postback {
    /// Show one model's details card.
    Details(String),
    /// Send the default quotation for one model.
    Quote(String),
    /// Start the guided booking flow for one model.
    TestDrive(String),
    /// Show the full gallery carousel.
    ShowGallery,
}

impl Postback {
    /// Parses a raw payload; unknown payloads return `None` and are ignored
    /// by the caller.
    pub fn parse(payload: &str) -> Option<Self> {
        if payload == SHOW_GALLERY_PAYLOAD {
            return Some(Self::ShowGallery);
        }
        if let Some(id) = payload.strip_prefix(DETAILS_PREFIX) {
            return Some(Self::Details(id.to_string()));
        }
        if let Some(id) = payload.strip_prefix(QUOTE_PREFIX) {
            return Some(Self::Quote(id.to_string()));
        }
        if let Some(id) = payload.strip_prefix(TEST_DRIVE_PREFIX) {
            return Some(Self::TestDrive(id.to_string()));
        }
        None
    }
}

/// Builds a details payload for a model id.
pub fn details_payload(model_id: &str) -> String {
    format!("{DETAILS_PREFIX}{model_id}")
}

/// Builds a quote payload for a model id.
pub fn quote_payload(model_id: &str) -> String {
    format!("{QUOTE_PREFIX}{model_id}")
}

/// Builds a test-drive payload for a model id.
pub fn test_drive_payload(model_id: &str) -> String {
    format!("{TEST_DRIVE_PREFIX}{model_id}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn prefixes_round_trip() {
        assert_eq!(
            Postback::parse(&details_payload("car_xpander_gls")),
            Some(Postback::Details("car_xpander_gls".into()))
        );
        assert_eq!(
            Postback::parse(&quote_payload("car_mirage_g4")),
            Some(Postback::Quote("car_mirage_g4".into()))
        );
        assert_eq!(
            Postback::parse(&test_drive_payload("car_montero_gt")),
            Some(Postback::TestDrive("car_montero_gt".into()))
        );
    }

    #[test]
    fn gallery_payload_is_exact_match() {
        assert_eq!(Postback::parse("SHOW_SERVICES"), Some(Postback::ShowGallery));
        assert_eq!(Postback::parse("SHOW_SERVICES_EXTRA"), None);
    }

    #[test]
    fn unknown_payload_is_none() {
        assert_eq!(Postback::parse("YES"), None);
        assert_eq!(Postback::parse(""), None);
    }
}
