// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Human-handoff pause registry.
//!
//! A process-wide map of user id to resume instant, gating whether the
//! assistant may respond to a user. Pure in-memory state: lost on restart,
//! which is acceptable because pauses are soft UX guards, not
//! correctness-critical locks. Single-instance-only; a multi-instance
//! deployment must replace this with a shared external store.

use std::time::{Duration, Instant};

use dashmap::DashMap;
use tracing::debug;

/// Per-user pause windows with lazy expiry eviction.
///
/// `pause` overwrites any existing window: a fresh human reply or handoff
/// sentinel always resets the window rather than extending an old one.
/// Updates are full overwrites, so last-writer-wins is acceptable and no
/// locking beyond the map's own sharding is needed.
#[derive(Default)]
pub struct PauseRegistry {
    entries: DashMap<String, Instant>,
}

impl PauseRegistry {
    pub fn new() -> Self {
        Self {
            entries: DashMap::new(),
        }
    }

    /// Pauses the user until `now + duration`.
    pub fn pause(&self, user_id: &str, duration: Duration) {
        let expires_at = Instant::now() + duration;
        self.entries.insert(user_id.to_string(), expires_at);
        debug!(user_id, pause_secs = duration.as_secs(), "pause window set");
    }

    /// True iff a non-expired entry exists. Expired entries found during the
    /// check are evicted.
    pub fn is_paused(&self, user_id: &str) -> bool {
        let expired = match self.entries.get(user_id) {
            Some(entry) => {
                if Instant::now() < *entry {
                    return true;
                }
                true
            }
            None => false,
        };
        if expired {
            self.entries.remove(user_id);
            debug!(user_id, "expired pause entry evicted");
        }
        false
    }

    /// Number of live entries (expired ones may still be counted until the
    /// next lookup evicts them).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn pause_gates_until_expiry() {
        let registry = PauseRegistry::new();
        registry.pause("U1", Duration::from_millis(40));

        assert!(registry.is_paused("U1"));
        tokio::time::sleep(Duration::from_millis(60)).await;
        assert!(!registry.is_paused("U1"));
    }

    #[test]
    fn unknown_user_is_not_paused() {
        let registry = PauseRegistry::new();
        assert!(!registry.is_paused("nobody"));
    }

    #[tokio::test]
    async fn expired_entry_is_evicted_on_lookup() {
        let registry = PauseRegistry::new();
        registry.pause("U1", Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(30)).await;

        assert!(!registry.is_paused("U1"));
        assert!(registry.is_empty());
    }

    #[tokio::test]
    async fn fresh_pause_overwrites_old_window() {
        let registry = PauseRegistry::new();
        registry.pause("U1", Duration::from_millis(10));
        registry.pause("U1", Duration::from_millis(200));

        tokio::time::sleep(Duration::from_millis(50)).await;
        // The second, longer window governs.
        assert!(registry.is_paused("U1"));
    }

    #[test]
    fn pauses_are_per_user() {
        let registry = PauseRegistry::new();
        registry.pause("U1", Duration::from_secs(60));
        assert!(registry.is_paused("U1"));
        assert!(!registry.is_paused("U2"));
    }
}
