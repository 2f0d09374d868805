// SPDX-FileCopyrightText: 2026 Showroom Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mock completion provider for deterministic testing.
//!
//! Outcomes are popped from a FIFO queue; every request is recorded so tests
//! can assert on call counts and transcript shapes. When the queue is empty,
//! a default text outcome is returned.

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use showroom_core::types::{CompletionOutcome, CompletionRequest};
use showroom_core::{CompletionProvider, ShowroomError};

/// A scripted completion provider.
pub struct MockProvider {
    outcomes: Mutex<VecDeque<CompletionOutcome>>,
    requests: Mutex<Vec<CompletionRequest>>,
    fail: bool,
}

impl MockProvider {
    /// Create a provider with an empty script.
    pub fn new() -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// Create a provider pre-loaded with the given outcomes.
    pub fn with_outcomes(outcomes: Vec<CompletionOutcome>) -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::from(outcomes)),
            requests: Mutex::new(Vec::new()),
            fail: false,
        }
    }

    /// Create a provider whose every call fails, as in a provider outage.
    pub fn failing() -> Self {
        Self {
            outcomes: Mutex::new(VecDeque::new()),
            requests: Mutex::new(Vec::new()),
            fail: true,
        }
    }

    /// Queue one more outcome.
    pub fn push(&self, outcome: CompletionOutcome) {
        self.outcomes.lock().unwrap().push_back(outcome);
    }

    /// Number of completion calls observed.
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Snapshot of every recorded request.
    pub fn requests(&self) -> Vec<CompletionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionProvider for MockProvider {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionOutcome, ShowroomError> {
        self.requests.lock().unwrap().push(request);
        if self.fail {
            return Err(ShowroomError::Provider {
                message: "mock provider outage".into(),
                source: None,
            });
        }
        let outcome = self
            .outcomes
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| CompletionOutcome::text("mock reply"));
        Ok(outcome)
    }
}
