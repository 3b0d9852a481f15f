use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use crate::application::CompletionService;
use crate::domain::DomainError;

/// Deterministic [`CompletionService`] for tests and offline runs.
///
/// Answers every prompt with a canned response (or a canned failure), counts
/// calls and remembers the last prompt it saw.
pub struct MockCompletion {
    response: Result<String, String>,
    configured: bool,
    calls: AtomicUsize,
    last_prompt: Mutex<Option<String>>,
}

impl MockCompletion {
    /// Echoes a short acknowledgement; handy for `--mock-completion` runs.
    pub fn new() -> Self {
        Self::with_response("I recommend browsing our trending products.")
    }

    pub fn with_response(response: impl Into<String>) -> Self {
        Self {
            response: Ok(response.into()),
            configured: true,
            calls: AtomicUsize::new(0),
            last_prompt: Mutex::new(None),
        }
    }

    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            response: Err(reason.into()),
            ..Self::new()
        }
    }

    /// Behaves like a client whose API key is missing.
    pub fn unconfigured() -> Self {
        Self {
            configured: false,
            ..Self::new()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn last_prompt(&self) -> Option<String> {
        self.last_prompt.lock().ok().and_then(|p| p.clone())
    }
}

impl Default for MockCompletion {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CompletionService for MockCompletion {
    async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_prompt.lock() {
            *last = Some(prompt.to_string());
        }

        self.response.clone().map_err(DomainError::upstream)
    }

    fn is_configured(&self) -> bool {
        self.configured
    }

    fn model_name(&self) -> &str {
        "mock-completion"
    }
}
