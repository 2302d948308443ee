//! Retry policy layered around any `LanguageModel`.
//!
//! Retries only transient failures (see `LlmError::is_transient`) with
//! exponential backoff: 1s, 2s, 4s, ...

use std::time::Duration;

use async_trait::async_trait;
use tracing::warn;

use super::{LanguageModel, LlmError};

const BASE_DELAY_MS: u64 = 1000;

pub struct RetryingModel<M> {
    inner: M,
    max_retries: u32,
}

impl<M: LanguageModel> RetryingModel<M> {
    /// `max_retries` counts extra attempts; 0 means the inner model is called exactly once.
    pub fn new(inner: M, max_retries: u32) -> Self {
        Self { inner, max_retries }
    }
}

fn backoff(attempt: u32) -> Duration {
    Duration::from_millis(BASE_DELAY_MS.saturating_mul(1u64 << (attempt - 1).min(16)))
}

#[async_trait]
impl<M: LanguageModel> LanguageModel for RetryingModel<M> {
    async fn generate(&self, prompt: &str, system: &str) -> Result<String, LlmError> {
        let mut attempt = 0;
        loop {
            match self.inner.generate(prompt, system).await {
                Ok(text) => return Ok(text),
                Err(e) if e.is_transient() && attempt < self.max_retries => {
                    attempt += 1;
                    let delay = backoff(attempt);
                    warn!(
                        "LLM call attempt {} failed ({}), retrying after {}ms...",
                        attempt,
                        e,
                        delay.as_millis()
                    );
                    tokio::time::sleep(delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}
