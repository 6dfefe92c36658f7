use crate::model::LlmResponse;
use crate::providers::llm::LlmClient;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info_span, Instrument};

/// Wraps a client so every request runs inside an `llm.request` span.
pub struct TracingLlmClient {
    inner: Arc<dyn LlmClient>,
}

impl TracingLlmClient {
    pub fn new(inner: Arc<dyn LlmClient>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl LlmClient for TracingLlmClient {
    async fn complete(&self, system: &str, prompt: &str) -> anyhow::Result<LlmResponse> {
        let span = info_span!(
            "llm.request",
            provider = self.inner.provider_name(),
            model = self.inner.model_name(),
            prompt_chars = prompt.len(),
            latency_ms = tracing::field::Empty,
            input_tokens = tracing::field::Empty,
            output_tokens = tracing::field::Empty,
            error = tracing::field::Empty,
        );

        async move {
            let start = Instant::now();
            let result = self.inner.complete(system, prompt).await;
            let span = tracing::Span::current();
            span.record("latency_ms", start.elapsed().as_millis() as u64);

            match &result {
                Ok(resp) => {
                    if let Some(usage) = resp.meta.get("usage") {
                        if let Some(i) = usage.get("prompt_tokens").and_then(|v| v.as_u64()) {
                            span.record("input_tokens", i);
                        }
                        if let Some(o) = usage.get("completion_tokens").and_then(|v| v.as_u64()) {
                            span.record("output_tokens", o);
                        }
                    }
                }
                Err(e) => {
                    span.record("error", e.to_string().as_str());
                }
            }

            result
        }
        .instrument(span)
        .await
    }

    fn provider_name(&self) -> &'static str {
        self.inner.provider_name()
    }

    fn model_name(&self) -> &str {
        self.inner.model_name()
    }
}
