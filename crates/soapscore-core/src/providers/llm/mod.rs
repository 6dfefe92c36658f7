pub mod fake;
pub mod openai;
pub mod tracing;

use crate::model::LlmResponse;
use async_trait::async_trait;

/// One chat-completion round trip: system prompt plus user prompt in, text out.
///
/// Implementations hold no per-call state and are shared across concurrent callers.
#[async_trait]
pub trait LlmClient: Send + Sync {
    async fn complete(&self, system: &str, prompt: &str) -> anyhow::Result<LlmResponse>;

    fn provider_name(&self) -> &'static str;

    fn model_name(&self) -> &str {
        ""
    }
}
