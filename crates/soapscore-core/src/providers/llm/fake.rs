use super::LlmClient;
use crate::model::LlmResponse;
use async_trait::async_trait;

/// Offline client returning a fixed answer. Useful for dry runs of the batch pipeline.
#[derive(Debug)]
pub struct FakeClient {
    model: String,
    fixed_response: Option<String>,
}

impl FakeClient {
    pub fn new(model: String) -> Self {
        Self {
            model,
            fixed_response: None,
        }
    }

    pub fn with_response(mut self, response: String) -> Self {
        self.fixed_response = Some(response);
        self
    }
}

#[async_trait]
impl LlmClient for FakeClient {
    async fn complete(&self, _system: &str, _prompt: &str) -> anyhow::Result<LlmResponse> {
        // Default answers every presence question positively
        let text = self
            .fixed_response
            .clone()
            .unwrap_or_else(|| "PRESENT".to_string());

        Ok(LlmResponse {
            text,
            provider: "fake".to_string(),
            model: self.model.clone(),
            meta: serde_json::json!({}),
        })
    }

    fn provider_name(&self) -> &'static str {
        "fake"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
