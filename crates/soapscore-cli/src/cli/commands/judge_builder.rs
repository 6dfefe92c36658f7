use super::super::args::JudgeArgs;
use soapscore_core::config::{resolve_credentials_from_env, DEFAULT_JUDGE_MODEL};
use soapscore_core::errors::ConfigError;
use soapscore_core::judge::Judge;
use soapscore_core::providers::llm::fake::FakeClient;
use soapscore_core::providers::llm::openai::OpenAIClient;
use soapscore_core::providers::llm::tracing::TracingLlmClient;
use soapscore_core::providers::llm::LlmClient;
use std::sync::Arc;

/// Judge decoding is always deterministic.
const JUDGE_TEMPERATURE: f32 = 0.0;

/// Build the judge. Flags win over `config_model` / `config_base_url` from eval.yaml.
pub(crate) fn build_judge(
    args: &JudgeArgs,
    config_model: Option<&str>,
    config_base_url: Option<&str>,
) -> Result<Judge, ConfigError> {
    let model = args
        .judge_model
        .as_deref()
        .or(config_model)
        .unwrap_or(DEFAULT_JUDGE_MODEL)
        .to_string();

    let client: Arc<dyn LlmClient> = match args.judge.as_str() {
        "fake" => Arc::new(FakeClient::new(model)),
        "openai" => {
            let creds = resolve_credentials_from_env(
                args.judge_api_key.as_deref(),
                args.judge_base_url.as_deref().or(config_base_url),
            )?;
            tracing::info!(model = %model, base_url = %creds.base_url, "judge configured");
            Arc::new(
                OpenAIClient::new(model, creds.api_key, JUDGE_TEMPERATURE)
                    .with_base_url(creds.base_url),
            )
        }
        other => return Err(ConfigError::UnknownProvider(other.to_string())),
    };

    Ok(Judge::new(Arc::new(TracingLlmClient::new(client))))
}
