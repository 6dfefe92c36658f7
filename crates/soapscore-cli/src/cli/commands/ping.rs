use super::super::args::PingArgs;
use crate::exit_codes::{FAILURES, SUCCESS};
use soapscore_core::config::{load_models, ModelEntry, ModelsConfig, ProviderKind};
use soapscore_core::providers::llm::openai::OpenAIClient;
use soapscore_core::providers::llm::LlmClient;
use std::time::Instant;

const PING_SYSTEM: &str = "You are a helpful assistant.";
const PING_PROMPT: &str = "Say hi in one word.";
const PING_MAX_TOKENS: u32 = 5;

pub(crate) async fn run(args: PingArgs) -> anyhow::Result<i32> {
    let cfg = load_models(&args.models)?;
    let models: Vec<&ModelEntry> = cfg
        .models
        .iter()
        .filter(|m| args.only.as_deref().map_or(true, |f| m.name.contains(f)))
        .collect();

    let mut failures = 0;
    for model in &models {
        let status = match ping_model(&cfg, model, |var| std::env::var(var).ok()).await {
            Ok(status) => status,
            Err(reason) => {
                failures += 1;
                format!("FAIL: {}", reason)
            }
        };
        println!("{:<32} {}", model.name, status);
    }

    eprintln!("Results: models={} failed={}", models.len(), failures);
    Ok(if failures > 0 { FAILURES } else { SUCCESS })
}

/// `Ok` carries the status line, `Err` the failure reason.
async fn ping_model(
    cfg: &ModelsConfig,
    model: &ModelEntry,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<String, String> {
    let provider = cfg
        .providers
        .get(&model.provider)
        .ok_or_else(|| format!("unknown provider '{}'", model.provider))?;

    if provider.kind == ProviderKind::GeminiNative {
        return Err("gemini_native transport is unsupported".to_string());
    }

    let key = lookup(&provider.env_key)
        .filter(|k| !k.trim().is_empty())
        .ok_or_else(|| format!("{} is not set", provider.env_key))?;

    let mut client = OpenAIClient::new(model.model_id.clone(), key, 0.0)
        .with_max_tokens(PING_MAX_TOKENS);
    if let Some(url) = &provider.base_url {
        client = client.with_base_url(url.clone());
    }

    let start = Instant::now();
    match client.complete(PING_SYSTEM, PING_PROMPT).await {
        Ok(_) => Ok(format!("OK ({:.2}s)", start.elapsed().as_secs_f64())),
        Err(e) => {
            tracing::debug!(model = %model.model_id, error = %e, "ping failed");
            Err(e.to_string())
        }
    }
}
