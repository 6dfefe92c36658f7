use crate::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const SUPPORTED_CONFIG_VERSION: u32 = 1;

pub const DEFAULT_JUDGE_MODEL: &str = "deepseek-ai/DeepSeek-V3.2";
pub const DEEPINFRA_BASE_URL: &str = "https://api.deepinfra.com/v1/openai";
pub const DEEPSEEK_BASE_URL: &str = "https://api.deepseek.com";

/// Credential sources in lookup order, with the endpoint each one implies.
pub const CREDENTIAL_ENV: [(&str, &str); 2] = [
    ("DEEPINFRA_API_KEY", DEEPINFRA_BASE_URL),
    ("DEEPSEEK_API_KEY", DEEPSEEK_BASE_URL),
];

/// Batch evaluation settings (`eval.yaml`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EvalConfig {
    #[serde(default = "default_version")]
    pub version: u32,
    pub data_dir: PathBuf,
    pub generated_dir: PathBuf,
    pub output_dir: PathBuf,
    #[serde(default = "default_languages")]
    pub languages: Vec<String>,
    #[serde(default = "default_strategies")]
    pub strategies: Vec<String>,
    #[serde(default = "default_metrics")]
    pub metrics: Vec<String>,
    #[serde(default = "default_workers")]
    pub workers: usize,
    #[serde(default)]
    pub judge: JudgeSettings,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JudgeSettings {
    #[serde(default = "default_judge_model")]
    pub model: String,
    #[serde(default)]
    pub base_url: Option<String>,
}

impl Default for JudgeSettings {
    fn default() -> Self {
        Self {
            model: default_judge_model(),
            base_url: None,
        }
    }
}

fn default_version() -> u32 {
    SUPPORTED_CONFIG_VERSION
}
fn default_languages() -> Vec<String> {
    vec!["EN".into(), "NL".into()]
}
fn default_strategies() -> Vec<String> {
    vec!["few_shot".into()]
}
fn default_metrics() -> Vec<String> {
    vec!["fact_checking".into(), "fact_alignment".into()]
}
fn default_workers() -> usize {
    20
}
fn default_judge_model() -> String {
    DEFAULT_JUDGE_MODEL.to_string()
}

impl EvalConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version != SUPPORTED_CONFIG_VERSION {
            return Err(ConfigError::Invalid(format!(
                "unsupported config version {} (supported: {})",
                self.version, SUPPORTED_CONFIG_VERSION
            )));
        }
        if self.workers == 0 {
            return Err(ConfigError::Invalid("workers must be at least 1".into()));
        }
        if self.languages.is_empty() {
            return Err(ConfigError::Invalid("no languages configured".into()));
        }
        if self.strategies.is_empty() {
            return Err(ConfigError::Invalid("no strategies configured".into()));
        }
        if self.metrics.is_empty() {
            return Err(ConfigError::Invalid("no metrics configured".into()));
        }
        Ok(())
    }
}

pub fn load_config(path: &Path) -> Result<EvalConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::Invalid(format!("failed to read config {}: {}", path.display(), e))
    })?;
    let cfg: EvalConfig = serde_yaml::from_str(&raw)
        .map_err(|e| ConfigError::Invalid(format!("failed to parse YAML: {}", e)))?;
    cfg.validate()?;
    Ok(cfg)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub api_key: String,
    pub base_url: String,
}

/// Resolve judge credentials. An explicit key wins, then the `CREDENTIAL_ENV` chain.
/// An explicit base URL overrides the endpoint implied by the key source.
pub fn resolve_credentials(
    explicit_key: Option<&str>,
    explicit_base_url: Option<&str>,
    lookup: impl Fn(&str) -> Option<String>,
) -> Result<Credentials, ConfigError> {
    let found = explicit_key
        .filter(|k| !k.trim().is_empty())
        .map(|k| (k.to_string(), DEEPINFRA_BASE_URL))
        .or_else(|| {
            CREDENTIAL_ENV.iter().find_map(|(var, url)| {
                lookup(var)
                    .filter(|k| !k.trim().is_empty())
                    .map(|k| (k, *url))
            })
        });

    let (api_key, implied_url) = found.ok_or_else(|| ConfigError::MissingCredentials {
        checked: CREDENTIAL_ENV
            .iter()
            .map(|(var, _)| *var)
            .collect::<Vec<_>>()
            .join(" and "),
    })?;

    Ok(Credentials {
        api_key,
        base_url: explicit_base_url.unwrap_or(implied_url).to_string(),
    })
}

pub fn resolve_credentials_from_env(
    explicit_key: Option<&str>,
    explicit_base_url: Option<&str>,
) -> Result<Credentials, ConfigError> {
    resolve_credentials(explicit_key, explicit_base_url, |var| std::env::var(var).ok())
}

/// Provider and model catalogue (`models.json`) used by the smoke test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelsConfig {
    pub providers: BTreeMap<String, ProviderConfig>,
    pub models: Vec<ModelEntry>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderKind {
    OpenaiCompatible,
    GeminiNative,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProviderConfig {
    #[serde(rename = "type")]
    pub kind: ProviderKind,
    pub env_key: String,
    #[serde(default)]
    pub base_url: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelEntry {
    pub name: String,
    pub model_id: String,
    pub provider: String,
    #[serde(default)]
    pub family: Option<String>,
}

pub fn load_models(path: &Path) -> Result<ModelsConfig, ConfigError> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        ConfigError::Invalid(format!("failed to read models {}: {}", path.display(), e))
    })?;
    serde_json::from_str(&raw)
        .map_err(|e| ConfigError::Invalid(format!("failed to parse models JSON: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn deepinfra_preferred_over_deepseek() {
        let creds = resolve_credentials(
            None,
            None,
            env(&[("DEEPINFRA_API_KEY", "di"), ("DEEPSEEK_API_KEY", "ds")]),
        )
        .unwrap();
        assert_eq!(creds.api_key, "di");
        assert_eq!(creds.base_url, DEEPINFRA_BASE_URL);
    }

    #[test]
    fn deepseek_fallback_uses_its_endpoint() {
        let creds = resolve_credentials(None, None, env(&[("DEEPSEEK_API_KEY", "ds")])).unwrap();
        assert_eq!(creds.api_key, "ds");
        assert_eq!(creds.base_url, DEEPSEEK_BASE_URL);
    }

    #[test]
    fn explicit_key_and_url_win() {
        let creds = resolve_credentials(
            Some("mine"),
            Some("http://localhost:8000/v1"),
            env(&[("DEEPINFRA_API_KEY", "di")]),
        )
        .unwrap();
        assert_eq!(creds.api_key, "mine");
        assert_eq!(creds.base_url, "http://localhost:8000/v1");
    }

    #[test]
    fn missing_credentials_is_fatal() {
        let err = resolve_credentials(None, None, env(&[("DEEPSEEK_API_KEY", "  ")])).unwrap_err();
        assert!(matches!(err, ConfigError::MissingCredentials { .. }));
        assert!(err.to_string().contains("DEEPINFRA_API_KEY and DEEPSEEK_API_KEY"));
    }

    #[test]
    fn eval_config_defaults_and_validation() {
        let cfg: EvalConfig = serde_yaml::from_str(
            "data_dir: data\ngenerated_dir: out\noutput_dir: results\n",
        )
        .unwrap();
        assert_eq!(cfg.languages, ["EN", "NL"]);
        assert_eq!(cfg.workers, 20);
        assert_eq!(cfg.judge.model, DEFAULT_JUDGE_MODEL);
        assert!(cfg.validate().is_ok());

        let mut bad = cfg.clone();
        bad.workers = 0;
        assert!(bad.validate().is_err());
    }

    #[test]
    fn models_config_parses_provider_types() {
        let cfg: ModelsConfig = serde_json::from_str(
            r#"{
                "providers": {
                    "deepinfra": {"type": "openai_compatible", "env_key": "DEEPINFRA_API_KEY", "base_url": "https://api.deepinfra.com/v1/openai"},
                    "google": {"type": "gemini_native", "env_key": "GEMINI_API_KEY"}
                },
                "models": [{"name": "Llama", "model_id": "meta-llama/Llama-3.3-70B-Instruct", "provider": "deepinfra", "family": "llama"}]
            }"#,
        )
        .unwrap();
        assert_eq!(cfg.providers["google"].kind, ProviderKind::GeminiNative);
        assert_eq!(cfg.models[0].family.as_deref(), Some("llama"));
    }
}
