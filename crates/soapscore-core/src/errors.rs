use thiserror::Error;

/// Failures that stop an evaluation before any scoring happens.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("no judge API key found (checked {checked})")]
    MissingCredentials { checked: String },

    #[error("unknown judge provider '{0}' (expected openai|fake)")]
    UnknownProvider(String),

    #[error("unknown metric '{0}' (expected fact_alignment|fact_checking|conciseness)")]
    UnknownMetric(String),

    #[error("invalid config: {0}")]
    Invalid(String),
}
