use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "soapscore",
    version,
    about = "LLM-judged scoring of clinical SOAP notes: fact alignment, fact checking, conciseness"
)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Score every generated note of a dataset and write CSV tables
    Run(RunArgs),
    /// Score a single note file
    Score(ScoreArgs),
    /// Score the reference notes of a dataset
    Sanity(SanityArgs),
    /// Send a one-line prompt to every model in models.json
    Ping(PingArgs),
    Version,
}

#[derive(clap::Args, Clone, Debug)]
pub struct JudgeArgs {
    /// Judge provider
    /// - openai: OpenAI-compatible chat API (DeepInfra, DeepSeek, ...)
    /// - fake: fixed PRESENT answers, no network (dry runs)
    #[arg(long, default_value = "openai", env = "SOAPSCORE_JUDGE")]
    pub judge: String,

    /// Judge model identifier (provider-specific)
    #[arg(long, env = "SOAPSCORE_JUDGE_MODEL")]
    pub judge_model: Option<String>,

    /// Override the endpoint implied by the credential source
    #[arg(long)]
    pub judge_base_url: Option<String>,

    /// Takes precedence over DEEPINFRA_API_KEY and DEEPSEEK_API_KEY
    #[arg(long, env = "SOAPSCORE_JUDGE_API_KEY", hide_env_values = true)]
    pub judge_api_key: Option<String>,
}

#[derive(clap::Args, Clone, Debug)]
pub struct RunArgs {
    #[arg(long, default_value = "eval.yaml")]
    pub config: PathBuf,

    /// Overrides `workers` from the config
    #[arg(long)]
    pub workers: Option<usize>,

    #[arg(long, value_delimiter = ',')]
    pub languages: Vec<String>,

    #[arg(long, value_delimiter = ',')]
    pub strategies: Vec<String>,

    #[arg(long, value_delimiter = ',')]
    pub metrics: Vec<String>,

    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    #[command(flatten)]
    pub judge: JudgeArgs,
}

#[derive(ValueEnum, Clone, Debug, Default, PartialEq)]
pub enum OutputFormat {
    #[default]
    Json,
    Table,
}

#[derive(clap::Args, Clone, Debug)]
pub struct ScoreArgs {
    /// Note file: free text or JSON
    pub note: PathBuf,

    /// Key facts JSON ({"Subjective": [...], ...})
    #[arg(long)]
    pub key_facts: Option<PathBuf>,

    #[arg(long)]
    pub transcript: Option<PathBuf>,

    #[arg(
        long,
        value_delimiter = ',',
        default_value = "fact_alignment,fact_checking,conciseness"
    )]
    pub metrics: Vec<String>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    #[command(flatten)]
    pub judge: JudgeArgs,
}

#[derive(clap::Args, Clone, Debug)]
pub struct SanityArgs {
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    #[arg(long, default_value = "sanity_results")]
    pub output_dir: PathBuf,

    #[arg(long, value_delimiter = ',', default_value = "EN,NL")]
    pub languages: Vec<String>,

    #[arg(long, default_value_t = 20)]
    pub workers: usize,

    #[command(flatten)]
    pub judge: JudgeArgs,
}

#[derive(clap::Args, Clone, Debug)]
pub struct PingArgs {
    #[arg(long, default_value = "models.json")]
    pub models: PathBuf,

    /// Only ping models whose name contains this text
    #[arg(long)]
    pub only: Option<String>,
}
