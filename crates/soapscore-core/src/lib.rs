pub mod claims;
pub mod config;
pub mod dataset;
pub mod engine;
pub mod errors;
pub mod judge;
pub mod metrics_api;
pub mod model;
pub mod providers;
pub mod report;
pub mod scoring;
pub mod soap;

pub use errors::ConfigError;
pub use judge::{Judge, Verdict, VerdictKind};
pub use model::{Category, KeyFacts, NoteInput, SoapNote};
pub use scoring::{CategoryScore, ScoreReport};
