pub mod runner;
pub mod sanity;

pub use runner::{BatchRunner, BatchSummary, CaseJob, CaseOutcome};
pub use sanity::{SanityReport, SanityRun};
