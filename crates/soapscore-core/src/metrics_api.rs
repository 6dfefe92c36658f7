use crate::judge::Judge;
use crate::model::{KeyFacts, SoapNote};
use crate::scoring::ScoreReport;
use async_trait::async_trait;

/// Reference material a note is scored against.
#[derive(Debug, Clone, Copy)]
pub struct Reference<'a> {
    pub key_facts: &'a KeyFacts,
    pub transcript: &'a str,
}

impl<'a> Reference<'a> {
    pub fn new(key_facts: &'a KeyFacts, transcript: &'a str) -> Self {
        Self {
            key_facts,
            transcript,
        }
    }
}

/// A scoring procedure. Evaluation cannot fail: oracle problems are already folded into
/// negative verdicts by the [`Judge`].
#[async_trait]
pub trait Metric: Send + Sync {
    fn name(&self) -> &'static str;
    async fn evaluate(
        &self,
        judge: &Judge,
        note: &SoapNote,
        reference: &Reference<'_>,
    ) -> ScoreReport;
}
