use async_trait::async_trait;
use soapscore_core::judge::Judge;
use soapscore_core::metrics_api::{Metric, Reference};
use soapscore_core::model::{Category, SoapNote};
use soapscore_core::scoring::{JudgedItem, ReportBuilder, ScoreReport};

/// Hallucination check: share of claims in each section that the transcript supports.
pub struct FactCheckingMetric;

#[async_trait]
impl Metric for FactCheckingMetric {
    fn name(&self) -> &'static str {
        "fact_checking"
    }

    async fn evaluate(
        &self,
        judge: &Judge,
        note: &SoapNote,
        reference: &Reference<'_>,
    ) -> ScoreReport {
        let mut report = ReportBuilder::new(self.name());

        for category in Category::ALL {
            let Some(claims) = judge.extract_claims(note.get(category)).await.into_claims()
            else {
                report.not_applicable(category);
                continue;
            };

            let mut breakdown = Vec::with_capacity(claims.len());
            for claim in claims {
                let verdict = judge.claim_supported(&claim, reference.transcript).await;
                breakdown.push(JudgedItem::new(claim, verdict));
            }
            report.record(category, breakdown);
        }

        report.finish()
    }
}
