use async_trait::async_trait;
use soapscore_core::judge::{Judge, Verdict};
use soapscore_core::metrics_api::{Metric, Reference};
use soapscore_core::model::{Category, SoapNote};
use soapscore_core::scoring::{JudgedItem, ReportBuilder, ScoreReport};

/// Share of claims in each section grounded in that section's key facts. Claims the
/// oracle marks CONTRADICTED score like NOT-FOUND but stay visible in the breakdown.
pub struct ConcisenessMetric;

#[async_trait]
impl Metric for ConcisenessMetric {
    fn name(&self) -> &'static str {
        "conciseness"
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

            let facts = reference.key_facts.get(category);
            let mut breakdown = Vec::with_capacity(claims.len());
            for claim in claims {
                let verdict = judge.claim_grounded(&claim, facts).await;
                if verdict == Verdict::Contradicted {
                    tracing::info!(category = %category, claim = %claim, "claim contradicts key facts");
                }
                breakdown.push(JudgedItem::new(claim, verdict));
            }
            report.record(category, breakdown);
        }

        report.finish()
    }
}
