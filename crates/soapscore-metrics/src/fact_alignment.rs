use async_trait::async_trait;
use soapscore_core::judge::Judge;
use soapscore_core::metrics_api::{Metric, Reference};
use soapscore_core::model::{Category, SoapNote};
use soapscore_core::scoring::{JudgedItem, ReportBuilder, ScoreReport};

/// Completeness: share of reference key facts the oracle finds in the matching section.
pub struct FactAlignmentMetric;

#[async_trait]
impl Metric for FactAlignmentMetric {
    fn name(&self) -> &'static str {
        "fact_alignment"
    }

    async fn evaluate(
        &self,
        judge: &Judge,
        note: &SoapNote,
        reference: &Reference<'_>,
    ) -> ScoreReport {
        let mut report = ReportBuilder::new(self.name());

        for category in Category::ALL {
            let facts = reference.key_facts.get(category);
            if facts.is_empty() {
                report.not_applicable(category);
                continue;
            }

            let section = note.get(category);
            let mut breakdown = Vec::with_capacity(facts.len());
            for fact in facts {
                let verdict = judge.fact_present(section, fact).await;
                breakdown.push(JudgedItem::new(fact.as_str(), verdict));
            }
            tracing::debug!(category = %category, facts = facts.len(), "facts judged");
            report.record(category, breakdown);
        }

        report.finish()
    }
}
