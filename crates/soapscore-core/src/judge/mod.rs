pub(crate) mod client;
pub mod prompt;
pub mod verdict;

pub use verdict::{parse_verdict, Verdict, VerdictKind};

use crate::claims::{self, ClaimExtraction};
use crate::providers::llm::LlmClient;
use std::sync::Arc;

/// The judgment oracle: asks an LLM one categorical question at a time.
///
/// Every question resolves to a [`Verdict`]; transport failures and unexpected answers
/// are logged and become negative verdicts, never errors. The wrapped client is expected
/// to decode deterministically (temperature 0).
#[derive(Clone)]
pub struct Judge {
    client: Arc<dyn LlmClient>,
}

impl Judge {
    pub fn new(client: Arc<dyn LlmClient>) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Arc<dyn LlmClient> {
        &self.client
    }

    /// Ask one verdict question. See [`prompt::build_verdict_prompt`] for the roles of
    /// `subject` and `comparison`.
    pub async fn ask(&self, kind: VerdictKind, subject: &str, comparison: &str) -> Verdict {
        if is_vacuous(kind, subject, comparison) {
            tracing::debug!(kind = kind.as_str(), "vacuous judge input, skipping oracle call");
            return Verdict::Skipped;
        }

        let prompt = prompt::build_verdict_prompt(kind, subject, comparison);
        match client::call_oracle(self, &prompt).await {
            Ok(raw) => {
                let verdict = parse_verdict(kind, &raw);
                if verdict == Verdict::Unrecognized {
                    tracing::warn!(kind = kind.as_str(), response = %raw, "unrecognized judge answer, scoring as negative");
                }
                verdict
            }
            Err(e) => {
                tracing::warn!(kind = kind.as_str(), error = %e, "judge call failed, scoring as negative");
                Verdict::OracleError
            }
        }
    }

    /// Is `fact` present in the note `section`?
    pub async fn fact_present(&self, section: &str, fact: &str) -> Verdict {
        self.ask(VerdictKind::FactPresence, section, fact).await
    }

    /// Is `claim` supported by the consultation `transcript`?
    pub async fn claim_supported(&self, claim: &str, transcript: &str) -> Verdict {
        self.ask(VerdictKind::ClaimSupport, claim, transcript).await
    }

    /// Is `claim` grounded in the reference key `facts` of its section?
    pub async fn claim_grounded(&self, claim: &str, facts: &[String]) -> Verdict {
        self.ask(VerdictKind::ClaimPresence, claim, &format_facts(facts))
            .await
    }

    pub async fn extract_claims(&self, section: &str) -> ClaimExtraction {
        claims::extract(self, section).await
    }
}

fn is_vacuous(kind: VerdictKind, subject: &str, comparison: &str) -> bool {
    let subject_blank = subject.trim().is_empty();
    // An empty section never contains a fact, whatever the fact says.
    (subject_blank && comparison.trim().is_empty())
        || (kind == VerdictKind::FactPresence && subject_blank)
}

pub(crate) fn format_facts(facts: &[String]) -> String {
    facts
        .iter()
        .map(|f| format!("- {}", f))
        .collect::<Vec<_>>()
        .join("\n")
}
