use async_trait::async_trait;
use soapscore_core::judge::{Judge, Verdict};
use soapscore_core::metrics_api::{Metric, Reference};
use soapscore_core::model::{Category, KeyFacts, LlmResponse, SoapNote};
use soapscore_core::providers::llm::LlmClient;
use soapscore_core::scoring::CategoryScore;
use soapscore_core::ConfigError;
use soapscore_metrics::{
    default_metrics, metric_by_name, metrics_by_names, ConcisenessMetric, FactAlignmentMetric,
    FactCheckingMetric,
};
use std::sync::{Arc, Mutex};

/// Deterministic stand-in for the judge model.
///
/// * fact presence: PRESENT when the first word of the fact occurs in the section
/// * extraction: a fixed claim list
/// * claim support: SUPPORTED when the last word of the claim occurs in the transcript
/// * claim presence: a fixed answer
struct KeywordOracle {
    claims: Vec<&'static str>,
    presence_answer: &'static str,
    prompts: Mutex<Vec<String>>,
}

impl KeywordOracle {
    fn new() -> Self {
        Self {
            claims: vec!["has cough", "has rash"],
            presence_answer: "SUPPORTED",
            prompts: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

/// Text between the first `"` after `label` and the closing `"` that ends that block.
fn quoted_after<'a>(prompt: &'a str, label: &str) -> &'a str {
    let start = prompt.find(label).expect("label in prompt") + label.len();
    let rest = &prompt[start..];
    let open = rest.find('"').expect("opening quote") + 1;
    let rest = &rest[open..];
    let close = rest.find("\"\n").unwrap_or_else(|| rest.rfind('"').expect("closing quote"));
    &rest[..close]
}

#[async_trait]
impl LlmClient for KeywordOracle {
    async fn complete(&self, system: &str, prompt: &str) -> anyhow::Result<LlmResponse> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        let text = if system.contains("extraction") {
            let items: Vec<_> = self
                .claims
                .iter()
                .enumerate()
                .map(|(i, c)| serde_json::json!({"id": i + 1, "text": c}))
                .collect();
            format!("```json\n{}\n```", serde_json::json!({ "claims": items }))
        } else if prompt.starts_with("Input Text") {
            let section = quoted_after(prompt, "Input Text (SOAP Section):").to_lowercase();
            let fact = quoted_after(prompt, "Key Fact to Verify (Dutch):");
            let keyword = fact.split_whitespace().next().unwrap_or_default().to_lowercase();
            let answer = if section.contains(&keyword) { "PRESENT" } else { "ABSENT" };
            answer.to_string()
        } else if prompt.starts_with("Source transcript") {
            let transcript = quoted_after(prompt, "Source transcript:").to_lowercase();
            let claim = quoted_after(prompt, "Generated claim:");
            let keyword = claim.split_whitespace().last().unwrap_or_default().to_lowercase();
            let answer = if transcript.contains(&keyword) { "SUPPORTED" } else { "NOT-FOUND" };
            answer.to_string()
        } else {
            self.presence_answer.to_string()
        };

        Ok(LlmResponse {
            text,
            provider: "keyword".into(),
            model: "keyword".into(),
            meta: serde_json::Value::Null,
        })
    }

    fn provider_name(&self) -> &'static str {
        "keyword"
    }
}

struct FailingOracle;

#[async_trait]
impl LlmClient for FailingOracle {
    async fn complete(&self, _system: &str, _prompt: &str) -> anyhow::Result<LlmResponse> {
        anyhow::bail!("503 Service Unavailable")
    }

    fn provider_name(&self) -> &'static str {
        "failing"
    }
}

fn scenario() -> (KeyFacts, SoapNote) {
    let facts = KeyFacts {
        subjective: vec!["fever".into()],
        objective: vec![],
        assessment: vec!["viral infection".into()],
        plan: vec![],
    };
    let note = SoapNote {
        subjective: "patient reports fever and cough".into(),
        assessment: "likely viral".into(),
        ..Default::default()
    };
    (facts, note)
}

#[tokio::test]
async fn contract_fact_alignment_scenario() {
    let (facts, note) = scenario();
    let oracle = Arc::new(KeywordOracle::new());
    let judge = Judge::new(oracle.clone());

    let report = FactAlignmentMetric
        .evaluate(&judge, &note, &Reference::new(&facts, ""))
        .await;

    assert_eq!(report.metric, "fact_alignment");
    assert_eq!(report.score(Category::Subjective), CategoryScore::Scored(100.0));
    assert_eq!(report.score(Category::Objective), CategoryScore::NotApplicable);
    assert_eq!(report.score(Category::Assessment), CategoryScore::Scored(100.0));
    assert_eq!(report.score(Category::Plan), CategoryScore::NotApplicable);
    assert_eq!(report.overall_score, 100.0);
    // One oracle call per fact, none for not-applicable categories.
    assert_eq!(oracle.calls(), 2);

    let json = serde_json::to_value(&report).unwrap();
    assert_eq!(json["categories"][1]["score"], "N/A");
    assert_eq!(json["categories"][0]["breakdown"][0]["item"], "fever");
}

#[tokio::test]
async fn contract_fact_alignment_is_idempotent() {
    let (facts, note) = scenario();
    let judge = Judge::new(Arc::new(KeywordOracle::new()));
    let reference = Reference::new(&facts, "");

    let first = FactAlignmentMetric.evaluate(&judge, &note, &reference).await;
    let second = FactAlignmentMetric.evaluate(&judge, &note, &reference).await;
    assert_eq!(first, second);
}

#[tokio::test]
async fn contract_overall_pools_applicable_categories_only() {
    let facts = KeyFacts {
        subjective: vec!["fever".into(), "rash".into(), "nausea".into()],
        objective: vec![],
        assessment: vec!["viral".into()],
        plan: vec![],
    };
    let note = SoapNote {
        subjective: "fever".into(),
        assessment: "viral".into(),
        ..Default::default()
    };
    let judge = Judge::new(Arc::new(KeywordOracle::new()));

    let report = FactAlignmentMetric
        .evaluate(&judge, &note, &Reference::new(&facts, ""))
        .await;

    assert_eq!(report.score(Category::Subjective), CategoryScore::Scored(33.33));
    assert_eq!(report.score(Category::Assessment), CategoryScore::Scored(100.0));
    // 2 of 4 facts; the N/A categories are not counted as zeros.
    assert_eq!(report.overall_score, 50.0);
}

#[tokio::test]
async fn contract_blank_section_with_facts_scores_zero_without_calls() {
    let facts = KeyFacts {
        plan: vec!["rust".into(), "paracetamol".into()],
        ..Default::default()
    };
    let oracle = Arc::new(KeywordOracle::new());
    let judge = Judge::new(oracle.clone());

    let report = FactAlignmentMetric
        .evaluate(&judge, &SoapNote::default(), &Reference::new(&facts, ""))
        .await;

    assert_eq!(report.score(Category::Plan), CategoryScore::Scored(0.0));
    let plan = report.category(Category::Plan).unwrap();
    assert!(plan.breakdown.iter().all(|j| j.verdict == Verdict::Skipped));
    assert_eq!(oracle.calls(), 0);
}

#[tokio::test]
async fn contract_fact_checking_against_transcript() {
    let note = SoapNote {
        subjective: "Cough, no rash.".into(),
        ..Default::default()
    };
    let facts = KeyFacts::default();
    let oracle = Arc::new(KeywordOracle::new());
    let judge = Judge::new(oracle.clone());

    let report = FactCheckingMetric
        .evaluate(
            &judge,
            &note,
            &Reference::new(&facts, "D: What brings you in? P: A bad cough since Monday."),
        )
        .await;

    let subjective = report.category(Category::Subjective).unwrap();
    assert_eq!(subjective.breakdown.len(), 2);
    assert_eq!(subjective.breakdown[0].verdict, Verdict::Supported);
    assert_eq!(subjective.breakdown[1].verdict, Verdict::NotFound);
    assert_eq!(subjective.score, CategoryScore::Scored(50.0));
    // Blank sections are never sent for extraction.
    assert_eq!(report.score(Category::Objective), CategoryScore::NotApplicable);
    assert_eq!(report.overall_score, 50.0);
    // One extraction plus one verdict per claim.
    assert_eq!(oracle.calls(), 3);
}

#[tokio::test]
async fn contract_conciseness_reports_contradictions() {
    let note = SoapNote {
        plan: "Antibiotics for a week.".into(),
        ..Default::default()
    };
    let facts = KeyFacts {
        plan: vec!["geen antibiotica".into()],
        ..Default::default()
    };
    let oracle = KeywordOracle {
        presence_answer: "Contradicted.",
        ..KeywordOracle::new()
    };
    let judge = Judge::new(Arc::new(oracle));

    let report = ConcisenessMetric
        .evaluate(&judge, &note, &Reference::new(&facts, ""))
        .await;

    let plan = report.category(Category::Plan).unwrap();
    assert_eq!(plan.contradicted, 2);
    assert_eq!(plan.score, CategoryScore::Scored(0.0));
    assert_eq!(plan.breakdown[0].verdict, Verdict::Contradicted);
    assert!(!plan.breakdown[0].positive);
}

#[tokio::test]
async fn contract_oracle_outage_never_aborts() {
    let (facts, note) = scenario();
    let judge = Judge::new(Arc::new(FailingOracle));
    let reference = Reference::new(&facts, "transcript");

    for metric in default_metrics() {
        let report = metric.evaluate(&judge, &note, &reference).await;
        assert_eq!(report.categories.len(), 4, "{} must keep all categories", metric.name());
    }

    let report = FactAlignmentMetric.evaluate(&judge, &note, &reference).await;
    assert_eq!(report.score(Category::Subjective), CategoryScore::Scored(0.0));
    assert_eq!(
        report.category(Category::Subjective).unwrap().breakdown[0].verdict,
        Verdict::OracleError
    );

    // Failed extraction leaves the claim metrics with nothing to score.
    let report = FactCheckingMetric.evaluate(&judge, &note, &reference).await;
    assert!(report.categories.iter().all(|c| !c.score.is_applicable()));
    assert_eq!(report.overall_score, 0.0);
}

#[test]
fn metric_lookup_by_name() {
    assert_eq!(metric_by_name("conciseness").unwrap().name(), "conciseness");
    assert!(matches!(
        metric_by_name("bleu"),
        Err(ConfigError::UnknownMetric(name)) if name == "bleu"
    ));

    let names: Vec<_> = metrics_by_names(&["fact_checking", "fact_alignment"])
        .unwrap()
        .iter()
        .map(|m| m.name())
        .collect();
    assert_eq!(names, ["fact_checking", "fact_alignment"]);
}
