use super::super::args::{OutputFormat, ScoreArgs};
use super::judge_builder::build_judge;
use crate::exit_codes::SUCCESS;
use anyhow::Context;
use soapscore_core::metrics_api::Reference;
use soapscore_core::model::{Category, KeyFacts};
use soapscore_core::scoring::ScoreReport;
use soapscore_core::soap;
use soapscore_metrics::metrics_by_names;

pub(crate) async fn run(args: ScoreArgs) -> anyhow::Result<i32> {
    let metrics = metrics_by_names(&args.metrics)?;

    let raw_note = std::fs::read_to_string(&args.note)
        .with_context(|| format!("failed to read note {}", args.note.display()))?;
    let key_facts = match &args.key_facts {
        Some(path) => {
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read key facts {}", path.display()))?;
            serde_json::from_str::<KeyFacts>(&raw)
                .with_context(|| format!("malformed key facts {}", path.display()))?
        }
        None => KeyFacts::default(),
    };
    let transcript = match &args.transcript {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read transcript {}", path.display()))?,
        None => String::new(),
    };

    let judge = build_judge(&args.judge, None, None)?;
    let note = soap::parse_text(&raw_note);
    let reference = Reference::new(&key_facts, &transcript);

    let mut reports = Vec::with_capacity(metrics.len());
    for metric in &metrics {
        reports.push(metric.evaluate(&judge, &note, &reference).await);
    }

    match args.format {
        OutputFormat::Json => {
            let out = serde_json::json!({
                "note": args.note.display().to_string(),
                "scored_at": chrono::Utc::now().to_rfc3339(),
                "sections": note,
                "reports": reports,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        OutputFormat::Table => print_reports(&reports),
    }
    Ok(SUCCESS)
}

fn print_reports(reports: &[ScoreReport]) {
    for report in reports {
        println!("{}: overall {:.2}", report.metric, report.overall_score);
        for category in Category::ALL {
            let Some(c) = report.category(category) else {
                continue;
            };
            println!("  {:<11} {:>7}", category.as_str(), c.score.to_string());
            for item in &c.breakdown {
                println!("    [{}] {}", item.verdict.label(), item.item);
            }
        }
    }
}
