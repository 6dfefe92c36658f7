use super::super::args::RunArgs;
use super::judge_builder::build_judge;
use crate::exit_codes::{FAILURES, SUCCESS};
use soapscore_core::config::load_config;
use soapscore_core::engine::BatchRunner;
use soapscore_metrics::metrics_by_names;

pub(crate) async fn run(args: RunArgs) -> anyhow::Result<i32> {
    let mut cfg = load_config(&args.config)?;
    if let Some(workers) = args.workers {
        cfg.workers = workers;
    }
    if !args.languages.is_empty() {
        cfg.languages = args.languages;
    }
    if !args.strategies.is_empty() {
        cfg.strategies = args.strategies;
    }
    if !args.metrics.is_empty() {
        cfg.metrics = args.metrics;
    }
    if let Some(dir) = args.output_dir {
        cfg.output_dir = dir;
    }
    cfg.validate()?;

    let metrics = metrics_by_names(&cfg.metrics)?;
    let judge = build_judge(
        &args.judge,
        Some(&cfg.judge.model),
        cfg.judge.base_url.as_deref(),
    )?;

    let runner = BatchRunner::new(judge, metrics, cfg.workers);
    let summary = runner.run(&cfg).await?;

    eprintln!(
        "Results: scored={} skipped={} errors={} tables={}",
        summary.cases_scored,
        summary.cases_skipped,
        summary.case_errors,
        summary.tables_written.len()
    );
    for path in &summary.tables_written {
        println!("{}", path.display());
    }

    Ok(if summary.has_errors() { FAILURES } else { SUCCESS })
}
