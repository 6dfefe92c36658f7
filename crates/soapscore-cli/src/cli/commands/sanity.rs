use super::super::args::SanityArgs;
use super::judge_builder::build_judge;
use crate::exit_codes::{FAILURES, SUCCESS};
use soapscore_core::engine::BatchRunner;
use soapscore_core::report::console::print_table;

pub(crate) async fn run(args: SanityArgs) -> anyhow::Result<i32> {
    let judge = build_judge(&args.judge, None, None)?;
    let runner = BatchRunner::new(judge, soapscore_metrics::default_metrics(), args.workers);

    let run = runner
        .run_sanity(&args.data_dir, &args.languages, &args.output_dir)
        .await?;

    for report in &run.reports {
        println!("\n[{}] {}", report.language, report.path.display());
        print_table(&report.table);
    }
    eprintln!(
        "Sanity: tables={} skipped={} errors={}",
        run.reports.len(),
        run.cases_skipped,
        run.case_errors
    );

    Ok(if run.has_errors() { FAILURES } else { SUCCESS })
}
