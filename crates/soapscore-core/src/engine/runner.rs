use crate::config::EvalConfig;
use crate::dataset::{self, CaseLoader};
use crate::judge::Judge;
use crate::metrics_api::{Metric, Reference};
use crate::model::{CaseData, SoapNote};
use crate::report::csv::write_csv;
use crate::report::{ScoreTable, TableRow};
use crate::scoring::ScoreReport;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::Semaphore;
use tokio::task::JoinSet;

/// One note to score against one case's reference data.
#[derive(Debug, Clone)]
pub struct CaseJob {
    pub case: Arc<CaseData>,
    pub note: SoapNote,
}

/// Reports for one case, one per active metric, in metric order.
#[derive(Debug, Clone)]
pub struct CaseOutcome {
    pub case_id: String,
    pub reports: Vec<ScoreReport>,
}

#[derive(Debug, Clone, Default)]
pub struct BatchSummary {
    pub tables_written: Vec<PathBuf>,
    pub cases_scored: usize,
    /// Cases without a readable generated note.
    pub cases_skipped: usize,
    /// Cases whose reference data failed to load, or whose scoring task died.
    pub case_errors: usize,
}

impl BatchSummary {
    pub fn has_errors(&self) -> bool {
        self.case_errors > 0
    }
}

pub struct BatchRunner {
    pub judge: Judge,
    pub metrics: Vec<Arc<dyn Metric>>,
    pub workers: usize,
}

impl BatchRunner {
    pub fn new(judge: Judge, metrics: Vec<Arc<dyn Metric>>, workers: usize) -> Self {
        Self {
            judge,
            metrics,
            workers: workers.max(1),
        }
    }

    /// Score every job under the worker bound. Metrics run one after another within a case.
    /// Outcomes come back sorted by case id; a job whose task panicked is dropped and
    /// counted in the returned error count.
    pub async fn score_cases(&self, jobs: Vec<CaseJob>) -> anyhow::Result<(Vec<CaseOutcome>, usize)> {
        let sem = Arc::new(Semaphore::new(self.workers));
        let mut join_set = JoinSet::new();
        let total = jobs.len();

        for job in jobs {
            let permit = sem.clone().acquire_owned().await?;
            let judge = self.judge.clone();
            let metrics = self.metrics.clone();
            join_set.spawn(async move {
                let _permit = permit;
                let reference = Reference::new(&job.case.key_facts, &job.case.transcript);
                let mut reports = Vec::with_capacity(metrics.len());
                for metric in &metrics {
                    reports.push(metric.evaluate(&judge, &job.note, &reference).await);
                }
                CaseOutcome {
                    case_id: job.case.id.clone(),
                    reports,
                }
            });
        }

        let mut outcomes = Vec::with_capacity(total);
        let mut errors = 0;
        while let Some(res) = join_set.join_next().await {
            match res {
                Ok(outcome) => {
                    outcomes.push(outcome);
                    tracing::debug!(done = outcomes.len(), total, "case scored");
                }
                Err(e) => {
                    errors += 1;
                    tracing::error!(error = %e, "scoring task failed");
                }
            }
        }

        outcomes.sort_by(|a, b| a.case_id.cmp(&b.case_id));
        Ok((outcomes, errors))
    }

    /// Fold outcomes into one table per metric.
    pub fn tables(&self, outcomes: &[CaseOutcome]) -> Vec<ScoreTable> {
        self.metrics
            .iter()
            .enumerate()
            .map(|(i, metric)| {
                outcomes
                    .iter()
                    .filter_map(|o| o.reports.get(i).map(|r| TableRow::from_report(&o.case_id, r)))
                    .fold(ScoreTable::new(metric.name()), ScoreTable::with_row)
            })
            .collect()
    }

    /// Score every (language, model, strategy) combination of generated notes and write
    /// `<output_dir>/<LANG>/<model>_<strategy>_<metric>.csv`.
    pub async fn run(&self, cfg: &EvalConfig) -> anyhow::Result<BatchSummary> {
        let mut summary = BatchSummary::default();

        for language in &cfg.languages {
            let (cases, load_errors) = load_cases(&CaseLoader::new(&cfg.data_dir, language))?;
            summary.case_errors += load_errors;
            if cases.is_empty() {
                tracing::warn!(language = %language, "no cases found, skipping language");
                continue;
            }

            let models = dataset::model_dirs(&cfg.generated_dir, language)?;
            if models.is_empty() {
                tracing::warn!(language = %language, "no generated notes found");
            }

            for model in &models {
                for strategy in &cfg.strategies {
                    let mut jobs = Vec::new();
                    for case in &cases {
                        let path = dataset::generated_note_path(
                            &cfg.generated_dir,
                            language,
                            model,
                            &case.id,
                            strategy,
                        );
                        match dataset::load_generated_note(&path) {
                            Some(note) => jobs.push(CaseJob {
                                case: case.clone(),
                                note,
                            }),
                            None => summary.cases_skipped += 1,
                        }
                    }
                    if jobs.is_empty() {
                        tracing::info!(language = %language, model = %model, strategy = %strategy, "no notes for strategy");
                        continue;
                    }

                    tracing::info!(
                        language = %language,
                        model = %model,
                        strategy = %strategy,
                        cases = jobs.len(),
                        "scoring generated notes"
                    );
                    let (outcomes, errors) = self.score_cases(jobs).await?;
                    summary.cases_scored += outcomes.len();
                    summary.case_errors += errors;

                    let dir = cfg.output_dir.join(language);
                    for table in self.tables(&outcomes) {
                        let out = dir.join(format!("{}_{}_{}.csv", model, strategy, table.metric));
                        write_csv(&table, &out)?;
                        tracing::info!(path = %out.display(), "wrote score table");
                        summary.tables_written.push(out);
                    }
                }
            }
        }

        Ok(summary)
    }
}

/// Load every case of a language. Cases that fail to load are logged and counted.
pub(crate) fn load_cases(loader: &CaseLoader) -> anyhow::Result<(Vec<Arc<CaseData>>, usize)> {
    let mut cases = Vec::new();
    let mut errors = 0;
    for id in loader.case_ids()? {
        match loader.load(&id) {
            Ok(case) => cases.push(Arc::new(case)),
            Err(e) => {
                errors += 1;
                tracing::warn!(language = loader.language(), case = %id, error = %format!("{e:#}"), "failed to load case");
            }
        }
    }
    Ok((cases, errors))
}
