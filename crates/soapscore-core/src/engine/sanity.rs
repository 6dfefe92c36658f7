//! Scores the reference SOAP notes themselves. A healthy dataset and judge should put
//! them close to 100 on every metric.

use super::runner::{load_cases, BatchRunner, CaseJob};
use crate::dataset::CaseLoader;
use crate::report::csv::write_csv;
use crate::report::ScoreTable;
use crate::soap;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct SanityReport {
    pub language: String,
    pub table: ScoreTable,
    pub path: PathBuf,
}

#[derive(Debug, Clone, Default)]
pub struct SanityRun {
    pub reports: Vec<SanityReport>,
    /// Cases missing a reference note, a transcript or every key fact.
    pub cases_skipped: usize,
    /// Cases whose reference data failed to load, or whose scoring task died.
    pub case_errors: usize,
}

impl SanityRun {
    pub fn has_errors(&self) -> bool {
        self.case_errors > 0
    }
}

impl BatchRunner {
    /// Writes `<output_dir>/<metric>_<LANG>.csv` per language and metric.
    ///
    /// A case is skipped when its key facts are all empty, whether the file is absent,
    /// `{}` or four empty lists: such a case has nothing to score on any metric.
    pub async fn run_sanity(
        &self,
        data_dir: &Path,
        languages: &[String],
        output_dir: &Path,
    ) -> anyhow::Result<SanityRun> {
        let mut run = SanityRun::default();

        for language in languages {
            let (cases, load_errors) = load_cases(&CaseLoader::new(data_dir, language))?;
            run.case_errors += load_errors;

            let mut jobs = Vec::new();
            for case in cases {
                if case.reference_soap.trim().is_empty()
                    || case.key_facts.is_empty()
                    || case.transcript.trim().is_empty()
                {
                    tracing::info!(language = %language, case = %case.id, "missing reference data, skipping");
                    run.cases_skipped += 1;
                    continue;
                }
                let note = soap::parse_text(&case.reference_soap);
                jobs.push(CaseJob { case, note });
            }

            tracing::info!(language = %language, cases = jobs.len(), "scoring reference notes");
            let (outcomes, errors) = self.score_cases(jobs).await?;
            run.case_errors += errors;

            for table in self.tables(&outcomes) {
                let path = output_dir.join(format!("{}_{}.csv", table.metric, language));
                write_csv(&table, &path)?;
                run.reports.push(SanityReport {
                    language: language.clone(),
                    table,
                    path,
                });
            }
        }

        if run.has_errors() {
            tracing::warn!(errors = run.case_errors, "sanity run finished with case errors");
        }
        Ok(run)
    }
}
