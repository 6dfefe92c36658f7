//! Folding many Score Reports of one metric into a per-case table.

use crate::model::Category;
use crate::scoring::{round2, CategoryScore, ScoreReport};

pub const AVERAGE_LABEL: &str = "Average";

#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub case_id: String,
    /// Indexed like [`Category::ALL`].
    pub scores: [CategoryScore; 4],
    pub overall: f64,
}

impl TableRow {
    pub fn from_report(case_id: impl Into<String>, report: &ScoreReport) -> Self {
        Self {
            case_id: case_id.into(),
            scores: Category::ALL.map(|c| report.score(c)),
            overall: report.overall_score,
        }
    }
}

/// One metric's results over a set of cases, rows sorted by case id.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTable {
    pub metric: String,
    pub rows: Vec<TableRow>,
}

impl ScoreTable {
    pub fn new(metric: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
            rows: Vec::new(),
        }
    }

    pub fn from_reports<'a, I>(metric: impl Into<String>, reports: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a ScoreReport)>,
    {
        reports
            .into_iter()
            .fold(Self::new(metric), |table, (id, report)| {
                table.with_row(TableRow::from_report(id, report))
            })
    }

    pub fn with_row(mut self, row: TableRow) -> Self {
        let at = self
            .rows
            .partition_point(|r| r.case_id.as_str() <= row.case_id.as_str());
        self.rows.insert(at, row);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Per-category means over applicable cells only. A column with no applicable cell
    /// averages to N/A.
    pub fn category_averages(&self) -> [CategoryScore; 4] {
        std::array::from_fn(|i| {
            mean(self.rows.iter().filter_map(|r| r.scores[i].value()))
                .map(CategoryScore::Scored)
                .unwrap_or(CategoryScore::NotApplicable)
        })
    }

    pub fn overall_average(&self) -> f64 {
        mean(self.rows.iter().map(|r| r.overall)).unwrap_or(0.0)
    }

    /// The table's rows followed by the `Average` row.
    pub fn rows_with_average(&self) -> Vec<TableRow> {
        let mut rows = self.rows.clone();
        if !rows.is_empty() {
            rows.push(TableRow {
                case_id: AVERAGE_LABEL.to_string(),
                scores: self.category_averages(),
                overall: self.overall_average(),
            });
        }
        rows
    }
}

fn mean(values: impl Iterator<Item = f64>) -> Option<f64> {
    let (sum, n) = values.fold((0.0, 0usize), |(s, n), v| (s + v, n + 1));
    (n > 0).then(|| round2(sum / n as f64))
}
