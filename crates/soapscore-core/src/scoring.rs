//! Score Report types and the shared aggregation rule of every metric.

use crate::judge::Verdict;
use crate::model::Category;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

pub const NOT_APPLICABLE: &str = "N/A";

/// Rounds to two decimals, half away from zero.
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// `100 * positive / total`, rounded. Zero when `total` is zero.
pub fn percentage(positive: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round2(100.0 * positive as f64 / total as f64)
}

/// A category's score, or the sentinel for a category with nothing to score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CategoryScore {
    Scored(f64),
    NotApplicable,
}

impl CategoryScore {
    pub fn value(&self) -> Option<f64> {
        match self {
            CategoryScore::Scored(v) => Some(*v),
            CategoryScore::NotApplicable => None,
        }
    }

    pub fn is_applicable(&self) -> bool {
        matches!(self, CategoryScore::Scored(_))
    }
}

impl fmt::Display for CategoryScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryScore::Scored(v) => write!(f, "{:.2}", v),
            CategoryScore::NotApplicable => f.write_str(NOT_APPLICABLE),
        }
    }
}

impl Serialize for CategoryScore {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            CategoryScore::Scored(v) => serializer.serialize_f64(*v),
            CategoryScore::NotApplicable => serializer.serialize_str(NOT_APPLICABLE),
        }
    }
}

impl<'de> Deserialize<'de> for CategoryScore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Number(f64),
            Text(String),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Number(v) => Ok(CategoryScore::Scored(v)),
            Repr::Text(s) if s == NOT_APPLICABLE => Ok(CategoryScore::NotApplicable),
            Repr::Text(s) => Err(serde::de::Error::custom(format!(
                "expected a number or \"{}\", got \"{}\"",
                NOT_APPLICABLE, s
            ))),
        }
    }
}

/// One fact or claim together with the oracle's verdict on it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JudgedItem {
    pub item: String,
    pub verdict: Verdict,
    pub positive: bool,
}

impl JudgedItem {
    pub fn new(item: impl Into<String>, verdict: Verdict) -> Self {
        Self {
            item: item.into(),
            positive: verdict.is_positive(),
            verdict,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryReport {
    pub category: Category,
    pub score: CategoryScore,
    pub breakdown: Vec<JudgedItem>,
    /// Claims the oracle judged CONTRADICTED. They score like NOT-FOUND.
    #[serde(default)]
    pub contradicted: usize,
}

/// Result of one metric on one note. Always carries all four categories, in order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreReport {
    pub metric: String,
    pub categories: Vec<CategoryReport>,
    pub overall_score: f64,
}

impl ScoreReport {
    pub fn category(&self, category: Category) -> Option<&CategoryReport> {
        self.categories.iter().find(|c| c.category == category)
    }

    pub fn score(&self, category: Category) -> CategoryScore {
        self.category(category)
            .map(|c| c.score)
            .unwrap_or(CategoryScore::NotApplicable)
    }
}

/// Accumulates per-category results and computes the overall score over applicable
/// categories only.
#[derive(Debug)]
pub struct ReportBuilder {
    metric: String,
    categories: Vec<CategoryReport>,
    positive: usize,
    total: usize,
}

impl ReportBuilder {
    pub fn new(metric: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
            categories: Vec::with_capacity(Category::ALL.len()),
            positive: 0,
            total: 0,
        }
    }

    pub fn not_applicable(&mut self, category: Category) -> &mut Self {
        self.categories.push(CategoryReport {
            category,
            score: CategoryScore::NotApplicable,
            breakdown: Vec::new(),
            contradicted: 0,
        });
        self
    }

    /// Record the judged items of a category. An empty list marks it not applicable.
    pub fn record(&mut self, category: Category, breakdown: Vec<JudgedItem>) -> &mut Self {
        if breakdown.is_empty() {
            return self.not_applicable(category);
        }

        let positive = breakdown.iter().filter(|j| j.positive).count();
        let contradicted = breakdown
            .iter()
            .filter(|j| j.verdict == Verdict::Contradicted)
            .count();
        self.positive += positive;
        self.total += breakdown.len();

        self.categories.push(CategoryReport {
            category,
            score: CategoryScore::Scored(percentage(positive, breakdown.len())),
            breakdown,
            contradicted,
        });
        self
    }

    pub fn finish(mut self) -> ScoreReport {
        for category in Category::ALL {
            if !self.categories.iter().any(|c| c.category == category) {
                self.not_applicable(category);
            }
        }
        self.categories.sort_by_key(|c| c.category);

        ScoreReport {
            metric: self.metric,
            overall_score: percentage(self.positive, self.total),
            categories: self.categories,
        }
    }
}
