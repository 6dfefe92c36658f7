use std::sync::Arc;

use soapscore_core::errors::ConfigError;
use soapscore_core::metrics_api::Metric;

mod conciseness;
mod fact_alignment;
mod fact_checking;

pub use conciseness::ConcisenessMetric;
pub use fact_alignment::FactAlignmentMetric;
pub use fact_checking::FactCheckingMetric;

pub fn default_metrics() -> Vec<Arc<dyn Metric>> {
    vec![
        Arc::new(FactAlignmentMetric),
        Arc::new(FactCheckingMetric),
        Arc::new(ConcisenessMetric),
    ]
}

pub fn metric_by_name(name: &str) -> Result<Arc<dyn Metric>, ConfigError> {
    default_metrics()
        .into_iter()
        .find(|m| m.name() == name.trim())
        .ok_or_else(|| ConfigError::UnknownMetric(name.to_string()))
}

/// Resolve names in the given order. Duplicates are kept.
pub fn metrics_by_names<S: AsRef<str>>(names: &[S]) -> Result<Vec<Arc<dyn Metric>>, ConfigError> {
    names.iter().map(|n| metric_by_name(n.as_ref())).collect()
}
