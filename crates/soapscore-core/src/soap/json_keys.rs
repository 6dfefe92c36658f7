use super::coerce_section;
use crate::model::{Category, SoapNote};

type JsonMap = serde_json::Map<String, serde_json::Value>;

/// Map a free-form JSON key onto a section by case-insensitive substring.
pub fn classify_key(key: &str) -> Option<Category> {
    let k = key.to_lowercase();
    if k.contains("subject") {
        Some(Category::Subjective)
    } else if k.contains("object") {
        Some(Category::Objective)
    } else if k.contains("assess") || k.contains("evaluati") {
        Some(Category::Assessment)
    } else if k.contains("plan") || k.contains("beleid") {
        Some(Category::Plan)
    } else {
        None
    }
}

/// Unknown keys are dropped. A later key for the same section wins.
pub(crate) fn classify_object(map: &JsonMap) -> SoapNote {
    let mut note = SoapNote::default();
    for (key, value) in map {
        if let Some(category) = classify_key(key) {
            note.set(category, coerce_section(value));
        }
    }
    note
}

const GENERATED_ALIASES: [(Category, &[&str]); 4] = [
    (Category::Subjective, &["subjective", "subjectief"]),
    (Category::Objective, &["objective", "objectief"]),
    (Category::Assessment, &["assessment"]),
    (Category::Plan, &["plan"]),
];

/// Key mapping used for notes produced by the generation pipeline.
///
/// Keys are lower-cased and stripped of markdown decoration (`:`, `*`, `#`) before
/// alias matching. For each section the aliases are tried in order and the first
/// key (in document order) containing the alias is taken.
pub fn normalize_generated(map: &JsonMap) -> SoapNote {
    let normalized: Vec<(String, &serde_json::Value)> = map
        .iter()
        .map(|(k, v)| {
            let key = k.to_lowercase().trim().replace([':', '*', '#'], "");
            (key, v)
        })
        .collect();

    let mut note = SoapNote::default();
    for (category, aliases) in GENERATED_ALIASES {
        let hit = aliases.iter().find_map(|alias| {
            normalized
                .iter()
                .find(|(key, _)| key.contains(alias))
                .map(|(_, value)| *value)
        });
        if let Some(value) = hit {
            note.set(category, coerce_section(value));
        }
    }
    note
}
