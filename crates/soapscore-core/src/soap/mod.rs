//! Section parser: normalizes any note shape into the four canonical SOAP sections.
//!
//! Resolution order for text input:
//! 1. strip markdown fences; if the remainder is a JSON object, classify its keys
//! 2. otherwise segment line by line on section headers
//!
//! Parsing never fails. Unrecognized input yields four empty sections.

mod headers;
mod json_keys;

pub use headers::match_header;
pub use json_keys::{classify_key, normalize_generated};

use crate::model::{Category, NoteInput, SoapNote};

const BOM: char = '\u{feff}';

/// Normalize a note into the four canonical sections.
pub fn parse(input: &NoteInput) -> SoapNote {
    match input {
        NoteInput::Structured(map) => {
            let mut note = SoapNote::default();
            for category in Category::ALL {
                if let Some(value) = map.get(category.as_str()) {
                    note.set(category, coerce_section(value));
                }
            }
            note
        }
        NoteInput::RawText(text) => parse_text(text),
    }
}

pub fn parse_text(text: &str) -> SoapNote {
    let text = text.strip_prefix(BOM).unwrap_or(text);
    if text.trim().is_empty() {
        return SoapNote::default();
    }

    let cleaned = text.replace("```json", "").replace("```", "");
    let cleaned = cleaned.trim();
    if cleaned.starts_with('{') {
        match serde_json::from_str::<serde_json::Map<String, serde_json::Value>>(cleaned) {
            Ok(map) => return json_keys::classify_object(&map),
            Err(e) => {
                tracing::debug!(error = %e, "note is not valid JSON, falling back to header segmentation");
            }
        }
    }

    headers::segment(text)
}

/// Render a section value as text. Lists are joined one item per line.
pub fn coerce_section(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Null => String::new(),
        serde_json::Value::Array(items) => items
            .iter()
            .map(coerce_section)
            .collect::<Vec<_>>()
            .join("\n"),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn structured(v: serde_json::Value) -> NoteInput {
        NoteInput::Structured(v.as_object().unwrap().clone())
    }

    #[test]
    fn structured_input_passes_through_and_completes_keys() {
        let note = parse(&structured(json!({
            "Subjective": "hoofdpijn",
            "Plan": "paracetamol"
        })));
        assert_eq!(note.subjective, "hoofdpijn");
        assert_eq!(note.objective, "");
        assert_eq!(note.assessment, "");
        assert_eq!(note.plan, "paracetamol");
    }

    #[test]
    fn structured_list_values_are_joined_by_newline() {
        let note = parse(&structured(json!({
            "Plan": ["rest", "fluids"]
        })));
        assert_eq!(note.plan, "rest\nfluids");
    }

    #[test]
    fn json_text_with_dutch_keys_is_classified() {
        let note = parse_text(
            r#"{"Subjectief: klachten": "keelpijn", "Objectief": "temp 38.3", "Evaluatie": "viraal", "Beleid": "rust"}"#,
        );
        assert_eq!(note.subjective, "keelpijn");
        assert_eq!(note.objective, "temp 38.3");
        assert_eq!(note.assessment, "viraal");
        assert_eq!(note.plan, "rust");
    }

    #[test]
    fn fenced_json_is_unwrapped() {
        let note = parse_text("```json\n{\"Subjective\": \"cough\", \"Unrelated\": \"x\"}\n```");
        assert_eq!(note.subjective, "cough");
        assert_eq!(note.plan, "");
    }

    #[test]
    fn abbreviated_headers_segment_text() {
        let note = parse_text("S: sore throat\nO: normal exam\nA: viral infection\nP: rest");
        assert_eq!(
            note,
            SoapNote {
                subjective: "sore throat".into(),
                objective: "normal exam".into(),
                assessment: "viral infection".into(),
                plan: "rest".into(),
            }
        );
    }

    #[test]
    fn broken_json_falls_back_to_headers() {
        let note = parse_text("{ not json\nSubjective: fever\nPlan: fluids");
        assert_eq!(note.subjective, "fever");
        assert_eq!(note.plan, "fluids");
    }

    #[test]
    fn preamble_lines_are_discarded_and_multiline_sections_kept() {
        let text = "\u{feff}Consult 12 maart\n\nSubjective:\nkeelpijn sinds 3 dagen\ngeen koorts\n\n*Objective: keel rood\nConclusie: faryngitis\nBeleid\n- zuigtabletten\n";
        let note = parse_text(text);
        assert_eq!(note.subjective, "keelpijn sinds 3 dagen\ngeen koorts");
        assert_eq!(note.objective, "keel rood");
        assert_eq!(note.assessment, "faryngitis");
        assert_eq!(note.plan, "- zuigtabletten");
    }

    #[test]
    fn empty_and_headerless_input_yield_empty_sections() {
        assert_eq!(parse_text(""), SoapNote::default());
        assert_eq!(parse_text("   \n  "), SoapNote::default());
        assert_eq!(parse_text("just some prose without headers"), SoapNote::default());
    }
}
