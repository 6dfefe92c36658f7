//! Section parser properties over generated inputs.

use proptest::prelude::*;
use serde_json::json;
use soapscore_core::soap::{parse, parse_text};
use soapscore_core::{NoteInput, SoapNote};

fn body() -> impl Strategy<Value = String> {
    "[a-z]{1,10}( [a-z]{1,10}){0,3}"
}

proptest! {
    #[test]
    fn structured_input_is_identity(s in ".*", o in ".*", a in ".*", p in ".*") {
        let map = json!({"Subjective": s.clone(), "Objective": o.clone(), "Assessment": a.clone(), "Plan": p.clone()});
        let note = parse(&NoteInput::Structured(map.as_object().unwrap().clone()));
        prop_assert_eq!(note, SoapNote { subjective: s, objective: o, assessment: a, plan: p });
    }

    #[test]
    fn abbreviated_headers_segment_cleanly(s in body(), o in body(), a in body(), p in body()) {
        let text = format!("S: {s}\nO: {o}\nA: {a}\nP: {p}");
        let note = parse_text(&text);
        prop_assert_eq!(note, SoapNote { subjective: s, objective: o, assessment: a, plan: p });
    }

    #[test]
    fn arbitrary_text_never_panics(text in "\\PC*") {
        let _ = parse_text(&text);
    }
}

#[test]
fn dutch_json_key_is_recognized() {
    let note = parse_text(r#"{"Subjectief: klachten": "keelpijn sinds 3 dagen"}"#);
    assert_eq!(note.subjective, "keelpijn sinds 3 dagen");
    assert!(note.objective.is_empty());
}

#[test]
fn documented_example_parses() {
    let note = parse_text("S: sore throat\nO: normal exam\nA: viral infection\nP: rest");
    assert_eq!(note.subjective, "sore throat");
    assert_eq!(note.objective, "normal exam");
    assert_eq!(note.assessment, "viral infection");
    assert_eq!(note.plan, "rest");
}
