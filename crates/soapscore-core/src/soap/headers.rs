use crate::model::{Category, SoapNote};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Anchored at line start; tolerates one leading `*` and `_` and the one-letter form ("S:", "A.").
    static ref HEADERS: [(Category, Regex); 4] = [
        (
            Category::Subjective,
            Regex::new(r"(?i)^\s*\*?_?(subjective|subjectief|s\s*[:.])").unwrap(),
        ),
        (
            Category::Objective,
            Regex::new(r"(?i)^\s*\*?_?(objective|objectief|o\s*[:.])").unwrap(),
        ),
        (
            Category::Assessment,
            Regex::new(r"(?i)^\s*\*?_?(assessment|evaluation|evaluatie|conclusie|a\s*[:.])")
                .unwrap(),
        ),
        (
            Category::Plan,
            Regex::new(r"(?i)^\s*\*?_?(plan|beleid|p\s*[:.])").unwrap(),
        ),
    ];
}

/// If `line` opens a section, return the section and any text that follows the header.
pub fn match_header(line: &str) -> Option<(Category, &str)> {
    HEADERS.iter().find_map(|(category, re)| {
        re.find(line).map(|m| {
            let rest = line[m.end()..].trim();
            (*category, rest.trim_start_matches(':').trim_start())
        })
    })
}

pub(crate) fn segment(text: &str) -> SoapNote {
    let mut note = SoapNote::default();
    let mut current: Option<Category> = None;
    let mut buffer: Vec<&str> = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if let Some((category, rest)) = match_header(line) {
            if let Some(prev) = current {
                note.set(prev, buffer.join("\n").trim());
            }
            current = Some(category);
            buffer.clear();
            if !rest.is_empty() {
                buffer.push(rest);
            }
            continue;
        }
        if current.is_some() {
            buffer.push(line);
        }
    }

    if let Some(prev) = current {
        note.set(prev, buffer.join("\n").trim());
    }
    note
}
