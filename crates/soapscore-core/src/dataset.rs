//! Case-organized dataset on disk.
//!
//! ```text
//! <data_dir>/<LANG>/KeyFacts/<id>.json
//! <data_dir>/<LANG>/SOAP-examples/<id>.txt
//! <data_dir>/<LANG>/Transcripts/<id>.txt
//! <generated_dir>/<LANG>/<model>/<id with spaces as _>_<strategy>.json
//! ```

use crate::model::{CaseData, KeyFacts, SoapNote};
use crate::soap::normalize_generated;
use anyhow::Context;
use std::path::{Path, PathBuf};

const KEY_FACTS_DIR: &str = "KeyFacts";
const REFERENCE_DIR: &str = "SOAP-examples";
const TRANSCRIPTS_DIR: &str = "Transcripts";

/// Loads the cases of one language.
#[derive(Debug, Clone)]
pub struct CaseLoader {
    root: PathBuf,
    language: String,
}

impl CaseLoader {
    pub fn new(data_dir: &Path, language: &str) -> Self {
        Self {
            root: data_dir.join(language),
            language: language.to_string(),
        }
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Case ids are the transcript file stems, sorted. A missing directory has no cases.
    pub fn case_ids(&self) -> anyhow::Result<Vec<String>> {
        let dir = self.root.join(TRANSCRIPTS_DIR);
        if !dir.is_dir() {
            tracing::warn!(dir = %dir.display(), "transcript directory not found");
            return Ok(Vec::new());
        }

        let mut ids = Vec::new();
        for entry in std::fs::read_dir(&dir)
            .with_context(|| format!("failed to list {}", dir.display()))?
        {
            let path = entry?.path();
            if path.extension().and_then(|e| e.to_str()) != Some("txt") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                ids.push(stem.to_string());
            }
        }
        ids.sort();
        Ok(ids)
    }

    /// Missing files load as empty; malformed key facts are an error.
    pub fn load(&self, id: &str) -> anyhow::Result<CaseData> {
        let facts_path = self.root.join(KEY_FACTS_DIR).join(format!("{}.json", id));
        let key_facts = match read_optional(&facts_path)? {
            Some(raw) => serde_json::from_str::<KeyFacts>(&raw)
                .with_context(|| format!("malformed key facts {}", facts_path.display()))?,
            None => KeyFacts::default(),
        };

        let reference_soap =
            read_optional(&self.root.join(REFERENCE_DIR).join(format!("{}.txt", id)))?
                .unwrap_or_default();
        let transcript =
            read_optional(&self.root.join(TRANSCRIPTS_DIR).join(format!("{}.txt", id)))?
                .unwrap_or_default();

        Ok(CaseData {
            id: id.to_string(),
            key_facts,
            reference_soap,
            transcript,
        })
    }
}

fn read_optional(path: &Path) -> anyhow::Result<Option<String>> {
    match std::fs::read_to_string(path) {
        Ok(s) => Ok(Some(s)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
    }
}

/// Model directories under `<generated_dir>/<LANG>`, sorted.
pub fn model_dirs(generated_dir: &Path, language: &str) -> anyhow::Result<Vec<String>> {
    let dir = generated_dir.join(language);
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut models = Vec::new();
    for entry in std::fs::read_dir(&dir)
        .with_context(|| format!("failed to list {}", dir.display()))?
    {
        let entry = entry?;
        if entry.file_type()?.is_dir() {
            models.push(entry.file_name().to_string_lossy().into_owned());
        }
    }
    models.sort();
    Ok(models)
}

pub fn generated_note_path(
    generated_dir: &Path,
    language: &str,
    model: &str,
    case_id: &str,
    strategy: &str,
) -> PathBuf {
    generated_dir
        .join(language)
        .join(model)
        .join(format!("{}_{}.json", case_id.replace(' ', "_"), strategy))
}

/// Load a generated note. `None` when the file is missing, unreadable or not a JSON object.
pub fn load_generated_note(path: &Path) -> Option<SoapNote> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => {
            tracing::debug!(path = %path.display(), error = %e, "generated note not readable");
            return None;
        }
    };
    match serde_json::from_str::<serde_json::Value>(&raw) {
        Ok(serde_json::Value::Object(map)) => Some(normalize_generated(&map)),
        Ok(_) => {
            tracing::warn!(path = %path.display(), "generated note is not a JSON object");
            None
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "generated note is not valid JSON");
            None
        }
    }
}
