//! Atomic claim extraction from one note section.

use crate::judge::{client, prompt, Judge};
use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

lazy_static! {
    static ref CODE_FENCE: Regex = Regex::new(r"(?s)```(?:json)?(.*?)```").unwrap();
}

/// Result of asking the oracle for the claims in a section.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClaimExtraction {
    /// The section was blank; the oracle was not asked.
    Empty,
    Claims(Vec<String>),
    /// The oracle failed or its answer was not the expected JSON.
    Failed(String),
}

impl ClaimExtraction {
    /// Claims to score, or `None` when there is nothing to score (blank section, failure,
    /// or an empty claim list).
    pub fn into_claims(self) -> Option<Vec<String>> {
        match self {
            ClaimExtraction::Claims(claims) if !claims.is_empty() => Some(claims),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct ClaimsPayload {
    claims: Vec<ClaimEntry>,
}

// Entries also carry an `id`, which is ignored.
#[derive(Debug, Deserialize)]
struct ClaimEntry {
    text: String,
}

pub(crate) async fn extract(judge: &Judge, section: &str) -> ClaimExtraction {
    if section.trim().is_empty() {
        return ClaimExtraction::Empty;
    }

    let prompt = prompt::claim_extraction(section);
    let raw = match client::call_oracle(judge, &prompt).await {
        Ok(raw) => raw,
        Err(e) => {
            tracing::warn!(error = %e, "claim extraction call failed");
            return ClaimExtraction::Failed(e.to_string());
        }
    };

    match parse_claims(&raw) {
        Ok(claims) => {
            if claims.is_empty() {
                tracing::debug!("oracle returned no claims for non-empty section");
            }
            ClaimExtraction::Claims(claims)
        }
        Err(e) => {
            tracing::warn!(error = %e, "claim extraction answer is not a claims object");
            ClaimExtraction::Failed(e.to_string())
        }
    }
}

/// Parse `{"claims": [{"id", "text"}]}`, unwrapping the first code fence if present.
pub fn parse_claims(raw: &str) -> Result<Vec<String>, serde_json::Error> {
    let body = strip_code_fence(raw);
    let payload: ClaimsPayload = serde_json::from_str(body.trim())?;
    Ok(payload.claims.into_iter().map(|c| c.text).collect())
}

fn strip_code_fence(raw: &str) -> &str {
    if !raw.contains("```") {
        return raw;
    }
    CODE_FENCE
        .captures(raw)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str())
        .unwrap_or(raw)
}
