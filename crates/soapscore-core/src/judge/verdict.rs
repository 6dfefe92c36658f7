use serde::{Deserialize, Serialize};

/// Which categorical question the judge is answering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerdictKind {
    /// Is a reference fact present in a note section? PRESENT / ABSENT.
    FactPresence,
    /// Is a note claim supported by the transcript? SUPPORTED / NOT-FOUND.
    ClaimSupport,
    /// Is a note claim grounded in the key facts? SUPPORTED / CONTRADICTED / NOT-FOUND.
    ClaimPresence,
}

impl VerdictKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            VerdictKind::FactPresence => "fact_presence",
            VerdictKind::ClaimSupport => "claim_support",
            VerdictKind::ClaimPresence => "claim_presence",
        }
    }

    /// Labels in matching priority order. The first entry is the positive label.
    pub fn labels(&self) -> &'static [(&'static str, Verdict)] {
        match self {
            VerdictKind::FactPresence => &[("PRESENT", Verdict::Present), ("ABSENT", Verdict::Absent)],
            VerdictKind::ClaimSupport => &[
                ("SUPPORTED", Verdict::Supported),
                ("NOT-FOUND", Verdict::NotFound),
            ],
            VerdictKind::ClaimPresence => &[
                ("SUPPORTED", Verdict::Supported),
                ("CONTRADICTED", Verdict::Contradicted),
                ("NOT-FOUND", Verdict::NotFound),
            ],
        }
    }
}

/// Outcome of one judge question. Only `Present` and `Supported` count as positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    #[serde(rename = "PRESENT")]
    Present,
    #[serde(rename = "ABSENT")]
    Absent,
    #[serde(rename = "SUPPORTED")]
    Supported,
    #[serde(rename = "CONTRADICTED")]
    Contradicted,
    #[serde(rename = "NOT-FOUND")]
    NotFound,
    /// The oracle answered, but with none of the expected labels.
    #[serde(rename = "UNRECOGNIZED")]
    Unrecognized,
    /// The inputs were vacuous and the oracle was not called.
    #[serde(rename = "SKIPPED")]
    Skipped,
    /// The oracle call failed; logged where it happened.
    #[serde(rename = "ORACLE_ERROR")]
    OracleError,
}

impl Verdict {
    pub fn is_positive(&self) -> bool {
        matches!(self, Verdict::Present | Verdict::Supported)
    }

    pub fn label(&self) -> &'static str {
        match self {
            Verdict::Present => "PRESENT",
            Verdict::Absent => "ABSENT",
            Verdict::Supported => "SUPPORTED",
            Verdict::Contradicted => "CONTRADICTED",
            Verdict::NotFound => "NOT-FOUND",
            Verdict::Unrecognized => "UNRECOGNIZED",
            Verdict::Skipped => "SKIPPED",
            Verdict::OracleError => "ORACLE_ERROR",
        }
    }
}

/// Decide a verdict from raw oracle output.
///
/// The answer is upper-cased, stripped of surrounding
/// quotes, periods and whitespace, then tested for *containment* of each label in
/// priority order. Anything else is `Unrecognized`, which scores as negative.
pub fn parse_verdict(kind: VerdictKind, raw: &str) -> Verdict {
    let normalized = raw.trim().to_uppercase();
    let normalized =
        normalized.trim_matches(|c: char| c == '"' || c == '\'' || c == '.' || c.is_whitespace());

    kind.labels()
        .iter()
        .find(|(label, _)| normalized.contains(label))
        .map(|(_, verdict)| *verdict)
        .unwrap_or(Verdict::Unrecognized)
}
