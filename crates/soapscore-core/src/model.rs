use serde::{Deserialize, Serialize};
use std::fmt;

/// The four canonical SOAP sections, in reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    Subjective,
    Objective,
    Assessment,
    Plan,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Subjective,
        Category::Objective,
        Category::Assessment,
        Category::Plan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Subjective => "Subjective",
            Category::Objective => "Objective",
            Category::Assessment => "Assessment",
            Category::Plan => "Plan",
        }
    }

    pub fn from_canonical(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.as_str() == name)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A note normalized into the four canonical sections. Absent sections are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SoapNote {
    #[serde(rename = "Subjective", default)]
    pub subjective: String,
    #[serde(rename = "Objective", default)]
    pub objective: String,
    #[serde(rename = "Assessment", default)]
    pub assessment: String,
    #[serde(rename = "Plan", default)]
    pub plan: String,
}

impl SoapNote {
    pub fn get(&self, category: Category) -> &str {
        match category {
            Category::Subjective => &self.subjective,
            Category::Objective => &self.objective,
            Category::Assessment => &self.assessment,
            Category::Plan => &self.plan,
        }
    }

    pub fn set(&mut self, category: Category, text: impl Into<String>) {
        let slot = match category {
            Category::Subjective => &mut self.subjective,
            Category::Objective => &mut self.objective,
            Category::Assessment => &mut self.assessment,
            Category::Plan => &mut self.plan,
        };
        *slot = text.into();
    }

    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.get(*c).trim().is_empty())
    }
}

/// A note as handed to the parser: either already keyed by category, or raw text.
#[derive(Debug, Clone, PartialEq)]
pub enum NoteInput {
    /// Keys are canonical category names; values may be strings or lists of strings.
    Structured(serde_json::Map<String, serde_json::Value>),
    RawText(String),
}

impl From<&str> for NoteInput {
    fn from(text: &str) -> Self {
        NoteInput::RawText(text.to_string())
    }
}

impl From<String> for NoteInput {
    fn from(text: String) -> Self {
        NoteInput::RawText(text)
    }
}

/// Reference key facts per category. An empty list means the category is not scored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyFacts {
    #[serde(rename = "Subjective", default)]
    pub subjective: Vec<String>,
    #[serde(rename = "Objective", default)]
    pub objective: Vec<String>,
    #[serde(rename = "Assessment", default)]
    pub assessment: Vec<String>,
    #[serde(rename = "Plan", default)]
    pub plan: Vec<String>,
}

impl KeyFacts {
    pub fn get(&self, category: Category) -> &[String] {
        match category {
            Category::Subjective => &self.subjective,
            Category::Objective => &self.objective,
            Category::Assessment => &self.assessment,
            Category::Plan => &self.plan,
        }
    }

    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|c| self.get(*c).is_empty())
    }

    pub fn total(&self) -> usize {
        Category::ALL.iter().map(|c| self.get(*c).len()).sum()
    }
}

/// Everything known about one consultation case.
#[derive(Debug, Clone, Default)]
pub struct CaseData {
    pub id: String,
    pub key_facts: KeyFacts,
    pub reference_soap: String,
    pub transcript: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LlmResponse {
    pub text: String,
    pub provider: String,
    pub model: String,
    #[serde(default)]
    pub meta: serde_json::Value,
}
