//! Judge prompt builders. Inputs are embedded verbatim.

use super::VerdictKind;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

const EVALUATOR_SYSTEM: &str = "You are an expert bilingual medical evaluator (Dutch/English).";
const FACT_CHECK_SYSTEM: &str = "You are a medical/clinical fact-checking agent.";
const EXTRACTION_SYSTEM: &str = "You are a clinical claim extraction system.";

/// `subject` and `comparison` follow `Judge::ask`: for fact presence the subject is the
/// note section and the comparison is the key fact; for claim questions the subject is
/// the claim and the comparison is the reference text.
pub fn build_verdict_prompt(kind: VerdictKind, subject: &str, comparison: &str) -> Prompt {
    match kind {
        VerdictKind::FactPresence => fact_presence(subject, comparison),
        VerdictKind::ClaimSupport => claim_support(subject, comparison),
        VerdictKind::ClaimPresence => claim_presence(subject, comparison),
    }
}

fn fact_presence(section: &str, fact: &str) -> Prompt {
    let user = format!(
        "Input Text (SOAP Section):\n\
         \"{section}\"\n\n\
         Key Fact to Verify (Dutch):\n\
         \"{fact}\"\n\n\
         Task:\n\
         Decide whether the medical concept in the Key Fact is present in the Input Text, \
         explicitly or implicitly.\n\n\
         Guidelines:\n\
         1. Cross-lingual matching: the Input may be English or Dutch while the Key Fact is Dutch.\n\
         2. Synonyms and medical paraphrases count as a match.\n\
         3. Clinical inference: if the Key Fact states an exclusion (e.g. \"geen alarmsymptomen\") \
         and the Input gives a diagnosis that clinically implies that exclusion, answer PRESENT.\n\
         4. If the information is missing or contradicted, answer ABSENT.\n\n\
         Reply ONLY with \"PRESENT\" or \"ABSENT\". Do not explain."
    );
    Prompt {
        system: EVALUATOR_SYSTEM.to_string(),
        user,
    }
}

fn claim_support(claim: &str, transcript: &str) -> Prompt {
    let user = format!(
        "Source transcript:\n\
         \"{transcript}\"\n\n\
         Generated claim:\n\
         \"{claim}\"\n\n\
         Decide whether the claim is:\n\
         1. SUPPORTED: stated in the transcript, or medically implied through synonyms and \
         disease-symptom relationships\n\
         2. NOT-FOUND: the transcript states the opposite, or does not give enough information \
         for the claim\n\n\
         Reply ONLY with SUPPORTED or NOT-FOUND. Do not explain."
    );
    Prompt {
        system: FACT_CHECK_SYSTEM.to_string(),
        user,
    }
}

fn claim_presence(claim: &str, facts: &str) -> Prompt {
    let user = format!(
        "Source facts:\n\
         \"{facts}\"\n\n\
         Generated claim:\n\
         {claim}\n\n\
         Decide whether the claim is:\n\
         1. SUPPORTED: the source facts state the claim, or medically imply it through synonyms \
         and symptoms\n\
         2. CONTRADICTED: the source facts state the opposite, or present contradicting evidence\n\
         3. NOT-FOUND: the source facts do not give enough information either way\n\n\
         Reply ONLY with SUPPORTED, CONTRADICTED or NOT-FOUND. Do not explain."
    );
    Prompt {
        system: FACT_CHECK_SYSTEM.to_string(),
        user,
    }
}

pub fn claim_extraction(section: &str) -> Prompt {
    let user = format!(
        "Task:\n\
         Extract all atomic factual claims from the provided section of a generated SOAP note.\n\n\
         Requirements:\n\
         - Each claim is a single, verifiable fact.\n\
         - Keep uncertainty and negation (e.g. \"denies fever\").\n\
         - Never merge several ideas into one claim.\n\
         - No inferred or implied information, only what is explicitly stated.\n\
         - Do not skip any claims.\n\n\
         Return JSON in exactly this format:\n\
         {{\n  \"claims\": [\n    {{\"id\": 1, \"text\": \"...\"}},\n    {{\"id\": 2, \"text\": \"...\"}}\n  ]\n}}\n\n\
         SOAP Section:\n\
         \"{section}\""
    );
    Prompt {
        system: EXTRACTION_SYSTEM.to_string(),
        user,
    }
}
