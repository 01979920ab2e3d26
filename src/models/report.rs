use serde::{Deserialize, Serialize};

use crate::models::enums::Gender;
use crate::triage::types::TriageError;

// ---------------------------------------------------------------------------
// CasualtyReportDraft — wire-shaped input
// ---------------------------------------------------------------------------

/// Raw casualty report as received from the request boundary, using the
/// wire's camelCase keys. The required fields are `Option` here so
/// that absence is representable and reported through
/// `TriageError::MissingFields` rather than a deserialization failure.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CasualtyReportDraft {
    pub mechanism_of_injury: Option<String>,
    pub reported_symptoms: Option<Vec<String>>,
    pub conscious: Option<bool>,
    /// Reserved for future rules; carried but unused by decision logic.
    #[serde(default)]
    pub age: Option<u32>,
    /// Reserved for future rules; carried but unused by decision logic.
    #[serde(default)]
    pub gender: Option<Gender>,
    #[serde(default)]
    pub obvious_bleeding: Option<bool>,
}

impl CasualtyReportDraft {
    /// Validate required fields and produce an immutable report.
    /// Reports every missing required field, in declaration order.
    pub fn validate(&self) -> Result<CasualtyReport, TriageError> {
        let mut missing = Vec::new();
        if self.mechanism_of_injury.is_none() {
            missing.push("mechanismOfInjury");
        }
        if self.reported_symptoms.is_none() {
            missing.push("reportedSymptoms");
        }
        if self.conscious.is_none() {
            missing.push("conscious");
        }
        if !missing.is_empty() {
            return Err(TriageError::MissingFields { fields: missing });
        }

        Ok(CasualtyReport {
            mechanism_of_injury: self.mechanism_of_injury.clone().unwrap_or_default(),
            reported_symptoms: self.reported_symptoms.clone().unwrap_or_default(),
            conscious: self.conscious.unwrap_or(false),
            age: self.age,
            gender: self.gender,
            obvious_bleeding: self.obvious_bleeding.unwrap_or(false),
        })
    }
}

// ---------------------------------------------------------------------------
// CasualtyReport — validated input
// ---------------------------------------------------------------------------

/// Validated, immutable casualty report. Exposes the two matching
/// primitives every rule uses, so the engines stay free of string handling:
/// substring containment on the mechanism text, exact membership on the
/// symptom list, both case-insensitive.
#[derive(Debug, Clone, PartialEq)]
pub struct CasualtyReport {
    pub mechanism_of_injury: String,
    pub reported_symptoms: Vec<String>,
    pub conscious: bool,
    pub age: Option<u32>,
    pub gender: Option<Gender>,
    pub obvious_bleeding: bool,
}

impl CasualtyReport {
    /// Case-insensitive substring containment on the mechanism text.
    /// `needle` must already be lowercase.
    pub fn mechanism_contains(&self, needle: &str) -> bool {
        self.mechanism_of_injury.to_lowercase().contains(needle)
    }

    /// Case-insensitive exact membership in the symptom list (per element,
    /// not substring). `token` must already be lowercase.
    pub fn has_symptom(&self, token: &str) -> bool {
        self.reported_symptoms
            .iter()
            .any(|s| s.to_lowercase() == token)
    }
}
