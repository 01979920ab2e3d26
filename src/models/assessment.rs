use serde::{Deserialize, Serialize};

use crate::models::enums::SeverityLevel;

/// Result of one triage assessment, in the wire's snake_case keys.
/// Order inside `immediate_actions` encodes priority (first-listed =
/// do-first). `assessment_steps` and the base `next_steps` are reference
/// checklists, constant across all successful assessments of a protocol;
/// only `severity_level`, `immediate_actions`, and `red_flags` vary with
/// input (plus the field protocol's heat-injury next-step extension).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TriageAssessment {
    pub severity_level: SeverityLevel,
    pub immediate_actions: Vec<String>,
    pub assessment_steps: Vec<String>,
    pub red_flags: Vec<String>,
    pub next_steps: Vec<String>,
    /// Provenance label; set by the field protocol only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub protocol_source: Option<String>,
}

impl TriageAssessment {
    /// Raise severity to at least `floor`. Escalation rules never lower it.
    pub fn escalate_to_at_least(&mut self, floor: SeverityLevel) {
        if self.severity_level < floor {
            self.severity_level = floor;
        }
    }
}
