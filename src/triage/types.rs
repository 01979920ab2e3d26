use thiserror::Error;

use crate::models::assessment::TriageAssessment;
use crate::models::enums::SeverityLevel;
use crate::models::report::CasualtyReport;

use super::civilian::CivilianProtocol;
use super::field::FieldCareProtocol;
use super::reference;

// ---------------------------------------------------------------------------
// TriageProtocol trait
// ---------------------------------------------------------------------------

/// A triage rule set. Implementations are pure: same report in, same
/// assessment out, with every output list built fresh per call.
pub trait TriageProtocol {
    /// Short name used in logs and for protocol selection.
    fn name(&self) -> &'static str;

    /// Classify a validated casualty report.
    /// Total for validated input: cannot fail.
    fn assess(&self, report: &CasualtyReport) -> TriageAssessment;
}

// ---------------------------------------------------------------------------
// Protocol selector
// ---------------------------------------------------------------------------

/// Selects which rule set governs an assessment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Protocol {
    /// Civilian trauma protocol: ABCDE primary survey, priority chain.
    Civilian,
    /// Military field protocol: care-under-fire reference, ABC survey.
    Military,
}

impl Protocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Civilian => "civilian",
            Self::Military => "military",
        }
    }

    /// The engine implementing this protocol.
    pub fn engine(&self) -> &'static dyn TriageProtocol {
        match self {
            Self::Civilian => &CivilianProtocol,
            Self::Military => &FieldCareProtocol,
        }
    }
}

impl std::str::FromStr for Protocol {
    type Err = TriageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "civilian" => Ok(Self::Civilian),
            "military" => Ok(Self::Military),
            _ => Err(TriageError::InvalidEnum {
                field: "Protocol".into(),
                value: s.into(),
            }),
        }
    }
}

// ---------------------------------------------------------------------------
// TriageError
// ---------------------------------------------------------------------------

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriageError {
    #[error("Missing required patient data: {}", .fields.join(", "))]
    MissingFields { fields: Vec<&'static str> },

    #[error("Invalid value for {field}: {value}")]
    InvalidEnum { field: String, value: String },
}

impl TriageError {
    /// The legacy sentinel record older boundaries expect: severity
    /// `unknown` and an "Error:"-prefixed first immediate action. Kept for
    /// boundaries that still speak the old wire shape; new callers branch on
    /// the `Err` variant instead.
    pub fn sentinel_assessment(&self) -> TriageAssessment {
        TriageAssessment {
            severity_level: SeverityLevel::Unknown,
            immediate_actions: vec![reference::SENTINEL_IMMEDIATE_ACTION.to_string()],
            assessment_steps: Vec::new(),
            red_flags: vec![reference::SENTINEL_RED_FLAG.to_string()],
            next_steps: vec![reference::SENTINEL_NEXT_STEP.to_string()],
            protocol_source: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_lists_names_in_message() {
        let err = TriageError::MissingFields {
            fields: vec!["mechanismOfInjury", "conscious"],
        };
        assert_eq!(
            err.to_string(),
            "Missing required patient data: mechanismOfInjury, conscious"
        );
    }

    #[test]
    fn sentinel_matches_legacy_shape() {
        let err = TriageError::MissingFields {
            fields: vec!["conscious"],
        };
        let sentinel = err.sentinel_assessment();
        assert_eq!(sentinel.severity_level, SeverityLevel::Unknown);
        assert_eq!(
            sentinel.immediate_actions,
            vec![
                "Error: Missing required patient data (mechanismOfInjury, reportedSymptoms, conscious)."
            ]
        );
        assert!(sentinel.assessment_steps.is_empty());
        assert_eq!(sentinel.red_flags, vec!["Missing critical input data."]);
        assert_eq!(sentinel.next_steps, vec!["Re-submit with complete data."]);
        assert!(sentinel.immediate_actions[0].starts_with("Error:"));
    }

    #[test]
    fn protocol_from_str() {
        assert_eq!("civilian".parse::<Protocol>().unwrap(), Protocol::Civilian);
        assert_eq!("military".parse::<Protocol>().unwrap(), Protocol::Military);
        assert!("naval".parse::<Protocol>().is_err());
    }

    #[test]
    fn protocol_engine_names_match_selector() {
        assert_eq!(Protocol::Civilian.engine().name(), "civilian");
        assert_eq!(Protocol::Military.engine().name(), "military");
    }
}
