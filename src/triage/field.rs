use crate::models::assessment::TriageAssessment;
use crate::models::enums::SeverityLevel;
use crate::models::report::CasualtyReport;

use super::reference::{
    owned, CARE_UNDER_FIRE_ACTIONS, FIELD_HEAT_FLAG, FIELD_HEMORRHAGE_FLAG,
    FIELD_PROTOCOL_SOURCE, FIELD_RED_FLAGS, FIELD_SURVEY_STEPS, FIELD_UNRESPONSIVE_FLAG,
    HEAT_INJURY_STEPS, HEAT_STROKE_SYMPTOM, LIFESAVING_STEPS,
};
use super::types::TriageProtocol;

/// Military field protocol: care-under-fire actions, ABC field survey, and
/// the lifesaving-steps priority list as next steps. Severity rule is
/// deliberately simpler than the civilian chain; the content is fixed
/// reference text, with one heat-injury extension.
pub struct FieldCareProtocol;

impl TriageProtocol for FieldCareProtocol {
    fn name(&self) -> &'static str {
        "military"
    }

    fn assess(&self, report: &CasualtyReport) -> TriageAssessment {
        let mut assessment = TriageAssessment {
            severity_level: SeverityLevel::Moderate,
            immediate_actions: owned(&CARE_UNDER_FIRE_ACTIONS),
            assessment_steps: owned(&FIELD_SURVEY_STEPS),
            red_flags: owned(&FIELD_RED_FLAGS),
            next_steps: owned(&LIFESAVING_STEPS),
            protocol_source: Some(FIELD_PROTOCOL_SOURCE.to_string()),
        };

        if !report.conscious {
            assessment.severity_level = SeverityLevel::Critical;
            assessment.red_flags.push(FIELD_UNRESPONSIVE_FLAG.to_string());
        } else if report.obvious_bleeding {
            assessment.severity_level = SeverityLevel::Serious;
            assessment.red_flags.push(FIELD_HEMORRHAGE_FLAG.to_string());
        }

        if report.has_symptom(HEAT_STROKE_SYMPTOM) {
            assessment.next_steps.extend(owned(&HEAT_INJURY_STEPS));
            assessment.red_flags.push(FIELD_HEAT_FLAG.to_string());
        }

        assessment
    }
}
