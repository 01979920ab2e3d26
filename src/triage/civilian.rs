use crate::models::assessment::TriageAssessment;
use crate::models::enums::SeverityLevel;
use crate::models::report::CasualtyReport;

use super::reference::{
    owned, AIRWAY_ACTION, ARTERIAL_MARKER, BASE_RED_FLAGS, BLEEDING_CONTROL_ACTION, BLEEDING_FLAG,
    BREATHING_DISTRESS_SYMPTOMS, BREATHING_FLAG, CHEST_PAIN_FLAG, CHEST_PAIN_SYMPTOM, CPR_ACTION,
    FOLLOW_UP_STEPS, HIGH_RISK_MECHANISMS, HIGH_RISK_MECHANISM_FLAG, PRIMARY_SURVEY_STEPS,
    SEVERE_BLEEDING_SYMPTOM, SPINAL_ACTION, UNCONSCIOUS_FLAG, UNIVERSAL_ACTIONS,
};
use super::types::TriageProtocol;

/// Civilian trauma protocol: ABCDE primary survey with a first-match-wins
/// priority chain, plus one cross-cutting chest-pain escalation.
pub struct CivilianProtocol;

impl TriageProtocol for CivilianProtocol {
    fn name(&self) -> &'static str {
        "civilian"
    }

    fn assess(&self, report: &CasualtyReport) -> TriageAssessment {
        let mut assessment = TriageAssessment {
            severity_level: SeverityLevel::Unknown,
            immediate_actions: owned(&UNIVERSAL_ACTIONS),
            assessment_steps: owned(&PRIMARY_SURVEY_STEPS),
            red_flags: owned(&BASE_RED_FLAGS),
            next_steps: owned(&FOLLOW_UP_STEPS),
            protocol_source: None,
        };

        // Priority chain: first matching branch wins. Condition-specific
        // actions go to index 1, directly after the two universal actions,
        // except the spinal action which is appended at the end.
        if !report.conscious {
            assessment.severity_level = SeverityLevel::Critical;
            assessment.immediate_actions.insert(1, CPR_ACTION.to_string());
            assessment.red_flags.push(UNCONSCIOUS_FLAG.to_string());
        } else if report.obvious_bleeding || report.has_symptom(SEVERE_BLEEDING_SYMPTOM) {
            assessment.severity_level = if report.mechanism_contains(ARTERIAL_MARKER) {
                SeverityLevel::Critical
            } else {
                SeverityLevel::Serious
            };
            assessment
                .immediate_actions
                .insert(1, BLEEDING_CONTROL_ACTION.to_string());
            assessment.red_flags.push(BLEEDING_FLAG.to_string());
        } else if BREATHING_DISTRESS_SYMPTOMS
            .iter()
            .any(|s| report.has_symptom(s))
        {
            assessment.severity_level = SeverityLevel::Critical;
            assessment
                .immediate_actions
                .insert(1, AIRWAY_ACTION.to_string());
            assessment.red_flags.push(BREATHING_FLAG.to_string());
        } else if HIGH_RISK_MECHANISMS
            .iter()
            .any(|m| report.mechanism_contains(m))
        {
            assessment.severity_level = SeverityLevel::Serious;
            assessment.immediate_actions.push(SPINAL_ACTION.to_string());
            assessment
                .red_flags
                .push(HIGH_RISK_MECHANISM_FLAG.to_string());
        } else {
            // Conscious casualty, no matched trigger.
            assessment.severity_level = SeverityLevel::Moderate;
        }

        // Cross-cutting: chest pain flags cardiac/thoracic risk and raises
        // severity to at least serious, regardless of the branch taken.
        if report.has_symptom(CHEST_PAIN_SYMPTOM) {
            assessment.red_flags.push(CHEST_PAIN_FLAG.to_string());
            assessment.escalate_to_at_least(SeverityLevel::Serious);
        }

        assessment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::report::CasualtyReportDraft;

    fn report(
        mechanism: &str,
        symptoms: &[&str],
        conscious: bool,
        obvious_bleeding: Option<bool>,
    ) -> CasualtyReport {
        CasualtyReportDraft {
            mechanism_of_injury: Some(mechanism.into()),
            reported_symptoms: Some(symptoms.iter().map(|s| s.to_string()).collect()),
            conscious: Some(conscious),
            obvious_bleeding,
            ..Default::default()
        }
        .validate()
        .unwrap()
    }

    fn assess(r: &CasualtyReport) -> TriageAssessment {
        CivilianProtocol.assess(r)
    }

    #[test]
    fn unconscious_is_critical_with_cpr_second() {
        let a = assess(&report(
            "Fall from 20ft ladder",
            &["unresponsive", "visible head wound"],
            false,
            Some(true),
        ));
        assert_eq!(a.severity_level, SeverityLevel::Critical);
        assert_eq!(a.immediate_actions[0], UNIVERSAL_ACTIONS[0]);
        assert_eq!(a.immediate_actions[1], CPR_ACTION);
        assert_eq!(a.immediate_actions[2], UNIVERSAL_ACTIONS[1]);
        assert!(a.red_flags.contains(&UNCONSCIOUS_FLAG.to_string()));
    }

    #[test]
    fn arterial_bleeding_is_critical() {
        let a = assess(&report("Arterial laceration from saw", &[], true, Some(true)));
        assert_eq!(a.severity_level, SeverityLevel::Critical);
        assert_eq!(a.immediate_actions[1], BLEEDING_CONTROL_ACTION);
    }

    #[test]
    fn non_arterial_bleeding_is_serious() {
        let a = assess(&report("Cut on broken glass", &[], true, Some(true)));
        assert_eq!(a.severity_level, SeverityLevel::Serious);
        assert_eq!(a.immediate_actions[1], BLEEDING_CONTROL_ACTION);
        assert!(a.red_flags.contains(&BLEEDING_FLAG.to_string()));
    }

    #[test]
    fn reported_severe_bleeding_matches_without_observed_flag() {
        let a = assess(&report("Unknown", &["Severe Bleeding"], true, None));
        assert_eq!(a.severity_level, SeverityLevel::Serious);
        assert_eq!(a.immediate_actions[1], BLEEDING_CONTROL_ACTION);
    }

    #[test]
    fn breathing_distress_is_critical_any_casing() {
        let a = assess(&report("Unknown", &["Shortness Of Breath"], true, None));
        assert_eq!(a.severity_level, SeverityLevel::Critical);
        assert_eq!(a.immediate_actions[1], AIRWAY_ACTION);
        assert!(a.red_flags.contains(&BREATHING_FLAG.to_string()));
    }

    #[test]
    fn every_breathing_token_triggers_the_branch() {
        for token in BREATHING_DISTRESS_SYMPTOMS {
            let a = assess(&report("Unknown", &[token], true, None));
            assert_eq!(a.severity_level, SeverityLevel::Critical, "token: {token}");
        }
    }

    #[test]
    fn high_risk_mechanism_is_serious_with_spinal_action_last() {
        let a = assess(&report(
            "High-speed Motor Vehicle Accident on highway",
            &["neck pain"],
            true,
            None,
        ));
        assert_eq!(a.severity_level, SeverityLevel::Serious);
        assert_eq!(a.immediate_actions.last().unwrap(), SPINAL_ACTION);
        assert!(a.red_flags.contains(&HIGH_RISK_MECHANISM_FLAG.to_string()));
    }

    #[test]
    fn every_high_risk_mechanism_triggers_the_branch() {
        for mechanism in HIGH_RISK_MECHANISMS {
            let a = assess(&report(mechanism, &[], true, None));
            assert_eq!(a.severity_level, SeverityLevel::Serious, "mechanism: {mechanism}");
        }
    }

    #[test]
    fn unmatched_conscious_input_is_moderate_with_fixed_checklists() {
        let a = assess(&report("stubbed toe", &["mild pain"], true, None));
        assert_eq!(a.severity_level, SeverityLevel::Moderate);
        assert_eq!(a.assessment_steps, owned(&PRIMARY_SURVEY_STEPS));
        assert_eq!(a.next_steps, owned(&FOLLOW_UP_STEPS));
        assert_eq!(a.immediate_actions, owned(&UNIVERSAL_ACTIONS));
        assert_eq!(a.red_flags, owned(&BASE_RED_FLAGS));
    }

    #[test]
    fn chest_pain_escalates_moderate_to_serious() {
        let a = assess(&report("stubbed toe", &["mild pain", "chest pain"], true, None));
        assert_eq!(a.severity_level, SeverityLevel::Serious);
        assert!(a.red_flags.contains(&CHEST_PAIN_FLAG.to_string()));
    }

    #[test]
    fn chest_pain_never_lowers_critical() {
        let a = assess(&report("Unknown", &["gasping", "chest pain"], true, None));
        assert_eq!(a.severity_level, SeverityLevel::Critical);
        assert!(a.red_flags.contains(&CHEST_PAIN_FLAG.to_string()));
    }

    #[test]
    fn first_match_wins_bleeding_suppresses_mechanism_branch() {
        // Bleeding and a high-risk mechanism together: only the bleeding
        // branch's effects apply.
        let a = assess(&report("Motor vehicle accident", &[], true, Some(true)));
        assert_eq!(a.severity_level, SeverityLevel::Serious);
        assert_eq!(a.immediate_actions[1], BLEEDING_CONTROL_ACTION);
        assert!(!a.immediate_actions.contains(&SPINAL_ACTION.to_string()));
        assert!(!a.red_flags.contains(&HIGH_RISK_MECHANISM_FLAG.to_string()));
    }

    #[test]
    fn assessment_is_idempotent() {
        let r = report("Fall from height", &["chest pain"], true, None);
        assert_eq!(assess(&r), assess(&r));
    }

    #[test]
    fn calls_never_observe_each_other_insertions() {
        let bleeding = report("Cut on broken glass", &[], true, Some(true));
        let calm = report("stubbed toe", &["mild pain"], true, None);
        for _ in 0..50 {
            let a = assess(&bleeding);
            let b = assess(&calm);
            assert!(a.immediate_actions.contains(&BLEEDING_CONTROL_ACTION.to_string()));
            assert!(!b.immediate_actions.contains(&BLEEDING_CONTROL_ACTION.to_string()));
            assert_eq!(b.immediate_actions, owned(&UNIVERSAL_ACTIONS));
            assert_eq!(b.red_flags, owned(&BASE_RED_FLAGS));
        }
    }
}
