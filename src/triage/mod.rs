pub mod civilian;
pub mod field;
pub mod reference;
pub mod types;

pub use civilian::CivilianProtocol;
pub use field::FieldCareProtocol;
pub use types::{Protocol, TriageError, TriageProtocol};

use crate::models::assessment::TriageAssessment;
use crate::models::report::CasualtyReportDraft;

/// Classify a raw casualty report under the selected protocol.
/// Validates required fields, dispatches to the protocol's engine, and
/// returns the assessment. Stateless; safe to call concurrently.
pub fn assess(
    draft: &CasualtyReportDraft,
    protocol: Protocol,
) -> Result<TriageAssessment, TriageError> {
    let report = draft.validate().map_err(|err| {
        tracing::warn!(protocol = protocol.as_str(), %err, "Casualty report rejected");
        err
    })?;

    let assessment = protocol.engine().assess(&report);

    tracing::debug!(
        protocol = protocol.as_str(),
        severity = assessment.severity_level.as_str(),
        red_flags = assessment.red_flags.len(),
        "Triage assessment complete"
    );

    Ok(assessment)
}
