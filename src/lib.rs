//! Rule-based trauma severity triage.
//!
//! Maps a structured casualty report to a severity level, a prioritized set
//! of immediate actions, a fixed assessment checklist, triggered red flags,
//! and follow-up steps. Two rule sets are available behind one interface:
//! the civilian trauma protocol (ABCDE primary survey) and a military field
//! first-aid protocol (care-under-fire reference). Classification is pure
//! and stateless; every output list is built fresh per call.

pub mod config;
pub mod models;
pub mod triage;

pub use models::{CasualtyReport, CasualtyReportDraft, Gender, SeverityLevel, TriageAssessment};
pub use triage::{assess, CivilianProtocol, FieldCareProtocol, Protocol, TriageError, TriageProtocol};
