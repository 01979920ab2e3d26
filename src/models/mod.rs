pub mod assessment;
pub mod enums;
pub mod report;

pub use assessment::TriageAssessment;
pub use enums::{Gender, SeverityLevel};
pub use report::{CasualtyReport, CasualtyReportDraft};
