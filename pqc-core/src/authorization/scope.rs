use crate::entities::{Id, Report, ReportStatus};

/// The reports an actor is allowed to see.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportScope {
    All,
    Barangay {
        barangay_id: Id,
        /// Hide reports that still await approval.
        approved_only: bool,
    },
    Nothing,
}

impl ReportScope {
    pub fn contains(&self, report: &Report) -> bool {
        match self {
            Self::All => true,
            Self::Barangay {
                barangay_id,
                approved_only,
            } => {
                &report.barangay_id == barangay_id
                    && !(*approved_only && report.status == ReportStatus::PendingApproval)
            }
            Self::Nothing => false,
        }
    }
}
