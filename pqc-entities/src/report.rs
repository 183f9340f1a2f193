use strum::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

use crate::{geo::MapPoint, id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub id          : Id,
    pub title       : String,
    pub description : String,
    pub address     : String,
    pub pos         : Option<MapPoint>,
    pub status      : ReportStatus,
    pub priority    : Priority,
    pub created_by  : Id,
    pub barangay_id : Id,
    pub category_id : Id,
    pub created_at  : Timestamp,
    pub updated_at  : Timestamp,
    pub resolved_at : Option<Timestamp>,
}

impl Report {
    pub fn is_owned_by(&self, user_id: &Id) -> bool {
        &self.created_by == user_id
    }
}

/// Workflow position of a report.
///
/// The string representation is the persisted and
/// user-facing identifier, e.g. `pending_approval`.
#[rustfmt::skip]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, EnumCount, IntoStaticStr)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ReportStatus {
    PendingApproval,
    Pending,
    InProgress,
    Resolved,
    Closed,
    ReopenRequested,
}

impl ReportStatus {
    /// Every report starts here.
    pub const fn initial() -> Self {
        Self::PendingApproval
    }

    /// Resolved or closed.
    pub const fn is_settled(self) -> bool {
        matches!(self, Self::Resolved | Self::Closed)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::PendingApproval => "Pending Approval",
            Self::Pending => "Pending",
            Self::InProgress => "In Progress",
            Self::Resolved => "Resolved",
            Self::Closed => "Closed",
            Self::ReopenRequested => "Reopen Requested",
        }
    }
}

#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Critical,
}
