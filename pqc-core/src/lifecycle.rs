//! Workflow of a report.
//!
//! ```text
//! pending_approval --approve--> pending --> in_progress --> resolved --> closed
//! pending_approval --reject---> closed
//! resolved | closed --request_reopen--> reopen_requested --approve_reopen--> pending
//! ```
//!
//! All rules live in [`transition`]. It only decides, it never
//! touches a report. [`apply`] writes an accepted transition.

use thiserror::Error;

use crate::entities::{Report, ReportStatus, Role, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportAction {
    Submit,
    Approve,
    Reject,
    RequestReopen,
    ApproveReopen,
    ChangeStatus(ReportStatus),
}

impl ReportAction {
    /// Whether the role may ever perform this action.
    pub const fn is_permitted_for(self, role: Role) -> bool {
        use ReportAction as A;
        use Role as R;
        matches!(
            (self, role),
            (A::Submit, R::Resident | R::BarangayOfficial)
                | (A::Approve | A::Reject | A::ApproveReopen, R::Admin)
                | (A::RequestReopen, R::Resident)
                | (A::ChangeStatus(_), R::Admin | R::BarangayOfficial)
        )
    }
}

/// Who receives a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Audience {
    Admins,
    Creator,
    BarangayOfficial,
}

/// What a notification is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Notice {
    Submitted,
    Approved,
    Forwarded,
    Rejected,
    StatusChanged,
    ReopenRequested,
    ReopenApproved,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    Notify { audience: Audience, notice: Notice },
    StampResolvedAt,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// `None` for new reports.
    pub from: Option<ReportStatus>,
    pub to: ReportStatus,
    pub effects: Vec<Effect>,
}

impl Transition {
    pub fn is_change(&self) -> bool {
        self.from != Some(self.to)
    }

    pub fn notifications(&self) -> impl Iterator<Item = (Audience, Notice)> + '_ {
        self.effects.iter().filter_map(|e| match e {
            Effect::Notify { audience, notice } => Some((*audience, *notice)),
            Effect::StampResolvedAt => None,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("You are not authorized to perform this action")]
    NotPermitted,
    #[error("The report is no longer awaiting approval")]
    NotPendingApproval,
    #[error("Only resolved or closed reports can be reopened")]
    NotSettled,
    #[error("A reopen request for this report is already pending")]
    AlreadyReopenRequested,
    #[error("There is no pending reopen request for this report")]
    NoReopenRequest,
    #[error("The report is already submitted")]
    AlreadySubmitted,
    #[error("Cannot change the status from {} to {}", .from.label(), .to.label())]
    InvalidStatusChange {
        from: ReportStatus,
        to: ReportStatus,
    },
}

const fn notify(audience: Audience, notice: Notice) -> Effect {
    Effect::Notify { audience, notice }
}

/// Forward edges of a plain status update.
pub const fn is_forward_edge(from: ReportStatus, to: ReportStatus) -> bool {
    use ReportStatus as S;
    matches!(
        (from, to),
        (S::Pending, S::InProgress | S::Resolved | S::Closed)
            | (S::InProgress, S::Resolved | S::Closed)
            | (S::Resolved, S::Closed)
    )
}

/// Decides whether `role` may perform `action` on a report
/// in state `current` (`None` for a report that does not exist yet).
pub fn transition(
    current: Option<ReportStatus>,
    action: ReportAction,
    role: Role,
) -> Result<Transition, TransitionError> {
    use Audience as Au;
    use ReportAction as A;
    use ReportStatus as S;

    if !action.is_permitted_for(role) {
        return Err(TransitionError::NotPermitted);
    }

    let Some(from) = current else {
        return match action {
            A::Submit => Ok(Transition {
                from: None,
                to: S::initial(),
                effects: vec![notify(Au::Admins, Notice::Submitted)],
            }),
            _ => Err(TransitionError::NotPermitted),
        };
    };

    let (to, effects) = match (action, from) {
        (A::Submit, _) => return Err(TransitionError::AlreadySubmitted),
        (A::Approve, S::PendingApproval) => (
            S::Pending,
            vec![
                notify(Au::BarangayOfficial, Notice::Forwarded),
                notify(Au::Creator, Notice::Approved),
            ],
        ),
        (A::Reject, S::PendingApproval) => (S::Closed, vec![notify(Au::Creator, Notice::Rejected)]),
        (A::Approve | A::Reject, _) => return Err(TransitionError::NotPendingApproval),
        (A::RequestReopen, S::Resolved | S::Closed) => (
            S::ReopenRequested,
            vec![notify(Au::Admins, Notice::ReopenRequested)],
        ),
        (A::RequestReopen, S::ReopenRequested) => {
            return Err(TransitionError::AlreadyReopenRequested)
        }
        (A::RequestReopen, _) => return Err(TransitionError::NotSettled),
        (A::ApproveReopen, S::ReopenRequested) => (
            S::Pending,
            vec![notify(Au::Creator, Notice::ReopenApproved)],
        ),
        (A::ApproveReopen, _) => return Err(TransitionError::NoReopenRequest),
        (A::ChangeStatus(to), from) if to == from => {
            let effects = if to == S::Resolved {
                vec![Effect::StampResolvedAt]
            } else {
                vec![]
            };
            (to, effects)
        }
        (A::ChangeStatus(to), from) if is_forward_edge(from, to) => {
            let mut effects = vec![notify(Au::Creator, Notice::StatusChanged)];
            if to == S::Resolved {
                effects.push(Effect::StampResolvedAt);
            }
            (to, effects)
        }
        (A::ChangeStatus(to), from) => {
            return Err(TransitionError::InvalidStatusChange { from, to })
        }
    };

    Ok(Transition {
        from: Some(from),
        to,
        effects,
    })
}

/// Writes an accepted transition into the report.
///
/// `resolved_at` is stamped only once.
pub fn apply(report: &mut Report, transition: &Transition, now: Timestamp) {
    debug_assert!(transition.from.is_none() || transition.from == Some(report.status));
    report.status = transition.to;
    if transition.is_change() {
        report.updated_at = now;
    }
    if transition.effects.contains(&Effect::StampResolvedAt) && report.resolved_at.is_none() {
        report.resolved_at = Some(now);
    }
}
