use super::{prelude::*, transition_report::*};
use crate::lifecycle::ReportAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject,
}

/// Admin decision on a report awaiting approval.
///
/// Approved reports are forwarded to the captain of the
/// barangay, rejected reports are closed.
pub fn review_report<R>(
    repo: &R,
    actor: &Actor,
    report_id: &str,
    decision: ReviewDecision,
) -> Result<ReportTransition>
where
    R: Db,
{
    let action = match decision {
        ReviewDecision::Approve => ReportAction::Approve,
        ReviewDecision::Reject => ReportAction::Reject,
    };
    transition_report(repo, actor, report_id, Mutation::Review, action)
}

#[cfg(test)]
mod tests {
    use super::super::tests::*;
    use super::*;
    use crate::lifecycle::TransitionError;

    #[test]
    fn approve_notifies_official_and_creator() {
        let fixture = Fixture::new();
        let report = fixture.add_report(ReportStatus::PendingApproval);
        let res = review_report(
            &fixture.db,
            &fixture.admin(),
            report.id.as_str(),
            ReviewDecision::Approve,
        )
        .unwrap();
        assert_eq!(ReportStatus::Pending, res.report.status);
        match &res.events[..] {
            [NotificationEvent::ReportForwarded {
                email_addresses: to_official,
                ..
            }, NotificationEvent::ReportApproved {
                email_addresses: to_creator,
                ..
            }] => {
                assert_eq!(&vec![fixture.official_email()], to_official);
                assert_eq!(&vec![fixture.resident_email()], to_creator);
            }
            e => panic!("Unexpected events {e:?}"),
        }
    }

    #[test]
    fn approve_without_captain_only_notifies_creator() {
        let fixture = Fixture::new();
        fixture.db.users.borrow_mut().retain(|u| u.role != Role::BarangayOfficial);
        let report = fixture.add_report(ReportStatus::PendingApproval);
        let res = review_report(
            &fixture.db,
            &fixture.admin(),
            report.id.as_str(),
            ReviewDecision::Approve,
        )
        .unwrap();
        assert!(matches!(
            &res.events[..],
            [NotificationEvent::ReportApproved { .. }]
        ));
    }

    #[test]
    fn reject_closes_and_notifies_creator() {
        let fixture = Fixture::new();
        let report = fixture.add_report(ReportStatus::PendingApproval);
        let res = review_report(
            &fixture.db,
            &fixture.admin(),
            report.id.as_str(),
            ReviewDecision::Reject,
        )
        .unwrap();
        assert_eq!(ReportStatus::Closed, res.report.status);
        assert!(res.report.resolved_at.is_none());
        assert!(matches!(
            &res.events[..],
            [NotificationEvent::ReportRejected { .. }]
        ));
    }

    #[test]
    fn review_only_once() {
        let fixture = Fixture::new();
        let report = fixture.add_report(ReportStatus::Pending);
        let err = review_report(
            &fixture.db,
            &fixture.admin(),
            report.id.as_str(),
            ReviewDecision::Reject,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            Error::Transition(TransitionError::NotPendingApproval)
        ));
    }

    #[test]
    fn only_admins_review() {
        let fixture = Fixture::new();
        let report = fixture.add_report(ReportStatus::PendingApproval);
        for actor in [fixture.resident(), fixture.official()] {
            let err = review_report(
                &fixture.db,
                &actor,
                report.id.as_str(),
                ReviewDecision::Approve,
            )
            .unwrap_err();
            assert!(matches!(err, Error::Forbidden));
        }
    }
}
