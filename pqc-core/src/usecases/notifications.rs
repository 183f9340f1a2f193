//! Turns the effects of a transition into notification events.

use super::prelude::*;
use crate::{
    gateways::notify::ReportDigest,
    lifecycle::{Audience, Notice, Transition},
};

pub(crate) fn digest<R>(repo: &R, report: &Report) -> Result<ReportDigest>
where
    R: UserRepo + BarangayRepo + CategoryRepo,
{
    let barangay_name = repo.get_barangay(report.barangay_id.as_str())?.name;
    let category_name = repo.get_category(report.category_id.as_str())?.name;
    let creator_email = repo.get_user(report.created_by.as_str())?.email;
    Ok(ReportDigest {
        report: report.clone(),
        barangay_name,
        category_name,
        creator_email,
    })
}

pub(crate) fn recipients<R>(repo: &R, audience: Audience, report: &Report) -> Result<Vec<EmailAddress>>
where
    R: UserRepo,
{
    let users = match audience {
        Audience::Admins => repo.users_with_role(Role::Admin)?,
        Audience::Creator => vec![repo.get_user(report.created_by.as_str())?],
        Audience::BarangayOfficial => repo
            .find_official_of_barangay(report.barangay_id.as_str())?
            .into_iter()
            .collect(),
    };
    Ok(users
        .into_iter()
        .filter(User::is_active)
        .map(|u| u.email)
        .collect())
}

/// Events for all notifications of an accepted transition.
///
/// Audiences without any active recipient are skipped.
pub(crate) fn transition_events<R>(
    repo: &R,
    transition: &Transition,
    report: &Report,
    potential_spam: bool,
) -> Result<Vec<NotificationEvent>>
where
    R: Db,
{
    let mut events = vec![];
    for (audience, notice) in transition.notifications() {
        let email_addresses = recipients(repo, audience, report)?;
        if email_addresses.is_empty() {
            log::debug!("No recipients for {notice:?} of report {}", report.id);
            continue;
        }
        let report = digest(repo, report)?;
        use NotificationEvent as E;
        let event = match notice {
            Notice::Submitted => E::ReportSubmitted {
                email_addresses,
                report,
                potential_spam,
            },
            Notice::Approved => E::ReportApproved {
                email_addresses,
                report,
            },
            Notice::Forwarded => E::ReportForwarded {
                email_addresses,
                report,
            },
            Notice::Rejected => E::ReportRejected {
                email_addresses,
                report,
            },
            Notice::StatusChanged => E::StatusChanged {
                email_addresses,
                report,
                old_status: transition.from.unwrap_or_else(ReportStatus::initial),
            },
            Notice::ReopenRequested => E::ReopenRequested {
                email_addresses,
                report,
            },
            Notice::ReopenApproved => E::ReopenApproved {
                email_addresses,
                report,
            },
        };
        events.push(event);
    }
    Ok(events)
}
