use super::{load_report, notifications::transition_events, parse_status, prelude::*};
use crate::lifecycle::{self, ReportAction};

#[derive(Debug)]
pub struct ReportTransition {
    pub report: Report,
    pub old_status: ReportStatus,
    pub events: Vec<NotificationEvent>,
}

pub(crate) fn transition_report<R>(
    repo: &R,
    actor: &Actor,
    report_id: &str,
    mutation: Mutation,
    action: ReportAction,
) -> Result<ReportTransition>
where
    R: Db,
{
    let mut report = load_report(repo, report_id)?;
    let policy = policy_for(actor);
    if !policy.can_view(actor, &report) {
        return Err(Error::Forbidden);
    }
    // Workflow guard errors take precedence over the policy refusal
    let transition = lifecycle::transition(Some(report.status), action, actor.role)?;
    if !policy.can_mutate(actor, &report, mutation) {
        log::debug!(
            "User {} may not {mutation:?} report {}",
            actor.user_id,
            report.id
        );
        return Err(Error::Forbidden);
    }
    let old_status = report.status;
    lifecycle::apply(&mut report, &transition, Timestamp::now());
    if transition.is_change() {
        repo.update_report(&report)?;
        log::info!(
            "Report {} changed from {old_status} to {} by user {}",
            report.id,
            report.status,
            actor.user_id
        );
    }
    let events = transition_events(repo, &transition, &report, false)?;
    Ok(ReportTransition {
        report,
        old_status,
        events,
    })
}

/// Moves a report forward in its workflow.
///
/// The status is parsed before anything else is touched.
pub fn change_report_status<R>(
    repo: &R,
    actor: &Actor,
    report_id: &str,
    status: &str,
) -> Result<ReportTransition>
where
    R: Db,
{
    let status = parse_status(status)?;
    transition_report(
        repo,
        actor,
        report_id,
        Mutation::ChangeStatus,
        ReportAction::ChangeStatus(status),
    )
}
