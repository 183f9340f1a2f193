use super::{prelude::*, transition_report::*};
use crate::lifecycle::ReportAction;

/// The creator asks to reopen a resolved or closed report.
pub fn request_reopen<R>(repo: &R, actor: &Actor, report_id: &str) -> Result<ReportTransition>
where
    R: Db,
{
    transition_report(
        repo,
        actor,
        report_id,
        Mutation::RequestReopen,
        ReportAction::RequestReopen,
    )
}

pub fn approve_reopen<R>(repo: &R, actor: &Actor, report_id: &str) -> Result<ReportTransition>
where
    R: Db,
{
    transition_report(
        repo,
        actor,
        report_id,
        Mutation::Review,
        ReportAction::ApproveReopen,
    )
}
