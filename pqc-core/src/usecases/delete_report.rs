use super::{load_report, prelude::*};

/// Deletes a report together with its comments.
pub fn delete_report<R>(repo: &R, actor: &Actor, report_id: &str) -> Result<()>
where
    R: ReportRepo + CommentRepo,
{
    let report = load_report(repo, report_id)?;
    if !policy_for(actor).can_mutate(actor, &report, Mutation::Delete) {
        return Err(Error::Forbidden);
    }
    purge_report(repo, report.id.as_str())?;
    log::info!("Report {} deleted by user {}", report.id, actor.user_id);
    Ok(())
}

pub(crate) fn purge_report<R>(repo: &R, report_id: &str) -> Result<()>
where
    R: ReportRepo + CommentRepo,
{
    let comment_count = repo.delete_comments_of_report(report_id)?;
    repo.delete_report(report_id)?;
    log::debug!("Deleted report {report_id} with {comment_count} comment(s)");
    Ok(())
}
