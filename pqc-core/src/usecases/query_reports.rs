use super::{load_report, parse_status, prelude::*};

/// Optional filters of a report listing.
#[derive(Debug, Clone, Default)]
pub struct ReportFilter {
    pub status: Option<String>,
    pub category_id: Option<String>,
    /// Only honored for actors that may filter by barangay.
    pub barangay_id: Option<String>,
}

/// Reports visible to the actor, newest first.
pub fn query_reports<R>(repo: &R, actor: &Actor, filter: ReportFilter) -> Result<Vec<Report>>
where
    R: ReportRepo,
{
    let ReportFilter {
        status,
        category_id,
        barangay_id,
    } = filter;
    let status = status.as_deref().map(parse_status).transpose()?;
    let policy = policy_for(actor);
    let mut query = ReportQuery::new(policy.visible_reports(actor));
    query.status = status;
    query.category_id = category_id.map(Id::from);
    if policy.can_filter_by_barangay() {
        query.barangay_id = barangay_id.map(Id::from);
    }
    Ok(repo.find_reports(&query)?)
}

#[derive(Debug, Clone)]
pub struct ReportDetails {
    pub report: Report,
    /// Oldest first.
    pub comments: Vec<Comment>,
}

pub fn get_report<R>(repo: &R, actor: &Actor, report_id: &str) -> Result<ReportDetails>
where
    R: ReportRepo + CommentRepo,
{
    let report = load_report(repo, report_id)?;
    if !policy_for(actor).can_view(actor, &report) {
        return Err(Error::Forbidden);
    }
    let comments = repo.load_comments_of_report(report.id.as_str())?;
    Ok(ReportDetails { report, comments })
}
