use super::*;

/// The creator of a settled report asks the admins to reopen it.
pub fn request_reopen(
    connections: &memory::Connections,
    notify: &dyn NotificationGateway,
    actor: &Actor,
    report_id: &str,
) -> Result<Report> {
    let usecases::ReportTransition { report, events, .. } =
        connections.exclusive()?.transaction(|conn| {
            usecases::request_reopen(conn, actor, report_id).map_err(|err| {
                warn!("Failed to request reopening report {report_id}: {err}");
                err
            })
        })?;
    dispatch(notify, events);
    Ok(report)
}

pub fn approve_reopen(
    connections: &memory::Connections,
    notify: &dyn NotificationGateway,
    actor: &Actor,
    report_id: &str,
) -> Result<Report> {
    let usecases::ReportTransition { report, events, .. } =
        connections.exclusive()?.transaction(|conn| {
            usecases::approve_reopen(conn, actor, report_id).map_err(|err| {
                warn!("Failed to reopen report {report_id}: {err}");
                err
            })
        })?;
    dispatch(notify, events);
    Ok(report)
}
