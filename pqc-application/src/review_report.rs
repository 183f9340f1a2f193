use super::*;

pub use pqc_core::usecases::ReviewDecision;

pub fn review_report(
    connections: &memory::Connections,
    notify: &dyn NotificationGateway,
    actor: &Actor,
    report_id: &str,
    decision: ReviewDecision,
) -> Result<Report> {
    let usecases::ReportTransition { report, events, .. } =
        connections.exclusive()?.transaction(|conn| {
            usecases::review_report(conn, actor, report_id, decision).map_err(|err| {
                warn!("Failed to review report {report_id}: {err}");
                err
            })
        })?;
    dispatch(notify, events);
    Ok(report)
}
