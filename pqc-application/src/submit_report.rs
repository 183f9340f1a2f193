use super::*;

pub fn submit_report(
    connections: &memory::Connections,
    geocoder: &dyn GeoCodingGateway,
    geofence: &Geofence,
    notify: &dyn NotificationGateway,
    actor: &Actor,
    new_report: usecases::NewReport,
) -> Result<Report> {
    let usecases::SubmittedReport {
        report,
        potential_spam,
        events,
    } = connections.exclusive()?.transaction(|conn| {
        usecases::submit_report(conn, geocoder, geofence, actor, new_report).map_err(|err| {
            warn!("Failed to submit new report: {err}");
            err
        })
    })?;
    if potential_spam {
        info!("Report {} needs a closer look: potential spam", report.id);
    }

    // Inform the admins
    dispatch(notify, events);

    Ok(report)
}
