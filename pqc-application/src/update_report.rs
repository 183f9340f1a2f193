use super::*;

#[allow(clippy::too_many_arguments)]
pub fn update_report(
    connections: &memory::Connections,
    geocoder: &dyn GeoCodingGateway,
    geofence: &Geofence,
    notify: &dyn NotificationGateway,
    actor: &Actor,
    report_id: &str,
    update: usecases::ReportUpdate,
) -> Result<Report> {
    let usecases::UpdatedReport { report, events } =
        connections.exclusive()?.transaction(|conn| {
            usecases::update_report(conn, geocoder, geofence, actor, report_id, update).map_err(
                |err| {
                    warn!("Failed to update report {report_id}: {err}");
                    err
                },
            )
        })?;
    dispatch(notify, events);
    Ok(report)
}

pub fn change_report_status(
    connections: &memory::Connections,
    notify: &dyn NotificationGateway,
    actor: &Actor,
    report_id: &str,
    status: &str,
) -> Result<Report> {
    let usecases::ReportTransition {
        report,
        old_status,
        events,
    } = connections.exclusive()?.transaction(|conn| {
        usecases::change_report_status(conn, actor, report_id, status).map_err(|err| {
            warn!("Failed to change status of report {report_id} to '{status}': {err}");
            err
        })
    })?;
    if old_status != report.status {
        info!(
            "Status of report {} changed from {old_status} to {}",
            report.id, report.status
        );
    }
    dispatch(notify, events);
    Ok(report)
}

pub fn delete_report(
    connections: &memory::Connections,
    actor: &Actor,
    report_id: &str,
) -> Result<()> {
    Ok(connections.exclusive()?.transaction(|conn| {
        usecases::delete_report(conn, actor, report_id).map_err(|err| {
            warn!("Failed to delete report {report_id}: {err}");
            err
        })
    })?)
}

#[cfg(test)]
mod tests {
    use super::super::tests::prelude::*;

    #[test]
    fn resident_edits_pending_approval_only() {
        let fixture = BackendFixture::new();
        let resident = fixture.register_resident("juan@example.com");
        let report = fixture.submit(&resident);
        let update = usecases::ReportUpdate {
            title: Some("Flooded street".into()),
            ..Default::default()
        };
        let edited = flows::update_report(
            &fixture.db_connections,
            &fixture.geocoder,
            &fixture.geofence,
            &fixture.notify,
            &resident,
            report.id.as_str(),
            update.clone(),
        )
        .unwrap();
        assert_eq!("Flooded street", edited.title);

        fixture.approve(&report);
        let err = flows::update_report(
            &fixture.db_connections,
            &fixture.geocoder,
            &fixture.geofence,
            &fixture.notify,
            &resident,
            report.id.as_str(),
            update,
        )
        .unwrap_err();
        assert!(matches!(err.parameter(), Some(usecases::Error::Forbidden)));
        let err = flows::delete_report(&fixture.db_connections, &resident, report.id.as_str())
            .unwrap_err();
        assert!(matches!(err.parameter(), Some(usecases::Error::Forbidden)));
    }

    #[test]
    fn unchanged_status_sends_nothing() {
        let fixture = BackendFixture::new();
        let captain = fixture.provision_captain("captain@example.com");
        let resident = fixture.register_resident("juan@example.com");
        let report = fixture.submit(&resident);
        fixture.approve(&report);
        fixture.notify.clear();
        let report = flows::change_report_status(
            &fixture.db_connections,
            &fixture.notify,
            &captain,
            report.id.as_str(),
            "pending",
        )
        .unwrap();
        assert_eq!(ReportStatus::Pending, report.status);
        assert!(fixture.notify.kinds().is_empty());
    }

    #[test]
    fn invalid_status_is_rejected() {
        let fixture = BackendFixture::new();
        let resident = fixture.register_resident("juan@example.com");
        let report = fixture.submit(&resident);
        let err = flows::change_report_status(
            &fixture.db_connections,
            &fixture.notify,
            &fixture.admin,
            report.id.as_str(),
            "archived",
        )
        .unwrap_err();
        assert!(matches!(err.parameter(), Some(usecases::Error::Status(_))));
    }
}
