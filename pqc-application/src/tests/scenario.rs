use super::prelude::*;

fn recipients(event: &NotificationEvent) -> Vec<&str> {
    event.recipients().into_iter().map(|e| e.as_str()).collect()
}

#[test]
fn report_from_submission_to_reopening() {
    let fixture = BackendFixture::new();
    let captain = fixture.provision_captain("captain@example.com");
    let resident = fixture.register_resident("juan@example.com");

    // Submit
    let report = fixture.submit(&resident);
    assert_eq!(ReportStatus::PendingApproval, report.status);
    let events = fixture.notify.take();
    assert_eq!(1, events.len());
    assert!(matches!(
        events[0],
        NotificationEvent::ReportSubmitted {
            potential_spam: false,
            ..
        }
    ));
    assert_eq!(vec!["admin@example.com"], recipients(&events[0]));

    // The captain can't see it yet
    let err = flows::get_report(&fixture.db_connections, &captain, report.id.as_str()).unwrap_err();
    assert!(matches!(err.parameter(), Some(usecases::Error::Forbidden)));

    // Approve
    let report = fixture.approve(&report);
    assert_eq!(ReportStatus::Pending, report.status);
    let events = fixture.notify.take();
    assert_eq!(
        vec![
            NotificationType::ReportForwarded,
            NotificationType::ReportApproved
        ],
        events.iter().map(NotificationEvent::kind).collect::<Vec<_>>()
    );
    assert_eq!(vec!["captain@example.com"], recipients(&events[0]));
    assert_eq!(vec!["juan@example.com"], recipients(&events[1]));

    // Resolve
    let report = flows::change_report_status(
        &fixture.db_connections,
        &fixture.notify,
        &captain,
        report.id.as_str(),
        "resolved",
    )
    .unwrap();
    assert_eq!(ReportStatus::Resolved, report.status);
    let resolved_at = report.resolved_at;
    assert!(resolved_at.is_some());
    let events = fixture.notify.take();
    match &events[..] {
        [NotificationEvent::StatusChanged {
            old_status,
            report: digest,
            ..
        }] => {
            assert_eq!(ReportStatus::Pending, *old_status);
            assert_eq!(ReportStatus::Resolved, digest.report.status);
            assert_eq!("San Dionisio", digest.barangay_name);
            assert_eq!("Drainage", digest.category_name);
        }
        _ => panic!("Unexpected notifications: {events:?}"),
    }

    // Request reopen
    let report = flows::request_reopen(
        &fixture.db_connections,
        &fixture.notify,
        &resident,
        report.id.as_str(),
    )
    .unwrap();
    assert_eq!(ReportStatus::ReopenRequested, report.status);
    assert_eq!(
        vec![NotificationType::ReopenRequested],
        fixture.notify.kinds()
    );
    let events = fixture.notify.take();
    assert_eq!(vec!["admin@example.com"], recipients(&events[0]));

    // Asking twice is refused
    let err = flows::request_reopen(
        &fixture.db_connections,
        &fixture.notify,
        &resident,
        report.id.as_str(),
    )
    .unwrap_err();
    assert!(matches!(
        err.parameter(),
        Some(usecases::Error::Transition(_))
    ));

    // Approve reopen
    let report = flows::approve_reopen(
        &fixture.db_connections,
        &fixture.notify,
        &fixture.admin,
        report.id.as_str(),
    )
    .unwrap();
    assert_eq!(ReportStatus::Pending, report.status);
    assert_eq!(resolved_at, report.resolved_at);
    let events = fixture.notify.take();
    assert_eq!(
        vec![NotificationType::ReopenApproved],
        events.iter().map(NotificationEvent::kind).collect::<Vec<_>>()
    );
    assert_eq!(vec!["juan@example.com"], recipients(&events[0]));

    // The stored report matches
    let details =
        flows::get_report(&fixture.db_connections, &captain, report.id.as_str()).unwrap();
    assert_eq!(report, details.report);
}

#[test]
fn official_cannot_touch_other_barangays() {
    let fixture = BackendFixture::new();
    let resident = fixture.register_resident("juan@example.com");
    let report = fixture.submit(&resident);
    fixture.approve(&report);

    let tambo = flows::create_barangay(
        &fixture.db_connections,
        &fixture.geocoder,
        &fixture.admin,
        usecases::NewBarangay {
            name: "Tambo".into(),
            address: Some("Tambo, Parañaque City".into()),
            ..Default::default()
        },
    )
    .unwrap();
    let other_captain = flows::provision_captain(
        &fixture.db_connections,
        &fixture.notify,
        &fixture.admin,
        usecases::NewCaptain {
            email: "tambo@example.com".into(),
            barangay_id: tambo.id.to_string(),
        },
    )
    .unwrap();
    let other_captain = Actor::from(&other_captain);
    fixture.notify.clear();

    let err = flows::change_report_status(
        &fixture.db_connections,
        &fixture.notify,
        &other_captain,
        report.id.as_str(),
        "in_progress",
    )
    .unwrap_err();
    assert!(matches!(err.parameter(), Some(usecases::Error::Forbidden)));
    assert!(fixture.notify.kinds().is_empty());
}
