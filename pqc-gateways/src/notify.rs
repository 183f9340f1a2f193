use std::{collections::HashSet, sync::Arc};

use pqc_core::gateways::notify::{NotificationEvent, NotificationGateway, NotificationType};
use pqc_entities::email::*;

use crate::{email::EmailGateway, user_communication};

#[derive(Clone)]
pub struct Notify {
    email_gw: Arc<dyn EmailGateway + Send + Sync + 'static>,
    notify_on: HashSet<NotificationType>,
}

impl Notify {
    pub fn new<G>(gw: G, notify_on: HashSet<NotificationType>) -> Self
    where
        G: EmailGateway + Send + Sync + 'static,
    {
        Self {
            email_gw: Arc::new(gw),
            notify_on,
        }
    }

    /// Waits for e-mails that are still being sent in the background.
    pub fn flush(&self) {
        self.email_gw.flush();
    }

    fn skip(&self, ev: &NotificationEvent) -> bool {
        !self.notify_on.contains(&ev.kind())
    }
}

impl NotificationGateway for Notify {
    fn notify(&self, event: NotificationEvent) {
        use NotificationEvent as E;
        if self.skip(&event) {
            log::debug!("Skip {} notification", event.kind());
            return;
        }
        let kind = event.kind();
        let (recipients, content) = match event {
            E::ReportSubmitted {
                email_addresses,
                report,
                potential_spam,
            } => {
                log::info!(
                    "Sending e-mails to {} admins after report {} was submitted",
                    email_addresses.len(),
                    report.report.id
                );
                (
                    email_addresses,
                    user_communication::report_submitted_email(&report, potential_spam),
                )
            }
            E::ReportApproved {
                email_addresses,
                report,
            } => {
                log::info!("Sending e-mail after report {} approved", report.report.id);
                (
                    email_addresses,
                    user_communication::report_approved_email(&report),
                )
            }
            E::ReportForwarded {
                email_addresses,
                report,
            } => {
                log::info!(
                    "Sending e-mails to {} officials of {} after report {} approved",
                    email_addresses.len(),
                    report.barangay_name,
                    report.report.id
                );
                (
                    email_addresses,
                    user_communication::report_forwarded_email(&report),
                )
            }
            E::ReportRejected {
                email_addresses,
                report,
            } => {
                log::info!("Sending e-mail after report {} rejected", report.report.id);
                (
                    email_addresses,
                    user_communication::report_rejected_email(&report),
                )
            }
            E::StatusChanged {
                email_addresses,
                report,
                old_status,
            } => {
                log::info!(
                    "Sending e-mail after status of report {} changed from {old_status} to {}",
                    report.report.id,
                    report.report.status
                );
                (
                    email_addresses,
                    user_communication::status_changed_email(&report, old_status),
                )
            }
            E::ReopenRequested {
                email_addresses,
                report,
            } => {
                log::info!(
                    "Sending e-mails to {} admins after reopening report {} was requested",
                    email_addresses.len(),
                    report.report.id
                );
                (
                    email_addresses,
                    user_communication::reopen_requested_email(&report),
                )
            }
            E::ReopenApproved {
                email_addresses,
                report,
            } => {
                log::info!(
                    "Sending e-mails to {} recipients after report {} reopened",
                    email_addresses.len(),
                    report.report.id
                );
                (
                    email_addresses,
                    user_communication::reopen_approved_email(&report),
                )
            }
            E::CommentAdded {
                email_addresses,
                report,
                comment,
                commenter_email,
            } => {
                log::info!(
                    "Sending e-mail after {commenter_email} commented on report {}",
                    report.report.id
                );
                (
                    email_addresses,
                    user_communication::comment_added_email(&report, &comment, &commenter_email),
                )
            }
            E::CaptainProvisioned {
                captain,
                barangay_name,
            } => {
                log::info!(
                    "Sending welcome e-mail to {} as captain of {barangay_name}",
                    captain.email
                );
                let content = user_communication::captain_welcome_email(&captain, &barangay_name);
                (vec![captain.email], content)
            }
        };
        match content {
            Ok(content) => compose_and_send_emails(&*self.email_gw, &recipients, &content),
            Err(err) => log::warn!("Unable to render {kind} e-mail: {err}"),
        }
    }
}

fn compose_and_send_emails(
    gw: &dyn EmailGateway,
    recipients: &[EmailAddress],
    email_content: &EmailContent,
) {
    if recipients.is_empty() {
        log::debug!("No recipients for '{}'", email_content.subject);
        return;
    }
    gw.compose_and_send(recipients, email_content);
}

#[cfg(test)]
mod tests {
    use super::*;
    use pqc_core::gateways::notify::ReportDigest;
    use pqc_entities::{builders::Builder, report::*, user::*};
    use std::sync::Mutex;
    use strum::IntoEnumIterator;

    #[derive(Default, Clone)]
    struct RecordingGateway {
        sent: Arc<Mutex<Vec<(Vec<EmailAddress>, EmailContent)>>>,
        flushed: Arc<Mutex<usize>>,
    }

    impl RecordingGateway {
        fn subjects(&self) -> Vec<String> {
            self.sent
                .lock()
                .unwrap()
                .iter()
                .map(|(_, c)| c.subject.clone())
                .collect()
        }
    }

    impl EmailGateway for RecordingGateway {
        fn compose_and_send(&self, recipients: &[EmailAddress], email: &EmailContent) {
            self.sent
                .lock()
                .unwrap()
                .push((recipients.to_vec(), email.clone()));
        }

        fn flush(&self) {
            *self.flushed.lock().unwrap() += 1;
        }
    }

    fn addr(s: &str) -> EmailAddress {
        EmailAddress::new_unchecked(s.into())
    }

    fn digest() -> ReportDigest {
        ReportDigest {
            report: Report::build().title("Pothole").finish(),
            barangay_name: "Tambo".into(),
            category_name: "Roads".into(),
            creator_email: addr("juan@example.com"),
        }
    }

    #[test]
    fn send_only_enabled_notifications() {
        let gw = RecordingGateway::default();
        let notify = Notify::new(
            gw.clone(),
            [NotificationType::ReportApproved].into_iter().collect(),
        );
        notify.notify(NotificationEvent::ReportApproved {
            email_addresses: vec![addr("juan@example.com")],
            report: digest(),
        });
        notify.notify(NotificationEvent::ReportForwarded {
            email_addresses: vec![addr("captain@example.com")],
            report: digest(),
        });
        assert_eq!(vec!["Report Approved: Pothole - Tambo"], gw.subjects());
        let sent = gw.sent.lock().unwrap();
        assert_eq!(vec![addr("juan@example.com")], sent[0].0);
    }

    #[test]
    fn flush_reaches_the_email_gateway() {
        let gw = RecordingGateway::default();
        let notify = Notify::new(gw.clone(), NotificationType::iter().collect());
        notify.clone().flush();
        assert_eq!(1, *gw.flushed.lock().unwrap());
    }

    #[test]
    fn skip_events_without_recipients() {
        let gw = RecordingGateway::default();
        let notify = Notify::new(gw.clone(), NotificationType::iter().collect());
        notify.notify(NotificationEvent::ReportSubmitted {
            email_addresses: vec![],
            report: digest(),
            potential_spam: false,
        });
        assert!(gw.subjects().is_empty());
    }

    #[test]
    fn welcome_new_captain() {
        let gw = RecordingGateway::default();
        let notify = Notify::new(gw.clone(), NotificationType::iter().collect());
        let captain = User::build()
            .email("captain@example.com")
            .role(Role::BarangayOfficial)
            .finish();
        notify.notify(NotificationEvent::CaptainProvisioned {
            captain,
            barangay_name: "Tambo".into(),
        });
        let sent = gw.sent.lock().unwrap();
        assert_eq!(1, sent.len());
        assert_eq!(vec![addr("captain@example.com")], sent[0].0);
        assert_eq!(
            "Welcome to ParañaqueConnect - Barangay Captain Account",
            sent[0].1.subject
        );
    }
}
