use pqc_entities::{
    comment::Comment,
    email::EmailAddress,
    report::{Report, ReportStatus},
    user::User,
};
use strum::{Display, EnumIter, EnumString};

/// A report together with the names needed to present it.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct ReportDigest {
    pub report        : Report,
    pub barangay_name : String,
    pub category_name : String,
    pub creator_email : EmailAddress,
}

#[derive(Debug, Clone, PartialEq)]
pub enum NotificationEvent {
    ReportSubmitted {
        email_addresses: Vec<EmailAddress>,
        report: ReportDigest,
        potential_spam: bool,
    },
    ReportApproved {
        email_addresses: Vec<EmailAddress>,
        report: ReportDigest,
    },
    ReportForwarded {
        email_addresses: Vec<EmailAddress>,
        report: ReportDigest,
    },
    ReportRejected {
        email_addresses: Vec<EmailAddress>,
        report: ReportDigest,
    },
    StatusChanged {
        email_addresses: Vec<EmailAddress>,
        report: ReportDigest,
        old_status: ReportStatus,
    },
    ReopenRequested {
        email_addresses: Vec<EmailAddress>,
        report: ReportDigest,
    },
    ReopenApproved {
        email_addresses: Vec<EmailAddress>,
        report: ReportDigest,
    },
    CommentAdded {
        email_addresses: Vec<EmailAddress>,
        report: ReportDigest,
        comment: Comment,
        commenter_email: EmailAddress,
    },
    CaptainProvisioned {
        captain: User,
        barangay_name: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter)]
#[strum(serialize_all = "kebab-case")]
pub enum NotificationType {
    ReportSubmitted,
    ReportApproved,
    ReportForwarded,
    ReportRejected,
    StatusChanged,
    ReopenRequested,
    ReopenApproved,
    CommentAdded,
    CaptainProvisioned,
}

impl NotificationEvent {
    pub const fn kind(&self) -> NotificationType {
        use NotificationEvent as E;
        use NotificationType as T;
        match self {
            E::ReportSubmitted { .. } => T::ReportSubmitted,
            E::ReportApproved { .. } => T::ReportApproved,
            E::ReportForwarded { .. } => T::ReportForwarded,
            E::ReportRejected { .. } => T::ReportRejected,
            E::StatusChanged { .. } => T::StatusChanged,
            E::ReopenRequested { .. } => T::ReopenRequested,
            E::ReopenApproved { .. } => T::ReopenApproved,
            E::CommentAdded { .. } => T::CommentAdded,
            E::CaptainProvisioned { .. } => T::CaptainProvisioned,
        }
    }

    /// All addresses this event is sent to.
    pub fn recipients(&self) -> Vec<&EmailAddress> {
        use NotificationEvent as E;
        match self {
            E::ReportSubmitted {
                email_addresses, ..
            }
            | E::ReportApproved {
                email_addresses, ..
            }
            | E::ReportForwarded {
                email_addresses, ..
            }
            | E::ReportRejected {
                email_addresses, ..
            }
            | E::StatusChanged {
                email_addresses, ..
            }
            | E::ReopenRequested {
                email_addresses, ..
            }
            | E::ReopenApproved {
                email_addresses, ..
            }
            | E::CommentAdded {
                email_addresses, ..
            } => email_addresses.iter().collect(),
            E::CaptainProvisioned { captain, .. } => vec![&captain.email],
        }
    }
}

pub trait NotificationGateway {
    fn notify(&self, event: NotificationEvent);
}
