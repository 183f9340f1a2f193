use askama::Template;
use pqc_core::gateways::notify::ReportDigest;
use pqc_entities::{comment::*, email::*, report::*, time::Timestamp, user::*};
use time::{format_description::FormatItem, macros::format_description, OffsetDateTime};

const DATE_TIME_FORMAT: &[FormatItem] =
    format_description!("[year]-[month]-[day] [hour]:[minute] UTC");

fn format_timestamp(at: Timestamp) -> String {
    OffsetDateTime::from(at)
        .format(DATE_TIME_FORMAT)
        .unwrap_or_default()
}

fn subject_with_barangay(prefix: &str, digest: &ReportDigest) -> String {
    format!(
        "{prefix}: {} - {}",
        digest.report.title, digest.barangay_name
    )
}

/// The report as shown in every e-mail body.
struct ReportLines<'a> {
    title: &'a str,
    description: &'a str,
    address: &'a str,
    barangay: &'a str,
    category: &'a str,
    status: &'static str,
    priority: String,
    created_at: String,
    created_by: &'a str,
    id: &'a str,
}

impl<'a> From<&'a ReportDigest> for ReportLines<'a> {
    fn from(digest: &'a ReportDigest) -> Self {
        let ReportDigest {
            report,
            barangay_name,
            category_name,
            creator_email,
        } = digest;
        let priority: &'static str = report.priority.into();
        Self {
            title: &report.title,
            description: &report.description,
            address: &report.address,
            barangay: barangay_name,
            category: category_name,
            status: report.status.label(),
            priority: capitalize(priority),
            created_at: format_timestamp(report.created_at),
            created_by: creator_email.as_str(),
            id: report.id.as_str(),
        }
    }
}

fn capitalize(s: &str) -> String {
    let mut chars = s.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}

#[derive(Template)]
#[template(path = "report_submitted.txt")]
struct ReportSubmittedTemplate<'a> {
    report: ReportLines<'a>,
    potential_spam: bool,
}

pub fn report_submitted_email(
    digest: &ReportDigest,
    potential_spam: bool,
) -> askama::Result<EmailContent> {
    let subject = subject_with_barangay("New Report Submitted", digest);
    let body = ReportSubmittedTemplate {
        report: digest.into(),
        potential_spam,
    }
    .render()?;
    Ok(EmailContent { subject, body })
}

#[derive(Template)]
#[template(path = "report_approved.txt")]
struct ReportApprovedTemplate<'a> {
    report: ReportLines<'a>,
}

pub fn report_approved_email(digest: &ReportDigest) -> askama::Result<EmailContent> {
    let subject = subject_with_barangay("Report Approved", digest);
    let body = ReportApprovedTemplate {
        report: digest.into(),
    }
    .render()?;
    Ok(EmailContent { subject, body })
}

#[derive(Template)]
#[template(path = "report_forwarded.txt")]
struct ReportForwardedTemplate<'a> {
    report: ReportLines<'a>,
}

pub fn report_forwarded_email(digest: &ReportDigest) -> askama::Result<EmailContent> {
    let subject = subject_with_barangay("New Report", digest);
    let body = ReportForwardedTemplate {
        report: digest.into(),
    }
    .render()?;
    Ok(EmailContent { subject, body })
}

#[derive(Template)]
#[template(path = "report_rejected.txt")]
struct ReportRejectedTemplate<'a> {
    report: ReportLines<'a>,
}

pub fn report_rejected_email(digest: &ReportDigest) -> askama::Result<EmailContent> {
    let subject = subject_with_barangay("Report Update", digest);
    let body = ReportRejectedTemplate {
        report: digest.into(),
    }
    .render()?;
    Ok(EmailContent { subject, body })
}

#[derive(Template)]
#[template(path = "status_changed.txt")]
struct StatusChangedTemplate<'a> {
    report: ReportLines<'a>,
    old_status: &'static str,
}

pub fn status_changed_email(
    digest: &ReportDigest,
    old_status: ReportStatus,
) -> askama::Result<EmailContent> {
    let subject = format!(
        "Report Update: {} - Status Changed to {}",
        digest.report.title,
        digest.report.status.label()
    );
    let body = StatusChangedTemplate {
        report: digest.into(),
        old_status: old_status.label(),
    }
    .render()?;
    Ok(EmailContent { subject, body })
}

#[derive(Template)]
#[template(path = "reopen_requested.txt")]
struct ReopenRequestedTemplate<'a> {
    report: ReportLines<'a>,
}

pub fn reopen_requested_email(digest: &ReportDigest) -> askama::Result<EmailContent> {
    let subject = subject_with_barangay("Reopen Request", digest);
    let body = ReopenRequestedTemplate {
        report: digest.into(),
    }
    .render()?;
    Ok(EmailContent { subject, body })
}

#[derive(Template)]
#[template(path = "reopen_approved.txt")]
struct ReopenApprovedTemplate<'a> {
    report: ReportLines<'a>,
}

pub fn reopen_approved_email(digest: &ReportDigest) -> askama::Result<EmailContent> {
    let subject = subject_with_barangay("Report Reopened", digest);
    let body = ReopenApprovedTemplate {
        report: digest.into(),
    }
    .render()?;
    Ok(EmailContent { subject, body })
}

#[derive(Template)]
#[template(path = "comment_added.txt")]
struct CommentAddedTemplate<'a> {
    report: ReportLines<'a>,
    commenter: &'a str,
    comment: &'a str,
    commented_at: String,
}

pub fn comment_added_email(
    digest: &ReportDigest,
    comment: &Comment,
    commenter: &EmailAddress,
) -> askama::Result<EmailContent> {
    let subject = format!("New Comment on Your Report: {}", digest.report.title);
    let body = CommentAddedTemplate {
        report: digest.into(),
        commenter: commenter.as_str(),
        comment: &comment.content,
        commented_at: format_timestamp(comment.created_at),
    }
    .render()?;
    Ok(EmailContent { subject, body })
}

#[derive(Template)]
#[template(path = "captain_welcome.txt")]
struct CaptainWelcomeTemplate<'a> {
    email: &'a str,
    barangay: &'a str,
}

pub fn captain_welcome_email(captain: &User, barangay_name: &str) -> askama::Result<EmailContent> {
    let subject = "Welcome to ParañaqueConnect - Barangay Captain Account".to_string();
    let body = CaptainWelcomeTemplate {
        email: captain.email.as_str(),
        barangay: barangay_name,
    }
    .render()?;
    Ok(EmailContent { subject, body })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pqc_entities::builders::Builder;

    // To verify the formatting manually run these tests and examine
    // the output on stdout:
    //
    // ```sh
    // cargo test -p pqc-gateways user_communication -- --nocapture
    // ```

    fn print_email(email: &EmailContent) {
        let EmailContent { subject, body } = email;
        println!("========================================================================");
        println!("{subject}");
        println!("------------------------------------------------------------------------");
        println!("{body}");
        println!("========================================================================");
    }

    fn digest(status: ReportStatus) -> ReportDigest {
        ReportDigest {
            report: Report::build()
                .title("Clogged drainage")
                .status(status)
                .priority(Priority::High)
                .finish(),
            barangay_name: "San Dionisio".into(),
            category_name: "Drainage".into(),
            creator_email: EmailAddress::new_unchecked("juan@example.com".into()),
        }
    }

    #[test]
    fn report_details_in_body() {
        let email = report_approved_email(&digest(ReportStatus::Pending)).unwrap();
        print_email(&email);
        assert_eq!("Report Approved: Clogged drainage - San Dionisio", email.subject);
        assert!(email.body.contains("Clogged drainage"));
        assert!(email.body.contains("Dr. A. Santos Ave, Parañaque"));
        assert!(email.body.contains("Drainage"));
        assert!(email.body.contains("High"));
        assert!(email.body.contains("Pending"));
    }

    #[test]
    fn spam_warning_for_admins() {
        let d = digest(ReportStatus::PendingApproval);
        let flagged = report_submitted_email(&d, true).unwrap();
        let clean = report_submitted_email(&d, false).unwrap();
        print_email(&flagged);
        assert_eq!(
            "New Report Submitted: Clogged drainage - San Dionisio",
            flagged.subject
        );
        assert!(flagged.body.contains("potential spam"));
        assert!(!clean.body.contains("potential spam"));
    }

    #[test]
    fn status_change_names_both_states() {
        let email =
            status_changed_email(&digest(ReportStatus::InProgress), ReportStatus::Pending).unwrap();
        print_email(&email);
        assert_eq!(
            "Report Update: Clogged drainage - Status Changed to In Progress",
            email.subject
        );
        assert!(email.body.contains("from Pending to In Progress"));
    }

    #[test]
    fn rejected_and_reopen_subjects() {
        let d = digest(ReportStatus::Closed);
        assert_eq!(
            "Report Update: Clogged drainage - San Dionisio",
            report_rejected_email(&d).unwrap().subject
        );
        assert_eq!(
            "Reopen Request: Clogged drainage - San Dionisio",
            reopen_requested_email(&d).unwrap().subject
        );
        assert_eq!(
            "Report Reopened: Clogged drainage - San Dionisio",
            reopen_approved_email(&d).unwrap().subject
        );
        assert_eq!(
            "New Report: Clogged drainage - San Dionisio",
            report_forwarded_email(&d).unwrap().subject
        );
    }

    #[test]
    fn comment_email_quotes_the_comment() {
        let d = digest(ReportStatus::Pending);
        let comment = Comment {
            id: "c1".into(),
            report_id: d.report.id.clone(),
            created_by: "u2".into(),
            content: "Same problem on our street".into(),
            created_at: Timestamp::now(),
        };
        let commenter = EmailAddress::new_unchecked("maria@example.com".into());
        let email = comment_added_email(&d, &comment, &commenter).unwrap();
        print_email(&email);
        assert_eq!("New Comment on Your Report: Clogged drainage", email.subject);
        assert!(email.body.contains("maria@example.com"));
        assert!(email.body.contains("Same problem on our street"));
    }

    #[test]
    fn welcome_captain() {
        let captain = User::build()
            .email("captain@example.com")
            .role(Role::BarangayOfficial)
            .finish();
        let email = captain_welcome_email(&captain, "Tambo").unwrap();
        print_email(&email);
        assert!(email.body.contains("captain@example.com"));
        assert!(email.body.contains("Barangay Tambo"));
    }

    #[test]
    fn capitalize_priorities() {
        assert_eq!("Critical", capitalize("critical"));
        assert_eq!("", capitalize(""));
    }
}
