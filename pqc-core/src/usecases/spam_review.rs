use super::prelude::*;
use crate::{
    authorization::ReportScope,
    spam::{self, AuthorActivity},
};

pub(crate) fn author_activity<R>(repo: &R, user_id: &str, now: Timestamp) -> Result<AuthorActivity>
where
    R: ReportRepo,
{
    let last_day = repo.count_reports_by_author_since(user_id, now.before(Duration::days(1)))?;
    let last_week = repo.count_reports_by_author_since(user_id, now.before(Duration::days(7)))?;
    Ok(AuthorActivity {
        last_day,
        last_week,
    })
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpamMetrics {
    pub total_reports: usize,
    pub potential_spam: usize,
    pub gibberish: usize,
}

/// Spam statistics over all reports of a user.
pub fn user_spam_metrics<R>(repo: &R, actor: &Actor, user_id: &str) -> Result<SpamMetrics>
where
    R: ReportRepo + UserRepo,
{
    if !policy_for(actor).can_moderate_users() {
        return Err(Error::Forbidden);
    }
    let user = repo.get_user(user_id).map_err(|err| match err {
        RepoError::NotFound => Error::UserDoesNotExist,
        err => err.into(),
    })?;
    let mut query = ReportQuery::new(ReportScope::All);
    query.created_by = Some(user.id.clone());
    let reports = repo.find_reports(&query)?;
    let activity = author_activity(repo, user.id.as_str(), Timestamp::now())?;
    let metrics = reports.iter().fold(
        SpamMetrics {
            total_reports: reports.len(),
            ..Default::default()
        },
        |mut m, r| {
            m.potential_spam += usize::from(spam::is_potential_spam(&r.description, activity));
            m.gibberish += usize::from(spam::is_gibberish(&r.description));
            m
        },
    );
    log::debug!("Spam metrics of user {}: {metrics:?}", user.id);
    Ok(metrics)
}

#[cfg(test)]
mod tests {
    use super::super::tests::*;
    use super::*;

    #[test]
    fn count_spam_of_a_user() {
        let fixture = Fixture::new();
        let resident = fixture.resident();
        fixture.add_report_with(|r| r.description("The street light is broken again"));
        fixture.add_report_with(|r| r.description("qwrtzpsdfg"));
        fixture.add_report_with(|r| r.description("short"));

        let metrics =
            user_spam_metrics(&fixture.db, &fixture.admin(), resident.user_id.as_str()).unwrap();
        assert_eq!(
            SpamMetrics {
                total_reports: 3,
                potential_spam: 2,
                gibberish: 1,
            },
            metrics
        );
    }

    #[test]
    fn only_admins_review_spam() {
        let fixture = Fixture::new();
        let resident = fixture.resident();
        let err = user_spam_metrics(&fixture.db, &fixture.official(), resident.user_id.as_str())
            .unwrap_err();
        assert!(matches!(err, Error::Forbidden));
    }

    #[test]
    fn old_reports_do_not_count_as_activity() {
        let fixture = Fixture::new();
        let resident = fixture.resident();
        let now = Timestamp::now();
        fixture.add_report_with(|r| r.created_at(now.before(Duration::days(3))));
        fixture.add_report_with(|r| r.created_at(now.before(Duration::days(10))));
        fixture.add_report_with(|r| r.created_at(now));
        assert_eq!(
            AuthorActivity {
                last_day: 1,
                last_week: 2,
            },
            author_activity(&fixture.db, resident.user_id.as_str(), now).unwrap()
        );
    }
}
