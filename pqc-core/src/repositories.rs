// Low-level database access traits.
// Each repository is responsible for a single entity and
// its relationships. Related entities are only referenced
// by their id and never modified or loaded by another
// repository.

use crate::{authorization::ReportScope, entities::*};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("The requested object could not be found")]
    NotFound,
    #[error("The object already exists")]
    AlreadyExists,
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

type Result<T> = std::result::Result<T, Error>;

/// Filter for report listings.
///
/// All criteria are combined, `None` means "don't care".
#[derive(Debug, Clone)]
pub struct ReportQuery {
    pub scope: ReportScope,
    pub status: Option<ReportStatus>,
    pub category_id: Option<Id>,
    pub barangay_id: Option<Id>,
    pub created_by: Option<Id>,
    pub limit: Option<usize>,
}

impl ReportQuery {
    pub const fn new(scope: ReportScope) -> Self {
        Self {
            scope,
            status: None,
            category_id: None,
            barangay_id: None,
            created_by: None,
            limit: None,
        }
    }

    pub fn matches(&self, report: &Report) -> bool {
        self.scope.contains(report)
            && self.status.is_none_or(|s| s == report.status)
            && self
                .category_id
                .as_ref()
                .is_none_or(|id| id == &report.category_id)
            && self
                .barangay_id
                .as_ref()
                .is_none_or(|id| id == &report.barangay_id)
            && self
                .created_by
                .as_ref()
                .is_none_or(|id| id == &report.created_by)
    }
}

pub trait ReportRepo {
    fn create_report(&self, report: Report) -> Result<()>;
    fn update_report(&self, report: &Report) -> Result<()>;
    fn delete_report(&self, id: &str) -> Result<()>;
    fn get_report(&self, id: &str) -> Result<Report>;

    /// Newest first.
    fn find_reports(&self, query: &ReportQuery) -> Result<Vec<Report>>;
    fn count_reports(&self, query: &ReportQuery) -> Result<usize> {
        Ok(self.find_reports(query)?.len())
    }

    /// Counts the reports of a user created at or after `since`.
    fn count_reports_by_author_since(&self, user_id: &str, since: Timestamp) -> Result<usize>;
}

pub trait UserRepo {
    /// Fails with [`Error::AlreadyExists`] if the e-mail
    /// address is taken, regardless of its letter case.
    fn create_user(&self, user: &User) -> Result<()>;
    fn update_user(&self, user: &User) -> Result<()>;
    fn get_user(&self, id: &str) -> Result<User>;
    fn try_get_user_by_email(&self, email: &EmailAddress) -> Result<Option<User>>;
    fn all_users(&self) -> Result<Vec<User>>;

    fn users_with_role(&self, role: Role) -> Result<Vec<User>> {
        Ok(self
            .all_users()?
            .into_iter()
            .filter(|u| u.role == role)
            .collect())
    }

    fn users_of_barangay(&self, barangay_id: &str) -> Result<Vec<User>> {
        Ok(self
            .all_users()?
            .into_iter()
            .filter(|u| u.barangay_id.as_ref().is_some_and(|id| id.as_str() == barangay_id))
            .collect())
    }

    /// The captain of a barangay, if any.
    fn find_official_of_barangay(&self, barangay_id: &str) -> Result<Option<User>> {
        Ok(self
            .users_of_barangay(barangay_id)?
            .into_iter()
            .find(|u| u.role == Role::BarangayOfficial))
    }
}

pub trait BarangayRepo {
    fn create_barangay(&self, barangay: Barangay) -> Result<()>;
    fn update_barangay(&self, barangay: &Barangay) -> Result<()>;
    fn delete_barangay(&self, id: &str) -> Result<()>;
    fn get_barangay(&self, id: &str) -> Result<Barangay>;
    /// Sorted by name.
    fn all_barangays(&self) -> Result<Vec<Barangay>>;
    fn count_barangays(&self) -> Result<usize> {
        Ok(self.all_barangays()?.len())
    }
    /// Case-insensitive lookup.
    fn try_get_barangay_by_name(&self, name: &str) -> Result<Option<Barangay>>;
}

pub trait CategoryRepo {
    fn create_category(&self, category: Category) -> Result<()>;
    fn update_category(&self, category: &Category) -> Result<()>;
    fn delete_category(&self, id: &str) -> Result<()>;
    fn get_category(&self, id: &str) -> Result<Category>;
    /// Sorted by name.
    fn all_categories(&self) -> Result<Vec<Category>>;
    fn count_categories(&self) -> Result<usize> {
        Ok(self.all_categories()?.len())
    }
    /// Case-insensitive lookup.
    fn try_get_category_by_name(&self, name: &str) -> Result<Option<Category>>;
}

pub trait CommentRepo {
    fn create_comment(&self, comment: Comment) -> Result<()>;
    fn get_comment(&self, id: &str) -> Result<Comment>;
    fn delete_comment(&self, id: &str) -> Result<()>;
    /// Oldest first.
    fn load_comments_of_report(&self, report_id: &str) -> Result<Vec<Comment>>;
    fn delete_comments_of_report(&self, report_id: &str) -> Result<usize>;
}
