use std::cell::RefCell;

pub use super::prelude::*;


pub use self::builders::*;
pub use pqc_entities::builders::{Builder, ReportBuild};

type RepoResult<T> = std::result::Result<T, RepoError>;

trait Key {
    fn key(&self) -> &str;
}

impl Key for Report {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Key for User {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Key for Barangay {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Key for Category {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

impl Key for Comment {
    fn key(&self) -> &str {
        self.id.as_str()
    }
}

#[derive(Default)]
pub struct MockDb {
    pub reports: RefCell<Vec<Report>>,
    pub users: RefCell<Vec<User>>,
    pub barangays: RefCell<Vec<Barangay>>,
    pub categories: RefCell<Vec<Category>>,
    pub comments: RefCell<Vec<Comment>>,
}

impl MockDb {
    pub fn report_status(&self, id: &str) -> Option<ReportStatus> {
        self.reports
            .borrow()
            .iter()
            .find(|r| r.key() == id)
            .map(|r| r.status)
    }
}

fn get<T: Clone + Key>(objects: &[T], id: &str) -> RepoResult<T> {
    match objects.iter().find(|x| x.key() == id) {
        Some(x) => Ok(x.clone()),
        None => Err(RepoError::NotFound),
    }
}

fn create<T: Clone + Key>(objects: &mut Vec<T>, e: T) -> RepoResult<()> {
    if objects.iter().any(|x| x.key() == e.key()) {
        return Err(RepoError::AlreadyExists);
    }
    objects.push(e);
    Ok(())
}

fn update<T: Clone + Key>(objects: &mut [T], e: &T) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.key() == e.key()) {
        objects[pos] = e.clone();
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

fn delete<T: Clone + Key>(objects: &mut Vec<T>, id: &str) -> RepoResult<()> {
    if let Some(pos) = objects.iter().position(|x| x.key() == id) {
        objects.remove(pos);
    } else {
        return Err(RepoError::NotFound);
    }
    Ok(())
}

impl ReportRepo for MockDb {
    fn create_report(&self, report: Report) -> RepoResult<()> {
        create(&mut self.reports.borrow_mut(), report)
    }
    fn update_report(&self, report: &Report) -> RepoResult<()> {
        update(&mut self.reports.borrow_mut(), report)
    }
    fn delete_report(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.reports.borrow_mut(), id)
    }
    fn get_report(&self, id: &str) -> RepoResult<Report> {
        get(&self.reports.borrow(), id)
    }
    fn find_reports(&self, query: &ReportQuery) -> RepoResult<Vec<Report>> {
        let mut reports: Vec<_> = self
            .reports
            .borrow()
            .iter()
            .filter(|r| query.matches(r))
            .cloned()
            .collect();
        reports.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        if let Some(limit) = query.limit {
            reports.truncate(limit);
        }
        Ok(reports)
    }
    fn count_reports_by_author_since(&self, user_id: &str, since: Timestamp) -> RepoResult<usize> {
        Ok(self
            .reports
            .borrow()
            .iter()
            .filter(|r| r.created_by.as_str() == user_id && r.created_at >= since)
            .count())
    }
}

impl UserRepo for MockDb {
    fn create_user(&self, user: &User) -> RepoResult<()> {
        if self
            .users
            .borrow()
            .iter()
            .any(|u| u.email.is_same_address(&user.email))
        {
            return Err(RepoError::AlreadyExists);
        }
        create(&mut self.users.borrow_mut(), user.clone())
    }
    fn update_user(&self, user: &User) -> RepoResult<()> {
        update(&mut self.users.borrow_mut(), user)
    }
    fn get_user(&self, id: &str) -> RepoResult<User> {
        get(&self.users.borrow(), id)
    }
    fn try_get_user_by_email(&self, email: &EmailAddress) -> RepoResult<Option<User>> {
        Ok(self
            .users
            .borrow()
            .iter()
            .find(|u| u.email.is_same_address(email))
            .cloned())
    }
    fn all_users(&self) -> RepoResult<Vec<User>> {
        Ok(self.users.borrow().clone())
    }
}

impl BarangayRepo for MockDb {
    fn create_barangay(&self, barangay: Barangay) -> RepoResult<()> {
        create(&mut self.barangays.borrow_mut(), barangay)
    }
    fn update_barangay(&self, barangay: &Barangay) -> RepoResult<()> {
        update(&mut self.barangays.borrow_mut(), barangay)
    }
    fn delete_barangay(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.barangays.borrow_mut(), id)
    }
    fn get_barangay(&self, id: &str) -> RepoResult<Barangay> {
        get(&self.barangays.borrow(), id)
    }
    fn all_barangays(&self) -> RepoResult<Vec<Barangay>> {
        let mut barangays = self.barangays.borrow().clone();
        barangays.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(barangays)
    }
    fn try_get_barangay_by_name(&self, name: &str) -> RepoResult<Option<Barangay>> {
        Ok(self
            .barangays
            .borrow()
            .iter()
            .find(|b| b.name.eq_ignore_ascii_case(name.trim()))
            .cloned())
    }
}

impl CategoryRepo for MockDb {
    fn create_category(&self, category: Category) -> RepoResult<()> {
        create(&mut self.categories.borrow_mut(), category)
    }
    fn update_category(&self, category: &Category) -> RepoResult<()> {
        update(&mut self.categories.borrow_mut(), category)
    }
    fn delete_category(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.categories.borrow_mut(), id)
    }
    fn get_category(&self, id: &str) -> RepoResult<Category> {
        get(&self.categories.borrow(), id)
    }
    fn all_categories(&self) -> RepoResult<Vec<Category>> {
        let mut categories = self.categories.borrow().clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }
    fn try_get_category_by_name(&self, name: &str) -> RepoResult<Option<Category>> {
        Ok(self
            .categories
            .borrow()
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name.trim()))
            .cloned())
    }
}

impl CommentRepo for MockDb {
    fn create_comment(&self, comment: Comment) -> RepoResult<()> {
        create(&mut self.comments.borrow_mut(), comment)
    }
    fn get_comment(&self, id: &str) -> RepoResult<Comment> {
        get(&self.comments.borrow(), id)
    }
    fn delete_comment(&self, id: &str) -> RepoResult<()> {
        delete(&mut self.comments.borrow_mut(), id)
    }
    fn load_comments_of_report(&self, report_id: &str) -> RepoResult<Vec<Comment>> {
        Ok(self
            .comments
            .borrow()
            .iter()
            .filter(|c| c.report_id.as_str() == report_id)
            .cloned()
            .collect())
    }
    fn delete_comments_of_report(&self, report_id: &str) -> RepoResult<usize> {
        let mut comments = self.comments.borrow_mut();
        let count = comments.len();
        comments.retain(|c| c.report_id.as_str() != report_id);
        Ok(count - comments.len())
    }
}

/// Resolves every address to the same spot in San Dionisio,
/// except those containing "Nowhere".
#[derive(Debug, Default)]
pub struct DummyGeocoder;

impl GeoCodingGateway for DummyGeocoder {
    fn resolve_address_lat_lng(&self, addr: &str) -> Option<(f64, f64)> {
        (!addr.contains("Nowhere")).then_some((14.4793095, 121.0198229))
    }
}

/// A barangay with a captain, one resident, one admin and one category.
pub struct Fixture {
    pub db: MockDb,
    pub geocoder: DummyGeocoder,
    pub barangay: Barangay,
    pub category: Category,
    admin_id: Id,
    resident_id: Id,
    official_id: Id,
}

impl Fixture {
    pub fn new() -> Self {
        let db = MockDb::default();
        let barangay = Barangay::build().name("San Dionisio").finish();
        db.create_barangay(barangay.clone()).unwrap();
        let category = Category {
            id: Id::new(),
            name: "Drainage".into(),
            description: None,
        };
        db.create_category(category.clone()).unwrap();

        let admin = User::build()
            .email("admin@example.com")
            .role(Role::Admin)
            .finish();
        let resident = User::build()
            .email("resident@example.com")
            .barangay(Some(&barangay.id))
            .finish();
        let official = User::build()
            .email("captain@example.com")
            .role(Role::BarangayOfficial)
            .barangay(Some(&barangay.id))
            .finish();
        for user in [&admin, &resident, &official] {
            db.create_user(user).unwrap();
        }
        Self {
            db,
            geocoder: DummyGeocoder,
            barangay,
            category,
            admin_id: admin.id,
            resident_id: resident.id,
            official_id: official.id,
        }
    }

    fn actor(&self, id: &Id) -> Actor {
        Actor::from(&self.db.get_user(id.as_str()).unwrap())
    }

    pub fn admin(&self) -> Actor {
        self.actor(&self.admin_id)
    }

    pub fn resident(&self) -> Actor {
        self.actor(&self.resident_id)
    }

    pub fn official(&self) -> Actor {
        self.actor(&self.official_id)
    }

    pub fn admin_email(&self) -> EmailAddress {
        self.admin().email
    }

    pub fn resident_email(&self) -> EmailAddress {
        self.resident().email
    }

    pub fn official_email(&self) -> EmailAddress {
        self.official().email
    }

    pub fn add_resident(&self, email: &str) -> Actor {
        let user = User::build()
            .email(email)
            .barangay(Some(&self.barangay.id))
            .finish();
        self.db.create_user(&user).unwrap();
        Actor::from(&user)
    }

    pub fn add_barangay(&self, name: &str) -> Barangay {
        let barangay = Barangay::build().name(name).finish();
        self.db.create_barangay(barangay.clone()).unwrap();
        barangay
    }

    pub fn new_report(&self) -> NewReportBuild {
        NewReportBuild::new(self.barangay.id.as_str(), self.category.id.as_str())
    }

    pub fn add_report(&self, status: ReportStatus) -> Report {
        self.add_report_with(|r| r.status(status))
    }

    /// Stores a report of the resident, customized by `f`.
    pub fn add_report_with<F>(&self, f: F) -> Report
    where
        F: FnOnce(ReportBuild) -> ReportBuild,
    {
        let build = Report::build()
            .created_by(&self.resident_id)
            .barangay(&self.barangay.id)
            .category(&self.category.id);
        let report = f(build).finish();
        self.db.create_report(report.clone()).unwrap();
        report
    }

    /// Stores a comment of the resident.
    pub fn add_comment(&self, report: &Report, content: &str) -> Comment {
        let comment = Comment {
            id: Id::new(),
            report_id: report.id.clone(),
            created_by: self.resident_id.clone(),
            content: content.into(),
            created_at: Timestamp::now(),
        };
        self.db.create_comment(comment.clone()).unwrap();
        comment
    }
}
