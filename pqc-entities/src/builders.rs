pub trait Builder {
    type Build;
    fn build() -> Self::Build;
}

pub use self::{barangay_builder::*, report_builder::*, user_builder::*};

pub mod report_builder {

    use super::*;
    use crate::{geo::*, id::*, report::*, time::*};

    #[derive(Debug)]
    pub struct ReportBuild {
        report: Report,
    }

    impl ReportBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.report.id = id.into();
            self
        }
        pub fn title(mut self, title: &str) -> Self {
            self.report.title = title.into();
            self
        }
        pub fn description(mut self, desc: &str) -> Self {
            self.report.description = desc.into();
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.report.address = address.into();
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.report.pos = Some(pos);
            self
        }
        pub fn status(mut self, status: ReportStatus) -> Self {
            self.report.status = status;
            self
        }
        pub fn priority(mut self, priority: Priority) -> Self {
            self.report.priority = priority;
            self
        }
        pub fn created_by(mut self, user_id: &Id) -> Self {
            self.report.created_by = user_id.clone();
            self
        }
        pub fn barangay(mut self, barangay_id: &Id) -> Self {
            self.report.barangay_id = barangay_id.clone();
            self
        }
        pub fn category(mut self, category_id: &Id) -> Self {
            self.report.category_id = category_id.clone();
            self
        }
        pub fn created_at(mut self, at: Timestamp) -> Self {
            self.report.created_at = at;
            self.report.updated_at = at;
            self
        }
        pub fn resolved_at(mut self, at: Option<Timestamp>) -> Self {
            self.report.resolved_at = at;
            self
        }
        pub fn finish(self) -> Report {
            self.report
        }
    }

    impl Builder for Report {
        type Build = ReportBuild;
        fn build() -> ReportBuild {
            let now = Timestamp::now();
            ReportBuild {
                report: Report {
                    id: Id::new(),
                    title: "Clogged drainage".into(),
                    description: "The drainage near the market is clogged".into(),
                    address: "Dr. A. Santos Ave, Parañaque".into(),
                    pos: Some(MapPoint::from_lat_lng_deg(14.4793095, 121.0198229)),
                    status: ReportStatus::initial(),
                    priority: Priority::default(),
                    created_by: Id::new(),
                    barangay_id: Id::new(),
                    category_id: Id::new(),
                    created_at: now,
                    updated_at: now,
                    resolved_at: None,
                },
            }
        }
    }
}

pub mod user_builder {

    use super::*;
    use crate::{email::*, id::*, time::*, user::*};

    #[derive(Debug)]
    pub struct UserBuild {
        user: User,
    }

    impl UserBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.user.id = id.into();
            self
        }
        pub fn email(mut self, email: &str) -> Self {
            self.user.email = EmailAddress::new_unchecked(email.into());
            self
        }
        pub fn role(mut self, role: Role) -> Self {
            self.user.role = role;
            self
        }
        pub fn barangay(mut self, barangay_id: Option<&Id>) -> Self {
            self.user.barangay_id = barangay_id.cloned();
            self
        }
        pub fn banned(mut self, reason: &str) -> Self {
            self.user.banned_at = Some(Timestamp::now());
            self.user.ban_reason = Some(reason.into());
            self
        }
        pub fn deleted(mut self) -> Self {
            self.user.deleted_at = Some(Timestamp::now());
            self
        }
        pub fn finish(self) -> User {
            self.user
        }
    }

    impl Builder for User {
        type Build = UserBuild;
        fn build() -> UserBuild {
            let id = Id::new();
            UserBuild {
                user: User {
                    email: EmailAddress::new_unchecked(format!("{id}@example.com")),
                    id,
                    role: Role::default(),
                    barangay_id: None,
                    created_at: Timestamp::now(),
                    banned_at: None,
                    ban_reason: None,
                    deleted_at: None,
                },
            }
        }
    }
}

pub mod barangay_builder {

    use super::*;
    use crate::{barangay::*, email::*, geo::*, id::*, time::*};

    #[derive(Debug)]
    pub struct BarangayBuild {
        barangay: Barangay,
    }

    impl BarangayBuild {
        pub fn id(mut self, id: &str) -> Self {
            self.barangay.id = id.into();
            self
        }
        pub fn name(mut self, name: &str) -> Self {
            self.barangay.name = name.into();
            self
        }
        pub fn address(mut self, address: &str) -> Self {
            self.barangay.address = Some(address.into());
            self
        }
        pub fn contact_email(mut self, email: &str) -> Self {
            self.barangay.contact_email = Some(EmailAddress::new_unchecked(email.into()));
            self
        }
        pub fn pos(mut self, pos: MapPoint) -> Self {
            self.barangay.pos = Some(pos);
            self
        }
        pub fn finish(self) -> Barangay {
            self.barangay
        }
    }

    impl Builder for Barangay {
        type Build = BarangayBuild;
        fn build() -> BarangayBuild {
            let id = Id::new();
            BarangayBuild {
                barangay: Barangay {
                    name: format!("Barangay {id}"),
                    id,
                    description: None,
                    address: Some("Parañaque City".into()),
                    contact_number: None,
                    contact_email: None,
                    pos: None,
                    created_at: Timestamp::now(),
                },
            }
        }
    }
}
