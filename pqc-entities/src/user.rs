use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::{email::EmailAddress, id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id          : Id,
    pub email       : EmailAddress,
    pub role        : Role,
    pub barangay_id : Option<Id>,
    pub created_at  : Timestamp,
    pub banned_at   : Option<Timestamp>,
    pub ban_reason  : Option<String>,
    pub deleted_at  : Option<Timestamp>,
}

impl User {
    pub fn is_banned(&self) -> bool {
        self.banned_at.is_some()
    }

    pub fn is_deleted(&self) -> bool {
        self.deleted_at.is_some()
    }

    /// Neither banned nor soft-deleted.
    pub fn is_active(&self) -> bool {
        !self.is_banned() && !self.is_deleted()
    }
}

#[rustfmt::skip]
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Role {
    #[default]
    Resident,
    BarangayOfficial,
    Admin,
}
