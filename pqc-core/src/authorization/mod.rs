//! Role based access rules.
//!
//! Every role has its own [`AccessPolicy`]. Callers pick one with
//! [`policy_for`] and never branch on the role themselves.

mod policy;
mod scope;

pub use self::{policy::*, scope::*};

use crate::entities::{EmailAddress, Id, Role, User};

/// The authenticated identity performing an operation.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Actor {
    pub user_id     : Id,
    pub email       : EmailAddress,
    pub role        : Role,
    pub barangay_id : Option<Id>,
    pub banned      : bool,
    pub deleted     : bool,
}

impl Actor {
    pub fn is_active(&self) -> bool {
        !self.banned && !self.deleted
    }

    pub fn belongs_to(&self, barangay_id: &Id) -> bool {
        self.barangay_id.as_ref() == Some(barangay_id)
    }
}

impl From<&User> for Actor {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.id.clone(),
            email: user.email.clone(),
            role: user.role,
            barangay_id: user.barangay_id.clone(),
            banned: user.is_banned(),
            deleted: user.is_deleted(),
        }
    }
}

/// Changes to an existing report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Edit,
    Delete,
    Review,
    RequestReopen,
    ChangeStatus,
}
