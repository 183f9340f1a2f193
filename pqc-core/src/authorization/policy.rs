use super::{Actor, Mutation, ReportScope};
use crate::entities::{Comment, Id, Report, ReportStatus, Role};

pub trait AccessPolicy {
    fn can_view(&self, actor: &Actor, report: &Report) -> bool;

    fn can_submit(&self, actor: &Actor) -> bool;

    fn can_mutate(&self, actor: &Actor, report: &Report, mutation: Mutation) -> bool;

    /// Applied to every listing before any other filter.
    fn visible_reports(&self, actor: &Actor) -> ReportScope;

    fn can_view_barangay(&self, actor: &Actor, barangay_id: &Id) -> bool;

    fn can_browse_barangays(&self) -> bool;

    fn can_browse_categories(&self) -> bool;

    fn can_manage_barangays(&self) -> bool {
        false
    }

    fn can_manage_categories(&self) -> bool {
        false
    }

    fn can_provision_captains(&self) -> bool {
        false
    }

    fn can_filter_by_barangay(&self) -> bool {
        false
    }

    fn can_moderate_users(&self) -> bool {
        false
    }

    fn can_comment(&self, actor: &Actor, report: &Report) -> bool {
        self.can_view(actor, report)
    }

    fn can_delete_comment(&self, actor: &Actor, comment: &Comment) -> bool {
        comment.created_by == actor.user_id
    }
}

/// Selects the policy of the actor's role.
///
/// Banned and deleted actors are treated as guests.
pub fn policy_for(actor: &Actor) -> &'static dyn AccessPolicy {
    if !actor.is_active() {
        return &GuestPolicy;
    }
    match actor.role {
        Role::Admin => &AdminPolicy,
        Role::BarangayOfficial => &OfficialPolicy,
        Role::Resident => &ResidentPolicy,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct AdminPolicy;

impl AccessPolicy for AdminPolicy {
    fn can_view(&self, _: &Actor, _: &Report) -> bool {
        true
    }
    fn can_submit(&self, _: &Actor) -> bool {
        false
    }
    fn can_mutate(&self, _: &Actor, _: &Report, mutation: Mutation) -> bool {
        !matches!(mutation, Mutation::RequestReopen)
    }
    fn visible_reports(&self, _: &Actor) -> ReportScope {
        ReportScope::All
    }
    fn can_view_barangay(&self, _: &Actor, _: &Id) -> bool {
        true
    }
    fn can_browse_barangays(&self) -> bool {
        true
    }
    fn can_browse_categories(&self) -> bool {
        true
    }
    fn can_manage_barangays(&self) -> bool {
        true
    }
    fn can_manage_categories(&self) -> bool {
        true
    }
    fn can_provision_captains(&self) -> bool {
        true
    }
    fn can_filter_by_barangay(&self) -> bool {
        true
    }
    fn can_moderate_users(&self) -> bool {
        true
    }
    fn can_delete_comment(&self, _: &Actor, _: &Comment) -> bool {
        true
    }
}

/// Barangay officials work on the approved reports of their own barangay.
#[derive(Debug, Clone, Copy)]
pub struct OfficialPolicy;

impl AccessPolicy for OfficialPolicy {
    fn can_view(&self, actor: &Actor, report: &Report) -> bool {
        self.visible_reports(actor).contains(report)
    }
    fn can_submit(&self, _: &Actor) -> bool {
        true
    }
    fn can_mutate(&self, actor: &Actor, report: &Report, mutation: Mutation) -> bool {
        match mutation {
            Mutation::Edit | Mutation::ChangeStatus => {
                self.can_view(actor, report) && !report.status.is_settled()
            }
            Mutation::Delete | Mutation::Review | Mutation::RequestReopen => false,
        }
    }
    fn visible_reports(&self, actor: &Actor) -> ReportScope {
        match &actor.barangay_id {
            Some(barangay_id) => ReportScope::Barangay {
                barangay_id: barangay_id.clone(),
                approved_only: true,
            },
            None => ReportScope::Nothing,
        }
    }
    fn can_view_barangay(&self, actor: &Actor, barangay_id: &Id) -> bool {
        actor.belongs_to(barangay_id)
    }
    fn can_browse_barangays(&self) -> bool {
        false
    }
    fn can_browse_categories(&self) -> bool {
        false
    }
}

/// Residents see every report but only touch their own.
#[derive(Debug, Clone, Copy)]
pub struct ResidentPolicy;

impl AccessPolicy for ResidentPolicy {
    fn can_view(&self, _: &Actor, _: &Report) -> bool {
        true
    }
    fn can_submit(&self, _: &Actor) -> bool {
        true
    }
    fn can_mutate(&self, actor: &Actor, report: &Report, mutation: Mutation) -> bool {
        if !report.is_owned_by(&actor.user_id) {
            return false;
        }
        match mutation {
            Mutation::Edit | Mutation::Delete => report.status == ReportStatus::PendingApproval,
            Mutation::RequestReopen => report.status.is_settled(),
            Mutation::Review | Mutation::ChangeStatus => false,
        }
    }
    fn visible_reports(&self, _: &Actor) -> ReportScope {
        ReportScope::All
    }
    fn can_view_barangay(&self, _: &Actor, _: &Id) -> bool {
        true
    }
    fn can_browse_barangays(&self) -> bool {
        true
    }
    fn can_browse_categories(&self) -> bool {
        true
    }
}

/// No rights at all.
#[derive(Debug, Clone, Copy)]
pub struct GuestPolicy;

impl AccessPolicy for GuestPolicy {
    fn can_view(&self, _: &Actor, _: &Report) -> bool {
        false
    }
    fn can_submit(&self, _: &Actor) -> bool {
        false
    }
    fn can_mutate(&self, _: &Actor, _: &Report, _: Mutation) -> bool {
        false
    }
    fn visible_reports(&self, _: &Actor) -> ReportScope {
        ReportScope::Nothing
    }
    fn can_view_barangay(&self, _: &Actor, _: &Id) -> bool {
        false
    }
    fn can_browse_barangays(&self) -> bool {
        false
    }
    fn can_browse_categories(&self) -> bool {
        false
    }
    fn can_delete_comment(&self, _: &Actor, _: &Comment) -> bool {
        false
    }
}
