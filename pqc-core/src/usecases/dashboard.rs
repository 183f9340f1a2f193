use std::collections::HashMap;

use itertools::Itertools;
use strum::IntoEnumIterator;

use super::prelude::*;
use crate::authorization::ReportScope;

pub const OWN_REPORTS_LIMIT: usize = 5;
pub const RECENT_REPORTS_LIMIT: usize = 10;

/// The overview shown after login, depending on the role.
#[derive(Debug, Clone)]
pub enum Dashboard {
    Resident {
        own_reports: Vec<Report>,
        recent_reports: Vec<Report>,
    },
    BarangayOfficial {
        /// `None` if the official is not assigned to a barangay.
        barangay: Option<Barangay>,
        pending_reports: Vec<Report>,
        in_progress_count: usize,
        resolved_count: usize,
    },
    Admin(AdminStatistics),
}

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct AdminStatistics {
    pub total_reports    : usize,
    pub reports_by_status: Vec<(ReportStatus, usize)>,
    pub total_barangays  : usize,
    pub total_categories : usize,
    pub recent_reports   : Vec<Report>,
}

impl AdminStatistics {
    pub fn count_of(&self, status: ReportStatus) -> usize {
        self.reports_by_status
            .iter()
            .find(|(s, _)| *s == status)
            .map(|(_, count)| *count)
            .unwrap_or_default()
    }
}

pub fn dashboard<R>(repo: &R, actor: &Actor) -> Result<Dashboard>
where
    R: Db,
{
    if !actor.is_active() {
        return Err(Error::Forbidden);
    }
    let scope = policy_for(actor).visible_reports(actor);
    let dashboard = match actor.role {
        Role::Resident => {
            let mut own = ReportQuery::new(scope.clone());
            own.created_by = Some(actor.user_id.clone());
            own.limit = Some(OWN_REPORTS_LIMIT);
            let mut recent = ReportQuery::new(scope);
            recent.limit = Some(RECENT_REPORTS_LIMIT);
            Dashboard::Resident {
                own_reports: repo.find_reports(&own)?,
                recent_reports: repo.find_reports(&recent)?,
            }
        }
        Role::BarangayOfficial => {
            let barangay = actor
                .barangay_id
                .as_ref()
                .map(|id| repo.get_barangay(id.as_str()))
                .transpose()
                .or_else(|err| match err {
                    RepoError::NotFound => Ok(None),
                    err => Err(err),
                })?;
            let count = |status| {
                let mut query = ReportQuery::new(scope.clone());
                query.status = Some(status);
                repo.count_reports(&query)
            };
            let mut pending = ReportQuery::new(scope.clone());
            pending.status = Some(ReportStatus::Pending);
            Dashboard::BarangayOfficial {
                barangay,
                pending_reports: repo.find_reports(&pending)?,
                in_progress_count: count(ReportStatus::InProgress)?,
                resolved_count: count(ReportStatus::Resolved)?,
            }
        }
        Role::Admin => {
            debug_assert_eq!(ReportScope::All, scope);
            let reports = repo.find_reports(&ReportQuery::new(scope))?;
            let counts: HashMap<_, _> = reports.iter().counts_by(|r| r.status);
            let reports_by_status = ReportStatus::iter()
                .map(|status| (status, counts.get(&status).copied().unwrap_or_default()))
                .collect();
            Dashboard::Admin(AdminStatistics {
                total_reports: reports.len(),
                reports_by_status,
                total_barangays: repo.count_barangays()?,
                total_categories: repo.count_categories()?,
                recent_reports: reports.into_iter().take(RECENT_REPORTS_LIMIT).collect(),
            })
        }
    };
    Ok(dashboard)
}
