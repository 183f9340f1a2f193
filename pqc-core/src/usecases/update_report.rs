use super::{
    lat_lng, load_category, load_report, notifications::transition_events, parse_priority,
    parse_status, prelude::*, resolve_position,
};
use crate::{
    geofence::Geofence,
    lifecycle::{self, ReportAction},
    util::validate::Validate,
};

/// Changes to a report, `None` keeps the current value.
#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct ReportUpdate {
    pub title       : Option<String>,
    pub description : Option<String>,
    pub address     : Option<String>,
    pub lat         : Option<f64>,
    pub lng         : Option<f64>,
    pub category_id : Option<String>,
    pub priority    : Option<String>,
    pub status      : Option<String>,
}

impl ReportUpdate {
    fn is_edit(&self) -> bool {
        self.title.is_some()
            || self.description.is_some()
            || self.address.is_some()
            || self.lat.is_some()
            || self.lng.is_some()
            || self.category_id.is_some()
            || self.priority.is_some()
    }
}

#[derive(Debug)]
pub struct UpdatedReport {
    pub report: Report,
    pub events: Vec<NotificationEvent>,
}

pub fn update_report<R, G>(
    repo: &R,
    geocoder: &G,
    geofence: &Geofence,
    actor: &Actor,
    report_id: &str,
    update: ReportUpdate,
) -> Result<UpdatedReport>
where
    R: Db,
    G: GeoCodingGateway + ?Sized,
{
    let new_status = update.status.as_deref().map(parse_status).transpose()?;
    let new_priority = update.priority.as_deref().map(parse_priority).transpose()?;
    let new_lat_lng = lat_lng(update.lat, update.lng)?;

    let mut report = load_report(repo, report_id)?;
    let policy = policy_for(actor);
    if !policy.can_view(actor, &report) {
        return Err(Error::Forbidden);
    }

    let transition = match new_status {
        Some(status) if status != report.status => {
            let t = lifecycle::transition(
                Some(report.status),
                ReportAction::ChangeStatus(status),
                actor.role,
            )?;
            if !policy.can_mutate(actor, &report, Mutation::ChangeStatus) {
                return Err(Error::Forbidden);
            }
            Some(t)
        }
        _ => None,
    };

    if update.is_edit() {
        if !policy.can_mutate(actor, &report, Mutation::Edit) {
            return Err(Error::Forbidden);
        }
        let ReportUpdate {
            title,
            description,
            address,
            category_id,
            ..
        } = update;
        if let Some(title) = title {
            report.title = title.trim().to_string();
        }
        if let Some(description) = description {
            report.description = description.trim().to_string();
        }
        if let Some(category_id) = category_id {
            report.category_id = load_category(repo, &category_id)?.id;
        }
        if let Some(priority) = new_priority {
            if actor.role == Role::Resident {
                log::debug!("Ignoring priority {priority} requested by a resident");
            } else {
                report.priority = priority;
            }
        }
        let address_changed = address
            .as_deref()
            .is_some_and(|a| a.trim() != report.address);
        if let Some(address) = address {
            report.address = address.trim().to_string();
        }
        report.validate()?;
        if address_changed || new_lat_lng.is_some() {
            let pos = resolve_position(geocoder, &report.address, new_lat_lng)?;
            if !geofence.is_allowed(pos) {
                return Err(Error::OutOfServiceArea);
            }
            report.pos = Some(pos);
        }
        report.updated_at = Timestamp::now();
    }

    if let Some(t) = &transition {
        lifecycle::apply(&mut report, t, Timestamp::now());
    }
    repo.update_report(&report)?;
    log::info!("Report {} updated by user {}", report.id, actor.user_id);

    let events = match &transition {
        Some(t) => transition_events(repo, t, &report, false)?,
        None => vec![],
    };
    Ok(UpdatedReport { report, events })
}
