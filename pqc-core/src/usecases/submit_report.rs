use super::{
    lat_lng, load_barangay, load_category, notifications::transition_events, parse_priority, prelude::*,
    resolve_position, spam_review::author_activity,
};
use crate::{
    geofence::Geofence,
    lifecycle::{self, ReportAction},
    spam,
    util::validate::Validate,
};

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewReport {
    pub title       : String,
    pub description : String,
    pub address     : String,
    pub lat         : Option<f64>,
    pub lng         : Option<f64>,
    pub priority    : Option<String>,
    pub barangay_id : String,
    pub category_id : String,
}

#[derive(Debug)]
pub struct SubmittedReport {
    pub report: Report,
    pub potential_spam: bool,
    pub events: Vec<NotificationEvent>,
}

pub fn submit_report<R, G>(
    repo: &R,
    geocoder: &G,
    geofence: &Geofence,
    actor: &Actor,
    new_report: NewReport,
) -> Result<SubmittedReport>
where
    R: Db,
    G: GeoCodingGateway + ?Sized,
{
    if !policy_for(actor).can_submit(actor) {
        return Err(Error::Forbidden);
    }
    let transition = lifecycle::transition(None, ReportAction::Submit, actor.role)?;

    let NewReport {
        title,
        description,
        address,
        lat,
        lng,
        priority,
        barangay_id,
        category_id,
    } = new_report;

    let priority = match (actor.role, priority.as_deref()) {
        (Role::Resident, _) | (_, None) => Priority::default(),
        (_, Some(p)) => parse_priority(p)?,
    };
    let barangay = load_barangay(repo, &barangay_id)?;
    let category = load_category(repo, &category_id)?;

    let now = Timestamp::now();
    let mut report = Report {
        id: Id::new(),
        title: title.trim().to_string(),
        description: description.trim().to_string(),
        address: address.trim().to_string(),
        pos: None,
        status: transition.to,
        priority,
        created_by: actor.user_id.clone(),
        barangay_id: barangay.id,
        category_id: category.id,
        created_at: now,
        updated_at: now,
        resolved_at: None,
    };
    report.validate()?;

    let pos = resolve_position(geocoder, &report.address, lat_lng(lat, lng)?)?;
    if !geofence.is_allowed(pos) {
        log::info!("Rejected report outside of the service area at {pos}");
        return Err(Error::OutOfServiceArea);
    }
    report.pos = Some(pos);

    repo.create_report(report.clone())?;
    log::info!(
        "Report {} submitted by user {}",
        report.id,
        actor.user_id
    );

    let activity = author_activity(repo, actor.user_id.as_str(), now)?;
    let potential_spam = spam::is_potential_spam(&report.description, activity);
    if potential_spam {
        log::warn!(
            "Report {} of user {} is potential spam ({activity:?})",
            report.id,
            actor.user_id
        );
    }

    let events = transition_events(repo, &transition, &report, potential_spam)?;
    Ok(SubmittedReport {
        report,
        potential_spam,
        events,
    })
}
