use super::{delete_report::purge_report, load_barangay, prelude::*};
use crate::{authorization::ReportScope, text::non_blank, util::validate::Validate};

#[rustfmt::skip]
#[derive(Debug, Clone, Default)]
pub struct NewBarangay {
    pub name           : String,
    pub description    : Option<String>,
    pub address        : Option<String>,
    pub contact_number : Option<String>,
    pub contact_email  : Option<String>,
}

/// Geocoding a barangay is best effort and never blocks.
fn locate<G>(geocoder: &G, address: Option<&str>) -> Option<MapPoint>
where
    G: GeoCodingGateway + ?Sized,
{
    let address = address?;
    let pos = geocoder
        .resolve_address_lat_lng(address)
        .and_then(|(lat, lng)| MapPoint::try_from_lat_lng_deg(lat, lng));
    if pos.is_none() {
        log::warn!("Unable to geocode barangay address '{address}'");
    }
    pos
}

fn apply_fields(barangay: &mut Barangay, new_barangay: NewBarangay) -> Result<()> {
    let NewBarangay {
        name,
        description,
        address,
        contact_number,
        contact_email,
    } = new_barangay;
    barangay.name = name.trim().to_string();
    barangay.description = description.as_deref().and_then(non_blank).map(Into::into);
    barangay.address = address.as_deref().and_then(non_blank).map(Into::into);
    barangay.contact_number = contact_number.as_deref().and_then(non_blank).map(Into::into);
    barangay.contact_email = contact_email
        .as_deref()
        .and_then(non_blank)
        .map(str::parse::<EmailAddress>)
        .transpose()?;
    barangay.validate()?;
    Ok(())
}

fn ensure_unique_name<R>(repo: &R, name: &str, own_id: Option<&Id>) -> Result<()>
where
    R: BarangayRepo,
{
    match repo.try_get_barangay_by_name(name)? {
        Some(existing) if Some(&existing.id) != own_id => Err(Error::BarangayExists),
        _ => Ok(()),
    }
}

pub fn create_barangay<R, G>(
    repo: &R,
    geocoder: &G,
    actor: &Actor,
    new_barangay: NewBarangay,
) -> Result<Barangay>
where
    R: BarangayRepo,
    G: GeoCodingGateway + ?Sized,
{
    if !policy_for(actor).can_manage_barangays() {
        return Err(Error::Forbidden);
    }
    let mut barangay = Barangay {
        id: Id::new(),
        name: String::new(),
        description: None,
        address: None,
        contact_number: None,
        contact_email: None,
        pos: None,
        created_at: Timestamp::now(),
    };
    apply_fields(&mut barangay, new_barangay)?;
    ensure_unique_name(repo, &barangay.name, None)?;
    barangay.pos = locate(geocoder, barangay.address.as_deref());
    repo.create_barangay(barangay.clone())?;
    log::info!("Created barangay {} ({})", barangay.name, barangay.id);
    Ok(barangay)
}

pub fn update_barangay<R, G>(
    repo: &R,
    geocoder: &G,
    actor: &Actor,
    barangay_id: &str,
    new_barangay: NewBarangay,
) -> Result<Barangay>
where
    R: BarangayRepo,
    G: GeoCodingGateway + ?Sized,
{
    if !policy_for(actor).can_manage_barangays() {
        return Err(Error::Forbidden);
    }
    let mut barangay = load_barangay(repo, barangay_id)?;
    let old_address = barangay.address.clone();
    apply_fields(&mut barangay, new_barangay)?;
    ensure_unique_name(repo, &barangay.name, Some(&barangay.id))?;
    if barangay.address != old_address {
        barangay.pos = locate(geocoder, barangay.address.as_deref());
    }
    repo.update_barangay(&barangay)?;
    log::info!("Updated barangay {} ({})", barangay.name, barangay.id);
    Ok(barangay)
}

/// Deletes a barangay and all of its reports.
///
/// Its users stay but no longer belong to any barangay.
pub fn delete_barangay<R>(repo: &R, actor: &Actor, barangay_id: &str) -> Result<()>
where
    R: Db,
{
    if !policy_for(actor).can_manage_barangays() {
        return Err(Error::Forbidden);
    }
    let barangay = load_barangay(repo, barangay_id)?;
    let mut query = ReportQuery::new(ReportScope::All);
    query.barangay_id = Some(barangay.id.clone());
    let reports = repo.find_reports(&query)?;
    for report in &reports {
        purge_report(repo, report.id.as_str())?;
    }
    let users = repo.users_of_barangay(barangay.id.as_str())?;
    for mut user in users.iter().cloned() {
        user.barangay_id = None;
        repo.update_user(&user)?;
    }
    repo.delete_barangay(barangay.id.as_str())?;
    log::info!(
        "Deleted barangay {} with {} report(s), detached {} user(s)",
        barangay.name,
        reports.len(),
        users.len()
    );
    Ok(())
}

pub fn get_barangay<R>(repo: &R, actor: &Actor, barangay_id: &str) -> Result<Barangay>
where
    R: BarangayRepo,
{
    let barangay = load_barangay(repo, barangay_id)?;
    if !policy_for(actor).can_view_barangay(actor, &barangay.id) {
        return Err(Error::Forbidden);
    }
    Ok(barangay)
}

/// All barangays sorted by name.
pub fn list_barangays<R>(repo: &R, actor: &Actor) -> Result<Vec<Barangay>>
where
    R: BarangayRepo,
{
    if !policy_for(actor).can_browse_barangays() {
        return Err(Error::Forbidden);
    }
    Ok(repo.all_barangays()?)
}
