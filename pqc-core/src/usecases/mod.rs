mod barangays;
mod categories;
mod comments;
mod dashboard;
mod delete_report;
mod error;
mod notifications;
mod query_reports;
mod reopen_report;
mod review_report;
mod spam_review;
mod submit_report;
mod transition_report;
mod update_report;
mod users;

#[cfg(test)]
pub mod tests;

pub use self::{
    barangays::*, categories::*, comments::*, dashboard::*, delete_report::*, error::Error,
    query_reports::*, reopen_report::*, review_report::*, spam_review::*, submit_report::*,
    transition_report::*, update_report::*, users::*,
};

mod prelude {
    pub use super::error::Error;
    pub type Result<T> = std::result::Result<T, Error>;
    pub use crate::{
        authorization::{policy_for, Actor, Mutation},
        db::*,
        entities::*,
        gateways::{geocode::GeoCodingGateway, notify::NotificationEvent},
        repositories::*,
        RepoError,
    };
}
use self::prelude::*;

/// Loads a report or fails with [`Error::UnknownReport`].
fn load_report<R: ReportRepo>(repo: &R, id: &str) -> Result<Report> {
    repo.get_report(id).map_err(|err| match err {
        RepoError::NotFound => Error::UnknownReport,
        err => err.into(),
    })
}

fn load_barangay<R: BarangayRepo>(repo: &R, id: &str) -> Result<Barangay> {
    repo.get_barangay(id).map_err(|err| match err {
        RepoError::NotFound => Error::UnknownBarangay,
        err => err.into(),
    })
}

fn load_category<R: CategoryRepo>(repo: &R, id: &str) -> Result<Category> {
    repo.get_category(id).map_err(|err| match err {
        RepoError::NotFound => Error::UnknownCategory,
        err => err.into(),
    })
}

fn parse_status(s: &str) -> Result<ReportStatus> {
    s.trim().parse().map_err(|_| Error::Status(s.to_string()))
}

fn parse_priority(s: &str) -> Result<Priority> {
    s.trim().parse().map_err(|_| Error::Priority(s.to_string()))
}

/// Coordinates are only given in pairs.
fn lat_lng(lat: Option<f64>, lng: Option<f64>) -> Result<Option<(f64, f64)>> {
    match (lat, lng) {
        (Some(lat), Some(lng)) => Ok(Some((lat, lng))),
        (None, None) => Ok(None),
        _ => Err(Error::InvalidPosition),
    }
}

/// Explicit coordinates win over geocoding the address.
fn resolve_position<G>(
    geocoder: &G,
    address: &str,
    lat_lng: Option<(f64, f64)>,
) -> Result<MapPoint>
where
    G: GeoCodingGateway + ?Sized,
{
    let (lat, lng) = match lat_lng {
        Some(lat_lng) => lat_lng,
        None => geocoder.resolve_address_lat_lng(address).ok_or_else(|| {
            log::warn!("Unable to geocode address '{address}'");
            Error::AddressNotResolved
        })?,
    };
    MapPoint::try_from_lat_lng_deg(lat, lng).ok_or(Error::InvalidPosition)
}
