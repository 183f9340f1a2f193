#[macro_use]
extern crate log;

mod barangays;
mod categories;
mod comments;
mod queries;
mod reopen_report;
mod review_report;
mod submit_report;
mod update_report;
mod users;

pub mod prelude {
    pub use super::{
        barangays::*, categories::*, comments::*, queries::*, reopen_report::*,
        review_report::*, submit_report::*, update_report::*, users::*,
    };
}

pub mod error;

pub type Result<T> = std::result::Result<T, error::AppError>;

pub(crate) use pqc_core::{
    authorization::Actor,
    entities::*,
    gateways::{
        geocode::GeoCodingGateway,
        notify::{NotificationEvent, NotificationGateway},
    },
    geofence::Geofence,
    repositories::*,
    usecases,
};

#[cfg(test)]
pub(crate) mod tests;

pub(crate) mod memory {
    pub use pqc_db_memory::Connections;
}

/// Sends the notifications of a committed use case.
fn dispatch(notify: &dyn NotificationGateway, events: Vec<NotificationEvent>) {
    for event in events {
        debug!("Dispatching {} notification", event.kind());
        notify.notify(event);
    }
}

