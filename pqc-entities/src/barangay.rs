use crate::{email::EmailAddress, geo::MapPoint, id::Id, time::Timestamp};

/// A local district that owns reports and users.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq)]
pub struct Barangay {
    pub id             : Id,
    pub name           : String,
    pub description    : Option<String>,
    pub address        : Option<String>,
    pub contact_number : Option<String>,
    pub contact_email  : Option<EmailAddress>,
    pub pos            : Option<MapPoint>,
    pub created_at     : Timestamp,
}
