use crate::{id::Id, time::Timestamp};

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id         : Id,
    pub report_id  : Id,
    pub created_by : Id,
    pub content    : String,
    pub created_at : Timestamp,
}
