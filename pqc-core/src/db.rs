use crate::repositories::*;

/// All repositories of a single storage connection.
pub trait Db: ReportRepo + UserRepo + BarangayRepo + CategoryRepo + CommentRepo {}

impl<T> Db for T where T: ReportRepo + UserRepo + BarangayRepo + CategoryRepo + CommentRepo {}
