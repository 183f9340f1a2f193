use crate::{
    lifecycle::TransitionError,
    repositories,
    util::validate::{BarangayInvalidation, CommentInvalidation, ReportInvalidation},
};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Title can't be blank")]
    Title,
    #[error("Description can't be blank")]
    Description,
    #[error("Address can't be blank")]
    Address,
    #[error("Invalid position")]
    InvalidPosition,
    #[error("Location must be within Parañaque City or an allowed zone")]
    OutOfServiceArea,
    #[error("The address could not be located, please check it and try again")]
    AddressNotResolved,
    #[error("Invalid status '{0}'")]
    Status(String),
    #[error("Invalid priority '{0}'")]
    Priority(String),
    #[error("Invalid email address")]
    Email,
    #[error("The user already exists")]
    UserExists,
    #[error("The user does not exist")]
    UserDoesNotExist,
    #[error("Only resident accounts can be banned")]
    OnlyResidentsCanBeBanned,
    #[error("Name can't be blank")]
    Name,
    #[error("The barangay does not exist")]
    UnknownBarangay,
    #[error("A barangay with this name already exists")]
    BarangayExists,
    #[error("This barangay already has a captain")]
    BarangayHasCaptain,
    #[error("The category does not exist")]
    UnknownCategory,
    #[error("A category with this name already exists")]
    CategoryExists,
    #[error("The report does not exist")]
    UnknownReport,
    #[error("Comment is too short (minimum is 3 characters)")]
    CommentTooShort,
    #[error("You are not authorized to perform this action")]
    Forbidden,
    #[error(transparent)]
    Transition(TransitionError),
    #[error(transparent)]
    Repo(#[from] repositories::Error),
}

impl From<TransitionError> for Error {
    fn from(err: TransitionError) -> Self {
        match err {
            TransitionError::NotPermitted => Self::Forbidden,
            err => Self::Transition(err),
        }
    }
}

impl From<ReportInvalidation> for Error {
    fn from(err: ReportInvalidation) -> Self {
        match err {
            ReportInvalidation::Title => Self::Title,
            ReportInvalidation::Description => Self::Description,
            ReportInvalidation::Address => Self::Address,
            ReportInvalidation::Position => Self::InvalidPosition,
        }
    }
}

impl From<BarangayInvalidation> for Error {
    fn from(err: BarangayInvalidation) -> Self {
        match err {
            BarangayInvalidation::Name => Self::Name,
            BarangayInvalidation::Address => Self::Address,
            BarangayInvalidation::ContactEmail => Self::Email,
        }
    }
}

impl From<CommentInvalidation> for Error {
    fn from(_: CommentInvalidation) -> Self {
        Self::CommentTooShort
    }
}

impl From<pqc_entities::email::EmailAddressParseError> for Error {
    fn from(_: pqc_entities::email::EmailAddressParseError) -> Self {
        Self::Email
    }
}
