use pqc_entities::{barangay::Barangay, comment::Comment, report::Report};
use thiserror::Error;

pub use fast_chemail::is_valid_email;

pub const MIN_COMMENT_LEN: usize = 3;

pub trait Validate {
    type Error;
    fn validate(&self) -> Result<(), Self::Error>;
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportInvalidation {
    #[error("Title can't be blank")]
    Title,
    #[error("Description can't be blank")]
    Description,
    #[error("Address can't be blank")]
    Address,
    #[error("Invalid position")]
    Position,
}

impl Validate for Report {
    type Error = ReportInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.title.trim().is_empty() {
            return Err(Self::Error::Title);
        }
        if self.description.trim().is_empty() {
            return Err(Self::Error::Description);
        }
        if self.address.trim().is_empty() {
            return Err(Self::Error::Address);
        }
        if self.pos.is_some_and(|pos| !pos.is_valid()) {
            return Err(Self::Error::Position);
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BarangayInvalidation {
    #[error("Name can't be blank")]
    Name,
    #[error("Address can't be blank")]
    Address,
    #[error("Invalid contact email")]
    ContactEmail,
}

impl Validate for Barangay {
    type Error = BarangayInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.name.trim().is_empty() {
            return Err(Self::Error::Name);
        }
        if self.address.as_deref().map_or(true, |a| a.trim().is_empty()) {
            return Err(Self::Error::Address);
        }
        if let Some(email) = &self.contact_email {
            if !is_valid_email(email.as_str()) {
                return Err(Self::Error::ContactEmail);
            }
        }
        Ok(())
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
#[error("Content is too short (minimum is {MIN_COMMENT_LEN} characters)")]
pub struct CommentInvalidation;

impl Validate for Comment {
    type Error = CommentInvalidation;
    fn validate(&self) -> Result<(), Self::Error> {
        if self.content.trim().chars().count() < MIN_COMMENT_LEN {
            return Err(CommentInvalidation);
        }
        Ok(())
    }
}
