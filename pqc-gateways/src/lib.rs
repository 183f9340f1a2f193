pub mod email;
pub mod notify;
pub mod opencage;
pub mod user_communication;
