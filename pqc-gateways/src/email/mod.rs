pub use pqc_core::gateways::email::EmailGateway;

pub mod resend;
pub mod send_to_json_file;
