use pqc_entities::email::*;

pub trait EmailGateway {
    fn compose_and_send(&self, recipients: &[EmailAddress], email: &EmailContent);

    /// Blocks until every e-mail handed over so far was delivered or given up.
    fn flush(&self) {}
}
