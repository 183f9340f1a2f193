use crate::config;
use pqc_core::gateways::{email::EmailGateway, geocode::GeoCodingGateway};
use pqc_entities::email::*;
use pqc_gateways::{
    email::{resend::Resend, send_to_json_file::SendToJsonFile},
    notify::Notify,
    opencage::OpenCage,
};

pub fn notification_gateway(email: &config::Email, notify: &config::Notifications) -> Notify {
    let email_gw = email_gateway(email.gateway.as_ref());
    Notify::new(email_gw, notify.notify_on.clone())
}

pub fn geocoding_gateway(cfg: &config::Geocoding) -> Box<dyn GeoCodingGateway + Send + Sync> {
    match &cfg.gateway {
        Some(config::GeocodingGateway::OpenCage { api_key, region }) => {
            log::info!("Use OpenCage geocoding gateway");
            Box::new(OpenCage::new(api_key.clone(), region.clone()))
        }
        None => {
            log::warn!("No geocoding gateway was configured");
            Box::new(DummyGeoGw)
        }
    }
}

pub fn email_gateway(cfg: Option<&config::EmailGateway>) -> EmailGw {
    match cfg {
        Some(config::EmailGateway::Resend {
            api_key,
            api_base_url,
            sender_address,
        }) => EmailGw::new(Resend::new(
            api_key.clone(),
            api_base_url.clone(),
            sender_address.clone(),
        )),
        Some(config::EmailGateway::EmailToJsonFile { dir }) => {
            match SendToJsonFile::try_new(dir) {
                Ok(gw) => EmailGw::new(gw),
                Err(err) => {
                    log::warn!(
                        "Unable to write e-mails into {}: {err}",
                        dir.display()
                    );
                    EmailGw::new(DummyMailGw)
                }
            }
        }
        None => {
            log::warn!("No eMail gateway was configured");
            EmailGw::new(DummyMailGw)
        }
    }
}

struct DummyMailGw;

impl EmailGateway for DummyMailGw {
    fn compose_and_send(&self, _recipients: &[EmailAddress], email: &EmailContent) {
        log::debug!(
            "Cannot send '{}' because no e-mail gateway was configured",
            email.subject
        );
    }
}

struct DummyGeoGw;

impl GeoCodingGateway for DummyGeoGw {
    fn resolve_address_lat_lng(&self, addr: &str) -> Option<(f64, f64)> {
        log::debug!("Cannot resolve '{addr}' because no geocoding gateway was configured");
        None
    }
}

pub struct EmailGw(Box<dyn EmailGateway + Send + Sync + 'static>);

impl EmailGw {
    pub fn new<G>(gw: G) -> Self
    where
        G: EmailGateway + Send + Sync + 'static,
    {
        Self(Box::new(gw))
    }
}

impl EmailGateway for EmailGw {
    fn compose_and_send(&self, recipients: &[EmailAddress], email: &EmailContent) {
        self.0.compose_and_send(recipients, email);
    }

    fn flush(&self) {
        self.0.flush();
    }
}
