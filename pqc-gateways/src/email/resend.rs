use anyhow::Result;
use pqc_entities::email::*;
use serde::{Deserialize, Serialize};
use std::{
    mem,
    sync::{Arc, Mutex, PoisonError},
    thread::{self, JoinHandle},
};

use super::EmailGateway;

pub const DEFAULT_API_BASE_URL: &str = "https://api.resend.com";

/// An email gateway based on resend.com.
#[derive(Debug, Clone)]
pub struct Resend {
    pub api_key: String,
    pub api_base_url: String,
    pub from_email: EmailAddress,
    pending: Arc<Mutex<Vec<JoinHandle<()>>>>,
}

#[derive(Debug, Serialize)]
struct Message {
    from: String,
    to: Vec<String>,
    subject: String,
    text: String,
}

impl Resend {
    pub fn new(api_key: String, api_base_url: String, from_email: EmailAddress) -> Self {
        Self {
            api_key,
            api_base_url,
            from_email,
            pending: Default::default(),
        }
    }

    fn send(&self, message: Message) {
        let url = format!("{}/emails", self.api_base_url.trim_end_matches('/'));
        let key = self.api_key.clone();
        let handle = thread::spawn(move || {
            if let Err(err) = send_raw(&url, &key, &message) {
                log::warn!("Could not send e-mail: {err}");
            }
        });
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        pending.retain(|handle| !handle.is_finished());
        pending.push(handle);
    }

    fn take_pending(&self) -> Vec<JoinHandle<()>> {
        mem::take(&mut *self.pending.lock().unwrap_or_else(PoisonError::into_inner))
    }

    fn message(&self, recipients: &[EmailAddress], email: &EmailContent) -> Message {
        Message {
            from: self.from_email.to_string(),
            to: recipients.iter().map(|r| r.as_str().to_owned()).collect(),
            subject: email.subject.to_owned(),
            text: email.body.to_owned(),
        }
    }
}

#[derive(Debug, Deserialize, thiserror::Error)]
#[error("{message}")]
struct JsonError {
    pub message: String,
}

#[derive(Debug, Deserialize)]
struct Sent {
    id: String,
}

#[cfg(not(test))]
fn send_raw(url: &str, api_key: &str, message: &Message) -> Result<()> {
    let client = reqwest::blocking::Client::new();
    let response = client
        .post(url)
        .bearer_auth(api_key)
        .json(message)
        .send()?;
    if response.status().is_success() {
        let Sent { id } = response.json()?;
        log::info!("E-mail sent: id = {id}");
        Ok(())
    } else {
        let json_error: JsonError = response.json()?;
        Err(json_error.into())
    }
}

/// Don't actually send emails while running the tests.
#[cfg(test)]
fn send_raw(_: &str, _: &str, message: &Message) -> Result<()> {
    log::debug!("Would send e-mail: {message:?}");
    Ok(())
}

impl EmailGateway for Resend {
    fn compose_and_send(&self, recipients: &[EmailAddress], email: &EmailContent) {
        if recipients.is_empty() {
            log::warn!("No valid email addresses specified");
            return;
        }
        log::debug!(
            "Sending e-mails from {} to: {:?}",
            self.from_email,
            recipients
        );
        self.send(self.message(recipients, email));
    }

    fn flush(&self) {
        let pending = self.take_pending();
        if !pending.is_empty() {
            log::debug!("Waiting for {} e-mail(s) to be sent", pending.len());
        }
        for handle in pending {
            if handle.join().is_err() {
                log::error!("Sending an e-mail panicked");
            }
        }
    }
}
