use jfs::Store;
use pqc_core::{entities::Timestamp, gateways::email::EmailGateway};
use pqc_entities::email::*;
use serde::{Deserialize, Serialize};
use std::{io, path::Path};

/// Stores every e-mail as a JSON file instead of sending it.
pub struct SendToJsonFile {
    json_store: Store,
}

impl SendToJsonFile {
    pub fn try_new<P: AsRef<Path>>(directory: P) -> io::Result<Self> {
        let json_store = Store::new(directory)?;
        Ok(Self { json_store })
    }
    pub fn path(&self) -> &Path {
        self.json_store.path()
    }
}

#[derive(Debug, Deserialize, Serialize)]
struct JsonEmail {
    to: String,
    subject: String,
    body: String,
}

impl JsonEmail {
    fn new(to: &EmailAddress, content: &EmailContent) -> Self {
        Self {
            to: to.as_str().to_owned(),
            subject: content.subject.to_owned(),
            body: content.body.to_owned(),
        }
    }
}

impl EmailGateway for SendToJsonFile {
    fn compose_and_send(&self, recipients: &[EmailAddress], content: &EmailContent) {
        let now = Timestamp::now().as_millis();
        for (i, to) in recipients.iter().enumerate() {
            let key = format!("{now}-{i}-{}", to.as_str());
            let email = JsonEmail::new(to, content);
            match self.json_store.save_with_id(&email, &key) {
                Ok(_) => log::debug!("Saved e-mail to {to} as {key}.json"),
                Err(err) => log::warn!("Unable to save email in JSON file: {err}"),
            }
        }
    }
}
