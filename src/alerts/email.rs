//! Email delivery via SMTP
//!
//! [`SmtpRelay`] wraps the blocking `lettre` SMTP transport to send the
//! plain-text alert message. It is the last resort after the local `mail`
//! command.

use super::notifier::Notifier;
use super::types::AlertMessage;
use crate::config::SmtpSettings;
use crate::error::NotifyError;

use lettre::message::header::ContentType;
use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{Message, SmtpTransport, Transport};
use std::time::Duration;

/// Connection and command timeout for the relay
const SMTP_TIMEOUT: Duration = Duration::from_secs(10);

/// Sends alert messages through an SMTP relay
pub struct SmtpRelay {
    host: String,
    settings: SmtpSettings,
    recipient: String,
    local_host: String,
}

impl SmtpRelay {
    /// Create a relay notifier; `None` when no SMTP host is configured
    pub fn from_settings(settings: &SmtpSettings, recipient: &str, local_host: &str) -> Option<Self> {
        let host = settings.host.clone()?;
        Some(Self {
            host,
            settings: settings.clone(),
            recipient: recipient.to_string(),
            local_host: local_host.to_string(),
        })
    }

    /// Sender address: the SMTP user when it is an address, else `syshealth@<host>`
    pub fn from_address(&self) -> String {
        match &self.settings.user {
            Some(user) if user.contains('@') => user.clone(),
            _ => format!("syshealth@{}", self.local_host),
        }
    }

    /// Assemble the MIME message
    pub fn build_message(&self, message: &AlertMessage) -> Result<Message, NotifyError> {
        let from: Mailbox = self.from_address().parse()?;
        let to: Mailbox = self.recipient.parse()?;

        Message::builder()
            .from(from)
            .to(to)
            .subject(message.subject.clone())
            .header(ContentType::TEXT_PLAIN)
            .body(message.body.clone())
            .map_err(|e| NotifyError::Build(e.to_string()))
    }

    fn transport(&self) -> Result<SmtpTransport, NotifyError> {
        let builder = if self.settings.starttls {
            SmtpTransport::starttls_relay(&self.host)?
        } else {
            SmtpTransport::builder_dangerous(&self.host)
        };

        let mut builder = builder
            .port(self.settings.port)
            .timeout(Some(SMTP_TIMEOUT));

        if let (Some(user), Some(pass)) = (&self.settings.user, &self.settings.password) {
            builder = builder.credentials(Credentials::new(user.clone(), pass.clone()));
        }

        Ok(builder.build())
    }
}

impl Notifier for SmtpRelay {
    fn attempt(&self, message: &AlertMessage) -> Result<(), NotifyError> {
        let email = self.build_message(message)?;
        self.transport()?.send(&email)?;
        log::info!("Alert mailed to {} via {}", self.recipient, self.host);
        Ok(())
    }

    fn name(&self) -> &str {
        "smtp"
    }
}
