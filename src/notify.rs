//! # Notifications
//!
//! "Your order is ready" messages. The [`Notifier`] trait is the seam the
//! [`StatusService`](crate::status::StatusService) talks to; [`SmsGateway`]
//! is the production implementation on top of the Twilio Messages REST API.

use crate::config::NotificationConfig;
use crate::model::OrderNumber;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::fmt::Display;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, instrument};

/// Name used in the message when the client has none on record.
pub const FALLBACK_NAME: &str = "customer";

const WHATSAPP_PREFIX: &str = "whatsapp:";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    #[default]
    Sms,
    Whatsapp,
}

impl Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Channel::Sms => f.write_str("sms"),
            Channel::Whatsapp => f.write_str("whatsapp"),
        }
    }
}

/// Errors from a notification attempt.
///
/// [`NotifyError::NotConfigured`] means no attempt was made;
/// [`NotifyError::Delivery`] means the provider was contacted and failed.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum NotifyError {
    #[error("Notifications not configured: missing {0}")]
    NotConfigured(String),

    #[error("No phone number to notify for order {0}")]
    MissingRecipient(String),

    #[error("Could not load recipient: {0}")]
    RecipientLookup(String),

    #[error("Notification delivery failed: {0}")]
    Delivery(String),

    /// The HTTP client for the provider could not be built.
    #[error("Notification transport unavailable: {0}")]
    Transport(String),
}

impl NotifyError {
    pub fn is_configuration(&self) -> bool {
        matches!(self, NotifyError::NotConfigured(_))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Recipient {
    pub name: Option<String>,
    pub phone: String,
    pub order_number: OrderNumber,
}

impl Recipient {
    pub fn message(&self) -> String {
        let name = self
            .name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(FALLBACK_NAME);
        format!("Hello {}, your order {} is ready.", name, self.order_number)
    }
}

#[async_trait]
pub trait Notifier: Send + Sync {
    /// Sends the ready message and returns the provider's message id.
    async fn send(&self, recipient: &Recipient, channel: Channel) -> Result<String, NotifyError>;
}

/// Twilio-backed [`Notifier`].
pub struct SmsGateway {
    http: reqwest::Client,
    settings: NotificationConfig,
}

#[derive(Debug, Deserialize)]
struct MessageResource {
    sid: String,
}

impl SmsGateway {
    pub fn new(settings: NotificationConfig) -> Result<Self, NotifyError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .map_err(|e| NotifyError::Transport(e.to_string()))?;
        Ok(Self { http, settings })
    }

    /// Credentials and sender for `channel`, or the first missing setting.
    fn credentials(&self, channel: Channel) -> Result<(&str, &str, &str), NotifyError> {
        let sid = required(&self.settings.account_sid, "notifications.account_sid")?;
        let token = required(&self.settings.auth_token, "notifications.auth_token")?;
        let from = match channel {
            Channel::Whatsapp if self.settings.whatsapp_from.is_some() => {
                required(&self.settings.whatsapp_from, "notifications.whatsapp_from")?
            }
            _ => required(&self.settings.from_number, "notifications.from_number")?,
        };
        Ok((sid, token, from))
    }
}

fn required<'a>(value: &'a Option<String>, key: &str) -> Result<&'a str, NotifyError> {
    value
        .as_deref()
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| NotifyError::NotConfigured(key.to_string()))
}

fn address(number: &str, channel: Channel) -> String {
    match channel {
        Channel::Whatsapp if !number.starts_with(WHATSAPP_PREFIX) => {
            format!("{WHATSAPP_PREFIX}{number}")
        }
        _ => number.to_string(),
    }
}

#[async_trait]
impl Notifier for SmsGateway {
    #[instrument(skip(self, recipient), fields(order_number = %recipient.order_number))]
    async fn send(&self, recipient: &Recipient, channel: Channel) -> Result<String, NotifyError> {
        let (sid, token, from) = self.credentials(channel)?;
        if recipient.phone.trim().is_empty() {
            return Err(NotifyError::MissingRecipient(
                recipient.order_number.to_string(),
            ));
        }
        let to = address(recipient.phone.trim(), channel);
        let from = address(from, channel);

        let url = format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.settings.api_base.trim_end_matches('/'),
            sid
        );
        let body = recipient.message();
        let form = [
            ("To", to.as_str()),
            ("From", from.as_str()),
            ("Body", body.as_str()),
        ];
        debug!(%channel, "Posting message");

        let response = self
            .http
            .post(url)
            .basic_auth(sid, Some(token))
            .form(&form)
            .send()
            .await
            .map_err(|e| NotifyError::Delivery(e.to_string()))?
            .error_for_status()
            .map_err(|e| NotifyError::Delivery(e.to_string()))?;

        let message: MessageResource = response
            .json()
            .await
            .map_err(|e| NotifyError::Delivery(e.to_string()))?;
        Ok(message.sid)
    }
}
