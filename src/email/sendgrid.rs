use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;

use crate::email::{
  sender::EmailSender,
  types::{EmailMessage, SendGridConfig},
};

const MAIL_SEND_PATH: &str = "/v3/mail/send";

/// Sends through the SendGrid v3 `mail/send` endpoint.
pub struct SendGridSender {
  client: Client,
  endpoint: String,
  api_key: String,
}

impl SendGridSender {
  pub fn new(config: SendGridConfig) -> Result<Self> {
    if config.api_key.is_empty() {
      return Err(anyhow!("SendGrid API key is empty"));
    }

    let client = Client::builder()
      .build()
      .context("Failed to build SendGrid HTTP client")?;

    Ok(SendGridSender {
      client,
      endpoint: format!("{}{}", config.api_url.trim_end_matches('/'), MAIL_SEND_PATH),
      api_key: config.api_key,
    })
  }
}

#[derive(Debug, Serialize)]
struct MailSendPayload<'a> {
  personalizations: [Personalization<'a>; 1],
  from: Address<'a>,
  subject: &'a str,
  content: [Content<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Personalization<'a> {
  to: [Address<'a>; 1],
}

#[derive(Debug, Serialize)]
struct Address<'a> {
  email: &'a str,
  #[serde(skip_serializing_if = "Option::is_none")]
  name: Option<&'a str>,
}

#[derive(Debug, Serialize)]
struct Content<'a> {
  #[serde(rename = "type")]
  content_type: &'a str,
  value: &'a str,
}

impl<'a> From<&'a EmailMessage> for MailSendPayload<'a> {
  fn from(message: &'a EmailMessage) -> Self {
    MailSendPayload {
      personalizations: [Personalization {
        to: [Address {
          email: &message.to,
          name: None,
        }],
      }],
      from: Address {
        email: &message.from.email,
        name: Some(&message.from.name),
      },
      subject: &message.subject,
      content: [Content {
        content_type: "text/html",
        value: &message.html_body,
      }],
    }
  }
}

#[async_trait]
impl EmailSender for SendGridSender {
  async fn send(&self, message: &EmailMessage) -> Result<()> {
    let response = self
      .client
      .post(&self.endpoint)
      .bearer_auth(&self.api_key)
      .json(&MailSendPayload::from(message))
      .send()
      .await
      .context("Error sending email")?;

    let status = response.status();
    if status.as_u16() >= 400 {
      let body = response.text().await.unwrap_or_default();
      return Err(anyhow!("SendGrid error: status code {}: {}", status.as_u16(), body));
    }

    tracing::debug!("SendGrid accepted message with status {}", status);
    Ok(())
  }
}
