use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize)]
pub struct SmtpConfig {
  pub host: String,
  pub port: u16,
  pub username: String,
  pub password: String,
}

impl Default for SmtpConfig {
  fn default() -> Self {
    SmtpConfig {
      host: "smtp.gmail.com".to_string(),
      port: 587,
      username: "".to_string(),
      password: "".to_string(),
    }
  }
}

#[derive(Debug, Clone, Deserialize)]
pub struct SendGridConfig {
  pub api_key: String,
  pub api_url: String,
}

impl SendGridConfig {
  pub const DEFAULT_API_URL: &'static str = "https://api.sendgrid.com";

  pub fn new(api_key: impl Into<String>) -> Self {
    SendGridConfig {
      api_key: api_key.into(),
      api_url: Self::DEFAULT_API_URL.to_string(),
    }
  }
}

/// The fixed `From` of every outgoing email.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SenderIdentity {
  pub name: String,
  pub email: String,
}

impl Default for SenderIdentity {
  fn default() -> Self {
    SenderIdentity {
      name: "GoalHero Team".to_string(),
      email: "info@goalhero.eu".to_string(),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmailMessage {
  pub from: SenderIdentity,
  pub to: String,
  pub subject: String,
  pub html_body: String,
}

impl EmailMessage {
  pub fn new(from: SenderIdentity, to: String, subject: String, html_body: String) -> Self {
    EmailMessage {
      from,
      to,
      subject,
      html_body,
    }
  }
}
