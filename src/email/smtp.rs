use anyhow::{Context, Result};
use async_trait::async_trait;
use lettre::{
  message::{header::ContentType, Mailbox},
  transport::smtp::authentication::Credentials,
  Address, AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};

use crate::email::{
  sender::EmailSender,
  types::{EmailMessage, SmtpConfig},
};

pub struct SmtpSender {
  smtp_config: SmtpConfig,
  transporter: AsyncSmtpTransport<Tokio1Executor>,
}

impl SmtpSender {
  pub fn new(smtp_config: SmtpConfig) -> Result<Self> {
    let creds = Credentials::new(smtp_config.username.clone(), smtp_config.password.clone());

    let transporter = if smtp_config.host == "localhost" || smtp_config.host == "mailhog" {
      AsyncSmtpTransport::<Tokio1Executor>::builder_dangerous(&smtp_config.host)
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    } else {
      AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&smtp_config.host)
        .with_context(|| format!("Invalid SMTP relay host {}", smtp_config.host))?
        .credentials(creds)
        .port(smtp_config.port)
        .build()
    };

    Ok(SmtpSender {
      smtp_config,
      transporter,
    })
  }

  fn build_message(message: &EmailMessage) -> Result<Message> {
    let from = Mailbox::new(
      Some(message.from.name.clone()),
      message.from.email.parse::<Address>().context("Invalid sender address")?,
    );

    Message::builder()
      .from(from)
      .to(message.to.parse::<Mailbox>().context("Invalid recipient address")?)
      .subject(&message.subject)
      .header(ContentType::TEXT_HTML)
      .body(message.html_body.clone())
      .context("Failed to build email")
  }
}

#[async_trait]
impl EmailSender for SmtpSender {
  async fn send(&self, message: &EmailMessage) -> Result<()> {
    let email = Self::build_message(message)?;

    self
      .transporter
      .send(email)
      .await
      .with_context(|| format!("SMTP delivery via {} failed", self.smtp_config.host))?;

    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::email::SenderIdentity;

  fn message(to: &str) -> EmailMessage {
    EmailMessage::new(
      SenderIdentity::default(),
      to.to_string(),
      "Test Subject".to_string(),
      "<p>Test Body</p>".to_string(),
    )
  }

  #[tokio::test]
  async fn test_smtp_sender_new_with_localhost() -> Result<()> {
    let smtp_config = SmtpConfig {
      host: "localhost".to_string(),
      port: 1025,
      username: "test_user".to_string(),
      password: "test_password".to_string(),
    };

    let sender = SmtpSender::new(smtp_config)?;
    assert_eq!(sender.smtp_config.host, "localhost");
    assert_eq!(sender.smtp_config.port, 1025);

    Ok(())
  }

  #[tokio::test]
  async fn test_smtp_sender_new_with_remote_relay() -> Result<()> {
    let smtp_config = SmtpConfig {
      host: "smtp.example.com".to_string(),
      port: 587,
      username: "test_user".to_string(),
      password: "test_password".to_string(),
    };

    let sender = SmtpSender::new(smtp_config)?;
    assert_eq!(sender.smtp_config.host, "smtp.example.com");

    Ok(())
  }

  #[test]
  fn test_build_message_is_html() -> Result<()> {
    let email = SmtpSender::build_message(&message("player@example.com"))?;
    let raw = String::from_utf8(email.formatted())?;

    assert!(raw.contains("Content-Type: text/html"));
    assert!(raw.contains("player@example.com"));
    assert!(raw.contains("info@goalhero.eu"));

    Ok(())
  }

  #[test]
  fn test_build_message_rejects_bad_recipient() {
    assert!(SmtpSender::build_message(&message("not an address")).is_err());
  }

  #[tokio::test]
  async fn test_send_to_unreachable_server_fails() -> Result<()> {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    drop(listener);

    let sender = SmtpSender::new(SmtpConfig {
      host: "localhost".to_string(),
      port,
      username: "test".to_string(),
      password: "test".to_string(),
    })?;

    assert!(sender.send(&message("player@example.com")).await.is_err());
    Ok(())
  }
}
