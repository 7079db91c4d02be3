use std::sync::Arc;

use crate::{
  config::EmailProvider,
  email::{EmailSender, SendGridSender, SmtpSender},
};

pub mod error;

pub fn init_email_sender(provider: &EmailProvider) -> anyhow::Result<Arc<dyn EmailSender>> {
  let sender: Arc<dyn EmailSender> = match provider {
    EmailProvider::SendGrid(config) => {
      tracing::info!("Delivering email through SendGrid at {}", config.api_url);
      Arc::new(SendGridSender::new(config.clone())?)
    }
    EmailProvider::Smtp(config) => {
      tracing::info!("Delivering email through SMTP relay {}:{}", config.host, config.port);
      Arc::new(SmtpSender::new(config.clone())?)
    }
  };

  Ok(sender)
}
