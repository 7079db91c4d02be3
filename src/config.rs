use anyhow::{anyhow, bail, Context, Result};

use crate::email::{SendGridConfig, SenderIdentity, SmtpConfig};

#[derive(Debug, Clone)]
pub enum EmailProvider {
  SendGrid(SendGridConfig),
  Smtp(SmtpConfig),
}

/// Process configuration. Built once at startup and handed to whatever needs it.
#[derive(Debug, Clone)]
pub struct Config {
  pub bind_address: String,
  pub sender: SenderIdentity,
  pub email_provider: EmailProvider,
}

impl Config {
  pub fn from_env() -> Result<Self> {
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Builds the configuration from an arbitrary key lookup. Empty values count as unset.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
  where
    F: Fn(&str) -> Option<String>,
  {
    let get = |key: &str| lookup(key).filter(|value| !value.is_empty());
    let require = |key: &str| get(key).ok_or_else(|| anyhow!("{} environment variable must be set", key));

    let defaults = SenderIdentity::default();
    let sender = SenderIdentity {
      name: get("SENDER_NAME").unwrap_or(defaults.name),
      email: get("SENDER_EMAIL").unwrap_or(defaults.email),
    };

    let provider = get("EMAIL_PROVIDER").unwrap_or_else(|| "sendgrid".to_string());
    let email_provider = match provider.to_ascii_lowercase().as_str() {
      "sendgrid" => EmailProvider::SendGrid(SendGridConfig {
        api_key: require("SENDGRID_API_KEY")?,
        api_url: get("SENDGRID_API_URL").unwrap_or_else(|| SendGridConfig::DEFAULT_API_URL.to_string()),
      }),
      "smtp" => {
        let defaults = SmtpConfig::default();
        let port = match get("SMTP_PORT") {
          Some(port) => port
            .parse::<u16>()
            .with_context(|| format!("SMTP_PORT must be a valid port, got {}", port))?,
          None => defaults.port,
        };
        EmailProvider::Smtp(SmtpConfig {
          host: get("SMTP_HOST").unwrap_or(defaults.host),
          port,
          username: require("SMTP_USERNAME")?,
          password: require("SMTP_PASSWORD")?,
        })
      }
      other => bail!("Unknown EMAIL_PROVIDER {}, expected sendgrid or smtp", other),
    };

    Ok(Config {
      bind_address: get("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0:8000".to_string()),
      sender,
      email_provider,
    })
  }
}
