use anyhow::Result;
use async_trait::async_trait;

use crate::email::types::EmailMessage;

/// Delivers a fully rendered message. One call is one delivery attempt;
/// implementations never retry.
#[async_trait]
pub trait EmailSender: Send + Sync {
  async fn send(&self, message: &EmailMessage) -> Result<()>;
}
