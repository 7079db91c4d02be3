use async_trait::async_trait;
use std::{error::Error, sync::Arc};
use validator::{Validate, ValidationErrors};

use super::{
  model::{Language, RegistrationRequest, RegistrationResponse, EMAIL_REQUIRED_MESSAGE, INVALID_LANGUAGE_MESSAGE},
  template::WelcomeEmail,
};
use crate::email::{EmailSender, SenderIdentity};

pub const WELCOME_SENT_MESSAGE: &str = "Welcome email sent successfully!";
pub const WELCOME_FAILED_MESSAGE: &str = "Failed to send welcome email";

#[derive(Debug)]
pub enum RegistrationServiceError {
  ValidationError(String),
  DeliveryError(String),
}

impl Error for RegistrationServiceError {}

impl std::fmt::Display for RegistrationServiceError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      RegistrationServiceError::ValidationError(msg) => write!(f, "Validation Error: {}", msg),
      RegistrationServiceError::DeliveryError(msg) => write!(f, "Delivery Error: {}", msg),
    }
  }
}

#[async_trait]
pub trait RegistrationService: Send + Sync {
  async fn register_beta(&self, req: RegistrationRequest) -> Result<RegistrationResponse, RegistrationServiceError>;
}

pub struct RegistrationServiceImpl {
  email_sender: Arc<dyn EmailSender>,
  sender: SenderIdentity,
}

impl RegistrationServiceImpl {
  pub fn new(email_sender: Arc<dyn EmailSender>, sender: SenderIdentity) -> Self {
    Self { email_sender, sender }
  }
}

fn first_validation_message(errors: &ValidationErrors) -> String {
  errors
    .field_errors()
    .values()
    .flat_map(|errors| errors.iter())
    .find_map(|error| error.message.as_ref().map(|msg| msg.to_string()))
    .unwrap_or_else(|| EMAIL_REQUIRED_MESSAGE.to_string())
}

#[async_trait]
impl RegistrationService for RegistrationServiceImpl {
  async fn register_beta(&self, req: RegistrationRequest) -> Result<RegistrationResponse, RegistrationServiceError> {
    req
      .validate()
      .map_err(|e| RegistrationServiceError::ValidationError(first_validation_message(&e)))?;

    let language = Language::from_optional(req.language.as_deref()).map_err(|e| {
      tracing::warn!("Rejected beta registration: {}", e);
      RegistrationServiceError::ValidationError(INVALID_LANGUAGE_MESSAGE.to_string())
    })?;

    let email = req.email.unwrap_or_default();
    let message = WelcomeEmail::new(&email, language).render(&self.sender);

    match self.email_sender.send(&message).await {
      Ok(()) => {
        tracing::info!("Welcome email ({}) sent to {}", language, email);
        Ok(RegistrationResponse::success(WELCOME_SENT_MESSAGE))
      }
      Err(e) => {
        tracing::error!("Error sending welcome email to {}: {:?}", email, e);
        Err(RegistrationServiceError::DeliveryError(WELCOME_FAILED_MESSAGE.to_string()))
      }
    }
  }
}
