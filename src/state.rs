use std::sync::Arc;

use crate::{
  domains::registration::{
    model::{RegistrationRequest, RegistrationResponse},
    service::{RegistrationService, RegistrationServiceError, RegistrationServiceImpl},
  },
  email::{EmailSender, SenderIdentity},
};

pub trait AppState: Clone + Send + Sync + 'static {
  fn register_beta(
    &self,
    req: RegistrationRequest,
  ) -> impl std::future::Future<Output = Result<RegistrationResponse, RegistrationServiceError>> + Send;
}

#[derive(Clone)]
pub struct SharedAppState {
  pub registration_service: Arc<RegistrationServiceImpl>,
}

impl SharedAppState {
  pub fn new(email_sender: Arc<dyn EmailSender>, sender: SenderIdentity) -> Self {
    let registration_service = Arc::new(RegistrationServiceImpl::new(email_sender, sender));

    Self { registration_service }
  }
}

impl AppState for SharedAppState {
  async fn register_beta(&self, req: RegistrationRequest) -> Result<RegistrationResponse, RegistrationServiceError> {
    self.registration_service.register_beta(req).await
  }
}
