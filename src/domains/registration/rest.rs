use axum::{
  body::Bytes,
  extract::State,
  response::Json as JsonResponse,
  routing::{post, Router},
};

use super::model::{RegistrationRequest, RegistrationResponse};
use crate::{
  state::{AppState, SharedAppState},
  AppError,
};

/// `OPTIONS` never reaches these handlers, the CORS layer answers it.
pub fn registration_routes() -> Router<SharedAppState> {
  Router::new().route(
    "/beta-register",
    post(beta_register_handler).fallback(method_not_allowed_handler),
  )
}

pub async fn beta_register_handler(
  State(state): State<SharedAppState>,
  body: Bytes,
) -> Result<JsonResponse<RegistrationResponse>, AppError> {
  let payload = RegistrationRequest::from_json_body(&body)?;

  state
    .register_beta(payload)
    .await
    .map(JsonResponse)
    .map_err(Into::into)
}

pub async fn method_not_allowed_handler() -> AppError {
  AppError::method_not_allowed("Method not allowed")
}
