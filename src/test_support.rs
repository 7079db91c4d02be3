use std::sync::Arc;

use async_trait::async_trait;
use axum::{
  body::{Body, Bytes},
  http::{Method, Request, StatusCode},
  Router,
};
use serde::Serialize;
use tower::ServiceExt;

use crate::{
  app::create_app,
  email::{EmailMessage, EmailSender, SenderIdentity},
  state::SharedAppState,
};

mockall::mock! {
  pub EmailSender {}

  #[async_trait]
  impl EmailSender for EmailSender {
    async fn send(&self, message: &EmailMessage) -> anyhow::Result<()>;
  }
}

pub fn app_with_sender(sender: impl EmailSender + 'static) -> Router {
  let state = SharedAppState::new(Arc::new(sender), SenderIdentity::default());
  create_app(state)
}

pub async fn send(app: Router, method: Method, uri: &str, body: impl Into<Body>) -> (StatusCode, Bytes) {
  let request = Request::builder()
    .method(method)
    .uri(uri)
    .header("content-type", "application/json")
    .body(body.into())
    .expect("build request");

  let response = app.oneshot(request).await.expect("handle request");
  let status = response.status();
  let body = axum::body::to_bytes(response.into_body(), usize::MAX)
    .await
    .expect("read response body");
  (status, body)
}

pub async fn post_json<T: Serialize>(app: Router, uri: &str, body: &T) -> (StatusCode, Bytes) {
  let body = serde_json::to_vec(body).expect("serialize request body");
  send(app, Method::POST, uri, body).await
}
