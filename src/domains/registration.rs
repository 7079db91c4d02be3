//! Beta sign-up: validate the request, pick the welcome template, hand it to the email sender.

pub mod model;
pub mod rest;
pub mod service;
pub mod template;
