use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use validator::Validate;

pub const EMAIL_REQUIRED_MESSAGE: &str = "Email is required";
pub const INVALID_LANGUAGE_MESSAGE: &str = "Language must be 'en' or 'es'";

/// Body of `POST /api/beta-register`. A missing or `null` email deserializes to
/// `None` and fails validation the same way an empty string does.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct RegistrationRequest {
  #[serde(default, alias = "Email", alias = "EMAIL")]
  #[validate(
    required(message = "Email is required"),
    length(min = 1, message = "Email is required")
  )]
  pub email: Option<String>,
  #[serde(default, alias = "Language", alias = "LANGUAGE")]
  pub language: Option<String>,
}

impl RegistrationRequest {
  pub fn new(email: impl Into<String>, language: Option<&str>) -> Self {
    Self {
      email: Some(email.into()),
      language: language.map(str::to_string),
    }
  }

  /// Decodes the first JSON value of a request body. Anything after it is
  /// ignored and a `null` body yields an empty request.
  pub fn from_json_body(body: &[u8]) -> Result<Self, serde_json::Error> {
    let mut values = serde_json::Deserializer::from_slice(body).into_iter::<Option<RegistrationRequest>>();
    match values.next() {
      Some(value) => Ok(value?.unwrap_or_default()),
      None => serde_json::from_slice(body),
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RegistrationResponse {
  pub success: bool,
  pub message: String,
}

impl RegistrationResponse {
  pub fn success(message: impl Into<String>) -> Self {
    Self {
      success: true,
      message: message.into(),
    }
  }

  pub fn failure(message: impl Into<String>) -> Self {
    Self {
      success: false,
      message: message.into(),
    }
  }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Language {
  #[default]
  English,
  Spanish,
}

impl Language {
  pub fn code(self) -> &'static str {
    match self {
      Language::English => "en",
      Language::Spanish => "es",
    }
  }

  /// Absent and empty values fall back to the default language.
  pub fn from_optional(value: Option<&str>) -> Result<Self, UnsupportedLanguage> {
    match value {
      None | Some("") => Ok(Language::default()),
      Some(code) => code.parse(),
    }
  }
}

impl FromStr for Language {
  type Err = UnsupportedLanguage;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s {
      "en" => Ok(Language::English),
      "es" => Ok(Language::Spanish),
      other => Err(UnsupportedLanguage(other.to_string())),
    }
  }
}

impl fmt::Display for Language {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.code())
  }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnsupportedLanguage(pub String);

impl std::error::Error for UnsupportedLanguage {}

impl fmt::Display for UnsupportedLanguage {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "unsupported language {:?}", self.0)
  }
}
