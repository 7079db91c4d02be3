//! Welcome email shown to beta sign-ups, one static variant per language.

use super::model::Language;
use crate::email::{EmailMessage, SenderIdentity};

const WELCOME_HTML_EN: &str = include_str!("templates/welcome_en.html");
const WELCOME_HTML_ES: &str = include_str!("templates/welcome_es.html");

pub struct WelcomeEmail<'a> {
  pub to: &'a str,
  pub language: Language,
}

impl<'a> WelcomeEmail<'a> {
  pub fn new(to: &'a str, language: Language) -> Self {
    Self { to, language }
  }

  pub fn subject(&self) -> &'static str {
    match self.language {
      Language::English => "🎉⚽ Welcome to GoalHero!",
      Language::Spanish => "🎉⚽ ¡Bienvenido a GoalHero!",
    }
  }

  pub fn html_body(&self) -> &'static str {
    match self.language {
      Language::English => WELCOME_HTML_EN,
      Language::Spanish => WELCOME_HTML_ES,
    }
  }

  pub fn render(&self, from: &SenderIdentity) -> EmailMessage {
    EmailMessage::new(
      from.clone(),
      self.to.to_string(),
      self.subject().to_string(),
      self.html_body().to_string(),
    )
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_english_variant() {
    let email = WelcomeEmail::new("a@b.com", Language::English);
    assert_eq!(email.subject(), "🎉⚽ Welcome to GoalHero!");
    assert!(email.html_body().contains(r#"<html lang="en">"#));
    assert!(email.html_body().contains("Welcome to the Beta!"));
  }

  #[test]
  fn test_spanish_variant() {
    let email = WelcomeEmail::new("a@b.com", Language::Spanish);
    assert_eq!(email.subject(), "🎉⚽ ¡Bienvenido a GoalHero!");
    assert!(email.html_body().contains(r#"<html lang="es">"#));
    assert!(email.html_body().contains("¡Bienvenido a la Beta!"));
  }

  #[test]
  fn test_both_variants_link_contact_address() {
    for language in [Language::English, Language::Spanish] {
      let body = WelcomeEmail::new("a@b.com", language).html_body();
      assert!(body.contains("mailto:info@goalhero.eu"));
      assert!(body.contains("https://www.goalhero.eu"));
    }
  }

  #[test]
  fn test_both_variants_show_logo_image() {
    for language in [Language::English, Language::Spanish] {
      let body = WelcomeEmail::new("a@b.com", language).html_body();
      assert!(body.contains(r#"<img src="https://www.goalhero.eu/assets/icon.png" alt="GoalHero Logo" />"#));
    }
  }

  #[test]
  fn test_render() {
    let from = SenderIdentity::default();
    let message = WelcomeEmail::new("player@example.com", Language::Spanish).render(&from);

    assert_eq!(message.from, from);
    assert_eq!(message.to, "player@example.com");
    assert_eq!(message.subject, "🎉⚽ ¡Bienvenido a GoalHero!");
    assert_eq!(message.html_body, WELCOME_HTML_ES);
  }
}
