//! Outbound email delivery
//!
//! Handlers only see the [`EmailSender`] capability. Two transports implement
//! it: the SendGrid v3 HTTP API (via reqwest) and plain SMTP (via lettre).

mod sendgrid;
mod sender;
mod smtp;
mod types;

pub use sender::EmailSender;
pub use sendgrid::SendGridSender;
pub use smtp::SmtpSender;
pub use types::{EmailMessage, SendGridConfig, SenderIdentity, SmtpConfig};
