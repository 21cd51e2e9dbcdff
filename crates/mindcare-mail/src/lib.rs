//! mindcare-mail
//!
//! Delivers a generated report as an email attachment over SMTP.

pub mod config;
pub mod error;
pub mod message;
pub mod mailer;

pub use config::SmtpConfig;
pub use mailer::ReportMailer;
