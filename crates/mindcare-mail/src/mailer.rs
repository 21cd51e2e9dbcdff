use std::time::Duration;

use lettre::message::Mailbox;
use lettre::transport::smtp::authentication::Credentials;
use lettre::{AsyncSmtpTransport, AsyncTransport, Tokio1Executor};
use tracing::{info, warn};

use crate::config::SmtpConfig;
use crate::error::MailError;
use crate::message::build_report_message;

const SMTP_TIMEOUT: Duration = Duration::from_secs(30);

/// Sends report emails through one authenticated SMTP relay.
pub struct ReportMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl ReportMailer {
    /// Configure the relay. Fails if the sender (or, without one, the
    /// account username) is not an email address.
    pub fn new(config: &SmtpConfig) -> Result<Self, MailError> {
        let sender = config
            .sender()
            .trim()
            .parse::<Mailbox>()
            .map_err(|source| MailError::InvalidSender {
                address: config.sender().to_string(),
                source,
            })?;

        let transport = AsyncSmtpTransport::<Tokio1Executor>::relay(&config.host)?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .timeout(Some(SMTP_TIMEOUT))
            .build();

        info!(host = %config.host, port = config.port, "SMTP relay configured");
        Ok(Self {
            transport,
            sender,
        })
    }

    pub fn sender(&self) -> &Mailbox {
        &self.sender
    }

    /// Email `pdf` to `recipient` as `filename`.
    pub async fn send_report(
        &self,
        recipient: &str,
        filename: &str,
        pdf: Vec<u8>,
    ) -> Result<(), MailError> {
        let message = build_report_message(self.sender.clone(), recipient, filename, pdf)?;

        match self.transport.send(message).await {
            Ok(response) => {
                info!(code = %response.code(), "report email sent");
                Ok(())
            }
            Err(e) => {
                warn!(error = %e, "report email failed");
                Err(e.into())
            }
        }
    }
}
