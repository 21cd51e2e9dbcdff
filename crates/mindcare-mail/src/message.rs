use lettre::message::header::ContentType;
use lettre::message::{Attachment, Mailbox, MultiPart, SinglePart};
use lettre::Message;

use crate::error::MailError;

pub const REPORT_SUBJECT: &str = "MindCare AI – Mental Health Analysis Report";
pub const REPORT_BODY: &str =
    "Please find attached your mental health analysis report generated by MindCare AI.";

/// Parse and validate a single email address.
pub fn parse_address(address: &str) -> Result<Mailbox, MailError> {
    address
        .trim()
        .parse::<Mailbox>()
        .map_err(|source| MailError::InvalidAddress {
            address: address.to_string(),
            source,
        })
}

/// Build the report email: a plain-text body plus the PDF attachment.
pub fn build_report_message(
    sender: Mailbox,
    recipient: &str,
    filename: &str,
    pdf: Vec<u8>,
) -> Result<Message, MailError> {
    let pdf_type =
        ContentType::parse("application/pdf").map_err(|e| MailError::ContentType(e.to_string()))?;

    let message = Message::builder()
        .from(sender)
        .to(parse_address(recipient)?)
        .subject(REPORT_SUBJECT)
        .multipart(
            MultiPart::mixed()
                .singlepart(SinglePart::plain(REPORT_BODY.to_string()))
                .singlepart(Attachment::new(filename.to_string()).body(pdf, pdf_type)),
        )?;

    Ok(message)
}
