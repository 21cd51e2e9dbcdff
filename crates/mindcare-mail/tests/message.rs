use lettre::message::Mailbox;
use mindcare_mail::error::MailError;
use mindcare_mail::message::{build_report_message, parse_address, REPORT_SUBJECT};
use mindcare_mail::{ReportMailer, SmtpConfig};

const PDF: &[u8] = b"%PDF-1.3\n%fake\n";

fn clinic() -> Mailbox {
    parse_address("clinic@example.com").unwrap()
}

#[test]
fn report_message_has_subject_recipient_and_attachment() {
    let message = build_report_message(
        clinic(),
        "patient@example.org",
        "MindCare_AI_Report.pdf",
        PDF.to_vec(),
    )
    .unwrap();

    assert_eq!(message.headers().get_raw("Subject"), Some(REPORT_SUBJECT));
    assert_eq!(message.headers().get_raw("To"), Some("patient@example.org"));
    assert_eq!(message.headers().get_raw("From"), Some("clinic@example.com"));

    let formatted = String::from_utf8_lossy(&message.formatted()).into_owned();
    assert!(formatted.contains("multipart/mixed"));
    assert!(formatted.contains("application/pdf"));
    assert!(formatted.contains("MindCare_AI_Report.pdf"));
    assert!(formatted.contains("Please find attached your mental health analysis report"));
}

#[test]
fn malformed_recipient_is_rejected() {
    let err = build_report_message(clinic(), "not-an-address", "r.pdf", PDF.to_vec())
        .unwrap_err();
    assert!(matches!(err, MailError::InvalidAddress { ref address, .. } if address == "not-an-address"));
}

#[test]
fn addresses_are_trimmed_before_parsing() {
    let mailbox = parse_address("  someone@example.com ").unwrap();
    assert_eq!(mailbox.email.to_string(), "someone@example.com");
    assert!(parse_address("").is_err());
}

#[test]
fn config_defaults_and_redaction() {
    let config = SmtpConfig::new("sender@example.com", "app-password");
    assert_eq!(config.host, "smtp.gmail.com");
    assert_eq!(config.port, 465);
    assert_eq!(config.sender(), "sender@example.com");

    let debug = format!("{config:?}");
    assert!(debug.contains("<redacted>"));
    assert!(!debug.contains("app-password"));

    let with_sender = SmtpConfig {
        sender: Some("reports@example.com".to_string()),
        ..config
    };
    assert_eq!(with_sender.sender(), "reports@example.com");
}

#[tokio::test]
async fn unreachable_relay_is_a_transport_error() {
    let config = SmtpConfig {
        host: "localhost".to_string(),
        port: 1,
        ..SmtpConfig::new("sender@example.com", "secret")
    };
    let mailer = ReportMailer::new(&config).unwrap();
    assert_eq!(mailer.sender().email.to_string(), "sender@example.com");

    let err = mailer
        .send_report("patient@example.org", "MindCare_AI_Report.pdf", PDF.to_vec())
        .await
        .unwrap_err();
    assert!(matches!(err, MailError::Transport(_)));
}

#[tokio::test]
async fn invalid_recipient_fails_before_connecting() {
    let config = SmtpConfig {
        host: "localhost".to_string(),
        port: 1,
        ..SmtpConfig::new("sender@example.com", "secret")
    };
    let mailer = ReportMailer::new(&config).unwrap();

    let err = mailer
        .send_report("nobody", "MindCare_AI_Report.pdf", PDF.to_vec())
        .await
        .unwrap_err();
    assert!(matches!(err, MailError::InvalidAddress { .. }));
}

#[tokio::test]
async fn username_that_is_not_an_address_needs_a_sender() {
    let err = ReportMailer::new(&SmtpConfig::new("apikey", "secret")).err().unwrap();
    assert!(matches!(err, MailError::InvalidSender { ref address, .. } if address == "apikey"));

    let config = SmtpConfig {
        sender: Some("reports@example.com".to_string()),
        ..SmtpConfig::new("apikey", "secret")
    };
    let mailer = ReportMailer::new(&config).unwrap();
    assert_eq!(mailer.sender().email.to_string(), "reports@example.com");
}
