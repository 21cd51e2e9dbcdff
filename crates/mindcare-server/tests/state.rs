use std::collections::HashMap;

use mindcare_core::models::analysis::AnalysisResult;
use mindcare_core::models::scores::SubscaleScores;
use mindcare_core::models::severity::SeverityLabel;
use mindcare_server::config::AppConfig;
use mindcare_server::state::SessionStore;

fn result(label: &str) -> AnalysisResult {
    AnalysisResult {
        label: SeverityLabel::new(label).unwrap(),
        scores: SubscaleScores::default(),
        recommendations: Vec::new(),
        analyzed_at: "2026-10-18T09:30:00Z".parse().unwrap(),
    }
}

fn config(vars: &[(&str, &str)]) -> eyre::Result<AppConfig> {
    let vars: HashMap<String, String> = vars
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    AppConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn session_store_evicts_oldest_first() {
    let mut store = SessionStore::new(2);
    let first = store.insert(result("Normal"));
    let second = store.insert(result("Mild"));
    let third = store.insert(result("Severe"));

    assert_eq!(store.len(), 2);
    assert!(store.get(&first).is_none());
    assert_eq!(store.get(&second).unwrap().label.as_str(), "Mild");
    assert_eq!(store.get(&third).unwrap().label.as_str(), "Severe");
}

#[test]
fn reanalysis_creates_a_new_session() {
    let mut store = SessionStore::new(4);
    let a = store.insert(result("Normal"));
    let b = store.insert(result("Normal"));
    assert_ne!(a, b);
    assert_eq!(store.len(), 2);
}

#[test]
fn defaults_apply_when_nothing_is_set() {
    let config = config(&[]).unwrap();
    assert_eq!(config.bind_addr, "0.0.0.0:8080");
    assert_eq!(config.session_capacity, 1024);
    assert!(config.smtp.is_none());
    assert!(config.logo_path.is_none());
    assert!(config.report_styles().scratch_dir.is_none());
}

#[test]
fn smtp_needs_both_username_and_password() {
    assert!(config(&[("MINDCARE_SMTP_USERNAME", "a@example.com")]).unwrap().smtp.is_none());
    assert!(config(&[("MINDCARE_SMTP_PASSWORD", "pw")]).unwrap().smtp.is_none());
    assert!(
        config(&[("MINDCARE_SMTP_USERNAME", "a@example.com"), ("MINDCARE_SMTP_PASSWORD", "  ")])
            .unwrap()
            .smtp
            .is_none()
    );

    let smtp = config(&[
        ("MINDCARE_SMTP_USERNAME", "a@example.com"),
        ("MINDCARE_SMTP_PASSWORD", "pw"),
        ("MINDCARE_SMTP_PORT", "587"),
        ("MINDCARE_SENDER", "reports@example.com"),
    ])
    .unwrap()
    .smtp
    .unwrap();
    assert_eq!(smtp.host, "smtp.gmail.com");
    assert_eq!(smtp.port, 587);
    assert_eq!(smtp.sender(), "reports@example.com");
}

#[test]
fn invalid_numbers_are_rejected() {
    assert!(config(&[("MINDCARE_SESSION_CAPACITY", "lots")]).is_err());
    assert!(config(&[("MINDCARE_SESSION_CAPACITY", "0")]).is_err());
    assert!(config(&[
        ("MINDCARE_SMTP_USERNAME", "a@example.com"),
        ("MINDCARE_SMTP_PASSWORD", "pw"),
        ("MINDCARE_SMTP_PORT", "99999"),
    ])
    .is_err());
}

#[test]
fn paths_come_from_the_environment() {
    let config = config(&[
        ("MINDCARE_MODEL_PATH", "/srv/model.json"),
        ("MINDCARE_LABEL_ENCODER_PATH", "/srv/labels.json"),
        ("MINDCARE_LOGO_PATH", "/srv/logo.png"),
        ("MINDCARE_SCRATCH_DIR", "/var/tmp/mindcare"),
    ])
    .unwrap();

    assert_eq!(config.model_path.to_str(), Some("/srv/model.json"));
    assert_eq!(config.label_encoder_path.to_str(), Some("/srv/labels.json"));
    let styles = config.report_styles();
    assert_eq!(styles.logo_path.unwrap().to_str(), Some("/srv/logo.png"));
    assert_eq!(styles.scratch_dir.unwrap().to_str(), Some("/var/tmp/mindcare"));
}
