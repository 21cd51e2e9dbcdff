use std::path::PathBuf;

use eyre::WrapErr;

use mindcare_export::styles::ReportStyles;
use mindcare_mail::config::{DEFAULT_SMTP_HOST, DEFAULT_SMTP_PORT};
use mindcare_mail::SmtpConfig;

use crate::state::DEFAULT_SESSION_CAPACITY;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_MODEL_PATH: &str = "model/mental_health_model.json";
pub const DEFAULT_LABEL_ENCODER_PATH: &str = "model/label_encoder.json";

/// Process configuration, read once at startup.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub bind_addr: String,
    pub model_path: PathBuf,
    pub label_encoder_path: PathBuf,
    pub logo_path: Option<PathBuf>,
    pub scratch_dir: Option<PathBuf>,
    pub session_capacity: usize,
    /// Present only when both SMTP username and password are set.
    pub smtp: Option<SmtpConfig>,
}

impl AppConfig {
    pub fn from_env() -> eyre::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from `lookup`, which returns the value of a
    /// variable or `None` when unset. Empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> eyre::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let session_capacity = match get("MINDCARE_SESSION_CAPACITY") {
            Some(v) => v
                .parse::<usize>()
                .wrap_err_with(|| format!("MINDCARE_SESSION_CAPACITY is not a number: {v}"))?,
            None => DEFAULT_SESSION_CAPACITY,
        };
        if session_capacity == 0 {
            eyre::bail!("MINDCARE_SESSION_CAPACITY must be positive");
        }

        let smtp = match (get("MINDCARE_SMTP_USERNAME"), get("MINDCARE_SMTP_PASSWORD")) {
            (Some(username), Some(password)) => {
                let port = match get("MINDCARE_SMTP_PORT") {
                    Some(v) => v
                        .parse::<u16>()
                        .wrap_err_with(|| format!("MINDCARE_SMTP_PORT is not a port: {v}"))?,
                    None => DEFAULT_SMTP_PORT,
                };
                Some(SmtpConfig {
                    host: get("MINDCARE_SMTP_HOST").unwrap_or_else(|| DEFAULT_SMTP_HOST.to_string()),
                    port,
                    username,
                    password,
                    sender: get("MINDCARE_SENDER"),
                })
            }
            _ => None,
        };

        Ok(Self {
            bind_addr: get("MINDCARE_BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            model_path: get("MINDCARE_MODEL_PATH")
                .unwrap_or_else(|| DEFAULT_MODEL_PATH.to_string())
                .into(),
            label_encoder_path: get("MINDCARE_LABEL_ENCODER_PATH")
                .unwrap_or_else(|| DEFAULT_LABEL_ENCODER_PATH.to_string())
                .into(),
            logo_path: get("MINDCARE_LOGO_PATH").map(PathBuf::from),
            scratch_dir: get("MINDCARE_SCRATCH_DIR").map(PathBuf::from),
            session_capacity,
            smtp,
        })
    }

    pub fn report_styles(&self) -> ReportStyles {
        ReportStyles {
            logo_path: self.logo_path.clone(),
            scratch_dir: self.scratch_dir.clone(),
            ..ReportStyles::default()
        }
    }
}
