use std::env;
use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use mindcare_classifier::ArtifactClassifier;
use mindcare_mail::ReportMailer;
use mindcare_server::config::AppConfig;
use mindcare_server::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = AppConfig::from_env()?;

    let classifier = ArtifactClassifier::load(&config.model_path, &config.label_encoder_path)?;

    let mailer = match &config.smtp {
        Some(smtp) => Some(ReportMailer::new(smtp)?),
        None => {
            tracing::warn!("SMTP credentials not set, email delivery disabled");
            None
        }
    };

    let state = AppState::new(
        Arc::new(classifier),
        config.report_styles(),
        mailer,
        config.session_capacity,
    );
    let app = mindcare_server::app(state);

    if env::var("AWS_LAMBDA_RUNTIME_API").is_ok() {
        tracing::info!("starting in Lambda runtime");
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
