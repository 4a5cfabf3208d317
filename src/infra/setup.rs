use crate::{
    adapters::{email::resend::ResendEmailSender, http::app_state::AppState},
    infra::{config::AppConfig, postgres_persistence},
    use_cases::registration::{EmailSender, RegistrationUseCases, StudentRepo},
};
use std::fs::File;
use std::sync::{Arc, Mutex};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub async fn init_app_state() -> anyhow::Result<AppState> {
    let config = AppConfig::from_env();

    let postgres_arc = Arc::new(postgres_persistence(&config.database_url).await?);

    let email = Arc::new(ResendEmailSender::new(
        config.resend_api_key.clone(),
        config.email_from.clone(),
    )?);

    let registration_use_cases = RegistrationUseCases::new(
        postgres_arc as Arc<dyn StudentRepo>,
        email as Arc<dyn EmailSender>,
        config.origin(),
        config.default_event.clone(),
        config.community_link.as_ref().map(|u| u.to_string()),
    );

    Ok(AppState {
        config: Arc::new(config),
        registration_use_cases: Arc::new(registration_use_cases),
    })
}

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "campus_events=debug,tower_http=debug".into());

    // Console (pretty logs)
    let console_layer = fmt::layer()
        .with_target(false)
        .with_level(true)
        .pretty();

    // File (structured JSON logs), skipped when the file cannot be created
    let json_layer = File::create("app.log").ok().map(|file| {
        fmt::layer()
            .json()
            .with_writer(Mutex::new(file))
            .with_current_span(true)
            .with_span_list(true)
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(json_layer)
        .try_init()
        .ok();
}
