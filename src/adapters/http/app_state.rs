use std::sync::Arc;

use crate::{infra::config::AppConfig, use_cases::registration::RegistrationUseCases};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub registration_use_cases: Arc<RegistrationUseCases>,
}
