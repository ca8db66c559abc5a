use std::sync::Arc;

use lifeguide_core::quiz::{QuizResultService, QuizResultServiceTrait};
use lifeguide_supabase::{
    SupabaseAuthProvider, SupabaseClient, SupabaseConfig, SupabaseQuizResultRepository,
};
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

use crate::config::Config;

pub struct AppState {
    pub quiz_result_service: Arc<dyn QuizResultServiceTrait>,
}

pub fn init_tracing() {
    let log_format = std::env::var("LG_LOG_FORMAT").unwrap_or_else(|_| "text".to_string());
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    if log_format.eq_ignore_ascii_case("json") {
        registry
            .with(fmt::layer().json().with_current_span(false))
            .init();
    } else {
        registry
            .with(fmt::layer().with_target(true).with_line_number(true))
            .init();
    }
}

pub async fn build_state(config: &Config) -> anyhow::Result<Arc<AppState>> {
    // The service-role key lets the server write results for any user it
    // has resolved from a bearer token.
    let supabase_config = SupabaseConfig::new(
        config.supabase_url.clone(),
        config.supabase_service_role_key.clone(),
    )
    .with_timeout(config.request_timeout);
    let client = SupabaseClient::new(&supabase_config)?;
    tracing::info!("Supabase project in use: {}", client.base_url());

    let quiz_result_service = QuizResultService::new(
        Arc::new(SupabaseAuthProvider::new(client.clone())),
        Arc::new(SupabaseQuizResultRepository::new(client)),
    );

    Ok(Arc::new(AppState {
        quiz_result_service: Arc::new(quiz_result_service),
    }))
}
