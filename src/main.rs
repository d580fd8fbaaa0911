pub mod api;
pub mod health;
pub mod modules;
pub mod shared;

pub use modules::portfolio;

use crate::api::openapi::ApiDoc;
use crate::portfolio::adapter::incoming::web::routes;
use crate::portfolio::adapter::outgoing::{
    InMemoryPortfolioStore, InMemoryWizardSessionStore, MinijinjaPageRenderer,
};
use crate::portfolio::application::ports::outgoing::PageRenderer;
use crate::portfolio::application::PortfolioUseCases;
use crate::shared::api::custom_json_config;
use crate::shared::config::AppConfig;

use actix_web::{web, App, HttpServer};
use anyhow::Context;
use std::sync::Arc;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub portfolio: PortfolioUseCases,
    pub renderer: Arc<dyn PageRenderer + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let env_file = AppConfig::load_dotenv();
    let config = AppConfig::from_env().context("Failed to read server configuration")?;
    info!(
        env_file = %env_file,
        rust_env = %config.rust_env,
        wizard_session_capacity = config.wizard_session_capacity,
        "Configuration loaded"
    );

    let server_url = config.server_url();

    // Stores live for the lifetime of the process; nothing is persisted.
    let store = InMemoryPortfolioStore::new();
    let sessions = InMemoryWizardSessionStore::with_capacity(config.wizard_session_capacity);
    let renderer = MinijinjaPageRenderer::new().context("Failed to register page templates")?;

    let state = AppState {
        portfolio: PortfolioUseCases::in_memory(store, sessions),
        renderer: Arc::new(renderer),
    };

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .app_data(custom_json_config())
            .configure(init_routes)
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", ApiDoc::openapi()),
            )
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await
    .context("Server terminated with an error")
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    // Health
    cfg.service(crate::health::health);
    // Pages
    cfg.service(routes::home_handler);
    cfg.service(routes::create_page_handler);
    // Must precede /create/{wizard_id}
    cfg.service(routes::template_selection_handler);
    cfg.service(routes::start_wizard_handler);
    cfg.service(routes::get_wizard_step_handler);
    cfg.service(routes::post_wizard_step_handler);
    cfg.service(routes::professionals_handler);
    cfg.service(routes::view_portfolio_handler);
    cfg.service(routes::edit_portfolio_handler);
    // JSON API
    cfg.service(routes::get_templates_handler);
    cfg.service(routes::get_portfolios_handler);
    cfg.service(routes::get_single_portfolio_handler);
    cfg.service(routes::create_portfolio_handler);
    cfg.service(routes::update_portfolio_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
