pub mod assets;
pub mod config;
pub mod error;
pub mod observability;
pub mod routes;
pub mod template;
pub mod theme;

pub use routes::AppState;

/// Build the shared application state from an open pool and a validated
/// configuration.
pub fn build_state(pool: sqlx::SqlitePool, config: config::Config) -> AppState {
    AppState {
        theme: theme::Manager::new(config.default_theme()),
        contact_command: portfolio_contact::Command(pool.clone()),
        content: std::sync::Arc::new(portfolio_content::Catalog::sample()),
        config,
        pool,
    }
}

/// Create app router for testing
///
/// This builds the Axum router with all routes configured, useful for
/// integration testing without starting the full server.
pub fn create_app(pool: sqlx::SqlitePool, config: config::Config) -> axum::Router {
    routes::router(build_state(pool, config))
}
