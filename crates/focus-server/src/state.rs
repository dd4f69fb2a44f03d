use focus_core::config::AppConfig;

/// Shared application state for the server.
///
/// Request handling is stateless; the state only carries the configuration
/// the router was built with.
#[derive(Clone)]
pub struct AppState {
    pub config: AppConfig,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self { config }
    }
}
