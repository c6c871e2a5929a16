use config::Config;

pub mod cache;
pub mod config;
pub mod error;
pub mod result;
pub mod routes;
pub mod utils;

use cache::SessionManager;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub sessions: SessionManager,
}
