use std::sync::Arc;

mod domain;
mod interfaces;
mod infrastructure;
pub mod errors;
pub mod settings;
pub mod constants;
pub mod graceful_shutdown;
pub mod background_task;

pub use domain::{aggregator, entities, localization, ordering, use_cases, validation};
pub use interfaces::{handlers, middlewares, repositories, routes};
pub use infrastructure::{auth, cors, db, limiter, utils};

use repositories::{
    admin::AdminRepository,
    profile::ProfileRepository,
    sqlx_repo::{SqlxAdminRepo, SqlxProfileRepo},
};
use use_cases::{admin::AdminHandler, auth::AuthHandler, profile::ProfileHandler};

pub type AppProfileHandler = ProfileHandler<dyn ProfileRepository>;
pub type AppAdminHandler = AdminHandler<dyn AdminRepository>;

pub struct AppState {
    pub config: settings::AppConfig,
    pub profile_handler: AppProfileHandler,
    pub admin_handler: AppAdminHandler,
    pub auth_handler: AuthHandler,
}

impl AppState {
    pub fn new(config: settings::AppConfig, pool: sqlx::PgPool) -> Self {
        let profile_repo = Arc::new(SqlxProfileRepo::new(pool.clone()));
        let admin_repo = Arc::new(SqlxAdminRepo::new(pool));

        Self::with_repositories(config, profile_repo, admin_repo)
    }

    /// Builds the state around any repository implementations.
    pub fn with_repositories(
        config: settings::AppConfig,
        profile_repo: Arc<dyn ProfileRepository>,
        admin_repo: Arc<dyn AdminRepository>,
    ) -> Self {
        let auth_handler = AuthHandler::new(&config);

        AppState {
            profile_handler: ProfileHandler::new(profile_repo),
            admin_handler: AdminHandler::new(admin_repo),
            auth_handler,
            config,
        }
    }
}
