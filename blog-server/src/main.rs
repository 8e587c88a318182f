use blog_server::infrastructure::config::AppConfig;
use blog_server::infrastructure::database::{create_pool, run_migrations};
use blog_server::infrastructure::logging::init_logging;
use blog_server::server::start_rest_server;
use blog_server::state::AppState;
use tracing::warn;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    init_logging();

    let config = AppConfig::from_env()?;

    let state = match config.database_url.as_deref() {
        Some(url) => {
            let pool = create_pool(url, config.database_max_connections).await?;
            run_migrations(&pool).await?;
            AppState::postgres(pool)
        }
        None => {
            warn!("DATABASE_URL is not set, data is kept in memory only");
            AppState::in_memory()
        }
    };

    start_rest_server(config, state).await
}
