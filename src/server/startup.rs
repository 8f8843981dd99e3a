use std::time::Duration;

use sea_orm::DatabaseConnection;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{
    catalog::{CatalogConfig, HttpCatalogClient},
    config::Config,
    error::Error,
};

const DB_CONNECT_ATTEMPTS: u32 = 5;
const DB_CONNECT_RETRY_DELAY: Duration = Duration::from_secs(2);

/// Install the global tracing subscriber
///
/// Logs are emitted as JSON with source file and line. `RUST_LOG` takes precedence over
/// the configured log level when it is set.
pub fn init_tracing(config: &Config) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.as_str()));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .json()
                .with_file(true)
                .with_line_number(true),
        )
        .init();
}

/// Build the character catalog client with the configured base URL, user agent & timeout
pub fn build_catalog_client(config: &Config) -> Result<HttpCatalogClient, Error> {
    let catalog_config = CatalogConfig::new(&config.catalog_url)
        .user_agent(&config.user_agent)
        .timeout(config.catalog_timeout);

    let catalog_client = HttpCatalogClient::new(catalog_config)?;

    Ok(catalog_client)
}

/// Connect to the database and run migrations
///
/// The connection is verified with a ping, retried up to 5 times 2 seconds apart so the
/// service can start alongside its database.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let mut attempt = 1;
    let db = loop {
        let result = match Database::connect(opt.clone()).await {
            Ok(db) => db.ping().await.map(|_| db),
            Err(err) => Err(err),
        };

        match result {
            Ok(db) => break db,
            Err(err) if attempt < DB_CONNECT_ATTEMPTS => {
                tracing::warn!(
                    error = %err,
                    attempt,
                    max_attempts = DB_CONNECT_ATTEMPTS,
                    "Failed to connect to database, retrying"
                );

                attempt += 1;
                tokio::time::sleep(DB_CONNECT_RETRY_DELAY).await;
            }
            Err(err) => {
                tracing::error!(
                    error = %err,
                    attempts = DB_CONNECT_ATTEMPTS,
                    "Failed to connect to database"
                );

                return Err(err.into());
            }
        }
    };

    tracing::info!("Connected to database");

    Migrator::up(&db, None).await?;

    tracing::info!("Database migrations completed");

    Ok(db)
}
