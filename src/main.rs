use capsule::server::{self, config::Config, error::Error, model::app::AppState, startup};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    startup::init_tracing(&config);

    if let Err(e) = run(config).await {
        tracing::error!(error = %e, "Server exited with an error");
        std::process::exit(1);
    }
}

async fn run(config: Config) -> Result<(), Error> {
    let catalog_client = startup::build_catalog_client(&config)?;
    let db = startup::connect_to_database(&config).await?;

    let router = server::router::routes().with_state(AppState { db, catalog_client });

    let listener = TcpListener::bind(("0.0.0.0", config.port)).await?;
    tracing::info!(address = %listener.local_addr()?, "Starting server");

    axum::serve(listener, router).await?;

    Ok(())
}
