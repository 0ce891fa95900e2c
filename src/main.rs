//! Registration backend server binary.

use inscricoes::{AppState, Config, build_router, storage};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,inscricoes=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env();
    tracing::info!(
        database = %config.database.url,
        host = %config.server.host,
        port = config.server.port,
        "configuration loaded"
    );

    let pool = storage::connect(&config.database).await?;
    storage::migrate(&pool).await?;
    tracing::info!("database ready");

    let state = AppState::new(pool, config.auth.clone());
    let router = build_router(state);

    let listener = tokio::net::TcpListener::bind(config.server.socket_addr()).await?;
    let addr = listener.local_addr()?;
    tracing::info!(%addr, "listening");

    axum::serve(listener, router)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutting down");
        })
        .await?;

    Ok(())
}
