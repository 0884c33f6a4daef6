mod routes;

use std::net::SocketAddr;

use anyhow::{Context, Result};
use common::Config;
use pipeline::NewsPipeline;
use routes::AppState;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables
    let _ = dotenv::dotenv();

    // Configure tracing
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    let config = Config::from_env()?;
    log_enabled_sources(&config);

    let pipeline = NewsPipeline::from_config(&config)?;
    let app = routes::router(
        AppState::new(pipeline, config.server.port),
        &config.server.static_dir,
    );

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    info!("News server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            info!("Received interrupt signal, shutting down...");
        })
        .await?;

    Ok(())
}

fn log_enabled_sources(config: &Config) {
    let sources = [
        ("GNews", config.gnews_api_key.is_some()),
        ("NewsAPI", config.news_api_key.is_some()),
        ("Naver", config.naver.is_some()),
        ("YouTube", config.youtube_api_key.is_some()),
        ("OpenAI", config.openai_api_key.is_some()),
    ];
    for (name, enabled) in sources {
        if enabled {
            info!("{} enabled", name);
        } else {
            info!("{} disabled (no credential)", name);
        }
    }
}
